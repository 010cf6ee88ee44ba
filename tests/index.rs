use anyhow::Result;
use camino::Utf8PathBuf;
use wenyan_registry::index::{RegistryError, build_index, index_json, write_index};
use wenyan_registry::model::{Author, PackageDeclaration};

fn decl(name: &str, repo: &str) -> PackageDeclaration {
    PackageDeclaration {
        name: name.to_string(),
        repo: repo.to_string(),
        description: None,
        author: None,
        aliases: vec![],
    }
}

fn decl_with_aliases(name: &str, repo: &str, aliases: &[&str]) -> PackageDeclaration {
    PackageDeclaration {
        aliases: aliases.iter().map(|a| a.to_string()).collect(),
        ..decl(name, repo)
    }
}

#[test]
fn packages_and_aliases_map_exactly() -> Result<()> {
    let packages = vec![
        decl_with_aliases("甲", "user/jia", &["first", "one"]),
        decl_with_aliases("乙", "user/yi", &["second"]),
        decl("丙", "user/bing"),
    ];

    let index = build_index(&packages)?;

    let names: Vec<&str> = index.packages.keys().map(String::as_str).collect();
    assert_eq!(names, ["丙", "乙", "甲"], "package keys are the declared names, sorted");

    let aliases: Vec<(&str, &str)> = index
        .alias
        .iter()
        .map(|(a, n)| (a.as_str(), n.as_str()))
        .collect();
    assert_eq!(
        aliases,
        [("first", "甲"), ("one", "甲"), ("second", "乙")],
        "every alias resolves to its owning package"
    );
    Ok(())
}

#[test]
fn entry_url_and_author_flattening() -> Result<()> {
    let mut pkg = decl("範", "wenyan-lang/fan");
    pkg.description = Some("示範也".to_string());
    pkg.author = Some(Author::Linked {
        name: "某".to_string(),
        url: "https://example.org".to_string(),
    });

    let index = build_index(&[pkg])?;
    let entry = &index.packages["範"];
    assert_eq!(entry.entry, "https://raw.githubusercontent.com/wenyan-lang/fan/master/序.wy");
    assert_eq!(entry.repo, "wenyan-lang/fan");
    assert_eq!(entry.description.as_deref(), Some("示範也"));
    assert_eq!(entry.author.as_deref(), Some("某"), "structured author flattens to its name");
    Ok(())
}

#[test]
fn duplicate_package_name_fails() {
    let packages = vec![decl("甲", "user/a"), decl("甲", "user/b")];
    assert_eq!(
        build_index(&packages).unwrap_err(),
        RegistryError::DuplicatePackageName("甲".to_string())
    );
}

#[test]
fn package_name_colliding_with_alias_fails() {
    let packages = vec![decl_with_aliases("甲", "user/a", &["乙"]), decl("乙", "user/b")];
    // "乙" was registered as an alias by the first declaration; checked under
    // the name-side collision kind when it later appears as a package name.
    assert_eq!(
        build_index(&packages).unwrap_err(),
        RegistryError::NameAliasCollision("乙".to_string())
    );
}

#[test]
fn alias_colliding_with_package_name_fails() {
    let packages = vec![decl("甲", "user/a"), decl_with_aliases("乙", "user/b", &["甲"])];
    assert_eq!(
        build_index(&packages).unwrap_err(),
        RegistryError::AliasPackageCollision("甲".to_string())
    );
}

#[test]
fn duplicate_alias_fails_on_second_occurrence() {
    let packages = vec![decl_with_aliases("甲", "user/a", &["x", "x"])];
    assert_eq!(
        build_index(&packages).unwrap_err(),
        RegistryError::DuplicateAlias("x".to_string())
    );
}

#[test]
fn six_aliases_fail_before_any_registers() {
    let first = decl_with_aliases("甲", "user/a", &["a1", "a2", "a3", "a4", "a5", "a6"]);
    let packages = vec![first, decl("乙", "user/b")];
    assert_eq!(
        build_index(&packages).unwrap_err(),
        RegistryError::TooManyAliases("甲".to_string())
    );

    // None of the six aliases leaked into the namespace: a later package may
    // reuse one freely once the offending declaration is dropped.
    let retry = vec![decl_with_aliases("乙", "user/b", &["a1"])];
    assert!(build_index(&retry).is_ok());
}

#[test]
fn serialization_is_canonical_and_deterministic() -> Result<()> {
    // Declaration order differs from key order on purpose.
    let packages = vec![
        decl_with_aliases("zeta", "user/zeta", &["z"]),
        decl("alpha", "user/alpha"),
    ];

    let first = index_json(&build_index(&packages)?)?;
    let second = index_json(&build_index(&packages)?)?;
    assert_eq!(first, second, "same input serializes byte-identically");

    assert_eq!(
        first,
        concat!(
            r#"{"alias":{"z":"zeta"},"packages":"#,
            r#"{"alpha":{"entry":"https://raw.githubusercontent.com/user/alpha/master/序.wy","repo":"user/alpha"},"#,
            r#""zeta":{"entry":"https://raw.githubusercontent.com/user/zeta/master/序.wy","repo":"user/zeta"}}}"#,
            "\n"
        ),
        "keys sorted at every level, optional fields omitted, trailing newline"
    );
    Ok(())
}

#[test]
fn write_index_creates_dist_and_overwrites() -> Result<()> {
    let dir = tempfile::tempdir()?;
    let dist = Utf8PathBuf::from_path_buf(dir.path().join("dist")).expect("utf-8 tempdir");

    let index = build_index(&[decl("甲", "user/a")])?;
    let path = write_index(&index, &dist)?;
    assert_eq!(path, dist.join("index.json"));

    let stale = build_index(&[decl("乙", "user/b")])?;
    write_index(&stale, &dist)?;
    let on_disk = std::fs::read_to_string(path.as_std_path())?;
    assert_eq!(on_disk, index_json(&stale)?, "prior file is overwritten whole");
    assert!(on_disk.ends_with("}\n"), "single trailing newline");
    Ok(())
}
