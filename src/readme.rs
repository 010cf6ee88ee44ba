//! Readme Builder: renders the package listing and splices it into the
//! README between the sentinel markers.

use crate::model::PackageDeclaration;
use crate::repo::repo_root_url;
use anyhow::{Context, Result};
use camino::Utf8Path;
use icu_collator::{Collator, options::CollatorOptions};
use icu_locale_core::locale;

/// Opening sentinel of the auto-generated region.
pub const LIST_START: &str = "<!--package_list_start-->";
/// Closing sentinel of the auto-generated region.
pub const LIST_END: &str = "<!--package_list_end-->";

/// Renders the markdown package listing, one line per package, framed by a
/// leading and a trailing blank line.
///
/// Packages are sorted by name under zh-TW (Traditional Chinese) collation;
/// this ordering is part of the listing's contract, not incidental. The
/// input slice is left untouched — a sorted copy of references is used.
pub fn render_package_list(packages: &[PackageDeclaration]) -> Result<String> {
    let collator = Collator::try_new(locale!("zh-TW").into(), CollatorOptions::default())
        .context("Failed to load zh-TW collation data")?;

    let mut sorted: Vec<&PackageDeclaration> = packages.iter().collect();
    sorted.sort_by(|a, b| collator.compare(&a.name, &b.name));

    let mut out = String::from("\n\n");
    for pkg in sorted {
        out.push_str(&format!("- [{}]({})", pkg.name, repo_root_url(&pkg.repo)));
        if let Some(description) = &pkg.description {
            out.push_str(&format!(" - {}", description));
        }
        if let Some(author) = &pkg.author {
            out.push_str(&format!(" - by {}", author.markdown()));
        }
        out.push('\n');
    }
    out.push('\n');
    Ok(out)
}

/// Replaces the first region between [`LIST_START`] and [`LIST_END`]
/// (markers kept, shortest match) with `fragment`.
///
/// A document without both markers passes through unchanged; missing
/// markers are deliberately not an error.
pub fn splice_package_list(document: &str, fragment: &str) -> String {
    let Some(start) = document.find(LIST_START) else {
        return document.to_string();
    };
    let interior = start + LIST_START.len();
    let Some(end) = document[interior..].find(LIST_END) else {
        return document.to_string();
    };
    format!(
        "{}{}{}",
        &document[..interior],
        fragment,
        &document[interior + end..]
    )
}

/// Regenerates the listing inside the README at `readme_path`, rewriting the
/// file in place. Returns the rendered fragment.
pub fn update_readme(readme_path: &Utf8Path, packages: &[PackageDeclaration]) -> Result<String> {
    let fragment = render_package_list(packages)?;
    let raw = std::fs::read_to_string(readme_path.as_std_path())
        .with_context(|| format!("Failed to read {}", readme_path))?;
    let patched = splice_package_list(&raw, &fragment);
    std::fs::write(readme_path.as_std_path(), patched)
        .with_context(|| format!("Failed to write {}", readme_path))?;
    Ok(fragment)
}
