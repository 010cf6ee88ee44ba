//! Index Builder: validates package declarations into a [`RegistryIndex`]
//! and writes the canonical `dist/index.json`.

use crate::model::{PackageDeclaration, PackageEntry, RegistryIndex};
use crate::repo::repo_raw_root_url;
use anyhow::{Context, Result};
use camino::{Utf8Path, Utf8PathBuf};
use thiserror::Error;

/// Upper bound on aliases per package.
pub const MAX_ALIASES: usize = 5;

/// File name of the serialized index inside the dist directory.
pub const INDEX_FILE: &str = "index.json";

/// Validation failures while building the index.
///
/// All are fatal and raised at the first violation in declaration order,
/// before anything is written to disk. Package names and aliases share one
/// namespace, hence the two cross-collision kinds.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum RegistryError {
    #[error("package name {0} already exists")]
    DuplicatePackageName(String),
    #[error("package name {0} conflicts with an existing alias")]
    NameAliasCollision(String),
    #[error("package {0} declares more than {MAX_ALIASES} aliases")]
    TooManyAliases(String),
    #[error("alias {0} already exists")]
    DuplicateAlias(String),
    #[error("alias {0} conflicts with an existing package name")]
    AliasPackageCollision(String),
}

/// Builds the validated index from the declarations, in declaration order.
///
/// Pure: no file system involved. Use [`write_index`] to persist the result.
pub fn build_index(packages: &[PackageDeclaration]) -> Result<RegistryIndex, RegistryError> {
    let mut index = RegistryIndex::default();

    for pkg in packages {
        if index.packages.contains_key(&pkg.name) {
            return Err(RegistryError::DuplicatePackageName(pkg.name.clone()));
        }
        if index.alias.contains_key(&pkg.name) {
            return Err(RegistryError::NameAliasCollision(pkg.name.clone()));
        }

        index.packages.insert(
            pkg.name.clone(),
            PackageEntry {
                author: pkg.author.as_ref().map(|a| a.name().to_string()),
                description: pkg.description.clone(),
                entry: format!("{}/序.wy", repo_raw_root_url(&pkg.repo)),
                repo: pkg.repo.clone(),
            },
        );

        if pkg.aliases.len() > MAX_ALIASES {
            return Err(RegistryError::TooManyAliases(pkg.name.clone()));
        }

        for alias in &pkg.aliases {
            if index.alias.contains_key(alias) {
                return Err(RegistryError::DuplicateAlias(alias.clone()));
            }
            if index.packages.contains_key(alias) {
                return Err(RegistryError::AliasPackageCollision(alias.clone()));
            }
            index.alias.insert(alias.clone(), pkg.name.clone());
        }
    }

    Ok(index)
}

/// Canonical serialization of the index: compact JSON with every object key
/// sorted, terminated by a single newline. Byte-identical across runs for
/// the same input.
pub fn index_json(index: &RegistryIndex) -> Result<String> {
    let json = serde_json::to_string(index).context("Failed to serialize index")?;
    Ok(format!("{}\n", json))
}

/// Writes the canonical index into `<dist_dir>/index.json`, creating the
/// directory if needed and overwriting any prior file. Returns the written
/// path.
pub fn write_index(index: &RegistryIndex, dist_dir: &Utf8Path) -> Result<Utf8PathBuf> {
    let json = index_json(index)?;
    std::fs::create_dir_all(dist_dir.as_std_path())
        .with_context(|| format!("Failed to create {}", dist_dir))?;
    let path = dist_dir.join(INDEX_FILE);
    std::fs::write(path.as_std_path(), json).with_context(|| format!("Failed to write {}", path))?;
    Ok(path)
}
