use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

// ────────────────────────────────────────────────────────────────────────────
// Author
// ────────────────────────────────────────────────────────────────────────────

/// Package author, either a bare name or a name with a homepage link.
///
/// Declarations may spell the author as a plain string (`"author": "某"`) or
/// as an object (`"author": {"name": "某", "url": "…"}`). The two forms are
/// resolved explicitly where they are consumed: the index flattens to the
/// plain name, the README renders the linked form as a markdown link.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Author {
    Plain(String),
    Linked { name: String, url: String },
}

impl Author {
    /// The author's name, regardless of form.
    pub fn name(&self) -> &str {
        match self {
            Author::Plain(name) => name,
            Author::Linked { name, .. } => name,
        }
    }

    /// Markdown rendering: the plain form as-is, the linked form as
    /// `[name](url)`.
    pub fn markdown(&self) -> String {
        match self {
            Author::Plain(name) => name.clone(),
            Author::Linked { name, url } => format!("[{}]({})", name, url),
        }
    }
}

// ────────────────────────────────────────────────────────────────────────────
// PackageDeclaration
// ────────────────────────────────────────────────────────────────────────────

/// One package as declared in the registry source list.
///
/// Declarations are external input and immutable for a run; both builders
/// take them by slice and never mutate them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PackageDeclaration {
    /// Unique package name; shares a namespace with all aliases.
    pub name: String,
    /// Repository identifier, `owner/name` with an optional `#ref` suffix.
    pub repo: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub author: Option<Author>,
    /// Alternate lookup names, at most 5 per package.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub aliases: Vec<String>,
}

// ────────────────────────────────────────────────────────────────────────────
// RegistryIndex
// ────────────────────────────────────────────────────────────────────────────

/// One package's entry in the serialized index.
///
/// Fields are declared in sorted key order and `None` fields are omitted, so
/// plain `serde_json` output is already the canonical form (every object key
/// sorted, no nulls).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PackageEntry {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub author: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Raw URL of the package entry file (`序.wy` at the repo's raw root).
    pub entry: String,
    pub repo: String,
}

/// The validated package index written to `dist/index.json`.
///
/// `BTreeMap` keeps both mappings key-sorted independent of insertion order,
/// which makes the serialization deterministic and diff-stable.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegistryIndex {
    /// alias → canonical package name.
    pub alias: BTreeMap<String, String>,
    /// package name → entry.
    pub packages: BTreeMap<String, PackageEntry>,
}
