//! wenyan-lang package registry builder.
//!
//! This crate turns a static list of package declarations into two build
//! artifacts:
//!
//! - a validated, deduplicated package index with alias resolution,
//!   serialized canonically to `dist/index.json` ([`index`]);
//! - a human-readable package listing spliced into `README.md` between two
//!   sentinel comments ([`readme`]).
//!
//! Both builders are pure functions of the declaration slice; file writes
//! live in thin wrappers (`write_index`, `update_readme`) so the core stays
//! testable without touching the file system. The `wenyan-registry` binary
//! wires both against the real file system.

pub mod index;
pub mod model;
pub mod readme;
pub mod repo;
