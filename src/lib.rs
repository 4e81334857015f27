//! lgit - a minimal version control tool
//!
//! The storage core is a content-addressable object store, a three-state
//! staging index (working tree, staged, committed digests per path) and a
//! commit/snapshot history.
//!
//! - `areas`: on-disk areas of a repository (objects, index, history, refs, ...)
//! - `artifacts`: data structures stored in or derived from those areas
//! - `commands`: porcelain and plumbing commands implemented on `Repository`
//! - `errors`: typed error kinds surfaced to the user

pub mod areas;
pub mod artifacts;
pub mod commands;
pub mod errors;

/// Name of the repository metadata directory
pub const METADATA_DIR: &str = ".lgit";
