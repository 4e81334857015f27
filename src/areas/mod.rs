//! Core repository components
//!
//! This module contains the storage areas of a repository:
//!
//! - `config`: Author name used for commits
//! - `database`: Content-addressed object store for file blobs
//! - `history`: Commit records and snapshots keyed by commit id
//! - `index`: Staging area tracking current, staged and committed digests
//! - `lock`: Repository-wide write lock
//! - `refs`: HEAD and branch heads
//! - `repository`: The context value tying every area together
//! - `stash`: Ad-hoc copies of working files
//! - `workspace`: Working directory file system operations

pub(crate) mod config;
pub(crate) mod database;
pub(crate) mod history;
pub(crate) mod index;
pub(crate) mod lock;
pub(crate) mod refs;
pub mod repository;
pub(crate) mod stash;
pub(crate) mod workspace;
