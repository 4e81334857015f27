//! Error kinds surfaced by lgit
//!
//! Fatal kinds abort the running command. Pathspec kinds are collected per
//! argument and reported without stopping the rest of the batch.

use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum LgitError {
    #[error("not a git repository (or any of the parent directories)")]
    NotARepository,

    #[error("Invalid gitfile format: {}", .0.display())]
    InvalidMetadataLayout(PathBuf),

    #[error("pathspec '{0}' did not match any files")]
    PathspecNotFound(String),

    #[error("{0} '{0}' is outside repository")]
    OutsideRepository(String),

    #[error("path '{0}' is not valid UTF-8, skipping it")]
    NonUtf8Path(String),

    #[error("open(\"{}\"): Permission denied", .0.display())]
    PermissionDenied(PathBuf),

    #[error("corrupt index entry at line {line}: {reason}")]
    CorruptIndex { line: usize, reason: String },

    #[error("corrupt record {name}: {reason}")]
    CorruptRecord { name: String, reason: String },

    #[error("invalid object id: {0}")]
    InvalidObjectId(String),

    #[error("object {0} not found")]
    ObjectNotFound(String),

    #[error("a branch named '{0}' already exists")]
    BranchExists(String),

    #[error("'{0}' is not a valid branch name")]
    InvalidBranchName(String),

    #[error("not a valid object name: '{0}'")]
    NoCommitsYet(String),
}

impl LgitError {
    /// Pathspec problems are reported per argument and never abort a batch
    pub fn is_pathspec_error(&self) -> bool {
        matches!(
            self,
            LgitError::PathspecNotFound(_)
                | LgitError::OutsideRepository(_)
                | LgitError::NonUtf8Path(_)
        )
    }
}
