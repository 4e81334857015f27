//! Command implementations
//!
//! Commands are `impl Repository` blocks, organized into two categories:
//!
//! - `plumbing`: Low-level commands for direct object access (hash-object, cat-file)
//! - `porcelain`: User-facing commands for version control workflows (add, commit, log, etc.)

pub mod plumbing;
pub mod porcelain;

use crate::areas::repository::Repository;
use crate::errors::LgitError;
use std::io::Write;

impl Repository {
    /// Print non-fatal pathspec diagnostics; the rest of the batch proceeds
    pub(crate) fn report_pathspec_errors<'e>(
        &self,
        errors: impl IntoIterator<Item = &'e LgitError>,
    ) -> anyhow::Result<()> {
        for error in errors {
            tracing::warn!(%error, "skipping pathspec");
            writeln!(self.writer(), "fatal: {error}")?;
        }

        Ok(())
    }
}
