use crate::areas::index::Index;
use crate::areas::workspace::Workspace;
use crate::artifacts::index::index_entry::IndexEntry;
use crate::artifacts::status::file_change::{IndexChangeType, WorkspaceChangeType};
use derive_new::new;
use std::collections::BTreeSet;
use std::path::PathBuf;

/// Classifies index entries and working files
///
/// Entries are expected to have been refreshed right before, so their
/// current digest reflects the working tree.
#[derive(new)]
pub struct Inspector<'r> {
    workspace: &'r Workspace,
}

impl<'r> Inspector<'r> {
    pub fn check_index_against_workspace(&self, entry: &IndexEntry) -> WorkspaceChangeType {
        match &entry.hash_current {
            _ if !entry.is_unstaged() => WorkspaceChangeType::None,
            None => WorkspaceChangeType::Deleted,
            Some(_) => WorkspaceChangeType::Modified,
        }
    }

    pub fn check_index_against_commit(&self, entry: &IndexEntry) -> IndexChangeType {
        match &entry.hash_committed {
            _ if !entry.is_staged() => IndexChangeType::None,
            None => IndexChangeType::Added,
            Some(_) => IndexChangeType::Modified,
        }
    }

    /// Every working file the index does not track
    pub fn untracked_files(&self, index: &Index) -> anyhow::Result<BTreeSet<PathBuf>> {
        Ok(self
            .workspace
            .list_files(None)?
            .into_iter()
            .filter(|path| !index.is_tracked(path))
            .collect())
    }
}
