use crate::areas::index::Index;
use crate::areas::repository::Repository;
use crate::artifacts::branch::branch_name::BranchName;
use crate::artifacts::status::file_change::{IndexChangeType, WorkspaceChangeType};
use crate::artifacts::status::inspector::Inspector;
use derive_new::new;
use std::collections::{BTreeMap, BTreeSet};
use std::path::PathBuf;

pub type IndexChangeSet = BTreeMap<PathBuf, IndexChangeType>;
pub type WorkspaceChangeSet = BTreeMap<PathBuf, WorkspaceChangeType>;
pub type FileSet = BTreeSet<PathBuf>;

/// Three-way classification of the repository at one point in time
///
/// A path can be both staged and unstaged, e.g. when it was edited again
/// after `add`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusInfo {
    pub(crate) branch: BranchName,
    pub(crate) has_commits: bool,
    pub(crate) staged: IndexChangeSet,
    pub(crate) unstaged: WorkspaceChangeSet,
    pub(crate) untracked: FileSet,
}

impl StatusInfo {
    pub fn branch(&self) -> &BranchName {
        &self.branch
    }

    pub fn has_commits(&self) -> bool {
        self.has_commits
    }

    pub fn staged(&self) -> &IndexChangeSet {
        &self.staged
    }

    pub fn unstaged(&self) -> &WorkspaceChangeSet {
        &self.unstaged
    }

    pub fn untracked(&self) -> &FileSet {
        &self.untracked
    }
}

#[derive(new)]
pub struct Status<'r> {
    repository: &'r Repository,
}

impl<'r> Status<'r> {
    /// Refresh the working digests of `index` and classify every path
    ///
    /// The caller decides whether the refreshed index is written back.
    pub fn initialize(&self, index: &mut Index) -> anyhow::Result<StatusInfo> {
        let workspace = self.repository.workspace();
        let inspector = Inspector::new(workspace);

        index.refresh_on_status(workspace)?;

        let mut staged = IndexChangeSet::new();
        let mut unstaged = WorkspaceChangeSet::new();
        for entry in index.entries() {
            match inspector.check_index_against_commit(entry) {
                IndexChangeType::None => {}
                change => {
                    staged.insert(entry.name.clone(), change);
                }
            }
            match inspector.check_index_against_workspace(entry) {
                WorkspaceChangeType::None => {}
                change => {
                    unstaged.insert(entry.name.clone(), change);
                }
            }
        }

        Ok(StatusInfo {
            branch: self.repository.refs().current_branch()?,
            has_commits: self.repository.refs().read_head()?.is_some(),
            staged,
            unstaged,
            untracked: inspector.untracked_files(index)?,
        })
    }
}
