//! Branch references
//!
//! `HEAD` is a symbolic ref naming the current branch. Each branch head is a
//! file under `refs/heads/` holding the id of the newest commit made on it.
//!
//! ## File Format
//!
//! - `HEAD`: `ref: refs/heads/<branch>`
//! - `refs/heads/<branch>`: a commit id
//!
//! A branch head file only exists once the branch has a commit; until then
//! `HEAD` names a branch without a head.

use crate::artifacts::branch::branch_name::{BranchName, SymRefName};
use crate::artifacts::objects::commit_id::CommitId;
use crate::errors::LgitError;
use anyhow::Context;
use derive_new::new;
use file_guard::Lock;
use std::io::Write;
use std::ops::DerefMut;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// Regex pattern for parsing symbolic references
const SYMREF_REGEX: &str = r"^ref: (.+)$";

/// Name of the HEAD reference
pub const HEAD_REF_NAME: &str = "HEAD";

#[derive(Debug, new)]
pub struct Refs {
    /// Path to the metadata directory (typically `.lgit`)
    path: Box<Path>,
}

/// Parsed content of a ref file
#[derive(Debug, Clone)]
enum SymRefOrId {
    SymRef { sym_ref_name: SymRefName },
    Id(CommitId),
}

impl SymRefOrId {
    fn read_symref_or_id(path: &Path) -> anyhow::Result<Option<SymRefOrId>> {
        if !path.exists() {
            return Ok(None);
        }

        let content = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read ref file at {:?}", path))?;
        let content = content.trim();

        if content.is_empty() {
            return Ok(None);
        }

        let symref_match = regex::Regex::new(SYMREF_REGEX)?.captures(content);
        if let Some(symref_match) = symref_match {
            Ok(Some(SymRefOrId::SymRef {
                sym_ref_name: SymRefName::new(symref_match[1].to_string()),
            }))
        } else {
            Ok(Some(SymRefOrId::Id(CommitId::try_parse(content)?)))
        }
    }
}

impl Refs {
    /// The ref HEAD resolves to, e.g. `refs/heads/master`
    pub fn current_ref(&self) -> anyhow::Result<SymRefName> {
        self.follow(SymRefName::new(HEAD_REF_NAME.to_string()))
    }

    fn follow(&self, source: SymRefName) -> anyhow::Result<SymRefName> {
        let ref_content = SymRefOrId::read_symref_or_id(&self.path.join(source.as_ref_path()))?;

        match ref_content {
            Some(SymRefOrId::SymRef { sym_ref_name }) => self.follow(sym_ref_name),
            Some(SymRefOrId::Id(_)) | None => Ok(source),
        }
    }

    pub fn current_branch(&self) -> anyhow::Result<BranchName> {
        Ok(BranchName::try_parse_sym_ref_name(&self.current_ref()?)?)
    }

    /// Head commit of the current branch
    pub fn read_head(&self) -> anyhow::Result<Option<CommitId>> {
        self.read_symref(&self.head_path())
    }

    /// Move the current branch to `id`, creating its head file if needed
    pub fn update_head(&self, id: &CommitId) -> anyhow::Result<()> {
        let current_ref = self.current_ref()?;
        self.update_ref_file(&self.path.join(current_ref.as_ref_path()), id.as_ref())
    }

    /// Point HEAD at a branch
    pub fn set_head(&self, branch_name: &BranchName) -> anyhow::Result<()> {
        self.update_ref_file(
            &self.head_path(),
            &format!("ref: {}", SymRefName::from(branch_name)),
        )
    }

    pub fn read_branch(&self, branch_name: &BranchName) -> anyhow::Result<Option<CommitId>> {
        self.read_symref(&self.heads_path().join(branch_name.as_ref()))
    }

    fn read_symref(&self, path: &Path) -> anyhow::Result<Option<CommitId>> {
        match SymRefOrId::read_symref_or_id(path)? {
            Some(SymRefOrId::SymRef { sym_ref_name }) => {
                self.read_symref(&self.path.join(sym_ref_name.as_ref_path()))
            }
            Some(SymRefOrId::Id(id)) => Ok(Some(id)),
            None => Ok(None),
        }
    }

    fn update_ref_file(&self, path: &Path, raw_ref: &str) -> anyhow::Result<()> {
        std::fs::create_dir_all(path.parent().with_context(|| {
            format!(
                "failed to create parent directories for ref file at {:?}",
                path
            )
        })?)?;

        let mut ref_file = std::fs::OpenOptions::new()
            .write(true)
            .create(true)
            .truncate(true)
            .open(path)
            .with_context(|| format!("failed to open ref file at {:?}", path))?;
        let mut lock = file_guard::lock(&mut ref_file, Lock::Exclusive, 0, 1)?;
        lock.deref_mut().write_all(raw_ref.as_bytes())?;

        Ok(())
    }

    /// Create a branch pointing at `id` together with its object namespace
    pub fn create_branch(&self, name: &BranchName, id: &CommitId) -> anyhow::Result<()> {
        let branch_path = self.heads_path().join(name.as_ref());

        if branch_path.exists() {
            return Err(LgitError::BranchExists(name.to_string()).into());
        }

        self.update_ref_file(&branch_path, id.as_ref())?;

        let objects_path = self.branch_objects_path(name);
        std::fs::create_dir_all(&objects_path)
            .with_context(|| format!("failed to create {:?}", objects_path))?;

        tracing::debug!(branch = %name, commit = %id, "created branch");
        Ok(())
    }

    /// Branches that have a head file, sorted by name
    pub fn list_branches(&self) -> anyhow::Result<Vec<BranchName>> {
        let heads_path = self.heads_path();

        let mut branches = WalkDir::new(&heads_path)
            .into_iter()
            .filter_map(|entry| entry.ok())
            .filter(|entry| entry.file_type().is_file())
            .filter_map(|entry| {
                let relative_path = entry.path().strip_prefix(&heads_path).ok()?;
                BranchName::try_parse(relative_path.to_string_lossy().to_string()).ok()
            })
            .collect::<Vec<_>>();

        branches.sort();
        Ok(branches)
    }

    /// Private object directory of a branch
    pub fn branch_objects_path(&self, name: &BranchName) -> PathBuf {
        self.path.join("branches").join(name.as_ref()).join("objects")
    }

    pub fn head_path(&self) -> PathBuf {
        self.path.join(HEAD_REF_NAME)
    }

    pub fn refs_path(&self) -> PathBuf {
        self.path.join("refs")
    }

    pub fn heads_path(&self) -> PathBuf {
        self.refs_path().join("heads")
    }
}
