//! Stashes
//!
//! A stash is an ad-hoc copy of some working files: their blobs go to the
//! object store and `refs/stash/<id>` lists `<digest> <path>` for each, in the
//! snapshot format. The index is not touched.

use crate::areas::database::Database;
use crate::areas::history::write_new_file;
use crate::areas::workspace::Workspace;
use crate::artifacts::objects::commit_id::CommitId;
use crate::artifacts::objects::object::{Packable, Unpackable};
use crate::artifacts::objects::snapshot::Snapshot;
use anyhow::Context;
use chrono::NaiveDateTime;
use derive_new::new;
use std::path::{Path, PathBuf};

#[derive(Debug, new)]
pub struct Stashes {
    /// Path to the stash directory (typically `.lgit/refs/stash`)
    path: Box<Path>,
}

impl Stashes {
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Stash `files` under an id allocated at `now`
    ///
    /// Every file is checked for read access before anything is stored, so a
    /// single unreadable file leaves no stash and no new objects behind.
    pub fn create_stash(
        &self,
        files: &[PathBuf],
        now: NaiveDateTime,
        workspace: &Workspace,
        database: &Database,
    ) -> anyhow::Result<(CommitId, Snapshot)> {
        for file in files {
            workspace.ensure_readable(file)?;
        }

        let entries = files
            .iter()
            .map(|file| {
                let oid = database.put_file(&workspace.absolute(file))?;
                Ok((oid, file.clone()))
            })
            .collect::<anyhow::Result<Vec<_>>>()?;
        let snapshot = Snapshot::new(entries);

        std::fs::create_dir_all(&self.path)
            .with_context(|| format!("Unable to create {}", self.path.display()))?;
        let id = CommitId::allocate(now, self.list_stashes()?.first());
        write_new_file(&self.path.join(id.as_ref()), &snapshot.serialize()?)?;

        tracing::debug!(stash = %id, files = snapshot.len(), "created stash");
        Ok((id, snapshot))
    }

    /// Stash ids, newest first
    pub fn list_stashes(&self) -> anyhow::Result<Vec<CommitId>> {
        if !self.path.is_dir() {
            return Ok(Vec::new());
        }

        let mut ids = std::fs::read_dir(&self.path)
            .with_context(|| format!("Unable to list {}", self.path.display()))?
            .filter_map(|entry| entry.ok())
            .filter_map(|entry| entry.file_name().to_str().map(str::to_string))
            .filter_map(|name| match CommitId::try_parse(&name) {
                Ok(id) => Some(id),
                Err(error) => {
                    tracing::warn!(file = %name, %error, "skipping stray file in stashes");
                    None
                }
            })
            .collect::<Vec<_>>();

        ids.sort_unstable_by(|a, b| b.cmp(a));
        Ok(ids)
    }

    pub fn read_stash(&self, id: &CommitId) -> anyhow::Result<Snapshot> {
        let path = self.path.join(id.as_ref());
        let file = std::fs::File::open(&path)
            .with_context(|| format!("Unable to open stash {}", path.display()))?;

        Snapshot::deserialize(std::io::BufReader::new(file))
    }
}
