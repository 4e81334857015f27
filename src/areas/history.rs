//! Commit records and snapshots
//!
//! Both live in flat directories keyed by commit id:
//! `.lgit/commits/<id>` and `.lgit/snapshots/<id>`. Files are created with
//! exclusive-create, so an existing record is never overwritten.

use crate::artifacts::objects::commit::CommitRecord;
use crate::artifacts::objects::commit_id::CommitId;
use crate::artifacts::objects::object::{Packable, Unpackable};
use crate::artifacts::objects::snapshot::Snapshot;
use anyhow::Context;
use chrono::NaiveDateTime;
use derive_new::new;
use std::io::Write;
use std::path::Path;

#[derive(Debug, new)]
pub struct History {
    commits_path: Box<Path>,
    snapshots_path: Box<Path>,
}

impl History {
    pub fn commits_path(&self) -> &Path {
        &self.commits_path
    }

    pub fn snapshots_path(&self) -> &Path {
        &self.snapshots_path
    }

    /// All commit ids, newest first
    pub fn commit_ids(&self) -> anyhow::Result<Vec<CommitId>> {
        if !self.commits_path.is_dir() {
            return Ok(Vec::new());
        }

        let mut ids = std::fs::read_dir(&self.commits_path)
            .with_context(|| format!("Unable to list {}", self.commits_path.display()))?
            .filter_map(|entry| entry.ok())
            .filter(|entry| entry.path().is_file())
            .filter_map(|entry| entry.file_name().to_str().map(str::to_string))
            .filter_map(|name| match CommitId::try_parse(&name) {
                Ok(id) => Some(id),
                Err(error) => {
                    tracing::warn!(file = %name, %error, "skipping stray file in commits");
                    None
                }
            })
            .collect::<Vec<_>>();

        ids.sort_unstable_by(|a, b| b.cmp(a));
        Ok(ids)
    }

    pub fn newest(&self) -> anyhow::Result<Option<CommitId>> {
        Ok(self.commit_ids()?.into_iter().next())
    }

    pub fn is_empty(&self) -> anyhow::Result<bool> {
        Ok(self.commit_ids()?.is_empty())
    }

    /// A fresh id strictly newer than every recorded commit
    pub fn allocate_id(&self, now: NaiveDateTime) -> anyhow::Result<CommitId> {
        let id = CommitId::allocate(now, self.newest()?.as_ref());
        tracing::debug!(commit = %id, "allocated commit id");

        Ok(id)
    }

    pub fn write_commit(&self, id: &CommitId, record: &CommitRecord) -> anyhow::Result<()> {
        write_new_file(&self.commits_path.join(id.as_ref()), &record.serialize()?)
    }

    pub fn read_commit(&self, id: &CommitId) -> anyhow::Result<CommitRecord> {
        let path = self.commits_path.join(id.as_ref());
        let file = std::fs::File::open(&path)
            .with_context(|| format!("Unable to open commit record {}", path.display()))?;

        CommitRecord::deserialize(std::io::BufReader::new(file))
            .with_context(|| format!("Unable to parse commit record {id}"))
    }

    pub fn write_snapshot(&self, id: &CommitId, snapshot: &Snapshot) -> anyhow::Result<()> {
        write_new_file(&self.snapshots_path.join(id.as_ref()), &snapshot.serialize()?)
    }

    /// Remove the record and snapshot of a commit that could not be completed
    pub fn discard_commit(&self, id: &CommitId) {
        for path in [
            self.commits_path.join(id.as_ref()),
            self.snapshots_path.join(id.as_ref()),
        ] {
            if path.is_file()
                && let Err(error) = std::fs::remove_file(&path)
            {
                tracing::warn!(path = %path.display(), %error, "unable to discard partial commit");
            }
        }
    }

    pub fn read_snapshot(&self, id: &CommitId) -> anyhow::Result<Snapshot> {
        let path = self.snapshots_path.join(id.as_ref());
        let file = std::fs::File::open(&path)
            .with_context(|| format!("Unable to open snapshot {}", path.display()))?;

        Snapshot::deserialize(std::io::BufReader::new(file))
    }
}

/// Create `path` with `content`, failing if it already exists
pub(crate) fn write_new_file(path: &Path, content: &[u8]) -> anyhow::Result<()> {
    let mut file = std::fs::OpenOptions::new()
        .write(true)
        .create_new(true)
        .open(path)
        .with_context(|| format!("Unable to create {}", path.display()))?;
    file.write_all(content)
        .with_context(|| format!("Unable to write {}", path.display()))?;

    Ok(())
}
