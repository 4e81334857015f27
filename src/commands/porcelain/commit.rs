use crate::areas::repository::Repository;
use crate::artifacts::objects::commit::CommitRecord;
use crate::artifacts::objects::commit_id::CommitId;
use crate::artifacts::objects::snapshot::Snapshot;
use crate::artifacts::status::status_info::StatusInfo;
use chrono::{Local, NaiveDateTime};
use std::io::Write;

/// What a commit attempt did
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CommitOutcome {
    Committed(CommitId),
    /// Nothing was staged; carries the status that was shown instead
    NothingToCommit(StatusInfo),
}

impl Repository {
    pub fn commit(&self, message: &str) -> anyhow::Result<CommitOutcome> {
        let _lock = self.lock()?;
        let outcome = self.commit_index(message, Local::now().naive_local())?;

        match &outcome {
            CommitOutcome::Committed(id) => {
                let record = self.history().read_commit(id)?;
                let is_root = match record.parent() {
                    Some(_) => "",
                    None => "(root-commit) ",
                };

                writeln!(
                    self.writer(),
                    "[{} {}{}] {}",
                    self.refs().current_branch()?,
                    is_root,
                    id,
                    record.short_message()
                )?;
            }
            CommitOutcome::NothingToCommit(info) => self.print_status(info)?,
        }

        Ok(outcome)
    }

    /// Record the staged state of the index as a new commit made at `now`
    pub fn commit_index(&self, message: &str, now: NaiveDateTime) -> anyhow::Result<CommitOutcome> {
        let mut index = self.index();

        // Load the index file from the disk
        index.rehydrate()?;

        let info = self.working_status().initialize(&mut index)?;
        if info.staged().is_empty() {
            index.write_updates()?;
            return Ok(CommitOutcome::NothingToCommit(info));
        }

        let id = self.history().allocate_id(now)?;
        let record = CommitRecord::new(
            self.config().author()?,
            id.seconds().to_string(),
            self.refs().read_head()?,
            message.trim_end().to_string(),
        );

        // the index is only saved once the commit is recorded
        index.advance_on_commit(self.workspace())?;
        let snapshot = Snapshot::new(index.entries().filter_map(|entry| {
            entry
                .hash_committed
                .clone()
                .map(|oid| (oid, entry.name.clone()))
        }));

        self.history().write_commit(&id, &record)?;
        if let Err(error) = self
            .history()
            .write_snapshot(&id, &snapshot)
            .and_then(|_| self.refs().update_head(&id))
        {
            self.history().discard_commit(&id);
            return Err(error);
        }
        index.write_updates()?;

        tracing::debug!(commit = %id, files = snapshot.len(), "created commit");

        Ok(CommitOutcome::Committed(id))
    }
}
