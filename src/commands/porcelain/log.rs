use crate::areas::repository::Repository;
use crate::artifacts::objects::commit::CommitRecord;
use crate::artifacts::objects::commit_id::CommitId;
use colored::Colorize;
use std::io::Write;

impl Repository {
    /// Show every recorded commit, newest first
    pub fn log(&self) -> anyhow::Result<()> {
        let ids = self.history().commit_ids()?;

        if ids.is_empty() {
            writeln!(
                self.writer(),
                "fatal: your current branch '{}' does not have any commits yet",
                self.refs().current_branch()?
            )?;
            return Ok(());
        }

        for (position, id) in ids.iter().enumerate() {
            if position > 0 {
                writeln!(self.writer())?;
            }

            let record = self.history().read_commit(id)?;
            self.show_commit_medium(id, &record)?;
        }

        Ok(())
    }

    fn show_commit_medium(&self, id: &CommitId, record: &CommitRecord) -> anyhow::Result<()> {
        let mut writer = self.writer();

        writeln!(writer, "{}", format!("commit {id}").yellow())?;
        writeln!(writer, "Author: {}", record.author())?;
        writeln!(writer, "Date:   {}", record.readable_date()?)?;
        writeln!(writer)?;
        for message_line in record.message().lines() {
            writeln!(writer, "    {}", message_line)?;
        }

        Ok(())
    }
}
