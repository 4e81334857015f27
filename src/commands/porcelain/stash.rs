use crate::areas::repository::Repository;
use chrono::Local;
use std::io::Write;
use std::path::PathBuf;

impl Repository {
    /// Save copies of every changed tracked file; the index is left as is
    pub fn stash(&self) -> anyhow::Result<()> {
        let _lock = self.lock()?;

        let files = {
            let mut index = self.index();
            index.rehydrate()?;
            index.refresh_on_status(self.workspace())?;

            index
                .entries()
                .filter(|entry| entry.is_staged() || entry.is_unstaged())
                .filter(|entry| entry.hash_current.is_some())
                .map(|entry| entry.name.clone())
                .collect::<Vec<PathBuf>>()
        };

        if files.is_empty() {
            writeln!(self.writer(), "No local changes to save")?;
            return Ok(());
        }

        let (id, snapshot) = self.stashes().create_stash(
            &files,
            Local::now().naive_local(),
            self.workspace(),
            self.database(),
        )?;

        writeln!(
            self.writer(),
            "Saved working directory state {} ({} files)",
            id,
            snapshot.len()
        )?;

        Ok(())
    }

    pub fn stash_list(&self) -> anyhow::Result<()> {
        for (position, id) in self.stashes().list_stashes()?.iter().enumerate() {
            let snapshot = self.stashes().read_stash(id)?;
            writeln!(
                self.writer(),
                "stash@{{{}}}: {} ({} files)",
                position,
                id,
                snapshot.len()
            )?;
        }

        Ok(())
    }
}
