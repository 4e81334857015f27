use crate::areas::repository::Repository;
use crate::artifacts::status::file_change::FileChangeType;
use crate::artifacts::status::status_info::StatusInfo;
use colored::Colorize;
use std::io::Write;

const LABEL_WIDTH: usize = 8;

// Terminology:
// - staged files: tracked files whose staged digest differs from the committed one
// - unstaged files: tracked files whose working content differs from the staged one
// - untracked files: working files the index does not know about
impl Repository {
    pub fn status(&self) -> anyhow::Result<()> {
        let _lock = self.lock()?;
        let info = {
            let mut index = self.index();
            index.rehydrate()?;

            let info = self.working_status().initialize(&mut index)?;
            index.write_updates()?;
            info
        };

        self.print_status(&info)
    }

    pub(crate) fn print_status(&self, info: &StatusInfo) -> anyhow::Result<()> {
        let mut writer = self.writer();

        writeln!(writer, "On branch {}", info.branch())?;
        if !info.has_commits() {
            writeln!(writer, "\nNo commits yet")?;
        }

        if !info.staged().is_empty() {
            writeln!(writer, "\nChanges to be committed:")?;
            for (path, change) in info.staged() {
                writeln!(
                    writer,
                    "{}{}",
                    FileChangeType::Index(*change),
                    self.display_path(path).display().to_string().green()
                )?;
            }
        }

        if !info.unstaged().is_empty() {
            writeln!(writer, "\nChanges not staged for commit:")?;
            for (path, change) in info.unstaged() {
                writeln!(
                    writer,
                    "{}{}",
                    FileChangeType::Workspace(*change),
                    self.display_path(path).display().to_string().red()
                )?;
            }
        }

        if !info.untracked().is_empty() {
            writeln!(writer, "\nUntracked files:")?;
            for path in info.untracked() {
                writeln!(
                    writer,
                    "{:>width$}{}",
                    "",
                    self.display_path(path).display().to_string().red(),
                    width = LABEL_WIDTH
                )?;
            }
        }

        writeln!(writer)?;
        if !info.staged().is_empty() {
            return Ok(());
        }

        if !info.unstaged().is_empty() {
            writeln!(writer, "no changes added to commit")?;
        } else if !info.untracked().is_empty() {
            writeln!(writer, "nothing added to commit but untracked files present")?;
        } else if info.has_commits() {
            writeln!(writer, "nothing to commit, working tree clean")?;
        } else {
            writeln!(
                writer,
                "nothing to commit (create/copy files and use \"lgit add\" to track)"
            )?;
        }

        Ok(())
    }
}
