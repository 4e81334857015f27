use crate::areas::repository::Repository;
use std::io::Write;

impl Repository {
    /// List tracked paths at or below the invocation directory
    pub fn ls_files(&self) -> anyhow::Result<()> {
        let mut index = self.index();
        index.rehydrate()?;

        let prefix = self.cwd().strip_prefix(self.path()).unwrap_or(self.cwd());
        let mut paths = index
            .entries()
            .filter(|entry| entry.name.starts_with(prefix))
            .map(|entry| self.display_path(&entry.name))
            .collect::<Vec<_>>();
        paths.sort();

        for path in paths {
            writeln!(self.writer(), "{}", path.display())?;
        }

        Ok(())
    }
}
