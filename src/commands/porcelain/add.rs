use crate::areas::repository::Repository;
use std::io::Write;
use std::path::PathBuf;

impl Repository {
    pub fn add(&self, paths: &[String]) -> anyhow::Result<()> {
        if paths.is_empty() {
            writeln!(self.writer(), "Nothing specified, nothing added.")?;
            writeln!(self.writer(), "Maybe you wanted to say 'lgit add .'?")?;
            return Ok(());
        }

        let _lock = self.lock()?;
        let mut index = self.index();

        // Load the index file from the disk
        index.rehydrate()?;

        let resolved = self.workspace().resolve_pathspecs(self.cwd(), paths)?;
        self.report_pathspec_errors(resolved.rejected.iter().map(|(error, _)| error))?;
        let paths = resolved.paths.into_iter().collect::<Vec<PathBuf>>();

        // an unreadable file fails the whole add before anything is staged
        for path in &paths {
            self.workspace().ensure_readable(path)?;
        }

        for path in &paths {
            self.database().put_file(&self.workspace().absolute(path))?;
        }
        index.upsert_on_add(&paths, self.workspace())?;

        index.write_updates()?;

        Ok(())
    }
}
