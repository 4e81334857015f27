use crate::areas::repository::Repository;
use crate::errors::LgitError;
use std::io::Write;
use std::path::PathBuf;

impl Repository {
    /// Stop tracking paths and delete them from the working tree
    pub fn rm(&self, paths: &[String]) -> anyhow::Result<()> {
        if paths.is_empty() {
            writeln!(self.writer(), "Nothing specified, nothing removed.")?;
            return Ok(());
        }

        let _lock = self.lock()?;
        let mut index = self.index();
        index.rehydrate()?;

        let resolved = self.workspace().resolve_pathspecs(self.cwd(), paths)?;
        let mut candidates = resolved.paths.into_iter().collect::<Vec<PathBuf>>();

        // a tracked file that is already gone can still be removed
        let mut rejected = Vec::new();
        for (error, relative) in resolved.rejected {
            match relative {
                Some(relative) if index.is_tracked(&relative) => candidates.push(relative),
                _ => rejected.push(error),
            }
        }
        self.report_pathspec_errors(&rejected)?;

        let removal = index.remove(&candidates, self.workspace())?;
        let unmatched = removal
            .unmatched
            .iter()
            .map(|path| LgitError::PathspecNotFound(self.display_path(path).display().to_string()))
            .collect::<Vec<_>>();
        self.report_pathspec_errors(&unmatched)?;

        for path in &removal.removed {
            writeln!(self.writer(), "rm '{}'", self.display_path(path).display())?;
        }

        index.write_updates()?;

        Ok(())
    }
}
