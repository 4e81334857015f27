use crate::areas::repository::Repository;
use std::io::Write;

impl Repository {
    /// Print the author, or replace it when one is given
    pub fn configure(&self, author: Option<&str>) -> anyhow::Result<()> {
        match author {
            Some(author) => {
                let _lock = self.lock()?;
                self.config().set_author(author)
            }
            None => {
                let author = self.config().author()?;
                writeln!(self.writer(), "{author}")?;
                Ok(())
            }
        }
    }
}
