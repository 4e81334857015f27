use crate::areas::repository::Repository;
use crate::artifacts::objects::object_id::ObjectId;
use anyhow::Context;
use std::io::Write;

impl Repository {
    pub fn hash_object(&self, object_path: &str, write: bool) -> anyhow::Result<()> {
        let path = self.cwd().join(object_path);
        let content =
            std::fs::read(&path).with_context(|| format!("Unable to read file {}", object_path))?;

        // hash
        let object_id = ObjectId::digest(&content);
        writeln!(self.writer(), "{}", object_id)?;

        if write {
            self.database().put(&content)?;
        }

        Ok(())
    }
}
