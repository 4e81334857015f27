use crate::areas::repository::Repository;
use crate::artifacts::objects::object_id::ObjectId;
use std::io::Write;

impl Repository {
    /// Write the raw content of a stored object
    pub fn cat_file(&self, object_id: &str) -> anyhow::Result<()> {
        let object_id = ObjectId::try_parse(object_id)?;
        let content = self.database().load(&object_id)?;

        self.writer().write_all(&content)?;

        Ok(())
    }
}
