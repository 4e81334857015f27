//! Object store
//!
//! Blobs are stored uncompressed under `objects/<2 hex>/<38 hex>`. Storing is
//! write-once: if an object with the same digest already exists nothing is
//! written, so identical content is kept exactly once.

use crate::artifacts::objects::object_id::ObjectId;
use crate::errors::LgitError;
use anyhow::Context;
use bytes::Bytes;
use fake::rand;
use std::io::Write;
use std::path::{Path, PathBuf};

#[derive(Debug)]
pub struct Database {
    path: Box<Path>,
}

impl Database {
    pub fn new(path: Box<Path>) -> Self {
        Database { path }
    }

    pub fn objects_path(&self) -> &Path {
        &self.path
    }

    /// Store some content and return its digest
    pub fn put(&self, content: &[u8]) -> anyhow::Result<ObjectId> {
        let object_id = ObjectId::digest(content);
        let object_path = self.path.join(object_id.to_path());

        // write the object to disk unless it already exists
        if !object_path.exists() {
            let object_dir = object_path
                .parent()
                .context(format!("Invalid object path {}", object_path.display()))?;
            std::fs::create_dir_all(object_dir).context(format!(
                "Unable to create object directory {}",
                object_dir.display()
            ))?;

            self.write_object(object_path, content)?;
            tracing::debug!(oid = %object_id, size = content.len(), "stored object");
        }

        Ok(object_id)
    }

    /// Store the content of a file and return its digest
    pub fn put_file(&self, file_path: &Path) -> anyhow::Result<ObjectId> {
        let content = std::fs::read(file_path)
            .context(format!("Unable to read file {}", file_path.display()))?;

        self.put(&content)
    }

    pub fn exists(&self, object_id: &ObjectId) -> bool {
        self.path.join(object_id.to_path()).is_file()
    }

    pub fn load(&self, object_id: &ObjectId) -> anyhow::Result<Bytes> {
        let object_path = self.path.join(object_id.to_path());

        if !object_path.is_file() {
            return Err(LgitError::ObjectNotFound(object_id.to_string()).into());
        }

        let content = std::fs::read(&object_path).context(format!(
            "Unable to read object file {}",
            object_path.display()
        ))?;

        Ok(Bytes::from(content))
    }

    fn write_object(&self, object_path: PathBuf, content: &[u8]) -> anyhow::Result<()> {
        let object_dir = object_path
            .parent()
            .context(format!("Invalid object path {}", object_path.display()))?;
        let temp_object_path = object_dir.join(Self::generate_temp_name());

        let mut file = std::fs::OpenOptions::new()
            .write(true)
            .create_new(true)
            .open(&temp_object_path)
            .context(format!(
                "Unable to open object file {}",
                temp_object_path.display()
            ))?;

        let written = file
            .write_all(content)
            .and_then(|_| std::fs::rename(&temp_object_path, &object_path));
        if let Err(error) = written {
            let _ = std::fs::remove_file(&temp_object_path);
            return Err(anyhow::Error::new(error).context(format!(
                "Unable to write object file {}",
                object_path.display()
            )));
        }

        Ok(())
    }

    fn generate_temp_name() -> String {
        format!("tmp-obj-{}", rand::random::<u32>())
    }
}
