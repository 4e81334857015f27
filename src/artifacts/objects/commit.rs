//! Commit record
//!
//! Immutable metadata for one point in history. The snapshot of the tree is
//! stored separately, keyed by the same commit id.
//!
//! ## Format
//!
//! ```text
//! <author>
//! <created_at, YYYYMMDDHHMMSS>
//! <parent commit id, may be empty>
//!
//! <message, may span several lines>
//! ```

use crate::artifacts::objects::commit_id::{CommitId, LOG_DATE_FORMAT, decode_seconds};
use crate::artifacts::objects::object::{Packable, Unpackable};
use anyhow::Context;
use bytes::Bytes;
use derive_new::new;
use std::io::BufRead;

#[derive(Debug, Clone, Eq, PartialEq, new)]
pub struct CommitRecord {
    /// Author name read from the repository config
    author: String,
    /// Seconds component of the commit id
    created_at: String,
    /// Previous head of the branch the commit was made on
    parent: Option<CommitId>,
    /// Commit message
    message: String,
}

impl CommitRecord {
    pub fn author(&self) -> &str {
        &self.author
    }

    pub fn created_at(&self) -> &str {
        &self.created_at
    }

    pub fn parent(&self) -> Option<&CommitId> {
        self.parent.as_ref()
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    /// First line of the message
    pub fn short_message(&self) -> &str {
        self.message.lines().next().unwrap_or("")
    }

    /// Creation time rendered like `Tue Mar 05 07:08:09 2024`
    pub fn readable_date(&self) -> anyhow::Result<String> {
        let date = decode_seconds(&self.created_at)?;
        Ok(date.format(LOG_DATE_FORMAT).to_string())
    }
}

impl Packable for CommitRecord {
    fn serialize(&self) -> anyhow::Result<Bytes> {
        let parent = self.parent.as_ref().map(AsRef::as_ref).unwrap_or("");
        let content = format!(
            "{}\n{}\n{}\n\n{}\n",
            self.author, self.created_at, parent, self.message
        );

        Ok(Bytes::from(content))
    }
}

impl Unpackable for CommitRecord {
    fn deserialize(reader: impl BufRead) -> anyhow::Result<Self> {
        let mut lines = reader.lines();
        let mut next_line = |field: &str| -> anyhow::Result<String> {
            lines
                .next()
                .with_context(|| format!("Invalid commit record: missing {field} line"))?
                .context("Unable to read commit record")
        };

        let author = next_line("author")?;
        let created_at = next_line("timestamp")?;
        decode_seconds(&created_at)?;

        let parent = next_line("parent")?;
        let parent = match parent.trim() {
            "" => None,
            parent => Some(CommitId::try_parse(parent)?),
        };

        // skip the blank separator line
        next_line("separator")?;

        let message = lines
            .collect::<Result<Vec<_>, _>>()
            .context("Unable to read commit message")?
            .join("\n");

        Ok(Self::new(author, created_at, parent, message))
    }
}
