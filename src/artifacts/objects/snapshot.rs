//! Tree snapshot
//!
//! A snapshot lists `<digest> <path>` for every tracked path at commit time.
//! It is a full listing, not a diff: unchanged files are repeated in every
//! snapshot. Stashes are written in the same format.

use crate::artifacts::objects::object::{Packable, Unpackable};
use crate::artifacts::objects::object_id::ObjectId;
use anyhow::Context;
use bytes::Bytes;
use std::io::BufRead;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Snapshot {
    entries: Vec<(ObjectId, PathBuf)>,
}

impl Snapshot {
    pub fn new(entries: impl IntoIterator<Item = (ObjectId, PathBuf)>) -> Self {
        Snapshot {
            entries: entries.into_iter().collect(),
        }
    }

    pub fn entries(&self) -> impl Iterator<Item = (&ObjectId, &Path)> {
        self.entries.iter().map(|(oid, path)| (oid, path.as_path()))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn oid_of(&self, path: &Path) -> Option<&ObjectId> {
        self.entries
            .iter()
            .find(|(_, entry_path)| entry_path == path)
            .map(|(oid, _)| oid)
    }
}

impl Packable for Snapshot {
    fn serialize(&self) -> anyhow::Result<Bytes> {
        let mut content = String::new();

        for (oid, path) in &self.entries {
            let path = path
                .to_str()
                .with_context(|| format!("Invalid path in snapshot: {:?}", path))?;
            content.push_str(&format!("{} {}\n", oid, path));
        }

        Ok(Bytes::from(content))
    }
}

impl Unpackable for Snapshot {
    fn deserialize(reader: impl BufRead) -> anyhow::Result<Self> {
        let entries = reader
            .lines()
            .filter(|line| !matches!(line, Ok(line) if line.trim().is_empty()))
            .map(|line| {
                let line = line.context("Unable to read snapshot")?;
                let (oid, path) = line
                    .split_once(' ')
                    .with_context(|| format!("Invalid snapshot line: {line}"))?;

                Ok((ObjectId::try_parse(oid)?, PathBuf::from(path)))
            })
            .collect::<anyhow::Result<Vec<_>>>()?;

        Ok(Self { entries })
    }
}
