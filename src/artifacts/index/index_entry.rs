//! Index entry representation
//!
//! Each entry tracks one path with three digests:
//! - `hash_current`: content of the working file at the last scan
//! - `hash_staged`: content recorded by the last `add`
//! - `hash_committed`: content as of the last commit (empty before it)
//!
//! Comparing `staged` with `committed` gives staged changes; comparing
//! `current` with `staged` gives unstaged changes.

use crate::artifacts::index::{COMMITTED_COLUMN, CURRENT_COLUMN, PATH_COLUMN, STAGED_COLUMN};
use crate::artifacts::objects::OBJECT_ID_LENGTH;
use crate::artifacts::objects::commit_id::{SECONDS_WIDTH, decode_seconds};
use crate::artifacts::objects::object::Packable;
use crate::artifacts::objects::object_id::ObjectId;
use crate::errors::LgitError;
use anyhow::Context;
use bytes::Bytes;
use derive_new::new;
use std::path::PathBuf;

/// Result of scanning a live file in the working tree
#[derive(Debug, Clone, PartialEq, Eq, new)]
pub struct FileScan {
    /// Modification time as `YYYYMMDDHHMMSS` local time
    pub mtime: String,
    /// Digest of the content; None when the file no longer exists
    pub oid: Option<ObjectId>,
}

#[derive(Debug, Clone, PartialEq, Eq, new)]
pub struct IndexEntry {
    /// File path relative to repository root
    pub name: PathBuf,
    /// Modification time observed at the last scan
    pub mtime: String,
    pub hash_current: Option<ObjectId>,
    pub hash_staged: ObjectId,
    pub hash_committed: Option<ObjectId>,
}

impl IndexEntry {
    /// Staged but not yet committed
    pub fn is_staged(&self) -> bool {
        self.hash_committed.as_ref() != Some(&self.hash_staged)
    }

    /// Working tree differs from what is staged
    pub fn is_unstaged(&self) -> bool {
        self.hash_current.as_ref() != Some(&self.hash_staged)
    }

    /// Record a fresh scan of the working file
    ///
    /// A missing file keeps the previous modification time.
    pub fn apply_scan(&mut self, scan: FileScan) {
        if scan.oid.is_some() {
            self.mtime = scan.mtime;
        }
        self.hash_current = scan.oid;
    }

    /// Parse one non-blank line of the index file
    ///
    /// `line_number` is 1-based and only used for error reporting.
    pub fn parse_line(line: &str, line_number: usize) -> Result<Self, LgitError> {
        let corrupt = |reason: &str| LgitError::CorruptIndex {
            line: line_number,
            reason: reason.to_string(),
        };

        if line.len() <= PATH_COLUMN {
            return Err(corrupt("line is too short"));
        }
        if !line.as_bytes()[..PATH_COLUMN].is_ascii() {
            return Err(corrupt("non-ascii characters in fixed-width columns"));
        }

        let separators = [
            SECONDS_WIDTH,
            STAGED_COLUMN - 1,
            COMMITTED_COLUMN - 1,
            PATH_COLUMN - 1,
        ];
        if separators.iter().any(|&at| line.as_bytes()[at] != b' ') {
            return Err(corrupt("misplaced column separator"));
        }

        let column = |start: usize| &line[start..start + OBJECT_ID_LENGTH];
        let mtime = &line[..SECONDS_WIDTH];
        decode_seconds(mtime).map_err(|_| corrupt("invalid timestamp"))?;

        let hash_current = ObjectId::try_parse_column(column(CURRENT_COLUMN))?;
        let hash_staged = ObjectId::try_parse_column(column(STAGED_COLUMN))?
            .ok_or_else(|| corrupt("missing staged digest"))?;
        let hash_committed = ObjectId::try_parse_column(column(COMMITTED_COLUMN))?;

        Ok(IndexEntry::new(
            PathBuf::from(&line[PATH_COLUMN..]),
            mtime.to_string(),
            hash_current,
            hash_staged,
            hash_committed,
        ))
    }
}

impl Packable for IndexEntry {
    fn serialize(&self) -> anyhow::Result<Bytes> {
        let name = self
            .name
            .to_str()
            .with_context(|| format!("Invalid entry name {:?}", self.name))?;
        let column = |oid: Option<&ObjectId>| {
            format!(
                "{:>width$}",
                oid.map(AsRef::as_ref).unwrap_or(""),
                width = OBJECT_ID_LENGTH
            )
        };

        let line = format!(
            "{} {} {} {} {}\n",
            self.mtime,
            column(self.hash_current.as_ref()),
            self.hash_staged,
            column(self.hash_committed.as_ref()),
            name
        );

        Ok(Bytes::from(line))
    }
}
