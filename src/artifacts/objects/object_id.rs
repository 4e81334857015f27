//! Content identifier (SHA-1 digest)
//!
//! Object IDs are 40-character lowercase hexadecimal strings. The digest is
//! taken over the raw file bytes, with no header.
//!
//! ## Storage
//!
//! Objects are stored in `.lgit/objects/<first-2-chars>/<remaining-38-chars>`

use crate::artifacts::objects::OBJECT_ID_LENGTH;
use crate::errors::LgitError;
use sha1::{Digest, Sha1};
use std::path::PathBuf;

/// Content identifier of a blob
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ObjectId(String);

impl ObjectId {
    /// Compute the digest of some content
    pub fn digest(content: &[u8]) -> Self {
        let mut hasher = Sha1::new();
        hasher.update(content);

        Self(format!("{:x}", hasher.finalize()))
    }

    /// Parse and validate an object ID from a string
    ///
    /// Accepts exactly 40 hexadecimal characters; upper case is normalized.
    pub fn try_parse(id: &str) -> Result<Self, LgitError> {
        if id.len() != OBJECT_ID_LENGTH || !id.chars().all(|c| c.is_ascii_hexdigit()) {
            return Err(LgitError::InvalidObjectId(id.to_string()));
        }

        Ok(Self(id.to_ascii_lowercase()))
    }

    /// Parse a fixed-width index column, where a blank column means "no digest"
    pub fn try_parse_column(column: &str) -> Result<Option<Self>, LgitError> {
        let column = column.trim();
        if column.is_empty() {
            Ok(None)
        } else {
            Self::try_parse(column).map(Some)
        }
    }

    /// Convert to the sharded storage path
    ///
    /// `abc123...` becomes `ab/c123...`
    pub fn to_path(&self) -> PathBuf {
        let (dir, file) = self.0.split_at(2);
        PathBuf::from(dir).join(file)
    }
}

impl AsRef<str> for ObjectId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for ObjectId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
