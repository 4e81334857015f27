//! Stored record types and their identifiers
//!
//! - **ObjectId**: SHA-1 content digest addressing blobs in the object store
//! - **CommitId**: chronological identifier keying commit records and snapshots
//! - **CommitRecord**: author, time, parent and message of one commit
//! - **Snapshot**: `(digest, path)` listing of the whole tracked tree; stashes
//!   use the same listing format

pub mod commit;
pub mod commit_id;
pub mod object;
pub mod object_id;
pub mod snapshot;

/// Length of a SHA-1 hash in hexadecimal format
pub const OBJECT_ID_LENGTH: usize = 40;
