//! Index file format
//!
//! The index (staging area) is a text file with one fixed-width line per
//! tracked path:
//!
//! ```text
//! <mtime:14> <hash_current:40> <hash_staged:40> <hash_committed:40> <path>
//! ```
//!
//! Empty digest columns are filled with spaces. A blank line is a removed
//! entry; readers skip it but keep its row position.

pub mod index_entry;

use crate::artifacts::objects::OBJECT_ID_LENGTH;
use crate::artifacts::objects::commit_id::SECONDS_WIDTH;

/// Column where `hash_current` starts
pub const CURRENT_COLUMN: usize = SECONDS_WIDTH + 1;

/// Column where `hash_staged` starts
pub const STAGED_COLUMN: usize = CURRENT_COLUMN + OBJECT_ID_LENGTH + 1;

/// Column where `hash_committed` starts
pub const COMMITTED_COLUMN: usize = STAGED_COLUMN + OBJECT_ID_LENGTH + 1;

/// Column where the path starts
pub const PATH_COLUMN: usize = COMMITTED_COLUMN + OBJECT_ID_LENGTH + 1;
