//! Plumbing commands (low-level object access)
//!
//! ## Commands
//!
//! - `hash-object`: Compute the digest of a file and optionally store it
//! - `cat-file`: Print the content of a stored object

pub mod cat_file;
pub mod hash_object;
