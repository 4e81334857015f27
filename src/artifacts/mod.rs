//! Data structures stored in or derived from the repository areas
//!
//! - `branch`: Branch names and ref names
//! - `core`: Shared utilities (pager wrapper)
//! - `index`: Index line format and entries
//! - `objects`: Object ids, commit ids, commit records and snapshots
//! - `status`: Working tree status inspection

pub mod branch;
pub mod core;
pub mod index;
pub mod objects;
pub mod status;
