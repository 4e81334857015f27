//! Working tree status inspection
//!
//! Status compares the three digests of every index entry and lists the
//! working files the index does not know about.
//!
//! ## Components
//!
//! - `file_change`: Enum types for categorizing changes
//! - `inspector`: Per-entry classification and untracked detection
//! - `status_info`: Status aggregation

pub mod file_change;
pub mod inspector;
pub mod status_info;
