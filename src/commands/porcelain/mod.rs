//! Porcelain commands (user-facing operations)
//!
//! Porcelain commands provide the high-level user interface for version control.
//! They compose the storage areas into workflows that match typical usage.
//!
//! ## Commands
//!
//! - `init`: Initialize a new repository
//! - `add`: Stage files for commit
//! - `rm`: Stop tracking files and delete them
//! - `commit`: Create a new commit
//! - `status`: Show working tree status
//! - `log`: Show commit history
//! - `ls-files`: List tracked paths
//! - `config`: Show or set the author
//! - `branch`: Create or list branches
//! - `stash`: Save or list copies of changed files

pub mod add;
pub mod branch;
pub mod commit;
pub mod config;
pub mod init;
pub mod log;
pub mod ls_files;
pub mod rm;
pub mod stash;
pub mod status;
