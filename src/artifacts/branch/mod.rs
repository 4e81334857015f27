pub mod branch_name;

/// Names rejected by git's ref-name rules
pub const INVALID_BRANCH_NAME_REGEX: &str =
    r"^\.|\/\.|\.\.|^\/|\/$|\.lock$|@\{|[\x00-\x20\*:\?\[\\~\^\x7f]";

/// Branch HEAD points to in a fresh repository
pub const DEFAULT_BRANCH: &str = "master";
