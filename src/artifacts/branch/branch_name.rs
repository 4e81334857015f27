use crate::artifacts::branch::INVALID_BRANCH_NAME_REGEX;
use crate::errors::LgitError;
use derive_new::new;
use std::path::Path;

const REF_PREFIX: &str = "refs/heads/";

/// Path of a ref relative to the metadata directory, e.g. `refs/heads/master`
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, PartialOrd, Ord, new)]
pub struct SymRefName(String);

impl SymRefName {
    pub fn as_ref_path(&self) -> &Path {
        Path::new(&self.0)
    }
}

impl From<&BranchName> for SymRefName {
    fn from(branch_name: &BranchName) -> Self {
        SymRefName(format!("{REF_PREFIX}{branch_name}"))
    }
}

impl std::fmt::Display for SymRefName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, PartialOrd, Ord)]
pub struct BranchName(String);

impl BranchName {
    pub fn try_parse(name: String) -> Result<Self, LgitError> {
        let is_invalid = regex::Regex::new(INVALID_BRANCH_NAME_REGEX)
            .map(|re| re.is_match(&name))
            .unwrap_or(true);

        if name.is_empty() || is_invalid {
            Err(LgitError::InvalidBranchName(name))
        } else {
            Ok(Self(name))
        }
    }

    pub fn try_parse_sym_ref_name(sym_ref_name: &SymRefName) -> Result<Self, LgitError> {
        match sym_ref_name.0.strip_prefix(REF_PREFIX) {
            Some(name) => Self::try_parse(name.to_string()),
            None => Err(LgitError::InvalidBranchName(sym_ref_name.0.clone())),
        }
    }
}

impl AsRef<str> for BranchName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for BranchName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
