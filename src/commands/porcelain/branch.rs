use crate::areas::repository::Repository;
use crate::artifacts::branch::branch_name::BranchName;
use crate::errors::LgitError;
use colored::Colorize;
use std::io::Write;

impl Repository {
    /// Create a branch at the current head
    pub fn branch(&self, branch_name: &str) -> anyhow::Result<()> {
        let branch_name = BranchName::try_parse(branch_name.to_string())?;

        let _lock = self.lock()?;
        let head = self
            .refs()
            .read_head()?
            .ok_or_else(|| LgitError::NoCommitsYet(self.current_branch_name()))?;

        self.refs().create_branch(&branch_name, &head)?;

        Ok(())
    }

    /// List branches, marking the current one
    pub fn list_branches(&self) -> anyhow::Result<()> {
        let current = self.refs().current_branch()?;

        for branch in self.refs().list_branches()? {
            if branch == current {
                writeln!(self.writer(), "* {}", branch.to_string().green())?;
            } else {
                writeln!(self.writer(), "  {}", branch)?;
            }
        }

        Ok(())
    }

    fn current_branch_name(&self) -> String {
        self.refs()
            .current_branch()
            .map(|branch| branch.to_string())
            .unwrap_or_else(|_| crate::artifacts::branch::DEFAULT_BRANCH.to_string())
    }
}
