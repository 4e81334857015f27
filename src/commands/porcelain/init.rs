use crate::areas::config::Config;
use crate::areas::repository::Repository;
use crate::artifacts::branch::DEFAULT_BRANCH;
use crate::artifacts::branch::branch_name::BranchName;
use crate::errors::LgitError;
use anyhow::Context;
use std::fs;
use std::io::Write;

impl Repository {
    pub fn init(&self) -> anyhow::Result<()> {
        let metadata_path = self.metadata_path();
        if metadata_path.exists() && !metadata_path.is_dir() {
            return Err(LgitError::InvalidMetadataLayout(metadata_path).into());
        }

        let directories = [
            self.database().objects_path().to_path_buf(),
            self.history().commits_path().to_path_buf(),
            self.history().snapshots_path().to_path_buf(),
            self.refs().heads_path(),
            self.stashes().path().to_path_buf(),
        ];
        let files = [
            self.index().path().to_path_buf(),
            self.config().path().to_path_buf(),
            self.refs().head_path(),
        ];
        let already_initialized = directories.iter().all(|dir| dir.is_dir())
            && files.iter().all(|file| file.is_file());

        for dir in &directories {
            fs::create_dir_all(dir)
                .with_context(|| format!("Failed to create {} directory", dir.display()))?;
        }
        let _lock = self.lock()?;

        let index_path = self.index().path().to_path_buf();
        if !index_path.exists() {
            fs::write(&index_path, b"").context("Failed to create .lgit/index file")?;
        }

        if !self.config().path().exists() {
            self.config()
                .set_author(&Config::author_from_env())
                .context("Failed to create .lgit/config file")?;
        }

        if !self.refs().head_path().exists() {
            self.refs()
                .set_head(&BranchName::try_parse(DEFAULT_BRANCH.to_string())?)
                .context("Failed to create initial HEAD reference")?;
        }

        if already_initialized {
            writeln!(self.writer(), "Git repository already initialized.")?;
        } else {
            writeln!(
                self.writer(),
                "Initialized empty Git repository in {}",
                metadata_path.display()
            )?;
        }

        Ok(())
    }
}
