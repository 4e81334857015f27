//! Repository configuration
//!
//! The config file holds a single line: the author name recorded in commits.

use anyhow::Context;
use derive_new::new;
use std::path::Path;

/// Author used when neither the config nor the environment provides one
pub const UNKNOWN_AUTHOR: &str = "unknown";

#[derive(Debug, new)]
pub struct Config {
    path: Box<Path>,
}

impl Config {
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Author name from the config file
    pub fn author(&self) -> anyhow::Result<String> {
        if !self.path.exists() {
            return Ok(UNKNOWN_AUTHOR.to_string());
        }

        let content = std::fs::read_to_string(&self.path)
            .with_context(|| format!("Unable to read config {}", self.path.display()))?;

        Ok(content
            .lines()
            .next()
            .map(str::trim)
            .filter(|author| !author.is_empty())
            .unwrap_or(UNKNOWN_AUTHOR)
            .to_string())
    }

    pub fn set_author(&self, author: &str) -> anyhow::Result<()> {
        std::fs::write(&self.path, format!("{}\n", author.trim()))
            .with_context(|| format!("Unable to write config {}", self.path.display()))
    }

    /// Author taken from the login environment
    pub fn author_from_env() -> String {
        ["LOGNAME", "USER"]
            .iter()
            .filter_map(|key| std::env::var(key).ok())
            .find(|value| !value.trim().is_empty())
            .unwrap_or_else(|| UNKNOWN_AUTHOR.to_string())
    }
}
