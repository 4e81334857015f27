use crate::METADATA_DIR;
use crate::areas::config::Config;
use crate::areas::database::Database;
use crate::areas::history::History;
use crate::areas::index::Index;
use crate::areas::lock::RepositoryLock;
use crate::areas::refs::Refs;
use crate::areas::stash::Stashes;
use crate::areas::workspace::Workspace;
use crate::artifacts::status::status_info::Status;
use crate::errors::LgitError;
use anyhow::Context;
use std::cell::{RefCell, RefMut};
use std::path::{Path, PathBuf};

/// Everything a command needs: the repository root, the directory the
/// command was invoked from, the output sink and every storage area
pub struct Repository {
    path: Box<Path>,
    cwd: Box<Path>,
    writer: RefCell<Box<dyn std::io::Write>>,
    index: RefCell<Index>,
    database: Database,
    workspace: Workspace,
    history: History,
    refs: Refs,
    config: Config,
    stashes: Stashes,
}

impl Repository {
    /// Open the repository rooted at `path`, creating the directory if needed
    ///
    /// `cwd` is the invocation directory used to resolve pathspecs; it
    /// defaults to the root.
    pub fn new(
        path: &Path,
        cwd: Option<&Path>,
        writer: Box<dyn std::io::Write>,
    ) -> anyhow::Result<Self> {
        if !path.exists() {
            std::fs::create_dir_all(path)
                .with_context(|| format!("Unable to create {}", path.display()))?;
        }
        let path = path
            .canonicalize()
            .with_context(|| format!("Unable to resolve {}", path.display()))?;
        let cwd = match cwd {
            Some(cwd) => cwd.canonicalize()?,
            None => path.clone(),
        };
        let metadata_path = path.join(METADATA_DIR);

        Ok(Repository {
            index: RefCell::new(Index::new(metadata_path.join("index").into_boxed_path())),
            database: Database::new(metadata_path.join("objects").into_boxed_path()),
            workspace: Workspace::new(path.clone().into_boxed_path()),
            history: History::new(
                metadata_path.join("commits").into_boxed_path(),
                metadata_path.join("snapshots").into_boxed_path(),
            ),
            refs: Refs::new(metadata_path.clone().into_boxed_path()),
            config: Config::new(metadata_path.join("config").into_boxed_path()),
            stashes: Stashes::new(metadata_path.join("refs").join("stash").into_boxed_path()),
            path: path.into_boxed_path(),
            cwd: cwd.into_boxed_path(),
            writer: RefCell::new(writer),
        })
    }

    /// Find the repository enclosing `start` by walking up its ancestors
    pub fn discover(start: &Path, writer: Box<dyn std::io::Write>) -> anyhow::Result<Self> {
        let start = start.canonicalize()?;
        let root = Self::find_root(&start)?;

        Self::new(&root, Some(&start), writer)
    }

    fn find_root(start: &Path) -> Result<PathBuf, LgitError> {
        for dir in start.ancestors() {
            let metadata_path = dir.join(METADATA_DIR);

            if metadata_path.is_dir() {
                return Ok(dir.to_path_buf());
            }
            if metadata_path.exists() {
                return Err(LgitError::InvalidMetadataLayout(metadata_path));
            }
        }

        Err(LgitError::NotARepository)
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn cwd(&self) -> &Path {
        &self.cwd
    }

    pub fn metadata_path(&self) -> PathBuf {
        self.path.join(METADATA_DIR)
    }

    pub fn writer(&'_ self) -> RefMut<'_, Box<dyn std::io::Write>> {
        self.writer.borrow_mut()
    }

    pub fn index(&'_ self) -> RefMut<'_, Index> {
        self.index.borrow_mut()
    }

    pub fn database(&self) -> &Database {
        &self.database
    }

    pub fn workspace(&self) -> &Workspace {
        &self.workspace
    }

    pub fn history(&self) -> &History {
        &self.history
    }

    pub fn refs(&self) -> &Refs {
        &self.refs
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn stashes(&self) -> &Stashes {
        &self.stashes
    }

    pub fn working_status(&'_ self) -> Status<'_> {
        Status::new(self)
    }

    /// Take the repository-wide write lock
    pub fn lock(&self) -> anyhow::Result<RepositoryLock> {
        RepositoryLock::acquire(&self.metadata_path().join("lock"))
    }

    /// Path of a repository-relative file as seen from the invocation directory
    pub fn display_path(&self, file_path: &Path) -> PathBuf {
        self.workspace.display_path(&self.cwd, file_path)
    }
}
