//! Working tree access
//!
//! All paths handed out by the workspace are relative to the repository
//! root. The metadata directory is never listed.

use crate::METADATA_DIR;
use crate::artifacts::index::index_entry::FileScan;
use crate::artifacts::objects::commit_id::format_seconds;
use crate::artifacts::objects::object_id::ObjectId;
use crate::errors::LgitError;
use anyhow::Context;
use std::collections::BTreeSet;
use std::path::{Component, Path, PathBuf};
use walkdir::WalkDir;

/// Outcome of resolving command line pathspecs
#[derive(Debug, Default)]
pub struct ResolvedPaths {
    /// Repository-relative files, sorted and deduplicated
    pub paths: BTreeSet<PathBuf>,
    /// Pathspecs that could not be resolved, with the lexical
    /// repository-relative path when the pathspec was inside the repository
    pub rejected: Vec<(LgitError, Option<PathBuf>)>,
}

#[derive(Debug)]
pub struct Workspace {
    path: Box<Path>,
}

impl Workspace {
    pub fn new(path: Box<Path>) -> Self {
        Workspace { path }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn absolute(&self, file_path: &Path) -> PathBuf {
        self.path.join(file_path)
    }

    /// List every file below `root_file_path` (or the whole tree)
    pub fn list_files(&self, root_file_path: Option<&Path>) -> anyhow::Result<Vec<PathBuf>> {
        let root_file_path = match root_file_path {
            Some(p) => self.path.join(p),
            None => self.path.to_path_buf(),
        };

        if !root_file_path.exists() {
            anyhow::bail!("The specified path does not exist: {:?}", root_file_path);
        }

        Ok(WalkDir::new(&root_file_path)
            .sort_by_file_name()
            .into_iter()
            .filter_entry(|entry| entry.file_name() != METADATA_DIR)
            .filter_map(|entry| entry.ok())
            .filter(|entry| {
                // a symlink counts as the file it points to
                entry.file_type().is_file()
                    || (entry.path_is_symlink() && entry.path().is_file())
            })
            .filter_map(|entry| {
                entry
                    .path()
                    .strip_prefix(self.path.as_ref())
                    .ok()
                    .map(Path::to_path_buf)
            })
            .collect::<Vec<_>>())
    }

    /// Digest and modification time of a working file
    ///
    /// A file that no longer exists scans as "no digest".
    pub fn scan_file(&self, file_path: &Path) -> anyhow::Result<FileScan> {
        let path = self.path.join(file_path);

        if !path.is_file() {
            return Ok(FileScan::new(String::new(), None));
        }

        let content =
            std::fs::read(&path).with_context(|| format!("Unable to read file {:?}", file_path))?;
        let modified = std::fs::metadata(&path)?.modified()?;
        let mtime = chrono::DateTime::<chrono::Local>::from(modified).naive_local();

        Ok(FileScan::new(
            format_seconds(&mtime),
            Some(ObjectId::digest(&content)),
        ))
    }

    /// Check that a file can be opened for reading
    pub fn ensure_readable(&self, file_path: &Path) -> anyhow::Result<()> {
        match std::fs::File::open(self.path.join(file_path)) {
            Ok(_) => Ok(()),
            Err(error) if error.kind() == std::io::ErrorKind::PermissionDenied => {
                Err(LgitError::PermissionDenied(file_path.to_path_buf()).into())
            }
            Err(error) => {
                Err(anyhow::Error::new(error).context(format!("Unable to open {:?}", file_path)))
            }
        }
    }

    /// Delete a working file and prune parent directories left empty
    ///
    /// The repository root itself is never removed.
    pub fn remove_file(&self, file_path: &Path) -> anyhow::Result<()> {
        let path = self.path.join(file_path);

        if path.is_file() {
            std::fs::remove_file(&path)
                .with_context(|| format!("Failed to remove file: {:?}", file_path))?;
        }

        let mut parent = file_path.parent();
        while let Some(dir) = parent
            && dir != Path::new("")
        {
            let absolute_dir = self.path.join(dir);
            if !absolute_dir.is_dir() || absolute_dir.read_dir()?.next().is_some() {
                break;
            }

            std::fs::remove_dir(&absolute_dir)
                .with_context(|| format!("Failed to remove empty directory: {:?}", dir))?;
            parent = dir.parent();
        }

        Ok(())
    }

    /// Resolve pathspecs given relative to `cwd`
    ///
    /// Directories expand to the files below them. Pathspecs outside the
    /// repository or matching nothing are collected in `rejected` and do not
    /// stop the rest of the batch.
    pub fn resolve_pathspecs(
        &self,
        cwd: &Path,
        pathspecs: &[String],
    ) -> anyhow::Result<ResolvedPaths> {
        let mut resolved = ResolvedPaths::default();

        for pathspec in pathspecs {
            let absolute = normalize(&cwd.join(pathspec));

            let Ok(relative) = absolute.strip_prefix(self.path.as_ref()) else {
                resolved
                    .rejected
                    .push((LgitError::OutsideRepository(pathspec.clone()), None));
                continue;
            };
            let relative = relative.to_path_buf();

            if relative.starts_with(METADATA_DIR) {
                resolved
                    .rejected
                    .push((LgitError::OutsideRepository(pathspec.clone()), None));
            } else if absolute.is_dir() {
                for file in self.list_files(Some(relative.as_path()))? {
                    if file.to_str().is_some() {
                        resolved.paths.insert(file);
                    } else {
                        resolved.rejected.push((
                            LgitError::NonUtf8Path(file.to_string_lossy().to_string()),
                            None,
                        ));
                    }
                }
            } else if absolute.is_file() {
                resolved.paths.insert(relative);
            } else {
                resolved
                    .rejected
                    .push((LgitError::PathspecNotFound(pathspec.clone()), Some(relative)));
            }
        }

        Ok(resolved)
    }

    /// Render a repository-relative path relative to `cwd`
    pub fn display_path(&self, cwd: &Path, file_path: &Path) -> PathBuf {
        let cwd = cwd.strip_prefix(self.path.as_ref()).unwrap_or(Path::new(""));

        let mut cwd_components = cwd.components().peekable();
        let mut file_components = file_path.components().peekable();
        while let (Some(a), Some(b)) = (cwd_components.peek(), file_components.peek())
            && a == b
        {
            cwd_components.next();
            file_components.next();
        }

        cwd_components
            .map(|_| Component::ParentDir)
            .chain(file_components)
            .collect()
    }
}

/// Lexically normalize a path, resolving `.` and `..` without touching the
/// filesystem
fn normalize(path: &Path) -> PathBuf {
    let mut normalized = PathBuf::new();

    for component in path.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => {
                normalized.pop();
            }
            other => normalized.push(other.as_os_str()),
        }
    }

    normalized
}
