//! Index (staging area)
//!
//! The index tracks, per path, the working-tree, staged and committed
//! digests. It is loaded in full, mutated in memory and rewritten in full.
//!
//! ## Rows
//!
//! Rows keep their position in the file. Removing a path blanks its row
//! instead of shifting the rows after it; blank rows are written back as
//! empty lines and skipped when looking entries up.
//!
//! ## Data Structures
//!
//! - `rows`: file order, `None` for a removed entry
//! - `positions`: path to row position, for O(1) lookup

use crate::areas::workspace::Workspace;
use crate::artifacts::index::index_entry::IndexEntry;
use crate::artifacts::objects::object::Packable;
use anyhow::Context;
use fake::rand;
use std::collections::{BTreeMap, HashMap};
use std::io::Write;
use std::path::{Path, PathBuf};

/// Paths of a `remove` call split by whether they were tracked
#[derive(Debug, Default, PartialEq, Eq)]
pub struct Removal {
    pub removed: Vec<PathBuf>,
    pub unmatched: Vec<PathBuf>,
}

#[derive(Debug, Clone)]
pub struct Index {
    /// Path to the index file (typically `.lgit/index`)
    path: Box<Path>,
    rows: Vec<Option<IndexEntry>>,
    positions: HashMap<PathBuf, usize>,
}

impl Index {
    pub fn new(path: Box<Path>) -> Self {
        Index {
            path,
            rows: Vec::new(),
            positions: HashMap::new(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn clear(&mut self) {
        self.rows.clear();
        self.positions.clear();
    }

    /// Load the index from disk
    ///
    /// A missing or empty file is an empty index.
    pub fn rehydrate(&mut self) -> anyhow::Result<()> {
        self.clear();

        if !self.path.exists() {
            return Ok(());
        }

        let content = std::fs::read_to_string(&self.path)
            .with_context(|| format!("Unable to read index file {}", self.path.display()))?;

        for (line_number, line) in content.lines().enumerate() {
            if line.trim().is_empty() {
                self.rows.push(None);
                continue;
            }

            let entry = IndexEntry::parse_line(line, line_number + 1)?;
            self.positions.insert(entry.name.clone(), self.rows.len());
            self.rows.push(Some(entry));
        }

        Ok(())
    }

    /// Rewrite the whole index file
    ///
    /// The table is written to a temporary file first and renamed over the
    /// index, so readers see either the old or the new table.
    pub fn write_updates(&mut self) -> anyhow::Result<()> {
        let mut content = Vec::new();
        for row in &self.rows {
            match row {
                Some(entry) => content.extend_from_slice(&entry.serialize()?),
                None => content.push(b'\n'),
            }
        }

        let temp_path = self
            .path
            .with_file_name(format!("index.tmp-{}", rand::random::<u32>()));
        let mut file = std::fs::OpenOptions::new()
            .write(true)
            .create_new(true)
            .open(&temp_path)
            .with_context(|| format!("Unable to open {}", temp_path.display()))?;

        let written = file
            .write_all(&content)
            .and_then(|_| file.sync_all())
            .and_then(|_| std::fs::rename(&temp_path, &self.path));
        if let Err(error) = written {
            let _ = std::fs::remove_file(&temp_path);
            return Err(anyhow::Error::new(error)
                .context(format!("Unable to replace {}", self.path.display())));
        }

        tracing::debug!(rows = self.rows.len(), "index written");

        Ok(())
    }

    pub fn entry_by_path(&self, path: &Path) -> Option<&IndexEntry> {
        self.positions
            .get(path)
            .and_then(|&position| self.rows[position].as_ref())
    }

    pub fn is_tracked(&self, path: &Path) -> bool {
        self.positions.contains_key(path)
    }

    /// Live entries in row order
    pub fn entries(&self) -> impl Iterator<Item = &IndexEntry> {
        self.rows.iter().flatten()
    }

    pub fn tracked_paths(&self) -> Vec<PathBuf> {
        self.entries().map(|entry| entry.name.clone()).collect()
    }

    /// Row positions of the given paths that are already tracked
    pub fn locate<'p>(&self, paths: impl IntoIterator<Item = &'p Path>) -> BTreeMap<PathBuf, usize> {
        paths
            .into_iter()
            .filter_map(|path| {
                self.positions
                    .get(path)
                    .map(|&position| (path.to_path_buf(), position))
            })
            .collect()
    }

    /// Stage the current content of each path
    ///
    /// New paths are appended; tracked paths are overwritten in place and
    /// keep their committed digest.
    pub fn upsert_on_add(&mut self, paths: &[PathBuf], workspace: &Workspace) -> anyhow::Result<()> {
        for path in paths {
            let scan = workspace.scan_file(path)?;
            let oid = scan
                .oid
                .with_context(|| format!("Unable to stage missing file {:?}", path))?;

            match self.positions.get(path).copied() {
                Some(position) => {
                    let hash_committed = self.rows[position]
                        .as_ref()
                        .and_then(|entry| entry.hash_committed.clone());
                    self.rows[position] = Some(IndexEntry::new(
                        path.clone(),
                        scan.mtime,
                        Some(oid.clone()),
                        oid,
                        hash_committed,
                    ));
                }
                None => {
                    self.positions.insert(path.clone(), self.rows.len());
                    self.rows.push(Some(IndexEntry::new(
                        path.clone(),
                        scan.mtime,
                        Some(oid.clone()),
                        oid,
                        None,
                    )));
                }
            }
        }

        Ok(())
    }

    /// Rescan every tracked path; staged and committed digests are untouched
    pub fn refresh_on_status(&mut self, workspace: &Workspace) -> anyhow::Result<()> {
        for entry in self.rows.iter_mut().flatten() {
            entry.apply_scan(workspace.scan_file(&entry.name)?);
        }

        Ok(())
    }

    /// Rescan every tracked path and make the staged digest the committed one
    pub fn advance_on_commit(&mut self, workspace: &Workspace) -> anyhow::Result<()> {
        for entry in self.rows.iter_mut().flatten() {
            entry.apply_scan(workspace.scan_file(&entry.name)?);
            entry.hash_committed = Some(entry.hash_staged.clone());
        }

        Ok(())
    }

    /// Stop tracking paths and delete their working files
    ///
    /// Stored objects are kept; earlier snapshots may still reference them.
    pub fn remove(&mut self, paths: &[PathBuf], workspace: &Workspace) -> anyhow::Result<Removal> {
        let mut removal = Removal::default();

        for path in paths {
            match self.positions.remove(path) {
                Some(position) => {
                    workspace.remove_file(path)?;
                    self.rows[position] = None;
                    removal.removed.push(path.clone());
                }
                None => removal.unmatched.push(path.clone()),
            }
        }

        Ok(removal)
    }
}
