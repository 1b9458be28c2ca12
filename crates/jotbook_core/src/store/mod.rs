//! Notebook file store.
//!
//! # Responsibility
//! - Enumerate, load, and save notebook snapshot files under one root.
//! - Own the file naming scheme and keep it out of the domain model.
//!
//! # Invariants
//! - The storage root is explicit constructor state; nothing here reads
//!   the process working directory or any other ambient global.
//! - A save overwrites the whole file; there are no partial writes.
//! - `load(save(notebook)) == notebook` for every field, including
//!   creation dates.
//! - New file names never collide with an existing file in the root.

use crate::model::notebook::Notebook;
use log::info;
use once_cell::sync::Lazy;
use regex::Regex;
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::fs;
use std::path::{Path, PathBuf};

/// Snapshot file names look like `Notebook_object_12.json`.
static NOTEBOOK_FILE_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^Notebook_object_(\d+)\.json$").expect("valid file name regex"));

pub type StoreResult<T> = Result<T, StoreError>;

/// Store-layer error for file naming, I/O, and snapshot decoding.
#[derive(Debug)]
pub enum StoreError {
    /// Filesystem failure while listing, reading, or writing.
    Io(std::io::Error),
    /// Snapshot file exists but does not decode as a notebook.
    Serde(serde_json::Error),
    /// Name does not match the notebook file pattern.
    InvalidFileName(String),
}

impl Display for StoreError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Io(err) => write!(f, "notebook storage I/O failure: {err}"),
            Self::Serde(err) => write!(f, "notebook file is corrupt or unreadable: {err}"),
            Self::InvalidFileName(name) => {
                write!(f, "`{name}` is not a notebook file name")
            }
        }
    }
}

impl Error for StoreError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Io(err) => Some(err),
            Self::Serde(err) => Some(err),
            Self::InvalidFileName(_) => None,
        }
    }
}

impl From<std::io::Error> for StoreError {
    fn from(value: std::io::Error) -> Self {
        Self::Io(value)
    }
}

impl From<serde_json::Error> for StoreError {
    fn from(value: serde_json::Error) -> Self {
        Self::Serde(value)
    }
}

/// File-backed store for notebook snapshots.
///
/// One JSON file per notebook; multiple saved notebooks coexist as
/// separate files under the same root directory.
pub struct NotebookStore {
    root: PathBuf,
}

impl NotebookStore {
    /// Creates a store rooted at the given directory.
    ///
    /// The directory does not need to exist yet; it is created on the
    /// first operation that touches disk.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// The storage root this store was constructed with.
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Creates the storage root if it is absent.
    pub fn ensure_root(&self) -> StoreResult<()> {
        fs::create_dir_all(&self.root)?;
        Ok(())
    }

    /// Lists existing notebook file names, sorted by numeric index.
    ///
    /// Files in the root that do not match the naming pattern are ignored
    /// rather than rejected, so unrelated files can live alongside.
    pub fn list_notebooks(&self) -> StoreResult<Vec<String>> {
        self.ensure_root()?;

        let mut indexed: Vec<(u64, String)> = Vec::new();
        for entry in fs::read_dir(&self.root)? {
            let entry = entry?;
            let name = entry.file_name();
            let Some(name) = name.to_str() else { continue };
            if let Some(index) = parse_file_index(name) {
                indexed.push((index, name.to_string()));
            }
        }

        indexed.sort_unstable_by_key(|(index, _)| *index);
        Ok(indexed.into_iter().map(|(_, name)| name).collect())
    }

    /// Picks a fresh file name for a new notebook.
    ///
    /// Uses one past the highest existing index rather than the file
    /// count, so a name stays fresh even after files were removed out of
    /// order externally.
    pub fn next_file_name(&self) -> StoreResult<String> {
        let next = self
            .list_notebooks()?
            .iter()
            .filter_map(|name| parse_file_index(name))
            .max()
            .map_or(0, |highest| highest + 1);
        Ok(format!("Notebook_object_{next}.json"))
    }

    /// Loads the notebook stored under the given file name.
    pub fn load(&self, name: &str) -> StoreResult<Notebook> {
        validate_file_name(name)?;
        let contents = fs::read_to_string(self.root.join(name))?;
        let notebook: Notebook = serde_json::from_str(&contents)?;
        info!(
            "event=notebook_loaded module=store status=ok file={name} notes={}",
            notebook.len()
        );
        Ok(notebook)
    }

    /// Saves the notebook under the given file name, replacing any
    /// previous contents in full.
    pub fn save(&self, name: &str, notebook: &Notebook) -> StoreResult<()> {
        validate_file_name(name)?;
        self.ensure_root()?;
        let contents = serde_json::to_string_pretty(notebook)?;
        fs::write(self.root.join(name), contents)?;
        info!(
            "event=notebook_saved module=store status=ok file={name} notes={}",
            notebook.len()
        );
        Ok(())
    }
}

/// Extracts the numeric index from a notebook file name, if it is one.
pub fn parse_file_index(name: &str) -> Option<u64> {
    NOTEBOOK_FILE_RE
        .captures(name)
        .and_then(|caps| caps.get(1))
        .and_then(|m| m.as_str().parse().ok())
}

fn validate_file_name(name: &str) -> StoreResult<()> {
    if NOTEBOOK_FILE_RE.is_match(name) {
        Ok(())
    } else {
        Err(StoreError::InvalidFileName(name.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::parse_file_index;

    #[test]
    fn parse_file_index_accepts_only_notebook_names() {
        assert_eq!(parse_file_index("Notebook_object_0.json"), Some(0));
        assert_eq!(parse_file_index("Notebook_object_42.json"), Some(42));
        assert_eq!(parse_file_index("Notebook_object_.json"), None);
        assert_eq!(parse_file_index("Notebook_object_1.pickle"), None);
        assert_eq!(parse_file_index("notes.txt"), None);
        assert_eq!(parse_file_index("Notebook_object_1.json.bak"), None);
    }
}
