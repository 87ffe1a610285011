//! Cookie document kept in a plain file.

use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use backdrop::error::SyncError;
use backdrop::store::PreferenceStore;

#[cfg(test)]
#[path = "file_store_test.rs"]
mod file_store_test;

/// File-backed [`PreferenceStore`]. A missing file reads as an empty store.
#[derive(Clone, Debug)]
pub struct FileStore {
    path: PathBuf,
}

impl FileStore {
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl PreferenceStore for FileStore {
    fn read_document(&self) -> Result<String, SyncError> {
        match std::fs::read_to_string(&self.path) {
            // Hand-edited files usually end with a newline; it is not part of the value.
            Ok(raw) => Ok(raw.trim_end_matches(['\n', '\r']).to_owned()),
            Err(err) if err.kind() == ErrorKind::NotFound => Ok(String::new()),
            Err(err) => Err(SyncError::StoreUnavailable(format!("{}: {err}", self.path.display()))),
        }
    }

    fn write_document(&mut self, document: &str) -> Result<(), SyncError> {
        std::fs::write(&self.path, document)
            .map_err(|err| SyncError::StoreWrite(format!("{}: {err}", self.path.display())))
    }
}
