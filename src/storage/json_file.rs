use crate::storage::{StoreError, StudentMap, StudentStore};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::info;

/// File-backed student store.
///
/// The backing file holds the entire collection as one JSON object
/// mapping id to record. Reads parse the whole file; writes rewrite the
/// whole file in place, with no locking and no atomic rename.
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    /// Create a store backed by the given file path.
    pub fn new(path: impl AsRef<Path>) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }

    /// Create the backing file with an empty collection if it does not
    /// exist yet, along with any missing parent directories.
    pub fn initialize(&self) -> Result<(), StoreError> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }

        if !self.path.exists() {
            info!(path = ?self.path, "Creating empty student data file");
            let empty = StudentMap::new();
            self.save(&empty)?;
        }

        Ok(())
    }
}

impl StudentStore for JsonFileStore {
    fn load(&self) -> Result<StudentMap, StoreError> {
        let contents = fs::read_to_string(&self.path)?;
        let students = serde_json::from_str(&contents)?;
        Ok(students)
    }

    fn save(&self, students: &StudentMap) -> Result<(), StoreError> {
        let contents = serde_json::to_string_pretty(students)?;
        fs::write(&self.path, contents)?;
        Ok(())
    }
}
