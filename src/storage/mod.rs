pub mod json_file;
pub mod memory;

pub use json_file::JsonFileStore;
pub use memory::MemoryStore;

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use thiserror::Error;

/// The whole collection, keyed by student id.
pub type StudentMap = BTreeMap<String, StoredStudent>;

/// Gender as stored on a record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Gender {
    Male,
    Female,
}

/// Persisted form of a student record. The id lives in the map key,
/// never in the stored value. Height and weight fall back to 0 when a
/// hand-edited data file omits them, so sorting treats them as 0.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StoredStudent {
    pub name: String,
    pub age: u32,
    pub city: String,
    pub gender: Gender,
    #[serde(default)]
    pub height: f64,
    #[serde(default)]
    pub weight: f64,
}

/// Storage errors
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("failed to access student data file: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to parse student data file: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Capability to load and save the student collection.
///
/// Every call moves the whole collection: `load` reads the entire
/// backing store, `save` overwrites it wholesale. Nothing here locks, so
/// concurrent load-mutate-save sequences can lose updates.
pub trait StudentStore: Send + Sync {
    /// Read the full collection from the backing store.
    fn load(&self) -> Result<StudentMap, StoreError>;

    /// Overwrite the backing store with the given collection.
    fn save(&self, students: &StudentMap) -> Result<(), StoreError>;
}
