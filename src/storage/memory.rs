use crate::storage::{StoreError, StudentMap, StudentStore};
use std::sync::Mutex;

/// In-memory student store.
///
/// Drop-in substitute for [`JsonFileStore`](crate::storage::JsonFileStore)
/// where no file should be touched, mainly under test.
#[derive(Debug, Default)]
pub struct MemoryStore {
    students: Mutex<StudentMap>,
}

impl MemoryStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store pre-populated with the given collection.
    pub fn with_students(students: StudentMap) -> Self {
        Self {
            students: Mutex::new(students),
        }
    }
}

impl StudentStore for MemoryStore {
    fn load(&self) -> Result<StudentMap, StoreError> {
        let students = self.students.lock().expect("student map mutex poisoned");
        Ok(students.clone())
    }

    fn save(&self, students: &StudentMap) -> Result<(), StoreError> {
        let mut held = self.students.lock().expect("student map mutex poisoned");
        *held = students.clone();
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::{Gender, StoredStudent};
    use pretty_assertions::assert_eq;

    #[test]
    fn save_then_load_round_trips() {
        let store = MemoryStore::new();

        let mut students = StudentMap::new();
        students.insert(
            "S001".to_string(),
            StoredStudent {
                name: "Alice Johnson".to_string(),
                age: 15,
                city: "New York".to_string(),
                gender: Gender::Female,
                height: 1.6,
                weight: 50.0,
            },
        );

        store.save(&students).unwrap();
        assert_eq!(store.load().unwrap(), students);
    }

    #[test]
    fn new_store_is_empty() {
        let store = MemoryStore::new();
        assert_eq!(store.load().unwrap(), StudentMap::new());
    }
}
