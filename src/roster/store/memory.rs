use super::KeyValueStore;
use crate::error::{Result, RosterError};
use std::cell::RefCell;
use std::collections::HashMap;
use std::path::PathBuf;

/// In-memory key-value store for testing and development.
/// Does NOT persist data.
#[derive(Default)]
pub struct InMemoryStore {
    values: RefCell<HashMap<String, String>>,
    simulate_write_error: RefCell<bool>,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Pre-populate a key, e.g. with corrupt data.
    pub fn with_value(self, key: &str, value: &str) -> Self {
        self.values
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
        self
    }

    /// Enable write error simulation for testing error handling.
    pub fn set_simulate_write_error(&self, simulate: bool) {
        *self.simulate_write_error.borrow_mut() = simulate;
    }
}

impl KeyValueStore for InMemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>> {
        Ok(self.values.borrow().get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> Result<()> {
        if *self.simulate_write_error.borrow() {
            return Err(RosterError::Store("Simulated write error".to_string()));
        }
        self.values
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn location(&self, key: &str) -> PathBuf {
        PathBuf::from(format!("memory://{}", key))
    }
}

// --- Test Fixtures ---

#[cfg(any(test, feature = "test_utils"))]
pub mod fixtures {
    use super::*;
    use crate::model::{Status, StudentRecord};
    use crate::store::roster::{RosterStore, STORAGE_KEY};

    pub fn student(id: &str, name: &str, class: &str, status: Status) -> StudentRecord {
        StudentRecord {
            id: id.to_string(),
            name: name.to_string(),
            class: class.to_string(),
            email: format!("{}@example.com", name.to_lowercase()),
            status,
            avatar: None,
            history: Vec::new(),
        }
    }

    pub struct StoreFixture {
        records: Vec<StudentRecord>,
    }

    impl Default for StoreFixture {
        fn default() -> Self {
            Self::new()
        }
    }

    impl StoreFixture {
        pub fn new() -> Self {
            Self {
                records: Vec::new(),
            }
        }

        pub fn with_student(mut self, id: &str, name: &str, class: &str, status: Status) -> Self {
            self.records.push(student(id, name, class, status));
            self
        }

        /// The two-record roster used throughout the query examples.
        pub fn zed_and_amy() -> Self {
            Self::new()
                .with_student("S-1", "Zed", "A", Status::Active)
                .with_student("S-2", "Amy", "A", Status::Inactive)
        }

        pub fn records(&self) -> &[StudentRecord] {
            &self.records
        }

        pub fn open(self) -> RosterStore<InMemoryStore> {
            let raw = serde_json::to_string(&self.records).unwrap();
            let backend = InMemoryStore::new().with_value(STORAGE_KEY, &raw);
            RosterStore::open(backend).unwrap()
        }
    }
}
