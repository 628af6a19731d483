use super::KeyValueStore;
use crate::demo::demo_students;
use crate::error::{Result, RosterError};
use crate::model::StudentRecord;
use std::io::ErrorKind;
use std::path::PathBuf;
use tracing::{debug, warn};

/// Key the full record list is stored under.
pub const STORAGE_KEY: &str = "sms.students.v1";

/// How the record list was obtained when the store was opened.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadOutcome {
    /// Persisted data existed and parsed.
    Loaded,
    /// Nothing was persisted yet; the demo dataset was written.
    Seeded,
    /// Persisted data was corrupt; the demo dataset replaced it.
    Recovered,
}

/// Owns the ordered record list and keeps it in sync with the backend.
///
/// The in-memory list only changes after the backend accepted the new
/// snapshot, so a failed write leaves both sides on the previous state.
pub struct RosterStore<S: KeyValueStore> {
    backend: S,
    records: Vec<StudentRecord>,
    outcome: LoadOutcome,
}

impl<S: KeyValueStore> RosterStore<S> {
    /// Load the roster, seeding it with the demo dataset when storage is
    /// empty or unreadable.
    pub fn open(backend: S) -> Result<Self> {
        let (records, outcome) = match backend.get(STORAGE_KEY) {
            Ok(Some(raw)) => match serde_json::from_str::<Vec<StudentRecord>>(&raw) {
                Ok(records) => (records, LoadOutcome::Loaded),
                Err(e) => {
                    warn!(error = %e, "stored roster is corrupt, restoring demo data");
                    (demo_students(), LoadOutcome::Recovered)
                }
            },
            Ok(None) => (demo_students(), LoadOutcome::Seeded),
            // Bytes that aren't UTF-8 are corrupt data, not an I/O failure
            Err(RosterError::Io(e)) if e.kind() == ErrorKind::InvalidData => {
                warn!(error = %e, "stored roster is unreadable, restoring demo data");
                (demo_students(), LoadOutcome::Recovered)
            }
            Err(e) => return Err(e),
        };

        let mut store = Self {
            backend,
            records: Vec::new(),
            outcome,
        };
        if outcome == LoadOutcome::Loaded {
            store.records = records;
        } else {
            store.save(records)?;
        }
        debug!(count = store.records.len(), ?outcome, "roster opened");
        Ok(store)
    }

    pub fn records(&self) -> &[StudentRecord] {
        &self.records
    }

    pub fn find(&self, id: &str) -> Option<&StudentRecord> {
        self.records.iter().find(|r| r.id == id)
    }

    pub fn load_outcome(&self) -> LoadOutcome {
        self.outcome
    }

    pub fn location(&self) -> PathBuf {
        self.backend.location(STORAGE_KEY)
    }

    /// Persist `records` as the whole roster, then adopt it in memory.
    pub fn save(&mut self, records: Vec<StudentRecord>) -> Result<()> {
        let raw = serde_json::to_string_pretty(&records).map_err(RosterError::Serialization)?;
        self.backend.set(STORAGE_KEY, &raw)?;
        self.records = records;
        Ok(())
    }

    pub fn backend(&self) -> &S {
        &self.backend
    }
}
