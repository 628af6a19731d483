//! # Storage Layer
//!
//! Persistence is split in two:
//!
//! - [`KeyValueStore`]: the raw "how": a string-keyed, string-valued store.
//!   [`fs::FileStore`] keeps one file per key in a data directory;
//!   [`memory::InMemoryStore`] keeps everything in a map for tests.
//! - [`roster::RosterStore`]: the "what": owns the ordered list of
//!   [`StudentRecord`](crate::model::StudentRecord)s, loads it once, and
//!   writes the whole list back under a single key after every change.
//!
//! ## Storage Format
//!
//! ```text
//! <data dir>/
//! ├── sms.students.v1.json   # JSON array of every record, in roster order
//! └── config.json            # RosterConfig
//! ```
//!
//! There is no incremental persistence: each write is a full snapshot, and
//! the last write wins.

use crate::error::Result;
use std::path::PathBuf;

pub mod fs;
pub mod memory;
pub mod roster;

/// Abstract interface for a local key-value store.
///
/// Methods take `&self`; backends that need mutation use interior
/// mutability, since the roster is single-threaded.
pub trait KeyValueStore {
    /// Read the value for `key`. `Ok(None)` when the key was never written.
    fn get(&self, key: &str) -> Result<Option<String>>;

    /// Replace the value for `key`. Must not leave a partially written value.
    fn set(&self, key: &str, value: &str) -> Result<()>;

    /// Where the value for `key` lives, for diagnostics.
    fn location(&self, key: &str) -> PathBuf;
}
