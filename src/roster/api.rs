//! # API Facade
//!
//! The API layer is a **thin facade** over the command layer and the single
//! entry point for every roster operation, whatever the UI.
//!
//! ## Role and Responsibilities
//!
//! The API facade:
//! - **Owns** the opened [`RosterStore`], so there is no ambient roster state
//! - **Dispatches** to the appropriate command function
//! - **Supplies the clock** for history entries
//! - **Returns structured types** (`Result<CmdResult>`)
//!
//! ## What the API Does NOT Do
//!
//! - **Validation**: drafts are validated by the caller before `upsert`
//! - **Confirmation**: deletes and resets arrive already confirmed
//! - **Presentation**: no stdout, no colors, no file writing
//!
//! ## Generic Over KeyValueStore
//!
//! `RosterApi<S: KeyValueStore>` works with any backend:
//! - Production: `RosterApi<FileStore>`
//! - Testing: `RosterApi<InMemoryStore>`

use crate::commands;
use crate::error::Result;
use crate::model::{StudentDraft, StudentRecord};
use crate::store::roster::{LoadOutcome, RosterStore};
use crate::store::KeyValueStore;
use chrono::Local;

/// The main API facade for roster operations.
pub struct RosterApi<S: KeyValueStore> {
    store: RosterStore<S>,
    paths: commands::RosterPaths,
}

impl<S: KeyValueStore> RosterApi<S> {
    /// Load the roster from `backend` (seeding it if needed).
    pub fn open(backend: S, paths: commands::RosterPaths) -> Result<Self> {
        let store = RosterStore::open(backend)?;
        Ok(Self { store, paths })
    }

    pub fn upsert(&mut self, draft: StudentDraft) -> Result<commands::CmdResult> {
        commands::upsert::run(&mut self.store, draft, Local::now().naive_local())
    }

    pub fn remove(&mut self, id: &str) -> Result<commands::CmdResult> {
        commands::remove::run(&mut self.store, id)
    }

    pub fn reset(&mut self) -> Result<commands::CmdResult> {
        commands::reset::run(&mut self.store)
    }

    pub fn query(&self, filter: &RosterFilter) -> Result<commands::CmdResult> {
        commands::query::run(&self.store, filter)
    }

    pub fn distinct_classes(&self) -> Result<commands::CmdResult> {
        commands::classes::run(&self.store)
    }

    pub fn view(&self, id: &str) -> Result<commands::CmdResult> {
        commands::view::run(&self.store, id)
    }

    pub fn export_csv(&self, filter: &RosterFilter) -> Result<commands::CmdResult> {
        commands::export::run(&self.store, filter)
    }

    pub fn config(&self, action: ConfigAction) -> Result<commands::CmdResult> {
        commands::config::run(&self.paths, action)
    }

    pub fn find(&self, id: &str) -> Option<&StudentRecord> {
        self.store.find(id)
    }

    pub fn records(&self) -> &[StudentRecord] {
        self.store.records()
    }

    pub fn load_outcome(&self) -> LoadOutcome {
        self.store.load_outcome()
    }

    pub fn storage_location(&self) -> std::path::PathBuf {
        self.store.location()
    }
}

pub use crate::commands::config::ConfigAction;
pub use crate::commands::export::{CSV_FILENAME, CSV_MIME};
pub use crate::commands::query::RosterFilter;
pub use crate::commands::{CmdMessage, CmdResult, MessageLevel, RosterPaths};
