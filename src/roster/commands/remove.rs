use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::store::roster::RosterStore;
use crate::store::KeyValueStore;
use tracing::info;

/// Remove the record with `id`. An unknown id is a no-op, not an error.
///
/// The removed record is returned in `affected_records` so callers can close
/// anything still showing it.
pub fn run<S: KeyValueStore>(store: &mut RosterStore<S>, id: &str) -> Result<CmdResult> {
    let mut result = CmdResult::default();

    let Some(index) = store.records().iter().position(|r| r.id == id) else {
        result.add_message(CmdMessage::info(format!("No student with id {}", id)));
        return Ok(result);
    };

    let mut records = store.records().to_vec();
    let removed = records.remove(index);
    store.save(records)?;

    info!(id = %removed.id, "removed student");
    result.add_message(CmdMessage::success(format!(
        "Student deleted ({}): {}",
        removed.id, removed.name
    )));
    Ok(result.with_affected_records(vec![removed]))
}
