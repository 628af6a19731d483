use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::store::roster::RosterStore;
use crate::store::KeyValueStore;

pub fn run<S: KeyValueStore>(store: &RosterStore<S>, id: &str) -> Result<CmdResult> {
    let mut result = CmdResult::default();
    match store.find(id) {
        Some(record) => result.listed_records.push(record.clone()),
        None => result.add_message(CmdMessage::info(format!("No student with id {}", id))),
    }
    Ok(result)
}
