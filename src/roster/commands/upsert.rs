use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::model::{StudentDraft, StudentRecord};
use crate::store::roster::RosterStore;
use crate::store::KeyValueStore;
use chrono::NaiveDateTime;
use tracing::info;

const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Insert `draft` as a new record, or merge it over the record with the same
/// id. The draft is expected to be validated by the caller.
pub fn run<S: KeyValueStore>(
    store: &mut RosterStore<S>,
    draft: StudentDraft,
    now: NaiveDateTime,
) -> Result<CmdResult> {
    let stamp = now.format(TIMESTAMP_FORMAT).to_string();
    let mut records = store.records().to_vec();
    let mut result = CmdResult::default();

    let record = match records.iter().position(|r| r.id == draft.id) {
        Some(index) => {
            let existing = &mut records[index];
            merge(existing, draft);
            existing.history.insert(0, format!("Updated {}", stamp));
            result.add_message(CmdMessage::success(format!(
                "Student updated ({}): {}",
                existing.id, existing.name
            )));
            existing.clone()
        }
        None => {
            let record = StudentRecord {
                id: draft.id,
                name: draft.name,
                class: draft.class,
                email: draft.email,
                status: draft.status,
                avatar: draft.avatar,
                history: vec![format!("Created {}", stamp)],
            };
            result.add_message(CmdMessage::success(format!(
                "Student created ({}): {}",
                record.id, record.name
            )));
            records.push(record.clone());
            record
        }
    };

    store.save(records)?;
    info!(id = %record.id, "saved student");
    result.affected_records.push(record);
    Ok(result)
}

fn merge(existing: &mut StudentRecord, draft: StudentDraft) {
    existing.name = draft.name;
    existing.class = draft.class;
    existing.email = draft.email;
    existing.status = draft.status;
    if draft.avatar.is_some() {
        existing.avatar = draft.avatar;
    }
}
