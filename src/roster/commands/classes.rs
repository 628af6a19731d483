use crate::commands::CmdResult;
use crate::error::Result;
use crate::model::StudentRecord;
use crate::store::roster::RosterStore;
use crate::store::KeyValueStore;
use std::collections::BTreeSet;

/// Distinct class names across the whole roster, ascending.
pub fn distinct_classes(records: &[StudentRecord]) -> Vec<String> {
    records
        .iter()
        .map(|r| r.class.clone())
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect()
}

pub fn run<S: KeyValueStore>(store: &RosterStore<S>) -> Result<CmdResult> {
    Ok(CmdResult::default().with_classes(distinct_classes(store.records())))
}
