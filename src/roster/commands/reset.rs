use crate::commands::{CmdMessage, CmdResult};
use crate::demo::demo_students;
use crate::error::Result;
use crate::store::roster::RosterStore;
use crate::store::KeyValueStore;
use tracing::info;

pub fn run<S: KeyValueStore>(store: &mut RosterStore<S>) -> Result<CmdResult> {
    let records = demo_students();
    store.save(records.clone())?;
    info!(count = records.len(), "roster reset to demo data");

    let mut result = CmdResult::default().with_listed_records(records);
    result.add_message(CmdMessage::success("Demo data restored"));
    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::{remove, upsert};
    use crate::model::StudentDraft;
    use crate::store::memory::fixtures::StoreFixture;
    use chrono::NaiveDate;

    #[test]
    fn always_yields_demo_dataset() {
        let mut store = StoreFixture::zed_and_amy().open();
        let now = NaiveDate::from_ymd_opt(2024, 1, 1)
            .unwrap()
            .and_hms_opt(0, 0, 0)
            .unwrap();
        upsert::run(
            &mut store,
            StudentDraft::new("S-7", "Kim", "B", "kim@example.com"),
            now,
        )
        .unwrap();
        remove::run(&mut store, "S-1").unwrap();

        let result = run(&mut store).unwrap();
        assert_eq!(result.listed_records, demo_students());
        assert_eq!(store.records(), demo_students().as_slice());
    }

    #[test]
    fn reset_twice_is_stable() {
        let mut store = StoreFixture::new().open();
        run(&mut store).unwrap();
        run(&mut store).unwrap();
        assert_eq!(store.records(), demo_students().as_slice());
    }
}
