use crate::collate::locale_cmp;
use crate::commands::CmdResult;
use crate::error::Result;
use crate::model::{SortField, Status, StudentRecord};
use crate::store::roster::RosterStore;
use crate::store::KeyValueStore;

/// Filter and sort state for a roster view.
///
/// `None` for `class`/`status` means "all".
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RosterFilter {
    pub search: String,
    pub class: Option<String>,
    pub status: Option<Status>,
    pub sort_by: SortField,
}

impl RosterFilter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn search(mut self, term: impl Into<String>) -> Self {
        self.search = term.into();
        self
    }

    pub fn class(mut self, class: impl Into<String>) -> Self {
        self.class = Some(class.into());
        self
    }

    pub fn status(mut self, status: Status) -> Self {
        self.status = Some(status);
        self
    }

    pub fn sort_by(mut self, field: SortField) -> Self {
        self.sort_by = field;
        self
    }

    fn matches(&self, record: &StudentRecord, term: &str) -> bool {
        if !term.is_empty() {
            let hit = [&record.id, &record.name, &record.class, &record.email]
                .iter()
                .any(|v| v.to_lowercase().contains(term));
            if !hit {
                return false;
            }
        }
        if let Some(class) = &self.class {
            if &record.class != class {
                return false;
            }
        }
        if let Some(status) = self.status {
            if record.status != status {
                return false;
            }
        }
        true
    }
}

/// Filter and sort `records` into a new view. The source is left untouched.
pub fn apply(records: &[StudentRecord], filter: &RosterFilter) -> Vec<StudentRecord> {
    let term = filter.search.trim().to_lowercase();
    let mut out: Vec<StudentRecord> = records
        .iter()
        .filter(|r| filter.matches(r, &term))
        .cloned()
        .collect();

    // sort_by is stable: ties keep roster order
    let field = filter.sort_by;
    out.sort_by(|a, b| locale_cmp(a.field(field), b.field(field)));
    out
}

pub fn run<S: KeyValueStore>(store: &RosterStore<S>, filter: &RosterFilter) -> Result<CmdResult> {
    let listed = apply(store.records(), filter);
    Ok(CmdResult::default().with_listed_records(listed))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::demo::demo_students;
    use crate::store::memory::fixtures::StoreFixture;
    use std::cmp::Ordering;

    fn names(records: &[StudentRecord]) -> Vec<&str> {
        records.iter().map(|r| r.name.as_str()).collect()
    }

    #[test]
    fn sorts_by_name() {
        let store = StoreFixture::zed_and_amy().open();
        let result = run(&store, &RosterFilter::new().sort_by(SortField::Name)).unwrap();
        assert_eq!(names(&result.listed_records), vec!["Amy", "Zed"]);
    }

    #[test]
    fn accented_names_sort_with_their_base_letter() {
        let store = StoreFixture::new()
            .with_student("S-1", "Zoe", "A", Status::Active)
            .with_student("S-2", "Émile", "A", Status::Active)
            .with_student("S-3", "Felix", "A", Status::Active)
            .with_student("S-4", "Eve", "A", Status::Active)
            .open();
        let result = run(&store, &RosterFilter::new()).unwrap();
        assert_eq!(
            names(&result.listed_records),
            vec!["Émile", "Eve", "Felix", "Zoe"]
        );
    }

    #[test]
    fn filters_by_status() {
        let store = StoreFixture::zed_and_amy().open();
        let result = run(&store, &RosterFilter::new().status(Status::Active)).unwrap();
        assert_eq!(names(&result.listed_records), vec!["Zed"]);
    }

    #[test]
    fn search_is_case_insensitive_across_fields() {
        let records = demo_students();

        let by_email = apply(&records, &RosterFilter::new().search("NOAH.CHEN@"));
        assert_eq!(names(&by_email), vec!["Noah Chen"]);

        let by_id = apply(&records, &RosterFilter::new().search("s-1003"));
        assert_eq!(names(&by_id), vec!["Sophia Patel"]);

        let by_class = apply(&records, &RosterFilter::new().search("9c"));
        assert_eq!(names(&by_class), vec!["Liam Garcia"]);
    }

    #[test]
    fn blank_search_matches_everything() {
        let records = demo_students();
        let out = apply(&records, &RosterFilter::new().search("   "));
        assert_eq!(out.len(), records.len());
    }

    #[test]
    fn class_filter_is_exact() {
        let records = demo_students();
        let out = apply(&records, &RosterFilter::new().class("10"));
        assert!(out.is_empty());
        let out = apply(&records, &RosterFilter::new().class("10A"));
        assert_eq!(names(&out), vec!["Ava Johnson", "Sophia Patel"]);
    }

    #[test]
    fn adding_predicates_never_grows_the_view() {
        let records = demo_students();
        let base = RosterFilter::new().search("a");
        let with_class = base.clone().class("10A");
        let with_status = with_class.clone().status(Status::Active);

        let a = apply(&records, &base);
        let b = apply(&records, &with_class);
        let c = apply(&records, &with_status);
        assert!(a.len() <= records.len());
        assert!(b.len() <= a.len());
        assert!(c.len() <= b.len());
        for r in &c {
            assert!(records.contains(r));
        }
    }

    #[test]
    fn query_is_idempotent_and_pure() {
        let records = demo_students();
        let filter = RosterFilter::new().sort_by(SortField::Email).search("o");
        let first = apply(&records, &filter);
        let second = apply(&records, &filter);
        assert_eq!(first, second);
        assert_eq!(records, demo_students());
    }

    #[test]
    fn every_sort_field_yields_ordered_output() {
        let records = demo_students();
        for field in [
            SortField::Id,
            SortField::Name,
            SortField::Class,
            SortField::Email,
            SortField::Status,
        ] {
            let out = apply(&records, &RosterFilter::new().sort_by(field));
            for pair in out.windows(2) {
                assert_ne!(
                    locale_cmp(pair[0].field(field), pair[1].field(field)),
                    Ordering::Greater,
                    "unordered by {}",
                    field
                );
            }
        }
    }

    #[test]
    fn ties_keep_roster_order() {
        let records = demo_students();
        let out = apply(&records, &RosterFilter::new().sort_by(SortField::Status));
        let ids: Vec<&str> = out.iter().map(|r| r.id.as_str()).collect();
        // active (1001, 1002 in roster order), alumni, inactive
        assert_eq!(ids, vec!["S-1001", "S-1002", "S-1003", "S-1004"]);
    }

    #[test]
    fn class_sort_uses_string_order() {
        let records = demo_students();
        let out = apply(&records, &RosterFilter::new().sort_by(SortField::Class));
        let classes: Vec<&str> = out.iter().map(|r| r.class.as_str()).collect();
        assert_eq!(classes, vec!["10A", "10A", "10B", "9C"]);
    }
}
