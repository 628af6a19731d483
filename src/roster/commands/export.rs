use crate::commands::query::{self, RosterFilter};
use crate::commands::{CmdMessage, CmdResult};
use crate::error::{Result, RosterError};
use crate::model::StudentRecord;
use crate::store::roster::RosterStore;
use crate::store::KeyValueStore;
use csv::{QuoteStyle, Terminator, WriterBuilder};

pub const CSV_FILENAME: &str = "students.csv";
pub const CSV_MIME: &str = "text/csv;charset=utf-8";
pub const CSV_HEADER: [&str; 5] = ["id", "name", "class", "email", "status"];

/// Export the current view (filtered and sorted) as CSV text.
pub fn run<S: KeyValueStore>(store: &RosterStore<S>, filter: &RosterFilter) -> Result<CmdResult> {
    let view = query::apply(store.records(), filter);
    let csv = to_csv(&view)?;

    let mut result = CmdResult::default();
    if view.is_empty() {
        result.add_message(CmdMessage::warning("No students match; exported header only."));
    }
    Ok(result.with_listed_records(view).with_csv(csv))
}

/// Header line, then one fully quoted row per record, joined by LF with no
/// trailing newline.
pub fn to_csv(records: &[StudentRecord]) -> Result<String> {
    let mut writer = WriterBuilder::new()
        .quote_style(QuoteStyle::Always)
        .terminator(Terminator::Any(b'\n'))
        .from_writer(Vec::new());

    for r in records {
        writer.write_record([
            r.id.as_str(),
            r.name.as_str(),
            r.class.as_str(),
            r.email.as_str(),
            r.status.as_str(),
        ])?;
    }

    let body = writer
        .into_inner()
        .map_err(|e| RosterError::Store(format!("CSV buffer error: {}", e)))?;
    let body = String::from_utf8(body)
        .map_err(|e| RosterError::Store(format!("CSV output is not UTF-8: {}", e)))?;

    let mut out = CSV_HEADER.join(",");
    if !body.is_empty() {
        out.push('\n');
        out.push_str(body.trim_end_matches('\n'));
    }
    Ok(out)
}
