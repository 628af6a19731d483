//! # Rendering
//!
//! Turns command results into terminal text. Layout (widths, truncation,
//! padding) is computed here with Unicode-aware widths; colors come from
//! [`ROSTER_THEME`] and are only applied when `use_color` is set, so every
//! renderer can be tested on plain output.

use super::styles::ROSTER_THEME;
use colored::Colorize;
use console::Style;
use roster::api::{CmdMessage, MessageLevel};
use roster::model::StudentRecord;
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

pub const LINE_WIDTH: usize = 100;
const NAME_WIDTH: usize = 24;
const CLASS_WIDTH: usize = 6;
const STATUS_WIDTH: usize = 9;
const GAP: &str = "  ";

fn paint(style: &Style, text: &str, use_color: bool) -> String {
    if use_color {
        style.apply_to(text).force_styling(true).to_string()
    } else {
        text.to_string()
    }
}

fn pad_to(s: &str, width: usize) -> String {
    let cut = truncate_to_width(s, width);
    let padding = width.saturating_sub(cut.width());
    format!("{}{}", cut, " ".repeat(padding))
}

pub fn truncate_to_width(s: &str, max_width: usize) -> String {
    if s.width() <= max_width {
        return s.to_string();
    }

    let mut result = String::new();
    let mut current_width = 0;
    for c in s.chars() {
        let char_width = c.width().unwrap_or(0);
        if current_width + char_width > max_width.saturating_sub(1) {
            result.push('…');
            return result;
        }
        result.push(c);
        current_width += char_width;
    }
    result
}

/// One line per student: id, name, class, status, email.
pub fn render_student_list(records: &[StudentRecord], use_color: bool) -> String {
    if records.is_empty() {
        return "No students found.\n".to_string();
    }

    let theme = &*ROSTER_THEME;
    let id_width = records
        .iter()
        .map(|r| r.id.width())
        .max()
        .unwrap_or(0)
        .max(2);
    let fixed = id_width + NAME_WIDTH + CLASS_WIDTH + STATUS_WIDTH + GAP.len() * 4;
    let email_width = LINE_WIDTH.saturating_sub(fixed);

    let mut out = String::new();
    for r in records {
        let id = pad_to(&r.id, id_width);
        let name = pad_to(&r.name, NAME_WIDTH);
        let class = pad_to(&r.class, CLASS_WIDTH);
        let status = pad_to(r.status.as_str(), STATUS_WIDTH);
        let email = truncate_to_width(&r.email, email_width);

        out.push_str(&paint(&theme.id, &id, use_color));
        out.push_str(GAP);
        out.push_str(&paint(&theme.name, &name, use_color));
        out.push_str(GAP);
        out.push_str(&class);
        out.push_str(GAP);
        out.push_str(&paint(theme.status(r.status), &status, use_color));
        out.push_str(GAP);
        out.push_str(&paint(&theme.muted, &email, use_color));
        out.push('\n');
    }
    out
}

/// Full profile: fields, avatar reference, and history (most recent first).
pub fn render_profile(record: &StudentRecord, use_color: bool) -> String {
    let theme = &*ROSTER_THEME;
    let avatar = if record.avatar.as_deref().is_some_and(|a| a.starts_with("data:")) {
        "(embedded image)".to_string()
    } else {
        record.avatar_or_default().to_string()
    };

    let mut out = String::new();
    out.push_str(&format!(
        "{} {}\n",
        paint(&theme.id, &record.id, use_color),
        paint(&theme.name, &record.name, use_color)
    ));
    out.push_str("--------------------------------\n");
    out.push_str(&format!("Class:   {}\n", record.class));
    out.push_str(&format!("Email:   mailto:{}\n", record.email));
    out.push_str(&format!(
        "Status:  {}\n",
        paint(theme.status(record.status), record.status.as_str(), use_color)
    ));
    out.push_str(&format!("Avatar:  {}\n", avatar));
    out.push('\n');
    out.push_str(&paint(&theme.heading, "History", use_color));
    out.push('\n');
    if record.history.is_empty() {
        out.push_str("  - No activity yet\n");
    } else {
        for entry in &record.history {
            out.push_str(&format!("  - {}\n", entry));
        }
    }
    out
}

pub fn render_text_list(lines: &[String], empty_message: &str) -> String {
    if lines.is_empty() {
        return format!("{}\n", empty_message);
    }
    lines.iter().map(|l| format!("{}\n", l)).collect()
}

pub fn print_messages(messages: &[CmdMessage]) {
    for message in messages {
        match message.level {
            MessageLevel::Info => println!("{}", message.content.dimmed()),
            MessageLevel::Success => println!("{}", message.content.green()),
            MessageLevel::Warning => println!("{}", message.content.yellow()),
            MessageLevel::Error => eprintln!("{}", message.content.red()),
        }
    }
}
