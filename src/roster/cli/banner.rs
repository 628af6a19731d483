//! Decorative header printed above list output.
//!
//! Purely cosmetic: it has no access to the roster and cannot fail. When the
//! terminal can't do color it falls back to a static plain-text header.

use console::{colors_enabled, Style};

const TITLE: &str = "Student Roster";
const WAVE: &[u8] = &[33, 39, 45, 51, 45, 39];

#[derive(Debug, Clone, Copy)]
pub struct Banner {
    enabled: bool,
}

impl Banner {
    pub fn new(enabled: bool) -> Self {
        Self { enabled }
    }

    pub fn enable(&mut self) {
        self.enabled = true;
    }

    pub fn disable(&mut self) {
        self.enabled = false;
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    /// The header text, or `None` when disabled.
    pub fn render(&self, use_color: bool) -> Option<String> {
        if !self.enabled {
            return None;
        }
        let rule_width = TITLE.chars().count() + 4;
        if !use_color {
            let rule = "=".repeat(rule_width);
            return Some(format!("{rule}\n  {TITLE}\n{rule}\n"));
        }

        let rule: String = (0..rule_width)
            .map(|i| {
                let color = WAVE[i % WAVE.len()];
                Style::new()
                    .color256(color)
                    .force_styling(true)
                    .apply_to("~")
                    .to_string()
            })
            .collect();
        let title = Style::new().bold().force_styling(true).apply_to(TITLE);
        Some(format!("{rule}\n  {title}\n{rule}\n"))
    }

    pub fn print(&self) {
        if let Some(text) = self.render(colors_enabled()) {
            print!("{}", text);
        }
    }
}
