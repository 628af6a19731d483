use console::Style;
use once_cell::sync::Lazy;
use roster::model::Status;

pub struct RosterTheme {
    pub id: Style,
    pub name: Style,
    pub muted: Style,
    pub heading: Style,
    pub active: Style,
    pub inactive: Style,
    pub alumni: Style,
}

impl RosterTheme {
    pub fn status(&self, status: Status) -> &Style {
        match status {
            Status::Active => &self.active,
            Status::Inactive => &self.inactive,
            Status::Alumni => &self.alumni,
        }
    }
}

pub static ROSTER_THEME: Lazy<RosterTheme> = Lazy::new(|| RosterTheme {
    id: Style::new().yellow(),
    name: Style::new().bold(),
    muted: Style::new().color256(246).italic(),
    heading: Style::new().bold().underlined(),
    active: Style::new().green(),
    inactive: Style::new().red(),
    alumni: Style::new().cyan(),
});
