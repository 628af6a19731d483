use crate::error::{Result, ValidationError};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Image shown for records without an avatar of their own.
pub const DEFAULT_AVATAR: &str = "assets/avatars/default.jpg";

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Status {
    #[default]
    Active,
    Inactive,
    Alumni,
}

impl Status {
    pub fn as_str(&self) -> &'static str {
        match self {
            Status::Active => "active",
            Status::Inactive => "inactive",
            Status::Alumni => "alumni",
        }
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Status {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "active" => Ok(Status::Active),
            "inactive" => Ok(Status::Inactive),
            "alumni" => Ok(Status::Alumni),
            other => Err(format!(
                "Unknown status: {} (expected active, inactive or alumni)",
                other
            )),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StudentRecord {
    pub id: String,
    pub name: String,
    pub class: String,
    pub email: String,
    pub status: Status,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub avatar: Option<String>,
    // Most recent first
    #[serde(default)]
    pub history: Vec<String>,
}

impl StudentRecord {
    pub fn avatar_or_default(&self) -> &str {
        self.avatar.as_deref().unwrap_or(DEFAULT_AVATAR)
    }

    /// Stringified value of a sortable field.
    pub fn field(&self, field: SortField) -> &str {
        match field {
            SortField::Id => &self.id,
            SortField::Name => &self.name,
            SortField::Class => &self.class,
            SortField::Email => &self.email,
            SortField::Status => self.status.as_str(),
        }
    }
}

/// Fields a roster view can be ordered by.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortField {
    Id,
    #[default]
    Name,
    Class,
    Email,
    Status,
}

impl SortField {
    pub fn as_str(&self) -> &'static str {
        match self {
            SortField::Id => "id",
            SortField::Name => "name",
            SortField::Class => "class",
            SortField::Email => "email",
            SortField::Status => "status",
        }
    }
}

impl fmt::Display for SortField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SortField {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "id" => Ok(SortField::Id),
            "name" => Ok(SortField::Name),
            "class" => Ok(SortField::Class),
            "email" => Ok(SortField::Email),
            "status" => Ok(SortField::Status),
            other => Err(format!("Unknown sort field: {}", other)),
        }
    }
}

/// A record as submitted by a caller, before it is merged into the roster.
///
/// `avatar: None` means "no new avatar": on update the stored one is kept.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StudentDraft {
    pub id: String,
    pub name: String,
    pub class: String,
    pub email: String,
    pub status: Status,
    pub avatar: Option<String>,
}

impl StudentDraft {
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        class: impl Into<String>,
        email: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            class: class.into(),
            email: email.into(),
            status: Status::Active,
            avatar: None,
        }
    }

    pub fn with_status(mut self, status: Status) -> Self {
        self.status = status;
        self
    }

    pub fn with_avatar(mut self, avatar: impl Into<String>) -> Self {
        self.avatar = Some(avatar.into());
        self
    }

    /// Starts an edit from the stored record. The avatar is left unset so an
    /// edit that does not supply one keeps the existing image.
    pub fn from_record(record: &StudentRecord) -> Self {
        Self {
            id: record.id.clone(),
            name: record.name.clone(),
            class: record.class.clone(),
            email: record.email.clone(),
            status: record.status,
            avatar: None,
        }
    }

    /// Trims every text field and checks that the required ones are present.
    pub fn validate(mut self) -> Result<Self> {
        self.id = self.id.trim().to_string();
        self.name = self.name.trim().to_string();
        self.class = self.class.trim().to_string();
        self.email = self.email.trim().to_string();

        let missing: Vec<&'static str> = [
            ("name", &self.name),
            ("id", &self.id),
            ("class", &self.class),
            ("email", &self.email),
        ]
        .into_iter()
        .filter(|(_, value)| value.is_empty())
        .map(|(field, _)| field)
        .collect();

        if missing.is_empty() {
            Ok(self)
        } else {
            Err(ValidationError { missing }.into())
        }
    }
}
