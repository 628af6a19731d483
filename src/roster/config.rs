use crate::commands::export::CSV_FILENAME;
use crate::error::{Result, RosterError};
use crate::model::SortField;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

const CONFIG_FILENAME: &str = "config.json";

/// Keys accepted by `roster config`.
pub const CONFIG_KEYS: &[&str] = &["sort-by", "export-file", "banner"];

/// Configuration for roster, stored in `<data dir>/config.json`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct RosterConfig {
    /// Field list views are sorted by when `--sort` is not given
    #[serde(default)]
    pub sort_by: SortField,

    /// Default destination for `roster export`
    #[serde(default = "default_export_file")]
    pub export_file: String,

    /// Show the decorative banner above list output
    #[serde(default = "default_banner")]
    pub banner: bool,
}

fn default_export_file() -> String {
    CSV_FILENAME.to_string()
}

fn default_banner() -> bool {
    true
}

impl Default for RosterConfig {
    fn default() -> Self {
        Self {
            sort_by: SortField::default(),
            export_file: default_export_file(),
            banner: default_banner(),
        }
    }
}

impl RosterConfig {
    /// Load config from the given directory, or return defaults if not found
    pub fn load<P: AsRef<Path>>(config_dir: P) -> Result<Self> {
        let config_path = config_dir.as_ref().join(CONFIG_FILENAME);

        if !config_path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&config_path).map_err(RosterError::Io)?;
        let config: RosterConfig =
            serde_json::from_str(&content).map_err(RosterError::Serialization)?;
        Ok(config)
    }

    /// Save config to the given directory
    pub fn save<P: AsRef<Path>>(&self, config_dir: P) -> Result<()> {
        let config_dir = config_dir.as_ref();

        if !config_dir.exists() {
            fs::create_dir_all(config_dir).map_err(RosterError::Io)?;
        }

        let config_path = config_dir.join(CONFIG_FILENAME);
        let content = serde_json::to_string_pretty(self).map_err(RosterError::Serialization)?;
        fs::write(config_path, content).map_err(RosterError::Io)?;
        Ok(())
    }

    pub fn get(&self, key: &str) -> Option<String> {
        match key {
            "sort-by" => Some(self.sort_by.to_string()),
            "export-file" => Some(self.export_file.clone()),
            "banner" => Some(self.banner.to_string()),
            _ => None,
        }
    }

    pub fn set(&mut self, key: &str, value: &str) -> std::result::Result<(), String> {
        match key {
            "sort-by" => self.sort_by = value.parse()?,
            "export-file" => {
                let value = value.trim();
                if value.is_empty() {
                    return Err("export-file cannot be empty".to_string());
                }
                self.export_file = value.to_string();
            }
            "banner" => {
                self.banner = match value.trim().to_lowercase().as_str() {
                    "true" | "on" | "yes" | "1" => true,
                    "false" | "off" | "no" | "0" => false,
                    other => return Err(format!("Invalid value for banner: {}", other)),
                }
            }
            other => return Err(format!("Unknown config key: {}", other)),
        }
        Ok(())
    }
}
