//! User settings for the address book
//!
//! Manages user preferences: the birthday reminder window, whether changes
//! are saved after every command, and audit logging.

use serde::{Deserialize, Serialize};

use super::paths::AddressBookPaths;
use crate::error::AddressBookError;
use crate::reports::DEFAULT_WINDOW_DAYS;

/// User settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    /// Schema version for migration support
    #[serde(default = "default_schema_version")]
    pub schema_version: u32,

    /// How many days ahead `birthdays` looks
    #[serde(default = "default_birthday_window_days")]
    pub birthday_window_days: u32,

    /// Save contacts after every change instead of only on exit
    #[serde(default)]
    pub autosave: bool,

    /// Append create/update/delete entries to the audit log
    #[serde(default = "default_audit_enabled")]
    pub audit_enabled: bool,
}

fn default_schema_version() -> u32 {
    1
}

fn default_birthday_window_days() -> u32 {
    DEFAULT_WINDOW_DAYS
}

fn default_audit_enabled() -> bool {
    true
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            schema_version: default_schema_version(),
            birthday_window_days: default_birthday_window_days(),
            autosave: false,
            audit_enabled: default_audit_enabled(),
        }
    }
}

impl Settings {
    /// Load settings from disk, or create default settings if file doesn't exist
    pub fn load_or_create(paths: &AddressBookPaths) -> Result<Self, AddressBookError> {
        let settings_path = paths.settings_file();

        if settings_path.exists() {
            let contents = std::fs::read_to_string(&settings_path).map_err(|e| {
                AddressBookError::Io(format!("Failed to read settings file: {}", e))
            })?;

            let settings: Settings = serde_json::from_str(&contents).map_err(|e| {
                AddressBookError::Config(format!("Failed to parse settings file: {}", e))
            })?;

            Ok(settings)
        } else {
            // Don't save yet - let caller decide when to persist
            Ok(Settings::default())
        }
    }

    /// Save settings to disk
    pub fn save(&self, paths: &AddressBookPaths) -> Result<(), AddressBookError> {
        paths.ensure_directories()?;

        let contents = serde_json::to_string_pretty(self).map_err(|e| {
            AddressBookError::Config(format!("Failed to serialize settings: {}", e))
        })?;

        std::fs::write(paths.settings_file(), contents).map_err(|e| {
            AddressBookError::Io(format!("Failed to write settings file: {}", e))
        })?;

        Ok(())
    }
}
