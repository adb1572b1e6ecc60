//! Path management for the address book
//!
//! Provides XDG-compliant path resolution for configuration, data and the
//! audit log.
//!
//! ## Path Resolution Order
//!
//! 1. `ADDRESSBOOK_DATA_DIR` environment variable (if set)
//! 2. Unix (Linux/macOS): `$XDG_CONFIG_HOME/addressbook` or `~/.config/addressbook`
//! 3. Windows: `%APPDATA%\addressbook`

use std::path::PathBuf;

use crate::error::AddressBookError;

/// Environment variable overriding the base directory
pub const DATA_DIR_ENV: &str = "ADDRESSBOOK_DATA_DIR";

/// Manages all paths used by the address book
#[derive(Debug, Clone)]
pub struct AddressBookPaths {
    /// Base directory for all address book files
    base_dir: PathBuf,
}

impl AddressBookPaths {
    /// Create a new AddressBookPaths instance
    ///
    /// # Errors
    ///
    /// Returns an error if the home directory cannot be determined.
    pub fn new() -> Result<Self, AddressBookError> {
        let base_dir = if let Ok(custom) = std::env::var(DATA_DIR_ENV) {
            PathBuf::from(custom)
        } else {
            resolve_default_path()?
        };

        Ok(Self { base_dir })
    }

    /// Create AddressBookPaths with a custom base directory
    pub fn with_base_dir(base_dir: PathBuf) -> Self {
        Self { base_dir }
    }

    pub fn base_dir(&self) -> &PathBuf {
        &self.base_dir
    }

    /// Get the data directory (~/.config/addressbook/data/)
    pub fn data_dir(&self) -> PathBuf {
        self.base_dir.join("data")
    }

    /// Get the path to the settings file
    pub fn settings_file(&self) -> PathBuf {
        self.base_dir.join("config.json")
    }

    /// Get the path to the audit log
    pub fn audit_log(&self) -> PathBuf {
        self.base_dir.join("audit.log")
    }

    /// Get the path to contacts.json
    pub fn contacts_file(&self) -> PathBuf {
        self.data_dir().join("contacts.json")
    }

    /// Ensure the base and data directories exist
    pub fn ensure_directories(&self) -> Result<(), AddressBookError> {
        std::fs::create_dir_all(&self.base_dir).map_err(|e| {
            AddressBookError::Io(format!("Failed to create base directory: {}", e))
        })?;

        std::fs::create_dir_all(self.data_dir()).map_err(|e| {
            AddressBookError::Io(format!("Failed to create data directory: {}", e))
        })?;

        Ok(())
    }
}

#[cfg(not(windows))]
fn resolve_default_path() -> Result<PathBuf, AddressBookError> {
    let config_base = match std::env::var("XDG_CONFIG_HOME") {
        Ok(dir) => PathBuf::from(dir),
        Err(_) => {
            let home = std::env::var("HOME").map_err(|_| {
                AddressBookError::Config("HOME environment variable not set".into())
            })?;
            PathBuf::from(home).join(".config")
        }
    };
    Ok(config_base.join("addressbook"))
}

#[cfg(windows)]
fn resolve_default_path() -> Result<PathBuf, AddressBookError> {
    let appdata = std::env::var("APPDATA")
        .map_err(|_| AddressBookError::Config("Could not determine APPDATA directory".into()))?;
    Ok(PathBuf::from(appdata).join("addressbook"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::env;
    use tempfile::TempDir;

    #[test]
    fn test_custom_base_dir() {
        let temp_dir = TempDir::new().unwrap();
        let paths = AddressBookPaths::with_base_dir(temp_dir.path().to_path_buf());

        assert_eq!(paths.base_dir(), temp_dir.path());
        assert_eq!(paths.data_dir(), temp_dir.path().join("data"));
    }

    #[test]
    fn test_env_var_override() {
        let temp_dir = TempDir::new().unwrap();
        let custom_path = temp_dir.path().to_str().unwrap();

        env::set_var(DATA_DIR_ENV, custom_path);
        let paths = AddressBookPaths::new().unwrap();
        env::remove_var(DATA_DIR_ENV);

        assert_eq!(paths.base_dir(), temp_dir.path());
    }

    #[test]
    fn test_ensure_directories() {
        let temp_dir = TempDir::new().unwrap();
        let paths = AddressBookPaths::with_base_dir(temp_dir.path().join("nested"));

        paths.ensure_directories().unwrap();

        assert!(paths.data_dir().exists());
    }

    #[test]
    fn test_file_paths() {
        let temp_dir = TempDir::new().unwrap();
        let paths = AddressBookPaths::with_base_dir(temp_dir.path().to_path_buf());

        assert_eq!(paths.settings_file(), temp_dir.path().join("config.json"));
        assert_eq!(paths.audit_log(), temp_dir.path().join("audit.log"));
        assert_eq!(
            paths.contacts_file(),
            temp_dir.path().join("data").join("contacts.json")
        );
    }
}
