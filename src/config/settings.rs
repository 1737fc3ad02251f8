//! Operator settings for bankdesk
//!
//! Controls how the console session behaves: whether a successful user
//! creation leaves the manager menu, which service a customer pays, and
//! whether passwords are read without echo.

use serde::{Deserialize, Serialize};

use super::paths::BankPaths;
use crate::error::BankError;

/// Operator settings for bankdesk
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    /// Schema version for migration support
    #[serde(default = "default_schema_version")]
    pub schema_version: u32,

    /// Leave the manager menu after a user was created successfully.
    ///
    /// This mirrors the long-standing console behaviour where the result of
    /// the create-user command doubles as the loop's exit signal.
    #[serde(default = "default_true")]
    pub exit_on_user_created: bool,

    /// Service paid by the customer "pay a service" command
    #[serde(default = "default_service_id")]
    pub default_service_id: u64,

    /// Read the login password from the terminal without echo
    #[serde(default = "default_true")]
    pub mask_password: bool,
}

fn default_schema_version() -> u32 {
    1
}

fn default_true() -> bool {
    true
}

fn default_service_id() -> u64 {
    1
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            schema_version: default_schema_version(),
            exit_on_user_created: default_true(),
            default_service_id: default_service_id(),
            mask_password: default_true(),
        }
    }
}

impl Settings {
    /// Load settings from disk, or create default settings if file doesn't exist
    pub fn load_or_create(paths: &BankPaths) -> Result<Self, BankError> {
        let settings_path = paths.settings_file();

        if settings_path.exists() {
            let contents = std::fs::read_to_string(&settings_path)
                .map_err(|e| BankError::Io(format!("Failed to read settings file: {}", e)))?;

            let settings: Settings = serde_json::from_str(&contents).map_err(|e| {
                BankError::Config(format!("Failed to parse settings file: {}", e))
            })?;

            Ok(settings)
        } else {
            // Don't save yet - let caller decide when to persist
            Ok(Settings::default())
        }
    }

    /// Save settings to disk
    pub fn save(&self, paths: &BankPaths) -> Result<(), BankError> {
        paths.ensure_directories()?;

        let contents = serde_json::to_string_pretty(self)
            .map_err(|e| BankError::Config(format!("Failed to serialize settings: {}", e)))?;

        std::fs::write(paths.settings_file(), contents)
            .map_err(|e| BankError::Io(format!("Failed to write settings file: {}", e)))?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_default_settings() {
        let settings = Settings::default();
        assert!(settings.exit_on_user_created);
        assert!(settings.mask_password);
        assert_eq!(settings.default_service_id, 1);
    }

    #[test]
    fn test_save_and_load() {
        let temp_dir = TempDir::new().unwrap();
        let paths = BankPaths::with_base_dir(temp_dir.path().to_path_buf());

        let mut settings = Settings::default();
        settings.exit_on_user_created = false;
        settings.default_service_id = 7;
        settings.save(&paths).unwrap();

        let loaded = Settings::load_or_create(&paths).unwrap();
        assert!(!loaded.exit_on_user_created);
        assert_eq!(loaded.default_service_id, 7);
    }

    #[test]
    fn test_missing_fields_use_defaults() {
        let loaded: Settings = serde_json::from_str(r#"{"default_service_id": 3}"#).unwrap();
        assert_eq!(loaded.schema_version, 1);
        assert!(loaded.exit_on_user_created);
        assert_eq!(loaded.default_service_id, 3);
    }

    #[test]
    fn test_invalid_file_is_config_error() {
        let temp_dir = TempDir::new().unwrap();
        let paths = BankPaths::with_base_dir(temp_dir.path().to_path_buf());
        std::fs::write(paths.settings_file(), "not json").unwrap();

        let err = Settings::load_or_create(&paths).unwrap_err();
        assert!(matches!(err, BankError::Config(_)));
    }
}
