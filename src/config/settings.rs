//! User settings for the expenses CLI
//!
//! Settings live in `config.json` under the base directory. The file is
//! optional and every field has a default, so a partial file loads cleanly.

use serde::Deserialize;

use super::paths::ExpensePaths;
use crate::error::ExpenseError;

/// User settings for the expenses CLI
#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    /// Name of the database holding the `expenses` table
    #[serde(default = "default_database_name")]
    pub database_name: String,

    /// Log filter used when `RUST_LOG` is not set
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

fn default_database_name() -> String {
    "expenses".to_string()
}

fn default_log_level() -> String {
    "warn".to_string()
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            database_name: default_database_name(),
            log_level: default_log_level(),
        }
    }
}

impl Settings {
    /// Load settings from disk, falling back to defaults when there is no file
    pub fn load_or_create(paths: &ExpensePaths) -> Result<Self, ExpenseError> {
        let settings_path = paths.settings_file();

        if !settings_path.exists() {
            return Ok(Settings::default());
        }

        let contents = std::fs::read_to_string(&settings_path)
            .map_err(|e| ExpenseError::Io(format!("Failed to read settings file: {}", e)))?;

        let settings: Settings = serde_json::from_str(&contents)
            .map_err(|e| ExpenseError::Config(format!("Failed to parse settings file: {}", e)))?;

        if settings.database_name.trim().is_empty() {
            return Err(ExpenseError::Config(
                "database_name must not be empty".into(),
            ));
        }

        Ok(settings)
    }
}
