//! Where the settings file and the database live
//!
//! `EXPENSES_DATA_DIR` overrides the base directory; otherwise it is
//! `expenses-cli` inside the platform's config directory.

use std::path::PathBuf;

use crate::error::ExpenseError;

/// Environment variable that overrides the base directory
pub const DATA_DIR_ENV: &str = "EXPENSES_DATA_DIR";

const APP_DIR: &str = "expenses-cli";

/// Resolved locations for settings and databases
#[derive(Debug, Clone)]
pub struct ExpensePaths {
    base_dir: PathBuf,
}

impl ExpensePaths {
    /// Resolve the base directory from the environment
    pub fn new() -> Result<Self, ExpenseError> {
        let base_dir = match non_empty_var(DATA_DIR_ENV) {
            Some(custom) => PathBuf::from(custom),
            None => platform_config_dir()?.join(APP_DIR),
        };

        Ok(Self { base_dir })
    }

    /// Use an explicit base directory
    pub fn with_base_dir(base_dir: PathBuf) -> Self {
        Self { base_dir }
    }

    pub fn data_dir(&self) -> PathBuf {
        self.base_dir.join("data")
    }

    pub fn settings_file(&self) -> PathBuf {
        self.base_dir.join("config.json")
    }

    /// SQLite file for the database called `name`
    pub fn database_file(&self, name: &str) -> PathBuf {
        self.data_dir().join(format!("{}.db", name))
    }

    /// Create the data directory (and the base directory above it)
    pub fn ensure_directories(&self) -> Result<(), ExpenseError> {
        let data_dir = self.data_dir();
        std::fs::create_dir_all(&data_dir).map_err(|e| {
            ExpenseError::Io(format!(
                "Failed to create data directory {}: {}",
                data_dir.display(),
                e
            ))
        })
    }
}

fn non_empty_var(name: &str) -> Option<String> {
    std::env::var(name).ok().filter(|v| !v.is_empty())
}

#[cfg(not(windows))]
fn platform_config_dir() -> Result<PathBuf, ExpenseError> {
    if let Some(xdg) = non_empty_var("XDG_CONFIG_HOME") {
        return Ok(PathBuf::from(xdg));
    }
    non_empty_var("HOME")
        .map(|home| PathBuf::from(home).join(".config"))
        .ok_or_else(|| ExpenseError::Config("Could not determine HOME directory".into()))
}

#[cfg(windows)]
fn platform_config_dir() -> Result<PathBuf, ExpenseError> {
    non_empty_var("APPDATA")
        .map(PathBuf::from)
        .ok_or_else(|| ExpenseError::Config("Could not determine APPDATA directory".into()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_env_var_override() {
        let temp_dir = TempDir::new().unwrap();

        std::env::set_var(DATA_DIR_ENV, temp_dir.path());
        let paths = ExpensePaths::new().unwrap();
        std::env::remove_var(DATA_DIR_ENV);

        assert_eq!(paths.settings_file(), temp_dir.path().join("config.json"));
    }

    #[test]
    fn test_ensure_directories_creates_missing_parents() {
        let temp_dir = TempDir::new().unwrap();
        let paths = ExpensePaths::with_base_dir(temp_dir.path().join("a").join("b"));

        paths.ensure_directories().unwrap();
        assert!(paths.data_dir().is_dir());

        // Second call is a no-op
        paths.ensure_directories().unwrap();
    }

    #[test]
    fn test_file_locations() {
        let paths = ExpensePaths::with_base_dir(PathBuf::from("/tmp/exp"));

        assert_eq!(paths.settings_file(), PathBuf::from("/tmp/exp/config.json"));
        assert_eq!(
            paths.database_file("household"),
            PathBuf::from("/tmp/exp/data/household.db")
        );
    }
}
