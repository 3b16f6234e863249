//! Storage configuration.

use std::path::{Path, PathBuf};

use primetoys_core::errors::{Error, Result};

/// Environment variable naming the application data directory.
pub const DATA_DIR_ENV: &str = "PRIMETOYS_DATA_DIR";

/// Environment variable that overrides the database file path.
pub const DATABASE_URL_ENV: &str = "DATABASE_URL";

/// Data directory used when none is configured.
pub const DEFAULT_DATA_DIR: &str = "./data";

/// Database file created inside the data directory.
pub const DB_FILE_NAME: &str = "primetoys.db";

/// Where the application keeps its local store.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StorageConfig {
    pub app_data_dir: PathBuf,
    pub db_path: PathBuf,
}

impl StorageConfig {
    /// Keeps the database at `<app_data_dir>/primetoys.db`.
    pub fn new(app_data_dir: impl Into<PathBuf>) -> Self {
        let app_data_dir = app_data_dir.into();
        let db_path = app_data_dir.join(DB_FILE_NAME);
        Self {
            app_data_dir,
            db_path,
        }
    }

    /// Reads `PRIMETOYS_DATA_DIR` and `DATABASE_URL` from the environment.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds a config from any variable source. Empty values count as unset.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let non_empty = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let data_dir = non_empty(DATA_DIR_ENV).unwrap_or_else(|| DEFAULT_DATA_DIR.to_string());
        let mut config = Self::new(data_dir);
        if let Some(url) = non_empty(DATABASE_URL_ENV) {
            config.db_path = PathBuf::from(url);
        }
        config
    }

    /// The database path as the UTF-8 string Diesel expects.
    pub fn db_path_str(&self) -> Result<&str> {
        path_str(&self.db_path)
    }
}

fn path_str(path: &Path) -> Result<&str> {
    path.to_str().ok_or_else(|| {
        Error::ConfigIO(format!(
            "database path is not valid UTF-8: {}",
            path.display()
        ))
    })
}
