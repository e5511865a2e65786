use std::path::{Path, PathBuf};

/// File name used when no `--db` path is given.
pub const DEFAULT_DB_FILE: &str = "routes.db";

/// Runtime configuration, resolved once at startup.
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    /// Path to the SQLite database file
    pub db_path: PathBuf,
}

impl Config {
    /// Create a config for an explicit database path
    pub fn new(db_path: impl Into<PathBuf>) -> Self {
        Self {
            db_path: db_path.into(),
        }
    }

    /// Use `db_path` when given, otherwise `<home>/routes.db`.
    pub fn resolve(db_path: Option<PathBuf>) -> Self {
        Self::new(db_path.unwrap_or_else(Self::default_db_path))
    }

    /// `<home>/routes.db`, or `routes.db` in the working directory without a home.
    pub fn default_db_path() -> PathBuf {
        dirs::home_dir()
            .map(|home| home.join(DEFAULT_DB_FILE))
            .unwrap_or_else(|| PathBuf::from(DEFAULT_DB_FILE))
    }

    pub fn db_path(&self) -> &Path {
        &self.db_path
    }
}
