//! Builder for creating and configuring DecisionStore instances.

use std::path::{Path, PathBuf};

use log::info;

use super::DecisionStore;
use crate::{
    db::Database,
    error::{JournalError, Result},
};

/// Builder for opening a SQLite-backed decision store.
#[derive(Debug, Clone, Default)]
pub struct StoreBuilder {
    database_path: Option<PathBuf>,
}

impl StoreBuilder {
    /// Creates a new builder with default settings.
    pub fn new() -> Self {
        Self {
            database_path: None,
        }
    }

    /// Sets a custom database file path.
    ///
    /// If not specified, uses XDG Base Directory specification:
    /// `$XDG_DATA_HOME/lumen/lumen.db` or `~/.local/share/lumen/lumen.db`
    pub fn with_database_path<P: AsRef<Path>>(mut self, path: Option<P>) -> Self {
        if let Some(path) = path {
            self.database_path = Some(path.as_ref().to_path_buf());
        }
        self
    }

    /// Opens the database and loads the persisted collection.
    ///
    /// # Errors
    ///
    /// Returns `JournalError::FileSystem` if the parent directory cannot be
    /// created, `JournalError::XdgDirectory` if no default location exists,
    /// and `JournalError::Database` if the database cannot be opened.
    pub fn build(self) -> Result<DecisionStore> {
        let db_path = match self.database_path {
            Some(path) => path,
            None => Self::default_database_path()?,
        };

        if let Some(parent) = db_path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent).map_err(|e| JournalError::FileSystem {
                path: parent.to_path_buf(),
                source: e,
            })?;
        }

        let database = Database::new(&db_path)?;
        info!("Opened decision journal at {}", db_path.display());
        Ok(DecisionStore::open(database))
    }

    /// Returns the default database path following XDG Base Directory
    /// specification.
    fn default_database_path() -> Result<PathBuf> {
        xdg::BaseDirectories::with_prefix("lumen")
            .place_data_file("lumen.db")
            .map_err(|e| JournalError::XdgDirectory(e.to_string()))
    }
}
