// SPDX-License-Identifier: CC0-1.0

//! Database configuration.

use std::path::PathBuf;
use std::time::Duration;

use serde::{Deserialize, Serialize};
use tracing::warn;

use super::{data_dir, default_app_data_dir, ConfigError};

/// Default database file name.
pub const DEFAULT_DB_FILE_NAME: &str = "netparams.db";

/// Default minimum age of a database file before it is compacted again.
pub const DEFAULT_AUTO_COMPACT_MIN_AGE: Duration = Duration::from_secs(168 * 60 * 60);

/// Default timeout when opening the database.
pub const DEFAULT_DB_TIMEOUT: Duration = Duration::from_secs(60);

/// Where and how the key-value database is stored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DbConfig {
    /// Directory in which the database file is stored.
    pub db_path: PathBuf,
    /// Name of the database file.
    pub db_file_name: String,
    /// Skip syncing the freelist to disk. Faster writes, slower startup.
    pub no_freelist_sync: bool,
    /// Compact the database on startup once it is older than
    /// [`auto_compact_min_age`](Self::auto_compact_min_age).
    pub auto_compact: bool,
    /// Minimum time since the last compaction before compacting again.
    pub auto_compact_min_age: Duration,
    /// Timeout when opening the database.
    pub db_timeout: Duration,
}

impl Default for DbConfig {
    fn default() -> Self { DbConfig::with_home_path(default_app_data_dir()) }
}

impl DbConfig {
    /// Default configuration storing data below `home`.
    pub fn with_home_path(home: impl Into<PathBuf>) -> Self {
        DbConfig {
            db_path: data_dir(home),
            db_file_name: DEFAULT_DB_FILE_NAME.to_owned(),
            no_freelist_sync: true,
            auto_compact: false,
            auto_compact_min_age: DEFAULT_AUTO_COMPACT_MIN_AGE,
            db_timeout: DEFAULT_DB_TIMEOUT,
        }
    }

    /// Checks that both the directory and the file name are set.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let res = if self.db_path.as_os_str().is_empty() {
            Err(ConfigError::EmptyDbPath)
        } else if self.db_file_name.is_empty() {
            Err(ConfigError::EmptyDbFileName)
        } else {
            Ok(())
        };
        if let Err(ref e) = res {
            warn!(error = %e, "invalid database configuration");
        }
        res
    }

    /// Full path of the database file.
    pub fn file_path(&self) -> PathBuf { self.db_path.join(&self.db_file_name) }

    /// Options handed to the bolt backend when opening the database.
    pub fn to_backend_config(&self) -> BoltBackendConfig {
        BoltBackendConfig {
            db_path: self.db_path.clone(),
            db_file_name: self.db_file_name.clone(),
            no_freelist_sync: self.no_freelist_sync,
            auto_compact: self.auto_compact,
            auto_compact_min_age: self.auto_compact_min_age,
            db_timeout: self.db_timeout,
        }
    }
}

/// Options for opening a bolt key-value database.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BoltBackendConfig {
    /// Directory of the database file.
    pub db_path: PathBuf,
    /// Name of the database file.
    pub db_file_name: String,
    /// See [`DbConfig::no_freelist_sync`].
    pub no_freelist_sync: bool,
    /// See [`DbConfig::auto_compact`].
    pub auto_compact: bool,
    /// See [`DbConfig::auto_compact_min_age`].
    pub auto_compact_min_age: Duration,
    /// See [`DbConfig::db_timeout`].
    pub db_timeout: Duration,
}
