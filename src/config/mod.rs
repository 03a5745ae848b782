// SPDX-License-Identifier: CC0-1.0

//! Configuration.
//!
//! Plain configuration values consumed next to the chain parameters: where
//! the key-value database lives and where the metrics endpoint listens.
//! Nothing here opens files or sockets.
//!

pub mod db;
pub mod metrics;

use std::path::PathBuf;

pub use self::db::{BoltBackendConfig, DbConfig};
pub use self::metrics::MetricsConfig;

/// A configuration value failed validation.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[non_exhaustive]
pub enum ConfigError {
    /// The database directory is empty.
    #[error("DB path cannot be empty")]
    EmptyDbPath,
    /// The database file name is empty.
    #[error("DB file name cannot be empty")]
    EmptyDbFileName,
    /// The metrics port is outside `0..=65535`.
    #[error("invalid port: {0}")]
    InvalidPort(i64),
    /// The metrics host is not an IP address.
    #[error("invalid host: {0}")]
    InvalidHost(String),
}

/// Default application directory, `~/.netparams`.
///
/// Falls back to a relative `.netparams` when no home directory is known.
pub fn default_app_data_dir() -> PathBuf {
    dirs::home_dir().map(|h| h.join(".netparams")).unwrap_or_else(|| PathBuf::from(".netparams"))
}

/// Directory holding chain data below an application home directory.
pub fn data_dir(home: impl Into<PathBuf>) -> PathBuf { home.into().join("data") }
