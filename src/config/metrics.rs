// SPDX-License-Identifier: CC0-1.0

//! Metrics endpoint configuration.

use std::net::{IpAddr, SocketAddr};

use serde::{Deserialize, Serialize};
use tracing::warn;

use super::ConfigError;

/// Environment variable overriding the default metrics port.
pub const METRICS_PORT_ENV: &str = "METRICS_PORT";

/// Default metrics port.
pub const DEFAULT_METRICS_PORT: i64 = 2112;

/// Default metrics host, listening on every interface.
pub const DEFAULT_METRICS_HOST: &str = "0.0.0.0";

/// Where the metrics server listens.
///
/// The port is kept as a signed integer so that out of range values from a
/// configuration file survive deserialization and are reported by
/// [`validate`](Self::validate).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MetricsConfig {
    /// IP address of the metrics server.
    pub host: String,
    /// Port of the metrics server.
    #[serde(rename = "server-port")]
    pub server_port: i64,
}

impl Default for MetricsConfig {
    /// Reads the port from `METRICS_PORT`, falling back to 2112.
    fn default() -> Self {
        MetricsConfig::from_port_override(std::env::var(METRICS_PORT_ENV).ok().as_deref())
    }
}

impl MetricsConfig {
    /// Default configuration with the port taken from `port` when it parses
    /// as an integer.
    pub fn from_port_override(port: Option<&str>) -> Self {
        MetricsConfig {
            host: DEFAULT_METRICS_HOST.to_owned(),
            server_port: port.and_then(|p| p.parse().ok()).unwrap_or(DEFAULT_METRICS_PORT),
        }
    }

    /// Checks the port range and that the host is an IP address.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.listen_addr().map(|_| ())
    }

    /// The socket address to bind.
    pub fn listen_addr(&self) -> Result<SocketAddr, ConfigError> {
        let port = match u16::try_from(self.server_port) {
            Ok(port) => port,
            Err(_) => {
                warn!(port = self.server_port, "invalid metrics port");
                return Err(ConfigError::InvalidPort(self.server_port));
            }
        };
        let ip: IpAddr = match self.host.parse() {
            Ok(ip) => ip,
            Err(_) => {
                warn!(host = %self.host, "invalid metrics host");
                return Err(ConfigError::InvalidHost(self.host.clone()));
            }
        };
        Ok(SocketAddr::new(ip, port))
    }
}
