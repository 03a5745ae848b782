// SPDX-License-Identifier: CC0-1.0

//! Error types for parameter resolution.

use crate::network::constants::Network;

/// Errors returned while resolving chain parameters.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[non_exhaustive]
pub enum Error {
    /// The requested network name matches none of the known networks, or it
    /// names a network that has no parameter table.
    #[error(
        "BTC network with name {name} does not exist. should be one of {{{}}}",
        .supported.join(", ")
    )]
    UnsupportedNetwork {
        /// The name that was asked for.
        name: String,
        /// Every network name the registry knows about.
        supported: Vec<&'static str>,
    },

    /// A hard-coded hex literal could not be parsed.
    #[error("invalid hard-coded constant {literal}: {reason}")]
    InvalidLiteralConstant {
        /// The offending literal.
        literal: String,
        /// Why parsing failed.
        reason: String,
    },
}

impl Error {
    /// Builds an [`Error::UnsupportedNetwork`] for `name`, listing every
    /// known network name.
    pub fn unsupported_network(name: impl Into<String>) -> Self {
        Error::UnsupportedNetwork {
            name: name.into(),
            supported: Network::ALL.iter().map(|n| n.name()).collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unsupported_network_display() {
        let err = Error::unsupported_network("doesnotexist");
        assert_eq!(
            err.to_string(),
            "BTC network with name doesnotexist does not exist. \
             should be one of {mainnet, testnet, simnet, regtest, signet}"
        );
    }

    #[test]
    fn invalid_literal_display() {
        let err = Error::InvalidLiteralConstant {
            literal: "zz".to_string(),
            reason: "bad hex".to_string(),
        };
        assert!(err.to_string().contains("zz"));
        assert!(err.to_string().contains("bad hex"));
    }
}
