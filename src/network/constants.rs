// SPDX-License-Identifier: CC0-1.0

//! Network constants
//!
//! This module provides the [`Network`] names the parameter registry is keyed
//! by and the [`Magic`] values identifying each network on the wire.
//!
//! # Example: parsing a network name
//!
//! ```rust
//! use netparams::network::constants::Network;
//!
//! let network: Network = "regtest".parse().unwrap();
//! assert_eq!(network, Network::Regtest);
//! assert_eq!(network.to_string(), "regtest");
//! assert!("fakenet".parse::<Network>().is_err());
//! ```

use core::fmt;
use core::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::consensus::params::Params;
use crate::error::Error;

/// The Bitcoin network to act on.
#[derive(Copy, PartialEq, Eq, PartialOrd, Ord, Clone, Hash, Debug, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Network {
    /// Mainnet Bitcoin.
    Mainnet,
    /// The public test network. Resolves to the fractal test network
    /// parameters.
    Testnet,
    /// The simulation test network.
    Simnet,
    /// The regression test network.
    Regtest,
    /// The signet test network. Known by name, but has no parameter table.
    Signet,
}

impl Network {
    /// Every known network, in the order error messages list them.
    pub const ALL: [Network; 5] =
        [Network::Mainnet, Network::Testnet, Network::Simnet, Network::Regtest, Network::Signet];

    /// Returns the lowercase name used in configuration files and on the
    /// command line.
    pub fn name(self) -> &'static str {
        match self {
            Network::Mainnet => "mainnet",
            Network::Testnet => "testnet",
            Network::Simnet => "simnet",
            Network::Regtest => "regtest",
            Network::Signet => "signet",
        }
    }

    /// Returns whether the registry holds a parameter table for this network.
    pub fn is_supported(self) -> bool { !matches!(self, Network::Signet) }

    /// Returns the consensus parameters of this network.
    pub fn params(self) -> Result<&'static Params, Error> { Params::for_network(self) }
}

/// An error in parsing network string.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("failed to parse {0} as network")]
#[non_exhaustive]
pub struct ParseNetworkError(pub String);

impl FromStr for Network {
    type Err = ParseNetworkError;

    #[inline]
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Network::ALL
            .iter()
            .copied()
            .find(|network| network.name() == s)
            .ok_or_else(|| ParseNetworkError(s.to_owned()))
    }
}

impl fmt::Display for Network {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result { f.write_str(self.name()) }
}

/// Network magic bytes to identify the cryptocurrency network the message
/// was intended for.
///
/// The value is written little-endian at the start of every p2p message.
#[derive(Copy, PartialEq, Eq, PartialOrd, Ord, Clone, Hash, Debug)]
pub struct Magic(u32);

impl Magic {
    /// Bitcoin mainnet network magic bytes.
    pub const MAINNET: Self = Self(0xd9b4bef9);
    /// Bitcoin testnet3 network magic bytes. Kept for reference, no parameter
    /// table uses it.
    pub const TESTNET3: Self = Self(0x0709110b);
    /// Bitcoin regtest network magic bytes. The fractal test network uses
    /// the same value.
    pub const REGTEST: Self = Self(0xdab5bffa);
    /// Bitcoin simnet network magic bytes.
    pub const SIMNET: Self = Self(0x12141c16);
    /// Bitcoin signet network magic bytes. Kept for reference, no parameter
    /// table uses it.
    pub const SIGNET: Self = Self(0x40cf030a);

    /// Creates a magic from its numeric value.
    pub const fn from_u32(value: u32) -> Self { Magic(value) }

    /// Returns the numeric value.
    pub const fn to_u32(self) -> u32 { self.0 }

    /// Returns the bytes as they appear on the wire.
    pub const fn to_bytes(self) -> [u8; 4] { self.0.to_le_bytes() }
}

impl fmt::LowerHex for Magic {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result { fmt::LowerHex::fmt(&self.0, f) }
}

impl fmt::Display for Magic {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result { write!(f, "{:#010x}", self.0) }
}
