// SPDX-License-Identifier: CC0-1.0

//! # Bitcoin network parameters
//!
//! This library resolves a Bitcoin network name to the full set of consensus
//! parameters that chain-validation and relay code need: network magic,
//! genesis block, proof-of-work limit, soft-fork heights, version-bits
//! deployments and address encoding magics.
//!
//! Besides the well known `mainnet`, `simnet` and `regtest` tables, the
//! `testnet` name resolves to a custom test network whose genesis block and
//! proof-of-work limit are constructed here from literal values.
//!
//! ```rust
//! let params = netparams::resolve("testnet").unwrap();
//! assert_eq!(params.name, "fractaltest");
//! assert_eq!(params.genesis_block.block_hash(), params.genesis_hash);
//! ```
//!
//! The storage and metrics configuration objects that accompany the
//! parameters live in [`config`].
//!

// Coding conventions
#![forbid(unsafe_code)]
#![deny(non_upper_case_globals)]
#![deny(non_camel_case_types)]
#![deny(non_snake_case)]
#![deny(unused_mut)]
#![warn(missing_docs)]

// Re-exported dependencies.
pub use hashes;
pub use num_bigint;

#[cfg(target_pointer_width = "16")]
compile_error!("netparams cannot be used on 16-bit architectures");

mod internal_macros;
pub mod blockdata;
pub mod config;
pub mod consensus;
pub mod error;
pub mod hash_types;
pub mod network;
pub mod util;

pub use crate::blockdata::block::{Block, Header};
pub use crate::blockdata::script::ScriptBuf;
pub use crate::blockdata::transaction::{OutPoint, Transaction, TxIn, TxOut};
pub use crate::consensus::deployment::{ConsensusDeployment, DeploymentId, Deployments};
pub use crate::consensus::params::{init, resolve, Checkpoint, DnsSeed, Params};
pub use crate::error::Error;
pub use crate::hash_types::{BlockHash, TxMerkleNode, Txid};
pub use crate::network::constants::{Magic, Network};
