// SPDX-License-Identifier: CC0-1.0

//! Bitcoin hash types.
//!
//! This module defines types for hashes used throughout the library. These
//! types are needed in order to avoid mixing data of the same hash format
//! (e.g. `SHA256d`) but of different meaning (such as transaction id and
//! block hash).
//!

use hashes::{hash_newtype, sha256d, Hash};

use crate::error::Error;

hash_newtype! {
    /// A bitcoin transaction hash/transaction ID.
    pub struct Txid(sha256d::Hash);

    /// A hash of the Merkle tree branch or root for transactions.
    pub struct TxMerkleNode(sha256d::Hash);

    /// A bitcoin block hash.
    pub struct BlockHash(sha256d::Hash);
}

impl From<Txid> for TxMerkleNode {
    fn from(txid: Txid) -> Self { TxMerkleNode::from_byte_array(txid.to_byte_array()) }
}

/// Parses a big-endian (display order) hex string into a hash.
///
/// Only meant for hard-coded literals; see [`hash_from_literal`].
pub fn parse_literal_hash<T: Hash<Bytes = [u8; 32]>>(hex: &str) -> Result<T, Error> {
    let hash = hex.parse::<sha256d::Hash>().map_err(|e| Error::InvalidLiteralConstant {
        literal: hex.to_owned(),
        reason: e.to_string(),
    })?;
    Ok(T::from_byte_array(hash.to_byte_array()))
}

/// Converts a hard-coded big-endian hex string into a hash.
///
/// # Panics
///
/// Panics if the literal is malformed. The input is always a compile-time
/// constant, so a failure here is a defect in this crate and can only
/// happen while the parameter tables are first built.
pub fn hash_from_literal<T: Hash<Bytes = [u8; 32]>>(hex: &str) -> T {
    match parse_literal_hash(hex) {
        Ok(hash) => hash,
        Err(e) => panic!("{}", e),
    }
}
