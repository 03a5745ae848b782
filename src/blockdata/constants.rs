// SPDX-License-Identifier: CC0-1.0

//! Blockdata constants.
//!
//! This module provides various constants relating to the blockchain and
//! consensus code. In particular, it defines the genesis block of every
//! supported network and its single transaction.
//!
//! All networks share the same coinbase transaction; they differ only in the
//! header's timestamp, difficulty bits and nonce.
//!

use hashes::Hash;
use hex_lit::hex;

use crate::blockdata::block::{Block, Header};
use crate::blockdata::script::ScriptBuf;
use crate::blockdata::transaction::{OutPoint, Transaction, TxIn, TxOut};
use crate::hash_types::{hash_from_literal, BlockHash, TxMerkleNode};

/// The maximum allowable sequence number.
pub const MAX_SEQUENCE: u32 = 0xFFFFFFFF;
/// How many satoshis are in "one bitcoin".
pub const COIN_VALUE: i64 = 100_000_000;

/// Merkle root of every genesis block: the txid of the genesis coinbase.
pub const GENESIS_MERKLE_ROOT: &str =
    "4a5e1e4baab89f3a32518a88c31bc87f618f76673e2cc77ab2127b7afdeda33b";
/// Genesis block hash of mainnet and of the fractal test network.
pub const MAINNET_GENESIS_HASH: &str =
    "000000000019d6689c085ae165831e934ff763ae46a2a6c172b3f1b60a8ce26f";
/// Genesis block hash of the fractal test network served under `testnet`.
pub const TESTNET_GENESIS_HASH: &str = MAINNET_GENESIS_HASH;
/// Genesis block hash of the regression test network.
pub const REGTEST_GENESIS_HASH: &str =
    "0f9188f13cb7b2c71f2a335e3a4fc328bf5beb436012afca590b1a11466e2206";
/// Genesis block hash of the simulation test network.
pub const SIMNET_GENESIS_HASH: &str =
    "683e86bd5c6d110d91b94b97137ba6bfe02dbbdb8e3dff722a669b5d69d77af6";

// Pushes 486604799, 4 and the "The Times 03/Jan/2009 Chancellor on brink of
// second bailout for banks" headline.
const GENESIS_SCRIPT_SIG: [u8; 77] = hex!("04ffff001d0104455468652054696d65732030332f4a616e2f32303039204368616e63656c6c6f72206f6e206272696e6b206f66207365636f6e64206261696c6f757420666f722062616e6b73");

// <65-byte uncompressed pubkey> OP_CHECKSIG
const GENESIS_SCRIPT_PUBKEY: [u8; 67] = hex!("4104678afdb0fe5548271967f1a67130b7105cd6a828e03909a67962e0ea1f61deb649f6bc3f4cef38c4f35504e51ec112de5c384df7ba0b8d578a4c702b6bf11d5fac");

/// Constructs and returns the coinbase (and only) transaction of the genesis block.
pub fn genesis_coinbase_tx() -> Transaction {
    Transaction {
        version: 1,
        input: vec![TxIn {
            previous_output: OutPoint::null(),
            script_sig: ScriptBuf::from(&GENESIS_SCRIPT_SIG[..]),
            sequence: MAX_SEQUENCE,
        }],
        output: vec![TxOut {
            value: 0x12a05f200, // 50 BTC
            script_pubkey: ScriptBuf::from(&GENESIS_SCRIPT_PUBKEY[..]),
        }],
        lock_time: 0,
    }
}

fn genesis_block(time: u32, bits: u32, nonce: u32) -> Block {
    Block {
        header: Header {
            version: 1,
            prev_blockhash: BlockHash::all_zeros(),
            merkle_root: hash_from_literal::<TxMerkleNode>(GENESIS_MERKLE_ROOT),
            time,
            bits,
            nonce,
        },
        txdata: vec![genesis_coinbase_tx()],
    }
}

/// Constructs and returns the mainnet genesis block.
pub fn mainnet_genesis_block() -> Block {
    genesis_block(
        1231006505, // 2009-01-03 18:15:05 +0000 UTC
        0x1d00ffff, // 486604799 [00000000ffff0000000000000000000000000000000000000000000000000000]
        0x7c2bac1d, // 2083236893
    )
}

/// Constructs and returns the genesis block of the fractal test network.
///
/// The network reuses the Bitcoin genesis block, so the header matches
/// [`mainnet_genesis_block`] and hashes to [`TESTNET_GENESIS_HASH`].
pub fn testnet_genesis_block() -> Block { mainnet_genesis_block() }

/// Constructs and returns the regression test network genesis block.
pub fn regtest_genesis_block() -> Block {
    genesis_block(
        1296688602, // 2011-02-02 23:16:42 +0000 UTC
        0x207fffff, // 545259519 [7fffff0000000000000000000000000000000000000000000000000000000000]
        2,
    )
}

/// Constructs and returns the simulation test network genesis block.
pub fn simnet_genesis_block() -> Block {
    genesis_block(
        1401292357, // 2014-05-28 15:52:37 +0000 UTC
        0x207fffff, // 545259519 [7fffff0000000000000000000000000000000000000000000000000000000000]
        2,
    )
}
