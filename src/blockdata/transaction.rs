// SPDX-License-Identifier: CC0-1.0

//! Bitcoin transactions.
//!
//! A transaction describes a transfer of money. It consumes previously-unspent
//! transaction outputs and produces new ones, satisfying the condition to spend
//! the old outputs (typically a digital signature with a specific key must be
//! provided) and defining the condition to spend the new ones.
//!
//! Only the legacy (non-witness) form is modelled, which is all a genesis
//! coinbase needs.
//!

use hashes::Hash;

use crate::blockdata::constants::MAX_SEQUENCE;
use crate::blockdata::script::ScriptBuf;
use crate::consensus::encode::serialize;
use crate::hash_types::Txid;
use crate::internal_macros::{impl_consensus_encoding, impl_vec};

/// A reference to a transaction output.
#[derive(Copy, Clone, Debug, Eq, Hash, PartialEq, PartialOrd, Ord)]
pub struct OutPoint {
    /// The referenced transaction's txid.
    pub txid: Txid,
    /// The index of the referenced output in its transaction's vout.
    pub vout: u32,
}
impl_consensus_encoding!(OutPoint, txid, vout);

impl OutPoint {
    /// Creates a new [`OutPoint`].
    #[inline]
    pub fn new(txid: Txid, vout: u32) -> OutPoint { OutPoint { txid, vout } }

    /// Creates a "null" `OutPoint`.
    ///
    /// This value is used for coinbase transactions because they don't have
    /// any previous outputs.
    #[inline]
    pub fn null() -> OutPoint { OutPoint { txid: Txid::all_zeros(), vout: u32::MAX } }

    /// Checks if an `OutPoint` is "null".
    #[inline]
    pub fn is_null(&self) -> bool { *self == OutPoint::null() }
}

/// A transaction input, which defines old coins to be consumed.
#[derive(Clone, PartialEq, Eq, PartialOrd, Ord, Debug, Hash)]
pub struct TxIn {
    /// The reference to the previous output that is being used as an input.
    pub previous_output: OutPoint,
    /// The script which pushes values on the stack which will cause
    /// the referenced output's script to be accepted.
    pub script_sig: ScriptBuf,
    /// The sequence number, which suggests to miners which of two
    /// conflicting transactions should be preferred.
    pub sequence: u32,
}
impl_consensus_encoding!(TxIn, previous_output, script_sig, sequence);

/// A transaction output, which defines new coins to be created from old ones.
#[derive(Clone, PartialEq, Eq, PartialOrd, Ord, Debug, Hash)]
pub struct TxOut {
    /// The value of the output, in satoshis.
    pub value: i64,
    /// The script which must be satisfied for the output to be spent.
    pub script_pubkey: ScriptBuf,
}
impl_consensus_encoding!(TxOut, value, script_pubkey);

/// A Bitcoin transaction, which describes an authenticated movement of coins.
#[derive(Clone, PartialEq, Eq, PartialOrd, Ord, Debug, Hash)]
pub struct Transaction {
    /// The protocol version, is currently expected to be 1 or 2 (BIP 68).
    pub version: i32,
    /// List of transaction inputs.
    pub input: Vec<TxIn>,
    /// List of transaction outputs.
    pub output: Vec<TxOut>,
    /// Block height or timestamp. Transaction cannot be included in a block
    /// until this height/time.
    pub lock_time: u32,
}
impl_consensus_encoding!(Transaction, version, input, output, lock_time);

impl_vec!(TxIn);
impl_vec!(TxOut);
impl_vec!(Transaction);

impl Transaction {
    /// Computes the [`Txid`], the double SHA256 of the serialized transaction.
    pub fn txid(&self) -> Txid { Txid::hash(&serialize(self)) }

    /// Checks if this is a coinbase transaction: exactly one input, spending
    /// the null outpoint.
    pub fn is_coinbase(&self) -> bool {
        self.input.len() == 1 && self.input[0].previous_output.is_null()
    }

    /// Returns whether every input opts out of replacement and relative
    /// lock times by using the final sequence number.
    pub fn is_final_sequence(&self) -> bool {
        self.input.iter().all(|txin| txin.sequence == MAX_SEQUENCE)
    }
}
