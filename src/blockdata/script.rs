// SPDX-License-Identifier: CC0-1.0

//! Bitcoin scripts.
//!
//! Scripts are kept as opaque byte strings; nothing in this library
//! interprets or executes them.
//!

use core::fmt;
use std::io;

use crate::consensus::encode::{Encodable, VarInt};

/// An owned, growable script.
#[derive(Default, Clone, PartialOrd, Ord, PartialEq, Eq, Hash)]
pub struct ScriptBuf(Vec<u8>);

impl ScriptBuf {
    /// Creates a new empty script.
    pub const fn new() -> Self { ScriptBuf(Vec::new()) }

    /// Creates a script from raw bytes.
    pub fn from_bytes(bytes: Vec<u8>) -> Self { ScriptBuf(bytes) }

    /// Returns the script data as a byte slice.
    pub fn as_bytes(&self) -> &[u8] { &self.0 }

    /// Returns the length in bytes of the script.
    pub fn len(&self) -> usize { self.0.len() }

    /// Returns whether the script is the empty script.
    pub fn is_empty(&self) -> bool { self.0.is_empty() }
}

impl From<Vec<u8>> for ScriptBuf {
    fn from(v: Vec<u8>) -> Self { ScriptBuf(v) }
}

impl From<&[u8]> for ScriptBuf {
    fn from(v: &[u8]) -> Self { ScriptBuf(v.to_vec()) }
}

impl AsRef<[u8]> for ScriptBuf {
    fn as_ref(&self) -> &[u8] { &self.0 }
}

impl fmt::LowerHex for ScriptBuf {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        for b in self.0.iter() {
            write!(f, "{:02x}", b)?;
        }
        Ok(())
    }
}

impl fmt::Debug for ScriptBuf {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result { write!(f, "ScriptBuf({:x})", self) }
}

impl Encodable for ScriptBuf {
    #[inline]
    fn consensus_encode<W: io::Write + ?Sized>(&self, w: &mut W) -> Result<usize, io::Error> {
        let len = VarInt(self.0.len() as u64).consensus_encode(w)?;
        w.write_all(&self.0)?;
        Ok(len + self.0.len())
    }
}
