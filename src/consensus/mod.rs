// SPDX-License-Identifier: CC0-1.0

//! Bitcoin consensus.
//!
//! This module defines structures, functions, and traits that are needed to
//! conform to Bitcoin consensus: the wire encoding used for hashing, the
//! version-bits deployment table and the per-network parameter registry.
//!

pub mod deployment;
pub mod encode;
pub mod params;

pub use self::encode::{serialize, Encodable};
pub use self::params::Params;
