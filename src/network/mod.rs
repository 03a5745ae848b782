// SPDX-License-Identifier: CC0-1.0

//! Network support.
//!
//! This module defines the networks the parameter registry knows about and
//! the magic values identifying them.
//!

pub mod constants;
