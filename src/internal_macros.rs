// SPDX-License-Identifier: CC0-1.0

//! Internal macros.
//!
//! Macros meant to be used inside this library only.
//!

/// Implements [`Encodable`](crate::consensus::Encodable) for a struct by
/// encoding each listed field in order.
macro_rules! impl_consensus_encoding {
    ($thing:ident, $($field:ident),+) => (
        impl $crate::consensus::Encodable for $thing {
            #[inline]
            fn consensus_encode<W: std::io::Write + ?Sized>(
                &self,
                w: &mut W,
            ) -> Result<usize, std::io::Error> {
                let mut len = 0;
                $(len += $crate::consensus::Encodable::consensus_encode(&self.$field, w)?;)+
                Ok(len)
            }
        }
    );
}
pub(crate) use impl_consensus_encoding;

/// Implements `Encodable` for a `Vec` of the given element type, prefixing
/// the elements with their count as a [`VarInt`](crate::consensus::encode::VarInt).
macro_rules! impl_vec {
    ($type:ty) => {
        impl $crate::consensus::Encodable for Vec<$type> {
            #[inline]
            fn consensus_encode<W: std::io::Write + ?Sized>(
                &self,
                w: &mut W,
            ) -> Result<usize, std::io::Error> {
                let mut len = $crate::consensus::Encodable::consensus_encode(
                    &$crate::consensus::encode::VarInt(self.len() as u64),
                    w,
                )?;
                for c in self.iter() {
                    len += $crate::consensus::Encodable::consensus_encode(c, w)?;
                }
                Ok(len)
            }
        }
    };
}
pub(crate) use impl_vec;
