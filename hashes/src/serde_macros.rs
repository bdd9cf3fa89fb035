// SPDX-License-Identifier: CC0-1.0

//! Macros for serde trait implementations, and supporting code.

/// Implements `Serialize` and `Deserialize` for a byte-array newtype.
///
/// Human-readable formats get a lowercase hex string, binary formats the raw bytes.
#[cfg(feature = "serde")]
macro_rules! serde_impl(
    ($t:ident, $len:expr) => (
        impl serde::Serialize for $t {
            fn serialize<S: serde::Serializer>(&self, s: S) -> Result<S::Ok, S::Error> {
                if s.is_human_readable() {
                    s.collect_str(self)
                } else {
                    s.serialize_bytes(&self.0[..])
                }
            }
        }

        impl<'de> serde::Deserialize<'de> for $t {
            fn deserialize<D: serde::Deserializer<'de>>(d: D) -> Result<$t, D::Error> {
                use core::fmt;
                use serde::de::{self, Unexpected};

                struct HexVisitor;

                impl<'de> de::Visitor<'de> for HexVisitor {
                    type Value = $t;

                    fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
                        write!(f, "an ASCII hex string of {} bytes", $len)
                    }

                    fn visit_str<E: de::Error>(self, v: &str) -> Result<$t, E> {
                        v.parse::<$t>().map_err(E::custom)
                    }

                    fn visit_bytes<E: de::Error>(self, v: &[u8]) -> Result<$t, E> {
                        match core::str::from_utf8(v) {
                            Ok(s) => de::Visitor::visit_str(self, s),
                            Err(_) => Err(E::invalid_value(Unexpected::Bytes(v), &self)),
                        }
                    }
                }

                struct BytesVisitor;

                impl<'de> de::Visitor<'de> for BytesVisitor {
                    type Value = $t;

                    fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
                        write!(f, "a byte array of length {}", $len)
                    }

                    fn visit_bytes<E: de::Error>(self, v: &[u8]) -> Result<$t, E> {
                        $t::from_slice(v).map_err(|_| E::invalid_length(v.len(), &self))
                    }

                    fn visit_seq<A: de::SeqAccess<'de>>(self, mut seq: A) -> Result<$t, A::Error> {
                        let mut bytes = [0u8; $len];
                        for (i, byte) in bytes.iter_mut().enumerate() {
                            *byte = seq
                                .next_element()?
                                .ok_or_else(|| <A::Error as de::Error>::invalid_length(i, &self))?;
                        }
                        Ok($t::from_byte_array(bytes))
                    }
                }

                if d.is_human_readable() {
                    d.deserialize_str(HexVisitor)
                } else {
                    d.deserialize_bytes(BytesVisitor)
                }
            }
        }
    )
);

/// Does an "empty" serde implementation for the configuration without serde.
#[cfg(not(feature = "serde"))]
macro_rules! serde_impl(
    ($t:ident, $len:expr) => ()
);

pub(crate) use serde_impl;
