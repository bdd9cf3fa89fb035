// SPDX-License-Identifier: CC0-1.0

//! Non-public macros.

/// Adds hexadecimal formatting implementation of a byte-array newtype.
///
/// Bytes are rendered in order; SHA256 output is never displayed backward.
macro_rules! arr_newtype_fmt_impl {
    ($ty:ident, $len:expr) => {
        impl core::fmt::LowerHex for $ty {
            #[inline]
            fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
                use hex::DisplayHex as _;
                core::fmt::LowerHex::fmt(&self.0[..].as_hex(), f)
            }
        }

        impl core::fmt::UpperHex for $ty {
            #[inline]
            fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
                use hex::DisplayHex as _;
                core::fmt::UpperHex::fmt(&self.0[..].as_hex(), f)
            }
        }

        impl core::fmt::Display for $ty {
            #[inline]
            fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
                core::fmt::LowerHex::fmt(self, f)
            }
        }

        impl core::fmt::Debug for $ty {
            #[inline]
            fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
                write!(f, "{}({:x})", stringify!($ty), self)
            }
        }
    };
}
pub(crate) use arr_newtype_fmt_impl;

/// Adds slice-borrowing implementations to a byte-array newtype.
macro_rules! borrow_slice_impl {
    ($ty:ident) => {
        impl core::borrow::Borrow<[u8]> for $ty {
            fn borrow(&self) -> &[u8] {
                &self.0[..]
            }
        }

        impl core::convert::AsRef<[u8]> for $ty {
            fn as_ref(&self) -> &[u8] {
                &self.0[..]
            }
        }
    };
}
pub(crate) use borrow_slice_impl;

/// Defines a fixed-length byte-array newtype with hex parsing and formatting.
macro_rules! byte_array_newtype {
    ($ty:ident, $len:expr, $doc:literal) => {
        #[doc = $doc]
        #[derive(Copy, Clone, PartialEq, Eq, Default, PartialOrd, Ord, core::hash::Hash)]
        #[repr(transparent)]
        pub struct $ty([u8; $len]);

        impl $ty {
            /// Length of the value, in bytes.
            pub const LEN: usize = $len;

            /// Constructs a value from the underlying byte array.
            pub const fn from_byte_array(bytes: [u8; $len]) -> Self {
                $ty(bytes)
            }

            /// Copies a byte slice into a new value.
            pub fn from_slice(sl: &[u8]) -> Result<$ty, $crate::FromSliceError> {
                if sl.len() != $len {
                    Err($crate::FromSliceError { expected: $len, got: sl.len() })
                } else {
                    let mut ret = [0; $len];
                    ret.copy_from_slice(sl);
                    Ok($ty(ret))
                }
            }

            /// Unwraps the value and returns the underlying byte array.
            pub const fn to_byte_array(self) -> [u8; $len] {
                self.0
            }

            /// Returns a reference to the underlying byte array.
            pub const fn as_byte_array(&self) -> &[u8; $len] {
                &self.0
            }
        }

        impl<I: core::slice::SliceIndex<[u8]>> core::ops::Index<I> for $ty {
            type Output = I::Output;

            #[inline]
            fn index(&self, index: I) -> &Self::Output {
                &self.0[index]
            }
        }

        impl core::str::FromStr for $ty {
            type Err = hex::HexToArrayError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                let bytes = <[u8; $len] as hex::FromHex>::from_hex(s)?;
                Ok($ty(bytes))
            }
        }

        $crate::internal_macros::arr_newtype_fmt_impl!($ty, $len);
        $crate::internal_macros::borrow_slice_impl!($ty);
        $crate::serde_macros::serde_impl!($ty, $len);
    };
}
pub(crate) use byte_array_newtype;
