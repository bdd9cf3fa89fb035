// SPDX-License-Identifier: CC0-1.0

//! Streaming SHA-256.
//!
//! This library implements the SHA-256 hash function of FIPS 180-4 as an
//! incremental engine: input is fed in pieces of any size, whole 64-byte
//! blocks are compressed as soon as they are complete, and the final padding
//! is applied once, on finalization.
//!
//! It can be used in a no-std environment. Hex formatting is always
//! available; enable the `serde` feature for serialization support.
//!
//! ## Examples
//!
//! ```rust
//! use shastream_hashes::sha256;
//!
//! let mut engine = sha256::HashEngine::new();
//! engine.input(b"ab")?;
//! engine.input(b"c")?;
//! let digest = engine.finalize()?;
//!
//! assert_eq!(digest, sha256::hash(b"abc"));
//! assert_eq!(
//!     digest.to_string(),
//!     "ba7816bf8f01cfea414140de5dae2223b00361a396177a9cb410ff61f20015ad",
//! );
//!
//! // The engine is spent; further input is refused.
//! assert!(engine.input(b"d").is_err());
//! # Ok::<(), shastream_hashes::Error>(())
//! ```

#![no_std]
// Experimental features we need.
#![cfg_attr(docsrs, feature(doc_auto_cfg))]
// Coding conventions.
#![warn(missing_docs)]

#[cfg(any(test, feature = "std"))]
extern crate std;

/// Re-export the `hex-conservative` crate.
pub extern crate hex;

#[cfg(feature = "serde")]
/// A generic serialization/deserialization framework.
pub extern crate serde;

mod internal_macros;
mod serde_macros;

pub mod compress;
pub mod error;
#[cfg(feature = "std")]
mod impls;
pub mod sha256;

#[rustfmt::skip]                // Keep public re-exports separate.
#[doc(inline)]
pub use self::error::{Error, FromSliceError, Operation};
