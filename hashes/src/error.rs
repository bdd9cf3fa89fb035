// SPDX-License-Identifier: CC0-1.0

//! Error types.

use core::fmt;

/// Operation attempted on a [`HashEngine`](crate::sha256::HashEngine).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operation {
    /// Feeding more input.
    Input,
    /// Producing the digest.
    Finalize,
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match *self {
            Operation::Input => f.write_str("input"),
            Operation::Finalize => f.write_str("finalize"),
        }
    }
}

/// Errors returned by the hash engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[non_exhaustive]
pub enum Error {
    /// The engine has already been finalized; only `reset` is accepted.
    InvalidState {
        /// What the caller tried to do.
        attempted: Operation,
    },
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        use Error::*;

        match *self {
            InvalidState { attempted } => {
                write!(f, "cannot {} on a finalized hash engine", attempted)
            }
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        use Error::*;

        match self {
            InvalidState { .. } => None,
        }
    }
}

/// Attempted to create a hash from an invalid length slice.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FromSliceError {
    pub(crate) expected: usize,
    pub(crate) got: usize,
}

impl FromSliceError {
    /// Returns the expected slice length.
    pub fn expected_length(&self) -> usize {
        self.expected
    }

    /// Returns the invalid slice length.
    pub fn invalid_length(&self) -> usize {
        self.got
    }
}

impl fmt::Display for FromSliceError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "invalid slice length {} (expected {})", self.got, self.expected)
    }
}

#[cfg(feature = "std")]
impl std::error::Error for FromSliceError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    #[cfg(feature = "std")]
    fn display() {
        use std::string::ToString;

        let e = Error::InvalidState { attempted: Operation::Input };
        assert_eq!(e.to_string(), "cannot input on a finalized hash engine");
        let e = Error::InvalidState { attempted: Operation::Finalize };
        assert_eq!(e.to_string(), "cannot finalize on a finalized hash engine");

        let e = FromSliceError { expected: 32, got: 31 };
        assert_eq!(e.to_string(), "invalid slice length 31 (expected 32)");
        assert_eq!(e.expected_length(), 32);
        assert_eq!(e.invalid_length(), 31);
    }
}
