// SPDX-License-Identifier: CC0-1.0

//! `std` Impls.
//!
//! Implementations of traits defined in `std` and not in `core`.

use std::io;

use crate::sha256;

impl io::Write for sha256::HashEngine {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.input(buf).map_err(|e| io::Error::new(io::ErrorKind::Other, e))?;
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}
