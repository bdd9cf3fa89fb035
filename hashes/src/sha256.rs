// SPDX-License-Identifier: CC0-1.0

//! SHA256 implementation.
//!
//! [`HashEngine`] accepts input in arbitrary pieces and is finalized exactly
//! once; [`hash`] is the one-shot shortcut.

use core::cmp;

use crate::compress::{compress, state_from_bytes, state_to_bytes, BLOCK_SIZE, IV};
use crate::error::{Error, Operation};

crate::internal_macros::byte_array_newtype!(Hash, 32, "Output of the SHA256 hash function.");

crate::internal_macros::byte_array_newtype!(
    Midstate,
    32,
    "State register of a SHA256 engine at a block boundary, serialized big-endian."
);

/// Computes the SHA256 digest of `data` in one go.
pub fn hash(data: &[u8]) -> Hash {
    Hash::hash(data)
}

impl Hash {
    /// Constructs a new engine.
    pub const fn engine() -> HashEngine {
        HashEngine::new()
    }

    /// Produces a hash from the current state of a given engine.
    ///
    /// A finalized engine yields the digest it already produced.
    pub fn from_engine(mut e: HashEngine) -> Hash {
        match e.state {
            State::Finalized(hash) => hash,
            State::Empty | State::Accumulating => e.pad_and_finish(),
        }
    }

    /// Hashes some bytes.
    pub fn hash(data: &[u8]) -> Hash {
        let mut engine = HashEngine::new();
        engine.absorb(data);
        engine.pad_and_finish()
    }

    /// Hashes all the byte slices retrieved from the iterator together.
    pub fn hash_byte_chunks<B, I>(byte_slices: I) -> Hash
    where
        B: AsRef<[u8]>,
        I: IntoIterator<Item = B>,
    {
        let mut engine = HashEngine::new();
        for slice in byte_slices {
            engine.absorb(slice.as_ref());
        }
        engine.pad_and_finish()
    }

    /// Computes hash from `bytes` in `const` context.
    ///
    /// Warning: this function is inefficient. It should be only used in `const` context.
    pub const fn const_hash(bytes: &[u8]) -> Hash {
        let mut state = IV;
        let mut offset = 0;
        while offset + BLOCK_SIZE <= bytes.len() {
            state = compress(state, &block_at(bytes, offset));
            offset += BLOCK_SIZE;
        }

        // 0x80, zeroes, then the bit length: one block if 9 more bytes fit, two otherwise.
        let rem = bytes.len() - offset;
        let tail_len = if rem < BLOCK_SIZE - 8 { BLOCK_SIZE } else { 2 * BLOCK_SIZE };
        let bit_len = (bytes.len() as u64).wrapping_mul(8).to_be_bytes();
        let mut tail = [0u8; 2 * BLOCK_SIZE];
        let mut i = 0;
        while i < rem {
            tail[i] = bytes[offset + i];
            i += 1;
        }
        tail[rem] = 0x80;
        i = 0;
        while i < 8 {
            tail[tail_len - 8 + i] = bit_len[i];
            i += 1;
        }

        offset = 0;
        while offset < tail_len {
            state = compress(state, &block_at(&tail, offset));
            offset += BLOCK_SIZE;
        }
        Hash(state_to_bytes(&state))
    }
}

const fn block_at(bytes: &[u8], offset: usize) -> [u8; BLOCK_SIZE] {
    let mut block = [0u8; BLOCK_SIZE];
    let mut i = 0;
    while i < BLOCK_SIZE {
        block[i] = bytes[offset + i];
        i += 1;
    }
    block
}

/// Lifecycle of a [`HashEngine`].
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum State {
    /// Freshly initialized, nothing input yet.
    Empty,
    /// At least one `input` call has been accepted.
    Accumulating,
    /// Terminal: the digest has been produced and further input is rejected.
    Finalized(Hash),
}

/// Engine to compute SHA256 hash function.
#[derive(Clone)]
pub struct HashEngine {
    buffer: [u8; BLOCK_SIZE],
    h: [u32; 8],
    length: u64,
    state: State,
}

impl Default for HashEngine {
    fn default() -> Self {
        HashEngine::new()
    }
}

impl core::fmt::Debug for HashEngine {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        f.debug_struct("HashEngine")
            .field("length", &self.length)
            .field("state", &self.state)
            .finish_non_exhaustive()
    }
}

impl HashEngine {
    /// Size of an input block, in bytes.
    pub const BLOCK_SIZE: usize = BLOCK_SIZE;

    /// Creates an engine holding the SHA256 initial state.
    pub const fn new() -> HashEngine {
        HashEngine { buffer: [0; BLOCK_SIZE], h: IV, length: 0, state: State::Empty }
    }

    /// Create a new [`HashEngine`] from a [`Midstate`].
    ///
    /// `length` is the number of bytes already compressed into `midstate`.
    ///
    /// # Panics
    ///
    /// If `length` is not a multiple of the block size.
    pub fn from_midstate(midstate: Midstate, length: u64) -> HashEngine {
        assert!(length % BLOCK_SIZE as u64 == 0, "length is no multiple of the block size");

        HashEngine {
            buffer: [0; BLOCK_SIZE],
            h: state_from_bytes(midstate.as_byte_array()),
            length,
            state: if length == 0 { State::Empty } else { State::Accumulating },
        }
    }

    /// Puts the engine back into its initial state, whatever state it is in.
    pub fn reset(&mut self) {
        *self = HashEngine::new();
    }

    /// Returns the state register as it stands after the last complete block.
    ///
    /// Bytes still waiting in the partial-block buffer are not reflected.
    pub fn midstate(&self) -> Midstate {
        Midstate(state_to_bytes(&self.h))
    }

    /// Number of message bytes input so far, padding excluded.
    pub fn n_bytes_hashed(&self) -> u64 {
        self.length
    }

    /// Current lifecycle state.
    pub fn state(&self) -> State {
        self.state
    }

    /// The digest produced by [`HashEngine::finalize`], if it has been called.
    pub fn digest(&self) -> Option<Hash> {
        match self.state {
            State::Finalized(hash) => Some(hash),
            State::Empty | State::Accumulating => None,
        }
    }

    /// Adds `data` to the message being hashed.
    ///
    /// # Errors
    ///
    /// [`Error::InvalidState`] if the engine was already finalized; the engine is left as is.
    pub fn input(&mut self, data: &[u8]) -> Result<(), Error> {
        if let State::Finalized(_) = self.state {
            return Err(Error::InvalidState { attempted: Operation::Input });
        }
        self.state = State::Accumulating;
        self.absorb(data);
        Ok(())
    }

    /// Pads the message, compresses the final block(s) and returns the digest.
    ///
    /// # Errors
    ///
    /// [`Error::InvalidState`] if the engine was already finalized. The digest produced the
    /// first time stays available through [`HashEngine::digest`].
    pub fn finalize(&mut self) -> Result<Hash, Error> {
        if let State::Finalized(_) = self.state {
            return Err(Error::InvalidState { attempted: Operation::Finalize });
        }
        let hash = self.pad_and_finish();
        self.state = State::Finalized(hash);
        Ok(hash)
    }

    fn buffered(&self) -> usize {
        (self.length % BLOCK_SIZE as u64) as usize
    }

    fn absorb(&mut self, mut inp: &[u8]) {
        while !inp.is_empty() {
            let buf_idx = self.buffered();
            let rem_len = BLOCK_SIZE - buf_idx;
            let write_len = cmp::min(rem_len, inp.len());

            self.buffer[buf_idx..buf_idx + write_len].copy_from_slice(&inp[..write_len]);
            self.length += write_len as u64;
            if self.buffered() == 0 {
                self.h = compress(self.h, &self.buffer);
            }
            inp = &inp[write_len..];
        }
    }

    fn pad_and_finish(&mut self) -> Hash {
        // pad buffer with a single 1-bit then all 0s, until there are exactly 8 bytes remaining
        let data_len = self.length;

        let zeroes = [0; BLOCK_SIZE - 8];
        self.absorb(&[0x80]);
        if self.buffered() > zeroes.len() {
            self.absorb(&zeroes);
        }
        let pad_length = zeroes.len() - self.buffered();
        self.absorb(&zeroes[..pad_length]);
        debug_assert_eq!(self.buffered(), zeroes.len());

        self.absorb(&data_len.wrapping_mul(8).to_be_bytes());
        debug_assert_eq!(self.buffered(), 0);

        self.length = data_len;
        Hash(state_to_bytes(&self.h))
    }
}
