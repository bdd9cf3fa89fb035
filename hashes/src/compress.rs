// SPDX-License-Identifier: CC0-1.0

//! The SHA256 compression function.
//!
//! Everything in here is a `const fn` so the same code serves both the
//! streaming [`HashEngine`](crate::sha256::HashEngine) and compile-time
//! hashing through [`Hash::const_hash`](crate::sha256::Hash::const_hash).

/// Size of one SHA256 input block, in bytes.
pub const BLOCK_SIZE: usize = 64;

/// Initial state register (fractional parts of the square roots of the first 8 primes).
pub const IV: [u32; 8] = [
    0x6a09e667, 0xbb67ae85, 0x3c6ef372, 0xa54ff53a, 0x510e527f, 0x9b05688c, 0x1f83d9ab, 0x5be0cd19,
];

/// Round constants (fractional parts of the cube roots of the first 64 primes).
#[rustfmt::skip]
pub const K: [u32; 64] = [
    0x428a2f98, 0x71374491, 0xb5c0fbcf, 0xe9b5dba5, 0x3956c25b, 0x59f111f1, 0x923f82a4, 0xab1c5ed5,
    0xd807aa98, 0x12835b01, 0x243185be, 0x550c7dc3, 0x72be5d74, 0x80deb1fe, 0x9bdc06a7, 0xc19bf174,
    0xe49b69c1, 0xefbe4786, 0x0fc19dc6, 0x240ca1cc, 0x2de92c6f, 0x4a7484aa, 0x5cb0a9dc, 0x76f988da,
    0x983e5152, 0xa831c66d, 0xb00327c8, 0xbf597fc7, 0xc6e00bf3, 0xd5a79147, 0x06ca6351, 0x14292967,
    0x27b70a85, 0x2e1b2138, 0x4d2c6dfc, 0x53380d13, 0x650a7354, 0x766a0abb, 0x81c2c92e, 0x92722c85,
    0xa2bfe8a1, 0xa81a664b, 0xc24b8b70, 0xc76c51a3, 0xd192e819, 0xd6990624, 0xf40e3585, 0x106aa070,
    0x19a4c116, 0x1e376c08, 0x2748774c, 0x34b0bcb5, 0x391c0cb3, 0x4ed8aa4a, 0x5b9cca4f, 0x682e6ff3,
    0x748f82ee, 0x78a5636f, 0x84c87814, 0x8cc70208, 0x90befffa, 0xa4506ceb, 0xbef9a3f7, 0xc67178f2,
];

#[allow(non_snake_case)]
const fn Ch(x: u32, y: u32, z: u32) -> u32 {
    (x & y) ^ (!x & z)
}
#[allow(non_snake_case)]
const fn Maj(x: u32, y: u32, z: u32) -> u32 {
    (x & y) ^ (x & z) ^ (y & z)
}
#[allow(non_snake_case)]
const fn Sigma0(x: u32) -> u32 {
    x.rotate_right(2) ^ x.rotate_right(13) ^ x.rotate_right(22)
}
#[allow(non_snake_case)]
const fn Sigma1(x: u32) -> u32 {
    x.rotate_right(6) ^ x.rotate_right(11) ^ x.rotate_right(25)
}
const fn sigma0(x: u32) -> u32 {
    x.rotate_right(7) ^ x.rotate_right(18) ^ (x >> 3)
}
const fn sigma1(x: u32) -> u32 {
    x.rotate_right(17) ^ x.rotate_right(19) ^ (x >> 10)
}

const fn read_u32_be(bytes: &[u8; BLOCK_SIZE], index: usize) -> u32 {
    u32::from_be_bytes([bytes[index], bytes[index + 1], bytes[index + 2], bytes[index + 3]])
}

/// Expands one block into the 64-word message schedule.
const fn schedule(block: &[u8; BLOCK_SIZE]) -> [u32; 64] {
    let mut w = [0u32; 64];
    let mut t = 0;
    while t < 16 {
        w[t] = read_u32_be(block, t * 4);
        t += 1;
    }
    while t < 64 {
        w[t] = sigma1(w[t - 2])
            .wrapping_add(w[t - 7])
            .wrapping_add(sigma0(w[t - 15]))
            .wrapping_add(w[t - 16]);
        t += 1;
    }
    w
}

/// Runs the compression function over a single block, returning the new state register.
// Algorithm as given in FIPS 180-4, section 6.2.2.
pub const fn compress(state: [u32; 8], block: &[u8; BLOCK_SIZE]) -> [u32; 8] {
    let w = schedule(block);

    let mut a = state[0];
    let mut b = state[1];
    let mut c = state[2];
    let mut d = state[3];
    let mut e = state[4];
    let mut f = state[5];
    let mut g = state[6];
    let mut h = state[7];

    let mut t = 0;
    while t < 64 {
        let t1 = h
            .wrapping_add(Sigma1(e))
            .wrapping_add(Ch(e, f, g))
            .wrapping_add(K[t])
            .wrapping_add(w[t]);
        let t2 = Sigma0(a).wrapping_add(Maj(a, b, c));
        h = g;
        g = f;
        f = e;
        e = d.wrapping_add(t1);
        d = c;
        c = b;
        b = a;
        a = t1.wrapping_add(t2);
        t += 1;
    }

    [
        state[0].wrapping_add(a),
        state[1].wrapping_add(b),
        state[2].wrapping_add(c),
        state[3].wrapping_add(d),
        state[4].wrapping_add(e),
        state[5].wrapping_add(f),
        state[6].wrapping_add(g),
        state[7].wrapping_add(h),
    ]
}

/// Serializes a state register big-endian, independent of host byte order.
pub(crate) const fn state_to_bytes(state: &[u32; 8]) -> [u8; 32] {
    let mut out = [0u8; 32];
    let mut i = 0;
    while i < 8 {
        let word = state[i].to_be_bytes();
        out[i * 4] = word[0];
        out[i * 4 + 1] = word[1];
        out[i * 4 + 2] = word[2];
        out[i * 4 + 3] = word[3];
        i += 1;
    }
    out
}

/// Inverse of [`state_to_bytes`].
pub(crate) fn state_from_bytes(bytes: &[u8; 32]) -> [u32; 8] {
    let mut state = [0u32; 8];
    for (word, chunk) in state.iter_mut().zip(bytes.chunks_exact(4)) {
        *word = u32::from_be_bytes([chunk[0], chunk[1], chunk[2], chunk[3]]);
    }
    state
}

#[cfg(test)]
mod tests {
    use super::*;

    // The single padded block for "abc".
    fn abc_block() -> [u8; BLOCK_SIZE] {
        let mut block = [0u8; BLOCK_SIZE];
        block[..3].copy_from_slice(b"abc");
        block[3] = 0x80;
        block[63] = 24;
        block
    }

    #[test]
    fn bit_functions() {
        assert_eq!(Ch(0xffff_0000, 0x1234_5678, 0x9abc_def0), 0x1234_def0);
        assert_eq!(Maj(0xff00_ff00, 0x0ff0_0ff0, 0x00ff_00ff), 0x0ff0_0ff0);
        assert_eq!(sigma0(1), 1u32.rotate_right(7) ^ 1u32.rotate_right(18));
        assert_eq!(sigma1(0x8000_0000), 0x0000_4000 ^ 0x0000_1000 ^ 0x0020_0000);
        assert_eq!(Sigma0(0), 0);
        assert_eq!(Sigma1(u32::MAX), u32::MAX);
    }

    #[test]
    fn schedule_keeps_input_words() {
        let block = abc_block();
        let w = schedule(&block);
        assert_eq!(w[0], 0x6162_6380);
        assert_eq!(w[1..15], [0u32; 14]);
        assert_eq!(w[15], 0x0000_0018);
        // First expanded word from FIPS 180-2 appendix B.1.
        assert_eq!(w[16], 0x6162_6380);
    }

    #[test]
    fn compress_abc() {
        let state = compress(IV, &abc_block());
        assert_eq!(
            state,
            [
                0xba7816bf, 0x8f01cfea, 0x414140de, 0x5dae2223, 0xb00361a3, 0x96177a9c, 0xb410ff61,
                0xf20015ad,
            ]
        );
    }

    #[test]
    fn compress_is_pure() {
        let block = [0x5a; BLOCK_SIZE];
        assert_eq!(compress(IV, &block), compress(IV, &block));
        assert_ne!(compress(IV, &block), IV);
    }

    #[test]
    fn state_bytes_big_endian() {
        let bytes = state_to_bytes(&IV);
        assert_eq!(&bytes[..4], &[0x6a, 0x09, 0xe6, 0x67]);
        assert_eq!(&bytes[28..], &[0x5b, 0xe0, 0xcd, 0x19]);
        assert_eq!(state_from_bytes(&bytes), IV);
    }
}
