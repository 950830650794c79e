//! ChaCha20 keystream source
//!
//! This module implements the ChaCha20 block function in its original
//! layout: a 256-bit key, a 64-bit IV, and a 64-bit block counter occupying
//! state words 12 and 13 (little-endian). This is the variant whose seed
//! material is exactly 40 bytes of key + IV, which is what the generator's
//! seed format encodes.
//!
//! It only produces raw 64-byte keystream blocks. Buffering, byte
//! accounting, and everything built on top live in the generator.

/// ChaCha20 constant words.
///
/// The ASCII string `"expand 32-byte k"` encoded as little-endian `u32`
/// words. Public, fixed, and non-secret.
const CHACHA20_CONSTANTS: [u32; 4] = [
    0x6170_7865, // "expa"
    0x3320_646e, // "nd 3"
    0x7962_2d32, // "2-by"
    0x6b20_6574, // "te k"
];

#[inline(always)]
fn quarter_round(state: &mut [u32; 16], a: usize, b: usize, c: usize, d: usize) {
    state[a] = state[a].wrapping_add(state[b]);
    state[d] ^= state[a];
    state[d] = state[d].rotate_left(16);

    state[c] = state[c].wrapping_add(state[d]);
    state[b] ^= state[c];
    state[b] = state[b].rotate_left(12);

    state[a] = state[a].wrapping_add(state[b]);
    state[d] ^= state[a];
    state[d] = state[d].rotate_left(8);

    state[c] = state[c].wrapping_add(state[d]);
    state[b] ^= state[c];
    state[b] = state[b].rotate_left(7);
}

/// Applies the full ChaCha20 permutation (20 rounds).
fn rounds(state: &mut [u32; 16]) {
    for _ in 0..10 {
        // Column rounds
        quarter_round(state, 0, 4, 8, 12);
        quarter_round(state, 1, 5, 9, 13);
        quarter_round(state, 2, 6, 10, 14);
        quarter_round(state, 3, 7, 11, 15);

        // Diagonal rounds
        quarter_round(state, 0, 5, 10, 15);
        quarter_round(state, 1, 6, 11, 12);
        quarter_round(state, 2, 7, 8, 13);
        quarter_round(state, 3, 4, 9, 14);
    }
}

/// Generates a single 64-byte keystream block.
///
/// State layout (original ChaCha20): constants in words 0..4, key in words
/// 4..12, the 64-bit block counter in words 12..14 (low word first), and
/// the 64-bit IV in words 14..16.
fn block(key: &[u8; 32], counter: u64, iv: &[u8; 8]) -> [u8; 64] {
    let mut state = [0u32; 16];

    state[0..4].copy_from_slice(&CHACHA20_CONSTANTS);

    state[4..12]
        .iter_mut()
        .zip(key.chunks_exact(4))
        .for_each(|(s, k)| *s = u32::from_le_bytes(k.try_into().unwrap()));

    state[12] = counter as u32;
    state[13] = (counter >> 32) as u32;

    state[14..16]
        .iter_mut()
        .zip(iv.chunks_exact(4))
        .for_each(|(s, n)| *s = u32::from_le_bytes(n.try_into().unwrap()));

    // Preserve original state for feed-forward
    let original = state;

    rounds(&mut state);

    state
        .iter_mut()
        .zip(&original)
        .for_each(|(s, o)| *s = s.wrapping_add(*o));

    let mut out = [0u8; 64];
    out.chunks_exact_mut(4)
        .zip(&state)
        .for_each(|(chunk, &word)| chunk.copy_from_slice(&word.to_le_bytes()));

    out
}

/// Stateful keystream producer.
///
/// Hands out consecutive 64-byte blocks, advancing the internal 64-bit
/// block counter by one per block. The counter starts at zero; once every
/// counter value has been used the stream is exhausted and stays exhausted.
pub(crate) struct ChaChaStream {
    key: [u8; 32],
    iv: [u8; 8],
    counter: u64,
    exhausted: bool,
}

impl ChaChaStream {
    /// Creates a stream positioned at counter zero.
    pub(crate) fn new(key: [u8; 32], iv: [u8; 8]) -> Self {
        Self {
            key,
            iv,
            counter: 0,
            exhausted: false,
        }
    }

    /// Produces the next keystream block, or `None` once the counter has
    /// run through its full 64-bit range.
    ///
    /// Exhaustion is permanent for the stream; continuing would reuse
    /// counter values and repeat keystream.
    pub(crate) fn next_block(&mut self) -> Option<[u8; 64]> {
        if self.exhausted {
            return None;
        }

        let out = block(&self.key, self.counter, &self.iv);

        match self.counter.checked_add(1) {
            Some(next) => self.counter = next,
            None => self.exhausted = true,
        }

        Some(out)
    }
}
