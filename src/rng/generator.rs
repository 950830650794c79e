//! Seeded generator state and keystream buffering
//!
//! This module defines [`ChaChaRand`]: seed validation and decoding, the
//! 64-byte block buffer with its read cursor, and the consumption counters
//! that make keystream usage observable.
//!
//! Byte consumption order is the generator's entire observable behavior:
//! every higher-level operation (integers, floats, shuffles) reduces to a
//! sequence of `get_bytes` calls, so the buffer must never skip, duplicate,
//! or reorder bytes. All state mutation funnels through this module.

use std::fmt;

use crate::rng::chacha20::ChaChaStream;

/// Key size in bytes (256-bit key).
const KEY_SIZE: usize = 32;

/// IV size in bytes (64-bit IV).
const IV_SIZE: usize = 8;

/// Total seed material: key followed by IV.
const SEED_SIZE: usize = KEY_SIZE + IV_SIZE;

/// Errors raised by generator operations.
///
/// All errors are synchronous and raised at the violated precondition,
/// before any state is overwritten where avoidable. None are retried
/// internally. Every variant except [`GeneratorError::KeystreamExhausted`]
/// indicates a caller-side programming error; exhaustion is a legitimate
/// end-of-life condition requiring a reseed with fresh material.
#[derive(Debug)]
pub enum GeneratorError {
    /// The seed does not decode to at least 40 bytes of key + IV material.
    InvalidSeed,

    /// A byte request must ask for at least one byte.
    InvalidLength,

    /// The requested bit width lies outside `[1, 52]`.
    InvalidBitWidth,

    /// The upper bound for a bounded draw must be positive.
    InvalidBound,

    /// The shuffle step count lies outside `[1, len - 1]`.
    InvalidStepCount,

    /// The sample size lies outside `[1, len - 1]`.
    InvalidSampleSize,

    /// The cipher's 64-bit block counter has run through its full range.
    /// Fatal for this generator instance; reseed to continue.
    KeystreamExhausted,
}

impl fmt::Display for GeneratorError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let msg = match self {
            Self::InvalidSeed => "seed must be a hex string of at least 80 characters",
            Self::InvalidLength => "byte request must ask for at least one byte",
            Self::InvalidBitWidth => "bit width must lie in [1, 52]",
            Self::InvalidBound => "upper bound must be positive",
            Self::InvalidStepCount => "step count must lie in [1, len - 1]",
            Self::InvalidSampleSize => "sample size must lie in [1, len - 1]",
            Self::KeystreamExhausted => "keystream exhausted: the block counter has wrapped",
        };

        f.write_str(msg)
    }
}

impl std::error::Error for GeneratorError {}

/// Deterministic pseudo-random generator over a ChaCha20 keystream.
///
/// The generator owns its entire state; all consuming operations take
/// `&mut self`, so two call sites cannot interleave draws without external
/// synchronization making the order explicit. Given a seed, the output
/// sequence is a pure function of the sequence of calls.
///
/// # Seeding
///
/// The seed is a hexadecimal string. Only the first 80 hex characters
/// (32-byte key, then 8-byte IV) are significant; anything beyond them is
/// discarded. Fewer than 80 characters is an error.
pub struct ChaChaRand {
    /// Decoded seed material (key followed by IV). Kept for introspection;
    /// never consumed as randomness.
    seed: [u8; SEED_SIZE],

    /// Keystream source, positioned at the next unproduced block.
    stream: ChaChaStream,

    /// Most recently produced keystream block.
    block: [u8; 64],

    /// Offset of the next unread byte in `block`. Always `0..=64`; a value
    /// of 64 means the block is fully consumed and the next request draws
    /// a fresh one.
    cursor: usize,

    /// Number of blocks drawn so far. At least 1 once seeded, because the
    /// first block is drawn eagerly.
    blocks_produced: u64,
}

impl ChaChaRand {
    /// Keystream block size in bytes.
    pub const BLOCK_SIZE: usize = 64;

    /// Largest bit width a draw can request as a single number.
    ///
    /// Capped at the width a double-precision float represents without
    /// precision loss, so the same values are exact in every
    /// implementation regardless of its native integer type.
    pub const MAX_SAFE_BITS: u32 = 52;

    /// Number of significant hex characters in a seed.
    pub const SEED_HEX_LEN: usize = 2 * SEED_SIZE;

    /// Creates a generator from a hexadecimal seed.
    ///
    /// The first 80 hex characters encode the 32-byte key and the 8-byte
    /// IV; trailing characters are ignored. The first keystream block is
    /// drawn immediately.
    ///
    /// # Errors
    ///
    /// [`GeneratorError::InvalidSeed`] if the seed is shorter than 80
    /// characters or its first 80 characters are not valid hex.
    pub fn from_seed(seed: &str) -> Result<Self, GeneratorError> {
        let material = decode_seed(seed)?;

        let mut key = [0u8; KEY_SIZE];
        let mut iv = [0u8; IV_SIZE];
        key.copy_from_slice(&material[..KEY_SIZE]);
        iv.copy_from_slice(&material[KEY_SIZE..]);

        let mut stream = ChaChaStream::new(key, iv);
        let block = stream
            .next_block()
            .ok_or(GeneratorError::KeystreamExhausted)?;

        Ok(Self {
            seed: material,
            stream,
            block,
            cursor: 0,
            blocks_produced: 1,
        })
    }

    /// Reseeds the generator, discarding all buffered keystream.
    ///
    /// Equivalent to replacing the generator with a freshly constructed
    /// one: key, IV, and cipher state are re-derived and the first block
    /// of the new keystream is drawn eagerly. A partially consumed block
    /// is never reused across a reseed.
    ///
    /// # Errors
    ///
    /// [`GeneratorError::InvalidSeed`] on malformed seeds; validation runs
    /// before any state is touched, so a failed reseed leaves the
    /// generator unchanged.
    pub fn reseed(&mut self, seed: &str) -> Result<(), GeneratorError> {
        *self = Self::from_seed(seed)?;
        Ok(())
    }

    /// Returns the decoded 40 bytes of seed material (key, then IV).
    pub fn seed(&self) -> &[u8; SEED_SIZE] {
        &self.seed
    }

    /// Number of keystream blocks drawn so far with the current seed.
    ///
    /// The first block is drawn at seeding time, so this reads 1 before
    /// any bytes have been requested.
    pub fn generated_blocks_count(&self) -> u64 {
        self.blocks_produced
    }

    /// Number of keystream bits consumed so far with the current seed.
    ///
    /// Counts whole blocks drawn plus the consumed prefix of the current
    /// block: `cursor*8 + (blocks-1)*512`. A freshly drawn block counts
    /// only once bytes are actually read from it.
    pub fn used_bits_count(&self) -> u128 {
        let block_bits = (Self::BLOCK_SIZE as u128) * 8;

        (self.cursor as u128) * 8 + (self.blocks_produced as u128 - 1) * block_bits
    }

    /// Returns exactly `n` keystream bytes, in stream order.
    ///
    /// Bytes come from the unread tail of the current block first, then
    /// from as many freshly drawn blocks as needed. The cursor ends just
    /// past the last byte taken in the final block used. No byte is ever
    /// skipped or handed out twice, including across multiple block
    /// boundaries within one call.
    ///
    /// # Errors
    ///
    /// - [`GeneratorError::InvalidLength`] if `n == 0`.
    /// - [`GeneratorError::KeystreamExhausted`] if the cipher's block
    ///   counter runs out while serving the request. Fatal: the cipher
    ///   cannot meaningfully continue, and only a reseed recovers.
    pub fn get_bytes(&mut self, n: usize) -> Result<Vec<u8>, GeneratorError> {
        if n == 0 {
            return Err(GeneratorError::InvalidLength);
        }

        let mut out = Vec::with_capacity(n);

        let take = n.min(Self::BLOCK_SIZE - self.cursor);
        out.extend_from_slice(&self.block[self.cursor..self.cursor + take]);
        self.cursor += take;

        while out.len() < n {
            self.refill()?;

            let missing = n - out.len();
            let take = missing.min(Self::BLOCK_SIZE);
            out.extend_from_slice(&self.block[..take]);
            self.cursor = take;
        }

        Ok(out)
    }

    /// Returns the next single keystream byte.
    pub fn get_byte(&mut self) -> Result<u8, GeneratorError> {
        Ok(self.get_bytes(1)?[0])
    }

    /// Draws the next block from the cipher and resets the cursor.
    fn refill(&mut self) -> Result<(), GeneratorError> {
        self.block = self
            .stream
            .next_block()
            .ok_or(GeneratorError::KeystreamExhausted)?;
        self.blocks_produced += 1;
        self.cursor = 0;

        Ok(())
    }
}

/// Decodes the significant prefix of a hex seed into key + IV material.
///
/// Only the first [`ChaChaRand::SEED_HEX_LEN`] characters are read; the
/// rest of the string is ignored, valid hex or not.
fn decode_seed(seed: &str) -> Result<[u8; SEED_SIZE], GeneratorError> {
    let significant = seed
        .get(..ChaChaRand::SEED_HEX_LEN)
        .ok_or(GeneratorError::InvalidSeed)?;

    let mut material = [0u8; SEED_SIZE];
    hex::decode_to_slice(significant, &mut material).map_err(|_| GeneratorError::InvalidSeed)?;

    Ok(material)
}
