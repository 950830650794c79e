//! Numeric derivation from keystream bytes
//!
//! Conversions from raw keystream bytes into unbiased fixed-width
//! integers, rejection-sampled bounded integers, and full-mantissa doubles
//! in `[0, 1)`.
//!
//! Every operation here is defined as an exact sequence of byte draws and
//! arithmetic steps. Reordering the arithmetic (or recycling leftover
//! bits) would change the output stream, so the procedures are kept
//! verbatim even where a shortcut looks harmless.

use crate::rng::generator::{ChaChaRand, GeneratorError};

/// Value range of a single keystream byte.
const WIDTH: u64 = 256;

/// Bytes drawn up front for a double (48 bits of initial numerator).
const CHUNKS: u32 = 6;

/// Lower end of the significand range, `2^52`.
const SIGNIFICANCE: u64 = 1 << 52;

/// First value that would round incorrectly when forming a double, `2^53`.
const OVERFLOW: u64 = SIGNIFICANCE * 2;

impl ChaChaRand {
    /// Returns a uniform integer in `[0, 2^nbits)`.
    ///
    /// Draws `ceil(nbits / 8)` whole bytes, masks the first byte down to
    /// `nbits % 8` bits (keeping all 8 when evenly divisible), and
    /// accumulates the remaining bytes big-endian. Whole bytes are always
    /// consumed: a 1-bit request costs exactly as much keystream as an
    /// 8-bit one.
    ///
    /// # Errors
    ///
    /// [`GeneratorError::InvalidBitWidth`] unless
    /// `1 <= nbits <=` [`ChaChaRand::MAX_SAFE_BITS`].
    pub fn get_random_bits_as_num(&mut self, nbits: u32) -> Result<u64, GeneratorError> {
        if nbits < 1 || nbits > Self::MAX_SAFE_BITS {
            return Err(GeneratorError::InvalidBitWidth);
        }

        let needed_bytes = nbits.div_ceil(8) as usize;
        let bytes = self.get_bytes(needed_bytes)?;

        // Bits that don't fill the leading byte
        let extra_bits = nbits % 8;
        let bitmask: u8 = if extra_bits == 0 {
            u8::MAX
        } else {
            (1 << extra_bits) - 1
        };

        let mut value = u64::from(bytes[0] & bitmask);
        for &byte in &bytes[1..] {
            value = value * WIDTH + u64::from(byte);
        }

        Ok(value)
    }

    /// Returns a uniform integer in `[0, max]`.
    ///
    /// Draws the minimum bit width containing `max` and rejection-samples
    /// until the value lands in range. This keeps the distribution exactly
    /// uniform at the cost of variable keystream consumption; the expected
    /// number of draws is below 2.
    ///
    /// # Errors
    ///
    /// - [`GeneratorError::InvalidBound`] if `max == 0`. A zero bound is
    ///   treated as a caller bug rather than short-circuited to 0.
    /// - [`GeneratorError::InvalidBitWidth`] if `max` needs more than
    ///   [`ChaChaRand::MAX_SAFE_BITS`] bits.
    pub fn get_random_uint(&mut self, max: u64) -> Result<u64, GeneratorError> {
        if max == 0 {
            return Err(GeneratorError::InvalidBound);
        }

        let maxbits = max.ilog2() + 1;

        let mut value = self.get_random_bits_as_num(maxbits)?;
        while value > max {
            value = self.get_random_bits_as_num(maxbits)?;
        }

        Ok(value)
    }

    /// Returns a uniform integer in `[min, max]`.
    ///
    /// # Errors
    ///
    /// [`GeneratorError::InvalidBound`] if `max <= min` or the span
    /// overflows; [`GeneratorError::InvalidBitWidth`] if the span needs
    /// more than [`ChaChaRand::MAX_SAFE_BITS`] bits.
    pub fn get_random_int_in_range(&mut self, min: i64, max: i64) -> Result<i64, GeneratorError> {
        let span = max
            .checked_sub(min)
            .filter(|span| *span > 0)
            .ok_or(GeneratorError::InvalidBound)?;

        Ok(min + self.get_random_uint(span as u64)? as i64)
    }

    /// Returns a double in `[0, 1)` with randomness in every mantissa bit.
    ///
    /// Uses David Bau's construction from seedrandom, adapted to this byte
    /// source: start with a 48-bit numerator over a `256^6` denominator,
    /// absorb one byte at a time until the numerator fills the significand
    /// range, then halve numerator, denominator, and the pending extra
    /// byte until the sum can no longer round up.
    ///
    /// The operation order is load-bearing: numerator and extra byte stay
    /// in `u64` (including the final unsigned right shifts) and the
    /// denominator is an `f64` power of two, so every intermediate value is
    /// exact and the result reproduces bit-for-bit across implementations.
    pub fn get_random_float(&mut self) -> Result<f64, GeneratorError> {
        // Numerator below 2^48 over a 2^48 denominator, no extra byte yet.
        let mut n = self.get_random_bits_as_num(CHUNKS * 8)?;
        let mut d = (WIDTH as f64).powi(CHUNKS as i32);
        let mut x = 0u64;

        while n < SIGNIFICANCE {
            // Shift numerator and denominator up a byte and draw a new
            // least significant byte.
            n = (n + x) * WIDTH;
            d *= WIDTH as f64;
            x = self.get_random_bits_as_num(8)?;
        }

        while n >= OVERFLOW {
            // Shift everything right until adding the extra byte can no
            // longer round up past the significand range.
            n /= 2;
            d /= 2.0;
            x >>= 1;
        }

        Ok((n + x) as f64 / d)
    }
}
