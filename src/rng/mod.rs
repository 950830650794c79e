//! Seeded deterministic randomness
//!
//! This module provides [`ChaChaRand`], a deterministic pseudo-random
//! generator driven by a ChaCha20 keystream.
//!
//! The generator is seeded from a hexadecimal string encoding a 256-bit
//! key and a 64-bit IV. From there, every call consumes keystream bytes in
//! strict order, so the full output sequence is reproducible from the seed
//! alone.

/// Design goals:
/// - Bit-exact reproducibility from a seed
/// - Strictly ordered, observable keystream consumption
/// - Entropy-minimal sampling algorithms
/// - Explicit error values for every failure mode
pub(crate) mod chacha20;
mod compat;
mod generator;
mod numeric;
mod sampler;

/// Deterministic ChaCha20-keystream generator.
///
/// This type is the entry point for all randomness in the crate.
pub use generator::ChaChaRand;

/// Errors raised by generator operations.
pub use generator::GeneratorError;
