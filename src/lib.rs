//! Deterministic randomness derived from a ChaCha20 keystream
//!
//! This crate provides a seeded pseudo-random generator whose entire output
//! sequence is a pure function of its seed. Two generators built from the
//! same seed produce bit-for-bit identical results for identical call
//! sequences, on every platform. That reproducibility is the point of the
//! crate: deterministic simulation, reproducible tests, and verifiable
//! randomness (e.g. randomness-beacon style audits).
//!
//! The focus is on **clarity, predictability, and auditability**. The
//! keystream is produced by an in-crate ChaCha20 block function, consumed
//! strictly in order through a block buffer, and refined into higher-level
//! primitives that spend the minimum possible amount of keystream:
//!
//! - raw bytes and single bytes
//! - unbiased fixed-width integers and rejection-sampled bounded integers
//! - doubles in `[0, 1)` with randomness in every mantissa bit
//! - Fisher-Yates shuffling and order-aware/order-agnostic sampling
//!
//! # Module overview
//!
//! - `rng`
//!   The deterministic generator itself: seeding and reseeding, keystream
//!   buffering, numeric derivation, and the shuffling/sampling algorithms.
//!   Also provides `rand_core` trait implementations so the generator can
//!   be used anywhere the rand ecosystem expects an RNG.
//!
//! # Design goals
//!
//! - Bit-exact reproducibility across implementations and platforms
//! - Explicit fixed-width integer and floating types throughout
//! - Minimal and explicit API surface
//! - Every failure mode an explicit error value, never a panic
//!
//! This crate is **not** a general-purpose cryptographic library. The
//! ChaCha20 keystream gives the output good statistical quality, but no
//! security audit of the construction is implied.

pub mod rng;
