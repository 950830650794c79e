//! rand_core integration
//!
//! Implements the rand ecosystem traits for [`ChaChaRand`] so it can drive
//! any API expecting an [`RngCore`]. Draws made through these traits
//! consume the same keystream, in the same order, as direct `get_bytes`
//! calls, and show up in the consumption counters like any other draw.

use rand_core::{CryptoRng, Error, RngCore, impls};

use crate::rng::generator::ChaChaRand;

impl RngCore for ChaChaRand {
    fn next_u32(&mut self) -> u32 {
        impls::next_u32_via_fill(self)
    }

    fn next_u64(&mut self) -> u64 {
        impls::next_u64_via_fill(self)
    }

    /// Fills `dest` from the keystream.
    ///
    /// # Panics
    ///
    /// Panics if the keystream is exhausted, the one unrecoverable failure
    /// this generator has. Use [`RngCore::try_fill_bytes`] to observe it as
    /// an error instead.
    fn fill_bytes(&mut self, dest: &mut [u8]) {
        if let Err(err) = self.try_fill_bytes(dest) {
            panic!("chacharand: {err}");
        }
    }

    fn try_fill_bytes(&mut self, dest: &mut [u8]) -> Result<(), Error> {
        if dest.is_empty() {
            return Ok(());
        }

        let bytes = self.get_bytes(dest.len()).map_err(Error::new)?;
        dest.copy_from_slice(&bytes);

        Ok(())
    }
}

/// The keystream is ChaCha20; draws are suitable wherever a
/// cryptographically strong RNG is expected, reproducibility aside.
impl CryptoRng for ChaChaRand {}
