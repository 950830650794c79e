//! Shuffling and sampling
//!
//! Fisher-Yates based algorithms expressed purely in terms of bounded
//! integer draws, arranged to consume as little keystream as possible:
//! a shuffle stopped after `k` steps yields a `k`-element sample, and an
//! order-agnostic sample larger than half the sequence is produced by
//! drawing its smaller complement instead.

use crate::rng::generator::{ChaChaRand, GeneratorError};

impl ChaChaRand {
    /// Shuffles the sequence in place.
    ///
    /// A full Fisher-Yates pass: `len - 1` swaps, each pairing the current
    /// tail position with a uniformly drawn earlier-or-equal position. The
    /// result is a uniformly random permutation of the input. There is no
    /// return value; callers observe the mutation.
    ///
    /// # Errors
    ///
    /// [`GeneratorError::InvalidStepCount`] for sequences shorter than 2,
    /// where no swap step is possible.
    pub fn shuffle<T>(&mut self, seq: &mut [T]) -> Result<(), GeneratorError> {
        self.fisher_yates(seq, seq.len().saturating_sub(1))
    }

    /// Runs `steps` Fisher-Yates swaps and returns the chosen elements.
    ///
    /// The sequence is partially shuffled in place; the selected elements
    /// accumulate at its tail. The returned vector holds the last `steps`
    /// positions reversed, so it reads from first-chosen to last-chosen —
    /// an order-preserving random sample that never pays for the swaps a
    /// full shuffle would still need.
    ///
    /// # Errors
    ///
    /// [`GeneratorError::InvalidStepCount`] unless
    /// `1 <= steps <= seq.len() - 1`.
    pub fn partial_shuffle<T: Clone>(
        &mut self,
        seq: &mut [T],
        steps: usize,
    ) -> Result<Vec<T>, GeneratorError> {
        self.fisher_yates(seq, steps)?;

        Ok(seq[seq.len() - steps..].iter().rev().cloned().collect())
    }

    /// Returns `size` distinct elements drawn uniformly from `seq`.
    ///
    /// The input slice itself is never reordered; the draw runs over an
    /// index vector and maps the chosen indices back to cloned elements.
    ///
    /// With `order_matters` the result lists elements from first-chosen to
    /// last-chosen, as if picking them one by one. Without it, and when the
    /// sample covers more than half the sequence, the complementary
    /// "anti-sample" of `len - size` elements is drawn instead and the
    /// result is everything left over, in original order. Fisher-Yates
    /// cost scales with the number of steps, so drawing the smaller of
    /// `{size, len - size}` halves the worst-case keystream consumption;
    /// indices beyond the anti-draw's reach are implicitly included.
    ///
    /// # Errors
    ///
    /// [`GeneratorError::InvalidSampleSize`] unless
    /// `1 <= size <= seq.len() - 1`. A full-length sample is rejected by
    /// design; use [`ChaChaRand::shuffle`] for that.
    pub fn sample<T: Clone>(
        &mut self,
        seq: &[T],
        size: usize,
        order_matters: bool,
    ) -> Result<Vec<T>, GeneratorError> {
        let n = seq.len();
        if size == 0 || size > n.saturating_sub(1) {
            return Err(GeneratorError::InvalidSampleSize);
        }

        let mut indices: Vec<usize> = (0..n).collect();

        let chosen = if order_matters || 2 * size <= n {
            self.partial_shuffle(&mut indices, size)?
        } else {
            let anti_size = n - size;
            let anti_sample = self.partial_shuffle(&mut indices, anti_size)?;

            let mut excluded = vec![false; n];
            for index in anti_sample {
                excluded[index] = true;
            }

            (0..n).filter(|index| !excluded[*index]).collect()
        };

        Ok(chosen.into_iter().map(|index| seq[index].clone()).collect())
    }

    /// Returns one uniformly chosen element.
    ///
    /// # Errors
    ///
    /// [`GeneratorError::InvalidSampleSize`] for sequences shorter than 2.
    pub fn choice<'a, T>(&mut self, seq: &'a [T]) -> Result<&'a T, GeneratorError> {
        if seq.len() < 2 {
            return Err(GeneratorError::InvalidSampleSize);
        }

        let chosen = self.get_random_uint((seq.len() - 1) as u64)? as usize;

        Ok(&seq[chosen])
    }

    /// Returns `count` uniform draws **with** replacement.
    ///
    /// Unlike [`ChaChaRand::sample`], the same element may appear more
    /// than once.
    ///
    /// # Errors
    ///
    /// [`GeneratorError::InvalidSampleSize`] unless
    /// `1 <= count <= seq.len() - 1`.
    pub fn choices<T: Clone>(
        &mut self,
        seq: &[T],
        count: usize,
    ) -> Result<Vec<T>, GeneratorError> {
        let n = seq.len();
        if count == 0 || count > n.saturating_sub(1) {
            return Err(GeneratorError::InvalidSampleSize);
        }

        let mut out = Vec::with_capacity(count);
        for _ in 0..count {
            let chosen = self.get_random_uint((n - 1) as u64)? as usize;
            out.push(seq[chosen].clone());
        }

        Ok(out)
    }

    /// Fisher-Yates with an early stop.
    ///
    /// Performs `steps` swaps, each exchanging the current tail position
    /// `j - 1` with a uniform position in `[0, j - 1]` (a self-swap keeps
    /// the element in place). After `len - 1` steps the shuffle is
    /// complete; fewer steps leave a uniformly chosen, uniformly ordered
    /// sample in the tail.
    fn fisher_yates<T>(&mut self, seq: &mut [T], steps: usize) -> Result<(), GeneratorError> {
        let n = seq.len();
        if steps == 0 || steps > n.saturating_sub(1) {
            return Err(GeneratorError::InvalidStepCount);
        }

        let mut j = n;
        for _ in 0..steps {
            let k = self.get_random_uint((j - 1) as u64)? as usize;
            seq.swap(k, j - 1);
            j -= 1;
        }

        Ok(())
    }
}
