use log::info;
use rand::rngs::{OsRng, StdRng};
use rand::{RngCore, SeedableRng, TryRngCore};

use crate::consts::RAND_MAX;
use crate::error::{RandomError, Result};

/// A seeded generator handing out unbiased integers below a caller-chosen bound.
///
/// The underlying generator only ever contributes 31-bit raw values in `[0, RAND_MAX]`.
/// Draws below `n` reject the top sliver of raw values that would over-represent small
/// residues, so every residue is equally likely.
#[derive(Debug, Clone)]
pub struct RandomStream {
    rng: StdRng,
    seed: u32,
}

impl RandomStream {
    ///
    /// Create a stream from an explicit seed, or from OS entropy when `seed` is `None`.
    ///
    /// `Some(0)` is an ordinary seed here; callers that treat zero as "no seed" map it to
    /// `None` themselves.
    pub fn new(seed: Option<u32>) -> Result<Self> {
        match seed {
            Some(seed) => Ok(RandomStream::from_seed(seed)),
            None => RandomStream::from_entropy(),
        }
    }

    pub fn from_seed(seed: u32) -> Self {
        info!("Seeding random stream with {}", seed);
        RandomStream {
            rng: StdRng::seed_from_u64(seed as u64),
            seed,
        }
    }

    /// Seed from a 32-bit value read from the operating system.
    pub fn from_entropy() -> Result<Self> {
        let seed = OsRng
            .try_next_u32()
            .map_err(|e| RandomError::EntropySourceUnavailable(e.to_string()))?;

        info!("Seeding random stream from OS entropy");
        Ok(RandomStream::from_seed(seed))
    }

    /// The seed this stream started from, so an entropy-seeded run can be replayed.
    pub fn seed(&self) -> u32 {
        self.seed
    }

    #[inline]
    fn next_raw(&mut self) -> u32 {
        self.rng.next_u32() >> 1
    }

    ///
    /// Draw uniformly from `[0, n)`.
    ///
    /// # Arguments
    /// - n: exclusive upper bound, between 1 and `RAND_MAX + 1`
    pub fn draw_below(&mut self, n: u32) -> Result<u32> {
        if n == 0 || n > RAND_MAX + 1 {
            return Err(RandomError::InvalidRange {
                n: n as u64,
                max: RAND_MAX as u64 + 1,
            });
        }

        let limit = RAND_MAX - (RAND_MAX + 1) % n;
        let mut raw = self.next_raw();
        while raw > limit {
            raw = self.next_raw();
        }

        Ok(raw % n)
    }

    ///
    /// Draw uniformly from `[0, n)` for bounds beyond the 31-bit raw range.
    ///
    /// Four raw values are folded into one 64-bit value before rejection.
    pub fn draw_below_large(&mut self, n: u64) -> Result<u64> {
        if n == 0 {
            return Err(RandomError::InvalidRange { n, max: u64::MAX });
        }

        Ok(self.below_u64(n))
    }

    fn below_u64(&mut self, n: u64) -> u64 {
        let limit = u64::MAX - (u64::MAX - n + 1) % n;
        let mut raw = self.next_wide();
        while raw > limit {
            raw = self.next_wide();
        }

        raw % n
    }

    fn next_wide(&mut self) -> u64 {
        let r1 = self.next_raw() as u64;
        let r2 = self.next_raw() as u64;
        let r3 = self.next_raw() as u64;
        let r4 = self.next_raw() as u64;

        (r1 << 48) ^ (r2 << 32) ^ (r3 << 16) ^ r4
    }

    /// Fisher-Yates shuffle driven by this stream.
    pub fn shuffle<T>(&mut self, items: &mut [T]) {
        for i in (1..items.len()).rev() {
            let j = self.below_u64(i as u64 + 1) as usize;
            items.swap(i, j);
        }
    }

    /// Derive a stream for a worker. The child seed comes from this stream, so a run with an
    /// explicit seed splits the same way every time.
    pub fn split(&mut self) -> RandomStream {
        let seed = self.rng.next_u32();
        RandomStream::from_seed(seed)
    }
}
