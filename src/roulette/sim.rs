//! Batch spin simulation for history statistics.
//!
//! The simulator spins without wagering, the way the trainer's "skip 100
//! spins" control seeds the stats panel. Work can be split into chunks so
//! a UI thread stays responsive between them; chunking never changes the
//! outcome stream, which is fixed by the seed.

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use super::pocket::Pocket;
use super::wheel::{Variant, Wheel};

/// A seeded spin simulator accumulating a per-pocket histogram.
#[derive(Debug, Clone)]
pub struct SpinSimulator {
    wheel: Wheel,
    rng: ChaCha8Rng,
    counts: Vec<u64>,
    total: u64,
}

impl SpinSimulator {
    /// Creates a simulator for the given variant and seed.
    #[must_use]
    pub fn new(variant: Variant, seed: u64) -> Self {
        let wheel = Wheel::new(variant);
        Self {
            counts: vec![0; wheel.pocket_count()],
            wheel,
            rng: ChaCha8Rng::seed_from_u64(seed),
            total: 0,
        }
    }

    /// Runs `spins` more spins. Call once with the full count or many
    /// times with small chunks; the accumulated histogram is identical.
    pub fn run(&mut self, spins: u64) {
        for _ in 0..spins {
            let pocket = self.wheel.spin_with(&mut self.rng);
            if let Some(index) = self.wheel.pocket_index(pocket) {
                self.counts[index] += 1;
            }
            self.total += 1;
        }
    }

    /// The wheel being simulated.
    #[must_use]
    pub const fn wheel(&self) -> &Wheel {
        &self.wheel
    }

    /// Spins run so far.
    #[must_use]
    pub const fn total(&self) -> u64 {
        self.total
    }

    /// Histogram aligned with [`Wheel::pockets`].
    #[must_use]
    pub fn counts(&self) -> &[u64] {
        &self.counts
    }

    /// Hits recorded for one pocket.
    #[must_use]
    pub fn count_for(&self, pocket: Pocket) -> u64 {
        self.wheel
            .pocket_index(pocket)
            .map_or(0, |index| self.counts[index])
    }

    /// Pearson chi-squared statistic of the histogram against the
    /// uniform distribution. With k pockets the statistic has k−1
    /// degrees of freedom under the null.
    #[must_use]
    pub fn chi_squared(&self) -> f64 {
        if self.total == 0 {
            return 0.0;
        }
        #[expect(
            clippy::cast_precision_loss,
            reason = "spin counts stay far below 2^52"
        )]
        let expected = self.total as f64 / self.counts.len() as f64;
        self.counts
            .iter()
            .map(|&observed| {
                #[expect(
                    clippy::cast_precision_loss,
                    reason = "spin counts stay far below 2^52"
                )]
                let diff = observed as f64 - expected;
                diff * diff / expected
            })
            .sum()
    }
}
