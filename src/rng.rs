//! Injectable randomness for the simulation
//!
//! Every draw the engine makes goes through `Sampler`, so a seeded `StdRng`
//! gives reproducible runs and tests can force individual outcomes.

use rand::Rng;

/// The two kinds of draw the simulation performs.
pub trait Sampler {
    /// True with probability `p`
    fn chance(&mut self, p: f64) -> bool;

    /// Index into `weights`, picked proportionally. Zero-weight entries are
    /// never selected. `weights` must not sum to zero.
    fn weighted(&mut self, weights: &[u32]) -> usize;
}

impl<R: Rng> Sampler for R {
    fn chance(&mut self, p: f64) -> bool {
        self.gen::<f64>() < p
    }

    fn weighted(&mut self, weights: &[u32]) -> usize {
        let total: u32 = weights.iter().sum();
        let mut roll = self.gen_range(0..total);
        for (i, &w) in weights.iter().enumerate() {
            if roll < w {
                return i;
            }
            roll -= w;
        }
        // Unreachable while total covers every roll; point at the last entry.
        weights.len() - 1
    }
}

#[cfg(test)]
mod tests {
    use super::Sampler;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn chance_extremes() {
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..200 {
            assert!(!rng.chance(0.0));
            assert!(rng.chance(1.0));
        }
    }

    #[test]
    fn weighted_skips_zero_entries() {
        let mut rng = StdRng::seed_from_u64(7);
        let weights = [50, 25, 15, 10, 0, 0];
        for _ in 0..2000 {
            let idx = rng.weighted(&weights);
            assert!(idx < 4, "picked zero-weight slot {}", idx);
        }
    }

    #[test]
    fn weighted_reaches_every_nonzero_entry() {
        let mut rng = StdRng::seed_from_u64(7);
        let weights = [50, 25, 15, 10];
        let mut seen = [false; 4];
        for _ in 0..2000 {
            seen[rng.weighted(&weights)] = true;
        }
        assert_eq!(seen, [true; 4]);
    }
}
