// src/rng.rs
//! Random Number Generation for Monte Carlo Simulations
//!
//! # Design
//!
//! Every estimator receives its randomness through an explicit [`SimRng`]
//! handle instead of a process-wide generator:
//! 1. **Reproducibility**: `SimRng::from_seed(s)` always yields the same draws
//! 2. **Independence**: each estimator call draws a fresh sample from the
//!    handle, so two estimators never share the same underlying normals
//! 3. **Statistical quality**: normals come from `rand_distr::StandardNormal`
//!    (Ziggurat) on top of `StdRng`
//!
//! Unseeded runs use `SimRng::from_entropy()` and are not reproducible.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use rand_distr::{Distribution, StandardNormal};

/// Seeded standard-normal source for the estimators
#[derive(Debug, Clone)]
pub struct SimRng {
    inner: StdRng,
    seed: Option<u64>,
}

impl SimRng {
    /// Deterministic generator; the same seed replays the same sequence.
    pub fn from_seed(seed: u64) -> Self {
        Self {
            inner: StdRng::seed_from_u64(seed),
            seed: Some(seed),
        }
    }

    /// Generator seeded from OS entropy (non-reproducible).
    pub fn from_entropy() -> Self {
        Self {
            inner: StdRng::from_entropy(),
            seed: None,
        }
    }

    /// Seed used at construction, `None` for entropy-seeded generators
    pub fn seed(&self) -> Option<u64> {
        self.seed
    }

    pub fn normal(&mut self) -> f64 {
        get_normal_draw(&mut self.inner)
    }

    /// Draw a fresh sample of `n` independent standard normals
    pub fn normals(&mut self, n: usize) -> Vec<f64> {
        let mut buffer = vec![0.0; n];
        self.fill_normal(&mut buffer);
        buffer
    }

    pub fn fill_normal(&mut self, buffer: &mut [f64]) {
        for value in buffer.iter_mut() {
            *value = get_normal_draw(&mut self.inner);
        }
    }
}

impl Default for SimRng {
    fn default() -> Self {
        Self::from_entropy()
    }
}

pub fn get_normal_draw<R: Rng + ?Sized>(rng: &mut R) -> f64 {
    StandardNormal.sample(rng)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_seeded_reproducibility() {
        let mut rng1 = SimRng::from_seed(42);
        let mut rng2 = SimRng::from_seed(42);

        for _ in 0..100 {
            assert_eq!(rng1.normal().to_bits(), rng2.normal().to_bits());
        }
        assert_eq!(rng1.seed(), Some(42));
    }

    #[test]
    fn test_different_seeds_differ() {
        let mut rng1 = SimRng::from_seed(1);
        let mut rng2 = SimRng::from_seed(2);

        assert_ne!(rng1.normals(10), rng2.normals(10));
    }

    #[test]
    fn test_successive_samples_are_fresh() {
        let mut rng = SimRng::from_seed(7);
        let first = rng.normals(16);
        let second = rng.normals(16);
        assert_ne!(first, second);
    }

    #[test]
    fn test_entropy_rng_has_no_seed() {
        let rng = SimRng::from_entropy();
        assert_eq!(rng.seed(), None);
    }

    #[test]
    fn test_normal_distribution() {
        let mut rng = SimRng::from_seed(42);

        let samples = rng.normals(10_000);

        let mean = samples.iter().sum::<f64>() / samples.len() as f64;
        let variance =
            samples.iter().map(|x| (x - mean).powi(2)).sum::<f64>() / samples.len() as f64;

        assert!(mean.abs() < 0.05, "Mean should be close to 0, got {}", mean);
        assert!((variance - 1.0).abs() < 0.05, "Variance should be close to 1, got {}", variance);
    }
}
