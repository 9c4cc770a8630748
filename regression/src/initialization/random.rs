use rand::Rng;
use rand_distr::{Distribution, Uniform};

use super::ParamGen;
use crate::{RegressionErr, Result};

/// A parameter generator that follows a certain probabilistic distribution.
pub struct RandParamGen<R: Rng, D: Distribution<f64>> {
    rng: R,
    distribution: D,
    remaining: usize,
}

impl<R: Rng, D: Distribution<f64>> RandParamGen<R, D> {
    /// Creates a new `RandParamGen` parameter generator.
    ///
    /// # Arguments
    /// * `rng` - A random number generator.
    /// * `distribution` - The distribution to sample the random numbers from.
    /// * `limit` - The maximum amount of numbers to generate.
    pub fn new(rng: R, distribution: D, limit: usize) -> Self {
        Self {
            rng,
            distribution,
            remaining: limit,
        }
    }
}

impl<R: Rng> RandParamGen<R, Uniform<f64>> {
    /// Creates a new `RandParamGen` parameter generator with a uniform distribution.
    ///
    /// # Arguments
    /// * `rng` - A random number generator.
    /// * `limit` - The maximum amount of numbers to generate.
    /// * `low` - The inclusive lower limit.
    /// * `high` - The exclusive upper limit.
    ///
    /// # Returns
    /// An error if the range is invalid (low >= high).
    pub fn uniform(rng: R, limit: usize, low: f64, high: f64) -> Result<Self> {
        let distribution =
            Uniform::new(low, high).map_err(|e| RegressionErr::InitErr(e.to_string()))?;
        Ok(Self::new(rng, distribution, limit))
    }
}

impl<R: Rng, D: Distribution<f64>> ParamGen for RandParamGen<R, D> {
    fn sample(&mut self, mut n: usize) -> Option<Vec<f64>> {
        if self.remaining == 0 {
            return None;
        }

        n = n.min(self.remaining);
        self.remaining -= n;

        let sample = (&self.distribution)
            .sample_iter(&mut self.rng)
            .take(n)
            .collect();

        Some(sample)
    }
}

#[cfg(test)]
mod tests {
    use rand::{SeedableRng, rngs::StdRng};

    use super::*;

    #[test]
    fn uniform_stays_in_range() {
        let rng = StdRng::seed_from_u64(7);
        let mut param_gen = RandParamGen::uniform(rng, 100, -0.005, 0.005).unwrap();

        let sample = param_gen.sample(100).unwrap();
        assert_eq!(sample.len(), 100);
        assert!(sample.iter().all(|w| (-0.005..0.005).contains(w)));
        assert!(param_gen.sample(1).is_none());
    }

    #[test]
    fn invalid_uniform_range() {
        let rng = StdRng::seed_from_u64(7);
        assert!(RandParamGen::uniform(rng, 1, 1.0, -1.0).is_err());
    }

    #[test]
    fn non_finite_uniform_range() {
        let rng = StdRng::seed_from_u64(7);
        assert!(RandParamGen::uniform(rng, 1, f64::NAN, 1.0).is_err());
    }

    #[test]
    fn same_seed_same_weights() {
        let mut a = RandParamGen::uniform(StdRng::seed_from_u64(42), 8, -1.0, 1.0).unwrap();
        let mut b = RandParamGen::uniform(StdRng::seed_from_u64(42), 8, -1.0, 1.0).unwrap();

        assert_eq!(a.sample(8), b.sample(8));
    }

    #[test]
    fn partial() {
        let rng = StdRng::seed_from_u64(1);
        let mut param_gen = RandParamGen::uniform(rng, 5, -1.0, 1.0).unwrap();

        assert_eq!(param_gen.sample(3).unwrap().len(), 3);
        assert_eq!(param_gen.sample(3).unwrap().len(), 2);
        assert!(param_gen.sample(1).is_none());
    }
}
