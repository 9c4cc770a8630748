use std::num::NonZeroUsize;

use crate::{RegressionErr, Result};

/// Validated settings of a training session.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TrainingConfig {
    degree: NonZeroUsize,
    epochs: NonZeroUsize,
    learning_rate: f64,
    min_learning_rate: f64,
    patience: NonZeroUsize,
}

impl TrainingConfig {
    pub const DEFAULT_PATIENCE: usize = 6;

    /// Creates a new `TrainingConfig`.
    ///
    /// # Arguments
    /// * `degree` - The polynomial degree the data was augmented with.
    /// * `epochs` - The maximum amount of full passes over the dataset.
    /// * `learning_rate` - The initial step size.
    /// * `min_learning_rate` - The floor the step size is never annealed below.
    /// * `patience` - Consecutive non-improving epochs tolerated before annealing.
    ///
    /// # Returns
    /// An error if any of the values is out of range.
    pub fn new(
        degree: usize,
        epochs: usize,
        learning_rate: f64,
        min_learning_rate: f64,
        patience: usize,
    ) -> Result<Self> {
        Ok(Self {
            degree: non_zero("degree", degree)?,
            epochs: non_zero("epochs", epochs)?,
            learning_rate: positive("learning_rate", learning_rate)?,
            min_learning_rate: positive("min_learning_rate", min_learning_rate)?,
            patience: non_zero("patience", patience)?,
        })
    }

    /// Creates the default configuration for `degree`.
    ///
    /// Higher degrees have larger gradients, so they get a smaller step size and
    /// a larger epoch budget: `learning_rate = 0.01^degree`,
    /// `min_learning_rate = 1e-5 * learning_rate` and `epochs = 1000 * 10^degree`.
    pub fn for_degree(degree: usize) -> Result<Self> {
        let learning_rate = 1e-2_f64.powf(degree as f64);
        let epochs = u32::try_from(degree)
            .ok()
            .and_then(|d| 10usize.checked_pow(d))
            .and_then(|p| p.checked_mul(1000))
            .ok_or(RegressionErr::InvalidConfig {
                field: "epochs",
                reason: "the default epoch budget overflows for this degree",
            })?;

        Self::new(
            degree,
            epochs,
            learning_rate,
            1e-5 * learning_rate,
            Self::DEFAULT_PATIENCE,
        )
    }

    pub fn with_epochs(self, epochs: usize) -> Result<Self> {
        Ok(Self {
            epochs: non_zero("epochs", epochs)?,
            ..self
        })
    }

    pub fn with_patience(self, patience: usize) -> Result<Self> {
        Ok(Self {
            patience: non_zero("patience", patience)?,
            ..self
        })
    }

    pub fn with_learning_rates(self, learning_rate: f64, min_learning_rate: f64) -> Result<Self> {
        Ok(Self {
            learning_rate: positive("learning_rate", learning_rate)?,
            min_learning_rate: positive("min_learning_rate", min_learning_rate)?,
            ..self
        })
    }

    pub fn degree(&self) -> NonZeroUsize {
        self.degree
    }

    pub fn epochs(&self) -> usize {
        self.epochs.get()
    }

    pub fn learning_rate(&self) -> f64 {
        self.learning_rate
    }

    pub fn min_learning_rate(&self) -> f64 {
        self.min_learning_rate
    }

    pub fn patience(&self) -> NonZeroUsize {
        self.patience
    }
}

fn non_zero(field: &'static str, value: usize) -> Result<NonZeroUsize> {
    NonZeroUsize::new(value).ok_or(RegressionErr::InvalidConfig {
        field,
        reason: "must be greater than zero",
    })
}

fn positive(field: &'static str, value: f64) -> Result<f64> {
    if value.is_finite() && value > 0.0 {
        Ok(value)
    } else {
        Err(RegressionErr::InvalidConfig {
            field,
            reason: "must be a finite number greater than zero",
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_epochs_is_a_config_error() {
        assert_eq!(
            TrainingConfig::new(1, 0, 0.01, 1e-7, 6),
            Err(RegressionErr::InvalidConfig {
                field: "epochs",
                reason: "must be greater than zero",
            })
        );
    }

    #[test]
    fn rejects_invalid_values() {
        assert!(TrainingConfig::new(0, 10, 0.01, 1e-7, 6).is_err());
        assert!(TrainingConfig::new(1, 10, 0.0, 1e-7, 6).is_err());
        assert!(TrainingConfig::new(1, 10, 0.01, -1.0, 6).is_err());
        assert!(TrainingConfig::new(1, 10, f64::NAN, 1e-7, 6).is_err());
        assert!(TrainingConfig::new(1, 10, 0.01, 1e-7, 0).is_err());
    }

    #[test]
    fn defaults_for_degree_one() {
        let config = TrainingConfig::for_degree(1).unwrap();

        assert_eq!(config.degree().get(), 1);
        assert_eq!(config.epochs(), 10_000);
        assert_eq!(config.learning_rate(), 0.01);
        assert_eq!(config.min_learning_rate(), 1e-5 * 0.01);
        assert_eq!(config.patience().get(), 6);
    }

    #[test]
    fn higher_degree_means_smaller_steps_and_more_epochs() {
        let linear = TrainingConfig::for_degree(1).unwrap();
        let cubic = TrainingConfig::for_degree(3).unwrap();

        assert_eq!(cubic.epochs(), 1_000_000);
        assert!(cubic.learning_rate() < linear.learning_rate());
        assert!((cubic.learning_rate() - 1e-6).abs() < 1e-18);
    }

    #[test]
    fn overflowing_degree_is_rejected() {
        assert!(TrainingConfig::for_degree(40).is_err());
    }

    #[test]
    fn overrides_are_validated() {
        let config = TrainingConfig::for_degree(2).unwrap();

        assert_eq!(config.with_epochs(5).unwrap().epochs(), 5);
        assert_eq!(config.with_patience(2).unwrap().patience().get(), 2);
        assert!(config.with_epochs(0).is_err());
        assert!(config.with_learning_rates(0.1, 0.0).is_err());
    }
}
