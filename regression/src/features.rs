use std::num::NonZeroUsize;

use crate::{RegressionErr, Result};

/// Expands raw feature vectors into polynomial terms of a fixed degree.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FeatureAugmenter {
    degree: NonZeroUsize,
}

impl FeatureAugmenter {
    /// Creates a new `FeatureAugmenter`.
    ///
    /// # Arguments
    /// * `degree` - The highest power applied to every raw feature.
    ///
    /// # Returns
    /// An error if `degree` is zero.
    pub fn new(degree: usize) -> Result<Self> {
        let degree = NonZeroUsize::new(degree).ok_or(RegressionErr::InvalidDegree { degree })?;
        Ok(Self { degree })
    }

    /// Creates a `FeatureAugmenter` from an already validated degree.
    pub fn with_degree(degree: NonZeroUsize) -> Self {
        Self { degree }
    }

    pub fn degree(&self) -> usize {
        self.degree.get()
    }

    /// Returns the amount of augmented terms produced for `raw_len` raw features.
    pub fn term_count(&self, raw_len: usize) -> usize {
        raw_len * self.degree.get()
    }

    /// Expands `raw` into `f^1, ..., f^degree` for every feature `f`, keeping the
    /// order of the original features.
    pub fn augment(&self, raw: &[f64]) -> Vec<f64> {
        let degree = self.degree.get();

        raw.iter()
            .flat_map(|&f| (1..=degree).map(move |pow| f.powf(pow as f64)))
            .collect()
    }
}

/// Expands `raw` into its polynomial terms up to `degree`.
///
/// # Arguments
/// * `raw` - The raw feature values.
/// * `degree` - The highest power, must be at least 1.
///
/// # Returns
/// The augmented features or an error if `degree` is zero.
pub fn augment(raw: &[f64], degree: usize) -> Result<Vec<f64>> {
    Ok(FeatureAugmenter::new(degree)?.augment(raw))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_zero_degree() {
        assert_eq!(
            augment(&[1.0], 0),
            Err(RegressionErr::InvalidDegree { degree: 0 })
        );
    }

    #[test]
    fn degree_one_is_identity() {
        let raw = [1.5, -2.0, 0.0];
        assert_eq!(augment(&raw, 1).unwrap(), raw);
    }

    #[test]
    fn single_feature_powers() {
        assert_eq!(augment(&[3.0], 4).unwrap(), [3.0, 9.0, 27.0, 81.0]);
    }

    #[test]
    fn features_are_expanded_in_order() {
        let augmented = augment(&[2.0, -1.0], 3).unwrap();
        assert_eq!(augmented, [2.0, 4.0, 8.0, -1.0, 1.0, -1.0]);
    }

    #[test]
    fn length_is_raw_len_times_degree() {
        let augmenter = FeatureAugmenter::new(5).unwrap();
        let raw = [0.1, 0.2, 0.3];

        assert_eq!(augmenter.augment(&raw).len(), augmenter.term_count(raw.len()));
        assert_eq!(augmenter.term_count(raw.len()), 15);
        assert!(augmenter.augment(&[]).is_empty());
    }
}
