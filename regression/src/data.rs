use crate::features::FeatureAugmenter;

/// A single training sample: an augmented feature vector and its target label.
#[derive(Debug, Clone, PartialEq)]
pub struct DataPoint {
    features: Vec<f64>,
    label: f64,
}

impl DataPoint {
    /// Creates a new `DataPoint`.
    ///
    /// # Arguments
    /// * `features` - The already augmented features.
    /// * `label` - The expected output for `features`.
    pub fn new(features: Vec<f64>, label: f64) -> Self {
        Self { features, label }
    }

    /// Creates a new `DataPoint` by augmenting `raw` with `augmenter`.
    pub fn from_raw(raw: &[f64], label: f64, augmenter: &FeatureAugmenter) -> Self {
        Self::new(augmenter.augment(raw), label)
    }

    pub fn features(&self) -> &[f64] {
        &self.features
    }

    pub fn label(&self) -> f64 {
        self.label
    }
}
