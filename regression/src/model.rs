use crate::{
    RegressionErr, Result,
    data::DataPoint,
    initialization::ParamGen,
    loss::{LossFn, Mse},
    summary,
};

/// Predictions are rounded to this many decimal digits.
const PREDICTION_SCALE: f64 = 1e10;

/// Values at or above this magnitude are already integral at the prediction scale.
const ROUND_LIMIT: f64 = 1e16;

/// A polynomial regression model.
///
/// Holds the weight vector, where index 0 is the bias and every following index is
/// the coefficient of the matching augmented feature.
#[derive(Debug, Clone, PartialEq)]
pub struct Model {
    weights: Vec<f64>,
}

impl Model {
    /// Creates a new `Model` from explicit weights.
    ///
    /// # Arguments
    /// * `weights` - The bias followed by one coefficient per augmented feature.
    ///
    /// # Returns
    /// An error if `weights` is empty, since there must be at least a bias.
    pub fn new(weights: Vec<f64>) -> Result<Self> {
        if weights.is_empty() {
            return Err(RegressionErr::InvalidInput("a model needs at least a bias weight"));
        }

        Ok(Self { weights })
    }

    /// Creates a new `Model` for `feature_count` augmented features, drawing its
    /// weights from `param_gen`.
    ///
    /// # Returns
    /// An error if `param_gen` cannot provide all the weights.
    pub fn init(feature_count: usize, param_gen: &mut dyn ParamGen) -> Result<Self> {
        let expected = feature_count + 1;
        let mut weights = Vec::with_capacity(expected);

        while weights.len() < expected {
            let sample = param_gen.sample(expected - weights.len());
            let Some(sample) = sample.filter(|s| !s.is_empty()) else {
                return Err(RegressionErr::ParamGenExhausted {
                    got: weights.len(),
                    expected,
                });
            };

            weights.extend(sample);
        }

        Ok(Self { weights })
    }

    /// A read-only snapshot of the current weights.
    pub fn weights(&self) -> &[f64] {
        &self.weights
    }

    pub(crate) fn weights_mut(&mut self) -> &mut [f64] {
        &mut self.weights
    }

    /// The amount of augmented features this model expects.
    pub fn feature_count(&self) -> usize {
        self.weights.len() - 1
    }

    /// Predicts the label of `features`.
    ///
    /// Computes `w0 + sum(w[i + 1] * features[i])`, rounded to 10 decimal digits.
    ///
    /// # Arguments
    /// * `features` - An augmented feature vector.
    ///
    /// # Returns
    /// An error if `features` doesn't have exactly one value per non-bias weight.
    pub fn predict(&self, features: &[f64]) -> Result<f64> {
        if features.len() != self.feature_count() {
            return Err(RegressionErr::SizeMismatch {
                a: "features",
                b: "weights",
                got: features.len(),
                expected: self.feature_count(),
            });
        }

        let dot: f64 = features
            .iter()
            .zip(&self.weights[1..])
            .map(|(x, w)| x * w)
            .sum();

        Ok(round_prediction(self.weights[0] + dot))
    }

    /// Computes the mean squared error of the model over `data_points`.
    ///
    /// # Returns
    /// An error if `data_points` is empty or any point has the wrong dimension.
    pub fn compute_loss(&self, data_points: &[DataPoint]) -> Result<f64> {
        if data_points.is_empty() {
            return Err(RegressionErr::EmptyDataset);
        }

        let mut total = 0.0;
        for point in data_points {
            let y_pred = self.predict(point.features())?;
            total += Mse.loss(y_pred, point.label());
        }

        Ok(total / data_points.len() as f64)
    }

    /// The model as a closed-form equation.
    pub fn equation(&self) -> String {
        summary::equation(&self.weights)
    }

    /// The model's weights as a table.
    pub fn weight_table(&self) -> String {
        summary::weight_table(&self.weights)
    }
}

/// Rounds half to even at the prediction scale.
fn round_prediction(value: f64) -> f64 {
    if value.abs() >= ROUND_LIMIT {
        return value;
    }

    (value * PREDICTION_SCALE).round_ties_even() / PREDICTION_SCALE
}
