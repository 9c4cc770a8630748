/// A pointwise loss between a prediction and its expected label.
pub trait LossFn {
    fn loss(&self, y_pred: f64, y: f64) -> f64;

    /// Derivative of `loss` with respect to `y_pred`.
    fn loss_prime(&self, y_pred: f64, y: f64) -> f64;
}

/// Squared error loss, averaged over a dataset it becomes the mean squared error.
#[derive(Debug, Default, Clone, Copy)]
pub struct Mse;

impl Mse {
    /// Returns a new `Mse`.
    pub fn new() -> Self {
        Self
    }
}

impl LossFn for Mse {
    fn loss(&self, y_pred: f64, y: f64) -> f64 {
        (y - y_pred).powi(2)
    }

    fn loss_prime(&self, y_pred: f64, y: f64) -> f64 {
        -2.0 * (y - y_pred)
    }
}
