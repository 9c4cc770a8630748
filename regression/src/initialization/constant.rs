use super::ParamGen;

/// A parameter generator that replays a fixed sequence of values.
///
/// Mostly useful to start training from known weights.
pub struct ConstParamGen {
    values: Vec<f64>,
    next: usize,
}

impl ConstParamGen {
    /// Creates a new `ConstParamGen` parameter generator.
    ///
    /// # Arguments
    /// * `values` - The values to generate, in order.
    pub fn new(values: Vec<f64>) -> Self {
        Self { values, next: 0 }
    }

    /// Creates a new `ConstParamGen` that generates `value` up to `limit` times.
    pub fn repeat(value: f64, limit: usize) -> Self {
        Self::new(vec![value; limit])
    }
}

impl ParamGen for ConstParamGen {
    fn sample(&mut self, n: usize) -> Option<Vec<f64>> {
        let remaining = self.values.len() - self.next;
        if remaining == 0 {
            return None;
        }

        let end = self.next + n.min(remaining);
        let sample = self.values[self.next..end].to_vec();
        self.next = end;
        Some(sample)
    }
}
