/// The loss of every completed epoch, in order.
///
/// Only the trainer appends to it; everyone else gets read access.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct LossHistory {
    losses: Vec<f64>,
}

impl LossHistory {
    #[inline]
    pub(crate) fn push(&mut self, loss: f64) {
        self.losses.push(loss);
    }

    pub fn as_slice(&self) -> &[f64] {
        &self.losses
    }

    pub fn len(&self) -> usize {
        self.losses.len()
    }

    pub fn is_empty(&self) -> bool {
        self.losses.is_empty()
    }

    /// The loss of the last completed epoch.
    pub fn last(&self) -> Option<f64> {
        self.losses.last().copied()
    }

    pub fn iter(&self) -> impl Iterator<Item = f64> + '_ {
        self.losses.iter().copied()
    }
}
