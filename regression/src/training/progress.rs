use crate::summary::{self, Summary};

/// A snapshot of the training state, taken after an epoch.
#[derive(Debug, Clone, Copy)]
pub struct Progress<'a> {
    pub epoch: usize,
    pub loss: f64,
    pub weights: &'a [f64],
    pub learning_rate: f64,
}

impl Progress<'_> {
    /// The weights as a comma separated list with five decimals.
    pub fn render_weights(&self) -> String {
        summary::render_weights(self.weights)
    }
}

/// Receives the events of a training session.
///
/// The trainer never does I/O itself, everything observable goes through a sink.
/// Implementations must cope with NaN losses.
pub trait ProgressSink {
    /// Called after every epoch whose loss improved on the previous one.
    fn on_progress(&mut self, progress: &Progress<'_>);

    /// Called once if training stops early because patience ran out at the
    /// learning rate floor.
    fn on_halt(&mut self, _progress: &Progress<'_>) {}

    /// Called once when training ends, with the final model rendering.
    fn on_finish(&mut self, _summary: &Summary) {}
}

impl<S: ProgressSink + ?Sized> ProgressSink for &mut S {
    fn on_progress(&mut self, progress: &Progress<'_>) {
        (**self).on_progress(progress);
    }

    fn on_halt(&mut self, progress: &Progress<'_>) {
        (**self).on_halt(progress);
    }

    fn on_finish(&mut self, summary: &Summary) {
        (**self).on_finish(summary);
    }
}

/// A sink that ignores every event.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoProgress;

impl ProgressSink for NoProgress {
    fn on_progress(&mut self, _progress: &Progress<'_>) {}
}
