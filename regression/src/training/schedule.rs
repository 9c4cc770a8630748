use std::num::NonZeroUsize;

use super::TrainingConfig;

/// What the schedule decided after observing an epoch's loss.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Step {
    /// The loss strictly decreased.
    Improved,
    /// The loss did not decrease but patience is not exhausted yet.
    Stalled { patience_counter: usize },
    /// Patience ran out and the learning rate was reduced.
    Annealed { from: f64, to: f64 },
    /// Patience ran out with the learning rate already at its floor.
    Halt,
    /// The loss could not be ordered against the previous one (NaN).
    Unordered,
}

/// Adaptive learning rate policy driven by the loss trend.
///
/// Every non-improving epoch consumes patience. Once `patience` epochs in a row did
/// not improve, the learning rate is divided by 10, clamped to `min_learning_rate`.
/// If patience runs out again with the rate at the floor, training should halt.
#[derive(Debug, Clone)]
pub struct PatienceSchedule {
    learning_rate: f64,
    min_learning_rate: f64,
    patience: NonZeroUsize,
    patience_counter: usize,
    previous_loss: f64,
    at_floor: bool,
}

impl PatienceSchedule {
    /// Creates a new `PatienceSchedule`.
    ///
    /// # Arguments
    /// * `learning_rate` - The initial learning rate.
    /// * `min_learning_rate` - The floor for annealing.
    /// * `patience` - Consecutive non-improving epochs before acting.
    pub fn new(learning_rate: f64, min_learning_rate: f64, patience: NonZeroUsize) -> Self {
        Self {
            learning_rate,
            min_learning_rate,
            patience,
            patience_counter: 0,
            previous_loss: f64::INFINITY,
            at_floor: learning_rate <= min_learning_rate,
        }
    }

    pub fn from_config(config: &TrainingConfig) -> Self {
        Self::new(
            config.learning_rate(),
            config.min_learning_rate(),
            config.patience(),
        )
    }

    pub fn learning_rate(&self) -> f64 {
        self.learning_rate
    }

    pub fn patience_counter(&self) -> usize {
        self.patience_counter
    }

    pub fn previous_loss(&self) -> f64 {
        self.previous_loss
    }

    /// Whether annealing has already clamped the learning rate to its floor.
    pub fn at_floor(&self) -> bool {
        self.at_floor
    }

    /// Feeds the loss of the epoch that just finished.
    pub fn observe(&mut self, loss: f64) -> Step {
        let step = if loss >= self.previous_loss {
            self.patience_counter += 1;

            if self.patience_counter < self.patience.get() {
                Step::Stalled {
                    patience_counter: self.patience_counter,
                }
            } else if self.at_floor {
                Step::Halt
            } else {
                self.anneal()
            }
        } else {
            self.patience_counter = 0;

            if loss < self.previous_loss {
                Step::Improved
            } else {
                Step::Unordered
            }
        };

        self.previous_loss = loss;
        step
    }

    fn anneal(&mut self) -> Step {
        let from = self.learning_rate;
        self.learning_rate = (from / 10.0).max(self.min_learning_rate);
        self.at_floor = self.learning_rate <= self.min_learning_rate;
        self.patience_counter = 0;

        Step::Annealed {
            from,
            to: self.learning_rate,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn schedule(learning_rate: f64, min_learning_rate: f64, patience: usize) -> PatienceSchedule {
        let patience = NonZeroUsize::new(patience).unwrap();
        PatienceSchedule::new(learning_rate, min_learning_rate, patience)
    }

    #[test]
    fn reports_only_strict_improvements() {
        let mut schedule = schedule(0.1, 0.001, 6);

        let steps: Vec<_> = [5.0, 3.0, 3.0].map(|loss| schedule.observe(loss)).into();
        assert_eq!(
            steps,
            [
                Step::Improved,
                Step::Improved,
                Step::Stalled {
                    patience_counter: 1
                },
            ]
        );
    }

    #[test]
    fn anneals_when_patience_runs_out() {
        let mut schedule = schedule(0.1, 0.001, 2);

        assert_eq!(schedule.observe(1.0), Step::Improved);
        assert_eq!(
            schedule.observe(1.0),
            Step::Stalled {
                patience_counter: 1
            }
        );
        assert_eq!(
            schedule.observe(1.5),
            Step::Annealed {
                from: 0.1,
                to: 0.01
            }
        );
        assert_eq!(schedule.learning_rate(), 0.01);
        assert_eq!(schedule.patience_counter(), 0);
        assert!(!schedule.at_floor());
    }

    #[test]
    fn improvement_resets_patience() {
        let mut schedule = schedule(0.1, 0.001, 3);

        schedule.observe(2.0);
        schedule.observe(2.0);
        schedule.observe(2.0);
        assert_eq!(schedule.patience_counter(), 2);

        assert_eq!(schedule.observe(1.0), Step::Improved);
        assert_eq!(schedule.patience_counter(), 0);
    }

    #[test]
    fn anneals_down_to_the_floor_then_halts() {
        let mut schedule = schedule(0.1, 0.005, 1);
        schedule.observe(1.0);

        assert_eq!(
            schedule.observe(1.0),
            Step::Annealed {
                from: 0.1,
                to: 0.1 / 10.0
            }
        );
        assert!(!schedule.at_floor());

        assert_eq!(
            schedule.observe(1.0),
            Step::Annealed {
                from: 0.1 / 10.0,
                to: 0.005
            }
        );
        assert!(schedule.at_floor());

        assert_eq!(schedule.observe(1.0), Step::Halt);
        assert_eq!(schedule.learning_rate(), 0.005);
    }

    #[test]
    fn starting_at_the_floor_halts_without_annealing() {
        let mut schedule = schedule(0.001, 0.001, 1);
        assert!(schedule.at_floor());

        schedule.observe(1.0);
        assert_eq!(schedule.observe(1.0), Step::Halt);
    }

    #[test]
    fn nan_loss_is_inert() {
        let mut schedule = schedule(0.1, 0.001, 1);
        schedule.observe(1.0);

        assert_eq!(schedule.observe(f64::NAN), Step::Unordered);
        assert_eq!(schedule.observe(0.5), Step::Unordered);
        assert_eq!(schedule.patience_counter(), 0);
        assert_eq!(schedule.learning_rate(), 0.1);
    }

    #[test]
    fn previous_loss_tracks_every_epoch() {
        let mut schedule = schedule(0.1, 0.001, 5);
        assert_eq!(schedule.previous_loss(), f64::INFINITY);

        schedule.observe(3.0);
        schedule.observe(4.0);
        assert_eq!(schedule.previous_loss(), 4.0);
    }
}
