use log::{debug, info, trace, warn};
use ndarray::{Array1, ArrayView1, ArrayViewMut1, s};
use rand::Rng;

use super::{LossHistory, PatienceSchedule, Progress, ProgressSink, Step, TrainingConfig};
use crate::{
    RegressionErr, Result,
    data::DataPoint,
    initialization::RandParamGen,
    loss::{LossFn, Mse},
    model::Model,
    summary::Summary,
};

/// Initial weights are drawn uniformly from `[-INIT_RANGE, INIT_RANGE)`.
const INIT_RANGE: f64 = 0.005;

/// Why a training session ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StopReason {
    EpochsExhausted,
    PatienceExhausted,
}

/// The outcome of a training session.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TrainingReport {
    pub epochs_run: usize,
    pub stop_reason: StopReason,
    pub final_loss: f64,
    pub learning_rate: f64,
}

/// Fits a `Model` with full-batch gradient descent on the mean squared error.
///
/// The learning rate follows a `PatienceSchedule`: it is divided by 10 when the loss
/// stops improving and training halts early when that happens at the floor.
pub struct Trainer {
    config: TrainingConfig,
    schedule: PatienceSchedule,
    history: LossHistory,
    loss_fn: Mse,
}

impl Trainer {
    /// Creates a new `Trainer`.
    ///
    /// # Arguments
    /// * `config` - The settings of the training sessions run by this trainer.
    pub fn new(config: TrainingConfig) -> Self {
        Self {
            schedule: PatienceSchedule::from_config(&config),
            history: LossHistory::default(),
            loss_fn: Mse::new(),
            config,
        }
    }

    pub fn config(&self) -> &TrainingConfig {
        &self.config
    }

    /// The current learning rate, after any annealing of the last session.
    pub fn learning_rate(&self) -> f64 {
        self.schedule.learning_rate()
    }

    /// The losses of the last training session.
    pub fn history(&self) -> &LossHistory {
        &self.history
    }

    /// Creates a model with small random weights and trains it on `points`.
    ///
    /// # Arguments
    /// * `points` - The dataset, every point must have the same amount of features.
    /// * `rng` - The source of randomness for the initial weights.
    /// * `sink` - The receiver of the training events.
    ///
    /// # Returns
    /// The trained model and the session's report, or an error if the dataset is
    /// empty or inconsistent.
    pub fn fit<R: Rng>(
        &mut self,
        points: &[DataPoint],
        rng: R,
        sink: &mut dyn ProgressSink,
    ) -> Result<(Model, TrainingReport)> {
        let feature_count = points
            .first()
            .ok_or(RegressionErr::EmptyDataset)?
            .features()
            .len();

        let mut param_gen = RandParamGen::uniform(rng, feature_count + 1, -INIT_RANGE, INIT_RANGE)?;
        let mut model = Model::init(feature_count, &mut param_gen)?;
        let report = self.train(&mut model, points, sink)?;

        Ok((model, report))
    }

    /// Trains `model` on `points` until the epochs run out or the schedule halts.
    ///
    /// Every call starts a new session: the schedule and the loss history are reset.
    ///
    /// # Arguments
    /// * `model` - The model whose weights will be updated in place.
    /// * `points` - The dataset, every point must match the model's dimension.
    /// * `sink` - The receiver of the training events.
    ///
    /// # Returns
    /// The session's report, or an error if the dataset is empty or a point doesn't
    /// match the model.
    pub fn train(
        &mut self,
        model: &mut Model,
        points: &[DataPoint],
        sink: &mut dyn ProgressSink,
    ) -> Result<TrainingReport> {
        validate(model, points)?;

        let epochs = self.config.epochs();
        self.schedule = PatienceSchedule::from_config(&self.config);
        self.history = LossHistory::default();

        info!(
            epochs = epochs,
            points = points.len(),
            weights = model.weights().len();
            "starting training"
        );

        let mut stop_reason = StopReason::EpochsExhausted;
        let mut nan_reported = false;

        for epoch in 0..epochs {
            let grad = self.gradient(model, points)?;
            self.update_weights(model, &grad, points.len());

            let loss = model.compute_loss(points)?;
            self.history.push(loss);

            if loss.is_nan() && !nan_reported {
                warn!(epoch = epoch; "loss became NaN, training continues");
                nan_reported = true;
            }

            let progress = Progress {
                epoch,
                loss,
                weights: model.weights(),
                learning_rate: self.schedule.learning_rate(),
            };

            match self.schedule.observe(loss) {
                Step::Improved => sink.on_progress(&progress),
                Step::Stalled { patience_counter } => {
                    trace!(epoch = epoch, patience_counter = patience_counter; "loss did not improve");
                }
                Step::Annealed { from, to } => {
                    debug!(epoch = epoch, from = from, to = to; "annealed learning rate");
                }
                Step::Halt => {
                    sink.on_progress(&progress);
                    sink.on_halt(&progress);
                    stop_reason = StopReason::PatienceExhausted;
                    break;
                }
                Step::Unordered => {}
            }
        }

        let report = TrainingReport {
            epochs_run: self.history.len(),
            stop_reason,
            final_loss: self.history.last().unwrap_or(f64::NAN),
            learning_rate: self.schedule.learning_rate(),
        };

        info!(
            epochs_run = report.epochs_run,
            final_loss = report.final_loss;
            "training finished: {:?}", report.stop_reason
        );

        sink.on_finish(&Summary::new(model.weights()));
        Ok(report)
    }

    /// Accumulates the gradient of the squared error over every point.
    fn gradient(&self, model: &Model, points: &[DataPoint]) -> Result<Array1<f64>> {
        let mut grad = Array1::<f64>::zeros(model.weights().len());

        for point in points {
            let y_pred = model.predict(point.features())?;
            let delta = self.loss_fn.loss_prime(y_pred, point.label());

            grad[0] += delta;
            grad.slice_mut(s![1..])
                .scaled_add(delta, &ArrayView1::from(point.features()));
        }

        Ok(grad)
    }

    /// Takes a step of `learning_rate / n` in the opposite direction of `grad`.
    fn update_weights(&self, model: &mut Model, grad: &Array1<f64>, n: usize) {
        let step = self.schedule.learning_rate() / n as f64;
        ArrayViewMut1::from(model.weights_mut()).scaled_add(-step, grad);
    }
}

fn validate(model: &Model, points: &[DataPoint]) -> Result<()> {
    if points.is_empty() {
        return Err(RegressionErr::EmptyDataset);
    }

    let expected = model.feature_count();
    match points.iter().find(|p| p.features().len() != expected) {
        Some(point) => Err(RegressionErr::SizeMismatch {
            a: "data point features",
            b: "model weights",
            got: point.features().len(),
            expected,
        }),
        None => Ok(()),
    }
}
