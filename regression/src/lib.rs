pub mod data;
pub mod error;
pub mod features;
pub mod initialization;
pub mod loss;
pub mod model;
pub mod summary;
pub mod training;

pub use data::DataPoint;
pub use error::{RegressionErr, Result};
pub use features::{FeatureAugmenter, augment};
pub use model::Model;
pub use training::{
    NoProgress, Progress, ProgressSink, StopReason, Trainer, TrainingConfig, TrainingReport,
};
