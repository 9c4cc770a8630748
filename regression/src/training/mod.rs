mod config;
mod history;
mod progress;
mod schedule;
mod trainer;

pub use config::TrainingConfig;
pub use history::LossHistory;
pub use progress::{NoProgress, Progress, ProgressSink};
pub use schedule::{PatienceSchedule, Step};
pub use trainer::{StopReason, Trainer, TrainingReport};
