// アプリケーション層 - ユースケースの実装

pub mod progress;
pub mod trains;

pub use progress::{ProgressManager, ProgressStats};
pub use trains::{StartOutcome, TrainService};
