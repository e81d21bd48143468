// 最長列車探索アプリケーションサービス

pub mod service;

pub use service::{into_train_map, StartOutcome, TrainService};
