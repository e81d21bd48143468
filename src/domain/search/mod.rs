// 探索関連のドメインモデル

pub mod config;
pub mod result;

pub use config::{FaceLimit, SearchConfig, WorkerCount};
pub use result::SearchSummary;
