// ドミノ列車の最長探索 - ライブラリモジュール

pub mod application;    // アプリケーション層
pub mod constants;
pub mod domain;         // ドメイン層
pub mod infrastructure; // インフラ層
pub mod logging;

// 外部クレートの再エクスポート
pub use anyhow::{anyhow, Context, Result};

// 主要な型を再エクスポート
pub use application::{ProgressManager, TrainService};
pub use constants::{Face, MAX_FACE};
pub use domain::domino::{Domino, DominoPool};
pub use domain::search::{SearchConfig, SearchSummary};
pub use domain::train::{
    build_tree, compute_longest_trains, longest_branches, longest_trains, ChainNode, TrainMap,
};
