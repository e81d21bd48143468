// 最長列車探索サービス

use anyhow::{Context, Result};
use std::path::Path;
use std::sync::Arc;

use crate::application::progress::{ProgressManager, ProgressStats};
use crate::constants::{Face, PARALLEL_MIN_STARTS};
use crate::domain::domino::{Domino, DominoPool};
use crate::domain::search::{SearchConfig, SearchSummary};
use crate::domain::train::{build_tree, longest_trains, ChainNode, Train, TrainMap};
use crate::infrastructure::executor::{ParallelConfig, ParallelExecutor};
use crate::infrastructure::loader::{load_train_file, GameInput};
use crate::vlog;

/// 開始値1つ分の探索結果
#[derive(Clone, Debug)]
pub struct StartOutcome {
    pub start: Face,
    pub trains: Vec<Train>,
    pub tree: Option<ChainNode>,
}

/// 最長列車探索を管理するサービス
pub struct TrainService {
    config: SearchConfig,
    progress: Arc<ProgressManager>,
    executor: Option<ParallelExecutor>,
    keep_trees: bool,
}

impl TrainService {
    pub fn new(config: SearchConfig) -> Result<Self> {
        config.validate().context("探索設定が不正です")?;

        let executor = if config.parallel {
            let workers = config
                .workers
                .map(|w| ParallelConfig::new(w.get()))
                .unwrap_or_default();
            Some(ParallelExecutor::new(workers)?)
        } else {
            None
        };

        Ok(Self {
            config,
            progress: Arc::new(ProgressManager::new()),
            executor,
            keep_trees: false,
        })
    }

    /// 展開木を結果に残す（表示用）
    pub fn with_trees(mut self, keep: bool) -> Self {
        self.keep_trees = keep;
        self
    }

    pub fn config(&self) -> &SearchConfig {
        &self.config
    }

    pub fn progress(&self) -> Arc<ProgressManager> {
        Arc::clone(&self.progress)
    }

    /// 設定の目の上限で盤面状態ファイルを読み込む
    pub fn load(&self, path: &Path) -> Result<GameInput> {
        let input = load_train_file(path, self.config.face_limit)?;
        vlog!(
            "[入力] {} / 開始値={:?} / 牌={}",
            path.display(),
            input.start_values,
            input.dominoes.len()
        );
        Ok(input)
    }

    /// 全開始値の最長列車を求める（メインユースケース）
    pub fn compute(&mut self, start_values: &[Face], dominoes: &[Domino]) -> Result<TrainMap> {
        let outcomes = self.run(start_values, dominoes)?;
        Ok(into_train_map(outcomes))
    }

    /// 開始値ごとの結果を入力順で返す
    pub fn run(&mut self, start_values: &[Face], dominoes: &[Domino]) -> Result<Vec<StartOutcome>> {
        Arc::get_mut(&mut self.progress)
            .context("進捗マネージャーが使用中です")?
            .reset();

        let pool = DominoPool::from(dominoes);
        vlog!(
            "[探索] 開始値={:?} / 牌={} / 並列={}",
            start_values,
            pool.len(),
            if self.config.parallel { "ON" } else { "OFF" }
        );

        let progress = &self.progress;
        let keep_trees = self.keep_trees;
        let search_one = |&start: &Face| search_start(start, &pool, progress, keep_trees);

        let outcomes = match &self.executor {
            Some(executor) if start_values.len() >= PARALLEL_MIN_STARTS => {
                executor.map_ordered(start_values, search_one)
            }
            _ => start_values.iter().map(search_one).collect(),
        };
        Ok(outcomes)
    }

    /// 探索結果のサマリーを作成
    pub fn create_summary(&self) -> SearchSummary {
        let ProgressStats {
            trees_built,
            nodes_expanded,
            leaves_reached,
            trains_found,
            longest_length,
        } = self.progress.get_stats();

        let summary = SearchSummary {
            trees_built,
            total_nodes: nodes_expanded,
            total_leaves: leaves_reached,
            trains_found,
            longest_length,
            elapsed_seconds: self.progress.elapsed().as_secs_f64(),
            nodes_per_second: self.progress.nodes_per_second(),
        };
        vlog!("[探索] 完了: {:?}", summary);
        summary
    }
}

/// 入力順に登録して結果表にする（同じ開始値は後勝ち）
pub fn into_train_map(outcomes: Vec<StartOutcome>) -> TrainMap {
    let mut map = TrainMap::new();
    for outcome in outcomes {
        map.insert(outcome.start, outcome.trains);
    }
    map
}

/// 開始値1つ分の木を作り、最長列車を抽出
fn search_start(
    start: Face,
    pool: &DominoPool,
    progress: &ProgressManager,
    keep_tree: bool,
) -> StartOutcome {
    let root = build_tree(start, pool);
    let trains = longest_trains(&root);
    let nodes = root.node_count() as u64;
    let leaves = root.leaf_count() as u64;
    let length = trains.first().map(Vec::len).unwrap_or(0);
    progress.record_tree(nodes, leaves, trains.len() as u64, length);
    vlog!(
        "  [開始値 {}] ノード={} 葉={} 最長={} 同長={}",
        start,
        nodes,
        leaves,
        length,
        trains.len()
    );

    StartOutcome {
        start,
        trains,
        tree: keep_tree.then_some(root),
    }
}
