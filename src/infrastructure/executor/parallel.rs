// 並列実行管理

use anyhow::{Context, Result};
use rayon::prelude::*;
use rayon::{ThreadPool, ThreadPoolBuilder};

/// 並列実行設定
#[derive(Clone, Debug)]
pub struct ParallelConfig {
    /// ワーカースレッド数
    pub num_workers: usize,
}

impl Default for ParallelConfig {
    fn default() -> Self {
        Self {
            num_workers: num_cpus::get(),
        }
    }
}

impl ParallelConfig {
    pub fn new(num_workers: usize) -> Self {
        Self {
            num_workers: num_workers.max(1),
        }
    }
}

/// 並列実行エグゼキューター
pub struct ParallelExecutor {
    config: ParallelConfig,
    pool: ThreadPool,
}

impl ParallelExecutor {
    pub fn new(config: ParallelConfig) -> Result<Self> {
        let pool = ThreadPoolBuilder::new()
            .num_threads(config.num_workers)
            .thread_name(|i| format!("train-worker-{}", i))
            .build()
            .context("ワーカースレッドプールの作成に失敗しました")?;
        Ok(Self { config, pool })
    }

    /// ワーカー数を取得
    pub fn num_workers(&self) -> usize {
        self.config.num_workers
    }

    /// 設定を取得
    pub fn config(&self) -> &ParallelConfig {
        &self.config
    }

    /// 各要素に `f` を並列適用し、入力と同じ順で結果を返す
    pub fn map_ordered<T, R, F>(&self, items: &[T], f: F) -> Vec<R>
    where
        T: Sync,
        R: Send,
        F: Fn(&T) -> R + Sync + Send,
    {
        self.pool.install(|| items.par_iter().map(|item| f(item)).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    #[test]
    fn parallel_config_default() {
        let config = ParallelConfig::default();
        assert!(config.num_workers > 0);
    }

    #[test]
    fn parallel_config_clamps_zero() {
        assert_eq!(ParallelConfig::new(0).num_workers, 1);
    }

    #[test]
    fn executor_reports_workers() {
        let executor = ParallelExecutor::new(ParallelConfig::new(3)).unwrap();
        assert_eq!(executor.num_workers(), 3);
    }

    #[test]
    fn map_ordered_preserves_input_order() {
        let executor = ParallelExecutor::new(ParallelConfig::new(4)).unwrap();
        let items: Vec<u64> = (0..10).collect();
        let results = executor.map_ordered(&items, |&x| {
            // 後の要素ほど早く終わるようにする
            std::thread::sleep(Duration::from_millis(10 - x));
            x * 2
        });
        assert_eq!(results, vec![0, 2, 4, 6, 8, 10, 12, 14, 16, 18]);
    }
}
