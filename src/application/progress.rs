// 進捗管理

use std::sync::atomic::{AtomicU64, AtomicUsize, Ordering};
use std::time::{Duration, Instant};

/// 進捗統計
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ProgressStats {
    pub trees_built: u64,
    pub nodes_expanded: u64,
    pub leaves_reached: u64,
    pub trains_found: u64,
    pub longest_length: usize,
}

/// 進捗マネージャー（複数スレッドから加算される）
pub struct ProgressManager {
    trees_built: AtomicU64,
    nodes_expanded: AtomicU64,
    leaves_reached: AtomicU64,
    trains_found: AtomicU64,
    longest_length: AtomicUsize,
    start_time: Instant,
}

impl ProgressManager {
    pub fn new() -> Self {
        Self {
            trees_built: AtomicU64::new(0),
            nodes_expanded: AtomicU64::new(0),
            leaves_reached: AtomicU64::new(0),
            trains_found: AtomicU64::new(0),
            longest_length: AtomicUsize::new(0),
            start_time: Instant::now(),
        }
    }

    /// 1本の木の統計を加算
    pub fn record_tree(&self, nodes: u64, leaves: u64, trains: u64, length: usize) {
        self.trees_built.fetch_add(1, Ordering::Relaxed);
        self.nodes_expanded.fetch_add(nodes, Ordering::Relaxed);
        self.leaves_reached.fetch_add(leaves, Ordering::Relaxed);
        self.trains_found.fetch_add(trains, Ordering::Relaxed);
        self.longest_length.fetch_max(length, Ordering::Relaxed);
    }

    /// 現在の統計を取得
    pub fn get_stats(&self) -> ProgressStats {
        ProgressStats {
            trees_built: self.trees_built.load(Ordering::Relaxed),
            nodes_expanded: self.nodes_expanded.load(Ordering::Relaxed),
            leaves_reached: self.leaves_reached.load(Ordering::Relaxed),
            trains_found: self.trains_found.load(Ordering::Relaxed),
            longest_length: self.longest_length.load(Ordering::Relaxed),
        }
    }

    /// 経過時間を取得
    pub fn elapsed(&self) -> Duration {
        self.start_time.elapsed()
    }

    /// 展開速度（ノード/秒）を取得
    pub fn nodes_per_second(&self) -> f64 {
        let nodes = self.nodes_expanded.load(Ordering::Relaxed) as f64;
        let elapsed = self.elapsed().as_secs_f64();
        if elapsed > 0.0 {
            nodes / elapsed
        } else {
            0.0
        }
    }

    /// リセット
    pub fn reset(&mut self) {
        self.trees_built.store(0, Ordering::Relaxed);
        self.nodes_expanded.store(0, Ordering::Relaxed);
        self.leaves_reached.store(0, Ordering::Relaxed);
        self.trains_found.store(0, Ordering::Relaxed);
        self.longest_length.store(0, Ordering::Relaxed);
        self.start_time = Instant::now();
    }
}

impl Default for ProgressManager {
    fn default() -> Self {
        Self::new()
    }
}
