// 探索サマリーの定義

use serde::Serialize;

/// 探索サマリー
#[derive(Clone, Debug, Serialize)]
pub struct SearchSummary {
    pub trees_built: u64,
    pub total_nodes: u64,
    pub total_leaves: u64,
    /// 抽出した最長列車の総数（同長も含む）
    pub trains_found: u64,
    /// 最長列車の目の数（全開始値での最大）
    pub longest_length: usize,
    pub elapsed_seconds: f64,
    pub nodes_per_second: f64,
}

impl SearchSummary {
    pub fn new() -> Self {
        Self {
            trees_built: 0,
            total_nodes: 0,
            total_leaves: 0,
            trains_found: 0,
            longest_length: 0,
            elapsed_seconds: 0.0,
            nodes_per_second: 0.0,
        }
    }
}

impl Default for SearchSummary {
    fn default() -> Self {
        Self::new()
    }
}
