// 探索設定のValue Objects

use crate::constants::{Face, MAX_FACE, MAX_WORKERS};
use anyhow::{anyhow, Result};
use serde::{Deserialize, Serialize};

/// 目の上限を表すValue Object
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub struct FaceLimit(Face);

impl FaceLimit {
    pub fn new(max: Face) -> Result<Self> {
        if max > MAX_FACE {
            return Err(anyhow!(
                "目の上限が大きすぎます: {} (最大 {})",
                max,
                MAX_FACE
            ));
        }
        Ok(Self(max))
    }

    pub fn get(&self) -> Face {
        self.0
    }

    pub fn contains(&self, value: i64) -> bool {
        (0..=self.0 as i64).contains(&value)
    }
}

impl Default for FaceLimit {
    fn default() -> Self {
        Self(MAX_FACE)
    }
}

/// ワーカー数を表すValue Object
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct WorkerCount(usize);

impl WorkerCount {
    pub fn new(count: usize) -> Result<Self> {
        if count == 0 {
            return Err(anyhow!("ワーカー数は1以上である必要があります"));
        }
        if count > MAX_WORKERS {
            return Err(anyhow!("ワーカー数が大きすぎます: {}", count));
        }
        Ok(Self(count))
    }

    pub fn get(&self) -> usize {
        self.0
    }
}

/// 探索設定のValue Object
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct SearchConfig {
    pub face_limit: FaceLimit,
    /// 開始値ごとの探索を並列に行うか
    pub parallel: bool,
    /// None ならCPU数
    pub workers: Option<WorkerCount>,
    pub verbose: bool,
}

impl SearchConfig {
    pub fn serial() -> Self {
        Self::default()
    }

    pub fn parallel(workers: Option<WorkerCount>) -> Self {
        Self {
            parallel: true,
            workers,
            ..Self::default()
        }
    }

    pub fn validate(&self) -> Result<()> {
        // Value Objectsで既に検証済み
        if !self.parallel && self.workers.is_some() {
            return Err(anyhow!("直列実行ではワーカー数を指定できません"));
        }
        Ok(())
    }
}
