// 探索結果の定義

use crate::constants::Face;
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// 1本の列車（開始値を先頭にした目の列）
pub type Train = Vec<Face>;

/// 開始値ごとの最長列車
///
/// キーは最初に与えられた順序を保つ。同じ開始値を再度挿入すると値だけ上書き。
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrainMap {
    entries: IndexMap<Face, Vec<Train>>,
}

impl TrainMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// 開始値の結果を登録（後勝ち）
    pub fn insert(&mut self, start: Face, trains: Vec<Train>) {
        self.entries.insert(start, trains);
    }

    pub fn get(&self, start: Face) -> Option<&[Train]> {
        self.entries.get(&start).map(Vec::as_slice)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn starts(&self) -> impl Iterator<Item = Face> + '_ {
        self.entries.keys().copied()
    }

    pub fn iter(&self) -> impl Iterator<Item = (Face, &[Train])> + '_ {
        self.entries.iter().map(|(k, v)| (*k, v.as_slice()))
    }

    /// 開始値の最長列車の長さ（目の数）
    pub fn longest_length(&self, start: Face) -> Option<usize> {
        self.get(start)
            .and_then(|trains| trains.first())
            .map(Vec::len)
    }

    /// 同長の列車の並び順を無視して比較
    pub fn same_trains(&self, other: &TrainMap) -> bool {
        if self.len() != other.len() {
            return false;
        }
        self.iter().all(|(start, trains)| match other.get(start) {
            Some(theirs) => sorted(trains) == sorted(theirs),
            None => false,
        })
    }

    /// 出力用レコードに変換
    pub fn to_records(&self) -> Vec<TrainRecord> {
        self.iter()
            .map(|(start, trains)| TrainRecord::new(start, trains.to_vec()))
            .collect()
    }
}

fn sorted(trains: &[Train]) -> Vec<Train> {
    let mut v = trains.to_vec();
    v.sort();
    v
}

/// 開始値1つ分の出力レコード
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrainRecord {
    pub start: Face,
    /// 最長列車の目の数
    pub length: usize,
    pub trains: Vec<Train>,
}

impl TrainRecord {
    pub fn new(start: Face, trains: Vec<Train>) -> Self {
        let length = trains.first().map(Vec::len).unwrap_or(0);
        Self {
            start,
            length,
            trains,
        }
    }
}
