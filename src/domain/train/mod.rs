// 列車探索のドメイン層 - 展開木と最長経路

pub mod branch;
pub mod result;
pub mod tree;

pub use branch::{longest_branches, longest_trains, Branch};
pub use result::{Train, TrainMap, TrainRecord};
pub use tree::{build_tree, ChainNode};

use crate::constants::Face;
use crate::domain::domino::{Domino, DominoPool};

/// 開始値ごとに全プールから展開木を作り、最長列車を求める
///
/// 開始値ごとに独立した木を作るので、プールは開始値間で共有・消費されない。
pub fn compute_longest_trains(start_values: &[Face], dominoes: &[Domino]) -> TrainMap {
    let pool = DominoPool::from(dominoes);
    let mut map = TrainMap::new();
    for &start in start_values {
        let root = build_tree(start, &pool);
        map.insert(start, longest_trains(&root));
    }
    map
}
