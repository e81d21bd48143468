// 最長経路の抽出

use super::tree::ChainNode;
use crate::constants::Face;

/// 根から任意のノードまでの経路
pub type Branch<'a> = Vec<&'a ChainNode>;

/// `node` から下る最長の経路を全て返す（同長は全て保持）
///
/// 返す経路は全て同じ長さで、必ず1本以上ある。
pub fn longest_branches(node: &ChainNode) -> Vec<Branch<'_>> {
    if node.is_leaf() {
        return vec![vec![node]];
    }

    let all_child_branches: Vec<Branch<'_>> = node
        .children
        .iter()
        .flat_map(longest_branches)
        .collect();
    let longest = all_child_branches.iter().map(Vec::len).max().unwrap_or(0);

    all_child_branches
        .into_iter()
        .filter(|branch| branch.len() == longest)
        .map(|branch| {
            let mut extended = Vec::with_capacity(branch.len() + 1);
            extended.push(node);
            extended.extend(branch);
            extended
        })
        .collect()
}

/// 最長経路を目の列に変換
pub fn longest_trains(root: &ChainNode) -> Vec<Vec<Face>> {
    longest_branches(root)
        .iter()
        .map(|branch| branch.iter().map(|n| n.value).collect())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::domino::{Domino, DominoPool};
    use crate::domain::train::tree::build_tree;

    fn trains(start: Face, pairs: &[(Face, Face)]) -> Vec<Vec<Face>> {
        let pool: DominoPool = pairs.iter().copied().map(Domino::from).collect();
        let mut out = longest_trains(&build_tree(start, &pool));
        out.sort();
        out
    }

    #[test]
    fn leaf_yields_itself() {
        let root = ChainNode::leaf(4, None);
        let branches = longest_branches(&root);
        assert_eq!(branches.len(), 1);
        assert_eq!(branches[0].len(), 1);
        assert_eq!(branches[0][0].value, 4);
    }

    #[test]
    fn linear_chain() {
        assert_eq!(trains(3, &[(3, 4), (4, 5)]), vec![vec![3, 4, 5]]);
    }

    #[test]
    fn ties_are_all_kept() {
        assert_eq!(trains(1, &[(1, 2), (1, 3)]), vec![vec![1, 2], vec![1, 3]]);
    }

    #[test]
    fn no_dominoes_yields_start_only() {
        assert_eq!(trains(0, &[]), vec![vec![0]]);
    }

    #[test]
    fn shorter_branches_from_other_children_are_dropped() {
        // 1-2 は長さ2止まり、1-3-4 は長さ3
        assert_eq!(trains(1, &[(1, 2), (1, 3), (3, 4)]), vec![vec![1, 3, 4]]);
    }

    #[test]
    fn global_maximum_not_per_child_maximum() {
        // 子2側: 1-2-5 (3), 子3側: 1-3-6-7 (4)
        let out = trains(1, &[(1, 2), (2, 5), (1, 3), (3, 6), (6, 7)]);
        assert_eq!(out, vec![vec![1, 3, 6, 7]]);
    }

    #[test]
    fn duplicate_dominoes_return_tied_identical_trains() {
        assert_eq!(trains(1, &[(1, 2), (1, 2)]), vec![vec![1, 2, 1], vec![1, 2, 1]]);
    }

    #[test]
    fn loop_through_double() {
        let out = trains(2, &[(2, 2), (2, 3)]);
        assert_eq!(out, vec![vec![2, 2, 3]]);
    }

    #[test]
    fn all_branches_share_max_length() {
        let pool: DominoPool = [(0, 1), (1, 2), (2, 0), (0, 2), (1, 1)]
            .iter()
            .copied()
            .map(Domino::from)
            .collect();
        let root = build_tree(0, &pool);
        let branches = longest_branches(&root);
        assert!(!branches.is_empty());
        for b in &branches {
            assert_eq!(b.len(), root.depth() + 1);
        }
    }
}
