// 展開木 - 開始値から伸ばせる全ての列車を列挙

use crate::constants::Face;
use crate::domain::domino::{Domino, DominoPool};
use std::fmt;

/// 展開木のノード
///
/// 根以外のノードは親の目を持つ牌を1枚消費して到達した目を表す。
/// 子は親が所有し、構築後は変更しない。
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ChainNode {
    pub value: Face,
    /// このノードに到達するために消費した牌（根は None）
    pub via: Option<Domino>,
    pub children: Vec<ChainNode>,
}

impl ChainNode {
    /// 子を持たないノードを作成
    pub fn leaf(value: Face, via: Option<Domino>) -> Self {
        Self {
            value,
            via,
            children: Vec::new(),
        }
    }

    pub fn is_leaf(&self) -> bool {
        self.children.is_empty()
    }

    /// 部分木のノード総数
    pub fn node_count(&self) -> usize {
        1 + self.children.iter().map(ChainNode::node_count).sum::<usize>()
    }

    /// 部分木の葉の数
    pub fn leaf_count(&self) -> usize {
        if self.is_leaf() {
            return 1;
        }
        self.children.iter().map(ChainNode::leaf_count).sum()
    }

    /// 最長経路の辺数
    pub fn depth(&self) -> usize {
        self.children
            .iter()
            .map(|c| c.depth() + 1)
            .max()
            .unwrap_or(0)
    }
}

impl fmt::Display for ChainNode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} -> [", self.value)?;
        for (i, child) in self.children.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{}", child)?;
        }
        write!(f, "]")
    }
}

/// `start` を根とする展開木を構築
pub fn build_tree(start: Face, pool: &DominoPool) -> ChainNode {
    let mut root = ChainNode::leaf(start, None);
    populate_children(&mut root, pool);
    root
}

/// プールの順に接続可能な牌ごとに子を1つずつ作り、再帰的に展開
fn populate_children(node: &mut ChainNode, pool: &DominoPool) {
    for domino in pool {
        let Some(next) = domino.other_face(node.value) else {
            continue;
        };
        let mut child = ChainNode::leaf(next, Some(*domino));
        let remaining = pool.without_first(domino);
        populate_children(&mut child, &remaining);
        node.children.push(child);
    }
}
