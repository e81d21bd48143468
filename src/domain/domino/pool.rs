// DominoPool型 - 探索の各分岐で残っている牌の列

use super::domino::Domino;
use crate::constants::Face;
use serde::{Deserialize, Serialize};

/// 残りの牌（順序付き、重複あり）
///
/// 分岐ごとに独立した値として扱い、呼び出し元のプールは変更しない。
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DominoPool {
    dominoes: Vec<Domino>,
}

impl DominoPool {
    pub fn new(dominoes: Vec<Domino>) -> Self {
        Self { dominoes }
    }

    pub fn empty() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.dominoes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.dominoes.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Domino> {
        self.dominoes.iter()
    }

    pub fn as_slice(&self) -> &[Domino] {
        &self.dominoes
    }

    /// `value` に接続できる牌を数える
    pub fn count_matching(&self, value: Face) -> usize {
        self.dominoes.iter().filter(|d| d.matches(value)).count()
    }

    /// 最初に一致した1枚だけを除いた新しいプールを返す
    ///
    /// 一致判定は値（向き無視）で行う。一致が無ければ同じ内容のコピー。
    pub fn without_first(&self, target: &Domino) -> Self {
        let mut dominoes = Vec::with_capacity(self.dominoes.len().saturating_sub(1));
        let mut found = false;
        for domino in &self.dominoes {
            if !found && domino == target {
                found = true;
                continue;
            }
            dominoes.push(*domino);
        }
        Self { dominoes }
    }
}

impl From<Vec<Domino>> for DominoPool {
    fn from(dominoes: Vec<Domino>) -> Self {
        Self::new(dominoes)
    }
}

impl From<&[Domino]> for DominoPool {
    fn from(dominoes: &[Domino]) -> Self {
        Self::new(dominoes.to_vec())
    }
}

impl FromIterator<Domino> for DominoPool {
    fn from_iter<I: IntoIterator<Item = Domino>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

impl<'a> IntoIterator for &'a DominoPool {
    type Item = &'a Domino;
    type IntoIter = std::slice::Iter<'a, Domino>;

    fn into_iter(self) -> Self::IntoIter {
        self.dominoes.iter()
    }
}
