// Domino型 - 2つの目を持つ牌

use crate::constants::Face;
use serde::{Deserialize, Serialize};
use std::fmt;

/// 2つの目を持つドミノ牌（向きは区別しない）
#[derive(Clone, Copy, Debug, Eq, Serialize, Deserialize)]
pub struct Domino {
    pub face1: Face,
    pub face2: Face,
}

impl Domino {
    pub const fn new(face1: Face, face2: Face) -> Self {
        Self { face1, face2 }
    }

    /// ダブル（両方の目が同じ）か
    pub fn is_double(&self) -> bool {
        self.face1 == self.face2
    }

    /// `value` に接続できる場合、反対側の目を返す
    ///
    /// face1 を先に見るため、ダブルでも結果は1つだけ。
    pub fn other_face(&self, value: Face) -> Option<Face> {
        if self.face1 == value {
            Some(self.face2)
        } else if self.face2 == value {
            Some(self.face1)
        } else {
            None
        }
    }

    /// `value` に接続できるか
    pub fn matches(&self, value: Face) -> bool {
        self.other_face(value).is_some()
    }

    /// 小さい目を先にした正規形
    pub fn normalized(&self) -> (Face, Face) {
        if self.face1 <= self.face2 {
            (self.face1, self.face2)
        } else {
            (self.face2, self.face1)
        }
    }
}

impl PartialEq for Domino {
    fn eq(&self, other: &Self) -> bool {
        (self.face1 == other.face1 && self.face2 == other.face2)
            || (self.face1 == other.face2 && self.face2 == other.face1)
    }
}

impl std::hash::Hash for Domino {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        self.normalized().hash(state);
    }
}

impl From<(Face, Face)> for Domino {
    fn from((face1, face2): (Face, Face)) -> Self {
        Self::new(face1, face2)
    }
}

impl fmt::Display for Domino {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}|{}]", self.face1, self.face2)
    }
}
