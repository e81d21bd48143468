// 牌関連のドメイン層

pub mod domino;
pub mod pool;

pub use domino::Domino;
pub use pool::DominoPool;
