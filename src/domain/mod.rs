// ドメイン層 - ビジネスロジックの中核

pub mod domino;
pub mod search;
pub mod train;
