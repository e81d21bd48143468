// ドミノ関連の定数と型定義

/// 牌の目（0..=MAX_FACE）
pub type Face = u8;

/// 目の上限（既定値）
pub const MAX_FACE: Face = 12;

/// ワーカー数の上限
pub const MAX_WORKERS: usize = 256;

/// 並列化する場合の最小の開始値数（これ未満は直列で十分）
pub const PARALLEL_MIN_STARTS: usize = 2;
