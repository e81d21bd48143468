// インフラ層 - 外部システムとの接続、技術的実装

pub mod executor;
pub mod loader;
pub mod storage;

pub use executor::ParallelExecutor;
pub use loader::{load_train_file, parse_train_input, GameInput, InputError};
pub use storage::TrainWriter;
