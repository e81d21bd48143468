// 結果の出力

pub mod writer;

pub use writer::{MemoryTrainWriter, OutputFormat, StreamTrainWriter, TrainWriter};
