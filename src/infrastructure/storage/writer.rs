// 結果の書き込み

use anyhow::{anyhow, Result};
use std::io::Write;

use crate::domain::train::TrainRecord;

/// 探索結果を書き込むためのtrait
pub trait TrainWriter {
    /// 単一の結果を書き込む
    fn write_record(&mut self, record: &TrainRecord) -> Result<()>;

    /// 複数の結果をバッチで書き込む
    fn write_batch(&mut self, records: &[TrainRecord]) -> Result<()> {
        for record in records {
            self.write_record(record)?;
        }
        Ok(())
    }

    /// 書き込みを完了（フラッシュ）
    fn flush(&mut self) -> Result<()>;

    /// 書き込んだ結果数を取得
    fn count(&self) -> u64;
}

/// 出力フォーマット
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum OutputFormat {
    /// JSON Lines形式（1行1結果）
    JsonLines,
    /// JSON配列形式
    JsonArray,
}

/// 任意の出力先への書き込み実装
pub struct StreamTrainWriter<W: Write> {
    writer: Option<W>,
    count: u64,
    format: OutputFormat,
    finished: bool,
}

impl<W: Write> StreamTrainWriter<W> {
    pub fn new(mut writer: W, format: OutputFormat) -> Result<Self> {
        if format == OutputFormat::JsonArray {
            writer.write_all(b"[\n")?;
        }
        Ok(Self {
            writer: Some(writer),
            count: 0,
            format,
            finished: false,
        })
    }

    /// JSON Lines形式で作成
    pub fn json_lines(writer: W) -> Result<Self> {
        Self::new(writer, OutputFormat::JsonLines)
    }

    /// JSON配列形式で作成
    pub fn json_array(writer: W) -> Result<Self> {
        Self::new(writer, OutputFormat::JsonArray)
    }

    /// 出力先を取り出す（配列は閉じる）
    pub fn into_inner(mut self) -> Result<W> {
        self.finish()?;
        self.writer
            .take()
            .ok_or_else(|| anyhow!("出力先は既に取り出されています"))
    }

    fn out(&mut self) -> Result<&mut W> {
        self.writer
            .as_mut()
            .ok_or_else(|| anyhow!("出力先は既に取り出されています"))
    }

    fn finish(&mut self) -> Result<()> {
        let close_array = !self.finished && self.format == OutputFormat::JsonArray;
        let has_records = self.count > 0;
        self.finished = true;
        let out = self.out()?;
        if close_array {
            if has_records {
                writeln!(out)?;
            }
            writeln!(out, "]")?;
        }
        out.flush()?;
        Ok(())
    }
}

impl<W: Write> TrainWriter for StreamTrainWriter<W> {
    fn write_record(&mut self, record: &TrainRecord) -> Result<()> {
        if self.finished {
            return Err(anyhow!("書き込みは既に完了しています"));
        }
        let json = serde_json::to_string(record)?;
        let format = self.format;
        let first = self.count == 0;
        let out = self.out()?;
        match format {
            OutputFormat::JsonLines => {
                writeln!(out, "{}", json)?;
            }
            OutputFormat::JsonArray => {
                if !first {
                    writeln!(out, ",")?;
                }
                write!(out, "  {}", json)?;
            }
        }
        self.count += 1;
        Ok(())
    }

    fn flush(&mut self) -> Result<()> {
        self.finish()
    }

    fn count(&self) -> u64 {
        self.count
    }
}

impl<W: Write> Drop for StreamTrainWriter<W> {
    fn drop(&mut self) {
        if self.writer.is_some() {
            let _ = self.finish();
        }
    }
}

/// メモリ内結果書き込み実装（テスト用）
pub struct MemoryTrainWriter {
    records: Vec<TrainRecord>,
}

impl MemoryTrainWriter {
    pub fn new() -> Self {
        Self {
            records: Vec::new(),
        }
    }

    pub fn records(&self) -> &[TrainRecord] {
        &self.records
    }
}

impl Default for MemoryTrainWriter {
    fn default() -> Self {
        Self::new()
    }
}

impl TrainWriter for MemoryTrainWriter {
    fn write_record(&mut self, record: &TrainRecord) -> Result<()> {
        self.records.push(record.clone());
        Ok(())
    }

    fn flush(&mut self) -> Result<()> {
        Ok(())
    }

    fn count(&self) -> u64 {
        self.records.len() as u64
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_record(start: u8) -> TrainRecord {
        TrainRecord::new(start, vec![vec![start, 4, 5]])
    }

    #[test]
    fn memory_writer_stores_records() {
        let mut writer = MemoryTrainWriter::new();
        writer.write_record(&test_record(3)).unwrap();
        writer.write_record(&test_record(3)).unwrap();

        assert_eq!(writer.count(), 2);
        assert_eq!(writer.records().len(), 2);
    }

    #[test]
    fn memory_writer_batch_write() {
        let mut writer = MemoryTrainWriter::new();
        let records = vec![test_record(1), test_record(2), test_record(3)];
        writer.write_batch(&records).unwrap();
        assert_eq!(writer.count(), 3);
    }

    #[test]
    fn json_lines_one_record_per_line() {
        let mut writer = StreamTrainWriter::json_lines(Vec::new()).unwrap();
        writer.write_record(&test_record(3)).unwrap();
        writer.write_record(&test_record(4)).unwrap();
        let out = String::from_utf8(writer.into_inner().unwrap()).unwrap();

        let lines: Vec<&str> = out.lines().collect();
        assert_eq!(lines.len(), 2);
        assert_eq!(lines[0], r#"{"start":3,"length":3,"trains":[[3,4,5]]}"#);
    }

    #[test]
    fn json_array_is_valid_json() {
        let mut writer = StreamTrainWriter::json_array(Vec::new()).unwrap();
        writer.write_batch(&[test_record(3), test_record(4)]).unwrap();
        let out = writer.into_inner().unwrap();

        let parsed: Vec<TrainRecord> = serde_json::from_slice(&out).unwrap();
        assert_eq!(parsed, vec![test_record(3), test_record(4)]);
    }

    #[test]
    fn empty_json_array() {
        let writer = StreamTrainWriter::json_array(Vec::new()).unwrap();
        let out = writer.into_inner().unwrap();
        let parsed: Vec<TrainRecord> = serde_json::from_slice(&out).unwrap();
        assert!(parsed.is_empty());
    }

    #[test]
    fn write_after_flush_fails() {
        let mut writer = StreamTrainWriter::json_lines(Vec::new()).unwrap();
        writer.flush().unwrap();
        assert!(writer.write_record(&test_record(1)).is_err());
    }

    #[test]
    fn flush_twice_closes_array_once() {
        let mut writer = StreamTrainWriter::json_array(Vec::new()).unwrap();
        writer.write_record(&test_record(1)).unwrap();
        writer.flush().unwrap();
        writer.flush().unwrap();
        let out = String::from_utf8(writer.into_inner().unwrap()).unwrap();
        assert_eq!(out.matches("\n]\n").count(), 1);
        assert!(out.ends_with("}\n]\n"));
    }
}
