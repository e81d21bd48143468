// 入力ファイルの読み込み
// 1行目は空白区切りの開始値、以降の空でない行は1行1枚の牌（2つの目）

use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::constants::Face;
use crate::domain::domino::Domino;
use crate::domain::search::FaceLimit;

/// 入力の読み込みエラー
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum InputError {
    #[error("ファイルを読み込めません {0}")]
    Io(PathBuf, #[source] std::io::Error),

    #[error("2行以上必要です")]
    TooFewLines,

    #[error("不正な目の値: {0}")]
    InvalidValue(String),

    #[error("1行に2つの目が必要です: '{0}'")]
    WrongPairArity(String),

    #[error("開始値がありません")]
    NoPlayValues,

    #[error("牌がありません")]
    NoDominoes,
}

/// 読み込んだ盤面状態
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GameInput {
    pub start_values: Vec<Face>,
    pub dominoes: Vec<Domino>,
}

/// ファイルから読み込む
pub fn load_train_file(path: &Path, limit: FaceLimit) -> Result<GameInput, InputError> {
    let content =
        std::fs::read_to_string(path).map_err(|e| InputError::Io(path.to_path_buf(), e))?;
    parse_train_input(&content, limit)
}

/// 文字列から読み込む
pub fn parse_train_input(content: &str, limit: FaceLimit) -> Result<GameInput, InputError> {
    let lines: Vec<&str> = content.split('\n').collect();
    if lines.len() < 2 {
        return Err(InputError::TooFewLines);
    }

    let start_values = parse_values(lines[0], limit)?;
    if start_values.is_empty() {
        return Err(InputError::NoPlayValues);
    }

    let mut dominoes = Vec::new();
    for line in &lines[1..] {
        if line.trim().is_empty() {
            continue;
        }
        dominoes.push(parse_domino(line, limit)?);
    }
    if dominoes.is_empty() {
        return Err(InputError::NoDominoes);
    }

    Ok(GameInput {
        start_values,
        dominoes,
    })
}

fn parse_values(line: &str, limit: FaceLimit) -> Result<Vec<Face>, InputError> {
    line.split_whitespace()
        .map(|token| parse_face(token, limit))
        .collect()
}

fn parse_face(token: &str, limit: FaceLimit) -> Result<Face, InputError> {
    match token.parse::<i64>() {
        Ok(n) if limit.contains(n) => Ok(n as Face),
        _ => Err(InputError::InvalidValue(token.to_string())),
    }
}

fn parse_domino(line: &str, limit: FaceLimit) -> Result<Domino, InputError> {
    match parse_values(line, limit)?.as_slice() {
        &[a, b] => Ok(Domino::new(a, b)),
        _ => Err(InputError::WrongPairArity(line.trim_end().to_string())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(s: &str) -> Result<GameInput, InputError> {
        parse_train_input(s, FaceLimit::default())
    }

    #[test]
    fn parses_values_and_pairs() {
        let input = parse("3 5\n3 4\n4 5\n").unwrap();
        assert_eq!(input.start_values, vec![3, 5]);
        assert_eq!(input.dominoes, vec![Domino::new(3, 4), Domino::new(4, 5)]);
    }

    #[test]
    fn skips_blank_lines() {
        let input = parse("1\n\n1 2\n   \n2 3").unwrap();
        assert_eq!(input.dominoes.len(), 2);
    }

    #[test]
    fn tolerates_crlf() {
        let input = parse("1 2\r\n1 2\r\n").unwrap();
        assert_eq!(input.start_values, vec![1, 2]);
        assert_eq!(input.dominoes, vec![Domino::new(1, 2)]);
    }

    #[test]
    fn rejects_single_line() {
        assert!(matches!(parse("1 2"), Err(InputError::TooFewLines)));
    }

    #[test]
    fn rejects_empty_play_values() {
        assert!(matches!(parse("\n1 2"), Err(InputError::NoPlayValues)));
    }

    #[test]
    fn rejects_missing_dominoes() {
        assert!(matches!(parse("1\n\n"), Err(InputError::NoDominoes)));
    }

    #[test]
    fn rejects_out_of_range_value() {
        match parse("13\n1 2") {
            Err(InputError::InvalidValue(v)) => assert_eq!(v, "13"),
            other => panic!("unexpected: {:?}", other),
        }
        assert!(matches!(parse("1\n1 -2"), Err(InputError::InvalidValue(_))));
        assert!(matches!(parse("x\n1 2"), Err(InputError::InvalidValue(_))));
    }

    #[test]
    fn rejects_wrong_arity() {
        match parse("1\n1 2 3") {
            Err(InputError::WrongPairArity(line)) => assert_eq!(line, "1 2 3"),
            other => panic!("unexpected: {:?}", other),
        }
        assert!(matches!(parse("1\n4"), Err(InputError::WrongPairArity(_))));
    }

    #[test]
    fn respects_custom_limit() {
        let limit = FaceLimit::new(6).unwrap();
        assert!(parse_train_input("6\n6 6", limit).is_ok());
        assert!(parse_train_input("7\n6 6", limit).is_err());
    }

    #[test]
    fn error_messages_are_readable() {
        let err = parse("1\n1 2 3").unwrap_err();
        assert_eq!(err.to_string(), "1行に2つの目が必要です: '1 2 3'");
    }

    #[test]
    fn io_cause_is_rendered_once() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing.txt");
        let cause = std::fs::read_to_string(&path).unwrap_err().to_string();

        let err = load_train_file(&path, FaceLimit::default()).unwrap_err();
        assert!(!err.to_string().contains(&cause));

        // {:#} は原因を連結して表示する
        let rendered = format!("{:#}", anyhow::Error::from(err));
        assert_eq!(rendered.matches(&cause).count(), 1, "{}", rendered);
        assert!(rendered.starts_with("ファイルを読み込めません "));
    }
}
