//! エラー型定義モジュール

use std::io;
use std::num::ParseIntError;
use thiserror::Error;

/// マーカーファイルエラー
#[derive(Error, Debug)]
pub enum MarkerError {
    #[error("マーカーファイルのIOエラー: {0}")]
    IoError(#[from] io::Error),

    #[error("マーカーファイルの行数不足: {found}行 (必要: {required}行)")]
    MissingFields { found: usize, required: usize },

    #[error("マーカーファイルのタイムスタンプが不正です: '{value}' ({source})")]
    InvalidTimestamp {
        value: String,
        #[source]
        source: ParseIntError,
    },

    #[error("マーカーファイルのタイムスタンプが範囲外です: {0}")]
    TimestampOutOfRange(i64),
}

/// ログ書き込みエラー
#[derive(Error, Debug)]
pub enum LogWriterError {
    #[error("ログディレクトリ作成失敗: {0}")]
    DirectoryCreationFailed(io::Error),

    #[error("ログファイルのIOエラー: {0}")]
    IoError(#[from] io::Error),

    #[error("CSV書き込みエラー: {0}")]
    CsvError(#[from] csv::Error),
}

/// タグ切り替えエラー
#[derive(Error, Debug)]
pub enum TrackError {
    #[error("新しいタグは現在のタグと異なる必要があります: '{0}'")]
    DuplicateTag(String),

    #[error("{0}")]
    MarkerError(#[from] MarkerError),

    #[error("{0}")]
    LogWriterError(#[from] LogWriterError),
}

/// エラー分類
///
/// 引数不足はclapの解析段階で処理されるため、ここには含まれない。
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// 現在と同じタグの指定
    DuplicateTag,
    /// マーカーファイルの破損
    StateCorruption,
    /// ファイル操作の失敗
    Io,
}

impl TrackError {
    /// エラー分類を返す
    pub fn kind(&self) -> ErrorKind {
        match self {
            TrackError::DuplicateTag(_) => ErrorKind::DuplicateTag,
            TrackError::MarkerError(MarkerError::IoError(_)) => ErrorKind::Io,
            TrackError::MarkerError(_) => ErrorKind::StateCorruption,
            TrackError::LogWriterError(_) => ErrorKind::Io,
        }
    }
}
