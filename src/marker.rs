//! マーカーファイル管理モジュール
//!
//! マーカーファイルは現在のタグ、直前のタグ、開始時刻（Unix秒）を
//! 1行ずつ保持する。

use crate::error::MarkerError;
use std::fs::{self, File};
use std::io::{self, Write};
use std::path::PathBuf;
use tracing::debug;

/// マーカーファイルに必要な行数
const REQUIRED_FIELDS: usize = 3;

/// 永続化された現在の状態
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Marker {
    pub current_tag: String,
    pub previous_tag: String,
    /// `current_tag` の開始時刻（Unix秒）。0は「記録なし」
    pub timestamp: i64,
}

impl Marker {
    /// マーカーファイルの内容を解析
    ///
    /// 各行の末尾の `\r` のみ取り除く。タイムスタンプ前後の空白は不正として扱う。
    pub fn parse(content: &str) -> Result<Self, MarkerError> {
        let fields: Vec<&str> = content.splitn(REQUIRED_FIELDS + 1, '\n').collect();
        if fields.len() < REQUIRED_FIELDS {
            return Err(MarkerError::MissingFields {
                found: fields.len(),
                required: REQUIRED_FIELDS,
            });
        }

        let raw_timestamp = fields[2].trim_end_matches('\r');
        let timestamp = raw_timestamp
            .parse::<i64>()
            .map_err(|source| MarkerError::InvalidTimestamp {
                value: raw_timestamp.to_string(),
                source,
            })?;

        Ok(Self {
            current_tag: fields[0].trim_end_matches('\r').to_string(),
            previous_tag: fields[1].trim_end_matches('\r').to_string(),
            timestamp,
        })
    }

    /// ファイル形式にシリアライズ（末尾改行なし）
    pub fn to_file_content(&self) -> String {
        format!(
            "{}\n{}\n{}",
            self.current_tag, self.previous_tag, self.timestamp
        )
    }
}

/// マーカーファイルストア
pub struct MarkerStore {
    path: PathBuf,
}

impl MarkerStore {
    /// 新しいMarkerStoreを作成
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }

    /// マーカーを読み込む
    ///
    /// ファイルが存在しない場合は `None` を返す（エラーではない）
    pub fn read(&self) -> Result<Option<Marker>, MarkerError> {
        let content = match fs::read_to_string(&self.path) {
            Ok(content) => content,
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                debug!("マーカーファイルなし: {}", self.path.display());
                return Ok(None);
            }
            Err(e) => return Err(MarkerError::IoError(e)),
        };

        let marker = Marker::parse(&content)?;
        debug!("マーカー読み込み: {:?}", marker);
        Ok(Some(marker))
    }

    /// マーカーを読み込む。ファイルがなければ初期状態を返す
    pub fn read_or_default(&self) -> Result<Marker, MarkerError> {
        Ok(self.read()?.unwrap_or_default())
    }

    /// マーカーを上書き保存
    pub fn write(
        &self,
        new_tag: &str,
        previous_tag: &str,
        now_unix: i64,
    ) -> Result<Marker, MarkerError> {
        let marker = Marker {
            current_tag: new_tag.to_string(),
            previous_tag: previous_tag.to_string(),
            timestamp: now_unix,
        };

        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() && !parent.exists() {
                fs::create_dir_all(parent)?;
            }
        }

        let mut file = File::create(&self.path)?;
        file.write_all(marker.to_file_content().as_bytes())?;
        file.flush()?;

        debug!("マーカー書き込み: {:?}", marker);
        Ok(marker)
    }
}
