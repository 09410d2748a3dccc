//! 日次ログ書き込みモジュール

use crate::duration::Elapsed;
use crate::error::LogWriterError;
use chrono::{DateTime, Datelike, Local, SecondsFormat};
use std::fs::{self, OpenOptions};
use std::path::PathBuf;
use tracing::debug;

/// ログ行
#[derive(Debug, Clone)]
pub struct LogRow {
    pub event_time: DateTime<Local>,
    /// 終了した区間のタグ
    pub tag: String,
    pub elapsed: Elapsed,
    pub comment: String,
}

impl LogRow {
    /// CSVフィールドに変換
    fn to_record(&self) -> [String; 5] {
        [
            self.event_time.to_rfc3339_opts(SecondsFormat::Secs, true),
            self.tag.clone(),
            self.elapsed.hours.to_string(),
            self.elapsed.minutes.to_string(),
            self.comment.clone(),
        ]
    }
}

/// 日次ログライター
pub struct LogWriter {
    log_dir: PathBuf,
}

impl LogWriter {
    /// 新しいLogWriterを作成
    pub fn new(log_dir: PathBuf) -> Self {
        Self { log_dir }
    }

    /// ログ行を日付ファイルに追記
    pub fn append(&self, row: &LogRow) -> Result<PathBuf, LogWriterError> {
        if !self.log_dir.exists() {
            fs::create_dir_all(&self.log_dir).map_err(LogWriterError::DirectoryCreationFailed)?;
        }

        let path = self.get_path(&row.event_time);
        let file = OpenOptions::new().create(true).append(true).open(&path)?;

        let mut writer = csv::WriterBuilder::new()
            .has_headers(false)
            .quote_style(csv::QuoteStyle::Necessary)
            .terminator(csv::Terminator::Any(b'\n'))
            .from_writer(file);
        writer.write_record(row.to_record())?;
        writer.flush()?;

        debug!("ログ追記: {}", path.display());
        Ok(path)
    }

    /// 日付からファイルパスを生成
    ///
    /// 形式: YEAR-MONTH-DAY.csv（ゼロ埋めなし）
    pub fn get_path(&self, date: &DateTime<Local>) -> PathBuf {
        let filename = format!("{}-{}-{}.csv", date.year(), date.month(), date.day());
        self.log_dir.join(filename)
    }
}
