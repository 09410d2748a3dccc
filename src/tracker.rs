//! タグ切り替えモジュール

use crate::config::Config;
use crate::duration::Elapsed;
use crate::error::{MarkerError, TrackError};
use crate::log_writer::{LogRow, LogWriter};
use crate::marker::{Marker, MarkerStore};

use chrono::{DateTime, Local};
use std::path::PathBuf;
use tracing::debug;

/// 1回の切り替え結果
#[derive(Debug, Clone)]
pub struct Transition {
    /// 終了した区間のタグ
    pub closed_tag: String,
    pub elapsed: Elapsed,
    /// 書き込まれたログファイル
    pub log_path: PathBuf,
    /// 新しいマーカー
    pub marker: Marker,
}

/// タグ切り替え
pub struct Tracker {
    marker_store: MarkerStore,
    log_writer: LogWriter,
}

impl Tracker {
    /// 新しいTrackerを作成
    pub fn new(config: Config) -> Self {
        Self {
            marker_store: MarkerStore::new(config.marker_path),
            log_writer: LogWriter::new(config.log_dir),
        }
    }

    /// 現在のタグを終了し、新しいタグを開始する
    ///
    /// 書き込みはログ追記、マーカー上書きの順で行う。途中で失敗した場合、
    /// マーカーは前回の状態のまま残る。
    pub fn switch(
        &self,
        new_tag: &str,
        comment: &str,
        now: DateTime<Local>,
    ) -> Result<Transition, TrackError> {
        let current = self.marker_store.read_or_default()?;

        if new_tag == current.current_tag {
            return Err(TrackError::DuplicateTag(new_tag.to_string()));
        }

        let now_unix = now.timestamp();
        let elapsed = Elapsed::between(current.timestamp, now_unix)
            .ok_or(MarkerError::TimestampOutOfRange(current.timestamp))?;

        let row = LogRow {
            event_time: now,
            tag: current.current_tag.clone(),
            elapsed,
            comment: comment.to_string(),
        };
        let log_path = self.log_writer.append(&row)?;

        let marker = self
            .marker_store
            .write(new_tag, &current.current_tag, now_unix)?;

        debug!(
            "切り替え完了: '{}' ({}) -> '{}'",
            current.current_tag, elapsed, new_tag
        );

        Ok(Transition {
            closed_tag: current.current_tag,
            elapsed,
            log_path,
            marker,
        })
    }
}
