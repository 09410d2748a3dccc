//! ログインフラモジュール
//!
//! 標準出力は `OK` / `Error: ...` の表示に使うため、ログはすべて標準エラーに出す。

use crate::tracker::Transition;
use tracing::info;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// RUST_LOG未設定時のフィルタ
const DEFAULT_FILTER: &str = "warn";

/// ログシステムを初期化
///
/// 通常の実行では何も出力しない。切り替えの記録を見るには `RUST_LOG=info`。
pub fn init() {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_target(false).with_writer(std::io::stderr))
        .init();
}

/// 切り替え結果を構造化フィールド付きで記録
pub fn record_transition(transition: &Transition) {
    info!(
        closed_tag = %transition.closed_tag,
        hours = transition.elapsed.hours,
        minutes = transition.elapsed.minutes,
        log_file = %transition.log_path.display(),
        started_tag = %transition.marker.current_tag,
        started_at = transition.marker.timestamp,
        "区間を記録しました"
    );
}
