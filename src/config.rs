//! 設定モジュール

use std::path::PathBuf;

/// アプリケーション設定
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// マーカーファイルパス
    pub marker_path: PathBuf,
    /// 日次ログ保存ディレクトリ
    pub log_dir: PathBuf,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            marker_path: PathBuf::from("./timemarker"),
            log_dir: PathBuf::from("./logs"),
        }
    }
}

/// CLI引数
#[derive(Debug, Default)]
pub struct CliArgs {
    pub marker: Option<PathBuf>,
    pub log_dir: Option<PathBuf>,
}

impl Config {
    /// 設定を組み立てる
    ///
    /// 優先順位: CLI引数 > デフォルト値
    pub fn load(cli_args: &CliArgs) -> Self {
        let mut config = Config::default();
        config.merge_cli_args(cli_args);
        config
    }

    /// CLI引数をマージ
    fn merge_cli_args(&mut self, cli_args: &CliArgs) {
        if let Some(ref path) = cli_args.marker {
            self.marker_path = path.clone();
        }
        if let Some(ref dir) = cli_args.log_dir {
            self.log_dir = dir.clone();
        }
    }
}
