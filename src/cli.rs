//! CLIモジュール

use crate::config::{CliArgs, Config};
use crate::logging;
use crate::tracker::Tracker;
use anyhow::Result;
use chrono::Local;
use clap::error::ErrorKind as ClapErrorKind;
use clap::{CommandFactory, Parser};
use std::path::PathBuf;
use std::process::ExitCode;
use tracing::debug;

/// TimeMarker - タグを切り替えて作業時間を記録するツール
#[derive(Parser, Debug)]
#[command(name = "tmark", version)]
#[command(about = "タグを切り替えて作業時間を日次CSVに記録する", long_about = None)]
pub struct Cli {
    /// 開始するタグ（現在のタグと異なる必要がある）
    #[arg(allow_hyphen_values = true)]
    pub tag: String,

    /// 終了する区間へのコメント
    #[arg(allow_hyphen_values = true)]
    pub comment: Option<String>,

    /// マーカーファイルのパス（タグより前に指定する）
    #[arg(long, value_name = "PATH")]
    pub marker: Option<PathBuf>,

    /// 日次ログの保存ディレクトリ（タグより前に指定する）
    #[arg(long, value_name = "DIR")]
    pub log_dir: Option<PathBuf>,
}

/// CLIエントリポイント
pub fn run() -> Result<ExitCode> {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) => return Ok(handle_parse_error(e)),
    };

    let cli_args = CliArgs {
        marker: cli.marker,
        log_dir: cli.log_dir,
    };
    let config = Config::load(&cli_args);
    debug!("設定: {:?}", config);

    let tracker = Tracker::new(config);
    let transition = tracker
        .switch(&cli.tag, cli.comment.as_deref().unwrap_or(""), Local::now())
        .inspect_err(|e| debug!("切り替え失敗 ({:?})", e.kind()))?;

    logging::record_transition(&transition);
    println!("OK");

    Ok(ExitCode::SUCCESS)
}

/// 引数解析エラーを処理
///
/// ヘルプとバージョン表示はclapに任せ、それ以外は使い方を標準出力に表示して
/// 終了コード1を返す。
fn handle_parse_error(e: clap::Error) -> ExitCode {
    match e.kind() {
        ClapErrorKind::DisplayHelp | ClapErrorKind::DisplayVersion => e.exit(),
        ClapErrorKind::MissingRequiredArgument => {
            println!("タグが指定されていません");
            println!("{}", Cli::command().render_usage());
        }
        _ => {
            println!("{}", e);
        }
    }
    ExitCode::from(1)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tag_only() {
        let cli = Cli::try_parse_from(["tmark", "work"]).unwrap();
        assert_eq!(cli.tag, "work");
        assert_eq!(cli.comment, None);
        assert_eq!(cli.marker, None);
        assert_eq!(cli.log_dir, None);
    }

    #[test]
    fn test_tag_and_comment() {
        let cli = Cli::try_parse_from(["tmark", "break", "lunch with team"]).unwrap();
        assert_eq!(cli.tag, "break");
        assert_eq!(cli.comment.as_deref(), Some("lunch with team"));
    }

    #[test]
    fn test_missing_tag() {
        let err = Cli::try_parse_from(["tmark"]).unwrap_err();
        assert_eq!(err.kind(), ClapErrorKind::MissingRequiredArgument);
    }

    #[test]
    fn test_path_options() {
        let cli = Cli::try_parse_from([
            "tmark",
            "--marker",
            "/tmp/marker",
            "--log-dir",
            "/tmp/logs",
            "work",
        ])
        .unwrap();
        assert_eq!(cli.tag, "work");
        assert_eq!(cli.marker, Some(PathBuf::from("/tmp/marker")));
        assert_eq!(cli.log_dir, Some(PathBuf::from("/tmp/logs")));
    }

    #[test]
    fn test_empty_tag_accepted() {
        let cli = Cli::try_parse_from(["tmark", ""]).unwrap();
        assert_eq!(cli.tag, "");
    }

    #[test]
    fn test_comment_starting_with_hyphen() {
        let cli = Cli::try_parse_from(["tmark", "break", "-fixed bug"]).unwrap();
        assert_eq!(cli.tag, "break");
        assert_eq!(cli.comment.as_deref(), Some("-fixed bug"));
    }

    #[test]
    fn test_tag_starting_with_hyphen() {
        let cli = Cli::try_parse_from(["tmark", "-1"]).unwrap();
        assert_eq!(cli.tag, "-1");
        assert_eq!(cli.comment, None);
    }

    #[test]
    fn test_path_options_before_hyphen_tag() {
        let cli = Cli::try_parse_from(["tmark", "--log-dir", "/tmp/logs", "-1", "-x"]).unwrap();
        assert_eq!(cli.log_dir, Some(PathBuf::from("/tmp/logs")));
        assert_eq!(cli.tag, "-1");
        assert_eq!(cli.comment.as_deref(), Some("-x"));
    }

    #[test]
    fn test_too_many_arguments() {
        let cli = Cli::try_parse_from(["tmark", "work", "comment", "extra"]);
        assert!(cli.is_err());
    }
}
