//! TimeMarker - タグ切り替え式の作業時間記録ツール

mod cli;
mod config;
mod duration;
mod error;
mod log_writer;
mod logging;
mod marker;
mod tracker;

use std::process::ExitCode;

fn main() -> ExitCode {
    logging::init();

    match cli::run() {
        Ok(code) => code,
        Err(e) => {
            println!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}
