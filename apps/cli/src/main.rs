//! # Tabsplit Entry Point
//!
//! The actual setup is in lib.rs for better testability.

use std::process::ExitCode;

fn main() -> ExitCode {
    match tabsplit_cli_lib::run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("tabsplit: {}", err);
            ExitCode::FAILURE
        }
    }
}
