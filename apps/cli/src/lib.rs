//! # Tabsplit CLI Library
//!
//! Interactive terminal front-end for splitting a bill.
//!
//! ## Module Organization
//! ```text
//! tabsplit_cli_lib/
//! ├── lib.rs          ◄─── You are here (flags, logging, input loop)
//! ├── shell.rs        ◄─── Line parsing and command dispatch
//! ├── view.rs         ◄─── Text rendering
//! ├── state/
//! │   ├── mod.rs      ◄─── State type exports
//! │   ├── bill.rs     ◄─── Bill store + last split
//! │   └── config.rs   ◄─── Configuration state
//! ├── commands/
//! │   ├── mod.rs      ◄─── Command exports
//! │   ├── person.rs   ◄─── People and item costs
//! │   ├── shared.rs   ◄─── Tax, tip, other, even split
//! │   └── bill.rs     ◄─── Show, calculate, reset
//! └── error.rs        ◄─── API error type for commands
//! ```

pub mod commands;
pub mod error;
pub mod shell;
pub mod state;
pub mod view;

use std::io::{self, BufRead, IsTerminal, Write};

use clap::Parser;
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

use error::ApiError;
use shell::{Reply, Shell};
use state::ConfigState;

/// Tabsplit - split a restaurant bill between friends
#[derive(Parser, Debug)]
#[command(name = "tabsplit")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Print responses as JSON
    #[arg(long)]
    pub json: bool,

    /// Verbosity level (-v, -vv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

/// Runs the shell until `quit` or end of input.
///
/// ## Startup Sequence
/// ```text
/// ┌─────────────────────────────────────────────────────────────────────────┐
/// │  1. Parse flags (clap)                                                  │
/// │  2. Resolve configuration (flags > TABSPLIT_* env > defaults)           │
/// │  3. Initialize logging (RUST_LOG overrides the configured filter)       │
/// │  4. Read, handle and print one line at a time                           │
/// └─────────────────────────────────────────────────────────────────────────┘
/// ```
pub fn run() -> Result<(), ApiError> {
    let cli = Cli::parse();
    let config = ConfigState::from_env().with_flags(cli.json, cli.verbose);

    init_tracing(&config);
    info!(json = config.json_output, "Starting Tabsplit");

    let stdin = io::stdin();
    let interactive = stdin.is_terminal();
    let mut stdout = io::stdout().lock();

    run_session(Shell::new(config), stdin.lock(), &mut stdout, interactive)
}

/// Drives a shell from `input` to `output`.
///
/// The prompt and greeting are only written when `interactive` is set, so
/// piped sessions print nothing but command output.
pub fn run_session<R, W>(
    mut shell: Shell,
    input: R,
    output: &mut W,
    interactive: bool,
) -> Result<(), ApiError>
where
    R: BufRead,
    W: Write,
{
    if interactive {
        writeln!(output, "Bill Splitter. Type `help` for commands.")?;
    }

    let mut lines = input.lines();
    loop {
        if interactive {
            write!(output, "{}", shell.config().prompt)?;
            output.flush()?;
        }

        let Some(line) = lines.next() else {
            debug!("End of input");
            break;
        };

        match shell.handle_line(&line?) {
            Reply::Output(text) if text.is_empty() => {}
            Reply::Output(text) => {
                writeln!(output, "{}", text.trim_end())?;
            }
            Reply::Quit => break,
        }
    }

    info!("Session finished");
    Ok(())
}

/// Initializes the tracing subscriber for structured logging.
///
/// ## Log Levels
/// - `RUST_LOG=debug` - Show debug messages
/// - `RUST_LOG=tabsplit=trace` - Show trace for tabsplit crates only
/// - Default: the configured filter (`warn,tabsplit=info`)
///
/// Logs go to stderr so they never mix with rendered output.
fn init_tracing(config: &ConfigState) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&config.log_filter));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .try_init();
}
