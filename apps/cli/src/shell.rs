//! # Shell
//!
//! Turns one line of input into one command and renders the result.
//!
//! ## Line Lifecycle
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  "cost 1 $12.50"                                                        │
//! │        │                                                                │
//! │        ▼                                                                │
//! │  parse_line() ──► ShellCommand::Cost { id: Some(#1), amount: $12.50 }   │
//! │        │                                                                │
//! │        ▼                                                                │
//! │  execute() ─────► commands::person::add_item_cost(state, ..)            │
//! │        │                                                                │
//! │        ▼                                                                │
//! │  render ────────► view::render_bill(..)  or JSON with --json            │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use serde::Serialize;
use thiserror::Error;
use tracing::{debug, warn};

use tabsplit_core::format::try_parse_currency_input;
use tabsplit_core::{BillId, Money, SharedCostKind};

use crate::commands::{bill, person, shared, BillResponse};
use crate::error::ApiError;
use crate::state::{BillState, ConfigState};
use crate::view;

// =============================================================================
// Parsing
// =============================================================================

/// Why a line could not be read as a command.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    #[error("Unknown command '{0}'; type `help` for a list")]
    UnknownCommand(String),

    #[error("Usage: {0}")]
    Usage(&'static str),

    #[error("'{0}' is not a person id")]
    InvalidId(String),

    #[error("'{0}' is not an item number (items are numbered from 1)")]
    InvalidItemNumber(String),
}

/// A parsed line of input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ShellCommand {
    Add { name: Option<String> },
    Name { id: Option<BillId>, name: String },
    Cost { id: Option<BillId>, amount: Money },
    /// `index` is zero-based.
    Uncost { id: Option<BillId>, index: usize },
    Remove { id: BillId },
    Edit { id: BillId },
    Done,
    Shared { kind: SharedCostKind, amount: Option<Money> },
    Show,
    Calc,
    Reset,
    Help,
    Quit,
}

const NAME_USAGE: &str = "name [id] <name>";
const COST_USAGE: &str = "cost [id] <amount>";
const UNCOST_USAGE: &str = "uncost [id] <item>";
const REMOVE_USAGE: &str = "remove <id>";
const EDIT_USAGE: &str = "edit <id>";
const SHARED_USAGE: &str = "tax|tip|other|even <amount>|clear";

/// Parses one line. Blank lines and `#` comments yield `None`.
pub fn parse_line(line: &str) -> Result<Option<ShellCommand>, ParseError> {
    let line = line.trim();
    if line.is_empty() || line.starts_with('#') {
        return Ok(None);
    }

    let mut words = line.split_whitespace();
    let verb = words.next().unwrap_or_default().to_ascii_lowercase();
    let args: Vec<&str> = words.collect();

    let command = match verb.as_str() {
        "add" => ShellCommand::Add {
            name: (!args.is_empty()).then(|| args.join(" ")),
        },
        "name" => match args.as_slice() {
            [] => return Err(ParseError::Usage(NAME_USAGE)),
            [first, rest @ ..] if !rest.is_empty() && first.parse::<u32>().is_ok() => {
                ShellCommand::Name {
                    id: Some(parse_id(first)?),
                    name: rest.join(" "),
                }
            }
            all => ShellCommand::Name {
                id: None,
                name: all.join(" "),
            },
        },
        "cost" => match args.as_slice() {
            [amount] => ShellCommand::Cost {
                id: None,
                amount: parse_amount(amount),
            },
            [id, amount] => ShellCommand::Cost {
                id: Some(parse_id(id)?),
                amount: parse_amount(amount),
            },
            _ => return Err(ParseError::Usage(COST_USAGE)),
        },
        "uncost" => match args.as_slice() {
            [item] => ShellCommand::Uncost {
                id: None,
                index: parse_item_number(item)?,
            },
            [id, item] => ShellCommand::Uncost {
                id: Some(parse_id(id)?),
                index: parse_item_number(item)?,
            },
            _ => return Err(ParseError::Usage(UNCOST_USAGE)),
        },
        "remove" => match args.as_slice() {
            [id] => ShellCommand::Remove { id: parse_id(id)? },
            _ => return Err(ParseError::Usage(REMOVE_USAGE)),
        },
        "edit" => match args.as_slice() {
            [id] => ShellCommand::Edit { id: parse_id(id)? },
            _ => return Err(ParseError::Usage(EDIT_USAGE)),
        },
        "done" => ShellCommand::Done,
        "tax" | "tip" | "other" | "even" => {
            let kind = match verb.as_str() {
                "tax" => SharedCostKind::Tax,
                "tip" => SharedCostKind::Tip,
                "other" => SharedCostKind::Other,
                _ => SharedCostKind::EvenSplit,
            };
            match args.as_slice() {
                [value] if value.eq_ignore_ascii_case("clear") => {
                    ShellCommand::Shared { kind, amount: None }
                }
                [value] => ShellCommand::Shared {
                    kind,
                    amount: Some(parse_amount(value)),
                },
                _ => return Err(ParseError::Usage(SHARED_USAGE)),
            }
        }
        "show" | "ls" => ShellCommand::Show,
        "calc" | "calculate" => ShellCommand::Calc,
        "reset" => ShellCommand::Reset,
        "help" | "?" => ShellCommand::Help,
        "quit" | "exit" | "q" => ShellCommand::Quit,
        other => return Err(ParseError::UnknownCommand(other.to_string())),
    };

    Ok(Some(command))
}

fn parse_id(raw: &str) -> Result<BillId, ParseError> {
    raw.trim_start_matches('#')
        .parse::<u32>()
        .map(BillId::new)
        .map_err(|_| ParseError::InvalidId(raw.to_string()))
}

/// Items are shown numbered from 1; the store counts from 0.
fn parse_item_number(raw: &str) -> Result<usize, ParseError> {
    match raw.parse::<usize>() {
        Ok(n) if n >= 1 => Ok(n - 1),
        _ => Err(ParseError::InvalidItemNumber(raw.to_string())),
    }
}

/// Reads an amount the way a currency field would: unreadable input
/// becomes zero.
fn parse_amount(raw: &str) -> Money {
    match try_parse_currency_input(raw) {
        Ok(amount) => amount,
        Err(e) => {
            warn!(input = raw, "{}; using $0.00", e);
            Money::zero()
        }
    }
}

// =============================================================================
// Execution
// =============================================================================

/// What the shell produced for one line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Reply {
    /// Text to print (may be empty).
    Output(String),
    /// The user asked to leave.
    Quit,
}

/// Owns the state for one session and handles input line by line.
#[derive(Debug)]
pub struct Shell {
    state: BillState,
    config: ConfigState,
}

impl Shell {
    pub fn new(config: ConfigState) -> Self {
        Shell {
            state: BillState::new(),
            config,
        }
    }

    pub fn state(&self) -> &BillState {
        &self.state
    }

    pub fn config(&self) -> &ConfigState {
        &self.config
    }

    /// Handles one line of input. Errors are rendered, never returned:
    /// a bad line must not end the session.
    pub fn handle_line(&mut self, line: &str) -> Reply {
        let result = parse_line(line)
            .map_err(ApiError::from)
            .and_then(|command| match command {
                Some(command) => self.execute(command),
                None => Ok(Reply::Output(String::new())),
            });

        match result {
            Ok(reply) => reply,
            Err(err) => {
                debug!(code = ?err.code, "command failed: {}", err.message);
                Reply::Output(self.render_error(&err))
            }
        }
    }

    fn execute(&mut self, command: ShellCommand) -> Result<Reply, ApiError> {
        let state = &mut self.state;

        let response = match command {
            ShellCommand::Add { name } => person::add_person(state, name)?,
            ShellCommand::Name { id, name } => person::rename_person(state, id, name)?,
            ShellCommand::Cost { id, amount } => person::add_item_cost(state, id, amount)?,
            ShellCommand::Uncost { id, index } => person::delete_item_cost(state, id, index)?,
            ShellCommand::Remove { id } => person::delete_person(state, id)?,
            ShellCommand::Edit { id } => person::open_editor(state, id)?,
            ShellCommand::Done => person::close_editor(state)?,
            ShellCommand::Shared { kind, amount } => shared::set_shared_cost(state, kind, amount)?,
            ShellCommand::Show => bill::get_bill(state),
            ShellCommand::Reset => bill::reset(state)?,
            ShellCommand::Calc => {
                let split = bill::calculate_split(state);
                let text = if self.config.json_output {
                    to_json(&split)?
                } else {
                    view::render_split(&split)
                };
                return Ok(Reply::Output(text));
            }
            ShellCommand::Help => return Ok(Reply::Output(view::HELP.to_string())),
            ShellCommand::Quit => return Ok(Reply::Quit),
        };

        self.render_bill(&response).map(Reply::Output)
    }

    fn render_bill(&self, response: &BillResponse) -> Result<String, ApiError> {
        if self.config.json_output {
            to_json(response)
        } else {
            Ok(view::render_bill(response))
        }
    }

    fn render_error(&self, err: &ApiError) -> String {
        if self.config.json_output {
            #[derive(Serialize)]
            struct ErrorEnvelope<'a> {
                error: &'a ApiError,
            }
            if let Ok(json) = to_json(&ErrorEnvelope { error: err }) {
                return json;
            }
        }
        format!("error: {}", err)
    }
}

fn to_json<T: Serialize>(value: &T) -> Result<String, ApiError> {
    Ok(serde_json::to_string_pretty(value)?)
}

// =============================================================================
// Unit Tests
// =============================================================================
