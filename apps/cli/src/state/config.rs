//! # Configuration State
//!
//! Settings for the terminal front-end, resolved once at startup.
//!
//! ## Configuration Sources (Priority Order)
//! 1. Command-line flags (`--json`, `-v`)
//! 2. Environment variables (`TABSPLIT_*`)
//! 3. Defaults (this file)

use serde::{Deserialize, Serialize};

/// Application configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConfigState {
    /// Prompt printed before each line when stdin is a terminal.
    pub prompt: String,

    /// Print responses as JSON instead of tables.
    pub json_output: bool,

    /// `tracing` filter used when `RUST_LOG` is not set.
    pub log_filter: String,
}

impl Default for ConfigState {
    /// ## Default Values
    /// - Prompt: "tabsplit> "
    /// - Output: tables
    /// - Logging: warnings, plus info from this app
    fn default() -> Self {
        ConfigState {
            prompt: "tabsplit> ".to_string(),
            json_output: false,
            log_filter: "warn,tabsplit=info".to_string(),
        }
    }
}

impl ConfigState {
    /// Creates a ConfigState from environment variables and defaults.
    ///
    /// ## Environment Variables
    /// - `TABSPLIT_PROMPT`: Override the prompt
    /// - `TABSPLIT_JSON`: `1`/`true`/`yes` for JSON output
    /// - `TABSPLIT_LOG`: Override the default log filter
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Same as [`ConfigState::from_env`], reading variables through `lookup`.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = ConfigState::default();

        if let Some(prompt) = lookup("TABSPLIT_PROMPT") {
            config.prompt = prompt;
        }

        if let Some(json) = lookup("TABSPLIT_JSON") {
            config.json_output = parse_flag(&json);
        }

        if let Some(filter) = lookup("TABSPLIT_LOG") {
            if !filter.trim().is_empty() {
                config.log_filter = filter;
            }
        }

        config
    }

    /// Applies command-line flags on top of the environment.
    pub fn with_flags(mut self, json: bool, verbose: u8) -> Self {
        if json {
            self.json_output = true;
        }

        match verbose {
            0 => {}
            1 => self.log_filter = "warn,tabsplit=debug".to_string(),
            _ => self.log_filter = "debug,tabsplit=trace".to_string(),
        }

        self
    }
}

fn parse_flag(value: &str) -> bool {
    matches!(
        value.trim().to_ascii_lowercase().as_str(),
        "1" | "true" | "yes" | "on"
    )
}
