use log::warn;
use std::env;

pub const DEFAULT_PROGRAM: &str = "whiptail";

const PROGRAM_ENV: &str = "WHIPTAIL_PROGRAM";
const DEBUG_ENV: &str = "WHIPTAIL_DEBUG";
const EXTRA_ARGS_ENV: &str = "WHIPTAIL_EXTRA_ARGS";

/// Per-instance settings for a [`crate::Whiptail`] builder.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WhiptailConfig {
    /// Dialog program, resolved through `PATH` when not absolute.
    pub program: String,
    /// Echo the command line and wait for Enter before each dialog.
    pub debug: bool,
    /// Inserted right after the program name.
    pub extra_args: Vec<String>,
}

impl Default for WhiptailConfig {
    fn default() -> Self {
        Self {
            program: DEFAULT_PROGRAM.to_string(),
            debug: false,
            extra_args: Vec::new(),
        }
    }
}

impl WhiptailConfig {
    pub fn from_env() -> Self {
        Self::from_vars(|key| env::var(key).ok())
    }

    pub fn from_vars(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let program = lookup(PROGRAM_ENV)
            .map(|value| value.trim().to_string())
            .filter(|value| !value.is_empty())
            .unwrap_or_else(|| DEFAULT_PROGRAM.to_string());
        let debug = lookup(DEBUG_ENV)
            .map(|value| match parse_bool_like(&value) {
                Some(enabled) => enabled,
                None => {
                    warn!("{DEBUG_ENV}={value:?} is not a boolean; debug stays off");
                    false
                }
            })
            .unwrap_or(false);
        let extra_args = lookup(EXTRA_ARGS_ENV)
            .map(|value| split_extra_args(&value))
            .unwrap_or_default();
        Self {
            program,
            debug,
            extra_args,
        }
    }

    pub fn with_debug(mut self, debug: bool) -> Self {
        self.debug = debug;
        self
    }
}

pub fn parse_bool_like(value: &str) -> Option<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" | "" => Some(false),
        _ => None,
    }
}

// Unbalanced quotes degrade to plain whitespace splitting.
fn split_extra_args(value: &str) -> Vec<String> {
    let words = shell_words::split(value).unwrap_or_else(|error| {
        warn!("{EXTRA_ARGS_ENV} has unbalanced quotes ({error}); splitting on whitespace");
        value.split_whitespace().map(str::to_string).collect()
    });
    words.into_iter().filter(|word| !word.is_empty()).collect()
}
