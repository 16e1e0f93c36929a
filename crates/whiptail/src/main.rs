use clap::Parser;
use log::{error, warn, LevelFilter};
use simple_logger::SimpleLogger;
use std::env;
use std::process::ExitCode;
use whiptail_box::cli::{Cli, Invocation};
use whiptail_box::{BoxSize, DialogKind, Outcome, Whiptail, WhiptailConfig};

const FALLBACK_TERMINAL: (u16, u16) = (80, 24);

const EXIT_CANCELLED: u8 = 1;
const EXIT_USAGE: u8 = 2;
const EXIT_RUNTIME: u8 = 3;

fn log_level() -> LevelFilter {
    env::var("WHIPTAIL_LOG")
        .ok()
        .and_then(|value| value.trim().parse::<LevelFilter>().ok())
        .unwrap_or(LevelFilter::Warn)
}

fn default_size() -> BoxSize {
    BoxSize::from_terminal().unwrap_or_else(|error| {
        warn!("{error}; sizing the box for an 80x24 terminal");
        BoxSize::scaled(FALLBACK_TERMINAL.0, FALLBACK_TERMINAL.1)
    })
}

fn print_outcome(outcome: &Outcome<String>, json: bool) {
    if json {
        match serde_json::to_string(outcome) {
            Ok(line) => println!("{line}"),
            Err(error) => error!("failed to encode result: {error}"),
        }
        return;
    }
    if let Outcome::Accepted(value) = outcome {
        if !value.is_empty() {
            println!("{value}");
        }
    }
}

fn run(invocation: Invocation) -> whiptail_box::Result<Outcome<String>> {
    let config = WhiptailConfig::from_env();
    let config = if invocation.debug {
        config.with_debug(true)
    } else {
        config
    };
    let size = invocation.box_size(default_size);
    let dialog = Whiptail::with_size(invocation.options, size, config);

    match &invocation.kind {
        DialogKind::Message { ok } => Ok(dialog.message(ok)?.map(|()| String::new())),
        DialogKind::Confirm {
            yes,
            no,
            default_no,
        } => Ok(if dialog.confirm(yes, no, *default_no)? {
            Outcome::Accepted(String::new())
        } else {
            Outcome::Cancelled
        }),
        DialogKind::Input {
            initial,
            password,
            ok,
            cancel,
        } => dialog.prompt_text(initial.as_deref(), *password, ok, cancel.as_deref()),
        DialogKind::Menu { list, ok, cancel } => dialog.select_one(
            list.list_height,
            list.tags.as_slice(),
            list.items.as_deref(),
            ok,
            cancel.as_deref(),
        ),
        DialogKind::Checklist {
            list,
            status,
            ok,
            cancel,
        } => dialog.select_multiple(
            list.list_height,
            status,
            list.tags.as_slice(),
            list.items.as_deref(),
            ok,
            cancel.as_deref(),
        ),
        DialogKind::Radiolist {
            list,
            status,
            ok,
            cancel,
        } => dialog.select_radio(
            list.list_height,
            status,
            list.tags.as_slice(),
            list.items.as_deref(),
            ok,
            cancel.as_deref(),
        ),
    }
}

fn main() -> ExitCode {
    if let Err(error) = SimpleLogger::new().with_level(log_level()).init() {
        eprintln!("[whiptail-box] logger setup failed: {error}");
    }

    let invocation = match Cli::parse().into_invocation() {
        Ok(invocation) => invocation,
        Err(error) => {
            eprintln!("whiptail-box: {error}");
            return ExitCode::from(EXIT_USAGE);
        }
    };
    let json = invocation.json;

    match run(invocation) {
        Ok(outcome) => {
            print_outcome(&outcome, json);
            if outcome.is_accepted() {
                ExitCode::SUCCESS
            } else {
                ExitCode::from(EXIT_CANCELLED)
            }
        }
        Err(error) => {
            error!("{error}");
            eprintln!("whiptail-box: {error}");
            ExitCode::from(EXIT_RUNTIME)
        }
    }
}
