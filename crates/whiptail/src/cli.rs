use crate::dialog::{BoxSize, DialogKind, DialogOptions, ListEntries};
use clap::{Args, Parser, Subcommand};
use thiserror::Error;

const EXIT_STATUS_HELP: &str = "\
Exit status: 0 accepted, 1 cancelled, 2 usage error, 3 runtime error.
List entries are TAG or TAG=ITEM; put `--` before entries that start with `-`.";

#[derive(Parser, Debug)]
#[command(name = "whiptail-box")]
#[command(about = "Show a whiptail dialog and print what was chosen")]
#[command(after_help = EXIT_STATUS_HELP)]
pub struct Cli {
    /// Title drawn on the dialog frame
    #[arg(long)]
    pub title: Option<String>,

    /// Text drawn at the top of the screen
    #[arg(long)]
    pub backtitle: Option<String>,

    /// Use full-width buttons
    #[arg(long = "fb")]
    pub full_buttons: bool,

    /// Box width (defaults to 60% of the terminal)
    #[arg(long)]
    pub width: Option<u16>,

    /// Box height (defaults to 60% of the terminal)
    #[arg(long)]
    pub height: Option<u16>,

    /// Print the outcome as JSON
    #[arg(long)]
    pub json: bool,

    /// Show the whiptail command line and wait for Enter before running it
    #[arg(long)]
    pub debug: bool,

    #[command(subcommand)]
    pub command: DialogCommand,
}

#[derive(Subcommand, Debug)]
pub enum DialogCommand {
    /// Message box with a single button
    Message {
        text: String,
        #[arg(long, default_value = "Ok")]
        ok: String,
    },
    /// Yes/no question; the exit status carries the answer
    Confirm {
        text: String,
        #[arg(long, default_value = "Yes")]
        yes: String,
        #[arg(long, default_value = "No")]
        no: String,
        /// Focus the no button initially
        #[arg(long)]
        default_no: bool,
    },
    /// Single-line text input
    Input(InputArgs),
    /// Masked text input
    Password(InputArgs),
    /// Pick one entry from a menu
    Menu(ListArgs),
    /// Tick any number of entries
    Checklist(ChoiceArgs),
    /// Pick one entry from a radio list
    Radiolist(ChoiceArgs),
}

#[derive(Args, Debug)]
pub struct InputArgs {
    text: String,
    /// Pre-filled value
    #[arg(long)]
    init: Option<String>,
    #[arg(long, default_value = "Ok")]
    ok: String,
    #[arg(long, default_value = "Cancel")]
    cancel: String,
    /// Remove the cancel button
    #[arg(long, conflicts_with = "cancel")]
    no_cancel: bool,
}

#[derive(Args, Debug)]
pub struct ListArgs {
    text: String,
    /// Visible rows (defaults to the number of entries)
    #[arg(long, value_name = "N")]
    list_height: Option<u16>,
    #[arg(long, default_value = "Ok")]
    ok: String,
    /// Cancel button label; without it the button is removed
    #[arg(long)]
    cancel: Option<String>,
    #[arg(required = true, value_name = "TAG[=ITEM]")]
    entries: Vec<String>,
}

#[derive(Args, Debug)]
pub struct ChoiceArgs {
    #[command(flatten)]
    list: ListArgs,
    /// Pre-select the entry with this tag (repeatable)
    #[arg(long = "on", value_name = "TAG")]
    selected: Vec<String>,
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum CliError {
    #[error("--on {0} does not name any entry")]
    UnknownSelection(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Invocation {
    pub options: DialogOptions,
    pub width: Option<u16>,
    pub height: Option<u16>,
    pub json: bool,
    pub debug: bool,
    pub kind: DialogKind,
}

impl Invocation {
    /// Explicit dimensions win; `terminal` is only consulted when one is missing.
    pub fn box_size(&self, terminal: impl FnOnce() -> BoxSize) -> BoxSize {
        match (self.width, self.height) {
            (Some(width), Some(height)) => BoxSize::new(width, height),
            (width, height) => {
                let default = terminal();
                BoxSize::new(
                    width.unwrap_or(default.width),
                    height.unwrap_or(default.height),
                )
            }
        }
    }
}

impl Cli {
    pub fn into_invocation(self) -> Result<Invocation, CliError> {
        let (text, kind) = match self.command {
            DialogCommand::Message { text, ok } => (text, DialogKind::Message { ok }),
            DialogCommand::Confirm {
                text,
                yes,
                no,
                default_no,
            } => (
                text,
                DialogKind::Confirm {
                    yes,
                    no,
                    default_no,
                },
            ),
            DialogCommand::Input(args) => input_kind(args, false),
            DialogCommand::Password(args) => input_kind(args, true),
            DialogCommand::Menu(args) => {
                let list = list_entries(&args);
                (
                    args.text,
                    DialogKind::Menu {
                        list,
                        ok: args.ok,
                        cancel: args.cancel,
                    },
                )
            }
            DialogCommand::Checklist(args) => {
                let (list, status) = choice_entries(&args)?;
                let ListArgs {
                    text, ok, cancel, ..
                } = args.list;
                (
                    text,
                    DialogKind::Checklist {
                        list,
                        status,
                        ok,
                        cancel,
                    },
                )
            }
            DialogCommand::Radiolist(args) => {
                let (list, status) = choice_entries(&args)?;
                let ListArgs {
                    text, ok, cancel, ..
                } = args.list;
                (
                    text,
                    DialogKind::Radiolist {
                        list,
                        status,
                        ok,
                        cancel,
                    },
                )
            }
        };

        let mut options = DialogOptions::new(text).full_buttons(self.full_buttons);
        options.title = self.title;
        options.backtitle = self.backtitle;
        Ok(Invocation {
            options,
            width: self.width,
            height: self.height,
            json: self.json,
            debug: self.debug,
            kind,
        })
    }
}

fn input_kind(args: InputArgs, password: bool) -> (String, DialogKind) {
    let cancel = (!args.no_cancel).then_some(args.cancel);
    (
        args.text,
        DialogKind::Input {
            initial: args.init,
            password,
            ok: args.ok,
            cancel,
        },
    )
}

fn list_entries(args: &ListArgs) -> ListEntries {
    let mut tags = Vec::with_capacity(args.entries.len());
    let mut labels = Vec::with_capacity(args.entries.len());
    let mut has_labels = false;
    for entry in &args.entries {
        match entry.split_once('=') {
            Some((tag, label)) => {
                has_labels = true;
                tags.push(tag.to_string());
                labels.push(label.to_string());
            }
            None => {
                tags.push(entry.clone());
                labels.push(entry.clone());
            }
        }
    }
    let height = args
        .list_height
        .unwrap_or_else(|| u16::try_from(tags.len()).unwrap_or(u16::MAX));
    ListEntries::new(height, tags, has_labels.then_some(labels))
}

fn choice_entries(args: &ChoiceArgs) -> Result<(ListEntries, Vec<bool>), CliError> {
    let list = list_entries(&args.list);
    if let Some(unknown) = args.selected.iter().find(|tag| !list.tags.contains(*tag)) {
        return Err(CliError::UnknownSelection(unknown.clone()));
    }
    let status = list
        .tags
        .iter()
        .map(|tag| args.selected.contains(tag))
        .collect();
    Ok((list, status))
}

#[cfg(test)]
mod tests {
    use super::{Cli, CliError, Invocation};
    use crate::dialog::{BoxSize, DialogKind, ListEntries};
    use clap::error::ErrorKind;
    use clap::Parser;
    use std::cell::Cell;

    fn strings(values: &[&str]) -> Vec<String> {
        values.iter().map(|value| value.to_string()).collect()
    }

    fn parse_invocation(args: &[&str]) -> Invocation {
        Cli::try_parse_from(std::iter::once("whiptail-box").chain(args.iter().copied()))
            .expect("parse")
            .into_invocation()
            .expect("invocation")
    }

    fn parse_error(args: &[&str]) -> ErrorKind {
        Cli::try_parse_from(std::iter::once("whiptail-box").chain(args.iter().copied()))
            .unwrap_err()
            .kind()
    }

    #[test]
    fn parses_message_with_decorations() {
        let invocation = parse_invocation(&[
            "--title", "Setup", "--fb", "message", "All done", "--ok", "Close",
        ]);
        assert_eq!(invocation.options.title.as_deref(), Some("Setup"));
        assert!(invocation.options.full_buttons);
        assert_eq!(invocation.options.text, "All done");
        assert_eq!(
            invocation.kind,
            DialogKind::Message {
                ok: "Close".to_string()
            }
        );
    }

    #[test]
    fn confirm_defaults_labels() {
        let invocation = parse_invocation(&["confirm", "Continue?", "--default-no"]);
        assert_eq!(
            invocation.kind,
            DialogKind::Confirm {
                yes: "Yes".to_string(),
                no: "No".to_string(),
                default_no: true,
            }
        );
    }

    #[test]
    fn input_keeps_cancel_unless_disabled() {
        let invocation = parse_invocation(&["input", "Name", "--init", "guest"]);
        assert_eq!(
            invocation.kind,
            DialogKind::Input {
                initial: Some("guest".to_string()),
                password: false,
                ok: "Ok".to_string(),
                cancel: Some("Cancel".to_string()),
            }
        );
        let invocation = parse_invocation(&["password", "Secret", "--no-cancel"]);
        assert_eq!(
            invocation.kind,
            DialogKind::Input {
                initial: None,
                password: true,
                ok: "Ok".to_string(),
                cancel: None,
            }
        );
    }

    #[test]
    fn menu_entries_without_labels_have_no_items() {
        let invocation = parse_invocation(&["menu", "Pick", "a", "b", "c"]);
        assert_eq!(
            invocation.kind,
            DialogKind::Menu {
                list: ListEntries::new(3, strings(&["a", "b", "c"]), None),
                ok: "Ok".to_string(),
                cancel: None,
            }
        );
    }

    #[test]
    fn checklist_selection_comes_from_on_flags() {
        let invocation = parse_invocation(&[
            "checklist",
            "Services",
            "--list-height",
            "4",
            "--cancel",
            "Back",
            "--on",
            "web",
            "web=Web server",
            "db",
        ]);
        assert_eq!(
            invocation.kind,
            DialogKind::Checklist {
                list: ListEntries::new(
                    4,
                    strings(&["web", "db"]),
                    Some(strings(&["Web server", "db"]))
                ),
                status: vec![true, false],
                ok: "Ok".to_string(),
                cancel: Some("Back".to_string()),
            }
        );
    }

    #[test]
    fn hyphenated_tags_pass_through_after_double_dash() {
        let invocation =
            parse_invocation(&["radiolist", "One", "--on", "x", "--", "--odd", "-h", "x"]);
        match invocation.kind {
            DialogKind::Radiolist { list, status, .. } => {
                assert_eq!(list.tags, strings(&["--odd", "-h", "x"]));
                assert_eq!(status, vec![false, false, true]);
            }
            other => panic!("unexpected kind: {other:?}"),
        }

        let invocation = parse_invocation(&["menu", "Pick", "--", "-h", "-v"]);
        match invocation.kind {
            DialogKind::Menu { list, .. } => assert_eq!(list.tags, strings(&["-h", "-v"])),
            other => panic!("unexpected kind: {other:?}"),
        }
    }

    #[test]
    fn selection_must_name_an_entry() {
        let error =
            Cli::try_parse_from(["whiptail-box", "checklist", "S", "--on", "dns", "web"])
                .expect("parse")
                .into_invocation()
                .unwrap_err();
        assert_eq!(error, CliError::UnknownSelection("dns".to_string()));
    }

    #[test]
    fn explicit_size_skips_the_terminal() {
        let invocation = parse_invocation(&["--width", "70", "--height", "20", "message", "hi"]);
        let size = invocation.box_size(|| panic!("terminal queried despite explicit size"));
        assert_eq!(size, BoxSize::new(70, 20));
    }

    #[test]
    fn partial_size_fills_from_the_terminal_once() {
        let queries = Cell::new(0);
        let invocation = parse_invocation(&["--width", "70", "message", "hi"]);
        let size = invocation.box_size(|| {
            queries.set(queries.get() + 1);
            BoxSize::new(48, 14)
        });
        assert_eq!(size, BoxSize::new(70, 14));
        assert_eq!(queries.get(), 1);
    }

    #[test]
    fn usage_errors_come_from_clap() {
        let no_args: [&str; 1] = ["whiptail-box"];
        assert!(Cli::try_parse_from(no_args).is_err());
        assert!(Cli::try_parse_from(["whiptail-box", "gauge", "x"]).is_err());
        assert_eq!(
            parse_error(&["menu", "Pick"]),
            ErrorKind::MissingRequiredArgument
        );
        assert_eq!(
            parse_error(&["message", "hi", "extra"]),
            ErrorKind::UnknownArgument
        );
        assert_eq!(
            parse_error(&["--width", "wide", "message", "hi"]),
            ErrorKind::ValueValidation
        );
        assert_eq!(
            parse_error(&["message", "hi", "--colour"]),
            ErrorKind::UnknownArgument
        );
        assert_eq!(
            parse_error(&["input", "Name", "--cancel", "Back", "--no-cancel"]),
            ErrorKind::ArgumentConflict
        );
    }

    #[test]
    fn boolean_flags_reject_inline_values() {
        assert!(Cli::try_parse_from(["whiptail-box", "--fb=no", "message", "hi"]).is_err());
        let cli = Cli::try_parse_from(["whiptail-box", "--fb", "message", "hi"]).expect("parse");
        assert!(cli.full_buttons);
    }

    #[test]
    fn help_is_rendered_by_clap() {
        assert_eq!(parse_error(&["--help"]), ErrorKind::DisplayHelp);
        assert_eq!(parse_error(&["menu", "--help"]), ErrorKind::DisplayHelp);
    }
}
