use super::flag::Flag;
use super::geometry::BoxSize;
use super::list::{splice_columns, status_token};
use serde::Serialize;

/// Caller-level settings shared by every dialog a [`crate::Whiptail`] shows.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DialogOptions {
    pub text: String,
    pub title: Option<String>,
    pub backtitle: Option<String>,
    pub full_buttons: bool,
}

impl DialogOptions {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            ..Self::default()
        }
    }

    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn backtitle(mut self, backtitle: impl Into<String>) -> Self {
        self.backtitle = Some(backtitle.into());
        self
    }

    pub fn full_buttons(mut self, enabled: bool) -> Self {
        self.full_buttons = enabled;
        self
    }

    // whiptail draws the first text line flush against the frame.
    fn body_text(&self) -> String {
        if self.text.is_empty() {
            String::new()
        } else {
            format!("\n{}", self.text)
        }
    }

    fn decoration_flags(&self) -> Vec<Flag> {
        let mut flags = Vec::new();
        if let Some(title) = &self.title {
            flags.push(Flag::new("title").arg(title));
        }
        if let Some(backtitle) = &self.backtitle {
            flags.push(Flag::new("backtitle").arg(backtitle));
        }
        if self.full_buttons {
            flags.push(Flag::new("fb"));
        }
        flags
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListEntries {
    pub list_height: u16,
    pub tags: Vec<String>,
    /// Display labels; `None` shows the tags themselves.
    pub items: Option<Vec<String>>,
}

impl ListEntries {
    pub fn new(list_height: u16, tags: Vec<String>, items: Option<Vec<String>>) -> Self {
        Self {
            list_height,
            tags,
            items,
        }
    }

    fn positional(&self, status: Option<&[bool]>) -> Vec<String> {
        let labels = self.items.as_ref().unwrap_or(&self.tags);
        match status {
            Some(status) => {
                let status: Vec<String> = status
                    .iter()
                    .map(|selected| status_token(*selected).to_string())
                    .collect();
                splice_columns(&[self.tags.as_slice(), labels.as_slice(), status.as_slice()])
            }
            None => splice_columns(&[self.tags.as_slice(), labels.as_slice()]),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DialogKind {
    Message {
        ok: String,
    },
    Confirm {
        yes: String,
        no: String,
        default_no: bool,
    },
    Input {
        initial: Option<String>,
        password: bool,
        ok: String,
        cancel: Option<String>,
    },
    Menu {
        list: ListEntries,
        ok: String,
        cancel: Option<String>,
    },
    Checklist {
        list: ListEntries,
        status: Vec<bool>,
        ok: String,
        cancel: Option<String>,
    },
    Radiolist {
        list: ListEntries,
        status: Vec<bool>,
        ok: String,
        cancel: Option<String>,
    },
}

impl DialogKind {
    pub fn box_name(&self) -> &'static str {
        match self {
            DialogKind::Message { .. } => "msgbox",
            DialogKind::Confirm { .. } => "yesno",
            DialogKind::Input { password: true, .. } => "passwordbox",
            DialogKind::Input { password: false, .. } => "inputbox",
            DialogKind::Menu { .. } => "menu",
            DialogKind::Checklist { .. } => "checklist",
            DialogKind::Radiolist { .. } => "radiolist",
        }
    }
}

/// Flags for one dialog invocation, in the order whiptail receives them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DialogRequest {
    flags: Vec<Flag>,
}

impl DialogRequest {
    /// # Panics
    ///
    /// Panics when list columns (tags, items, status) differ in length.
    pub fn new(options: &DialogOptions, size: BoxSize, kind: &DialogKind) -> Self {
        let mut flags = options.decoration_flags();
        let body = Flag::new(kind.box_name())
            .arg(options.body_text())
            .arg(size.height)
            .arg(size.width);

        match kind {
            DialogKind::Message { ok } => {
                flags.push(body);
                flags.push(Flag::new("ok-button").arg(ok));
            }
            DialogKind::Confirm {
                yes,
                no,
                default_no,
            } => {
                if *default_no {
                    flags.push(Flag::new("defaultno"));
                }
                flags.push(body);
                flags.push(Flag::new("yes-button").arg(yes));
                flags.push(Flag::new("no-button").arg(no));
            }
            DialogKind::Input {
                initial, ok, cancel, ..
            } => {
                flags.push(match initial {
                    Some(initial) => body.arg(initial),
                    None => body,
                });
                push_buttons(&mut flags, ok, cancel.as_deref());
            }
            DialogKind::Menu { list, ok, cancel } => {
                push_list(&mut flags, body, list, None);
                push_buttons(&mut flags, ok, cancel.as_deref());
            }
            DialogKind::Checklist {
                list,
                status,
                ok,
                cancel,
            }
            | DialogKind::Radiolist {
                list,
                status,
                ok,
                cancel,
            } => {
                push_list(&mut flags, body, list, Some(status.as_slice()));
                push_buttons(&mut flags, ok, cancel.as_deref());
            }
        }

        Self { flags }
    }

    pub fn flags(&self) -> &[Flag] {
        &self.flags
    }

    pub fn has_flag(&self, name: &str) -> bool {
        self.flags.iter().any(|flag| flag.name() == name)
    }

    pub fn argv(&self, program: &str, extra_args: &[String]) -> Vec<String> {
        let mut argv = Vec::with_capacity(1 + extra_args.len() + self.flags.len() * 2);
        argv.push(program.to_string());
        argv.extend(extra_args.iter().cloned());
        for flag in &self.flags {
            argv.extend(flag.resolve());
        }
        argv
    }
}

fn push_list(flags: &mut Vec<Flag>, body: Flag, list: &ListEntries, status: Option<&[bool]>) {
    let positional = list.positional(status);
    if list.items.is_none() {
        flags.push(Flag::new("noitem"));
    }
    flags.push(body.arg(list.list_height).args(positional));
}

fn push_buttons(flags: &mut Vec<Flag>, ok: &str, cancel: Option<&str>) {
    flags.push(Flag::new("ok-button").arg(ok));
    flags.push(match cancel {
        Some(cancel) => Flag::new("cancel-button").arg(cancel),
        None => Flag::new("nocancel"),
    });
}
