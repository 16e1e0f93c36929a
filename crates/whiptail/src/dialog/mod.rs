mod flag;
mod geometry;
mod list;
mod outcome;
mod request;

pub use flag::Flag;
pub use geometry::BoxSize;
pub use list::{splice_columns, split_selection};
pub use outcome::Outcome;
pub use request::{DialogKind, DialogOptions, DialogRequest, ListEntries};

use crate::config::WhiptailConfig;
use crate::error::Result;
use crate::runtime::{DialogRunner, ProcessRunner, RawOutput};
use log::debug;

/// Shows whiptail dialogs that share one text, title, and box size.
///
/// Every call builds a fresh [`DialogRequest`], so one `Whiptail` can show
/// several dialogs in a row without flags leaking between them.
pub struct Whiptail<R = ProcessRunner> {
    options: DialogOptions,
    size: BoxSize,
    config: WhiptailConfig,
    runner: R,
}

impl Whiptail<ProcessRunner> {
    /// Sizes the box from the current terminal, read once here.
    pub fn new(options: DialogOptions, config: WhiptailConfig) -> Result<Self> {
        let size = BoxSize::from_terminal()?;
        Ok(Self::with_size(options, size, config))
    }

    pub fn with_size(options: DialogOptions, size: BoxSize, config: WhiptailConfig) -> Self {
        let runner = ProcessRunner::new(config.debug);
        Self::with_runner(options, size, config, runner)
    }
}

impl<R: DialogRunner> Whiptail<R> {
    pub fn with_runner(
        options: DialogOptions,
        size: BoxSize,
        config: WhiptailConfig,
        runner: R,
    ) -> Self {
        Self {
            options,
            size,
            config,
            runner,
        }
    }

    pub fn message(&self, ok: &str) -> Result<Outcome<()>> {
        let raw = self.show(&DialogKind::Message { ok: ok.to_string() })?;
        Ok(if raw.success() {
            Outcome::Accepted(())
        } else {
            Outcome::Cancelled
        })
    }

    /// `true` only when the yes button was chosen.
    pub fn confirm(&self, yes: &str, no: &str, default_no: bool) -> Result<bool> {
        let raw = self.show(&DialogKind::Confirm {
            yes: yes.to_string(),
            no: no.to_string(),
            default_no,
        })?;
        Ok(raw.success())
    }

    /// Without a `cancel` label the cancel button is removed entirely.
    pub fn prompt_text(
        &self,
        initial: Option<&str>,
        password: bool,
        ok: &str,
        cancel: Option<&str>,
    ) -> Result<Outcome<String>> {
        let raw = self.show(&DialogKind::Input {
            initial: initial.map(str::to_string),
            password,
            ok: ok.to_string(),
            cancel: cancel.map(str::to_string),
        })?;
        decode_text(raw)
    }

    /// Menu returning the chosen tag. Without `items` the tags are shown.
    ///
    /// # Panics
    ///
    /// Panics when `items` and `tags` differ in length.
    pub fn select_one<S: AsRef<str>>(
        &self,
        list_height: u16,
        tags: &[S],
        items: Option<&[S]>,
        ok: &str,
        cancel: Option<&str>,
    ) -> Result<Outcome<String>> {
        let raw = self.show(&DialogKind::Menu {
            list: list_entries(list_height, tags, items),
            ok: ok.to_string(),
            cancel: cancel.map(str::to_string),
        })?;
        decode_text(raw)
    }

    /// Checklist returning whiptail's raw output, the quoted selected tags
    /// separated by spaces. [`split_selection`] turns it into a list.
    ///
    /// whiptail's keyboard focus rarely reaches the cancel button of a
    /// checklist, so callers should not rely on users being able to cancel.
    ///
    /// # Panics
    ///
    /// Panics when `status`, `tags`, and `items` differ in length.
    pub fn select_multiple<S: AsRef<str>>(
        &self,
        list_height: u16,
        status: &[bool],
        tags: &[S],
        items: Option<&[S]>,
        ok: &str,
        cancel: Option<&str>,
    ) -> Result<Outcome<String>> {
        let raw = self.show(&DialogKind::Checklist {
            list: list_entries(list_height, tags, items),
            status: status.to_vec(),
            ok: ok.to_string(),
            cancel: cancel.map(str::to_string),
        })?;
        decode_text(raw)
    }

    /// Radiolist; whiptail itself keeps the selection to one entry. The
    /// cancel caveat of [`Whiptail::select_multiple`] applies here too.
    ///
    /// # Panics
    ///
    /// Panics when `status`, `tags`, and `items` differ in length.
    pub fn select_radio<S: AsRef<str>>(
        &self,
        list_height: u16,
        status: &[bool],
        tags: &[S],
        items: Option<&[S]>,
        ok: &str,
        cancel: Option<&str>,
    ) -> Result<Outcome<String>> {
        let raw = self.show(&DialogKind::Radiolist {
            list: list_entries(list_height, tags, items),
            status: status.to_vec(),
            ok: ok.to_string(),
            cancel: cancel.map(str::to_string),
        })?;
        decode_text(raw)
    }

    pub fn request(&self, kind: &DialogKind) -> DialogRequest {
        DialogRequest::new(&self.options, self.size, kind)
    }

    pub fn show(&self, kind: &DialogKind) -> Result<RawOutput> {
        let request = self.request(kind);
        if log::log_enabled!(log::Level::Debug) {
            if let Ok(flags) = serde_json::to_string(&request) {
                debug!("{} request: {flags}", kind.box_name());
            }
        }
        let argv = request.argv(&self.config.program, &self.config.extra_args);
        self.runner.run(&argv)
    }
}

fn list_entries<S: AsRef<str>>(list_height: u16, tags: &[S], items: Option<&[S]>) -> ListEntries {
    let to_strings = |values: &[S]| -> Vec<String> {
        values
            .iter()
            .map(|value| value.as_ref().to_string())
            .collect()
    };
    ListEntries::new(list_height, to_strings(tags), items.map(to_strings))
}

fn decode_text(raw: RawOutput) -> Result<Outcome<String>> {
    if !raw.success() {
        return Ok(Outcome::Cancelled);
    }
    Ok(Outcome::Accepted(String::from_utf8(raw.stderr)?))
}
