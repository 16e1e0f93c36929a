//! Builds `whiptail` command lines, runs them, and decodes what the user chose.
//!
//! ```no_run
//! use whiptail_box::{DialogOptions, Outcome, Whiptail, WhiptailConfig};
//!
//! # fn main() -> whiptail_box::Result<()> {
//! let dialog = Whiptail::new(
//!     DialogOptions::new("Which services?").title("Setup"),
//!     WhiptailConfig::from_env(),
//! )?;
//! if let Outcome::Accepted(raw) =
//!     dialog.select_multiple(3, &[true, false, false], &["web", "db", "cache"], None, "Ok", None)?
//! {
//!     println!("{:?}", whiptail_box::split_selection(&raw));
//! }
//! # Ok(())
//! # }
//! ```

pub mod cli;
pub mod config;
pub mod dialog;
pub mod error;
pub mod runtime;

pub use config::WhiptailConfig;
pub use dialog::{
    splice_columns, split_selection, BoxSize, DialogKind, DialogOptions, DialogRequest, Flag,
    ListEntries, Outcome, Whiptail,
};
pub use error::{DialogError, Result};
pub use runtime::{DialogRunner, ProcessRunner, RawOutput};
