use crate::error::{DialogError, Result};
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct BoxSize {
    pub width: u16,
    pub height: u16,
}

impl BoxSize {
    pub const fn new(width: u16, height: u16) -> Self {
        Self { width, height }
    }

    /// 60% of the given terminal dimensions, rounded down.
    pub fn scaled(columns: u16, rows: u16) -> Self {
        Self {
            width: sixty_percent(columns),
            height: sixty_percent(rows),
        }
    }

    /// Reads the current terminal once; later resizes are not tracked.
    pub fn from_terminal() -> Result<Self> {
        let (columns, rows) = crossterm::terminal::size().map_err(DialogError::TerminalSize)?;
        Ok(Self::scaled(columns, rows))
    }
}

fn sixty_percent(value: u16) -> u16 {
    (u32::from(value) * 3 / 5) as u16
}
