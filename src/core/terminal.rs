//! Terminal geometry and keypress capture for colordir.
//!
//! Thin crossterm wrappers: queries the terminal dimensions with
//! documented fallbacks, and captures a single raw keypress for the
//! pause (`-p`) feature, restoring the previous terminal mode before
//! returning.

use crossterm::event::{self, Event, KeyEventKind};
use crossterm::terminal::{disable_raw_mode, enable_raw_mode, size};

use std::io;

/// Fallback width when terminal detection fails or reports zero.
pub const DEFAULT_WIDTH: usize = 80;
/// Fallback height when terminal detection fails or reports zero.
pub const DEFAULT_HEIGHT: usize = 24;

/// Returns the terminal dimensions as (columns, rows).
///
/// Detection failure or a zero dimension falls back to 80x24 so layout
/// arithmetic downstream never sees a degenerate geometry.
pub fn dimensions() -> (usize, usize) {
    match size() {
        Ok((cols, rows)) => (
            if cols > 0 { cols as usize } else { DEFAULT_WIDTH },
            if rows > 0 { rows as usize } else { DEFAULT_HEIGHT },
        ),
        Err(_) => (DEFAULT_WIDTH, DEFAULT_HEIGHT),
    }
}

/// Blocks until the user presses a key.
///
/// Enables raw mode for the wait so the keystroke is consumed without
/// echo, and restores cooked mode before returning, even on error.
pub fn wait_for_keypress() -> io::Result<()> {
    enable_raw_mode()?;
    let result = loop {
        match event::read() {
            Ok(Event::Key(key)) if key.kind == KeyEventKind::Press => break Ok(()),
            Ok(_) => continue,
            Err(e) => break Err(e),
        }
    };
    disable_raw_mode()?;
    result
}
