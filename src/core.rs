//! Core listing logic for colordir.
//!
//! This module contains the non-UI “engine” pieces of the tool:
//! - [fm]: directory scanning and per-entry metadata (see [scan_dir], [FileEntry]).
//! - [classify]: the category tables and [classify] function.
//! - [formatter]: sorting plus size/permission/time formatting helpers.
//! - [walker]: the traversal coordinator and the running totals.
//! - [terminal]: terminal geometry and the pause keystroke.
//!
//! Most callers will import [scan_dir], [FileEntry], and [classify]
//! from this module.

pub mod classify;
pub mod fm;
pub mod formatter;
pub mod terminal;
pub mod walker;

pub use classify::{Category, classify};
pub use fm::{FileEntry, scan_dir};
pub use formatter::{
    format_file_time, format_permissions, format_size, pad_display, sort_listing,
};
pub use walker::{Lister, Totals, directory_total_size};
