//! Directory traversal and aggregation for colordir.
//!
//! Walks one directory level at a time: filters entries against the
//! wildcard pattern, partitions them into directories and files, keeps
//! the running totals, hands the sorted listing to the renderer, and
//! recurses per subdirectory when requested. One [Totals] accumulator
//! is threaded through the whole walk.

use crate::core::fm::{FileEntry, scan_dir};
use crate::core::formatter::sort_listing;
use crate::ui::render::Renderer;

use glob::{MatchOptions, Pattern};

use std::fs;
use std::io::{self, ErrorKind, Write};
use std::path::Path;

/// Running counters shared across one whole (possibly recursive) walk.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Totals {
    pub files: u64,
    pub dirs: u64,
    pub size_shown: u64,
}

/// One listing pass: pattern filter plus the renderer it feeds.
pub struct Lister<'a, 'b, W: Write> {
    pattern: Option<Pattern>,
    match_options: MatchOptions,
    renderer: &'a mut Renderer<'b, W>,
}

impl<'a, 'b, W: Write> Lister<'a, 'b, W> {
    /// `pattern` is matched against bare entry names; `None` matches
    /// everything.
    pub fn new(pattern: Option<Pattern>, renderer: &'a mut Renderer<'b, W>) -> Self {
        // Anchored shell-glob semantics: `*` must not cross a path
        // separator, dotfiles are matched like any other name.
        let match_options = MatchOptions {
            case_sensitive: true,
            require_literal_separator: true,
            require_literal_leading_dot: false,
        };
        Lister {
            pattern,
            match_options,
            renderer,
        }
    }

    /// Lists one directory, recursing into subdirectories when the
    /// recursive flag is active.
    ///
    /// The caller validates the root before the first call; permission
    /// failures further down are localized (the subtree is skipped) so
    /// one unreadable directory never aborts the walk.
    pub fn list(&mut self, path: &Path, totals: &mut Totals) -> io::Result<()> {
        let inline_totals = self.renderer.ctx().inline_dir_totals();
        let recursive = self.renderer.ctx().recursive;

        let mut dirs = Vec::new();
        let mut files = Vec::new();

        for mut entry in scan_dir(path)? {
            if !self.matches(&entry) {
                continue;
            }

            if entry.is_dir() {
                totals.dirs += 1;
                if inline_totals {
                    // Eager subtree walk, computed once and stashed on
                    // the entry so rendering does not repeat it.
                    let total = directory_total_size(entry.path());
                    totals.size_shown += total;
                    entry.set_subtree_size(total);
                }
                dirs.push(entry);
            } else {
                totals.files += 1;
                totals.size_shown += entry.size().unwrap_or(0);
                files.push(entry);
            }
        }

        sort_listing(&mut dirs, &mut files);

        let dir_count = dirs.len();
        let mut combined = dirs;
        combined.extend(files);
        self.renderer.render_listing(&combined)?;

        if recursive {
            for dir in &combined[..dir_count] {
                self.renderer.section_header(dir.path())?;
                match self.list(dir.path(), totals) {
                    Err(e) if e.kind() == ErrorKind::PermissionDenied => {}
                    other => other?,
                }
            }
        }
        Ok(())
    }

    fn matches(&self, entry: &FileEntry) -> bool {
        match &self.pattern {
            None => true,
            Some(pattern) => {
                pattern.matches_with(entry.name_str().as_ref(), self.match_options)
            }
        }
    }
}

/// Recursively computed byte total of all regular files under `path`.
///
/// Unreadable subtrees and entries that vanish mid-walk are excluded
/// from the sum rather than aborting it.
pub fn directory_total_size(path: &Path) -> u64 {
    let Ok(read) = fs::read_dir(path) else {
        return 0;
    };

    let mut total = 0u64;
    for entry in read.flatten() {
        let Ok(md) = entry.metadata() else {
            continue;
        };
        if md.is_dir() {
            total += directory_total_size(&entry.path());
        } else if md.is_file() {
            total += md.len();
        }
    }
    total
}
