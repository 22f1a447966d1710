//! Layout engine for colordir.
//!
//! Decides between the detailed list view and the multi-column grid
//! view from the terminal geometry and flags, and renders a sorted
//! listing accordingly. The renderer writes to any [io::Write] sink so
//! tests capture output in memory, and tracks printed lines for the
//! pause feature.

use crate::core::classify::classify;
use crate::core::fm::FileEntry;
use crate::core::formatter::{
    display_width, format_file_time, format_permissions, format_size, pad_display,
    truncate_display,
};
use crate::core::terminal;
use crate::core::walker::Totals;
use crate::ui::theme::Theme;

use std::io::{self, Write};
use std::path::Path;

/// Rows reserved for prompt/header/summary when deciding whether a
/// listing still fits on screen.
const RESERVED_ROWS: usize = 3;
/// Fixed width of one grid cell, icon included.
const GRID_CELL_WIDTH: usize = 17;
/// Name field width inside a grid cell.
const GRID_NAME_WIDTH: usize = GRID_CELL_WIDTH - 2;
/// Names longer than this are truncated in grid cells.
const GRID_NAME_MAX: usize = 15;
/// Name field width in the detailed list view.
const LIST_NAME_WIDTH: usize = 20;
/// Size column width in the detailed list view.
const SIZE_FIELD_WIDTH: usize = 10;

/// Terminal geometry and active flags, built once per invocation.
#[derive(Debug, Clone, Copy)]
pub struct RenderContext {
    pub width: usize,
    pub height: usize,
    pub recursive: bool,
    pub show_total: bool,
    pub force_list: bool,
    pub force_wide: bool,
    pub pause: bool,
}

impl RenderContext {
    pub fn new(width: usize, height: usize) -> Self {
        RenderContext {
            width: if width > 0 {
                width
            } else {
                terminal::DEFAULT_WIDTH
            },
            height: if height > 0 {
                height
            } else {
                terminal::DEFAULT_HEIGHT
            },
            recursive: false,
            show_total: false,
            force_list: false,
            force_wide: false,
            pause: false,
        }
    }

    /// Directory totals are rendered inline only when requested outside
    /// recursive mode; recursive mode lists each subtree on its own.
    pub fn inline_dir_totals(&self) -> bool {
        self.show_total && !self.recursive
    }
}

/// True when the grid layout should be used for `count` entries.
///
/// `force_list` dominates; otherwise `force_wide` or a listing too tall
/// for the screen (minus the reserved rows) selects the grid.
pub fn grid_selected(ctx: &RenderContext, count: usize) -> bool {
    !ctx.force_list && (ctx.force_wide || count > ctx.height.saturating_sub(RESERVED_ROWS))
}

/// Renders listings, section headers, and the summary to one sink.
pub struct Renderer<'a, W: Write> {
    ctx: RenderContext,
    theme: &'a Theme,
    out: W,
    lines_written: usize,
}

impl<'a, W: Write> Renderer<'a, W> {
    pub fn new(ctx: RenderContext, theme: &'a Theme, out: W) -> Self {
        Renderer {
            ctx,
            theme,
            out,
            lines_written: 0,
        }
    }

    pub fn ctx(&self) -> &RenderContext {
        &self.ctx
    }

    /// Consumes the renderer, returning the underlying sink.
    pub fn into_inner(self) -> W {
        self.out
    }

    /// Renders one sorted listing in whichever layout the context selects.
    /// Zero entries render nothing, not an empty grid row.
    pub fn render_listing(&mut self, entries: &[FileEntry]) -> io::Result<()> {
        if entries.is_empty() {
            return Ok(());
        }
        if grid_selected(&self.ctx, entries.len()) {
            self.render_grid(entries)
        } else {
            self.render_list(entries)
        }
    }

    /// One detailed line per entry: icon, colored padded name,
    /// permissions, size, and for files the modification time.
    fn render_list(&mut self, entries: &[FileEntry]) -> io::Result<()> {
        let show_dir_totals = self.ctx.inline_dir_totals();
        for entry in entries {
            let category = classify(entry);
            let style = self.theme.entry_style(entry, category);
            let mut line = format!(
                "{} {}{} {}",
                style.icon,
                style.color,
                pad_display(&entry.name_str(), LIST_NAME_WIDTH),
                format_permissions(entry.mode(), entry.is_dir()),
            );

            if !entry.is_dir() {
                let size = entry.size().map(format_size).unwrap_or_else(|| "-".into());
                line.push(' ');
                line.push_str(&pad_display(&size, SIZE_FIELD_WIDTH));
            } else if show_dir_totals {
                let total = format_size(entry.subtree_size().unwrap_or(0));
                line.push(' ');
                line.push_str(&pad_display(&total, SIZE_FIELD_WIDTH));
                line.push_str(" (total)");
            }

            if !entry.is_dir() {
                line.push(' ');
                line.push_str(&format_file_time(entry.modified()));
            }

            line.push_str(self.theme.reset);
            self.write_line(&line)?;
        }
        Ok(())
    }

    /// Row-major multi-column layout with fixed-width cells.
    fn render_grid(&mut self, entries: &[FileEntry]) -> io::Result<()> {
        let columns = (self.ctx.width / (GRID_CELL_WIDTH + 1)).max(1);
        let rows = entries.len().div_ceil(columns);

        for row in 0..rows {
            let mut line = String::new();
            for col in 0..columns {
                let index = row * columns + col;
                let Some(entry) = entries.get(index) else {
                    break;
                };
                line.push_str(&self.grid_cell(entry));
            }
            self.write_line(&line)?;
        }
        Ok(())
    }

    /// Formats one grid cell, truncating over-long names to a marker.
    fn grid_cell(&self, entry: &FileEntry) -> String {
        let category = classify(entry);
        let style = self.theme.entry_style(entry, category);
        let name = entry.name_str();

        if display_width(&name) > GRID_NAME_MAX {
            let cut = truncate_display(&name, GRID_NAME_MAX - 1);
            let pad = GRID_NAME_WIDTH.saturating_sub(display_width(&cut) + 1);
            format!(
                "{} {}{}{}>{}{}",
                style.icon,
                style.color,
                cut,
                self.theme.marker_color,
                self.theme.reset,
                " ".repeat(pad),
            )
        } else {
            format!(
                "{} {}{}{}",
                style.icon,
                style.color,
                pad_display(&name, GRID_NAME_WIDTH),
                self.theme.reset,
            )
        }
    }

    /// Prints the `path:` header above a recursed subdirectory.
    pub fn section_header(&mut self, path: &Path) -> io::Result<()> {
        self.write_line("")?;
        self.write_line(&format!("{}:", path.display()))
    }

    /// Prints the closing rule and aggregate totals.
    pub fn summary(&mut self, totals: &Totals) -> io::Result<()> {
        let text = format!(
            "Total: Files: {} | Dirs: {} | Size: {}",
            totals.files,
            totals.dirs,
            format_size(totals.size_shown),
        );
        let rule = "─".repeat(text.chars().count());
        self.write_line(&format!(
            "{}{}{}",
            self.theme.accent_color, rule, self.theme.reset
        ))?;
        self.write_line(&text)
    }

    /// Writes one output line, pausing after each screenful when the
    /// pause flag is active.
    fn write_line(&mut self, line: &str) -> io::Result<()> {
        writeln!(self.out, "{}", line)?;
        if self.ctx.pause {
            self.lines_written += 1;
            if self.lines_written >= self.ctx.height.saturating_sub(1).max(1) {
                self.out.flush()?;
                terminal::wait_for_keypress()?;
                self.lines_written = 0;
            }
        }
        Ok(())
    }
}
