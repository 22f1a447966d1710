//! Color and icon theme for colordir.
//!
//! The theme is an injected read-only lookup from a category (plus the
//! directory/hidden render-time overrides) to an ANSI color and an
//! emoji icon. Rendering never touches a global style table, so tests
//! run against [Theme::plain] without a real terminal.

use crate::core::classify::Category;
use crate::core::fm::FileEntry;

/// Display tag for one entry kind: icon glyph plus ANSI color prefix.
#[derive(Debug, Clone, Copy)]
pub struct EntryStyle {
    pub icon: &'static str,
    pub color: &'static str,
}

/// Read-only style lookup handed to the renderer.
#[derive(Debug, Clone)]
pub struct Theme {
    programming: EntryStyle,
    text: EntryStyle,
    video: EntryStyle,
    picture: EntryStyle,
    executable: EntryStyle,
    compressed: EntryStyle,
    other: EntryStyle,
    directory: EntryStyle,
    /// Overrides the category color for dotfiles.
    pub hidden_color: &'static str,
    /// Color of the truncation marker in grid cells.
    pub marker_color: &'static str,
    /// Color of the summary rule and the `Error:` tag.
    pub accent_color: &'static str,
    pub error_color: &'static str,
    pub reset: &'static str,
}

impl Theme {
    /// Style for a file of the given category.
    pub fn category_style(&self, category: Category) -> EntryStyle {
        match category {
            Category::Programming => self.programming,
            Category::Text => self.text,
            Category::Video => self.video,
            Category::Picture => self.picture,
            Category::Executable => self.executable,
            Category::Compressed => self.compressed,
            Category::Other => self.other,
        }
    }

    /// Resolves the icon and color for one entry.
    ///
    /// Directories take the directory style regardless of category, and
    /// hidden entries keep their icon but swap in the hidden color.
    pub fn entry_style(&self, entry: &FileEntry, category: Category) -> EntryStyle {
        let mut style = if entry.is_dir() {
            self.directory
        } else {
            self.category_style(category)
        };
        if entry.is_hidden() {
            style.color = self.hidden_color;
        }
        style
    }

    /// A theme with no escape codes, for deterministic test output.
    pub fn plain() -> Self {
        let blank = |icon| EntryStyle { icon, color: "" };
        Theme {
            programming: blank("💻"),
            text: blank("📜"),
            video: blank("🎬"),
            picture: blank("🖼️"),
            executable: blank("⚙️"),
            compressed: blank("🎁"),
            other: blank("📄"),
            directory: blank("📂"),
            hidden_color: "",
            marker_color: "",
            accent_color: "",
            error_color: "",
            reset: "",
        }
    }
}

impl Default for Theme {
    fn default() -> Self {
        Theme {
            programming: EntryStyle {
                icon: "💻",
                color: "\x1b[0;36m", // cyan
            },
            text: EntryStyle {
                icon: "📜",
                color: "\x1b[0;32m", // green
            },
            video: EntryStyle {
                icon: "🎬",
                color: "\x1b[0;35m", // magenta
            },
            picture: EntryStyle {
                icon: "🖼️",
                color: "\x1b[0;33m", // yellow
            },
            executable: EntryStyle {
                icon: "⚙️",
                color: "\x1b[1;36m", // bright cyan
            },
            compressed: EntryStyle {
                icon: "🎁",
                color: "\x1b[1;31m", // bright red
            },
            other: EntryStyle {
                icon: "📄",
                color: "\x1b[0m",
            },
            directory: EntryStyle {
                icon: "📂",
                color: "\x1b[1;34m", // bright blue
            },
            hidden_color: "\x1b[1;30m", // dark gray
            marker_color: "\x1b[1;33m", // bright yellow
            accent_color: "\x1b[1;33m",
            error_color: "\x1b[31m",
            reset: "\x1b[0m",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::ffi::OsString;
    use std::path::PathBuf;

    fn entry(name: &str, flags: u8) -> FileEntry {
        FileEntry::new(
            PathBuf::from(name),
            OsString::from(name),
            flags,
            None,
            None,
            None,
        )
    }

    #[test]
    fn directory_style_wins_over_category() {
        let theme = Theme::default();
        let dir = entry("src", FileEntry::IS_DIR);
        let style = theme.entry_style(&dir, Category::Other);
        assert_eq!(style.icon, "📂");
        assert_eq!(style.color, "\x1b[1;34m");
    }

    #[test]
    fn hidden_overrides_color_keeps_icon() {
        let theme = Theme::default();
        let dot = entry(".profile", FileEntry::IS_HIDDEN);
        let style = theme.entry_style(&dot, Category::Text);
        assert_eq!(style.icon, "📜");
        assert_eq!(style.color, theme.hidden_color);
    }
}
