//! Sorting and display formatting for file entries in colordir.
//!
//! Holds the listing sort policy (directories first, files grouped by
//! category) and the formatting helpers for sizes, permission strings,
//! timestamps, and fixed-width display fields.

use crate::core::classify::classify;
use crate::core::fm::FileEntry;

use chrono::{DateTime, Local};
use unicode_width::UnicodeWidthChar;

use std::time::SystemTime;

/// Placeholder shown when an entry's permissions could not be read.
pub const PERMISSION_PLACEHOLDER: &str = "?????????";

/// Sorts a listing in place according to the two-tier policy.
///
/// Directories are ordered by case-folded name; files by category first
/// and case-folded name second. Callers concatenate the two slices with
/// directories in front, so the full invariant is: every directory
/// precedes every file.
pub fn sort_listing(dirs: &mut [FileEntry], files: &mut [FileEntry]) {
    dirs.sort_by(|a, b| a.lowercase_name().cmp(&b.lowercase_name()));
    files.sort_by(|a, b| {
        (classify(a), a.lowercase_name()).cmp(&(classify(b), b.lowercase_name()))
    });
}

/// Formats a byte count into a human-readable magnitude string.
///
/// Below 1024 the count is printed verbatim ("512 B"). Above it, the
/// value is reduced by powers of 1024 and printed with two decimals and
/// the matching unit, so exact boundaries reduce cleanly:
/// `format_size(1024)` is "1.00 KB", never "1024 B".
pub fn format_size(bytes: u64) -> String {
    if bytes < 1024 {
        return format!("{} B", bytes);
    }

    const UNITS: [&str; 7] = ["KB", "MB", "GB", "TB", "PB", "EB", "ZB"];
    let mut reduced = bytes as f64;
    let mut unit_index = 0usize;
    while reduced >= 1024.0 {
        reduced /= 1024.0;
        unit_index += 1;
    }

    // Keep the displayed mantissa below 1024: values just under a
    // boundary would otherwise round up to "1024.00 KB".
    if reduced >= 1023.995 {
        reduced /= 1024.0;
        unit_index += 1;
    }

    // unit_index is 1-based here (one division minimum).
    let unit = if unit_index <= UNITS.len() {
        UNITS[unit_index - 1].to_string()
    } else {
        // Beyond ZB: synthesize the next prefix letters deterministically.
        let prefix = (b'Z' + (unit_index - UNITS.len()) as u8) as char;
        format!("{}B", prefix)
    };

    format!("{:.2} {}", reduced, unit)
}

/// Formats a permission-bits snapshot as `drwxr-xr-x`.
///
/// The first character flags directories; the remaining nine are the
/// owner/group/other read/write/execute triplets. A missing snapshot
/// (stat failed mid-scan) yields the nine-`?` placeholder.
pub fn format_permissions(mode: Option<u32>, is_dir: bool) -> String {
    let Some(mode) = mode else {
        return PERMISSION_PLACEHOLDER.to_string();
    };

    let mut chars = ['-'; 10];
    if is_dir {
        chars[0] = 'd';
    }
    let shifts = [6, 3, 0];
    for (i, &shift) in shifts.iter().enumerate() {
        let base = 1 + i * 3;
        if (mode >> (shift + 2)) & 1u32 != 0 {
            chars[base] = 'r';
        }
        if (mode >> (shift + 1)) & 1u32 != 0 {
            chars[base + 1] = 'w';
        }
        if (mode >> shift) & 1u32 != 0 {
            chars[base + 2] = 'x';
        }
    }
    chars.iter().collect()
}

/// Formats the file modification time into a human-readable string.
/// # Returns
/// A string representing the local modification time or "-" if unknown.
pub fn format_file_time(modified: Option<SystemTime>) -> String {
    modified
        .map(|mtime| {
            let dt: DateTime<Local> = DateTime::from(mtime);
            dt.format("%Y-%m-%d %H:%M:%S").to_string()
        })
        .unwrap_or_else(|| "-".to_string())
}

/// Pads `text` with trailing spaces up to `width` display columns.
///
/// Width is measured in terminal columns, not bytes, so wide glyphs
/// (emoji, CJK) keep the columns aligned. Text already at or past the
/// width is returned unchanged.
pub fn pad_display(text: &str, width: usize) -> String {
    let current = display_width(text);
    if current >= width {
        return text.to_string();
    }
    let mut out = String::with_capacity(text.len() + (width - current));
    out.push_str(text);
    out.push_str(&" ".repeat(width - current));
    out
}

/// Truncates `text` to at most `width` display columns.
pub fn truncate_display(text: &str, width: usize) -> String {
    let mut out = String::new();
    let mut current = 0;
    for ch in text.chars() {
        let w = ch.width().unwrap_or(0);
        if current + w > width {
            break;
        }
        out.push(ch);
        current += w;
    }
    out
}

/// Display-column width of a string.
pub fn display_width(text: &str) -> usize {
    text.chars().map(|c| c.width().unwrap_or(0)).sum()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::ffi::OsString;
    use std::path::PathBuf;

    fn entry(name: &str, is_dir: bool) -> FileEntry {
        let flags = if is_dir { FileEntry::IS_DIR } else { 0 };
        FileEntry::new(
            PathBuf::from(name),
            OsString::from(name),
            flags,
            if is_dir { None } else { Some(1) },
            None,
            Some(0o644),
        )
    }

    #[test]
    fn size_boundaries() {
        assert_eq!(format_size(0), "0 B");
        assert_eq!(format_size(1), "1 B");
        assert_eq!(format_size(1023), "1023 B");
        assert_eq!(format_size(1024), "1.00 KB");
        assert_eq!(format_size(1536), "1.50 KB");
        assert_eq!(format_size(1024 * 1024), "1.00 MB");
        // Just under a boundary: rounding must roll into the next unit
        // instead of printing a 1024.00 mantissa.
        assert_eq!(format_size(1024 * 1024 - 1), "1.00 MB");
        assert_eq!(format_size(1048570), "1023.99 KB");
        assert_eq!(format_size(5 * 1024 * 1024 * 1024), "5.00 GB");
        assert_eq!(format_size(u64::MAX), "16.00 EB");
    }

    #[test]
    fn sort_files_by_category_then_name() {
        // b.py (Programming) < A.txt (Text) < z.MP4 (Video) < .hidden (Other)
        let mut files = vec![
            entry(".hidden", false),
            entry("z.MP4", false),
            entry("A.txt", false),
            entry("b.py", false),
        ];
        let mut dirs = vec![];
        sort_listing(&mut dirs, &mut files);
        let names: Vec<_> = files.iter().map(|e| e.name_str().into_owned()).collect();
        assert_eq!(names, vec!["b.py", "A.txt", "z.MP4", ".hidden"]);
    }

    #[test]
    fn sort_dirs_case_insensitive() {
        let mut dirs = vec![
            entry("zebra", true),
            entry("Alpha", true),
            entry("beta", true),
        ];
        let mut files = vec![];
        sort_listing(&mut dirs, &mut files);
        let names: Vec<_> = dirs.iter().map(|e| e.name_str().into_owned()).collect();
        assert_eq!(names, vec!["Alpha", "beta", "zebra"]);
    }

    #[test]
    fn permission_strings() {
        assert_eq!(format_permissions(Some(0o755), false), "-rwxr-xr-x");
        assert_eq!(format_permissions(Some(0o644), false), "-rw-r--r--");
        assert_eq!(format_permissions(Some(0o755), true), "drwxr-xr-x");
        assert_eq!(format_permissions(None, false), PERMISSION_PLACEHOLDER);
        assert_eq!(format_permissions(None, false).len(), 9);
    }

    #[test]
    fn unknown_time_is_dash() {
        assert_eq!(format_file_time(None), "-");
    }

    #[test]
    fn display_padding_and_truncation() {
        assert_eq!(pad_display("abc", 5), "abc  ");
        assert_eq!(pad_display("abcdef", 5), "abcdef");
        assert_eq!(truncate_display("abcdef", 4), "abcd");
        // Wide glyphs count as two columns.
        assert_eq!(display_width("🦀ab"), 4);
        assert_eq!(truncate_display("🦀abc", 3), "🦀a");
    }
}
