//! File categorization for colordir.
//!
//! Maps a [FileEntry] to a [Category] based on its extension, with an
//! executable-bit fallback for unmatched regular files. Categories drive
//! both coloring and the file sort order.

use crate::core::FileEntry;

use phf::{Set, phf_set};

/// Category assigned to every entry at render/sort time.
///
/// Declaration order is the sort order: files are grouped by category
/// before they are sorted by name, so `Programming` files always come
/// before `Text` files and so on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Category {
    Programming,
    Text,
    Video,
    Picture,
    Executable,
    Compressed,
    Other,
}

/// Common programming and source-code extensions.
static PROGRAMMING_EXTENSIONS: Set<&'static str> = phf_set! {
    "cpp", "h", "py", "java", "cs", "js", "php", "hs", "rs", "clj", "sh",
    "pl", "lua", "erl", "ex", "exs", "scala", "d", "go", "nim", "lisp",
    "cl", "f90", "f95", "vhdl", "verilog", "coffee", "racket", "dart",
    "tcl", "hlsl",
};

/// Text documents and configuration files.
static TEXT_EXTENSIONS: Set<&'static str> = phf_set! {
    "txt", "md", "rtf", "log", "ini", "conf", "config", "nfo", "readme",
    "html", "htm", "bak", "asc", "diff", "lst", "srt", "mdown", "text",
    "out", "memo", "patch", "logfile", "po", "dat", "env", "doc",
};

static VIDEO_EXTENSIONS: Set<&'static str> = phf_set! {
    "mp4", "mkv", "avi", "mov", "wmv", "flv", "webm", "mpeg", "mpg",
    "m4v", "3gp", "ogv", "vob", "ts", "m2ts", "divx", "rm", "rmvb",
    "asf", "swf", "mxf", "hevc", "avchd", "mts", "ogm", "amv", "drc",
    "yuv", "h264", "h265",
};

static PICTURE_EXTENSIONS: Set<&'static str> = phf_set! {
    "jpg", "jpeg", "png", "gif", "bmp", "tiff", "tif", "webp", "svg",
    "ico", "raw", "xpm", "ppm", "pgm", "pbm", "heic", "heif",
};

static COMPRESSED_EXTENSIONS: Set<&'static str> = phf_set! {
    "zip", "tar", "gz", "bz2", "xz", "7z", "rar", "zst", "lz4", "tgz",
    "tbz2", "txz", "tzst", "tlz4", "jar", "war", "ear", "cab", "deb",
    "rpm", "apk", "dmg", "iso", "img", "appimage",
};

/// Categorizes a single entry.
///
/// Pure function of the entry's name and permission snapshot: the
/// (case-folded) extension is checked against the static tables in
/// order; an unmatched regular file with the owner-execute bit set is
/// `Executable`; everything else, including directories and entries
/// whose stat failed mid-scan, is `Other`.
pub fn classify(entry: &FileEntry) -> Category {
    if entry.is_dir() {
        return Category::Other;
    }

    // Lookup order is the tie-break authority when an extension appears
    // in more than one set ("sh" is programming, never text).
    let tables: [(&Set<&'static str>, Category); 5] = [
        (&PROGRAMMING_EXTENSIONS, Category::Programming),
        (&TEXT_EXTENSIONS, Category::Text),
        (&VIDEO_EXTENSIONS, Category::Video),
        (&PICTURE_EXTENSIONS, Category::Picture),
        (&COMPRESSED_EXTENSIONS, Category::Compressed),
    ];

    if let Some(ext) = extension_of(&entry.name_str()) {
        let lowered = ext.to_lowercase();
        for (table, category) in tables {
            if table.contains(lowered.as_str()) {
                return category;
            }
        }
    }

    if entry.is_executable() {
        return Category::Executable;
    }

    Category::Other
}

/// Extracts the extension from a bare file name.
///
/// A leading dot is not an extension separator, so `.bashrc` has no
/// extension while `archive.tar.gz` yields `gz`.
fn extension_of(name: &str) -> Option<&str> {
    let dot_idx = name.rfind('.')?;
    if dot_idx == 0 || dot_idx == name.len() - 1 {
        return None;
    }
    Some(&name[dot_idx + 1..])
}
