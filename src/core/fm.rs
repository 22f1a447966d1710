//! Directory scanning and the per-entry data model for colordir.
//!
//! Provides the [FileEntry] struct which is used throughout colordir,
//! and [scan_dir], which reads one directory level into a vector of
//! entries. A stat failure on an individual entry never aborts the
//! scan: the entry is kept with degraded metadata instead.

use std::ffi::OsString;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::time::SystemTime;

/// One filesystem node observed during a single directory scan.
///
/// Immutable once read; owned by the traversal for the duration of one
/// listing pass. `size`/`modified`/`mode` are `None` when the metadata
/// could not be read (entry vanished mid-scan, permission trouble) or
/// simply does not apply (directories carry no own size).
#[derive(Debug, Clone)]
pub struct FileEntry {
    path: PathBuf,
    name: OsString,
    flags: u8,
    size: Option<u64>,
    modified: Option<SystemTime>,
    mode: Option<u32>,
    /// Eagerly computed subtree total, filled in by the traversal when
    /// total display is requested outside recursive mode.
    subtree_size: Option<u64>,
}

impl FileEntry {
    // Flag bit definitions
    pub(crate) const IS_DIR: u8 = 1 << 0;
    pub(crate) const IS_HIDDEN: u8 = 1 << 1;
    pub(crate) const IS_EXECUTABLE: u8 = 1 << 2;

    /// Owner-execute permission bit, the classification fallback.
    #[cfg(unix)]
    pub(crate) const OWNER_EXEC: u32 = 0o100;

    pub fn new(
        path: PathBuf,
        name: OsString,
        flags: u8,
        size: Option<u64>,
        modified: Option<SystemTime>,
        mode: Option<u32>,
    ) -> Self {
        FileEntry {
            path,
            name,
            flags,
            size,
            modified,
            mode,
            subtree_size: None,
        }
    }

    // Accessors

    #[inline]
    pub fn path(&self) -> &Path {
        &self.path
    }

    #[inline]
    pub fn name_str(&self) -> std::borrow::Cow<'_, str> {
        self.name.to_string_lossy()
    }

    /// Case-folded name, the secondary sort key.
    #[inline]
    pub fn lowercase_name(&self) -> String {
        self.name_str().to_lowercase()
    }

    #[inline]
    pub fn is_dir(&self) -> bool {
        self.flags & Self::IS_DIR != 0
    }

    #[inline]
    pub fn is_hidden(&self) -> bool {
        self.flags & Self::IS_HIDDEN != 0
    }

    #[inline]
    pub fn is_executable(&self) -> bool {
        self.flags & Self::IS_EXECUTABLE != 0
    }

    /// Own byte size; `None` for directories and failed stats.
    #[inline]
    pub fn size(&self) -> Option<u64> {
        self.size
    }

    #[inline]
    pub fn modified(&self) -> Option<SystemTime> {
        self.modified
    }

    /// Raw permission-bits snapshot taken at scan time.
    #[inline]
    pub fn mode(&self) -> Option<u32> {
        self.mode
    }

    #[inline]
    pub fn subtree_size(&self) -> Option<u64> {
        self.subtree_size
    }

    pub(crate) fn set_subtree_size(&mut self, total: u64) {
        self.subtree_size = Some(total);
    }
}

/// Reads the contents of the provided directory into a vector of [FileEntry].
///
/// Entries whose metadata cannot be read are still included, with the
/// size, timestamp and mode left unset so rendering degrades to
/// placeholders instead of dropping the entry.
///
/// # Returns
/// A Result containing a vector of FileEntry structs or an std::io::Error
/// (only when the directory itself cannot be opened).
pub fn scan_dir(path: &Path) -> io::Result<Vec<FileEntry>> {
    let mut entries = Vec::with_capacity(256);

    for entry in fs::read_dir(path)? {
        let entry = match entry {
            Ok(e) => e,
            Err(_) => continue,
        };

        let name = entry.file_name();
        let mut flags = 0u8;
        let mut size = None;
        let mut modified = None;
        let mut mode = None;

        if let Ok(md) = entry.metadata() {
            if md.is_dir() {
                flags |= FileEntry::IS_DIR;
            } else {
                size = Some(md.len());
                modified = md.modified().ok();
            }

            #[cfg(unix)]
            {
                use std::os::unix::fs::PermissionsExt;

                let bits = md.permissions().mode();
                mode = Some(bits);
                if !md.is_dir() && bits & FileEntry::OWNER_EXEC != 0 {
                    flags |= FileEntry::IS_EXECUTABLE;
                }
            }
        }

        if name.to_string_lossy().starts_with('.') {
            flags |= FileEntry::IS_HIDDEN;
        }

        entries.push(FileEntry::new(
            entry.path(),
            name,
            flags,
            size,
            modified,
            mode,
        ));
    }
    Ok(entries)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs::{self, File};
    use std::io::Write;
    use tempfile::TempDir;

    #[test]
    fn file_entry_flags() -> Result<(), Box<dyn std::error::Error>> {
        let fe_file = FileEntry::new(
            PathBuf::from("file.txt"),
            OsString::from("file.txt"),
            0,
            Some(12),
            None,
            Some(0o644),
        );
        assert!(!fe_file.is_dir());
        assert!(!fe_file.is_hidden());
        assert_eq!(fe_file.name_str(), "file.txt");
        assert_eq!(fe_file.size(), Some(12));

        let flags = FileEntry::IS_DIR | FileEntry::IS_HIDDEN;
        let fe_dir = FileEntry::new(
            PathBuf::from(".hidden_folder"),
            OsString::from(".hidden_folder"),
            flags,
            None,
            None,
            Some(0o755),
        );
        assert!(fe_dir.is_dir());
        assert!(fe_dir.is_hidden());
        assert_eq!(fe_dir.subtree_size(), None);
        Ok(())
    }

    #[test]
    fn scan_picks_up_files_and_dirs() -> Result<(), Box<dyn std::error::Error>> {
        let tmp = TempDir::new()?;
        let mut f = File::create(tmp.path().join("hello.txt"))?;
        writeln!(f, "abc123")?;
        fs::create_dir(tmp.path().join("sub"))?;
        File::create(tmp.path().join(".dotfile"))?;

        let entries = scan_dir(tmp.path())?;
        assert_eq!(entries.len(), 3);

        let hello = entries
            .iter()
            .find(|e| e.name_str() == "hello.txt")
            .ok_or("hello.txt missing")?;
        assert!(!hello.is_dir());
        assert_eq!(hello.size(), Some(7));
        assert!(hello.modified().is_some());

        let sub = entries
            .iter()
            .find(|e| e.name_str() == "sub")
            .ok_or("sub missing")?;
        assert!(sub.is_dir());
        assert_eq!(sub.size(), None);

        let dot = entries
            .iter()
            .find(|e| e.name_str() == ".dotfile")
            .ok_or(".dotfile missing")?;
        assert!(dot.is_hidden());
        Ok(())
    }

    #[test]
    fn scan_nonexistent() -> Result<(), Box<dyn std::error::Error>> {
        let path = PathBuf::from("/path/does/not/exist");
        assert!(scan_dir(&path).is_err());
        Ok(())
    }

    #[cfg(unix)]
    #[test]
    fn scan_marks_executables() -> Result<(), Box<dyn std::error::Error>> {
        use std::os::unix::fs::PermissionsExt;

        let tmp = TempDir::new()?;
        let path = tmp.path().join("tool");
        File::create(&path)?;
        fs::set_permissions(&path, fs::Permissions::from_mode(0o755))?;

        let entries = scan_dir(tmp.path())?;
        let tool = entries
            .iter()
            .find(|e| e.name_str() == "tool")
            .ok_or("tool missing")?;
        assert!(tool.is_executable());
        assert_eq!(tool.mode().map(|m| m & 0o777), Some(0o755));
        Ok(())
    }
}
