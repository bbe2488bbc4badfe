/// Filesystem capability used by the walker and the file visitor.
///
/// The scan logic never touches `std::fs` directly. [`StdFs`] is the real
/// implementation; tests substitute in-memory trees to inject failures that
/// are hard to reproduce on disk (e.g. a file that vanishes mid-scan).
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

/// One entry from a directory listing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DirEntryInfo {
    /// Parent path joined with [`name`](Self::name).
    pub path: PathBuf,
    /// Basename of the entry.
    pub name: String,
    /// `true` only for real directories. Symlinks are not followed, so a
    /// symlink to a directory reports `false` and is visited as a file.
    pub is_dir: bool,
}

/// Read/list/stat operations needed by a scan.
pub trait FileSystem {
    /// List a directory in the order the underlying listing returns.
    fn read_dir(&self, path: &Path) -> io::Result<Vec<DirEntryInfo>>;

    /// Read the full content of a file.
    fn read(&self, path: &Path) -> io::Result<Vec<u8>>;

    /// Size of a file in bytes, from metadata.
    fn file_size(&self, path: &Path) -> io::Result<u64>;
}

/// [`FileSystem`] backed by `std::fs`.
#[derive(Debug, Default, Clone, Copy)]
pub struct StdFs;

impl FileSystem for StdFs {
    fn read_dir(&self, path: &Path) -> io::Result<Vec<DirEntryInfo>> {
        let mut entries = Vec::new();
        for entry in fs::read_dir(path)? {
            let entry = entry?;
            let is_dir = entry.file_type()?.is_dir();
            entries.push(DirEntryInfo {
                path: entry.path(),
                name: entry.file_name().to_string_lossy().into_owned(),
                is_dir,
            });
        }
        Ok(entries)
    }

    fn read(&self, path: &Path) -> io::Result<Vec<u8>> {
        fs::read(path)
    }

    fn file_size(&self, path: &Path) -> io::Result<u64> {
        fs::metadata(path).map(|meta| meta.len())
    }
}
