/// In-memory [`FileSystem`] for unit tests.
///
/// Listings come back in insertion order, which makes encounter-order
/// assertions deterministic. Individual reads, stats, and listings can be
/// made to fail.
use super::fs::{DirEntryInfo, FileSystem};
use std::collections::{HashMap, HashSet};
use std::io;
use std::path::{Path, PathBuf};

#[derive(Debug, Default)]
pub(crate) struct MemFs {
    dirs: HashMap<PathBuf, Vec<DirEntryInfo>>,
    files: HashMap<PathBuf, Vec<u8>>,
    unreadable: HashSet<PathBuf>,
    unstattable: HashSet<PathBuf>,
    unlistable: HashSet<PathBuf>,
}

impl MemFs {
    /// A tree containing only the directory `root`.
    pub(crate) fn new(root: &str) -> Self {
        let mut fs = Self::default();
        fs.dirs.insert(PathBuf::from(root), Vec::new());
        fs
    }

    /// Add an empty directory at `path`; the parent must already exist.
    pub(crate) fn dir(mut self, path: &str) -> Self {
        let path = PathBuf::from(path);
        self.link(&path, true);
        self.dirs.insert(path, Vec::new());
        self
    }

    /// Add a file at `path`; the parent must already exist.
    pub(crate) fn file(mut self, path: &str, content: &str) -> Self {
        let path = PathBuf::from(path);
        self.link(&path, false);
        self.files.insert(path, content.as_bytes().to_vec());
        self
    }

    /// Make reading the content of `path` fail.
    pub(crate) fn unreadable(mut self, path: &str) -> Self {
        self.unreadable.insert(PathBuf::from(path));
        self
    }

    /// Make the metadata query for `path` fail.
    pub(crate) fn unstattable(mut self, path: &str) -> Self {
        self.unstattable.insert(PathBuf::from(path));
        self
    }

    /// Make listing the directory `path` fail.
    pub(crate) fn unlistable(mut self, path: &str) -> Self {
        self.unlistable.insert(PathBuf::from(path));
        self
    }

    fn link(&mut self, path: &Path, is_dir: bool) {
        let parent = path.parent().expect("entry must have a parent");
        let name = path
            .file_name()
            .expect("entry must have a name")
            .to_string_lossy()
            .into_owned();
        self.dirs
            .get_mut(parent)
            .expect("parent directory must be added first")
            .push(DirEntryInfo {
                path: path.to_path_buf(),
                name,
                is_dir,
            });
    }
}

fn denied(path: &Path) -> io::Error {
    io::Error::new(
        io::ErrorKind::PermissionDenied,
        format!("permission denied: {}", path.display()),
    )
}

impl FileSystem for MemFs {
    fn read_dir(&self, path: &Path) -> io::Result<Vec<DirEntryInfo>> {
        if self.unlistable.contains(path) {
            return Err(denied(path));
        }
        self.dirs
            .get(path)
            .cloned()
            .ok_or_else(|| io::Error::new(io::ErrorKind::NotFound, "no such directory"))
    }

    fn read(&self, path: &Path) -> io::Result<Vec<u8>> {
        if self.unreadable.contains(path) {
            return Err(denied(path));
        }
        self.files
            .get(path)
            .cloned()
            .ok_or_else(|| io::Error::new(io::ErrorKind::NotFound, "no such file"))
    }

    fn file_size(&self, path: &Path) -> io::Result<u64> {
        if self.unstattable.contains(path) {
            return Err(denied(path));
        }
        self.files
            .get(path)
            .map(|content| content.len() as u64)
            .ok_or_else(|| io::Error::new(io::ErrorKind::NotFound, "no such file"))
    }
}
