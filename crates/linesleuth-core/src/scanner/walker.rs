/// Depth-first directory walker.
///
/// Uses an explicit stack instead of recursion. Each directory's listing is
/// pushed in reverse, so entries pop in listing order and a subdirectory is
/// fully walked before its next sibling is visited. This is the same
/// pre-order a recursive walk would produce.
///
/// A directory that cannot be listed aborts the whole walk. Per-file
/// failures are the visitor's concern and never reach this module.
use super::fs::{DirEntryInfo, FileSystem};
use super::ScanError;
use crate::analysis::classify;
use compact_str::CompactString;
use std::path::Path;
use tracing::debug;

/// Directory basenames that are never descended into, at any depth.
pub const IGNORED_DIRS: [&str; 2] = ["node_modules", ".git"];

/// Exact basename match against [`IGNORED_DIRS`].
pub fn is_ignored_dir(name: &str) -> bool {
    IGNORED_DIRS.contains(&name)
}

/// Walk `root` and call `on_file` for every allow-listed file.
///
/// `on_file` receives the entry and its lowercase extension. The root is
/// always listed, whatever its own name.
pub fn walk<F, V>(fs: &F, root: &Path, mut on_file: V) -> Result<(), ScanError>
where
    F: FileSystem + ?Sized,
    V: FnMut(&DirEntryInfo, CompactString),
{
    let mut stack: Vec<DirEntryInfo> = Vec::new();
    push_listing(fs, root, &mut stack)?;

    while let Some(entry) = stack.pop() {
        if entry.is_dir {
            if is_ignored_dir(&entry.name) {
                debug!("Skipping ignored directory {}", entry.path.display());
                continue;
            }
            push_listing(fs, &entry.path, &mut stack)?;
            continue;
        }

        let (extension, accepted) = classify(&entry.name);
        if accepted {
            on_file(&entry, extension);
        }
    }

    Ok(())
}

fn push_listing<F>(fs: &F, dir: &Path, stack: &mut Vec<DirEntryInfo>) -> Result<(), ScanError>
where
    F: FileSystem + ?Sized,
{
    let entries = fs.read_dir(dir).map_err(|source| ScanError::ReadDir {
        path: dir.to_path_buf(),
        source,
    })?;
    stack.extend(entries.into_iter().rev());
    Ok(())
}
