/// Scanner module — walks a project tree and aggregates line statistics.
///
/// The scan is a single sequential pass: the [`walker`] lists directories
/// depth-first and hands every allow-listed file to the [`visitor`], which
/// folds it into one [`ScanAccumulator`]. Nothing runs concurrently, so the
/// accumulator needs no locking.
///
/// Error policy:
/// - a file that cannot be read or stat'ed is logged and skipped;
/// - a directory that cannot be listed (including a bad root) aborts the scan
///   with [`ScanError`] and no partial result is returned.
pub mod fs;
pub mod visitor;
pub mod walker;

#[cfg(test)]
pub(crate) mod mem_fs;

use crate::model::{ScanAccumulator, ScanResult};
use fs::{FileSystem, StdFs};
use std::io;
use std::path::{Path, PathBuf};
use std::time::Instant;
use tracing::{debug, info};

/// Errors that abort a scan.
#[derive(Debug, thiserror::Error)]
pub enum ScanError {
    /// A directory listing failed. The scan cannot report a consistent total
    /// without it.
    #[error("failed to read directory {}: {source}", .path.display())]
    ReadDir {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

/// Scan `root` on the real filesystem.
pub fn analyze(root: &Path) -> Result<ScanResult, ScanError> {
    analyze_with(&StdFs, root)
}

/// Scan `root` through any [`FileSystem`] implementation.
pub fn analyze_with<F>(fs: &F, root: &Path) -> Result<ScanResult, ScanError>
where
    F: FileSystem + ?Sized,
{
    let start = Instant::now();
    info!("Starting scan of {}", root.display());

    let mut acc = ScanAccumulator::new();
    walker::walk(fs, root, |entry, extension| {
        visitor::visit_file(fs, &entry.path, extension, &mut acc);
    })?;

    let result = acc.finish();
    debug!(
        "Scan complete: {} files, {} lines, {} bytes, {} unreadable in {:?}",
        result.total_files,
        result.total_lines,
        result.total_size_bytes,
        result.error_count,
        start.elapsed()
    );

    Ok(result)
}
