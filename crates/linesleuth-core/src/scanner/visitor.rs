/// Per-file visit: read, measure, fold into the running totals.
///
/// A file is counted in `total_files` before its content is read. If either
/// read fails the file stays counted but adds no lines, bytes, ranking
/// candidate, or extension tally; a warning is logged and the scan moves on.
use super::fs::FileSystem;
use crate::model::{FileRecord, ScanAccumulator};
use compact_str::CompactString;
use std::io;
use std::path::Path;
use tracing::warn;

/// Number of newline-delimited segments in `content`.
///
/// Content with no `\n` is one line; a trailing `\n` adds an empty final
/// segment, so `"a\nb\n"` counts as 3. Counting on raw bytes gives the same
/// answer as splitting decoded text and never fails on non-UTF-8 input.
pub fn count_lines(content: &[u8]) -> u64 {
    content.iter().filter(|&&b| b == b'\n').count() as u64 + 1
}

/// Visit one allow-listed file and record it in `acc`.
pub fn visit_file<F>(fs: &F, path: &Path, extension: CompactString, acc: &mut ScanAccumulator)
where
    F: FileSystem + ?Sized,
{
    acc.count_file();

    match read_record(fs, path, extension) {
        Ok(record) => acc.add(record),
        Err(err) => {
            acc.record_error();
            warn!("Error reading file {}: {err}", path.display());
        }
    }
}

fn read_record<F>(fs: &F, path: &Path, extension: CompactString) -> io::Result<FileRecord>
where
    F: FileSystem + ?Sized,
{
    let content = fs.read(path)?;
    let lines = count_lines(&content);
    let size = fs.file_size(path)?;

    Ok(FileRecord {
        path: path.to_path_buf(),
        lines,
        size,
        extension,
    })
}
