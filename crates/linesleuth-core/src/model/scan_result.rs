/// Scan aggregate and the per-file records that feed it.
///
/// A scan owns a single [`ScanAccumulator`] for its whole lifetime. Each
/// visited file bumps the counters and, when its content could be read,
/// contributes a [`FileRecord`]. The accumulator is consumed exactly once by
/// [`ScanAccumulator::finish`], which ranks the candidates and produces the
/// immutable [`ScanResult`] handed to the report.
use crate::analysis::top_files::{rank_files, ExtensionTally, TOP_N};
use compact_str::CompactString;
use std::path::PathBuf;

/// One visited file whose content and size were read successfully.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileRecord {
    /// Path as produced by the walk (root joined with entry names).
    pub path: PathBuf,
    /// Newline-delimited segment count (see `scanner::visitor::count_lines`).
    pub lines: u64,
    /// Size in bytes from the metadata query.
    pub size: u64,
    /// Lowercase extension without the leading dot.
    pub extension: CompactString,
}

/// An entry in the "most lines" ranking.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TopFile {
    pub path: PathBuf,
    pub lines: u64,
}

/// An entry in the "most popular formats" ranking.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExtensionCount {
    pub extension: CompactString,
    pub files: u64,
}

/// Aggregate produced by one full traversal.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct ScanResult {
    /// Sum of the line counts of every successfully read file.
    pub total_lines: u64,
    /// Number of allow-listed files visited, including unreadable ones.
    pub total_files: u64,
    /// Sum of the sizes of every successfully read file.
    pub total_size_bytes: u64,
    /// At most [`TOP_N`] files, descending by line count.
    pub top_files: Vec<TopFile>,
    /// At most [`TOP_N`] extensions, descending by file count.
    pub top_extensions: Vec<ExtensionCount>,
    /// Per-file read failures recovered during the scan.
    pub error_count: u64,
}

/// In-progress scan state. Mutated only by the sequential walker.
#[derive(Debug, Default)]
pub struct ScanAccumulator {
    total_lines: u64,
    total_files: u64,
    total_size_bytes: u64,
    error_count: u64,
    candidates: Vec<TopFile>,
    extensions: ExtensionTally,
}

impl ScanAccumulator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Count an accepted file before any of its content is read.
    pub fn count_file(&mut self) {
        self.total_files += 1;
    }

    /// Note a per-file read failure. The file stays counted.
    pub fn record_error(&mut self) {
        self.error_count += 1;
    }

    /// Fold a successfully read file into the totals and candidate lists.
    pub fn add(&mut self, record: FileRecord) {
        self.total_lines += record.lines;
        self.total_size_bytes += record.size;
        self.extensions.increment(&record.extension);
        self.candidates.push(TopFile {
            path: record.path,
            lines: record.lines,
        });
    }

    /// Rank both candidate lists and freeze the result.
    pub fn finish(self) -> ScanResult {
        ScanResult {
            total_lines: self.total_lines,
            total_files: self.total_files,
            total_size_bytes: self.total_size_bytes,
            top_files: rank_files(self.candidates, TOP_N),
            top_extensions: self.extensions.rank(TOP_N),
            error_count: self.error_count,
        }
    }
}
