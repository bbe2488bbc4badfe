/// Data model for a single LineSleuth scan.
///
/// Re-exports the scan accumulator and supporting record types.
pub mod scan_result;
pub mod size;

pub use scan_result::{ExtensionCount, FileRecord, ScanAccumulator, ScanResult, TopFile};
pub use size::format_size;
