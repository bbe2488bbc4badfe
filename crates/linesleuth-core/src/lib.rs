/// LineSleuth Core — scanning, aggregation, and reporting.
///
/// This crate contains all business logic with no CLI dependencies.
/// The binary only parses arguments, sets up logging, and prints.
///
/// # Modules
///
/// - [`model`] — Scan result types and size formatting.
/// - [`scanner`] — Sequential depth-first walk with per-file aggregation.
/// - [`analysis`] — Extension allow-list and top-N rankings.
/// - [`report`] — Plain-text summary rendering.
pub mod analysis;
pub mod model;
pub mod report;
pub mod scanner;

pub use model::ScanResult;
pub use scanner::{analyze, analyze_with, ScanError};
