/// Plain-text summary report.
///
/// Rendering is kept apart from printing so the exact layout can be tested
/// against an in-memory buffer.
use crate::model::{format_size, ScanResult};
use std::io::{self, Write};

const BANNER_RULE: &str = "==============================";
const BANNER_TITLE: &str = "   Project Analysis Summary";

/// Write the full summary for `result` to `out`.
pub fn write_report<W: Write + ?Sized>(result: &ScanResult, out: &mut W) -> io::Result<()> {
    writeln!(out, "{BANNER_RULE}")?;
    writeln!(out, "{BANNER_TITLE}")?;
    writeln!(out, "{BANNER_RULE}")?;
    writeln!(out, "Total lines of code: {}", result.total_lines)?;
    writeln!(out, "Total number of files: {}", result.total_files)?;
    writeln!(out, "Total size: {}", format_size(result.total_size_bytes))?;

    writeln!(out)?;
    writeln!(out, "Top 10 files with most lines:")?;
    for file in &result.top_files {
        writeln!(out, "{} lines - {}", file.lines, file.path.display())?;
    }

    writeln!(out)?;
    writeln!(out, "Top 10 most popular file formats:")?;
    for ext in &result.top_extensions {
        writeln!(out, "{} files - .{}", ext.files, ext.extension)?;
    }

    Ok(())
}

/// Render the summary into a `String`.
pub fn render_report(result: &ScanResult) -> String {
    let mut buf = Vec::new();
    // Writing into a Vec cannot fail.
    let _ = write_report(result, &mut buf);
    String::from_utf8_lossy(&buf).into_owned()
}
