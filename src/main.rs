//! LineSleuth — quick line/size summary of a project tree.
//!
//! Thin binary entry point. All logic lives in the `linesleuth-core` crate.

use anyhow::Context;
use clap::Parser;
use std::io::{self, Write};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    name = "linesleuth",
    version,
    about = "Summarise lines, files, and sizes of the source files in a directory tree"
)]
struct Cli {
    /// Root directory to analyse.
    root: PathBuf,
}

fn main() -> anyhow::Result<()> {
    init_tracing();

    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(err) => {
            // `--help` and `--version` come through here too and are not failures.
            let code = if err.use_stderr() { 1 } else { 0 };
            let _ = err.print();
            std::process::exit(code);
        }
    };

    tracing::info!("LineSleuth starting");

    let result = linesleuth_core::analyze(&cli.root)
        .with_context(|| format!("failed to analyse {}", cli.root.display()))?;

    let mut out = io::stdout().lock();
    linesleuth_core::report::write_report(&result, &mut out).context("failed to write report")?;
    out.flush().context("failed to flush report")?;

    Ok(())
}

/// Structured logging to stderr so diagnostics never interleave with the
/// report on stdout. Verbosity follows `RUST_LOG` and defaults to `warn`,
/// which keeps per-file read warnings visible.
fn init_tracing() {
    use tracing_subscriber::EnvFilter;

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}
