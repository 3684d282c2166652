//! sha256files: compute the SHA-256 hash of each file in a path tree.
//!
//! Prints one pipe-separated row per entry to stdout, followed by `*DONE*`.
//! Diagnostics go to stderr through `tracing`.

use std::io::{self, BufWriter, Write};
use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use tracing::error;
use tracing_subscriber::EnvFilter;

use sha256files::config::DEFAULT_READ_CHUNK;
use sha256files::files::{DONE_MARKER, TreeWalker, normalize_root, write_row};
use sha256files::{Error, Result, ScanConfig};

/// Compute the sha256 hash of each file in the path tree
#[derive(Parser, Debug)]
#[command(name = "sha256files", version)]
struct Args {
    /// Root of the tree to hash (a single file works too)
    path: PathBuf,

    /// Bytes requested per read while hashing a file
    #[arg(long, default_value_t = DEFAULT_READ_CHUNK)]
    chunk_size: usize,

    /// Log filter used when RUST_LOG is not set
    #[arg(long, default_value = "warn")]
    log_level: String,
}

fn main() -> ExitCode {
    let args = Args::parse();
    init_tracing(&args.log_level);

    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!(error = %e, "sha256files failed");
            eprintln!("error: {}", e);
            ExitCode::FAILURE
        }
    }
}

fn init_tracing(default_filter: &str) {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(default_filter))
        .unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .init();
}

fn run(args: &Args) -> Result<()> {
    let config = ScanConfig::new(args.chunk_size)?;
    let root = normalize_root(&args.path);

    let stdout = io::stdout();
    let mut out = BufWriter::new(stdout.lock());

    let mut walker = TreeWalker::new(config);
    walker.walk(&root, |entry| write_row(&mut out, entry))?;

    writeln!(out, "{}", DONE_MARKER).map_err(Error::Output)?;
    out.flush().map_err(Error::Output)?;

    Ok(())
}
