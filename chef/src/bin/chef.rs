//! Command-line interface for chef.
//!
//! Usage:
//!   chef [path]   - Convert `path`, or standard input when omitted, to standard output

use clap::{value_parser, Arg, Command};
use common_framework::{Error, Result};
use rewrite_framework::Summary;
use std::fs::File;
use std::io::{self, BufReader, BufWriter};
use std::path::{Path, PathBuf};
use std::process::ExitCode;

fn main() -> ExitCode {
    init_tracing();

    let matches = Command::new("chef")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Converts English to Mock Swedish, leaving markup intact")
        .arg(
            Arg::new("path")
                .help("File to convert; reads standard input when omitted")
                .value_parser(value_parser!(PathBuf))
                .index(1),
        )
        .get_matches();

    match run(matches.get_one::<PathBuf>("path").map(PathBuf::as_path)) {
        Ok(summary) => {
            tracing::debug!(?summary, "done");
            ExitCode::SUCCESS
        }
        Err(err) => {
            eprintln!("chef: {err}");
            ExitCode::FAILURE
        }
    }
}

/// Install a stderr subscriber when `RUST_LOG` is set; stdout carries only
/// the converted text.
fn init_tracing() {
    use tracing_subscriber::{fmt, prelude::*, EnvFilter};

    if std::env::var("RUST_LOG").is_ok() {
        tracing_subscriber::registry()
            .with(
                fmt::layer()
                    .with_writer(io::stderr)
                    .with_target(true)
                    .with_level(true),
            )
            .with(EnvFilter::from_default_env())
            .init();
    }
}

fn run(path: Option<&Path>) -> Result<Summary> {
    let stdout = io::stdout();
    let sink = BufWriter::new(stdout.lock());

    match path {
        Some(path) => {
            let file = File::open(path).map_err(|source| Error::SourceUnavailable {
                path: path.to_path_buf(),
                source,
            })?;
            tracing::debug!(path = %path.display(), "reading file");
            chef::encheferize(BufReader::new(file), sink)
        }
        None => chef::encheferize(io::stdin().lock(), sink),
    }
}
