//! Command-line front end for ChronoHash.
//!
//! Hashes a string argument, one or more files, or standard input, and
//! prints lowercase hex digests. `--check` turns any of those into a
//! verification against a known digest.

use std::io::{self, Read};
use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{Context, Result};
use chronohash::{ChronoHash, Digest, Mode};
use clap::Parser;
use tracing_subscriber::EnvFilter;

/// ChronoHash CLI - an experimental 256-bit hash function.
///
/// Normal mode runs 20-32 rounds chosen from input complexity with temporal
/// diffusion. Fast mode runs 8 fixed rounds.
#[derive(Parser, Debug)]
#[command(name = "chronohash", version)]
#[command(after_help = "EXAMPLES:\n    \
    chronohash \"Hello, World!\"\n    \
    chronohash --fast \"Hello, World!\"\n    \
    chronohash --file input.txt\n    \
    echo Hello | chronohash")]
struct Args {
    /// Use fast mode (8 fixed rounds).
    #[arg(short = 'f', long, conflicts_with_all = ["normal", "mode"])]
    fast: bool,

    /// Use normal mode (20-32 dynamic rounds) [default].
    #[arg(short = 'n', long, conflicts_with = "mode")]
    normal: bool,

    /// Mode by name: normal or fast.
    #[arg(long, value_name = "MODE")]
    mode: Option<Mode>,

    /// Hash the contents of FILE. May be given more than once.
    #[arg(long = "file", value_name = "FILE", num_args = 1.., conflicts_with = "input")]
    files: Vec<PathBuf>,

    /// Verify the input against HEX instead of printing its digest.
    #[arg(short = 'c', long, value_name = "HEX")]
    check: Option<String>,

    /// Emit debug logging on stderr.
    #[arg(short = 'v', long)]
    verbose: bool,

    /// String to hash. Standard input is read when neither INPUT nor --file
    /// is given.
    input: Option<String>,
}

impl Args {
    fn selected_mode(&self) -> Mode {
        if self.fast {
            Mode::Fast
        } else if self.normal {
            Mode::Normal
        } else {
            self.mode.unwrap_or_default()
        }
    }
}

fn init_tracing(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("chronohash=debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

fn main() -> ExitCode {
    let args = Args::parse();
    init_tracing(args.verbose);

    match run(&args) {
        Ok(true) => ExitCode::SUCCESS,
        Ok(false) => ExitCode::from(1),
        Err(err) => {
            eprintln!("chronohash: {:#}", err);
            ExitCode::from(2)
        }
    }
}

/// Returns `Ok(false)` when a `--check` comparison fails.
fn run(args: &Args) -> Result<bool> {
    let hasher = ChronoHash::new(args.selected_mode());
    let expected = args
        .check
        .as_deref()
        .map(|hex| Digest::from_hex(hex.trim()).context("invalid --check digest"))
        .transpose()?;

    if !args.files.is_empty() {
        let mut all_ok = true;
        for path in &args.files {
            let digest = hasher
                .digest_file(path)
                .with_context(|| format!("cannot hash {}", path.display()))?;
            all_ok &= report(digest, expected, Some(path.display().to_string()));
        }
        return Ok(all_ok);
    }

    let digest = match &args.input {
        Some(text) => hasher.digest(text.as_bytes()),
        None => {
            let mut buffer = Vec::new();
            io::stdin()
                .read_to_end(&mut buffer)
                .context("failed to read standard input")?;
            hasher.digest(&buffer)
        }
    };
    Ok(report(digest, expected, None))
}

/// Prints a digest line (or check result) and returns whether it passed.
fn report(digest: Digest, expected: Option<Digest>, label: Option<String>) -> bool {
    match (expected, label) {
        (None, None) => {
            println!("{}", digest);
            true
        }
        (None, Some(label)) => {
            println!("{}  {}", digest, label);
            true
        }
        (Some(expected), label) => {
            let ok = digest == expected;
            let name = label.unwrap_or_else(|| "-".to_string());
            println!("{}: {}", name, if ok { "OK" } else { "FAILED" });
            ok
        }
    }
}
