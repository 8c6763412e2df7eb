//! wavlit CLI: convert a PCM WAV file into C source embedding its samples.
//!
//! Usage:
//!   wavlit ring.wav ring.c
//!   wavlit ring.wav ring.c --preview-wav ring-mono.wav
//!   wavlit --probe ring.wav

use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::{ArgAction, Parser};
use tracing::debug;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};
use wl_master::Transcoder;

/// Downmix a PCM WAV file to mono 16-bit and emit it as a C array
#[derive(Parser, Debug)]
#[command(name = "wavlit")]
#[command(version)]
struct Cli {
    /// Input WAV file
    input: PathBuf,

    /// Output C source file
    #[arg(required_unless_present = "probe")]
    output: Option<PathBuf>,

    /// Also write the converted samples as a mono 16-bit WAV file
    #[arg(long, value_name = "PATH")]
    preview_wav: Option<PathBuf>,

    /// Print the input format and exit without writing anything
    #[arg(long, conflicts_with_all = ["output", "preview_wav"])]
    probe: bool,

    /// Log more (-v info, -vv debug); RUST_LOG overrides
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,

    /// Log nothing but the final error
    #[arg(short, long, conflicts_with = "verbose")]
    quiet: bool,
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.verbose, cli.quiet);

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {:#}", e);
            ExitCode::FAILURE
        }
    }
}

fn run(cli: &Cli) -> Result<()> {
    debug!(?cli, "arguments");
    let transcoder = Transcoder::open(&cli.input)
        .with_context(|| format!("cannot convert {}", cli.input.display()))?;

    if cli.probe {
        print!("{}", transcoder.probe());
        return Ok(());
    }

    // Validation is complete; nothing below can fail on the input's content.
    transcoder.commit(cli.output.as_deref(), cli.preview_wav.as_deref())?;
    Ok(())
}

fn init_tracing(verbose: u8, quiet: bool) {
    let default = match (quiet, verbose) {
        (true, _) => "off",
        (false, 0) => "warn",
        (false, 1) => "info",
        (false, _) => "debug",
    };
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default)))
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false),
        )
        .init();
}
