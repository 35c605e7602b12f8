//! runpress CLI — file/stdin wrapper around the rp-codec byte RLE codec.
//!
//! The codec itself only sees byte buffers; all file and pipe handling
//! lives here.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::fs;
use std::io::{self, Read, Write};
use std::path::PathBuf;

/// runpress - escape-coded byte run-length encoding
#[derive(Parser)]
#[command(name = "rp")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run-length encode a file (stdin if omitted)
    Encode {
        /// Input file
        input: Option<PathBuf>,

        /// Output file (stdout if omitted)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Print encode statistics as JSON to stderr
        #[arg(long)]
        stats: bool,
    },

    /// Decode a run-length encoded file (stdin if omitted)
    Decode {
        /// Input file
        input: Option<PathBuf>,

        /// Output file (stdout if omitted)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

fn read_input(path: Option<&PathBuf>) -> Result<Vec<u8>> {
    match path {
        Some(p) => fs::read(p).with_context(|| format!("reading {}", p.display())),
        None => {
            let mut buf = Vec::new();
            io::stdin().read_to_end(&mut buf).context("reading stdin")?;
            Ok(buf)
        }
    }
}

fn write_output(path: Option<&PathBuf>, data: &[u8]) -> Result<()> {
    match path {
        Some(p) => fs::write(p, data).with_context(|| format!("writing {}", p.display())),
        None => {
            let mut stdout = io::stdout().lock();
            stdout.write_all(data).context("writing stdout")?;
            stdout.flush().context("flushing stdout")
        }
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let default_filter = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(default_filter)),
        )
        .with_writer(io::stderr)
        .init();

    match cli.command {
        Commands::Encode {
            input,
            output,
            stats,
        } => {
            let data = read_input(input.as_ref())?;
            let mut sink = Vec::with_capacity(rp_codec::format::max_encoded_len(data.len()));
            let pass = rp_codec::encode_with_stats(&data, &mut sink)?;
            tracing::debug!(
                input_len = pass.input_len,
                output_len = pass.output_len,
                ratio = pass.ratio(),
                "encoded"
            );
            write_output(output.as_ref(), &sink)?;
            if stats {
                serde_json::to_writer_pretty(io::stderr(), &pass).context("writing stats")?;
                eprintln!();
            }
        }
        Commands::Decode { input, output } => {
            let data = read_input(input.as_ref())?;
            let mut sink = Vec::with_capacity(data.len());
            let decoded = rp_codec::decode(&data, &mut sink).context("decoding input")?;
            tracing::debug!(input_len = data.len(), decoded, "decoded");
            write_output(output.as_ref(), &sink)?;
        }
    }

    Ok(())
}
