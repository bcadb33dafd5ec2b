//! wavhead CLI - Command-line interface for canonical WAVE headers
//!
//! This binary writes 44-byte PCM headers, wraps raw payloads into `.wav`
//! files, and inspects or repairs the size fields of existing files.

use clap::{Parser, Subcommand};
use std::process::ExitCode;

use wavhead_cli::commands;
use wavhead_cli::input::FormatArgs;

/// wavhead - Canonical RIFF/WAVE header tool
#[derive(Parser)]
#[command(name = "wavhead")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Write a bare 44-byte header
    Header {
        #[command(flatten)]
        format: FormatArgs,

        /// Payload length to record (default: 0, patch later)
        #[arg(long)]
        data_bytes: Option<u32>,

        /// Output file path, or `-` for stdout
        #[arg(short, long)]
        out: String,
    },

    /// Prepend a header to a raw PCM payload file
    Wrap {
        #[command(flatten)]
        format: FormatArgs,

        /// Raw PCM payload file
        #[arg(short, long)]
        input: String,

        /// Output .wav path
        #[arg(short, long)]
        out: String,
    },

    /// Decode and print the header of a .wav file
    Inspect {
        /// Path to the .wav file
        #[arg(short, long)]
        input: String,

        /// Output machine-readable JSON (no colored output)
        #[arg(long)]
        json: bool,
    },

    /// Fix the size fields of a .wav file from its length
    Patch {
        /// Path to the .wav file, modified in place
        #[arg(short, long)]
        input: String,
    },
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Header {
            format,
            data_bytes,
            out,
        } => commands::header::run(&format, data_bytes, &out),
        Commands::Wrap { format, input, out } => commands::wrap::run(&format, &input, &out),
        Commands::Inspect { input, json } => commands::inspect::run(&input, json),
        Commands::Patch { input } => commands::patch::run(&input),
    };

    match result {
        Ok(code) => code,
        Err(e) => {
            eprintln!("{}: {:#}", colored::Colorize::red("error"), e);
            ExitCode::from(1)
        }
    }
}
