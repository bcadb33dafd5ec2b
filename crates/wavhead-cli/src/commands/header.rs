//! Header command implementation
//!
//! Encodes format parameters and writes the bare 44-byte header.

use anyhow::{Context, Result};
use colored::Colorize;
use std::fs;
use std::io::{self, Write};
use std::process::ExitCode;

use crate::input::FormatArgs;

/// Run the header command
///
/// # Arguments
/// * `format` - Format flags and optional config file
/// * `data_bytes` - Payload length to record, if already known
/// * `out` - Output path, or `-` for stdout
///
/// # Returns
/// Exit code: 0 on success
pub fn run(format: &FormatArgs, data_bytes: Option<u32>, out: &str) -> Result<ExitCode> {
    let mut params = format.resolve()?;
    if let Some(data_bytes) = data_bytes {
        params.data_byte_count = data_bytes;
    }

    let header = wavhead::encode(&params)?;

    if out == "-" {
        let mut stdout = io::stdout().lock();
        stdout.write_all(header.as_bytes())?;
        stdout.flush()?;
        return Ok(ExitCode::SUCCESS);
    }

    fs::write(out, header.as_bytes())
        .with_context(|| format!("Failed to write header: {}", out))?;

    println!(
        "{} {} ({} Hz, {} ch, {}-bit, {} data bytes)",
        "ok".green(),
        out,
        params.sample_rate,
        params.channels,
        params.bits_per_sample,
        params.data_byte_count
    );

    Ok(ExitCode::SUCCESS)
}
