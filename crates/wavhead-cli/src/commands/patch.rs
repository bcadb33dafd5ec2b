//! Patch command implementation
//!
//! Rewrites the RIFF and data size fields of an existing `.wav` file from its
//! actual length.

use anyhow::{Context, Result};
use colored::Colorize;
use std::fs::OpenOptions;
use std::process::ExitCode;

/// Run the patch command
///
/// # Arguments
/// * `input` - `.wav` file to patch in place
///
/// # Returns
/// Exit code: 0 on success
pub fn run(input: &str) -> Result<ExitCode> {
    let mut file = OpenOptions::new()
        .read(true)
        .write(true)
        .open(input)
        .with_context(|| format!("Failed to open file: {}", input))?;

    let data_bytes = wavhead::patch_file_sizes(&mut file)
        .with_context(|| format!("Failed to patch header: {}", input))?;

    println!(
        "{} {} (RIFF size {}, data size {})",
        "ok".green(),
        input,
        data_bytes + 36,
        data_bytes
    );

    Ok(ExitCode::SUCCESS)
}
