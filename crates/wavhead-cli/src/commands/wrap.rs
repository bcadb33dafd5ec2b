//! Wrap command implementation
//!
//! Streams a raw PCM payload behind a freshly encoded header and patches the
//! size fields once the payload length is known.

use anyhow::{Context, Result};
use colored::Colorize;
use std::fs::{self, File};
use std::io::{self, BufReader, BufWriter, Write};
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use wavhead::WavStreamWriter;

use crate::input::FormatArgs;

/// Run the wrap command
///
/// # Arguments
/// * `format` - Format flags and optional config file
/// * `input` - Raw PCM payload file
/// * `out` - Output `.wav` path
///
/// # Returns
/// Exit code: 0 on success
pub fn run(format: &FormatArgs, input: &str, out: &str) -> Result<ExitCode> {
    let params = format.resolve()?;
    // Reject bad parameters before the output file is created or truncated
    params.validate()?;

    let in_path = Path::new(input);
    let out_path = Path::new(out);
    if same_file(in_path, out_path)? {
        anyhow::bail!("Input and output must be different files: {} and {}", input, out);
    }

    let reader = File::open(in_path)
        .with_context(|| format!("Failed to open payload: {}", input))?;
    let mut reader = BufReader::new(reader);

    let file = File::create(out_path)
        .with_context(|| format!("Failed to create output: {}", out))?;
    let mut writer = WavStreamWriter::new(BufWriter::new(file), params)?;

    io::copy(&mut reader, &mut writer)
        .with_context(|| format!("Failed to stream payload from {}", input))?;

    let (mut file, params) = writer.finish()?;
    file.flush()?;

    let block_align = u32::from(params.block_align());
    if params.data_byte_count % block_align != 0 {
        println!(
            "  {} payload of {} bytes is not a whole number of {}-byte frames",
            "!!".yellow(),
            params.data_byte_count,
            block_align
        );
    }

    println!(
        "{} {} ({} data bytes, {:.3} s)",
        "ok".green(),
        out,
        params.data_byte_count,
        f64::from(params.data_byte_count) / f64::from(params.byte_rate())
    );

    Ok(ExitCode::SUCCESS)
}

/// Whether `output` names the same file as the existing `input`.
///
/// Paths are compared after resolving `..`, `.` and symlinks. An output that
/// does not exist yet is resolved through its parent directory.
fn same_file(input: &Path, output: &Path) -> Result<bool> {
    let input = fs::canonicalize(input)
        .with_context(|| format!("Failed to open payload: {}", input.display()))?;

    Ok(resolve_output(output).is_some_and(|output| output == input))
}

fn resolve_output(output: &Path) -> Option<PathBuf> {
    if let Ok(path) = fs::canonicalize(output) {
        return Some(path);
    }

    let name = output.file_name()?;
    let parent = match output.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    fs::canonicalize(parent).ok().map(|dir| dir.join(name))
}
