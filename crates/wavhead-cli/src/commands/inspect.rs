//! Inspect command implementation
//!
//! Decodes the header of an existing `.wav` file and reports its fields, the
//! payload actually present, and a hash of that payload.

use anyhow::{Context, Result};
use colored::Colorize;
use std::fs;
use std::process::ExitCode;

use wavhead::{HeaderResult, HEADER_LEN};

use super::json_output::{error_codes, InspectOutput, InspectedHeader, JsonError};

/// Run the inspect command
///
/// # Arguments
/// * `input` - Path to the `.wav` file
/// * `json_output` - Whether to output machine-readable JSON
///
/// # Returns
/// Exit code: 0 if the header decodes, 1 otherwise
pub fn run(input: &str, json_output: bool) -> Result<ExitCode> {
    if json_output {
        run_json(input)
    } else {
        run_human(input)
    }
}

/// Decodes a header and summarizes the payload that follows it.
pub fn inspect_bytes(bytes: &[u8]) -> HeaderResult<InspectedHeader> {
    let params = wavhead::decode(bytes)?;

    let present = &bytes[HEADER_LEN..];
    let declared = params.data_byte_count as usize;
    let payload = &present[..declared.min(present.len())];

    Ok(InspectedHeader {
        params,
        riff_size: params.riff_size(),
        block_align: params.block_align(),
        byte_rate: params.byte_rate(),
        payload_bytes: present.len() as u64,
        sizes_consistent: declared == present.len(),
        duration_seconds: f64::from(params.data_byte_count) / f64::from(params.byte_rate()),
        payload_hash: blake3::hash(payload).to_hex().to_string(),
    })
}

/// Run inspect with human-readable (colored) output
fn run_human(input: &str) -> Result<ExitCode> {
    let bytes = fs::read(input).with_context(|| format!("Failed to read file: {}", input))?;
    let info =
        inspect_bytes(&bytes).with_context(|| format!("Failed to decode header: {}", input))?;
    let params = &info.params;

    println!("{}", "WAVE header:".cyan().bold());
    println!("  {} {}", "File:".dimmed(), input);
    println!("  {} {}", "Format tag:".dimmed(), params.format_tag);
    println!("  {} {}", "Channels:".dimmed(), params.channels);
    println!("  {} {} Hz", "Sample rate:".dimmed(), params.sample_rate);
    println!("  {} {}", "Bits per sample:".dimmed(), params.bits_per_sample);
    println!("  {} {}", "Block align:".dimmed(), info.block_align);
    println!("  {} {} bytes/s", "Byte rate:".dimmed(), info.byte_rate);
    println!("  {} {}", "RIFF size:".dimmed(), info.riff_size);
    println!("  {} {}", "Data size:".dimmed(), params.data_byte_count);
    println!("  {} {:.3} s", "Duration:".dimmed(), info.duration_seconds);
    println!("  {} {}", "Payload hash:".dimmed(), &info.payload_hash[..16]);

    if info.sizes_consistent {
        println!("\n{}", "Size fields match the file length.".green());
    } else {
        println!(
            "\n{} declared {} data bytes, found {} (run `wavhead patch` to fix)",
            "!!".yellow(),
            params.data_byte_count,
            info.payload_bytes
        );
    }

    Ok(ExitCode::SUCCESS)
}

/// Run inspect with machine-readable JSON output
fn run_json(input: &str) -> Result<ExitCode> {
    let (output, code) = match fs::read(input) {
        Err(e) => (
            failure(
                input,
                JsonError::new(
                    error_codes::FILE_READ,
                    format!("Failed to read file: {}", e),
                ),
            ),
            ExitCode::from(1),
        ),
        Ok(bytes) => match inspect_bytes(&bytes) {
            Ok(header) => (
                InspectOutput {
                    success: true,
                    file: input.to_string(),
                    header: Some(header),
                    error: None,
                },
                ExitCode::SUCCESS,
            ),
            Err(e) => (
                failure(input, JsonError::new(e.code(), e.to_string())),
                ExitCode::from(1),
            ),
        },
    };

    println!("{}", serde_json::to_string_pretty(&output)?);
    Ok(code)
}

fn failure(input: &str, error: JsonError) -> InspectOutput {
    InspectOutput {
        success: false,
        file: input.to_string(),
        header: None,
        error: Some(error),
    }
}
