//! Format parameters from command-line flags and JSON config files.
//!
//! Values are merged in this order: built-in defaults, then the config file,
//! then explicit flags.

use anyhow::{Context, Result};
use clap::Args;
use std::fs;
use std::path::Path;
use wavhead::WaveFormatParameters;

/// Format flags shared by every command that encodes a header.
#[derive(Debug, Clone, Default, Args)]
pub struct FormatArgs {
    /// JSON file with format parameters (any subset of fields)
    #[arg(long)]
    pub config: Option<String>,

    /// Sample rate in Hz (default: 43200)
    #[arg(long)]
    pub sample_rate: Option<u32>,

    /// Channel count, 1 or 2 (default: 1)
    #[arg(long)]
    pub channels: Option<u16>,

    /// Bits per sample, a multiple of 8 (default: 8)
    #[arg(long)]
    pub bits: Option<u16>,

    /// Format tag, 1 = PCM (default: 1)
    #[arg(long)]
    pub format_tag: Option<u16>,
}

impl FormatArgs {
    /// Resolves the final parameters. Validation is left to the encoder.
    pub fn resolve(&self) -> Result<WaveFormatParameters> {
        let mut params = match &self.config {
            Some(path) => load_params(Path::new(path))?,
            None => WaveFormatParameters::default(),
        };

        if let Some(sample_rate) = self.sample_rate {
            params.sample_rate = sample_rate;
        }
        if let Some(channels) = self.channels {
            params.channels = channels;
        }
        if let Some(bits) = self.bits {
            params.bits_per_sample = bits;
        }
        if let Some(format_tag) = self.format_tag {
            params.format_tag = format_tag;
        }

        Ok(params)
    }
}

/// Loads format parameters from a JSON file.
pub fn load_params(path: &Path) -> Result<WaveFormatParameters> {
    let text = fs::read_to_string(path)
        .with_context(|| format!("Failed to read config file: {}", path.display()))?;
    serde_json::from_str(&text)
        .with_context(|| format!("Failed to parse config file: {}", path.display()))
}
