//! WAVE format parameters.

use serde::{Deserialize, Serialize};

use crate::error::{HeaderError, HeaderResult};

/// Default sample rate in Hz.
pub const DEFAULT_SAMPLE_RATE: u32 = 43_200;

/// Format tag for uncompressed PCM.
pub const PCM_FORMAT_TAG: u16 = 1;

/// Channel count for mono audio.
pub const MONO: u16 = 1;

/// Channel count for stereo audio.
pub const STEREO: u16 = 2;

/// Bytes of header that follow the RIFF size field (`"WAVE"` through `nDataBytes`).
pub const RIFF_SIZE_BASE: u32 = 36;

/// Format parameters encoded into a canonical WAVE header.
///
/// Every field has a documented default, so a partially filled JSON object
/// deserializes to a complete value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct WaveFormatParameters {
    /// Sample rate in Hz.
    pub sample_rate: u32,
    /// Number of channels (1 = mono, 2 = stereo).
    pub channels: u16,
    /// Bits per sample, a positive multiple of 8.
    pub bits_per_sample: u16,
    /// Compression code (1 = PCM).
    pub format_tag: u16,
    /// Length in bytes of the audio payload following the header.
    ///
    /// May be 0 when the length is not yet known and gets patched later.
    pub data_byte_count: u32,
}

impl Default for WaveFormatParameters {
    fn default() -> Self {
        Self {
            sample_rate: DEFAULT_SAMPLE_RATE,
            channels: MONO,
            bits_per_sample: 8,
            format_tag: PCM_FORMAT_TAG,
            data_byte_count: 0,
        }
    }
}

impl WaveFormatParameters {
    /// Creates mono 8-bit PCM parameters.
    pub fn mono(sample_rate: u32) -> Self {
        Self {
            sample_rate,
            ..Self::default()
        }
    }

    /// Creates stereo 16-bit PCM parameters.
    pub fn stereo(sample_rate: u32) -> Self {
        Self {
            sample_rate,
            channels: STEREO,
            bits_per_sample: 16,
            ..Self::default()
        }
    }

    pub fn with_sample_rate(mut self, sample_rate: u32) -> Self {
        self.sample_rate = sample_rate;
        self
    }

    pub fn with_channels(mut self, channels: u16) -> Self {
        self.channels = channels;
        self
    }

    pub fn with_bits_per_sample(mut self, bits_per_sample: u16) -> Self {
        self.bits_per_sample = bits_per_sample;
        self
    }

    pub fn with_format_tag(mut self, format_tag: u16) -> Self {
        self.format_tag = format_tag;
        self
    }

    pub fn with_data_byte_count(mut self, data_byte_count: u32) -> Self {
        self.data_byte_count = data_byte_count;
        self
    }

    /// Bytes per sample, per channel.
    pub fn bytes_per_sample(&self) -> u16 {
        self.bits_per_sample / 8
    }

    /// Bytes per sample frame across all channels.
    pub fn block_align(&self) -> u16 {
        self.channels.saturating_mul(self.bytes_per_sample())
    }

    /// Average bytes of audio per second.
    pub fn byte_rate(&self) -> u32 {
        self.sample_rate
            .saturating_mul(u32::from(self.block_align()))
    }

    /// Value of the RIFF size field: everything after it in the file.
    pub fn riff_size(&self) -> u32 {
        RIFF_SIZE_BASE.saturating_add(self.data_byte_count)
    }

    /// Checks that the parameters can be expressed in a canonical PCM header.
    ///
    /// The derived fields are also checked, so a validated value never
    /// saturates in [`block_align`](Self::block_align),
    /// [`byte_rate`](Self::byte_rate) or [`riff_size`](Self::riff_size).
    pub fn validate(&self) -> HeaderResult<()> {
        if self.channels != MONO && self.channels != STEREO {
            return Err(HeaderError::invalid_param(
                "channels",
                format!("must be 1 (mono) or 2 (stereo), got {}", self.channels),
            ));
        }

        if self.bits_per_sample == 0 || self.bits_per_sample % 8 != 0 {
            return Err(HeaderError::invalid_param(
                "bits_per_sample",
                format!(
                    "must be a positive multiple of 8, got {}",
                    self.bits_per_sample
                ),
            ));
        }

        if self.sample_rate == 0 {
            return Err(HeaderError::invalid_param(
                "sample_rate",
                "must be greater than 0",
            ));
        }

        if self.format_tag == 0 {
            return Err(HeaderError::invalid_param(
                "format_tag",
                "must be non-zero (1 = PCM)",
            ));
        }

        // channels <= 2 and bits <= 65528 keep block_align within u16
        let block_align = u32::from(self.channels) * u32::from(self.bytes_per_sample());
        if self.sample_rate.checked_mul(block_align).is_none() {
            return Err(HeaderError::invalid_param(
                "sample_rate",
                format!(
                    "byte rate {} x {} overflows 32 bits",
                    self.sample_rate, block_align
                ),
            ));
        }

        check_data_byte_count(self.data_byte_count)
    }
}

/// Checks that a payload length leaves room for the RIFF size field.
pub(crate) fn check_data_byte_count(data_byte_count: u32) -> HeaderResult<()> {
    if RIFF_SIZE_BASE.checked_add(data_byte_count).is_none() {
        return Err(HeaderError::invalid_param(
            "data_byte_count",
            format!(
                "must be at most {}, got {}",
                u32::MAX - RIFF_SIZE_BASE,
                data_byte_count
            ),
        ));
    }
    Ok(())
}
