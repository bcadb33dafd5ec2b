//! JSON output types for machine-readable CLI output.

use serde::{Deserialize, Serialize};
use wavhead::WaveFormatParameters;

/// Error codes for CLI operations.
///
/// Header errors pass through their own `WAVHEAD_XXX` codes.
pub mod error_codes {
    /// File could not be read
    pub const FILE_READ: &str = "CLI_001";
}

/// A structured error in JSON output.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct JsonError {
    /// Stable error code (e.g., "CLI_001", "WAVHEAD_002")
    pub code: String,
    /// Human-readable error message
    pub message: String,
}

impl JsonError {
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
        }
    }
}

/// Output of the `inspect` command.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct InspectOutput {
    /// Whether the header decoded successfully
    pub success: bool,
    /// Inspected file
    pub file: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub header: Option<InspectedHeader>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<JsonError>,
}

/// Decoded header fields plus facts about the payload on disk.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct InspectedHeader {
    /// Parameters stored in the header
    pub params: WaveFormatParameters,
    pub riff_size: u32,
    pub block_align: u16,
    pub byte_rate: u32,
    /// Bytes actually present after the header
    pub payload_bytes: u64,
    /// Whether the declared data size matches `payload_bytes`
    pub sizes_consistent: bool,
    /// Playback length implied by the declared data size
    pub duration_seconds: f64,
    /// BLAKE3 hash of the declared payload bytes present in the file
    pub payload_hash: String,
}
