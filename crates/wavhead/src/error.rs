//! Error types for header encoding and patching.

use thiserror::Error;

/// Result type for header operations.
pub type HeaderResult<T> = Result<T, HeaderError>;

/// Errors that can occur while encoding, decoding or patching a WAVE header.
#[derive(Debug, Error)]
pub enum HeaderError {
    /// A format parameter is outside the range the canonical header can express.
    #[error("invalid parameter '{name}': {message}")]
    InvalidParameter {
        /// Parameter name.
        name: String,
        /// Error message.
        message: String,
    },

    /// Bytes handed to the decoder are not a canonical 44-byte PCM header.
    #[error("malformed header at byte {offset}: {message}")]
    Malformed {
        /// Byte offset of the offending field.
        offset: usize,
        /// Error message.
        message: String,
    },

    /// I/O error from a writer helper.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl HeaderError {
    /// Creates an invalid parameter error.
    pub fn invalid_param(name: impl Into<String>, message: impl Into<String>) -> Self {
        Self::InvalidParameter {
            name: name.into(),
            message: message.into(),
        }
    }

    /// Creates a malformed header error.
    pub fn malformed(offset: usize, message: impl Into<String>) -> Self {
        Self::Malformed {
            offset,
            message: message.into(),
        }
    }

    /// Stable error code, suitable for machine-readable output.
    pub fn code(&self) -> &'static str {
        match self {
            HeaderError::InvalidParameter { .. } => "WAVHEAD_001",
            HeaderError::Malformed { .. } => "WAVHEAD_002",
            HeaderError::Io(_) => "WAVHEAD_003",
        }
    }
}
