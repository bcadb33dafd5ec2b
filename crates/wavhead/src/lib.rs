//! Canonical RIFF/WAVE header encoder.
//!
//! This crate builds the fixed 44-byte preamble of an uncompressed PCM `.wav`
//! file and keeps its two size fields patchable once the payload length is
//! known.
//!
//! # Example
//!
//! ```
//! use wavhead::{encode, WaveFormatParameters};
//!
//! let params = WaveFormatParameters::stereo(44100).with_data_byte_count(1000);
//! let mut header = encode(&params)?;
//! assert_eq!(header.block_align(), 4);
//!
//! // Payload turned out longer than expected
//! header.patch_sizes(4000)?;
//! assert_eq!(header.riff_size(), 4036);
//! # Ok::<(), wavhead::HeaderError>(())
//! ```
//!
//! # Crate Structure
//!
//! - [`format`] - Input parameters, defaults and validation
//! - [`header`] - Encoding, decoding and size patching of the 44-byte header
//! - [`writer`] - Helpers that write a header ahead of a streamed payload

pub mod error;
pub mod format;
pub mod header;
pub mod writer;

// Re-export main types at crate root
pub use error::{HeaderError, HeaderResult};
pub use format::{WaveFormatParameters, DEFAULT_SAMPLE_RATE, MONO, PCM_FORMAT_TAG, STEREO};
pub use header::{decode, encode, patch_sizes, HeaderBuffer, HEADER_LEN};
pub use writer::{patch_file_sizes, write_header, WavStreamWriter};
