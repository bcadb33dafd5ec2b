//! Byte offsets and fixed values of the canonical header.

/// Total header length in bytes.
pub const HEADER_LEN: usize = 44;

pub const RIFF_ID: &[u8; 4] = b"RIFF";
pub const WAVE_ID: &[u8; 4] = b"WAVE";
pub const FMT_ID: &[u8; 4] = b"fmt ";
pub const DATA_ID: &[u8; 4] = b"data";

/// Size of the PCM `fmt ` chunk body.
pub const FMT_CHUNK_SIZE: u32 = 16;

pub const RIFF_ID_OFFSET: usize = 0;
pub const RIFF_SIZE_OFFSET: usize = 4;
pub const WAVE_ID_OFFSET: usize = 8;
pub const FMT_ID_OFFSET: usize = 12;
pub const FMT_SIZE_OFFSET: usize = 16;
pub const FORMAT_TAG_OFFSET: usize = 20;
pub const CHANNELS_OFFSET: usize = 22;
pub const SAMPLE_RATE_OFFSET: usize = 24;
pub const BYTE_RATE_OFFSET: usize = 28;
pub const BLOCK_ALIGN_OFFSET: usize = 32;
pub const BITS_PER_SAMPLE_OFFSET: usize = 34;
pub const DATA_ID_OFFSET: usize = 36;
pub const DATA_SIZE_OFFSET: usize = 40;
