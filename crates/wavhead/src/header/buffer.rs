//! Owned 44-byte header buffer.

use byteorder::{ByteOrder, LittleEndian};

use super::layout::*;
use crate::error::HeaderResult;

/// A complete canonical WAVE header.
///
/// The length is fixed by the type, so a `HeaderBuffer` is always exactly
/// [`HEADER_LEN`] bytes. Values are produced by [`encode`](super::encode)
/// and are owned by the caller.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct HeaderBuffer([u8; HEADER_LEN]);

impl HeaderBuffer {
    pub(crate) fn from_raw(bytes: [u8; HEADER_LEN]) -> Self {
        Self(bytes)
    }

    /// Returns the header bytes.
    pub fn as_bytes(&self) -> &[u8; HEADER_LEN] {
        &self.0
    }

    /// Consumes the buffer and returns the header bytes.
    pub fn into_bytes(self) -> [u8; HEADER_LEN] {
        self.0
    }

    /// Value of the RIFF chunk size field (offset 4).
    pub fn riff_size(&self) -> u32 {
        LittleEndian::read_u32(&self.0[RIFF_SIZE_OFFSET..])
    }

    pub fn format_tag(&self) -> u16 {
        LittleEndian::read_u16(&self.0[FORMAT_TAG_OFFSET..])
    }

    pub fn channels(&self) -> u16 {
        LittleEndian::read_u16(&self.0[CHANNELS_OFFSET..])
    }

    pub fn sample_rate(&self) -> u32 {
        LittleEndian::read_u32(&self.0[SAMPLE_RATE_OFFSET..])
    }

    pub fn byte_rate(&self) -> u32 {
        LittleEndian::read_u32(&self.0[BYTE_RATE_OFFSET..])
    }

    pub fn block_align(&self) -> u16 {
        LittleEndian::read_u16(&self.0[BLOCK_ALIGN_OFFSET..])
    }

    pub fn bits_per_sample(&self) -> u16 {
        LittleEndian::read_u16(&self.0[BITS_PER_SAMPLE_OFFSET..])
    }

    /// Value of the data chunk size field (offset 40).
    pub fn data_byte_count(&self) -> u32 {
        LittleEndian::read_u32(&self.0[DATA_SIZE_OFFSET..])
    }

    /// Rewrites the two size fields for a payload of `data_byte_count` bytes.
    ///
    /// Only bytes 4..8 and 40..44 change.
    pub fn patch_sizes(&mut self, data_byte_count: u32) -> HeaderResult<()> {
        super::patch_sizes(&mut self.0, data_byte_count)
    }
}

impl AsRef<[u8]> for HeaderBuffer {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

impl From<HeaderBuffer> for [u8; HEADER_LEN] {
    fn from(header: HeaderBuffer) -> Self {
        header.0
    }
}

impl From<HeaderBuffer> for Vec<u8> {
    fn from(header: HeaderBuffer) -> Self {
        header.0.to_vec()
    }
}
