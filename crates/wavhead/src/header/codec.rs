//! Header encoding, decoding and size patching.

use byteorder::{ByteOrder, LittleEndian};

use super::buffer::HeaderBuffer;
use super::layout::*;
use crate::error::{HeaderError, HeaderResult};
use crate::format::{check_data_byte_count, WaveFormatParameters, RIFF_SIZE_BASE};

/// Encodes format parameters into a canonical 44-byte header.
///
/// The output is a pure function of `params`. Parameters are validated
/// first; on error no buffer is produced.
///
/// # Example
///
/// ```
/// use wavhead::{encode, WaveFormatParameters};
///
/// let header = encode(&WaveFormatParameters::default()).unwrap();
/// assert_eq!(&header.as_bytes()[0..4], b"RIFF");
/// assert_eq!(header.riff_size(), 36);
/// ```
pub fn encode(params: &WaveFormatParameters) -> HeaderResult<HeaderBuffer> {
    params.validate()?;

    let mut bytes = [0u8; HEADER_LEN];

    // RIFF chunk descriptor
    bytes[RIFF_ID_OFFSET..RIFF_ID_OFFSET + 4].copy_from_slice(RIFF_ID);
    LittleEndian::write_u32(&mut bytes[RIFF_SIZE_OFFSET..], params.riff_size());
    bytes[WAVE_ID_OFFSET..WAVE_ID_OFFSET + 4].copy_from_slice(WAVE_ID);

    // fmt chunk
    bytes[FMT_ID_OFFSET..FMT_ID_OFFSET + 4].copy_from_slice(FMT_ID);
    LittleEndian::write_u32(&mut bytes[FMT_SIZE_OFFSET..], FMT_CHUNK_SIZE);
    LittleEndian::write_u16(&mut bytes[FORMAT_TAG_OFFSET..], params.format_tag);
    LittleEndian::write_u16(&mut bytes[CHANNELS_OFFSET..], params.channels);
    LittleEndian::write_u32(&mut bytes[SAMPLE_RATE_OFFSET..], params.sample_rate);
    LittleEndian::write_u32(&mut bytes[BYTE_RATE_OFFSET..], params.byte_rate());
    LittleEndian::write_u16(&mut bytes[BLOCK_ALIGN_OFFSET..], params.block_align());
    LittleEndian::write_u16(&mut bytes[BITS_PER_SAMPLE_OFFSET..], params.bits_per_sample);

    // data chunk header; the payload follows the header
    bytes[DATA_ID_OFFSET..DATA_ID_OFFSET + 4].copy_from_slice(DATA_ID);
    LittleEndian::write_u32(&mut bytes[DATA_SIZE_OFFSET..], params.data_byte_count);

    Ok(HeaderBuffer::from_raw(bytes))
}

/// Rewrites the RIFF and data size fields of a header in place.
///
/// `bytes` must begin with a header; it may be a bare header or a whole
/// in-memory `.wav` file. Only bytes 4..8 and 40..44 are touched.
pub fn patch_sizes(bytes: &mut [u8], data_byte_count: u32) -> HeaderResult<()> {
    if bytes.len() < HEADER_LEN {
        return Err(HeaderError::invalid_param(
            "buffer",
            format!(
                "must hold at least {} bytes, got {}",
                HEADER_LEN,
                bytes.len()
            ),
        ));
    }
    check_data_byte_count(data_byte_count)?;

    LittleEndian::write_u32(
        &mut bytes[RIFF_SIZE_OFFSET..],
        RIFF_SIZE_BASE + data_byte_count,
    );
    LittleEndian::write_u32(&mut bytes[DATA_SIZE_OFFSET..], data_byte_count);

    Ok(())
}

/// Decodes the parameters stored in a canonical header.
///
/// Trailing bytes after the header are ignored. Derived fields must agree
/// with the fields they are computed from, so any header accepted here
/// re-encodes to the same 44 bytes. Stored fields that [`encode`] would
/// reject are reported as [`HeaderError::Malformed`] at their offset.
pub fn decode(bytes: &[u8]) -> HeaderResult<WaveFormatParameters> {
    if bytes.len() < HEADER_LEN {
        return Err(HeaderError::malformed(
            bytes.len(),
            format!(
                "header too short: {} bytes (minimum {} required)",
                bytes.len(),
                HEADER_LEN
            ),
        ));
    }

    expect_tag(bytes, RIFF_ID_OFFSET, RIFF_ID)?;
    expect_tag(bytes, WAVE_ID_OFFSET, WAVE_ID)?;
    expect_tag(bytes, FMT_ID_OFFSET, FMT_ID)?;
    expect_tag(bytes, DATA_ID_OFFSET, DATA_ID)?;

    let fmt_size = LittleEndian::read_u32(&bytes[FMT_SIZE_OFFSET..]);
    if fmt_size != FMT_CHUNK_SIZE {
        return Err(HeaderError::malformed(
            FMT_SIZE_OFFSET,
            format!("fmt chunk size must be {}, got {}", FMT_CHUNK_SIZE, fmt_size),
        ));
    }

    let params = WaveFormatParameters {
        format_tag: LittleEndian::read_u16(&bytes[FORMAT_TAG_OFFSET..]),
        channels: LittleEndian::read_u16(&bytes[CHANNELS_OFFSET..]),
        sample_rate: LittleEndian::read_u32(&bytes[SAMPLE_RATE_OFFSET..]),
        bits_per_sample: LittleEndian::read_u16(&bytes[BITS_PER_SAMPLE_OFFSET..]),
        data_byte_count: LittleEndian::read_u32(&bytes[DATA_SIZE_OFFSET..]),
    };
    params.validate().map_err(stored_field_error)?;

    expect_field(
        BLOCK_ALIGN_OFFSET,
        "block align",
        u32::from(LittleEndian::read_u16(&bytes[BLOCK_ALIGN_OFFSET..])),
        u32::from(params.block_align()),
    )?;
    expect_field(
        BYTE_RATE_OFFSET,
        "byte rate",
        LittleEndian::read_u32(&bytes[BYTE_RATE_OFFSET..]),
        params.byte_rate(),
    )?;
    expect_field(
        RIFF_SIZE_OFFSET,
        "RIFF size",
        LittleEndian::read_u32(&bytes[RIFF_SIZE_OFFSET..]),
        params.riff_size(),
    )?;

    Ok(params)
}

/// Reports a stored field that fails validation at that field's offset.
fn stored_field_error(err: HeaderError) -> HeaderError {
    match err {
        HeaderError::InvalidParameter { name, message } => {
            let offset = match name.as_str() {
                "channels" => CHANNELS_OFFSET,
                "bits_per_sample" => BITS_PER_SAMPLE_OFFSET,
                "sample_rate" => SAMPLE_RATE_OFFSET,
                "format_tag" => FORMAT_TAG_OFFSET,
                _ => DATA_SIZE_OFFSET,
            };
            HeaderError::malformed(offset, format!("{}: {}", name, message))
        }
        other => other,
    }
}

fn expect_tag(bytes: &[u8], offset: usize, tag: &[u8; 4]) -> HeaderResult<()> {
    let found = &bytes[offset..offset + 4];
    if found != tag {
        return Err(HeaderError::malformed(
            offset,
            format!(
                "expected '{}', got {:?}",
                String::from_utf8_lossy(tag),
                found
            ),
        ));
    }
    Ok(())
}

fn expect_field(offset: usize, name: &str, found: u32, expected: u32) -> HeaderResult<()> {
    if found != expected {
        return Err(HeaderError::malformed(
            offset,
            format!("{} is {}, expected {}", name, found, expected),
        ));
    }
    Ok(())
}
