//! Tests for the header module.

use pretty_assertions::assert_eq;

use super::layout::*;
use super::{decode, encode, patch_sizes, HeaderBuffer};
use crate::error::HeaderError;
use crate::format::WaveFormatParameters;

const REFERENCE_HEADER: [u8; 44] = [
    0x52, 0x49, 0x46, 0x46, 0x24, 0x00, 0x00, 0x00, 0x57, 0x41, 0x56, 0x45, 0x66, 0x6D, 0x74, 0x20,
    0x10, 0x00, 0x00, 0x00, 0x01, 0x00, 0x01, 0x00, 0xC0, 0xA8, 0x00, 0x00, 0xC0, 0xA8, 0x00, 0x00,
    0x01, 0x00, 0x08, 0x00, 0x64, 0x61, 0x74, 0x61, 0x00, 0x00, 0x00, 0x00,
];

fn stereo_16() -> WaveFormatParameters {
    WaveFormatParameters {
        sample_rate: 43200,
        channels: 2,
        bits_per_sample: 16,
        format_tag: 1,
        data_byte_count: 1000,
    }
}

// =========================================================================
// Encoding
// =========================================================================

#[test]
fn test_encode_reference_header() {
    let header = encode(&WaveFormatParameters::default()).unwrap();
    assert_eq!(header.as_bytes(), &REFERENCE_HEADER);
}

#[test]
fn test_reference_header_rate_fields_match_43200() {
    let rate = 43200u32.to_le_bytes();
    assert_eq!(&REFERENCE_HEADER[SAMPLE_RATE_OFFSET..SAMPLE_RATE_OFFSET + 4], &rate);
    // mono 8-bit: byte rate equals sample rate
    assert_eq!(&REFERENCE_HEADER[BYTE_RATE_OFFSET..BYTE_RATE_OFFSET + 4], &rate);

    let header = encode(&WaveFormatParameters::default()).unwrap();
    assert_eq!(header.sample_rate(), 43200);
    assert_eq!(header.byte_rate(), 43200);
}

#[test]
fn test_encode_stereo_16_bit() {
    let header = encode(&stereo_16()).unwrap();
    assert_eq!(header.block_align(), 4);
    assert_eq!(header.byte_rate(), 172800);
    assert_eq!(header.riff_size(), 1036);
    assert_eq!(header.data_byte_count(), 1000);
    assert_eq!(header.channels(), 2);
    assert_eq!(header.bits_per_sample(), 16);
}

#[test]
fn test_encode_tags_at_fixed_offsets() {
    let header = encode(&stereo_16()).unwrap();
    let bytes = header.as_bytes();
    assert_eq!(&bytes[0..4], b"RIFF");
    assert_eq!(&bytes[8..12], b"WAVE");
    assert_eq!(&bytes[12..16], b"fmt ");
    assert_eq!(&bytes[36..40], b"data");
}

#[test]
fn test_encode_little_endian_fields() {
    let params = WaveFormatParameters::default()
        .with_sample_rate(0x0102_0304)
        .with_data_byte_count(0x0A0B_0C0D);
    let bytes = encode(&params).unwrap().into_bytes();
    assert_eq!(&bytes[24..28], &[0x04, 0x03, 0x02, 0x01]);
    assert_eq!(&bytes[40..44], &[0x0D, 0x0C, 0x0B, 0x0A]);
    // 36 + 0x0A0B0C0D
    assert_eq!(&bytes[4..8], &[0x31, 0x0C, 0x0B, 0x0A]);
}

#[test]
fn test_encode_preserves_non_pcm_format_tag() {
    let params = WaveFormatParameters::default()
        .with_format_tag(3)
        .with_bits_per_sample(32);
    let header = encode(&params).unwrap();
    assert_eq!(header.format_tag(), 3);
    assert_eq!(header.block_align(), 4);
}

#[test]
fn test_encode_is_deterministic() {
    let a = encode(&stereo_16()).unwrap();
    let b = encode(&stereo_16()).unwrap();
    assert_eq!(a, b);
}

#[test]
fn test_encode_invalid_parameters() {
    let base = WaveFormatParameters::default();
    for params in [
        base.with_channels(0),
        base.with_bits_per_sample(0),
        base.with_sample_rate(0),
        base.with_format_tag(0),
        base.with_channels(6),
        base.with_bits_per_sample(12),
    ] {
        assert!(
            matches!(encode(&params), Err(HeaderError::InvalidParameter { .. })),
            "{params:?} should be rejected"
        );
    }
}

#[test]
fn test_header_buffer_conversions() {
    let header = encode(&WaveFormatParameters::default()).unwrap();
    let as_vec: Vec<u8> = header.into();
    assert_eq!(as_vec.len(), HEADER_LEN);
    assert_eq!(header.as_ref(), &REFERENCE_HEADER[..]);
    let as_array: [u8; HEADER_LEN] = header.into();
    assert_eq!(as_array, REFERENCE_HEADER);
}

// =========================================================================
// Size patching
// =========================================================================

#[test]
fn test_patch_sizes_touches_only_size_fields() {
    let original = encode(&stereo_16()).unwrap();
    let mut patched: HeaderBuffer = original;
    patched.patch_sizes(123_456).unwrap();

    assert_eq!(patched.riff_size(), 36 + 123_456);
    assert_eq!(patched.data_byte_count(), 123_456);

    for (i, (a, b)) in original
        .as_bytes()
        .iter()
        .zip(patched.as_bytes())
        .enumerate()
    {
        if !(RIFF_SIZE_OFFSET..RIFF_SIZE_OFFSET + 4).contains(&i)
            && !(DATA_SIZE_OFFSET..DATA_SIZE_OFFSET + 4).contains(&i)
        {
            assert_eq!(a, b, "byte {i} changed");
        }
    }
}

#[test]
fn test_patch_sizes_matches_fresh_encode() {
    let mut header = encode(&WaveFormatParameters::default()).unwrap();
    header.patch_sizes(5000).unwrap();
    let fresh = encode(&WaveFormatParameters::default().with_data_byte_count(5000)).unwrap();
    assert_eq!(header, fresh);
}

#[test]
fn test_patch_sizes_on_whole_file() {
    let header = encode(&WaveFormatParameters::default()).unwrap();
    let mut file: Vec<u8> = header.into();
    file.extend_from_slice(&[0x80; 10]);

    patch_sizes(&mut file, 10).unwrap();

    assert_eq!(&file[4..8], &46u32.to_le_bytes());
    assert_eq!(&file[40..44], &10u32.to_le_bytes());
    assert_eq!(&file[44..], &[0x80; 10]);
}

#[test]
fn test_patch_sizes_rejects_short_buffer() {
    let mut short = [0u8; 43];
    assert!(matches!(
        patch_sizes(&mut short, 0),
        Err(HeaderError::InvalidParameter { .. })
    ));
    assert_eq!(short, [0u8; 43]);
}

#[test]
fn test_patch_sizes_rejects_overflow() {
    let mut header = encode(&WaveFormatParameters::default()).unwrap();
    let before = header;
    assert!(header.patch_sizes(u32::MAX).is_err());
    assert_eq!(header, before);
}

// =========================================================================
// Decoding
// =========================================================================

#[test]
fn test_decode_reference_header() {
    let params = decode(&REFERENCE_HEADER).unwrap();
    assert_eq!(params, WaveFormatParameters::default());
}

#[test]
fn test_decode_round_trip() {
    let params = stereo_16();
    let header = encode(&params).unwrap();
    assert_eq!(decode(header.as_ref()).unwrap(), params);
}

#[test]
fn test_decode_ignores_trailing_payload() {
    let mut file = REFERENCE_HEADER.to_vec();
    file.extend_from_slice(&[1, 2, 3]);
    assert!(decode(&file).is_ok());
}

#[test]
fn test_decode_rejects_short_input() {
    let err = decode(&REFERENCE_HEADER[..20]).unwrap_err();
    assert!(matches!(err, HeaderError::Malformed { .. }));
}

#[test]
fn test_decode_rejects_wrong_tags() {
    for offset in [RIFF_ID_OFFSET, WAVE_ID_OFFSET, FMT_ID_OFFSET, DATA_ID_OFFSET] {
        let mut bytes = REFERENCE_HEADER;
        bytes[offset] = b'X';
        match decode(&bytes) {
            Err(HeaderError::Malformed { offset: at, .. }) => assert_eq!(at, offset),
            other => panic!("expected Malformed at {offset}, got {other:?}"),
        }
    }
}

#[test]
fn test_decode_rejects_inconsistent_derived_fields() {
    // Stereo 16-bit header with the original tool's hard-coded block align of 1
    let mut bytes = encode(&stereo_16()).unwrap().into_bytes();
    bytes[BLOCK_ALIGN_OFFSET] = 1;
    match decode(&bytes) {
        Err(HeaderError::Malformed { offset, .. }) => assert_eq!(offset, BLOCK_ALIGN_OFFSET),
        other => panic!("expected Malformed, got {other:?}"),
    }

    let mut bytes = encode(&stereo_16()).unwrap().into_bytes();
    bytes[RIFF_SIZE_OFFSET] = 0;
    assert!(matches!(
        decode(&bytes),
        Err(HeaderError::Malformed { offset: RIFF_SIZE_OFFSET, .. })
    ));
}

#[test]
fn test_decode_rejects_extended_fmt_chunk() {
    let mut bytes = REFERENCE_HEADER;
    bytes[FMT_SIZE_OFFSET] = 18;
    assert!(matches!(
        decode(&bytes),
        Err(HeaderError::Malformed { offset: FMT_SIZE_OFFSET, .. })
    ));
}

#[test]
fn test_decode_reports_invalid_stored_fields_as_malformed() {
    let cases = [
        (CHANNELS_OFFSET, 3u8),
        (CHANNELS_OFFSET, 0),
        (FORMAT_TAG_OFFSET, 0),
        (BITS_PER_SAMPLE_OFFSET, 12),
    ];
    for (offset, value) in cases {
        let mut bytes = REFERENCE_HEADER;
        bytes[offset] = value;
        match decode(&bytes) {
            Err(HeaderError::Malformed { offset: at, .. }) => assert_eq!(at, offset),
            other => panic!("expected Malformed at {offset}, got {other:?}"),
        }
    }

    let mut bytes = REFERENCE_HEADER;
    bytes[SAMPLE_RATE_OFFSET..SAMPLE_RATE_OFFSET + 4].copy_from_slice(&[0; 4]);
    assert!(matches!(
        decode(&bytes),
        Err(HeaderError::Malformed { offset: SAMPLE_RATE_OFFSET, .. })
    ));
}
