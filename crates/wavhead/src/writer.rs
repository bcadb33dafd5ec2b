//! Writing headers ahead of a PCM payload.
//!
//! The encoder itself performs no I/O. These helpers are for callers that
//! stream a payload after the header and only learn its length at the end.

use std::io::{self, Read, Seek, SeekFrom, Write};

use byteorder::{LittleEndian, WriteBytesExt};

use crate::error::{HeaderError, HeaderResult};
use crate::format::{check_data_byte_count, WaveFormatParameters, RIFF_SIZE_BASE};
use crate::header::layout::{DATA_SIZE_OFFSET, HEADER_LEN, RIFF_SIZE_OFFSET};
use crate::header::{self, encode};

/// Encodes `params` and writes the 44-byte header to `writer`.
pub fn write_header<W: Write>(writer: &mut W, params: &WaveFormatParameters) -> HeaderResult<()> {
    let header = encode(params)?;
    writer.write_all(header.as_bytes())?;
    Ok(())
}

/// Streams a payload after a header whose size fields are patched on
/// [`finish`](WavStreamWriter::finish).
///
/// The header is written with `data_byte_count = 0` when the writer is
/// created. Payload bytes can be appended with
/// [`write_payload`](WavStreamWriter::write_payload) or through the
/// [`io::Write`] impl.
#[derive(Debug)]
pub struct WavStreamWriter<W: Write + Seek> {
    inner: W,
    params: WaveFormatParameters,
    header_start: u64,
    data_byte_count: u32,
}

impl<W: Write + Seek> WavStreamWriter<W> {
    /// Validates `params` and writes a placeholder header at the current
    /// stream position.
    pub fn new(mut inner: W, params: WaveFormatParameters) -> HeaderResult<Self> {
        let params = params.with_data_byte_count(0);
        let header_start = inner.stream_position()?;
        write_header(&mut inner, &params)?;

        Ok(Self {
            inner,
            params,
            header_start,
            data_byte_count: 0,
        })
    }

    /// Payload bytes written so far.
    pub fn data_byte_count(&self) -> u32 {
        self.data_byte_count
    }

    /// Appends payload bytes.
    ///
    /// Fails without writing if the total would no longer fit the RIFF size field.
    pub fn write_payload(&mut self, bytes: &[u8]) -> HeaderResult<()> {
        let total = u32::try_from(bytes.len())
            .ok()
            .and_then(|len| self.data_byte_count.checked_add(len))
            .ok_or_else(|| {
                HeaderError::invalid_param("data_byte_count", "payload exceeds 32-bit size field")
            })?;
        check_data_byte_count(total)?;

        if let Err(e) = self.inner.write_all(bytes) {
            // a failed write_all may still have written a prefix
            if let Ok(written) = self.payload_len() {
                self.data_byte_count = written;
            }
            return Err(e.into());
        }
        self.data_byte_count = total;
        Ok(())
    }

    /// Patches both size fields with the payload length and returns the
    /// inner writer, positioned at the end of the payload.
    ///
    /// The length is taken from the stream position, so bytes that reached
    /// the stream before a failed write are counted.
    pub fn finish(mut self) -> HeaderResult<(W, WaveFormatParameters)> {
        let end = self.inner.stream_position()?;
        let data_byte_count = self.payload_len()?;
        patch_stream(&mut self.inner, self.header_start, data_byte_count)?;
        self.inner.seek(SeekFrom::Start(end))?;
        self.inner.flush()?;

        let params = self.params.with_data_byte_count(data_byte_count);
        Ok((self.inner, params))
    }

    /// Payload bytes present in the stream after the header.
    fn payload_len(&mut self) -> HeaderResult<u32> {
        let end = self.inner.stream_position()?;
        let len = end.saturating_sub(self.header_start + HEADER_LEN as u64);
        let len = u32::try_from(len).map_err(|_| {
            HeaderError::invalid_param(
                "data_byte_count",
                format!("payload of {} bytes exceeds 32-bit size field", len),
            )
        })?;
        check_data_byte_count(len)?;
        Ok(len)
    }
}

impl<W: Write + Seek> Write for WavStreamWriter<W> {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.write_payload(buf).map_err(into_io_error)?;
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        self.inner.flush()
    }
}

/// Rewrites the size fields of an existing WAVE stream from its length.
///
/// The header must start at offset 0. Everything after the 44-byte header is
/// taken as payload. The stored size fields are ignored when checking the
/// header, since fixing them is the point. Returns the payload length.
pub fn patch_file_sizes<S: Read + Write + Seek>(stream: &mut S) -> HeaderResult<u32> {
    let mut bytes = [0u8; HEADER_LEN];
    stream.seek(SeekFrom::Start(0))?;
    stream.read_exact(&mut bytes).map_err(|e| {
        if e.kind() == io::ErrorKind::UnexpectedEof {
            HeaderError::malformed(0, "stream is shorter than a 44-byte header")
        } else {
            HeaderError::Io(e)
        }
    })?;

    header::patch_sizes(&mut bytes, 0)?;
    header::decode(&bytes)?;

    let end = stream.seek(SeekFrom::End(0))?;
    let payload_len = end - HEADER_LEN as u64;
    let payload = u32::try_from(payload_len)
        .ok()
        .filter(|len| check_data_byte_count(*len).is_ok())
        .ok_or_else(|| {
            HeaderError::invalid_param(
                "data_byte_count",
                format!("payload of {} bytes exceeds 32-bit size field", payload_len),
            )
        })?;

    patch_stream(stream, 0, payload)?;
    stream.seek(SeekFrom::Start(end))?;
    stream.flush()?;
    Ok(payload)
}

fn patch_stream<S: Write + Seek>(
    stream: &mut S,
    header_start: u64,
    data_byte_count: u32,
) -> io::Result<()> {
    stream.seek(SeekFrom::Start(header_start + RIFF_SIZE_OFFSET as u64))?;
    stream.write_u32::<LittleEndian>(RIFF_SIZE_BASE + data_byte_count)?;
    stream.seek(SeekFrom::Start(header_start + DATA_SIZE_OFFSET as u64))?;
    stream.write_u32::<LittleEndian>(data_byte_count)?;
    Ok(())
}

fn into_io_error(err: HeaderError) -> io::Error {
    match err {
        HeaderError::Io(e) => e,
        other => io::Error::new(io::ErrorKind::InvalidInput, other),
    }
}
