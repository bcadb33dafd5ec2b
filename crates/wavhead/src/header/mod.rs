//! Canonical 44-byte RIFF/WAVE PCM header.
//!
//! The header is built from an explicit offset table with every integer
//! written little-endian, so the output does not depend on host byte order.
//! The two size fields can be rewritten in place once the payload length is
//! known.

mod buffer;
mod codec;
pub mod layout;

#[cfg(test)]
mod tests;

// Re-export public API
pub use buffer::HeaderBuffer;
pub use codec::{decode, encode, patch_sizes};
pub use layout::HEADER_LEN;
