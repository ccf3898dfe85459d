use byteorder::{BigEndian, ReadBytesExt, WriteBytesExt};
use log::debug;
use std::io::Read;

use super::{ContentKind, TAG_LEN};
use crate::result::Result;
use crate::SteganoError;

/// the length header counts payload bits, not bytes
pub const LENGTH_HEADER_BITS: usize = 32;

/// Frames a tagged payload as `bit length (u32, big endian) | tag | data`.
///
/// Written most significant bit first, the header bytes are exactly the
/// 32 bit big endian length prefix the carrier expects in front of the payload.
pub struct PayloadEncoderWithLengthHeader;

impl PayloadEncoderWithLengthHeader {
    pub fn encode(kind: ContentKind, data: &[u8]) -> Result<Vec<u8>> {
        let payload_len = TAG_LEN + data.len();
        let payload_bits = payload_len
            .checked_mul(8)
            .and_then(|bits| u32::try_from(bits).ok())
            .ok_or(SteganoError::PayloadTooLarge(payload_len))?;

        let mut buffer = Vec::with_capacity(LENGTH_HEADER_BITS / 8 + payload_len);
        buffer.write_u32::<BigEndian>(payload_bits)?;
        buffer.extend_from_slice(kind.tag());
        buffer.extend_from_slice(data);

        Ok(buffer)
    }
}

/// Reverses [`PayloadEncoderWithLengthHeader`] on a stream of carrier bytes.
pub struct PayloadDecoderWithLengthHeader;

impl PayloadDecoderWithLengthHeader {
    /// `available_bits` is the total number of bits the carrier holds, used to
    /// reject length headers that point beyond the carrier before allocating.
    pub fn decode(
        content: &mut dyn Read,
        available_bits: usize,
    ) -> Result<(ContentKind, Vec<u8>)> {
        let payload_bits = content
            .read_u32::<BigEndian>()
            .map_err(|_| SteganoError::TruncatedStream)? as usize;
        debug!("length header announces {payload_bits} payload bits, carrier has {available_bits}");

        if payload_bits > available_bits.saturating_sub(LENGTH_HEADER_BITS) {
            return Err(SteganoError::TruncatedStream);
        }

        // a trailing partial byte is dropped
        let mut buffer = vec![0; payload_bits / 8];
        content
            .read_exact(&mut buffer)
            .map_err(|_| SteganoError::TruncatedStream)?;

        if buffer.len() < TAG_LEN {
            return Err(SteganoError::UnrecognizedFormat);
        }
        let kind =
            ContentKind::from_tag(&buffer[..TAG_LEN]).ok_or(SteganoError::UnrecognizedFormat)?;
        buffer.drain(..TAG_LEN);

        Ok((kind, buffer))
    }
}
