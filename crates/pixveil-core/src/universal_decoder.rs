use std::io::{Read, Result};

use bitstream_io::{BigEndian, BitWrite, BitWriter};

use crate::media::MediaPrimitive;

/// generic unveil algorithm
pub trait UnveilAlgorithm {
    fn decode(&self, carrier: MediaPrimitive) -> bool;
}

/// default 1 bit unveil strategy, reads the least significant bit
pub struct OneBitUnveil;

impl UnveilAlgorithm for OneBitUnveil {
    #[inline(always)]
    fn decode(&self, carrier: MediaPrimitive) -> bool {
        match carrier {
            MediaPrimitive::ImageColorChannel(b) => (b & 0x1) > 0,
        }
    }
}

/// generic stegano decoder, collects the bits of the carrier primitives
/// most significant bit first into bytes
pub struct Decoder<I, A>
where
    I: Iterator<Item = MediaPrimitive>,
    A: UnveilAlgorithm,
{
    pub input: I,
    pub algorithm: A,
}

impl<I, A> Decoder<I, A>
where
    I: Iterator<Item = MediaPrimitive>,
    A: UnveilAlgorithm,
{
    pub fn new(input: I, algorithm: A) -> Self {
        Decoder { input, algorithm }
    }
}

impl<I, A> Read for Decoder<I, A>
where
    I: Iterator<Item = MediaPrimitive>,
    A: UnveilAlgorithm,
{
    /// a trailing partial byte at the end of the carrier is dropped
    fn read(&mut self, buf: &mut [u8]) -> Result<usize> {
        // 1 bit per primitive
        let items_to_take = buf.len() << 3;
        let mut bit_buffer = BitWriter::endian(&mut buf[..], BigEndian);

        let mut bit_read: usize = 0;
        for carrier in self.input.by_ref().take(items_to_take) {
            bit_buffer.write_bit(self.algorithm.decode(carrier))?;
            bit_read += 1;
        }

        Ok(bit_read >> 3)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn carriers(colors: &[u8]) -> impl Iterator<Item = MediaPrimitive> + '_ {
        colors.iter().map(|c| MediaPrimitive::ImageColorChannel(*c))
    }

    #[test]
    fn should_read_bits_most_significant_first() {
        let colors = [0xFE, 0xFF, 0xFE, 0xFE, 0xFF, 0xFE, 0xFE, 0xFE];
        let mut buf = [0u8; 1];
        Decoder::new(carriers(&colors), OneBitUnveil)
            .read_exact(&mut buf)
            .unwrap();

        assert_eq!(buf, [0b0100_1000]);
    }

    #[test]
    fn should_drop_a_trailing_partial_byte() {
        let colors = [0x01u8; 12];
        let mut decoder = Decoder::new(carriers(&colors), OneBitUnveil);
        let mut buf = [0u8; 2];

        assert_eq!(decoder.read(&mut buf).unwrap(), 1);
        assert_eq!(buf[0], 0xFF);
        assert_eq!(decoder.read(&mut buf).unwrap(), 0);
    }

    #[test]
    fn should_continue_where_the_last_read_stopped() {
        let colors = [
            1, 1, 1, 1, 0, 0, 0, 0, // 0xF0
            0, 0, 0, 0, 1, 1, 1, 1, // 0x0F
        ];
        let mut decoder = Decoder::new(carriers(&colors), OneBitUnveil);
        let mut first = [0u8; 1];
        let mut second = [0u8; 1];
        decoder.read_exact(&mut first).unwrap();
        decoder.read_exact(&mut second).unwrap();

        assert_eq!((first[0], second[0]), (0xF0, 0x0F));
    }
}
