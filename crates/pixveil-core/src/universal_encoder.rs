use std::io::{Cursor, Result, Write};

use bitstream_io::{BigEndian, BitRead, BitReader};

use crate::media::{HideBit, MediaPrimitiveMut};

/// generic hiding algorithm, used for specific ones like LSB
pub trait HideAlgorithm {
    /// encodes one bit onto a carrier
    fn encode(&self, carrier: MediaPrimitiveMut<'_>, bit: bool);
}

/// default 1 bit hiding strategy, overwrites the least significant bit
pub struct OneBitHide;

impl HideAlgorithm for OneBitHide {
    fn encode(&self, carrier: MediaPrimitiveMut<'_>, bit: bool) {
        carrier.hide_bit(bit);
    }
}

/// generic stegano encoder, spreads the bits of every written byte
/// most significant bit first over the carrier primitives
pub struct Encoder<I, A> {
    pub input: I,
    pub algorithm: A,
}

impl<I, A> Encoder<I, A> {
    pub fn new(input: I, algorithm: A) -> Self {
        Encoder { input, algorithm }
    }
}

impl<'i, I, A> Write for Encoder<I, A>
where
    I: Iterator<Item = MediaPrimitiveMut<'i>>,
    A: HideAlgorithm,
{
    fn write(&mut self, buf: &[u8]) -> Result<usize> {
        // 1 bit per primitive
        let items_to_take = buf.len() << 3;
        let mut bit_iter = BitReader::endian(Cursor::new(buf), BigEndian);
        let mut bit_written: usize = 0;
        for carrier in self.input.by_ref().take(items_to_take) {
            self.algorithm.encode(carrier, bit_iter.read_bit()?);
            bit_written += 1;
        }

        Ok(bit_written >> 3)
    }

    fn flush(&mut self) -> Result<()> {
        Ok(())
    }
}
