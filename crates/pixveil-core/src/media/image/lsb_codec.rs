use super::decoder::ImageRgbColor;
use super::encoder::ImageRgbColorMut;
use crate::media::payload::{
    ContentKind, PayloadDecoderWithLengthHeader, PayloadEncoderWithLengthHeader,
    LENGTH_HEADER_BITS, TAG_LEN,
};
use crate::result::Result;
use crate::universal_decoder::{Decoder, OneBitUnveil};
use crate::universal_encoder::{Encoder, OneBitHide};
use crate::SteganoError;

use image::RgbImage;
use log::{debug, error};
use std::io::{Read, Write};

/// one bit in every R, G and B channel
const BITS_PER_PIXEL: usize = 3;

/// Factory for decoder and encoder, plus the tagged payload codec on top of them
pub struct LsbCodec;

impl LsbCodec {
    /// builds a LSB Image Decoder that implements Read
    pub fn decoder<'i>(input: &'i RgbImage) -> Box<dyn Read + 'i> {
        Box::new(Decoder::new(ImageRgbColor::new(input), OneBitUnveil))
    }

    /// builds a LSB Image Encoder that implements Write
    pub fn encoder<'i>(carrier: &'i mut RgbImage) -> Box<dyn Write + 'i> {
        Box::new(Encoder::new(ImageRgbColorMut::new(carrier), OneBitHide))
    }

    /// number of bits the image can carry, length header included
    pub fn available_bits(image: &RgbImage) -> usize {
        let (width, height) = image.dimensions();
        (width as usize)
            .saturating_mul(height as usize)
            .saturating_mul(BITS_PER_PIXEL)
    }

    /// Bytes that fit behind the 32 bit length header.
    ///
    /// The 4 byte content tag is part of these bytes, see [`LsbCodec::usable_capacity`].
    pub fn capacity(image: &RgbImage) -> usize {
        Self::available_bits(image).saturating_sub(LENGTH_HEADER_BITS) / 8
    }

    /// Bytes of actual data that fit, after header and content tag.
    pub fn usable_capacity(image: &RgbImage) -> usize {
        Self::capacity(image).saturating_sub(TAG_LEN)
    }

    /// Hides `data` tagged as `kind` in a copy of `cover`, the cover stays untouched.
    pub fn embed(cover: &RgbImage, data: &[u8], kind: ContentKind) -> Result<RgbImage> {
        let stream = PayloadEncoderWithLengthHeader::encode(kind, data)?;
        let required_bits = stream.len().saturating_mul(8);
        let available_bits = Self::available_bits(cover);
        debug!("embedding {required_bits} bits into an image with {available_bits} bits");

        if required_bits > available_bits {
            return Err(SteganoError::ImageCapacityError {
                capacity: Self::capacity(cover),
                required: TAG_LEN + data.len(),
            });
        }

        let mut stego = cover.clone();
        {
            let mut encoder = Self::encoder(&mut stego);
            encoder.write_all(&stream).map_err(|e| {
                error!("Error encoding image: {e}, kind {}", e.kind());
                SteganoError::ImageEncodingError
            })?;
        }

        Ok(stego)
    }

    /// Unveils the tagged data, reading the same channel order [`LsbCodec::embed`] writes.
    pub fn extract(stego: &RgbImage) -> Result<(ContentKind, Vec<u8>)> {
        let mut decoder = Self::decoder(stego);
        PayloadDecoderWithLengthHeader::decode(&mut decoder, Self::available_bits(stego))
    }
}
