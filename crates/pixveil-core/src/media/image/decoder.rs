use crate::media::image::iterators::ColorIter;
use crate::media::MediaPrimitive;
use image::{Rgb, RgbImage};

/// stegano source for image files, based on `RgbImage` by `image` crate
///
/// ## Example of usage
/// ```rust
/// use std::io::{Read, Write};
/// use image::RgbImage;
/// use pixveil_core::media::image::decoder::ImageRgbColor;
/// use pixveil_core::media::image::encoder::ImageRgbColorMut;
/// use pixveil_core::universal_decoder::{Decoder, OneBitUnveil};
/// use pixveil_core::universal_encoder::{Encoder, OneBitHide};
///
/// let mut image = RgbImage::from_pixel(4, 4, image::Rgb([128, 64, 32]));
/// Encoder::new(ImageRgbColorMut::new(&mut image), OneBitHide)
///     .write_all(b"Hi")
///     .expect("Cannot write secret message");
///
/// let mut secret = vec![0; 2];
/// Decoder::new(ImageRgbColor::new(&image), OneBitUnveil)
///     .read_exact(&mut secret)
///     .expect("Cannot read 2 bytes from decoder");
///
/// assert_eq!(secret, b"Hi");
/// ```
pub struct ImageRgbColor<'i> {
    pixel: ColorIter<'i, Rgb<u8>>,
}

impl<'i> ImageRgbColor<'i> {
    /// constructor for a given `RgbImage` that lives somewhere
    pub fn new(input: &'i RgbImage) -> Self {
        Self {
            pixel: ColorIter::from_pixels(input.pixels()),
        }
    }
}

/// iterates over the image and returns single color channels of each pixel wrapped into a `MediaPrimitive`
impl<'i> Iterator for ImageRgbColor<'i> {
    type Item = MediaPrimitive;

    #[inline(always)]
    fn next(&'_ mut self) -> Option<Self::Item> {
        self.pixel
            .next()
            .map(|c| MediaPrimitive::ImageColorChannel(*c))
    }
}

#[cfg(test)]
mod decoder_tests {
    use super::*;
    use crate::test_utils::prepare_5x5_image;

    #[test]
    fn it_should_iterate_over_all_colors_of_an_image() {
        let img = prepare_5x5_image();
        let (width, height) = img.dimensions();
        let mut media_primitive_iter = ImageRgbColor::new(&img);

        for y in 0..height {
            for x in 0..width {
                let expected_pixel = img.get_pixel(x, y);
                for color_idx in 0..3 {
                    let expected_color = expected_pixel.0[color_idx];
                    let given_color = media_primitive_iter.next().unwrap_or_else(|| {
                        panic!("MediaPrimitive at ({x}, {y}) was not even existing!")
                    });

                    assert_eq!(
                        given_color,
                        expected_color.into(),
                        "MediaPrimitive at ({x}, {y}) does not match"
                    );
                }
            }
        }
        // ensure iterator is exhausted
        assert!(media_primitive_iter.next().is_none());
    }
}
