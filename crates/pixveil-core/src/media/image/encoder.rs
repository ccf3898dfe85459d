use image::{Rgb, RgbImage};

use crate::media::image::iterators::ColorIterMut;
use crate::media::MediaPrimitiveMut;

/// stegano target for image files, based on `RgbImage` by `image` crate
///
/// hands out every color channel of the image once, in the same order as
/// [`ImageRgbColor`](super::decoder::ImageRgbColor) reads them
pub struct ImageRgbColorMut<'a> {
    pixel: ColorIterMut<'a, Rgb<u8>>,
}

impl<'a> ImageRgbColorMut<'a> {
    /// constructor for a given `RgbImage` that lives somewhere
    pub fn new(input: &'a mut RgbImage) -> Self {
        Self {
            pixel: ColorIterMut::from_pixels_mut(input.pixels_mut()),
        }
    }
}

impl<'i> Iterator for ImageRgbColorMut<'i> {
    type Item = MediaPrimitiveMut<'i>;

    fn next(&'_ mut self) -> Option<Self::Item> {
        self.pixel.next().map(MediaPrimitiveMut::ImageColorChannel)
    }
}
