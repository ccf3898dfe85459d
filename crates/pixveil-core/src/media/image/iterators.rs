use image::buffer::{Pixels, PixelsMut};
use image::Pixel;
use std::slice::{Iter, IterMut};

/// Row major, mutable access to every color channel of an image.
///
/// Pixels are visited `y` from top to bottom, within a row `x` from left to right,
/// and for each pixel the channels in their natural order (R, G, B).
pub(crate) struct ColorIterMut<'a, P: Pixel + 'a> {
    pixel: PixelsMut<'a, P>,
    colors: IterMut<'a, P::Subpixel>,
}

impl<'a, P: Pixel + 'a> ColorIterMut<'a, P> {
    pub fn from_pixels_mut(mut pixel: PixelsMut<'a, P>) -> Self {
        let colors = match pixel.next() {
            Some(p) => p.channels_mut().iter_mut(),
            None => <&mut [P::Subpixel]>::default().iter_mut(),
        };
        Self { pixel, colors }
    }
}

impl<'a, P: Pixel + 'a> Iterator for ColorIterMut<'a, P> {
    type Item = &'a mut P::Subpixel;

    fn next(&mut self) -> Option<Self::Item> {
        self.colors.next().or_else(|| {
            if let Some(p) = self.pixel.next() {
                self.colors = p.channels_mut().iter_mut();
            }
            self.colors.next()
        })
    }
}

/// Row major, readonly access to every color channel of an image, same order as [`ColorIterMut`]
pub(crate) struct ColorIter<'a, P: Pixel + 'a> {
    pixel: Pixels<'a, P>,
    colors: Iter<'a, P::Subpixel>,
}

impl<'a, P: Pixel + 'a> ColorIter<'a, P> {
    pub fn from_pixels(mut pixel: Pixels<'a, P>) -> Self {
        let colors = match pixel.next() {
            Some(p) => p.channels().iter(),
            None => <&[P::Subpixel]>::default().iter(),
        };
        Self { pixel, colors }
    }
}

impl<'a, P: Pixel + 'a> Iterator for ColorIter<'a, P> {
    type Item = &'a P::Subpixel;

    fn next(&mut self) -> Option<Self::Item> {
        self.colors.next().or_else(|| {
            if let Some(p) = self.pixel.next() {
                self.colors = p.channels().iter();
            }
            self.colors.next()
        })
    }
}
