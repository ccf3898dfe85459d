use std::fs::File;
use std::io::{BufReader, Seek, Write};
use std::path::Path;

pub use image::RgbImage;
use image::io::Reader as ImageReader;
use image::ImageFormat;
use log::{debug, error};

use crate::error::SteganoError;
use crate::media::image::LsbCodec;
use crate::media::payload::ContentKind;
use crate::result::Result;

use super::Persist;

/// a media container for steganography, always 8 bit RGB
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Media {
    image: RgbImage,
}

impl Media {
    pub fn from_image(image: RgbImage) -> Self {
        Self { image }
    }

    /// Loads any image the enabled `image` features can decode and drops a possible alpha channel.
    pub fn from_file(f: &Path) -> Result<Self> {
        let file = File::open(f).map_err(|source| {
            error!("Error opening image {f:?}: {source}");
            SteganoError::ReadError { source }
        })?;
        let image = ImageReader::new(BufReader::new(file))
            .with_guessed_format()
            .map_err(|source| SteganoError::ReadError { source })?
            .decode()
            .map_err(|e| {
                error!("Error decoding image {f:?}: {e}");
                SteganoError::InvalidImageMedia
            })?
            .to_rgb8();
        debug!("loaded image {f:?} with {:?} pixels", image.dimensions());

        Ok(Self { image })
    }

    pub fn image(&self) -> &RgbImage {
        &self.image
    }

    pub fn into_image(self) -> RgbImage {
        self.image
    }

    /// see [`LsbCodec::capacity`]
    pub fn capacity(&self) -> usize {
        LsbCodec::capacity(&self.image)
    }

    /// see [`LsbCodec::usable_capacity`]
    pub fn usable_capacity(&self) -> usize {
        LsbCodec::usable_capacity(&self.image)
    }

    /// hides the data in a copy of this media
    pub fn hide_data(&self, data: &[u8], kind: ContentKind) -> Result<Self> {
        LsbCodec::embed(&self.image, data, kind).map(Self::from_image)
    }

    pub fn unveil_data(&self) -> Result<(ContentKind, Vec<u8>)> {
        LsbCodec::extract(&self.image)
    }

    /// Writes the image PNG encoded, every other format would destroy the hidden bits.
    pub fn save_to_writer<W: Write + Seek>(&self, mut writer: W) -> Result<()> {
        self.image
            .write_to(&mut writer, ImageFormat::Png)
            .map_err(|e| {
                error!("Error saving image: {e}");
                SteganoError::ImageEncodingError
            })
    }
}

impl Persist for Media {
    fn save_as(&mut self, file: &Path) -> Result<()> {
        if !is_png_extension(file) {
            return Err(SteganoError::LossyTarget(file.to_path_buf()));
        }
        let f = File::create(file).map_err(|e| {
            error!("Error creating file {file:?}: {e}");
            SteganoError::WriteError { source: e }
        })?;
        self.save_to_writer(f)
    }
}

pub(crate) fn is_png_extension(path: &Path) -> bool {
    path.extension()
        .and_then(|e| e.to_str())
        .map(|e| e.eq_ignore_ascii_case("png"))
        .unwrap_or(false)
}
