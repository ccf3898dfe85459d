use std::fmt::{self, Display, Formatter};
use std::path::Path;

use crate::media::Media;
use crate::SteganoError;

/// how much an image can carry, in bytes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CapacityReport {
    pub width: u32,
    pub height: u32,
    /// bytes behind the length header, the content tag included
    pub capacity: usize,
    /// bytes left for the encrypted data
    pub usable_capacity: usize,
}

impl CapacityReport {
    pub fn of(media: &Media) -> Self {
        let (width, height) = media.image().dimensions();
        Self {
            width,
            height,
            capacity: media.capacity(),
            usable_capacity: media.usable_capacity(),
        }
    }
}

impl Display for CapacityReport {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}x{} pixels, capacity {} bytes, {} bytes usable",
            self.width, self.height, self.capacity, self.usable_capacity
        )
    }
}

/// reads the image and reports its capacity, an unreadable image is an error
pub fn capacity(image: &Path) -> Result<CapacityReport, SteganoError> {
    let media = Media::from_file(image)?;
    Ok(CapacityReport::of(&media))
}
