/// wrap the low level data types that carries information
#[derive(Debug, Eq, PartialEq)]
pub enum MediaPrimitive {
    ImageColorChannel(u8),
}

impl From<u8> for MediaPrimitive {
    fn from(value: u8) -> Self {
        MediaPrimitive::ImageColorChannel(value)
    }
}

/// mutable primitive for storing stegano data
#[derive(Debug, Eq, PartialEq)]
pub enum MediaPrimitiveMut<'a> {
    ImageColorChannel(&'a mut u8),
}

pub trait HideBit {
    fn hide_bit(self, bit: bool);
}

impl HideBit for MediaPrimitiveMut<'_> {
    fn hide_bit(self, bit: bool) {
        match self {
            MediaPrimitiveMut::ImageColorChannel(c) => {
                *c = (*c & 0xFE) | u8::from(bit);
            }
        }
    }
}
