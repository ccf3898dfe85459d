use std::fmt::{self, Display, Formatter};

pub const TAG_LEN: usize = 4;

const TEXT_TAG: &[u8; TAG_LEN] = b"TEXT";
const FILE_TAG: &[u8; TAG_LEN] = b"FILE";

/// what kind of secret is carried, written as a 4 byte ascii tag in front of the data
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum ContentKind {
    Text,
    File,
}

impl ContentKind {
    pub fn tag(&self) -> &'static [u8; TAG_LEN] {
        match self {
            ContentKind::Text => TEXT_TAG,
            ContentKind::File => FILE_TAG,
        }
    }

    /// exact match only, no case folding
    pub fn from_tag(tag: &[u8]) -> Option<Self> {
        match tag {
            t if t == TEXT_TAG => Some(ContentKind::Text),
            t if t == FILE_TAG => Some(ContentKind::File),
            _ => None,
        }
    }
}

impl Display for ContentKind {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            ContentKind::Text => write!(f, "text"),
            ContentKind::File => write!(f, "file"),
        }
    }
}
