mod codec;
mod content_kind;

pub use codec::*;
pub use content_kind::*;
