//! Builder style entry points, one module per use case.

pub mod hide;
mod shared;
pub mod unveil;

pub use shared::Password;
