//! One call per CLI subcommand, thin wrappers around [`crate::api`].

mod capacity;
mod hide;
mod unveil;

pub use capacity::*;
pub use hide::*;
pub use unveil::*;
