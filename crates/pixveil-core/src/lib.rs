//! # Pixveil Core API
//!
//! Hides a password encrypted text or file in the least significant bits of
//! the red, green and blue channels of an image. The result is always saved as PNG.
//!
//! The entry points are the builders in [`api`]:
//! - [`api::hide::prepare`] for writing a secret into an image
//! - [`api::unveil::prepare`] for reading it back
//!
//! # Usage Examples
//!
//! ## Hide a message inside an image
//!
//! ```rust
//! use tempfile::tempdir;
//!
//! let temp_dir = tempdir().expect("Failed to create temporary directory");
//! let cover = temp_dir.path().join("cover.png");
//! image::RgbImage::from_pixel(64, 64, image::Rgb([200, 100, 50]))
//!     .save(&cover)
//!     .expect("Failed to write the cover image");
//!
//! pixveil_core::api::hide::prepare()
//!     .with_message("Hello, World!")  // will hide this message inside the image
//!     .with_password("SuperSecret42") // will encrypt the message with this password
//!     .with_image(&cover)
//!     .with_output(temp_dir.path().join("image-with-a-secret.png"))
//!     .execute()
//!     .expect("Failed to hide message in image");
//!
//! let unveiled = pixveil_core::api::unveil::prepare()
//!     .from_secret_file(temp_dir.path().join("image-with-a-secret.png"))
//!     .using_password("SuperSecret42")
//!     .execute()
//!     .expect("Failed to unveil message from image");
//!
//! assert_eq!(unveiled.text(), Some("Hello, World!"));
//! ```

#![warn(clippy::redundant_else)]

pub mod message;
pub use message::*;

pub mod api;
pub mod commands;
pub mod error;
pub mod media;
pub mod result;
pub mod universal_decoder;
pub mod universal_encoder;

pub use crate::error::SteganoError;
pub use crate::media::image::LsbCodec;
pub use crate::media::payload::ContentKind;
pub use crate::media::{Media, Persist};
pub use crate::result::Result;
