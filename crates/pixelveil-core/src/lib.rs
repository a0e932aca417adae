//! # Pixelveil Core API
//!
//! Hides an arbitrary byte sequence in the least significant bits of an
//! image's color channels. Payload bits go into the blue channel, one
//! bit per pixel in row-major order, and the pixel right after the last
//! payload bit gets its red channel LSB set to 1 as an in-band
//! terminator. Extraction needs no stored length, it just scans until
//! the terminator pixel.
//!
//! # Usage Examples
//!
//! ## Working on a pixel grid in memory
//!
//! ```rust
//! use image::RgbaImage;
//! use pixelveil_core::{embed, extract, Extraction};
//!
//! let mut image = RgbaImage::new(32, 32);
//!
//! embed(&mut image, b"attack at dawn").expect("secret fits into 1024 pixels");
//!
//! assert_eq!(
//!     extract(&image),
//!     Extraction::Terminated(b"attack at dawn".to_vec())
//! );
//! ```
//!
//! ## Working on image files
//!
//! ```rust,no_run
//! pixelveil_core::api::embed::prepare()
//!     .with_image("carrier.png")
//!     .with_message("Hello, World!")
//!     .with_output("carrier-with-secret.png")
//!     .execute()
//!     .expect("Failed to embed message in image");
//!
//! pixelveil_core::api::extract::prepare()
//!     .from_secret_image("carrier-with-secret.png")
//!     .into_file("secret.bin")
//!     .execute()
//!     .expect("Failed to extract message from image");
//! ```

#![warn(clippy::redundant_else)]

pub mod api;
pub mod bit_iterator;
pub mod capacity;
pub mod codec;
pub mod commands;
pub mod error;
pub mod media;
pub mod result;

pub use bit_iterator::BitIterator;
pub use capacity::{plan, EmbeddingMode};
pub use codec::{embed, extract, Extraction, MARKER_CHANNEL, PAYLOAD_CHANNEL};
pub use error::PixelveilError;
pub use media::{CarrierImage, Persist};
pub use result::Result;
