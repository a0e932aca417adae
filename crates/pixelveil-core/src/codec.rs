//! The LSB bit codec: writes secret bits into the blue channel of a
//! carrier image and recovers them later.
//!
//! The end of the payload is signalled in-band: every payload-carrying
//! pixel gets its red channel LSB forced to 0, and the pixel right after
//! the last payload bit gets its red channel LSB set to 1. Extraction
//! stops at the first red LSB of 1 it sees, so no length field is stored.

use image::RgbaImage;

use crate::bit_iterator::BitIterator;
use crate::capacity::{self, EmbeddingMode};
use crate::error::PixelveilError;
use crate::result::Result;

/// index of the color channel that carries the payload bits (blue)
pub const PAYLOAD_CHANNEL: usize = 2;

/// index of the color channel whose LSB flags the terminator pixel (red)
pub const MARKER_CHANNEL: usize = 0;

/// Outcome of an extraction scan.
///
/// A missing terminator is not an error at this layer, but it is not a
/// plain success either: the caller gets told which of the two happened.
#[derive(Debug, Clone, Eq, PartialEq)]
pub enum Extraction {
    /// the terminator marker was found, bytes are complete
    Terminated(Vec<u8>),
    /// the grid was exhausted without a terminator, bytes are whatever
    /// full bytes accumulated up to the end of the image
    Truncated(Vec<u8>),
}

impl Extraction {
    pub fn bytes(&self) -> &[u8] {
        match self {
            Extraction::Terminated(bytes) | Extraction::Truncated(bytes) => bytes,
        }
    }

    pub fn into_bytes(self) -> Vec<u8> {
        match self {
            Extraction::Terminated(bytes) | Extraction::Truncated(bytes) => bytes,
        }
    }

    pub fn is_terminated(&self) -> bool {
        matches!(self, Extraction::Terminated(_))
    }
}

#[inline]
fn with_lsb(channel: u8, bit: bool) -> u8 {
    (channel & !1) | u8::from(bit)
}

/// Embeds `secret` into `image`, mutating it in place.
///
/// The capacity planner runs first; on any planner error the image is
/// left byte-identical. Green and alpha channels are never touched, nor
/// is any pixel past the terminator.
///
/// ```rust
/// use image::RgbaImage;
/// use pixelveil_core::codec::{embed, extract, Extraction};
///
/// let mut image = RgbaImage::new(10, 10);
/// embed(&mut image, b"hello").unwrap();
/// assert_eq!(extract(&image), Extraction::Terminated(b"hello".to_vec()));
/// ```
pub fn embed(image: &mut RgbaImage, secret: &[u8]) -> Result<()> {
    let pixel_count = image.width() as usize * image.height() as usize;

    match capacity::plan(pixel_count, secret.len() * 8)? {
        EmbeddingMode::OneBitPerPixel => embed_one_bit(image, secret),
        mode @ EmbeddingMode::TwoBitsPerPixel => {
            // Not persisted in the image, so extraction could never tell
            // it apart from one bit per pixel. Rejected before mutation.
            Err(PixelveilError::UnsupportedEmbeddingMode(mode))
        }
    }
}

fn embed_one_bit(image: &mut RgbaImage, secret: &[u8]) -> Result<()> {
    let mut pixels = image.pixels_mut();

    for bit in BitIterator::new(secret) {
        let pixel = pixels.next().ok_or(PixelveilError::GridExhausted)?;
        pixel.0[PAYLOAD_CHANNEL] = with_lsb(pixel.0[PAYLOAD_CHANNEL], bit);
        pixel.0[MARKER_CHANNEL] = with_lsb(pixel.0[MARKER_CHANNEL], false);
    }

    // the planner reserved this pixel via its strict `<` comparison
    let marker = pixels.next().ok_or(PixelveilError::GridExhausted)?;
    marker.0[MARKER_CHANNEL] = with_lsb(marker.0[MARKER_CHANNEL], true);

    Ok(())
}

/// Reads secret bits back out of `image`, scanning row-major until the
/// terminator pixel, or until the image ends without one.
pub fn extract(image: &RgbaImage) -> Extraction {
    let mut content = Vec::new();
    let mut current = 0u8;
    let mut position = 7u8;

    for pixel in image.pixels() {
        if pixel.0[MARKER_CHANNEL] & 1 == 1 {
            return Extraction::Terminated(content);
        }

        current |= (pixel.0[PAYLOAD_CHANNEL] & 1) << position;
        if position == 0 {
            content.push(current);
            current = 0;
            position = 7;
        } else {
            position -= 1;
        }
    }

    Extraction::Truncated(content)
}
