use crate::error::PixelveilError;
use crate::result::Result;

/// How many payload bits one pixel carries.
///
/// The mode is chosen by [`plan`] from the carrier size and the secret
/// length alone; it is not persisted anywhere in the output image.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum EmbeddingMode {
    /// one payload bit per pixel, stored in the blue channel LSB
    OneBitPerPixel,
    /// two payload bits per pixel, reusing a second color channel.
    /// Selected by the planner but rejected by the codec for writing,
    /// since extraction cannot tell the modes apart.
    TwoBitsPerPixel,
}

/// Decides whether a secret of `secret_bits` bits fits into a carrier of
/// `pixel_count` pixels, and at which density.
///
/// The comparison is strict so that at least one pixel is always left
/// over for the terminator marker.
///
/// ```rust
/// use pixelveil_core::capacity::{plan, EmbeddingMode};
///
/// assert_eq!(plan(10, 8).unwrap(), EmbeddingMode::OneBitPerPixel);
/// assert_eq!(plan(8, 8).unwrap(), EmbeddingMode::TwoBitsPerPixel);
/// assert!(plan(4, 8).is_err());
/// ```
pub fn plan(pixel_count: usize, secret_bits: usize) -> Result<EmbeddingMode> {
    if secret_bits < pixel_count {
        Ok(EmbeddingMode::OneBitPerPixel)
    } else if secret_bits < pixel_count * 2 {
        Ok(EmbeddingMode::TwoBitsPerPixel)
    } else {
        Err(PixelveilError::SecretTooLarge {
            secret_bits,
            pixel_count,
        })
    }
}
