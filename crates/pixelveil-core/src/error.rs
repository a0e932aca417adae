use thiserror::Error;

use crate::capacity::EmbeddingMode;

#[derive(Error, Debug)]
pub enum PixelveilError {
    /// Represents a secret that cannot fit into the carrier image,
    /// even at two bits per pixel. Recoverable by the caller: split the
    /// secret into parts or use a larger image.
    #[error("Secret of {secret_bits} bits is too large for a carrier of {pixel_count} pixels, try splitting it into parts")]
    SecretTooLarge {
        secret_bits: usize,
        pixel_count: usize,
    },

    /// Represents an embedding mode the codec cannot produce a readable
    /// image for. Extraction has no way to tell which mode produced an
    /// image, so only the one-bit-per-pixel mode is writable.
    #[error("Embedding mode {0:?} is not supported for writing")]
    UnsupportedEmbeddingMode(EmbeddingMode),

    /// Represents a planner/codec invariant mismatch: the pixel grid ran
    /// out while payload bits or the terminator were still pending,
    /// despite a prior successful capacity check.
    #[error("Pixel grid exhausted during embedding, capacity invariant violated")]
    GridExhausted,

    /// Represents an extraction that scanned the whole image without
    /// finding a terminator marker. The recovered bytes are garbage or
    /// truncated and must not be reported as a success.
    #[error("No terminator marker found in the image")]
    MissingTerminator,

    /// Represents an unsupported carrier media, for example a JPEG file
    #[error("Media format is not supported")]
    UnsupportedMedia,

    /// Represents an invalid carrier image media, for example a broken PNG file
    #[error("Image media is invalid")]
    InvalidImageMedia,

    /// Represents a failure when encoding the output image file.
    #[error("Image encoding error")]
    ImageEncodingError,

    /// Represents a failure to read a secret data file.
    #[error("Read error")]
    ReadError { source: std::io::Error },

    /// Represents a failure to write the target file.
    #[error("Write error")]
    WriteError { source: std::io::Error },

    /// Represents all other cases of `std::io::Error`.
    #[error(transparent)]
    IoError(#[from] std::io::Error),

    #[error("No carrier image set")]
    CarrierNotSet,

    #[error("No target file set")]
    TargetNotSet,

    #[error("API Error: Missing secret data or message")]
    MissingSecret,
}
