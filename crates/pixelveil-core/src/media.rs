use std::fs::File;
use std::io::BufWriter;
use std::path::Path;

use image::{ImageFormat, RgbaImage};
use log::error;

use crate::codec;
use crate::codec::Extraction;
use crate::error::PixelveilError;
use crate::result::Result;

/// file extensions the carrier wrapper will read and write.
///
/// GIF carriers are not on the list on purpose: the encoder palette
/// quantizes the output, which wipes out the LSB plane on save.
pub const SUPPORTED_EXTENSIONS: &[&str] = &["png"];

pub trait Persist {
    fn save_as(&mut self, _: &Path) -> Result<()>;
}

/// a decoded carrier image, normalized to 4 channels per pixel
#[derive(Debug)]
pub struct CarrierImage {
    image: RgbaImage,
}

impl CarrierImage {
    pub fn from_image(image: RgbaImage) -> Self {
        Self { image }
    }

    pub fn from_file(f: &Path) -> Result<Self> {
        let ext = f
            .extension()
            .and_then(|e| e.to_str())
            .map(|e| e.to_lowercase())
            .ok_or(PixelveilError::UnsupportedMedia)?;

        if !SUPPORTED_EXTENSIONS.contains(&ext.as_str()) {
            return Err(PixelveilError::UnsupportedMedia);
        }

        let image = image::open(f)
            .map_err(|e| {
                error!("Error decoding carrier image {f:?}: {e}");
                PixelveilError::InvalidImageMedia
            })?
            .to_rgba8();

        Ok(Self { image })
    }

    /// Embeds `secret` into the carried pixel grid, in place.
    pub fn embed(&mut self, secret: &[u8]) -> Result<&mut Self> {
        codec::embed(&mut self.image, secret)?;
        Ok(self)
    }

    /// Scans the carried pixel grid for embedded data.
    pub fn extract(&self) -> Extraction {
        codec::extract(&self.image)
    }

    pub fn as_image(&self) -> &RgbaImage {
        &self.image
    }
}

impl Persist for CarrierImage {
    fn save_as(&mut self, file: &Path) -> Result<()> {
        let f = File::create(file).map_err(|e| {
            error!("Error creating file {file:?}: {e}");
            PixelveilError::WriteError { source: e }
        })?;

        self.image
            .write_to(&mut BufWriter::new(f), ImageFormat::Png)
            .map_err(|e| {
                error!("Error encoding image {file:?}: {e}");
                PixelveilError::ImageEncodingError
            })
    }
}
