use std::fs::File;
use std::io::Write;
use std::path::{Path, PathBuf};

use log::warn;

use crate::codec::Extraction;
use crate::media::CarrierImage;
use crate::{PixelveilError, Result};

pub fn prepare() -> ExtractApi {
    ExtractApi::default()
}

/// Extracts the embedded secret from an image and writes the raw bytes
/// to a file. No interpretation of the bytes happens here.
#[derive(Default, Debug)]
pub struct ExtractApi {
    image: Option<PathBuf>,
    output: Option<PathBuf>,
}

impl ExtractApi {
    /// The image that contains the embedded secret
    pub fn from_secret_image<A: AsRef<Path>>(mut self, image: A) -> Self {
        self.image = Some(image.as_ref().to_path_buf());
        self
    }

    /// The file the recovered bytes are written to
    pub fn into_file<A: AsRef<Path>>(mut self, output: A) -> Self {
        self.output = Some(output.as_ref().to_path_buf());
        self
    }

    pub fn execute(self) -> Result<()> {
        let Some(image) = self.image else {
            return Err(PixelveilError::CarrierNotSet);
        };
        let Some(output) = self.output else {
            return Err(PixelveilError::TargetNotSet);
        };

        let secret = match CarrierImage::from_file(&image)?.extract() {
            Extraction::Terminated(bytes) => bytes,
            Extraction::Truncated(bytes) => {
                warn!(
                    "Image {image:?} holds no terminator marker, discarding {} accumulated bytes",
                    bytes.len()
                );
                return Err(PixelveilError::MissingTerminator);
            }
        };

        File::create(&output)
            .and_then(|mut f| f.write_all(&secret))
            .map_err(|source| PixelveilError::WriteError { source })
    }
}
