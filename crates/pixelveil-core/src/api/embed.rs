use std::path::{Path, PathBuf};

use crate::media::{CarrierImage, Persist};
use crate::{PixelveilError, Result};

pub fn prepare() -> EmbedApi {
    EmbedApi::default()
}

/// Embeds a secret taken from a data file or an inline text message into
/// a carrier image and writes the result to a new image file.
///
/// When both a data file and a message are given, the data file wins.
#[derive(Default, Debug)]
pub struct EmbedApi {
    image: Option<PathBuf>,
    output: Option<PathBuf>,
    secret_file: Option<PathBuf>,
    message: Option<String>,
}

impl EmbedApi {
    /// The carrier image, used readonly
    pub fn with_image<A: AsRef<Path>>(mut self, image: A) -> Self {
        self.image = Some(image.as_ref().to_path_buf());
        self
    }

    /// The image file the embedded result is written to
    pub fn with_output<A: AsRef<Path>>(mut self, output: A) -> Self {
        self.output = Some(output.as_ref().to_path_buf());
        self
    }

    /// The file whose bytes become the secret
    pub fn with_secret_file<A: AsRef<Path>>(mut self, secret_file: A) -> Self {
        self.secret_file = Some(secret_file.as_ref().to_path_buf());
        self
    }

    pub fn use_secret_file(mut self, secret_file: Option<PathBuf>) -> Self {
        self.secret_file = secret_file;
        self
    }

    /// A text message that becomes the secret
    pub fn with_message(mut self, message: &str) -> Self {
        self.message = Some(message.to_string());
        self
    }

    pub fn use_message<S: AsRef<str>>(mut self, message: Option<S>) -> Self {
        self.message = message.map(|s| s.as_ref().to_string());
        self
    }

    pub fn execute(self) -> Result<()> {
        let Some(image) = self.image else {
            return Err(PixelveilError::CarrierNotSet);
        };
        let Some(output) = self.output else {
            return Err(PixelveilError::TargetNotSet);
        };

        let secret = match (self.secret_file, self.message) {
            (Some(secret_file), _) => std::fs::read(&secret_file)
                .map_err(|source| PixelveilError::ReadError { source })?,
            (None, Some(message)) => message.into_bytes(),
            (None, None) => return Err(PixelveilError::MissingSecret),
        };

        CarrierImage::from_file(&image)?
            .embed(&secret)?
            .save_as(&output)
    }
}

#[cfg(test)]
mod embed_api_tests {
    use super::*;

    #[test]
    fn should_require_a_carrier_image() {
        let result = prepare().with_message("hi").execute();
        assert!(matches!(result, Err(PixelveilError::CarrierNotSet)));
    }

    #[test]
    fn should_require_an_output_file() {
        let result = prepare()
            .with_image("carrier.png")
            .with_message("hi")
            .execute();
        assert!(matches!(result, Err(PixelveilError::TargetNotSet)));
    }

    #[test]
    fn should_require_some_secret() {
        let result = prepare()
            .with_image("carrier.png")
            .with_output("out.png")
            .execute();
        assert!(matches!(result, Err(PixelveilError::MissingSecret)));
    }
}
