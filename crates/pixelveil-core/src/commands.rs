use std::path::{Path, PathBuf};

use crate::result::Result;

/// Embeds a secret from `secret_file` and/or an inline `message` into
/// the carrier at `image` and saves the result as `output`.
pub fn embed(
    image: &Path,
    output: &Path,
    secret_file: Option<PathBuf>,
    message: Option<String>,
) -> Result<()> {
    crate::api::embed::prepare()
        .with_image(image)
        .with_output(output)
        .use_secret_file(secret_file)
        .use_message(message)
        .execute()
}

/// Extracts the embedded secret from `image` and writes the raw bytes
/// to `output`. Fails with `MissingTerminator` when the image carries no
/// terminator marker instead of handing out garbage bytes.
pub fn extract(image: &Path, output: &Path) -> Result<()> {
    crate::api::extract::prepare()
        .from_secret_image(image)
        .into_file(output)
        .execute()
}
