use std::path::PathBuf;

use clap::Args;

use crate::CliResult;

/// Extracts embedded data from a PNG image
#[derive(Args, Debug)]
pub struct ExtractArgs {
    /// Source image that contains embedded data
    #[arg(
        short = 'i',
        long = "in",
        value_name = "image source file",
        required = true
    )]
    pub image: PathBuf,

    /// Recovered raw data will be stored as binary file
    #[arg(short = 'o', long = "out", value_name = "output file", required = true)]
    pub output: PathBuf,
}

impl ExtractArgs {
    pub fn run(self) -> CliResult<()> {
        pixelveil_core::commands::extract(&self.image, &self.output)
    }
}
