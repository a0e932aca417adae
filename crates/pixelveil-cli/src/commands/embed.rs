use std::path::PathBuf;

use clap::Args;

use crate::CliResult;

/// Embeds data in the pixels of a PNG image
#[derive(Args, Debug)]
pub struct EmbedArgs {
    /// Carrier image, used readonly
    #[arg(short = 'i', long = "in", value_name = "carrier image", required = true)]
    pub image: PathBuf,

    /// Image with the embedded data will be stored as file
    #[arg(
        short = 'o',
        long = "out",
        value_name = "output image file",
        required = true
    )]
    pub output: PathBuf,

    /// File to embed in the image
    #[arg(
        short = 'd',
        long = "data",
        value_name = "data file",
        required_unless_present = "message"
    )]
    pub data_file: Option<PathBuf>,

    /// A text message that will be embedded
    #[arg(
        short,
        long,
        value_name = "text message",
        required_unless_present = "data_file"
    )]
    pub message: Option<String>,
}

impl EmbedArgs {
    pub fn run(self) -> CliResult<()> {
        pixelveil_core::commands::embed(&self.image, &self.output, self.data_file, self.message)
    }
}
