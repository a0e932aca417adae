use clap::Parser;

mod cli;
mod commands;

use cli::{CliArgs, Commands};

pub type CliResult<T> = Result<T, pixelveil_core::PixelveilError>;

fn main() -> CliResult<()> {
    env_logger::init();

    let args = CliArgs::parse();
    match args.command {
        Commands::Embed(embed) => embed.run(),
        Commands::Extract(extract) => extract.run(),
    }
}
