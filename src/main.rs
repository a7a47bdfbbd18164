//! Stickers - build-time sticker asset loader for a static page.

mod asset;
mod cli;
mod config;
mod delay;
mod logger;
mod page;

use anyhow::Result;
use clap::{ColorChoice, Parser};
use cli::{Cli, Commands};
use config::StickerConfig;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Set global color override based on CLI option
    match cli.color {
        ColorChoice::Always => owo_colors::set_override(true),
        ColorChoice::Never => owo_colors::set_override(false),
        ColorChoice::Auto => {} // owo-colors auto-detects TTY
    }
    logger::set_verbose(cli.verbose);

    match &cli.command {
        Commands::Load { args } => {
            let config = StickerConfig::load(&cli)?;
            cli::load::run_load(args, &config).await
        }
        Commands::Wait { ms } => cli::wait::run_wait(*ms).await,
    }
}
