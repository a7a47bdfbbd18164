//! Command-line interface definitions.

use clap::{ColorChoice, Parser, Subcommand};
use std::path::PathBuf;

/// Sticker asset loader CLI
#[derive(Parser, Debug, Clone)]
#[command(version, about, long_about = None, arg_required_else_help = true)]
pub struct Cli {
    /// Control colored output (auto, always, never)
    #[arg(long, global = true, default_value = "auto")]
    pub color: ColorChoice,

    /// Config file path (default: stickers.toml)
    #[arg(short = 'C', long, global = true, default_value = "stickers.toml", value_hint = clap::ValueHint::FilePath)]
    pub config: PathBuf,

    /// Enable verbose output for debugging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// subcommands
    #[command(subcommand)]
    pub command: Commands,
}

/// Available subcommands
#[derive(Subcommand, Debug, Clone)]
pub enum Commands {
    /// Enumerate sticker assets and print the page data as JSON
    #[command(visible_alias = "l")]
    Load {
        #[command(flatten)]
        args: LoadArgs,
    },

    /// Wait for the given number of milliseconds
    #[command(visible_alias = "w")]
    Wait {
        /// Duration in milliseconds
        ms: u64,
    },
}

/// Load command arguments.
#[derive(clap::Args, Debug, Clone)]
pub struct LoadArgs {
    /// Static-assets directory (overrides `[assets] static_dir`)
    #[arg(short, long, value_hint = clap::ValueHint::DirPath)]
    pub static_dir: Option<PathBuf>,

    /// Glob selecting sticker files, relative to the static directory
    #[arg(long)]
    pub pattern: Option<String>,

    /// Pretty-print JSON output
    #[arg(short, long)]
    pub pretty: bool,

    /// Call load this many times against the same loader
    #[arg(short, long, default_value_t = 1, value_parser = clap::value_parser!(u32).range(1..))]
    pub repeat: u32,
}

#[allow(unused)]
impl Cli {
    pub const fn is_load(&self) -> bool {
        matches!(self.command, Commands::Load { .. })
    }
    pub const fn is_wait(&self) -> bool {
        matches!(self.command, Commands::Wait { .. })
    }
}
