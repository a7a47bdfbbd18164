//! Configuration management for `stickers.toml`.
//!
//! ```text
//! config/
//! ├── section/       # [assets]
//! ├── error.rs       # ConfigError
//! ├── util.rs        # config file discovery
//! └── mod.rs         # StickerConfig (this file)
//! ```
//!
//! A missing default config file is not an error: every field has a
//! default, so a bare project with a `static/assets/stickers/` directory
//! works without one.

mod error;
pub mod section;
mod util;

pub use error::ConfigError;
pub use section::AssetsConfig;

use util::{find_config_file, normalize_path};

use crate::{
    cli::{Cli, Commands, LoadArgs},
    debug,
};
use anyhow::{Context, Result, bail};
use serde::{Deserialize, Serialize};
use std::{
    fs,
    path::{Path, PathBuf},
};

/// Default config file name.
pub const DEFAULT_CONFIG_NAME: &str = "stickers.toml";

// ============================================================================
// root configuration
// ============================================================================

/// Root configuration structure representing stickers.toml
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct StickerConfig {
    /// Absolute path to the config file, empty when none was found
    #[serde(skip)]
    pub config_path: PathBuf,

    /// Project root directory - parent of config file, or cwd
    #[serde(skip)]
    pub root: PathBuf,

    /// Asset enumeration settings
    #[serde(default)]
    pub assets: AssetsConfig,
}

impl StickerConfig {
    /// Load configuration from CLI arguments.
    ///
    /// Searches upward from cwd for the config file. The project root is the
    /// config file's parent directory, or the cwd when no file exists.
    pub fn load(cli: &Cli) -> Result<Self> {
        let cwd = std::env::current_dir().context("Failed to get current working directory")?;

        let mut config = match find_config_file(&cli.config) {
            Some(path) => {
                debug!("config"; "using {}", path.display());
                let mut config = Self::from_path(&path)?;
                config.root = path.parent().map(Path::to_path_buf).unwrap_or(cwd);
                config.config_path = path;
                config
            }
            None if cli.config != Path::new(DEFAULT_CONFIG_NAME) => {
                bail!("Config file '{}' not found", cli.config.display());
            }
            None => {
                debug!("config"; "no {} found, using defaults", DEFAULT_CONFIG_NAME);
                Self {
                    root: cwd,
                    ..Self::default()
                }
            }
        };

        config.finalize(cli);
        config.validate()?;
        Ok(config)
    }

    /// Parse configuration from TOML string
    pub fn from_str(content: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(content)?;
        Ok(config)
    }

    /// Load configuration from file path.
    fn from_path(path: &Path) -> Result<Self, ConfigError> {
        let content =
            fs::read_to_string(path).map_err(|err| ConfigError::Io(path.to_path_buf(), err))?;
        Self::from_str(&content)
    }

    /// Resolve paths against the root and apply command options.
    fn finalize(&mut self, cli: &Cli) {
        let root = self.root.clone();
        self.assets.normalize(&root);

        if let Commands::Load { args } = &cli.command {
            self.apply_load_args(args);
        }
    }

    /// Apply load arguments from CLI.
    ///
    /// A CLI `--static-dir` is relative to the cwd, not the project root.
    fn apply_load_args(&mut self, args: &LoadArgs) {
        if let Some(dir) = &args.static_dir {
            self.assets.static_dir = normalize_path(dir);
        }
        if let Some(pattern) = &args.pattern {
            self.assets.pattern = pattern.clone();
        }
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        self.assets.validate()
    }
}

// ============================================================================
// tests
// ============================================================================
