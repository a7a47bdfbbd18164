//! `[assets]` section configuration.
//!
//! # Example
//!
//! ```toml
//! [assets]
//! static_dir = "static"             # relative to the config file
//! pattern = "assets/stickers/*.*"   # relative to static_dir
//! mount = "/static"
//! strip = 7
//! ```

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::asset::{DEFAULT_MOUNT, DEFAULT_PATTERN, PREFIX_LEN};
use crate::config::ConfigError;

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct AssetsConfig {
    /// Static-assets root directory.
    pub static_dir: PathBuf,

    /// Glob selecting sticker files, relative to `static_dir`.
    pub pattern: String,

    /// Prefix prepended to every resolved asset path.
    pub mount: String,

    /// Number of characters stripped from a resolved path.
    pub strip: usize,
}

impl Default for AssetsConfig {
    fn default() -> Self {
        Self {
            static_dir: PathBuf::from("static"),
            pattern: DEFAULT_PATTERN.to_string(),
            mount: DEFAULT_MOUNT.to_string(),
            strip: PREFIX_LEN,
        }
    }
}

impl AssetsConfig {
    /// Make `static_dir` absolute against the project root.
    pub fn normalize(&mut self, root: &Path) {
        if self.static_dir.is_relative() {
            self.static_dir = root.join(&self.static_dir);
        }
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.pattern.trim().is_empty() {
            return Err(ConfigError::Validation(
                "[assets] pattern must not be empty".to_string(),
            ));
        }
        if let Err(e) = globset::Glob::new(&self.pattern) {
            return Err(ConfigError::Validation(format!(
                "[assets] invalid pattern `{}`: {e}",
                self.pattern
            )));
        }
        if self.mount.is_empty() {
            return Err(ConfigError::Validation(
                "[assets] mount must not be empty".to_string(),
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = AssetsConfig::default();
        assert_eq!(config.static_dir, PathBuf::from("static"));
        assert_eq!(config.pattern, "assets/stickers/*.*");
        assert_eq!(config.mount, "/static");
        assert_eq!(config.strip, 7);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_normalize_relative() {
        let mut config = AssetsConfig::default();
        config.normalize(Path::new("/site"));
        assert_eq!(config.static_dir, PathBuf::from("/site/static"));
    }

    #[test]
    fn test_normalize_absolute_untouched() {
        let mut config = AssetsConfig {
            static_dir: PathBuf::from("/srv/static"),
            ..Default::default()
        };
        config.normalize(Path::new("/site"));
        assert_eq!(config.static_dir, PathBuf::from("/srv/static"));
    }

    #[test]
    fn test_validate_rejects_bad_pattern() {
        let config = AssetsConfig {
            pattern: "assets/[oops".to_string(),
            ..Default::default()
        };
        assert!(matches!(config.validate(), Err(ConfigError::Validation(_))));

        let config = AssetsConfig {
            pattern: "  ".to_string(),
            ..Default::default()
        };
        assert!(matches!(config.validate(), Err(ConfigError::Validation(_))));
    }

    #[test]
    fn test_validate_rejects_empty_mount() {
        let config = AssetsConfig {
            mount: String::new(),
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }
}
