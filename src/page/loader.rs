//! Sticker loader: enumerate once, serve the cached list afterwards.
//!
//! ```text
//! load() ──► cache populated? ──yes──► PageData(cached)
//!                  │no
//!                  ▼
//!   source.enumerate() ─► resolver.resolve(id) ─► strip_prefix ─► push
//!                  │
//!                  ▼
//!          publish to cache ──► PageData(list)
//! ```
//!
//! Population runs under `OnceCell::get_or_try_init`, so callers racing on
//! an empty cache wait for the one in-flight enumeration instead of starting
//! their own. A failed population leaves the cache empty and the next call
//! tries again.

use std::sync::Arc;

use tokio::sync::OnceCell;

use crate::asset::{
    AssetError, AssetResolver, AssetSource, StaticDirSource, StaticMountResolver, strip_prefix,
};
use crate::config::{AssetsConfig, ConfigError};
use crate::debug;

use super::PageData;

/// Lazily populated sticker list owned by one loader.
pub struct StickerLoader {
    source: Box<dyn AssetSource>,
    resolver: Box<dyn AssetResolver>,
    /// Characters stripped from each resolved path
    strip: usize,
    images: OnceCell<Arc<[String]>>,
}

impl StickerLoader {
    pub fn new(
        source: impl AssetSource + 'static,
        resolver: impl AssetResolver + 'static,
        strip: usize,
    ) -> Self {
        Self {
            source: Box::new(source),
            resolver: Box::new(resolver),
            strip,
            images: OnceCell::new(),
        }
    }

    /// Loader over the static directory described by `[assets]`.
    pub fn from_config(config: &AssetsConfig) -> Result<Self, ConfigError> {
        let source = StaticDirSource::new(&config.static_dir, &config.pattern).map_err(|e| {
            ConfigError::Validation(format!("invalid pattern `{}`: {e}", config.pattern))
        })?;
        let resolver = StaticMountResolver::new(config.mount.as_str());
        Ok(Self::new(source, resolver, config.strip))
    }

    /// Return the page data, enumerating assets on the first call only.
    pub async fn load(&self) -> Result<PageData, AssetError> {
        let images = self.images.get_or_try_init(|| self.populate()).await?;
        Ok(PageData::new(Arc::clone(images)))
    }

    /// Whether a load has completed.
    ///
    /// True after a successful load even if it found nothing.
    pub fn is_populated(&self) -> bool {
        self.images.initialized()
    }

    async fn populate(&self) -> Result<Arc<[String]>, AssetError> {
        let assets = self.source.enumerate()?;
        let mut images = Vec::with_capacity(assets.len());

        for id in &assets {
            let resolved = self.resolver.resolve(id)?;
            images.push(strip_prefix(&resolved, self.strip).to_string());
            // Stay cooperative on large sticker directories
            tokio::task::yield_now().await;
        }

        debug!("load"; "{} sticker(s): {:?}", images.len(), images);
        Ok(Arc::from(images))
    }
}
