//! Asset resolution: asset id -> resolved path -> public path.

use super::{AssetError, AssetId};

/// Mount segment the default resolver prepends.
pub const DEFAULT_MOUNT: &str = "/static";

/// Characters stripped from a resolved path to get the public path.
///
/// Equal to the length of [`DEFAULT_MOUNT`].
pub const PREFIX_LEN: usize = 7;

/// Turns an asset id into its resolved path.
pub trait AssetResolver: Send + Sync {
    fn resolve(&self, id: &AssetId) -> Result<String, AssetError>;
}

/// Resolves assets to `{mount}/{relative}`.
///
/// With the default mount `/static`, `assets/stickers/cat.png` resolves to
/// `/static/assets/stickers/cat.png`.
#[derive(Debug, Clone)]
pub struct StaticMountResolver {
    mount: String,
}

impl StaticMountResolver {
    pub fn new(mount: impl Into<String>) -> Self {
        let mount = mount.into();
        let mount = mount.trim_end_matches('/').to_string();
        Self { mount }
    }
}

impl Default for StaticMountResolver {
    fn default() -> Self {
        Self::new(DEFAULT_MOUNT)
    }
}

impl AssetResolver for StaticMountResolver {
    fn resolve(&self, id: &AssetId) -> Result<String, AssetError> {
        if !id.is_contained() {
            return Err(AssetError::Resolve {
                path: id.source.clone(),
                message: "outside the static root".to_string(),
            });
        }
        let relative = id
            .relative_url()
            .ok_or_else(|| AssetError::NonUtf8Path(id.relative.clone()))?;
        Ok(format!("{}/{}", self.mount, relative))
    }
}

/// Drop the first `len` characters of `resolved`.
///
/// Counts characters, not bytes. Paths of `len` characters or fewer come
/// back empty rather than failing.
///
/// # Examples
/// ```ignore
/// assert_eq!(strip_prefix("/static/a.png", 7), "/a.png");
/// assert_eq!(strip_prefix("/static", 7), "");
/// assert_eq!(strip_prefix("/a", 7), "");
/// ```
pub fn strip_prefix(resolved: &str, len: usize) -> &str {
    match resolved.char_indices().nth(len) {
        Some((idx, _)) => &resolved[idx..],
        None => "",
    }
}
