//! Asset identifier: one enumerated bundled file.

use std::path::{Component, Path, PathBuf};

/// A bundled static file found by an [`AssetSource`](super::AssetSource).
///
/// Carries both the absolute source path and the path relative to the
/// static-assets root, which is what resolvers derive public paths from.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct AssetId {
    /// Source file path (absolute)
    pub source: PathBuf,
    /// Path relative to the static-assets root (e.g. `assets/stickers/a.png`)
    pub relative: PathBuf,
}

impl AssetId {
    pub fn new(source: PathBuf, relative: PathBuf) -> Self {
        Self { source, relative }
    }

    /// Build an id from a file under `root`.
    ///
    /// Falls back to the full path when `source` is not under `root`.
    pub fn under(root: &Path, source: PathBuf) -> Self {
        let relative = source
            .strip_prefix(root)
            .map(Path::to_path_buf)
            .unwrap_or_else(|_| source.clone());
        Self::new(source, relative)
    }

    /// Whether the relative path stays inside the static root.
    pub fn is_contained(&self) -> bool {
        self.relative
            .components()
            .all(|c| matches!(c, Component::Normal(_) | Component::CurDir))
    }

    /// Relative path with `/` separators, if it is valid UTF-8.
    pub fn relative_url(&self) -> Option<String> {
        let mut parts = Vec::new();
        for component in self.relative.components() {
            parts.push(component.as_os_str().to_str()?);
        }
        Some(parts.join("/"))
    }
}
