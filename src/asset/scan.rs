//! Asset enumeration (pure, no side effects).

use std::path::{Path, PathBuf};

use globset::{GlobBuilder, GlobMatcher};
use jwalk::WalkDir;

use super::{AssetError, AssetId};

/// Default pattern for sticker images, relative to the static directory.
pub const DEFAULT_PATTERN: &str = "assets/stickers/*.*";

/// Something that can list bundled assets.
pub trait AssetSource: Send + Sync {
    /// List every matching asset.
    ///
    /// Calling this twice may give different results if the underlying
    /// storage changed; callers that need stability cache the result.
    fn enumerate(&self) -> Result<Vec<AssetId>, AssetError>;
}

/// Enumerates files under a static-assets directory that match a glob.
///
/// ```text
/// static/
/// ├── favicon.ico              -> (skipped)
/// └── assets/
///     └── stickers/
///         ├── cat.png          -> assets/stickers/cat.png
///         ├── README           -> (skipped, no extension)
///         └── old/
///             └── dog.png      -> (skipped, `*` does not cross `/`)
/// ```
#[derive(Debug, Clone)]
pub struct StaticDirSource {
    root: PathBuf,
    matcher: GlobMatcher,
    /// Directory under `root` the walk starts from
    base: PathBuf,
    /// Walk depth below `base`, `None` when the pattern has `**`
    max_depth: Option<usize>,
}

/// Characters that make a path segment a glob rather than a literal.
const GLOB_META: &[char] = &['*', '?', '[', ']', '{', '}', '\\'];

impl StaticDirSource {
    /// Create a source for `root` matching `pattern`.
    ///
    /// `*` never matches a path separator, so `assets/stickers/*.*` only
    /// picks up direct children of `assets/stickers`. Only the directories
    /// the pattern can reach are read.
    pub fn new(root: impl Into<PathBuf>, pattern: &str) -> Result<Self, globset::Error> {
        let matcher = GlobBuilder::new(pattern)
            .literal_separator(true)
            .build()?
            .compile_matcher();
        let (base, max_depth) = walk_bounds(pattern);
        Ok(Self {
            root: root.into(),
            matcher,
            base,
            max_depth,
        })
    }
}

/// Split a pattern into its literal leading directories and the depth the
/// remaining segments can reach.
///
/// ```text
/// assets/stickers/*.*   -> (assets/stickers, Some(1))
/// assets/*/thumb/*.png  -> (assets, Some(3))
/// **/*.png              -> ("", None)
/// ```
fn walk_bounds(pattern: &str) -> (PathBuf, Option<usize>) {
    let segments: Vec<&str> = pattern.split('/').filter(|s| !s.is_empty()).collect();
    // The last segment names files, never a directory to start from
    let literal = segments[..segments.len().saturating_sub(1)]
        .iter()
        .take_while(|s| {
            let s: &str = s;
            !s.contains(GLOB_META) && s != "." && s != ".."
        })
        .count();

    let base: PathBuf = segments[..literal].iter().collect();
    let rest = &segments[literal..];
    let max_depth = if rest.iter().any(|s| s.contains("**")) {
        None
    } else {
        Some(rest.len())
    };
    (base, max_depth)
}

impl AssetSource for StaticDirSource {
    fn enumerate(&self) -> Result<Vec<AssetId>, AssetError> {
        let start = if self.base.as_os_str().is_empty() {
            self.root.clone()
        } else {
            self.root.join(&self.base)
        };
        if !start.is_dir() {
            return Ok(vec![]);
        }

        let mut walk = WalkDir::new(&start)
            .sort(true)
            .follow_links(true)
            .skip_hidden(false)
            // Dotfiles and dot-directories are never bundled
            .process_read_dir(|_, _, _, children| {
                children.retain(|child| {
                    child
                        .as_ref()
                        .map_or(true, |e| !e.file_name().to_string_lossy().starts_with('.'))
                });
            });
        if let Some(depth) = self.max_depth {
            walk = walk.max_depth(depth);
        }

        let mut results = Vec::new();
        for entry in walk {
            let entry = entry.map_err(|source| AssetError::Walk {
                dir: start.clone(),
                source,
            })?;
            let path = entry.path();
            if !path.is_file() {
                continue;
            }

            let id = AssetId::under(&self.root, path);
            if self.matcher.is_match(&id.relative) {
                results.push(id);
            }
        }

        Ok(results)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn stickers_dir(root: &Path) -> PathBuf {
        let dir = root.join("assets/stickers");
        fs::create_dir_all(&dir).unwrap();
        dir
    }

    #[test]
    fn test_enumerate_missing_root() {
        let dir = TempDir::new().unwrap();
        let source = StaticDirSource::new(dir.path().join("nonexistent"), DEFAULT_PATTERN).unwrap();
        assert!(source.enumerate().unwrap().is_empty());
    }

    #[test]
    fn test_enumerate_matches_pattern_only() {
        let dir = TempDir::new().unwrap();
        let stickers = stickers_dir(dir.path());
        fs::write(stickers.join("a.png"), "fake png").unwrap();
        fs::write(stickers.join("b.webp"), "fake webp").unwrap();
        fs::write(stickers.join("README"), "no extension").unwrap();
        fs::write(dir.path().join("favicon.ico"), "icon").unwrap();

        let source = StaticDirSource::new(dir.path(), DEFAULT_PATTERN).unwrap();
        let assets = source.enumerate().unwrap();

        assert_eq!(assets.len(), 2);
        assert!(
            assets
                .iter()
                .any(|a| a.relative == Path::new("assets/stickers/a.png"))
        );
        assert!(
            assets
                .iter()
                .any(|a| a.relative == Path::new("assets/stickers/b.webp"))
        );
        assert!(assets.iter().all(|a| a.source.starts_with(dir.path())));
    }

    #[test]
    fn test_enumerate_does_not_descend() {
        let dir = TempDir::new().unwrap();
        let stickers = stickers_dir(dir.path());
        fs::create_dir_all(stickers.join("old")).unwrap();
        fs::write(stickers.join("old/dog.png"), "fake png").unwrap();
        fs::write(stickers.join("cat.png"), "fake png").unwrap();

        let source = StaticDirSource::new(dir.path(), DEFAULT_PATTERN).unwrap();
        let assets = source.enumerate().unwrap();

        assert_eq!(assets.len(), 1);
        assert_eq!(assets[0].relative, Path::new("assets/stickers/cat.png"));
    }

    #[test]
    fn test_enumerate_is_sorted() {
        let dir = TempDir::new().unwrap();
        let stickers = stickers_dir(dir.path());
        for name in ["c.png", "a.png", "b.png"] {
            fs::write(stickers.join(name), name).unwrap();
        }

        let source = StaticDirSource::new(dir.path(), DEFAULT_PATTERN).unwrap();
        let names: Vec<_> = source
            .enumerate()
            .unwrap()
            .into_iter()
            .map(|a| a.relative_url().unwrap())
            .collect();

        assert_eq!(
            names,
            [
                "assets/stickers/a.png",
                "assets/stickers/b.png",
                "assets/stickers/c.png"
            ]
        );
    }

    #[test]
    fn test_enumerate_skips_dotfiles() {
        let dir = TempDir::new().unwrap();
        let stickers = stickers_dir(dir.path());
        fs::write(stickers.join(".DS_Store"), "junk").unwrap();
        fs::write(stickers.join("cat.png"), "fake png").unwrap();

        let source = StaticDirSource::new(dir.path(), DEFAULT_PATTERN).unwrap();
        let assets = source.enumerate().unwrap();

        assert_eq!(assets.len(), 1);
        assert_eq!(assets[0].relative, Path::new("assets/stickers/cat.png"));
    }

    #[test]
    fn test_invalid_pattern() {
        assert!(StaticDirSource::new("static", "assets/[stickers").is_err());
    }

    #[test]
    fn test_walk_bounds() {
        assert_eq!(
            walk_bounds("assets/stickers/*.*"),
            (PathBuf::from("assets/stickers"), Some(1))
        );
        assert_eq!(
            walk_bounds("assets/*/thumb/*.png"),
            (PathBuf::from("assets"), Some(3))
        );
        assert_eq!(walk_bounds("**/*.png"), (PathBuf::new(), None));
        assert_eq!(walk_bounds("*.png"), (PathBuf::new(), Some(1)));
        assert_eq!(walk_bounds("../up/*.png"), (PathBuf::new(), Some(3)));
    }

    #[cfg(unix)]
    #[test]
    fn test_enumerate_follows_symlinked_files() {
        use std::os::unix::fs::symlink;

        let dir = TempDir::new().unwrap();
        let stickers = stickers_dir(dir.path());
        fs::write(stickers.join("a.png"), "fake png").unwrap();
        fs::write(dir.path().join("real.png"), "fake png").unwrap();
        symlink("../../real.png", stickers.join("linked.png")).unwrap();

        let source = StaticDirSource::new(dir.path(), DEFAULT_PATTERN).unwrap();
        let names: Vec<_> = source
            .enumerate()
            .unwrap()
            .into_iter()
            .map(|a| a.relative_url().unwrap())
            .collect();

        assert_eq!(names, ["assets/stickers/a.png", "assets/stickers/linked.png"]);
    }

    #[cfg(unix)]
    #[test]
    fn test_enumerate_ignores_unrelated_directories() {
        use std::os::unix::fs::symlink;

        let dir = TempDir::new().unwrap();
        let stickers = stickers_dir(dir.path());
        fs::write(stickers.join("a.png"), "fake png").unwrap();

        // Broken entries outside the pattern's directories must not be read
        let private = dir.path().join("private");
        fs::create_dir_all(&private).unwrap();
        symlink("missing-target", private.join("dangling.png")).unwrap();
        symlink(dir.path(), private.join("loop")).unwrap();

        let source = StaticDirSource::new(dir.path(), DEFAULT_PATTERN).unwrap();
        let assets = source.enumerate().unwrap();

        assert_eq!(assets.len(), 1);
        assert_eq!(assets[0].relative, Path::new("assets/stickers/a.png"));
    }

    #[test]
    fn test_enumerate_recursive_pattern() {
        let dir = TempDir::new().unwrap();
        let stickers = stickers_dir(dir.path());
        fs::create_dir_all(stickers.join("old")).unwrap();
        fs::write(stickers.join("old/dog.png"), "fake png").unwrap();
        fs::write(stickers.join("cat.png"), "fake png").unwrap();

        let source = StaticDirSource::new(dir.path(), "assets/**/*.png").unwrap();
        let assets = source.enumerate().unwrap();

        assert_eq!(assets.len(), 2);
    }
}
