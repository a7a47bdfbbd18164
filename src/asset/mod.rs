//! Bundled static assets: enumeration and path resolution.

mod error;
mod id;
mod resolve;
mod scan;

pub use error::AssetError;
pub use id::AssetId;

// Resolution
pub use resolve::{AssetResolver, DEFAULT_MOUNT, PREFIX_LEN, StaticMountResolver, strip_prefix};

// Scanning (pure functions)
pub use scan::{AssetSource, DEFAULT_PATTERN, StaticDirSource};
