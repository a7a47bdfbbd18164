//! Configuration section definitions.

mod assets;

pub use assets::AssetsConfig;
