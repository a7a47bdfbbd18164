//! Sticker page: page data and its loader.

mod data;
mod loader;

pub use data::PageData;
pub use loader::StickerLoader;
