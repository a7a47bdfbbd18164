//! Page data handed to the rendering template.

use std::sync::Arc;

use serde::Serialize;

/// Record passed to the sticker page template.
///
/// Serializes as `{"images": [...]}`. Cloning is cheap: every `PageData`
/// produced by one loader wraps the same shared list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PageData {
    images: Arc<[String]>,
}

impl PageData {
    pub fn new(images: Arc<[String]>) -> Self {
        Self { images }
    }

    /// Public-facing paths of the sticker images.
    #[inline]
    pub fn images(&self) -> &[String] {
        &self.images
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.images.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.images.is_empty()
    }

    /// Whether both records wrap the very same list allocation.
    pub fn shares_list_with(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.images, &other.images)
    }
}
