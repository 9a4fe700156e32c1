//! Image load tracking
//!
//! Records which image URLs have finished loading so the view can choose
//! between a spinner and the image. Events may arrive in any order; the most
//! recent event for a URL wins.

use std::collections::HashSet;

/// Session-scoped set of URLs whose image loaded successfully
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LoadTracker {
    loaded: HashSet<String>,
}

impl LoadTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Mark `url` loaded. Idempotent.
    pub fn on_loaded(&mut self, url: &str) {
        if self.loaded.insert(url.to_string()) {
            tracing::trace!(url, "image loaded");
        }
    }

    /// Mark `url` not loaded and report the failure. Idempotent.
    pub fn on_error(&mut self, url: &str) {
        tracing::warn!(url, "failed to load image");
        self.loaded.remove(url);
    }

    pub fn is_loaded(&self, url: &str) -> bool {
        self.loaded.contains(url)
    }

    /// Forget everything (new gallery session).
    pub fn clear(&mut self) {
        self.loaded.clear();
    }

    pub fn len(&self) -> usize {
        self.loaded.len()
    }

    pub fn is_empty(&self) -> bool {
        self.loaded.is_empty()
    }
}
