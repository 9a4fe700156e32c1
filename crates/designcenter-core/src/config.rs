//! Gallery configuration
//!
//! The only external configuration is the base path of the remote asset store
//! and the number of category cards shown per carousel page.

use serde::{Deserialize, Serialize};

use crate::error::{GalleryError, GalleryResult};

/// Base URL every photo and category cover is addressed under.
pub const DEFAULT_ASSET_BASE: &str = "https://res.cloudinary.com/dnddesigncenter/image/upload/";

/// Category cards per carousel page.
pub const DEFAULT_PAGE_SIZE: usize = 3;

/// Runtime configuration for a gallery session.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GalleryConfig {
    /// Base URL of the asset store, always ending in `/`
    pub asset_base: String,
    /// Category cards per carousel page (>= 1)
    pub page_size: usize,
}

impl Default for GalleryConfig {
    fn default() -> Self {
        Self {
            asset_base: DEFAULT_ASSET_BASE.to_string(),
            page_size: DEFAULT_PAGE_SIZE,
        }
    }
}

impl GalleryConfig {
    /// Build a config and validate it.
    pub fn new(asset_base: impl Into<String>, page_size: usize) -> GalleryResult<Self> {
        let config = Self {
            asset_base: asset_base.into(),
            page_size,
        };
        config.validate()?;
        Ok(config)
    }

    /// Check the invariants the resolver and carousel rely on.
    pub fn validate(&self) -> GalleryResult<()> {
        if self.asset_base.is_empty() {
            return Err(GalleryError::InvalidConfig(
                "asset base must not be empty".to_string(),
            ));
        }
        if !self.asset_base.ends_with('/') {
            return Err(GalleryError::InvalidConfig(format!(
                "asset base must end with '/': {}",
                self.asset_base
            )));
        }
        if self.page_size == 0 {
            return Err(GalleryError::InvalidConfig(
                "page size must be at least 1".to_string(),
            ));
        }
        Ok(())
    }
}
