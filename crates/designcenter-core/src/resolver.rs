//! Photo manifest resolution
//!
//! Maps a (category, style) pair to the ten remote photos for it. The URL
//! layout mirrors the asset store's fixed naming scheme:
//!
//! ```text
//! {base}{Category Title}/{categorytitle}_{style}_{n}.avif
//!        ^ folder keeps spaces   ^ image name drops them
//! ```
//!
//! "Art Deco" is stored as `ardeco`. No existence check is made here; a
//! missing asset only shows up as a load failure when rendered.

use serde::{Deserialize, Serialize};

use crate::config::DEFAULT_ASSET_BASE;

/// Photos in every (category, style) manifest.
pub const PHOTOS_PER_SET: u32 = 10;

/// One entry of a photo manifest
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Photo {
    /// 1-based position in the manifest
    pub id: u32,
    pub url: String,
    pub category: String,
    pub style: String,
}

/// Resolves photo manifests under a fixed asset base
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PhotoResolver {
    asset_base: String,
}

impl Default for PhotoResolver {
    fn default() -> Self {
        Self::new(DEFAULT_ASSET_BASE)
    }
}

impl PhotoResolver {
    pub fn new(asset_base: impl Into<String>) -> Self {
        Self {
            asset_base: asset_base.into(),
        }
    }

    pub fn asset_base(&self) -> &str {
        &self.asset_base
    }

    /// Ordered manifest for `category` and `style`. Total: any input yields
    /// ten well-formed URLs.
    pub fn resolve(&self, category: &str, style: &str) -> Vec<Photo> {
        let style_token = style_folder_token(style);
        let image_token = category_image_token(category);

        (1..=PHOTOS_PER_SET)
            .map(|n| {
                let image_name = format!("{}_{}_{}", image_token, style_token, n);
                Photo {
                    id: n,
                    url: format!("{}{}/{}.avif", self.asset_base, category, image_name),
                    category: category.to_string(),
                    style: style.to_string(),
                }
            })
            .collect()
    }
}

/// Manifest under the default asset base.
pub fn resolve(category: &str, style: &str) -> Vec<Photo> {
    PhotoResolver::default().resolve(category, style)
}

fn style_folder_token(style: &str) -> String {
    if style == "Art Deco" {
        "ardeco".to_string()
    } else {
        style.to_lowercase()
    }
}

fn category_image_token(category: &str) -> String {
    category.to_lowercase().replace(' ', "")
}
