//! Category and style catalogs
//!
//! Both catalogs are fixed at startup and never mutated. A session holds a
//! shared reference; nothing owns them exclusively.

use std::sync::{Arc, OnceLock};

use serde::{Deserialize, Serialize};

use crate::config::{GalleryConfig, DEFAULT_ASSET_BASE};
use crate::error::{GalleryError, GalleryResult};

/// A room category shown as a card in the carousel
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    pub id: u32,
    /// Display name, also the folder name in the asset store
    pub title: String,
    /// Cover image for the carousel card
    pub image_url: String,
    /// Categories without content are shown disabled and ignore clicks
    pub has_content: bool,
}

/// Glyph drawn on a style card
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum StyleIcon {
    /// Square split into quadrants
    Grid,
    /// Circle with meridian and equator
    Globe,
    /// Three stacked chevrons
    Layers,
}

impl StyleIcon {
    /// Inner SVG markup for a 24x24 viewBox, stroked with `currentColor`.
    pub fn svg_markup(&self) -> &'static str {
        match self {
            StyleIcon::Grid => concat!(
                r#"<rect x="3" y="3" width="18" height="18" rx="2" />"#,
                r#"<line x1="3" y1="12" x2="21" y2="12" />"#,
                r#"<line x1="12" y1="3" x2="12" y2="21" />"#,
            ),
            StyleIcon::Globe => concat!(
                r#"<circle cx="12" cy="12" r="10" />"#,
                r#"<path d="M12 2a15 15 0 000 20M2 12h20" />"#,
            ),
            StyleIcon::Layers => {
                r#"<path d="M12 2L2 7l10 5 10-5-10-5zM2 17l10 5 10-5M2 12l10 5 10-5" />"#
            }
        }
    }
}

/// A design style applied within a category
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Style {
    pub id: u32,
    pub name: String,
    pub icon: StyleIcon,
}

/// The immutable set of categories and styles
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Catalog {
    categories: Vec<Category>,
    styles: Vec<Style>,
}

/// (id, title, cover path under the asset base, has_content)
const CATEGORY_TABLE: [(u32, &str, &str, bool); 6] = [
    (1, "Kitchen", "Kitchen/kitchen_modern_5.jpg", true),
    (
        2,
        "Living Room",
        "Living%20Room/livingroom_traditional_5.avif",
        true,
    ),
    (3, "Bedroom", "Bedroom/bedroom_modern_1.avif", true),
    (
        4,
        "Dining Room",
        "3e48fefc776aeb5c41fc951ab88a7d85_xgf8bc.jpg",
        false,
    ),
    (5, "Lightning", "led-lighting-1_0_sklvzy.jpg", false),
    (
        6,
        "Bathroom",
        "Greenery-as-fresh-bathroom-decor-ideas-by-Decorilla-designer-Casey-H._i7fhfe.jpg",
        false,
    ),
];

const STYLE_TABLE: [(u32, &str, StyleIcon); 3] = [
    (1, "Modern", StyleIcon::Grid),
    (2, "Traditional", StyleIcon::Globe),
    (3, "Art Deco", StyleIcon::Layers),
];

impl Catalog {
    /// Build a catalog from explicit lists.
    pub fn new(categories: Vec<Category>, styles: Vec<Style>) -> Self {
        Self { categories, styles }
    }

    /// The built-in catalog with covers under the default asset base.
    ///
    /// Built once per process and shared.
    pub fn builtin() -> Arc<Catalog> {
        static BUILTIN: OnceLock<Arc<Catalog>> = OnceLock::new();
        BUILTIN
            .get_or_init(|| Arc::new(Catalog::with_asset_base(DEFAULT_ASSET_BASE)))
            .clone()
    }

    /// The built-in catalog for a config, reusing the shared one when the
    /// asset base is the default.
    pub fn for_config(config: &GalleryConfig) -> Arc<Catalog> {
        if config.asset_base == DEFAULT_ASSET_BASE {
            Catalog::builtin()
        } else {
            Arc::new(Catalog::with_asset_base(&config.asset_base))
        }
    }

    /// The built-in categories and styles with covers under `asset_base`.
    pub fn with_asset_base(asset_base: &str) -> Self {
        let categories = CATEGORY_TABLE
            .iter()
            .map(|&(id, title, cover, has_content)| Category {
                id,
                title: title.to_string(),
                image_url: format!("{}{}", asset_base, cover),
                has_content,
            })
            .collect();

        let styles = STYLE_TABLE
            .iter()
            .map(|&(id, name, icon)| Style {
                id,
                name: name.to_string(),
                icon,
            })
            .collect();

        Self { categories, styles }
    }

    pub fn categories(&self) -> &[Category] {
        &self.categories
    }

    pub fn styles(&self) -> &[Style] {
        &self.styles
    }

    /// Look up a category by id
    pub fn category(&self, id: u32) -> GalleryResult<&Category> {
        self.categories
            .iter()
            .find(|c| c.id == id)
            .ok_or(GalleryError::CategoryNotFound(id))
    }

    /// Look up a style by id
    pub fn style(&self, id: u32) -> GalleryResult<&Style> {
        self.styles
            .iter()
            .find(|s| s.id == id)
            .ok_or(GalleryError::StyleNotFound(id))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builtin_has_six_categories_and_three_styles() {
        let catalog = Catalog::builtin();
        assert_eq!(catalog.categories().len(), 6);
        assert_eq!(catalog.styles().len(), 3);

        let names: Vec<&str> = catalog.styles().iter().map(|s| s.name.as_str()).collect();
        assert_eq!(names, vec!["Modern", "Traditional", "Art Deco"]);
    }

    #[test]
    fn only_first_three_categories_have_content() {
        let catalog = Catalog::builtin();
        let enabled: Vec<&str> = catalog
            .categories()
            .iter()
            .filter(|c| c.has_content)
            .map(|c| c.title.as_str())
            .collect();
        assert_eq!(enabled, vec!["Kitchen", "Living Room", "Bedroom"]);
    }

    #[test]
    fn builtin_is_shared() {
        let a = Catalog::builtin();
        let b = Catalog::builtin();
        assert!(Arc::ptr_eq(&a, &b));
    }

    #[test]
    fn lookup_unknown_ids() {
        let catalog = Catalog::builtin();
        assert_eq!(catalog.category(99), Err(GalleryError::CategoryNotFound(99)));
        assert_eq!(catalog.style(0), Err(GalleryError::StyleNotFound(0)));
        assert_eq!(catalog.category(2).unwrap().title, "Living Room");
    }

    #[test]
    fn covers_follow_asset_base() {
        let catalog = Catalog::with_asset_base("https://cdn.example.com/");
        assert_eq!(
            catalog.category(1).unwrap().image_url,
            "https://cdn.example.com/Kitchen/kitchen_modern_5.jpg"
        );
    }

    #[test]
    fn every_icon_has_markup() {
        for style in Catalog::builtin().styles() {
            assert!(!style.icon.svg_markup().is_empty());
        }
    }
}
