//! Render contract for the gallery
//!
//! [`GalleryView::of`] turns a session into exactly what should be on screen.
//! The three layers are driven only by the selection:
//!
//! | selection      | carousel | style picker | lightbox |
//! |----------------|----------|--------------|----------|
//! | `Closed`       | sharp    | -            | -        |
//! | `CategoryOpen` | blurred  | shown        | -        |
//! | `PhotosOpen`   | blurred  | -            | shown    |

use crate::catalog::{Category, Style};
use crate::selection::Selection;
use crate::session::GallerySession;

/// One category card in the carousel
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategoryCardView {
    pub category: Category,
    /// Disabled cards render dimmed and ignore clicks
    pub enabled: bool,
}

/// Style picker overlay
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StylePickerView {
    pub category_title: String,
    pub styles: Vec<Style>,
}

/// One entry of the lightbox thumbnail strip
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ThumbnailView {
    pub index: usize,
    pub photo_id: u32,
    pub url: String,
    pub active: bool,
    pub loaded: bool,
}

/// Full-screen photo viewer
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LightboxView {
    /// "{category} - {style}"
    pub heading: String,
    pub current_index: usize,
    pub current_url: String,
    /// Spinner while false, image fades in once true
    pub current_loaded: bool,
    pub thumbnails: Vec<ThumbnailView>,
}

/// Everything the gallery section renders
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GalleryView {
    pub cards: Vec<CategoryCardView>,
    /// Cards sharing the viewport width; each card is `100% / cards_per_page` wide
    pub cards_per_page: usize,
    pub carousel_offset_percent: usize,
    pub carousel_blurred: bool,
    pub style_picker: Option<StylePickerView>,
    pub lightbox: Option<LightboxView>,
}

impl GalleryView {
    pub fn of(session: &GallerySession) -> Self {
        let catalog = session.catalog();
        let selection = session.selection();

        let cards = catalog
            .categories()
            .iter()
            .map(|category| CategoryCardView {
                category: category.clone(),
                enabled: category.has_content,
            })
            .collect();

        let style_picker = match selection {
            Selection::CategoryOpen { category } => Some(StylePickerView {
                category_title: category.title.clone(),
                styles: catalog.styles().to_vec(),
            }),
            _ => None,
        };

        let lightbox = match selection {
            Selection::PhotosOpen {
                category,
                style,
                photos,
                index,
            } => photos.get(*index).map(|current| LightboxView {
                heading: format!("{} - {}", category.title, style.name),
                current_index: *index,
                current_url: current.url.clone(),
                current_loaded: session.is_loaded(&current.url),
                thumbnails: photos
                    .iter()
                    .enumerate()
                    .map(|(i, photo)| ThumbnailView {
                        index: i,
                        photo_id: photo.id,
                        url: photo.url.clone(),
                        active: i == *index,
                        loaded: session.is_loaded(&photo.url),
                    })
                    .collect(),
            }),
            _ => None,
        };

        Self {
            cards,
            cards_per_page: session.carousel().page_size(),
            carousel_offset_percent: session.carousel().translate_percent(),
            carousel_blurred: !selection.is_closed(),
            style_picker,
            lightbox,
        }
    }
}
