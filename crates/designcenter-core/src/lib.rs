//! Design Center Gallery Core Library
//!
//! Catalog, photo manifests and viewer state for the project gallery.
//!
//! ## Overview
//!
//! The gallery is a three-stage drill-down: a carousel of room categories,
//! a style picker for the chosen category, and a full-screen lightbox over
//! the ten photos of the chosen (category, style) pair.
//!
//! ```text
//! user click ──► GallerySession::dispatch(GalleryEvent)
//!                  ├── Selection      Closed | CategoryOpen | PhotosOpen
//!                  ├── PhotoResolver  (category, style) -> 10 photos
//!                  ├── Carousel       paged, circular
//!                  └── LoadTracker    urls that finished loading
//!                          │
//!                          ▼
//!                 GalleryView::of(&session)  -> what to render
//! ```
//!
//! Nothing in this crate touches the network. Image load outcomes are
//! delivered back as [`GalleryEvent::ImageLoaded`] / [`GalleryEvent::ImageFailed`].
//!
//! ## Quick Start
//!
//! ```
//! use designcenter_core::{GalleryEvent, GallerySession, GalleryView};
//!
//! let mut session = GallerySession::new();
//! session.dispatch(GalleryEvent::SelectCategory(1)).unwrap(); // Kitchen
//! session.dispatch(GalleryEvent::SelectStyle(1)).unwrap(); // Modern
//!
//! let view = GalleryView::of(&session);
//! let lightbox = view.lightbox.unwrap();
//! assert_eq!(lightbox.heading, "Kitchen - Modern");
//! assert!(!lightbox.current_loaded);
//! ```

pub mod carousel;
pub mod catalog;
pub mod config;
pub mod error;
pub mod loading;
pub mod resolver;
pub mod selection;
pub mod session;
pub mod view;

// Re-exports
pub use carousel::Carousel;
pub use catalog::{Catalog, Category, Style, StyleIcon};
pub use config::{GalleryConfig, DEFAULT_ASSET_BASE, DEFAULT_PAGE_SIZE};
pub use error::{GalleryError, GalleryResult};
pub use loading::LoadTracker;
pub use resolver::{resolve, Photo, PhotoResolver, PHOTOS_PER_SET};
pub use selection::{Selection, Transition};
pub use session::{AssetLoader, AssetStatus, GalleryEvent, GallerySession};
pub use view::{CategoryCardView, GalleryView, LightboxView, StylePickerView, ThumbnailView};
