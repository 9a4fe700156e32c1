//! Gallery session and its event loop
//!
//! A [`GallerySession`] owns everything a visitor's gallery interaction
//! mutates: the selection, the loaded-image set and the carousel page. Every
//! mutation is a [`GalleryEvent`] passed to [`GallerySession::dispatch`], so a
//! run of the UI can be replayed and tested without a renderer or network.

use std::sync::Arc;

use crate::carousel::Carousel;
use crate::catalog::Catalog;
use crate::config::GalleryConfig;
use crate::error::GalleryResult;
use crate::loading::LoadTracker;
use crate::resolver::PhotoResolver;
use crate::selection::{Selection, Transition};

/// Everything the rendering surface can report
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GalleryEvent {
    /// Category card clicked
    SelectCategory(u32),
    /// Style card clicked
    SelectStyle(u32),
    /// Close button on either overlay
    Close,
    NextPhoto,
    PrevPhoto,
    /// Thumbnail clicked
    JumpToPhoto(usize),
    /// An `<img>` finished loading
    ImageLoaded(String),
    /// An `<img>` failed to load
    ImageFailed(String),
    CarouselNext,
    CarouselPrev,
}

/// Outcome of fetching one remote image
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AssetStatus {
    Loaded,
    Failed,
}

/// Source of image load outcomes.
///
/// In the app the webview loads images and reports back through events;
/// tests implement this to script which URLs succeed.
pub trait AssetLoader {
    fn fetch(&self, url: &str) -> AssetStatus;
}

impl<F> AssetLoader for F
where
    F: Fn(&str) -> AssetStatus,
{
    fn fetch(&self, url: &str) -> AssetStatus {
        self(url)
    }
}

/// One visitor's gallery state
#[derive(Debug, Clone)]
pub struct GallerySession {
    catalog: Arc<Catalog>,
    resolver: PhotoResolver,
    selection: Selection,
    loaded: LoadTracker,
    carousel: Carousel,
}

impl Default for GallerySession {
    fn default() -> Self {
        Self::new()
    }
}

impl GallerySession {
    /// A session over the built-in catalog with default config.
    pub fn new() -> Self {
        let config = GalleryConfig::default();
        Self::from_parts(Catalog::builtin(), &config)
    }

    /// A session over the built-in catalog for a validated `config`.
    pub fn with_config(config: &GalleryConfig) -> GalleryResult<Self> {
        config.validate()?;
        Ok(Self::from_parts(Catalog::for_config(config), config))
    }

    /// A session over an explicit catalog.
    pub fn with_catalog(catalog: Arc<Catalog>, config: &GalleryConfig) -> GalleryResult<Self> {
        config.validate()?;
        Ok(Self::from_parts(catalog, config))
    }

    fn from_parts(catalog: Arc<Catalog>, config: &GalleryConfig) -> Self {
        let carousel = Carousel::new(catalog.categories().len(), config.page_size);
        Self {
            catalog,
            resolver: PhotoResolver::new(config.asset_base.clone()),
            selection: Selection::default(),
            loaded: LoadTracker::new(),
            carousel,
        }
    }

    /// Apply one event.
    ///
    /// Interactions that make no sense in the current state come back as
    /// [`Transition::Ignored`]; only unknown ids and out-of-range photo jumps
    /// are errors. Errors leave the session untouched.
    pub fn dispatch(&mut self, event: GalleryEvent) -> GalleryResult<Transition> {
        tracing::debug!(?event, state = %self.selection, "gallery event");

        let transition = match event {
            GalleryEvent::SelectCategory(id) => {
                let category = self.catalog.category(id)?;
                let transition = self.selection.open_category(category);
                if transition.changed() {
                    self.loaded.clear();
                    tracing::info!(category = %category.title, "gallery opened");
                }
                transition
            }
            GalleryEvent::SelectStyle(id) => {
                let style = self.catalog.style(id)?;
                let transition = self.selection.open_style(style, &self.resolver);
                if transition.changed() {
                    tracing::info!(
                        style = %style.name,
                        photos = self.selection.photos().len(),
                        "lightbox opened"
                    );
                }
                transition
            }
            GalleryEvent::Close => {
                let transition = self.selection.close();
                if transition.changed() {
                    self.loaded.clear();
                    tracing::info!("gallery closed");
                }
                transition
            }
            GalleryEvent::NextPhoto => self.selection.next_photo(),
            GalleryEvent::PrevPhoto => self.selection.prev_photo(),
            GalleryEvent::JumpToPhoto(index) => self.selection.jump_to(index)?,
            GalleryEvent::ImageLoaded(url) => self.image_loaded(&url),
            GalleryEvent::ImageFailed(url) => self.image_failed(&url),
            GalleryEvent::CarouselNext => Self::page(&mut self.carousel, Carousel::next),
            GalleryEvent::CarouselPrev => Self::page(&mut self.carousel, Carousel::prev),
        };

        if !transition.changed() {
            tracing::debug!(state = %self.selection, "event ignored");
        }
        Ok(transition)
    }

    // Load events that land after the gallery closed belong to a finished
    // session and must not repopulate the set.
    fn image_loaded(&mut self, url: &str) -> Transition {
        if self.selection.is_closed() || self.loaded.is_loaded(url) {
            return Transition::Ignored;
        }
        self.loaded.on_loaded(url);
        Transition::Changed
    }

    fn image_failed(&mut self, url: &str) -> Transition {
        if self.selection.is_closed() {
            return Transition::Ignored;
        }
        let was_loaded = self.loaded.is_loaded(url);
        self.loaded.on_error(url);
        if was_loaded {
            Transition::Changed
        } else {
            Transition::Ignored
        }
    }

    fn page(carousel: &mut Carousel, turn: fn(&mut Carousel)) -> Transition {
        let before = carousel.current_slide();
        turn(carousel);
        if carousel.current_slide() == before {
            Transition::Ignored
        } else {
            Transition::Changed
        }
    }

    /// Deliver a load outcome from `loader` for every image currently on
    /// screen. Returns how many images ended up loaded.
    pub fn settle<L: AssetLoader + ?Sized>(&mut self, loader: &L) -> usize {
        for url in self.visible_urls() {
            let event = match loader.fetch(&url) {
                AssetStatus::Loaded => GalleryEvent::ImageLoaded(url),
                AssetStatus::Failed => GalleryEvent::ImageFailed(url),
            };
            if let Err(e) = self.dispatch(event) {
                tracing::warn!("Load event rejected: {}", e);
            }
        }
        self.loaded.len()
    }

    /// URLs of images currently rendered: the lightbox photo first, then the
    /// thumbnail strip. Empty unless the lightbox is open.
    pub fn visible_urls(&self) -> Vec<String> {
        let current = self.selection.current_photo().map(|p| p.url.clone());
        current
            .iter()
            .cloned()
            .chain(
                self.selection
                    .photos()
                    .iter()
                    .map(|p| p.url.clone())
                    .filter(|url| Some(url) != current.as_ref()),
            )
            .collect()
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn selection(&self) -> &Selection {
        &self.selection
    }

    pub fn loaded(&self) -> &LoadTracker {
        &self.loaded
    }

    pub fn carousel(&self) -> &Carousel {
        &self.carousel
    }

    pub fn is_loaded(&self, url: &str) -> bool {
        self.loaded.is_loaded(url)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::GalleryError;

    fn open_kitchen_modern() -> GallerySession {
        let mut session = GallerySession::new();
        session.dispatch(GalleryEvent::SelectCategory(1)).unwrap();
        session.dispatch(GalleryEvent::SelectStyle(1)).unwrap();
        session
    }

    #[test]
    fn unknown_ids_are_errors() {
        let mut session = GallerySession::new();
        assert_eq!(
            session.dispatch(GalleryEvent::SelectCategory(42)),
            Err(GalleryError::CategoryNotFound(42))
        );
        session.dispatch(GalleryEvent::SelectCategory(1)).unwrap();
        assert_eq!(
            session.dispatch(GalleryEvent::SelectStyle(9)),
            Err(GalleryError::StyleNotFound(9))
        );
        assert!(matches!(
            session.selection(),
            Selection::CategoryOpen { .. }
        ));
    }

    #[test]
    fn opening_category_clears_loaded_set() {
        let mut session = open_kitchen_modern();
        let url = session.visible_urls()[0].clone();
        session.dispatch(GalleryEvent::ImageLoaded(url)).unwrap();
        assert_eq!(session.loaded().len(), 1);

        session.dispatch(GalleryEvent::Close).unwrap();
        session.dispatch(GalleryEvent::SelectCategory(2)).unwrap();
        assert!(session.loaded().is_empty());
    }

    #[test]
    fn late_load_after_close_is_ignored() {
        let mut session = open_kitchen_modern();
        let url = session.visible_urls()[0].clone();
        session.dispatch(GalleryEvent::Close).unwrap();

        let t = session.dispatch(GalleryEvent::ImageLoaded(url.clone())).unwrap();
        assert_eq!(t, Transition::Ignored);
        let t = session.dispatch(GalleryEvent::ImageFailed(url)).unwrap();
        assert_eq!(t, Transition::Ignored);
        assert!(session.loaded().is_empty());
    }

    #[test]
    fn visible_urls_start_with_current_photo() {
        let mut session = open_kitchen_modern();
        session.dispatch(GalleryEvent::JumpToPhoto(4)).unwrap();
        let urls = session.visible_urls();
        assert_eq!(urls.len(), 10);
        assert!(urls[0].ends_with("kitchen_modern_5.avif"));
        assert!(urls[1].ends_with("kitchen_modern_1.avif"));
    }

    #[test]
    fn visible_urls_empty_when_not_in_lightbox() {
        let mut session = GallerySession::new();
        assert!(session.visible_urls().is_empty());
        session.dispatch(GalleryEvent::SelectCategory(1)).unwrap();
        assert!(session.visible_urls().is_empty());
    }

    #[test]
    fn settle_with_closure_loader() {
        let mut session = open_kitchen_modern();
        let loaded = session.settle(&|url: &str| {
            if url.ends_with("_3.avif") {
                AssetStatus::Failed
            } else {
                AssetStatus::Loaded
            }
        });
        assert_eq!(loaded, 9);
        assert!(!session.is_loaded(&session.selection().photos()[2].url));
    }

    #[test]
    fn carousel_events_page() {
        let mut session = GallerySession::new();
        assert!(session
            .dispatch(GalleryEvent::CarouselNext)
            .unwrap()
            .changed());
        assert_eq!(session.carousel().current_slide(), 1);
        session.dispatch(GalleryEvent::CarouselNext).unwrap();
        assert_eq!(session.carousel().current_slide(), 0);
    }

    #[test]
    fn session_over_custom_catalog() {
        let builtin = Catalog::builtin();
        let catalog = Catalog::new(
            builtin.categories()[..2].to_vec(),
            builtin.styles()[2..].to_vec(),
        );
        let config = GalleryConfig::new("https://cdn.example.com/", 1).unwrap();
        let mut session = GallerySession::with_catalog(Arc::new(catalog), &config).unwrap();

        assert_eq!(session.carousel().page_count(), 2);
        assert_eq!(
            session.dispatch(GalleryEvent::SelectCategory(3)),
            Err(GalleryError::CategoryNotFound(3))
        );
        session.dispatch(GalleryEvent::SelectCategory(2)).unwrap();
        assert_eq!(
            session.dispatch(GalleryEvent::SelectStyle(1)),
            Err(GalleryError::StyleNotFound(1))
        );
        session.dispatch(GalleryEvent::SelectStyle(3)).unwrap();
        assert_eq!(
            session.visible_urls()[0],
            "https://cdn.example.com/Living Room/livingroom_ardeco_1.avif"
        );
    }

    #[test]
    fn with_catalog_validates_config() {
        let config = GalleryConfig {
            asset_base: "no-slash".to_string(),
            ..GalleryConfig::default()
        };
        assert!(GallerySession::with_catalog(Catalog::builtin(), &config).is_err());
    }

    #[test]
    fn invalid_config_is_rejected() {
        let config = GalleryConfig {
            page_size: 0,
            ..GalleryConfig::default()
        };
        assert!(GallerySession::with_config(&config).is_err());
    }

    #[test]
    fn custom_base_reaches_photos_and_covers() {
        let config = GalleryConfig::new("https://cdn.example.com/", 3).unwrap();
        let mut session = GallerySession::with_config(&config).unwrap();
        assert!(session.catalog().categories()[0]
            .image_url
            .starts_with("https://cdn.example.com/"));
        session.dispatch(GalleryEvent::SelectCategory(3)).unwrap();
        session.dispatch(GalleryEvent::SelectStyle(2)).unwrap();
        assert_eq!(
            session.visible_urls()[0],
            "https://cdn.example.com/Bedroom/bedroom_traditional_1.avif"
        );
    }
}
