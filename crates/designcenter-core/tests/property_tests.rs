//! Property-based tests for the gallery core
//!
//! Uses proptest to check the manifest, navigation and load-tracking
//! invariants over arbitrary inputs.

use std::collections::HashSet;

use designcenter_core::{
    resolve, Carousel, Catalog, GalleryEvent, GallerySession, LoadTracker, Photo, Selection,
};
use proptest::prelude::*;

// ============================================================================
// Strategy Generators
// ============================================================================

/// Arbitrary display names, spaces included
fn name_strategy() -> impl Strategy<Value = String> {
    prop::string::string_regex("[A-Za-z ]{0,24}").expect("valid regex")
}

/// Titles of the built-in categories
fn catalog_titles() -> Vec<String> {
    Catalog::builtin()
        .categories()
        .iter()
        .map(|c| c.title.clone())
        .collect()
}

/// A lightbox over `len` synthetic photos, positioned at `start`
fn photos_open(len: usize, start: usize) -> Selection {
    let catalog = Catalog::builtin();
    let photos = (0..len)
        .map(|i| Photo {
            id: i as u32 + 1,
            url: format!("https://cdn.example.com/p/{}.avif", i),
            category: "Kitchen".to_string(),
            style: "Modern".to_string(),
        })
        .collect();
    Selection::PhotosOpen {
        category: catalog.categories()[0].clone(),
        style: catalog.styles()[0].clone(),
        photos,
        index: start,
    }
}

/// Events that can be fired at a session
fn event_strategy() -> impl Strategy<Value = GalleryEvent> {
    prop_oneof![
        (1..=6u32).prop_map(GalleryEvent::SelectCategory),
        (1..=3u32).prop_map(GalleryEvent::SelectStyle),
        Just(GalleryEvent::NextPhoto),
        Just(GalleryEvent::PrevPhoto),
        (0..12usize).prop_map(GalleryEvent::JumpToPhoto),
        Just(GalleryEvent::CarouselNext),
        Just(GalleryEvent::CarouselPrev),
        (1..=10u32).prop_map(|n| GalleryEvent::ImageLoaded(format!(
            "https://res.cloudinary.com/dnddesigncenter/image/upload/Kitchen/kitchen_modern_{}.avif",
            n
        ))),
    ]
}

// ============================================================================
// Property Tests
// ============================================================================

proptest! {
    /// Every manifest has ten photos numbered 1..=10 with distinct URLs
    #[test]
    fn manifest_shape(category in name_strategy(), style in name_strategy()) {
        let photos = resolve(&category, &style);
        prop_assert_eq!(photos.len(), 10);

        let ids: Vec<u32> = photos.iter().map(|p| p.id).collect();
        prop_assert_eq!(ids, (1..=10).collect::<Vec<_>>());

        let urls: HashSet<&str> = photos.iter().map(|p| p.url.as_str()).collect();
        prop_assert_eq!(urls.len(), 10);
        for photo in &photos {
            prop_assert!(photo.url.ends_with(".avif"));
        }
    }

    /// Art Deco always maps to the `ardeco` token
    #[test]
    fn art_deco_token(category in prop::sample::select(catalog_titles())) {
        for photo in resolve(&category, "Art Deco") {
            let name = photo.url.rsplit('/').next().unwrap_or_default();
            prop_assert!(name.contains("_ardeco_"));
            prop_assert!(!photo.url.to_lowercase().contains("artdeco"));
            prop_assert!(!photo.url.to_lowercase().contains("art deco"));
        }
    }

    /// next() len times, or prev() len times, returns to the start
    #[test]
    fn photo_navigation_is_circular(len in 1..40usize, offset in 0..40usize) {
        let start = offset % len;

        let mut selection = photos_open(len, start);
        for _ in 0..len {
            selection.next_photo();
            prop_assert!(selection.current_index() < len);
        }
        prop_assert_eq!(selection.current_index(), start);

        for _ in 0..len {
            selection.prev_photo();
            prop_assert!(selection.current_index() < len);
        }
        prop_assert_eq!(selection.current_index(), start);
    }

    /// Out-of-range jumps are rejected and leave the index alone
    #[test]
    fn jump_rejects_out_of_range(len in 1..20usize, start in 0..20usize, target in 0..40usize) {
        let start = start % len;
        let mut selection = photos_open(len, start);
        let result = selection.jump_to(target);
        if target < len {
            prop_assert!(result.is_ok());
            prop_assert_eq!(selection.current_index(), target);
        } else {
            prop_assert!(result.is_err());
            prop_assert_eq!(selection.current_index(), start);
        }
    }

    /// Carousel paging wraps over ceil(count / size) pages
    #[test]
    fn carousel_wraps(count in 1..30usize, size in 1..6usize) {
        let mut carousel = Carousel::new(count, size);
        let pages = carousel.page_count();
        prop_assert_eq!(pages, (count + size - 1) / size);

        for _ in 0..pages {
            carousel.next();
            prop_assert!(carousel.current_slide() < pages);
        }
        prop_assert_eq!(carousel.current_slide(), 0);
        carousel.prev();
        prop_assert_eq!(carousel.current_slide(), pages - 1);
    }

    /// The most recent event for a URL decides whether it is loaded
    #[test]
    fn last_load_event_wins(events in prop::collection::vec(any::<bool>(), 1..20)) {
        let url = "https://cdn.example.com/a.avif";
        let mut tracker = LoadTracker::new();
        for &ok in &events {
            if ok {
                tracker.on_loaded(url);
            } else {
                tracker.on_error(url);
            }
        }
        prop_assert_eq!(tracker.is_loaded(url), *events.last().unwrap());
    }

    /// After any event sequence, the selection invariants hold and close
    /// resets everything
    #[test]
    fn close_always_resets(events in prop::collection::vec(event_strategy(), 0..30)) {
        let mut session = GallerySession::new();
        for event in events {
            let _ = session.dispatch(event);

            let selection = session.selection();
            if selection.style().is_some() {
                prop_assert!(selection.category().is_some());
            }
            if selection.photos().is_empty() {
                prop_assert_eq!(selection.current_index(), 0);
            } else {
                prop_assert!(selection.current_index() < selection.photos().len());
            }
        }

        let _ = session.dispatch(GalleryEvent::Close);
        prop_assert_eq!(session.selection(), &Selection::Closed);
        prop_assert!(session.selection().photos().is_empty());
        prop_assert!(session.loaded().is_empty());
    }
}
