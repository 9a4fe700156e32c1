//! Project gallery components
//!
//! Three layers rendered from one `GalleryView`:
//! - the category carousel (always present, blurred behind overlays)
//! - the style picker overlay
//! - the lightbox with its thumbnail strip

mod category_carousel;
mod icons;
mod lightbox;
mod style_picker;

use dioxus::prelude::*;
use designcenter_core::GalleryView;

use crate::context::use_gallery;

pub use category_carousel::CategoryCarousel;
pub use lightbox::Lightbox;
pub use style_picker::StylePicker;

/// The "Our Projects" section
#[component]
pub fn ProjectGallery() -> Element {
    let session = use_gallery();
    let view = GalleryView::of(&session.read());

    rsx! {
        section { id: "projects", class: "projects",
            h2 { class: "projects-title fade-up", "Our Projects" }

            CategoryCarousel {
                cards: view.cards,
                cards_per_page: view.cards_per_page,
                offset_percent: view.carousel_offset_percent,
                blurred: view.carousel_blurred,
            }

            if let Some(picker) = view.style_picker {
                StylePicker { picker }
            }

            if let Some(lightbox) = view.lightbox {
                Lightbox { lightbox }
            }
        }
    }
}
