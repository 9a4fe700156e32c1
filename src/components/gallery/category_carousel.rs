//! Category Carousel Component
//!
//! Paged strip of category cards with wrapping prev/next arrows.

use dioxus::prelude::*;
use designcenter_core::{CategoryCardView, GalleryEvent};

use super::icons::{ChevronLeft, ChevronRight};
use crate::context::{send, use_gallery};

/// Category carousel
///
/// # Example
///
/// ```rust,ignore
/// rsx! {
///     CategoryCarousel {
///         cards: view.cards,
///         cards_per_page: view.cards_per_page,
///         offset_percent: view.carousel_offset_percent,
///         blurred: view.carousel_blurred,
///     }
/// }
/// ```
#[component]
pub fn CategoryCarousel(
    /// Cards in catalog order
    cards: Vec<CategoryCardView>,
    /// Cards sharing one viewport width
    cards_per_page: usize,
    /// Strip translation in percent of the viewport
    offset_percent: usize,
    /// Blur while an overlay is open
    blurred: bool,
) -> Element {
    let session = use_gallery();

    rsx! {
        div {
            class: if blurred { "carousel carousel--blurred" } else { "carousel" },

            div { class: "carousel__viewport",
                div {
                    class: "carousel__strip",
                    style: "transform: translateX(-{offset_percent}%);",

                    for (i, card) in cards.into_iter().enumerate() {
                        {
                            let id = card.category.id;
                            let enabled = card.enabled;
                            let delay = format!("{:.1}", 0.3 + 0.2 * i as f32);
                            let title = card.category.title;
                            let image_url = card.category.image_url;
                            rsx! {
                                div {
                                    key: "{id}",
                                    class: if enabled { "category-card fade-up" } else { "category-card category-card--disabled fade-up" },
                                    style: "width: calc(100% / {cards_per_page}); animation-delay: {delay}s;",
                                    "aria-disabled": if enabled { "false" } else { "true" },
                                    onclick: move |_| send(session, GalleryEvent::SelectCategory(id)),

                                    div { class: "category-card__frame",
                                        div {
                                            class: "category-card__image",
                                            style: "background-image: url('{image_url}');",
                                        }
                                        div { class: "category-card__shade" }
                                        h3 { class: "category-card__title", "{title}" }
                                    }
                                }
                            }
                        }
                    }
                }

                button {
                    class: "nav-arrow nav-arrow--prev",
                    "aria-label": "Previous projects",
                    onclick: move |_| send(session, GalleryEvent::CarouselPrev),
                    ChevronLeft {}
                }
                button {
                    class: "nav-arrow nav-arrow--next",
                    "aria-label": "Next projects",
                    onclick: move |_| send(session, GalleryEvent::CarouselNext),
                    ChevronRight {}
                }
            }
        }
    }
}
