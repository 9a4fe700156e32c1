//! Lightbox Component
//!
//! Full-screen photo viewer with prev/next arrows and a thumbnail strip.
//! Every `<img>` reports its load outcome back to the session by URL; the
//! active photo shows a spinner until its URL is marked loaded.

use dioxus::prelude::*;
use designcenter_core::{GalleryEvent, LightboxView, ThumbnailView};

use super::icons::{ChevronLeft, ChevronRight, CloseIcon};
use crate::context::{send, use_gallery};

#[component]
pub fn Lightbox(lightbox: LightboxView) -> Element {
    let session = use_gallery();
    let current_url = lightbox.current_url.clone();
    let failed_url = lightbox.current_url.clone();

    rsx! {
        div { class: "lightbox",
            div { class: "lightbox__header",
                h3 { class: "lightbox__title", "{lightbox.heading}" }
                button {
                    class: "lightbox__close",
                    "aria-label": "Close",
                    onclick: move |_| send(session, GalleryEvent::Close),
                    CloseIcon {}
                }
            }

            div { class: "lightbox__stage",
                img {
                    class: if lightbox.current_loaded { "lightbox__image lightbox__image--loaded" } else { "lightbox__image" },
                    src: "{lightbox.current_url}",
                    alt: "",
                    onload: move |_| send(session, GalleryEvent::ImageLoaded(current_url.clone())),
                    onerror: move |_| send(session, GalleryEvent::ImageFailed(failed_url.clone())),
                }

                if !lightbox.current_loaded {
                    div { class: "lightbox__spinner",
                        div { class: "loading-spinner" }
                    }
                }

                button {
                    class: "lightbox__arrow lightbox__arrow--prev",
                    "aria-label": "Previous photo",
                    onclick: move |_| send(session, GalleryEvent::PrevPhoto),
                    ChevronLeft {}
                }
                button {
                    class: "lightbox__arrow lightbox__arrow--next",
                    "aria-label": "Next photo",
                    onclick: move |_| send(session, GalleryEvent::NextPhoto),
                    ChevronRight {}
                }
            }

            div { class: "thumbnail-strip",
                for thumb in lightbox.thumbnails.iter().cloned() {
                    Thumbnail { key: "{thumb.photo_id}", thumb }
                }
            }
        }
    }
}

/// One thumbnail, tracked independently of the main image
#[component]
fn Thumbnail(thumb: ThumbnailView) -> Element {
    let session = use_gallery();
    let index = thumb.index;
    let loaded_url = thumb.url.clone();
    let failed_url = thumb.url.clone();

    let frame_class = if thumb.active {
        "thumbnail thumbnail--active"
    } else {
        "thumbnail"
    };
    let image_class = if thumb.loaded {
        "thumbnail__image thumbnail__image--loaded"
    } else {
        "thumbnail__image"
    };

    rsx! {
        div {
            class: frame_class,
            onclick: move |_| send(session, GalleryEvent::JumpToPhoto(index)),

            img {
                class: image_class,
                src: "{thumb.url}",
                alt: "",
                onload: move |_| send(session, GalleryEvent::ImageLoaded(loaded_url.clone())),
                onerror: move |_| send(session, GalleryEvent::ImageFailed(failed_url.clone())),
            }
        }
    }
}
