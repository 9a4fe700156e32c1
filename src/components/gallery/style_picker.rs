//! Style Picker Overlay
//!
//! Shown over the blurred carousel once a category is chosen.

use dioxus::prelude::*;
use designcenter_core::{GalleryEvent, StylePickerView};

use super::icons::{CloseIcon, StyleGlyph};
use crate::context::{send, use_gallery};

#[component]
pub fn StylePicker(picker: StylePickerView) -> Element {
    let session = use_gallery();

    rsx! {
        div {
            class: "style-overlay",
            "aria-label": "{picker.category_title} styles",

            div { class: "style-overlay__body",
                button {
                    class: "overlay-close",
                    "aria-label": "Close",
                    onclick: move |_| send(session, GalleryEvent::Close),
                    CloseIcon {}
                }

                div { class: "style-cards",
                    for (i, style) in picker.styles.iter().cloned().enumerate() {
                        {
                            let id = style.id;
                            let delay = format!("{:.1}", 0.1 * i as f32);
                            rsx! {
                                div {
                                    key: "{id}",
                                    class: "style-card",
                                    style: "animation-delay: {delay}s;",
                                    onclick: move |_| send(session, GalleryEvent::SelectStyle(id)),

                                    StyleGlyph { icon: style.icon }
                                    span { class: "style-card__name", "{style.name}" }
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}
