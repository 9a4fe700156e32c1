//! Inline SVG icons

use dioxus::prelude::*;
use designcenter_core::StyleIcon;

#[component]
pub fn ChevronLeft() -> Element {
    rsx! {
        svg {
            class: "icon",
            view_box: "0 0 24 24",
            fill: "none",
            stroke: "currentColor",
            stroke_width: "2",
            path { d: "M15 18l-6-6 6-6" }
        }
    }
}

#[component]
pub fn ChevronRight() -> Element {
    rsx! {
        svg {
            class: "icon",
            view_box: "0 0 24 24",
            fill: "none",
            stroke: "currentColor",
            stroke_width: "2",
            path { d: "M9 18l6-6-6-6" }
        }
    }
}

#[component]
pub fn CloseIcon() -> Element {
    rsx! {
        svg {
            class: "icon",
            view_box: "0 0 24 24",
            fill: "none",
            stroke: "currentColor",
            stroke_width: "2",
            path { d: "M18 6L6 18M6 6l12 12" }
        }
    }
}

/// Style card glyph
#[component]
pub fn StyleGlyph(icon: StyleIcon) -> Element {
    rsx! {
        svg {
            class: "style-card__icon",
            view_box: "0 0 24 24",
            fill: "none",
            stroke: "currentColor",
            stroke_width: "1.5",
            dangerous_inner_html: icon.svg_markup(),
        }
    }
}
