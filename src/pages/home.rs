//! Home page
//!
//! Site header and the projects section. The remaining marketing sections
//! are static and live outside this app.

use dioxus::prelude::*;

use crate::components::ProjectGallery;

#[component]
pub fn Home() -> Element {
    rsx! {
        div { class: "home-page",
            header { class: "site-header",
                span { class: "site-brand", "Design Center" }
                nav { class: "site-nav",
                    a { href: "#projects", "Projects" }
                }
            }

            main { class: "home-main",
                ProjectGallery {}
            }
        }
    }
}
