use dioxus::prelude::*;
use designcenter_core::GallerySession;

use crate::context::get_gallery_config;
use crate::pages::Home;
use crate::theme::GLOBAL_STYLES;

/// Application routes.
///
/// - `/` - Home page with the projects gallery
#[derive(Clone, Routable, PartialEq)]
pub enum Route {
    #[route("/")]
    Home {},
}

/// Root application component.
///
/// Provides global styles, the gallery session context, and routing.
#[component]
pub fn App() -> Element {
    let session: Signal<GallerySession> = use_signal(|| {
        let config = get_gallery_config();
        GallerySession::with_config(&config).unwrap_or_else(|e| {
            tracing::error!("Invalid gallery config, using defaults: {}", e);
            GallerySession::new()
        })
    });

    // Provide session context to all child components
    use_context_provider(|| session);

    rsx! {
        style { {GLOBAL_STYLES} }
        Router::<Route> {}
    }
}
