//! Gallery session context for the desktop app.
//!
//! The session lives in a single `Signal` provided by `App`; every click and
//! image event goes through [`send`], which keeps all mutation on the UI
//! thread and in one place.
//!
//! ## Usage
//!
//! ```ignore
//! let session = use_gallery();
//! rsx! {
//!     button { onclick: move |_| send(session, GalleryEvent::NextPhoto), ">" }
//! }
//! ```

use designcenter_core::{GalleryConfig, GalleryEvent, GallerySession};
use dioxus::prelude::*;

/// Get the gallery config set from command line args.
pub fn get_gallery_config() -> GalleryConfig {
    crate::get_gallery_config()
}

/// Hook to access the gallery session from context.
pub fn use_gallery() -> Signal<GallerySession> {
    use_context::<Signal<GallerySession>>()
}

/// Apply an event to the session.
///
/// Rejected requests are logged and otherwise dropped so the page stays
/// interactive.
pub fn send(mut session: Signal<GallerySession>, event: GalleryEvent) {
    if let Err(e) = session.write().dispatch(event) {
        tracing::error!("Gallery request rejected: {}", e);
    }
}
