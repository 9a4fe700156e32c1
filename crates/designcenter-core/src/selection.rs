//! Gallery selection state machine
//!
//! ```text
//!            select category (has content)          select style
//!   Closed ─────────────────────────────► CategoryOpen ────────────► PhotosOpen
//!     ▲                                        │                        │  ▲
//!     └──────────────── close ─────────────────┴────────── close ───────┘  │
//!                                                          next/prev/jump ─┘
//! ```
//!
//! Closing always returns to `Closed`; there is no way back from the
//! lightbox to the style picker without re-selecting the category.

use std::fmt;

use crate::catalog::{Category, Style};
use crate::error::{GalleryError, GalleryResult};
use crate::resolver::{Photo, PhotoResolver};

/// Whether an interaction changed anything
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Transition {
    Changed,
    /// The interaction is not meaningful in the current state
    Ignored,
}

impl Transition {
    pub fn changed(self) -> bool {
        self == Transition::Changed
    }
}

/// What the user has drilled into
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Selection {
    /// Only the carousel is showing
    #[default]
    Closed,
    /// Style picker open over the carousel
    CategoryOpen { category: Category },
    /// Lightbox open on `photos[index]`
    PhotosOpen {
        category: Category,
        style: Style,
        photos: Vec<Photo>,
        index: usize,
    },
}

impl fmt::Display for Selection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Selection::Closed => write!(f, "Closed"),
            Selection::CategoryOpen { category } => write!(f, "CategoryOpen({})", category.title),
            Selection::PhotosOpen {
                category,
                style,
                index,
                photos,
            } => write!(
                f,
                "PhotosOpen({}, {}, {}/{})",
                category.title,
                style.name,
                index + 1,
                photos.len()
            ),
        }
    }
}

impl Selection {
    /// Open the style picker for `category`. Disabled categories, and clicks
    /// while an overlay is already open, are ignored.
    pub fn open_category(&mut self, category: &Category) -> Transition {
        if !category.has_content || !self.is_closed() {
            return Transition::Ignored;
        }
        *self = Selection::CategoryOpen {
            category: category.clone(),
        };
        Transition::Changed
    }

    /// Open the lightbox on the first photo of (category, `style`).
    pub fn open_style(&mut self, style: &Style, resolver: &PhotoResolver) -> Transition {
        let Selection::CategoryOpen { category } = self else {
            return Transition::Ignored;
        };
        let category = category.clone();
        let photos = resolver.resolve(&category.title, &style.name);
        *self = Selection::PhotosOpen {
            category,
            style: style.clone(),
            photos,
            index: 0,
        };
        Transition::Changed
    }

    /// Return to `Closed` from any overlay.
    pub fn close(&mut self) -> Transition {
        if self.is_closed() {
            return Transition::Ignored;
        }
        *self = Selection::Closed;
        Transition::Changed
    }

    /// Advance to the next photo, wrapping at the end.
    pub fn next_photo(&mut self) -> Transition {
        self.step(1)
    }

    /// Go back to the previous photo, wrapping at the start.
    pub fn prev_photo(&mut self) -> Transition {
        self.step(-1)
    }

    fn step(&mut self, delta: isize) -> Transition {
        match self {
            Selection::PhotosOpen { photos, index, .. } if !photos.is_empty() => {
                let len = photos.len() as isize;
                *index = ((*index as isize + delta).rem_euclid(len)) as usize;
                Transition::Changed
            }
            _ => Transition::Ignored,
        }
    }

    /// Jump straight to `target`. Out-of-range targets are rejected, never
    /// clamped.
    pub fn jump_to(&mut self, target: usize) -> GalleryResult<Transition> {
        let len = self.photos().len();
        match self {
            Selection::PhotosOpen { photos, index, .. } if target < photos.len() => {
                if *index == target {
                    return Ok(Transition::Ignored);
                }
                *index = target;
                Ok(Transition::Changed)
            }
            _ => Err(GalleryError::PhotoIndexOutOfRange { index: target, len }),
        }
    }

    pub fn is_closed(&self) -> bool {
        matches!(self, Selection::Closed)
    }

    pub fn category(&self) -> Option<&Category> {
        match self {
            Selection::Closed => None,
            Selection::CategoryOpen { category } | Selection::PhotosOpen { category, .. } => {
                Some(category)
            }
        }
    }

    pub fn style(&self) -> Option<&Style> {
        match self {
            Selection::PhotosOpen { style, .. } => Some(style),
            _ => None,
        }
    }

    /// The current manifest; empty unless the lightbox is open.
    pub fn photos(&self) -> &[Photo] {
        match self {
            Selection::PhotosOpen { photos, .. } => photos,
            _ => &[],
        }
    }

    /// Index into [`Selection::photos`]; 0 when no photos are open.
    pub fn current_index(&self) -> usize {
        match self {
            Selection::PhotosOpen { index, .. } => *index,
            _ => 0,
        }
    }

    pub fn current_photo(&self) -> Option<&Photo> {
        self.photos().get(self.current_index())
    }
}
