//! UI Components for the Design Center site.

pub mod gallery;

pub use gallery::ProjectGallery;
