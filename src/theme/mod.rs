//! Visual theme for the Design Center site.

mod styles;

pub use styles::GLOBAL_STYLES;
