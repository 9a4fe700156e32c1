//! Page components for the Design Center site.

mod home;

pub use home::Home;
