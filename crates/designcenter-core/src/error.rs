//! Error types for the project gallery

use thiserror::Error;

/// Main error type for gallery operations
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GalleryError {
    /// No category with this id exists in the catalog
    #[error("Category not found: {0}")]
    CategoryNotFound(u32),

    /// No style with this id exists in the catalog
    #[error("Style not found: {0}")]
    StyleNotFound(u32),

    /// A photo jump asked for an index outside the current manifest.
    /// `len` is 0 when no photos are open.
    #[error("Photo index {index} out of range (manifest has {len} photos)")]
    PhotoIndexOutOfRange { index: usize, len: usize },

    /// Configuration failed validation
    #[error("Invalid config: {0}")]
    InvalidConfig(String),
}

/// Result type alias using GalleryError
pub type GalleryResult<T> = Result<T, GalleryError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = GalleryError::CategoryNotFound(42);
        assert_eq!(format!("{}", err), "Category not found: 42");
    }

    #[test]
    fn test_out_of_range_display() {
        let err = GalleryError::PhotoIndexOutOfRange { index: 10, len: 10 };
        assert_eq!(
            err.to_string(),
            "Photo index 10 out of range (manifest has 10 photos)"
        );
    }
}
