//! Error types for rendering and exporting icons.

use std::path::PathBuf;

/// Convenience result type used across the crate.
pub type IconResult<T> = Result<T, IconError>;

/// Errors raised while rendering or exporting an icon.
#[derive(thiserror::Error, Debug)]
pub enum IconError {
    /// The raster backend cannot be used at all (no drawing surface, no PNG encoder).
    ///
    /// The exporter recovers from this by writing a plain-text marker instead of images.
    #[error("imaging unavailable: {0}")]
    ImagingUnavailable(String),

    /// A filesystem operation failed.
    #[error("i/o error at '{}': {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Encoding or writing an image failed.
    #[error("image error at '{}': {source}", .path.display())]
    Image {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },
}

impl IconError {
    /// Build a [`IconError::ImagingUnavailable`] value.
    pub fn imaging_unavailable(msg: impl Into<String>) -> Self {
        Self::ImagingUnavailable(msg.into())
    }

    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }

    /// Wraps an image error, reclassifying unsupported-format errors as
    /// [`IconError::ImagingUnavailable`].
    pub(crate) fn image(path: impl Into<PathBuf>, source: image::ImageError) -> Self {
        match source {
            image::ImageError::Unsupported(err) => Self::ImagingUnavailable(err.to_string()),
            source => Self::Image {
                path: path.into(),
                source,
            },
        }
    }

    /// Returns true if this error means the raster backend is unusable.
    pub fn is_imaging_unavailable(&self) -> bool {
        matches!(self, Self::ImagingUnavailable(_))
    }
}
