//! Error types for slidefit library.

use std::io;
use std::path::Path;
use thiserror::Error;

/// Result type alias for slidefit operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Error types that can occur while measuring and placing slide content.
#[derive(Error, Debug)]
pub enum Error {
    /// I/O error when reading or writing files.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// The asset path does not resolve to a readable file.
    #[error("Resource not found: {0}")]
    ResourceNotFound(String),

    /// The bytes are present but image dimensions could not be decoded.
    #[error("Unsupported image format: {0}")]
    UnsupportedFormat(String),

    /// A fitting call received a non-positive or non-finite width or height.
    #[error("Invalid viewport {w} x {h}: width and height must be finite and positive")]
    InvalidViewport { w: f64, h: f64 },

    /// Chart data is malformed.
    #[error("Invalid chart series: {0}")]
    InvalidSeries(String),

    /// Error while serializing a deck (JSON).
    #[error("Rendering error: {0}")]
    Render(String),

    /// Generic error with message.
    #[error("{0}")]
    Other(String),
}

impl Error {
    /// Map an I/O error raised while opening `path`.
    ///
    /// `NotFound` becomes [`Error::ResourceNotFound`] so callers can tell a
    /// missing asset apart from a failing disk.
    pub(crate) fn from_io(err: io::Error, path: &Path) -> Self {
        match err.kind() {
            io::ErrorKind::NotFound => Error::ResourceNotFound(path.display().to_string()),
            _ => Error::Io(err),
        }
    }
}

impl From<image::ImageError> for Error {
    fn from(err: image::ImageError) -> Self {
        Error::UnsupportedFormat(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = Error::ResourceNotFound("assets/missing.png".to_string());
        assert_eq!(err.to_string(), "Resource not found: assets/missing.png");

        let err = Error::InvalidViewport { w: 0.0, h: 2.5 };
        assert_eq!(
            err.to_string(),
            "Invalid viewport 0 x 2.5: width and height must be finite and positive"
        );
    }

    #[test]
    fn test_io_error_conversion() {
        let io_err = io::Error::new(io::ErrorKind::PermissionDenied, "denied");
        let err: Error = io_err.into();
        assert!(matches!(err, Error::Io(_)));
    }

    #[test]
    fn test_from_io_not_found() {
        let io_err = io::Error::new(io::ErrorKind::NotFound, "file not found");
        let err = Error::from_io(io_err, Path::new("a/b.png"));
        assert!(matches!(err, Error::ResourceNotFound(ref p) if p.ends_with("b.png")));

        let io_err = io::Error::new(io::ErrorKind::Interrupted, "interrupted");
        let err = Error::from_io(io_err, Path::new("a/b.png"));
        assert!(matches!(err, Error::Io(_)));
    }
}
