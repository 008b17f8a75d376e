//! Collaborators used by the metadata cache: where bytes come from and how
//! dimensions are decoded from them.

use crate::error::{Error, Result};
use image::ImageReader;
use std::io::Cursor;
use std::path::Path;

/// Resolves an asset path to its byte content.
///
/// Implement this trait to serve assets from somewhere other than the local
/// filesystem (an archive, an in-memory bundle, a test probe).
pub trait AssetSource: Send + Sync {
    /// Read the whole asset.
    ///
    /// Must fail with [`Error::ResourceNotFound`] when the path does not
    /// resolve.
    fn read(&self, path: &Path) -> Result<Vec<u8>>;
}

/// Decodes pixel dimensions from raw image bytes.
pub trait DimensionReader: Send + Sync {
    /// Return `(width, height)` in pixels.
    ///
    /// Must fail with [`Error::UnsupportedFormat`] when the bytes cannot be
    /// decoded.
    fn dimensions(&self, bytes: &[u8]) -> Result<(u32, u32)>;
}

/// Reads assets from the local filesystem.
#[derive(Debug, Clone, Copy, Default)]
pub struct FsAssetSource;

impl AssetSource for FsAssetSource {
    fn read(&self, path: &Path) -> Result<Vec<u8>> {
        std::fs::read(path).map_err(|e| Error::from_io(e, path))
    }
}

/// Decodes only the image header using the `image` crate.
///
/// The format is guessed from the content, never from the file extension.
#[derive(Debug, Clone, Copy, Default)]
pub struct HeaderReader;

impl DimensionReader for HeaderReader {
    fn dimensions(&self, bytes: &[u8]) -> Result<(u32, u32)> {
        let reader = ImageReader::new(Cursor::new(bytes))
            .with_guessed_format()
            .map_err(|e| Error::UnsupportedFormat(e.to_string()))?;

        if reader.format().is_none() {
            return Err(Error::UnsupportedFormat(
                "unrecognized image signature".to_string(),
            ));
        }

        Ok(reader.into_dimensions()?)
    }
}
