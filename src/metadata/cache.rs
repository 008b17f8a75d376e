//! Per-path memoization of image dimensions.

use super::source::{AssetSource, DimensionReader, FsAssetSource, HeaderReader};
use crate::error::{Error, Result};
use crate::model::ImageDimensions;
use std::collections::HashMap;
use std::path::Path;
use std::sync::{Arc, PoisonError, RwLock};

/// Cache of image dimensions keyed by path string.
///
/// The first lookup of a path reads and decodes the file; later lookups of
/// the identical path string return the stored value without touching the
/// asset source. Entries are never evicted, so the cache should live no
/// longer than the set of assets it describes stays unchanged on disk.
///
/// Failed lookups are not stored and will be retried on the next call.
///
/// # Example
///
/// ```no_run
/// use slidefit::ImageMetadataCache;
///
/// let cache = ImageMetadataCache::new();
/// let dims = cache.dimensions_of("assets/planning_network.png")?;
/// println!("{}x{} (ar {:.3})", dims.width(), dims.height(), dims.aspect_ratio());
/// # Ok::<(), slidefit::Error>(())
/// ```
pub struct ImageMetadataCache {
    source: Arc<dyn AssetSource>,
    reader: Arc<dyn DimensionReader>,
    entries: RwLock<HashMap<String, ImageDimensions>>,
}

impl ImageMetadataCache {
    /// Create a cache reading from the filesystem and decoding headers with
    /// the `image` crate.
    pub fn new() -> Self {
        Self::with_collaborators(Arc::new(FsAssetSource), Arc::new(HeaderReader))
    }

    /// Create a cache with custom collaborators.
    pub fn with_collaborators(
        source: Arc<dyn AssetSource>,
        reader: Arc<dyn DimensionReader>,
    ) -> Self {
        Self {
            source,
            reader,
            entries: RwLock::new(HashMap::new()),
        }
    }

    /// Resolve a path to its image dimensions.
    ///
    /// # Errors
    ///
    /// * [`Error::ResourceNotFound`] if the path does not resolve
    /// * [`Error::UnsupportedFormat`] if the dimensions cannot be decoded
    pub fn dimensions_of<P: AsRef<Path>>(&self, path: P) -> Result<ImageDimensions> {
        let path = path.as_ref();
        let key = path.to_string_lossy().into_owned();

        if let Some(dims) = self.get(&key) {
            return Ok(dims);
        }

        log::debug!("Image metadata cache miss: {}", key);
        let bytes = self.source.read(path)?;
        let dims = self
            .reader
            .dimensions(&bytes)
            .and_then(|(width, height)| ImageDimensions::new(width, height))
            .map_err(|e| match e {
                Error::UnsupportedFormat(msg) => {
                    Error::UnsupportedFormat(format!("{}: {}", key, msg))
                }
                other => other,
            })?;

        // A concurrent reader may have stored the same key meanwhile; keep
        // whichever value landed first.
        let mut entries = self.entries.write().unwrap_or_else(PoisonError::into_inner);
        Ok(*entries.entry(key).or_insert(dims))
    }

    /// Aspect ratio (width / height) of the image at `path`.
    pub fn aspect_ratio_of<P: AsRef<Path>>(&self, path: P) -> Result<f64> {
        Ok(self.dimensions_of(path)?.aspect_ratio())
    }

    /// Load a known set of assets up front.
    ///
    /// Stops at the first failure and returns it. Returns the number of
    /// paths resolved otherwise.
    pub fn preload<I, P>(&self, paths: I) -> Result<usize>
    where
        I: IntoIterator<Item = P>,
        P: AsRef<Path>,
    {
        let mut count = 0;
        for path in paths {
            self.dimensions_of(path)?;
            count += 1;
        }
        Ok(count)
    }

    /// Check whether a path has already been resolved.
    pub fn contains<P: AsRef<Path>>(&self, path: P) -> bool {
        self.get(&path.as_ref().to_string_lossy()).is_some()
    }

    /// Number of cached entries.
    pub fn len(&self) -> usize {
        self.entries
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }

    /// Check if the cache is empty.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn get(&self, key: &str) -> Option<ImageDimensions> {
        self.entries
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .get(key)
            .copied()
    }
}

impl Default for ImageMetadataCache {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for ImageMetadataCache {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ImageMetadataCache")
            .field("entries", &self.len())
            .finish()
    }
}
