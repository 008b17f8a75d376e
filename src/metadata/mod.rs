//! Image metadata: reading pixel dimensions and caching them per path.

mod cache;
mod source;

pub use cache::ImageMetadataCache;
pub use source::{AssetSource, DimensionReader, FsAssetSource, HeaderReader};
