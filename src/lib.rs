//! # slidefit
//!
//! Layout helpers for building slide decks programmatically.
//!
//! This library computes where images and text boxes go on a slide. It
//! does not encode presentation files. Placement geometry is handed to a
//! presentation writer through the [`SlideSurface`] trait, or recorded in a
//! [`Deck`] and exported as JSON.
//!
//! ## Quick Start
//!
//! ```no_run
//! use slidefit::{Session, Viewport, FitMode};
//!
//! fn main() -> slidefit::Result<()> {
//!     let session = Session::new();
//!
//!     // Fit a wide image into a 3.5 x 2.5 inch box without distortion
//!     let placement = session.fit_contain("assets/planning_network.png", 6.2, 1.9, 3.5, 2.5)?;
//!     println!("{:?}", placement.rect);
//!
//!     // Or fill the box, cropping the overflow
//!     let cropped = session.fit_crop("assets/title_background.png", 5.5, 0.56, 4.5, 4.5)?;
//!     println!("{:?}", cropped.crop_window());
//!
//!     Ok(())
//! }
//! ```
//!
//! ## Features
//!
//! - **Contain and crop fitting**: exact aspect-ratio preservation, centered
//!   or minimally cropped
//! - **Image metadata cache**: header-only dimension reads, one per path
//! - **Text-box sizing**: height estimates from font size and line count
//! - **Citation numbering**: one gap-free sequence per document session
//! - **Shapes and charts**: styled preset shapes and series charts recorded
//!   alongside text and images
//! - **Deck export**: recorded slides serialize to JSON

pub mod citation;
pub mod detect;
pub mod error;
pub mod fit;
pub mod metadata;
pub mod model;
pub mod render;
mod session;

// Re-export commonly used types
pub use citation::{render_citations, CitationRegister, CitationStyle};
pub use detect::{detect_format_from_bytes, detect_format_from_path, ImageFormat};
pub use error::{Error, Result};
pub use fit::{
    block_height, contain_rect, crop_rect, text_height, BoxFitter, FitMode, TextMetrics,
};
pub use metadata::{AssetSource, DimensionReader, FsAssetSource, HeaderReader, ImageMetadataCache};
pub use model::{
    Bullet, ChartFrame, ChartKind, ChartSeries, CropWindow, Deck, Element, Extent, Fill,
    FitResult, FontSize, ImageDimensions, JsonFormat, LineStyle, Margins, Palette, Rect,
    ShapeKind, Sizing, Slide, SlideLayout, TextFrame, TextRun, Viewport,
};
pub use render::SlideSurface;
pub use session::Session;

use std::path::Path;

/// Read the dimensions of a single image without caching.
///
/// # Example
///
/// ```no_run
/// let dims = slidefit::image_dimensions("assets/title_background.png").unwrap();
/// println!("{}x{}", dims.width(), dims.height());
/// ```
pub fn image_dimensions<P: AsRef<Path>>(path: P) -> Result<ImageDimensions> {
    let path = path.as_ref();
    let bytes = FsAssetSource.read(path)?;
    let (width, height) = HeaderReader.dimensions(&bytes)?;
    ImageDimensions::new(width, height)
}

/// Fit an image into a viewport using a throwaway cache.
///
/// Prefer a [`Session`] or [`ImageMetadataCache`] when placing the same
/// asset more than once.
pub fn fit_image<P: AsRef<Path>>(path: P, mode: FitMode, viewport: Viewport) -> Result<FitResult> {
    let dims = image_dimensions(path)?;
    match mode {
        FitMode::Contain => contain_rect(dims.aspect_ratio(), viewport),
        FitMode::Crop => crop_rect(dims.aspect_ratio(), viewport),
    }
}
