//! Contain and crop fitting of images into viewports.
//!
//! Both modes preserve the source aspect ratio exactly. Contain scales the
//! image down until it fits and centers it; crop scales it up until it
//! covers the viewport and hides the symmetric excess on one axis.

use crate::error::{Error, Result};
use crate::metadata::ImageMetadataCache;
use crate::model::{CropWindow, FitResult, Rect, Viewport};
use std::path::Path;
use std::str::FromStr;

/// Maximum disagreement tolerated between the two virtual-height formulas.
pub const CROP_TOLERANCE: f64 = 1e-6;

/// How an image is fitted into its viewport.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FitMode {
    /// Show the whole image, leaving margin on one axis
    #[default]
    Contain,
    /// Fill the whole viewport, cropping the excess
    Crop,
}

impl FromStr for FitMode {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "contain" => Ok(FitMode::Contain),
            "crop" | "cover" => Ok(FitMode::Crop),
            other => Err(Error::Other(format!("Unknown fit mode: {}", other))),
        }
    }
}

impl std::fmt::Display for FitMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            FitMode::Contain => write!(f, "contain"),
            FitMode::Crop => write!(f, "crop"),
        }
    }
}

/// Fit an image of the given aspect ratio inside the viewport.
///
/// The result touches the viewport on at least one axis and is centered on
/// the other.
pub fn contain_rect(aspect_ratio: f64, viewport: Viewport) -> Result<FitResult> {
    viewport.validate()?;
    check_aspect_ratio(aspect_ratio)?;

    let Viewport { x, y, w, h } = viewport;
    let (out_w, out_h) = if aspect_ratio >= viewport.aspect_ratio() {
        (w, w / aspect_ratio)
    } else {
        (h * aspect_ratio, h)
    };

    Ok(FitResult::placed(Rect::new(
        x + (w - out_w) / 2.0,
        y + (h - out_h) / 2.0,
        out_w,
        out_h,
    )))
}

/// Fill the viewport with an image of the given aspect ratio.
///
/// The returned rectangle holds the viewport position and the virtual
/// (uncropped) size; its crop window, in virtual units, is exactly the
/// viewport size.
pub fn crop_rect(aspect_ratio: f64, viewport: Viewport) -> Result<FitResult> {
    viewport.validate()?;
    check_aspect_ratio(aspect_ratio)?;

    let Viewport { x, y, w, h } = viewport;
    let box_ar = viewport.aspect_ratio();

    // Normalized visible sub-rectangle of the source.
    let (cx, cy, cw, ch) = if aspect_ratio >= box_ar {
        let cw = box_ar / aspect_ratio;
        ((1.0 - cw) / 2.0, 0.0, cw, 1.0)
    } else {
        let ch = aspect_ratio / box_ar;
        (0.0, (1.0 - ch) / 2.0, 1.0, ch)
    };

    let (virtual_w, virtual_h) = virtual_size(w, h, cw, ch, aspect_ratio);

    Ok(FitResult::cropped(
        Rect::new(x, y, virtual_w, virtual_h),
        CropWindow {
            x: cx * virtual_w,
            y: cy * virtual_h,
            w,
            h,
        },
    ))
}

/// Size of the uncropped image such that the visible fraction `cw x ch`
/// equals `w x h`.
///
/// Derived from the width first; if the implied visible height drifts from
/// `h` the size is derived again from the height side.
fn virtual_size(w: f64, h: f64, cw: f64, ch: f64, aspect_ratio: f64) -> (f64, f64) {
    let virtual_w = w / cw;
    let virtual_h = virtual_w / aspect_ratio;

    if (virtual_h * ch - h).abs() > CROP_TOLERANCE {
        log::warn!(
            "Crop sizing drift {:e} exceeds tolerance, deriving from height",
            virtual_h * ch - h
        );
        let virtual_h = h / ch;
        return (virtual_h * aspect_ratio, virtual_h);
    }

    (virtual_w, virtual_h)
}

fn check_aspect_ratio(aspect_ratio: f64) -> Result<()> {
    if aspect_ratio.is_finite() && aspect_ratio > 0.0 {
        Ok(())
    } else {
        Err(Error::UnsupportedFormat(format!(
            "invalid aspect ratio {}",
            aspect_ratio
        )))
    }
}

/// Fitting engine bound to an image metadata cache.
///
/// # Example
///
/// ```no_run
/// use slidefit::{BoxFitter, ImageMetadataCache};
///
/// let cache = ImageMetadataCache::new();
/// let fitter = BoxFitter::new(&cache);
/// let placement = fitter.fit_contain("assets/planning_network.png", 6.2, 1.9, 3.5, 2.5)?;
/// println!("{:?}", placement.rect);
/// # Ok::<(), slidefit::Error>(())
/// ```
#[derive(Debug, Clone, Copy)]
pub struct BoxFitter<'a> {
    cache: &'a ImageMetadataCache,
}

impl<'a> BoxFitter<'a> {
    /// Create a fitter reading aspect ratios from `cache`.
    pub fn new(cache: &'a ImageMetadataCache) -> Self {
        Self { cache }
    }

    /// Fit the whole image inside `(x, y, w, h)`.
    pub fn fit_contain<P: AsRef<Path>>(
        &self,
        path: P,
        x: f64,
        y: f64,
        w: f64,
        h: f64,
    ) -> Result<FitResult> {
        self.fit(path, FitMode::Contain, Viewport::new(x, y, w, h))
    }

    /// Fill `(x, y, w, h)` with the image, cropping the excess.
    pub fn fit_crop<P: AsRef<Path>>(
        &self,
        path: P,
        x: f64,
        y: f64,
        w: f64,
        h: f64,
    ) -> Result<FitResult> {
        self.fit(path, FitMode::Crop, Viewport::new(x, y, w, h))
    }

    /// Fit with an explicit mode.
    ///
    /// The viewport is validated before the image is looked up, so an
    /// invalid viewport never triggers a read.
    pub fn fit<P: AsRef<Path>>(
        &self,
        path: P,
        mode: FitMode,
        viewport: Viewport,
    ) -> Result<FitResult> {
        viewport.validate()?;
        let aspect_ratio = self.cache.aspect_ratio_of(path.as_ref())?;
        log::debug!(
            "Fitting {} ({:.4}) into {}x{} box ({:.4}), mode {}",
            path.as_ref().display(),
            aspect_ratio,
            viewport.w,
            viewport.h,
            viewport.aspect_ratio(),
            mode
        );

        match mode {
            FitMode::Contain => contain_rect(aspect_ratio, viewport),
            FitMode::Crop => crop_rect(aspect_ratio, viewport),
        }
    }
}
