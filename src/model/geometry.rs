//! Geometry types shared by the fitting engine and the slide model.
//!
//! All lengths are in one linear unit chosen by the caller. The slide
//! helpers in this crate use inches throughout.

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};

/// Pixel dimensions of a source image.
///
/// Created once per distinct image path by the metadata cache and never
/// modified afterwards.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ImageDimensions {
    width: u32,
    height: u32,
    aspect_ratio: f64,
}

impl ImageDimensions {
    /// Create dimensions from pixel width and height.
    ///
    /// Fails with [`Error::UnsupportedFormat`] if either side is zero, since
    /// no aspect ratio can be derived.
    pub fn new(width: u32, height: u32) -> Result<Self> {
        if width == 0 || height == 0 {
            return Err(Error::UnsupportedFormat(format!(
                "degenerate image size {}x{}",
                width, height
            )));
        }
        Ok(Self {
            width,
            height,
            aspect_ratio: width as f64 / height as f64,
        })
    }

    /// Width in pixels.
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Height in pixels.
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Width divided by height.
    pub fn aspect_ratio(&self) -> f64 {
        self.aspect_ratio
    }
}

/// Target rectangle supplied by the caller for a fitting call.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Viewport {
    pub x: f64,
    pub y: f64,
    pub w: f64,
    pub h: f64,
}

impl Viewport {
    /// Create a viewport.
    pub fn new(x: f64, y: f64, w: f64, h: f64) -> Self {
        Self { x, y, w, h }
    }

    /// Check that width and height are finite and strictly positive.
    pub fn validate(&self) -> Result<()> {
        let valid = |side: f64| side.is_finite() && side > 0.0;
        if valid(self.w) && valid(self.h) {
            Ok(())
        } else {
            Err(Error::InvalidViewport {
                w: self.w,
                h: self.h,
            })
        }
    }

    /// Width divided by height.
    pub fn aspect_ratio(&self) -> f64 {
        self.w / self.h
    }
}

/// Axis-aligned rectangle.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Rect {
    pub x: f64,
    pub y: f64,
    pub w: f64,
    pub h: f64,
}

impl Rect {
    /// Create a rectangle.
    pub fn new(x: f64, y: f64, w: f64, h: f64) -> Self {
        Self { x, y, w, h }
    }

    /// Right edge.
    pub fn right(&self) -> f64 {
        self.x + self.w
    }

    /// Bottom edge.
    pub fn bottom(&self) -> f64 {
        self.y + self.h
    }
}

/// Visible region of a cropped image, in virtual (pre-crop) units.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CropWindow {
    pub x: f64,
    pub y: f64,
    pub w: f64,
    pub h: f64,
}

/// Sizing directive attached to an image placement.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum Sizing {
    /// Keep only the given window of the virtual-size image visible.
    Crop(CropWindow),
}

/// Placement geometry produced by a fitting call.
///
/// For contain fitting, `rect` is the visible image rectangle and `sizing`
/// is `None`. For crop fitting, `rect` holds the viewport position and the
/// virtual size, and `sizing` carries the crop window.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FitResult {
    #[serde(flatten)]
    pub rect: Rect,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sizing: Option<Sizing>,
}

impl FitResult {
    /// A plain placement without cropping.
    pub fn placed(rect: Rect) -> Self {
        Self { rect, sizing: None }
    }

    /// A placement with a crop window.
    pub fn cropped(rect: Rect, window: CropWindow) -> Self {
        Self {
            rect,
            sizing: Some(Sizing::Crop(window)),
        }
    }

    /// The crop window, if this placement is cropped.
    pub fn crop_window(&self) -> Option<&CropWindow> {
        match &self.sizing {
            Some(Sizing::Crop(window)) => Some(window),
            None => None,
        }
    }

    /// Whether this placement crops the source image.
    pub fn is_cropped(&self) -> bool {
        self.sizing.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_image_dimensions() {
        let dims = ImageDimensions::new(1920, 1080).unwrap();
        assert_eq!(dims.width(), 1920);
        assert_eq!(dims.height(), 1080);
        assert_eq!(dims.aspect_ratio(), 1920.0 / 1080.0);
    }

    #[test]
    fn test_image_dimensions_zero() {
        assert!(matches!(
            ImageDimensions::new(0, 10),
            Err(Error::UnsupportedFormat(_))
        ));
        assert!(ImageDimensions::new(10, 0).is_err());
    }

    #[test]
    fn test_viewport_validate() {
        assert!(Viewport::new(0.0, 0.0, 1.0, 1.0).validate().is_ok());
        assert!(Viewport::new(0.0, 0.0, 0.0, 1.0).validate().is_err());
        assert!(Viewport::new(0.0, 0.0, 1.0, -2.0).validate().is_err());
        assert!(Viewport::new(0.0, 0.0, f64::NAN, 1.0).validate().is_err());
        assert!(Viewport::new(0.0, 0.0, f64::INFINITY, 1.0).validate().is_err());
        assert!(Viewport::new(0.0, 0.0, 1.0, f64::INFINITY).validate().is_err());
    }

    #[test]
    fn test_fit_result_json_shape() {
        let contain = FitResult::placed(Rect::new(1.0, 2.0, 3.0, 4.0));
        let json = serde_json::to_value(contain).unwrap();
        assert_eq!(json, serde_json::json!({"x": 1.0, "y": 2.0, "w": 3.0, "h": 4.0}));

        let crop = FitResult::cropped(
            Rect::new(1.0, 2.0, 8.0, 4.0),
            CropWindow {
                x: 2.0,
                y: 0.0,
                w: 4.0,
                h: 4.0,
            },
        );
        let json = serde_json::to_value(crop).unwrap();
        assert_eq!(json["sizing"]["type"], "crop");
        assert_eq!(json["sizing"]["x"], 2.0);
        assert_eq!(json["w"], 8.0);
        assert!(crop.is_cropped());
    }
}
