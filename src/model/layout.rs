//! Slide page layout and typographic presets.

use crate::fit::text_height;
use serde::{Deserialize, Serialize};

/// Page size of every slide in a deck, in inches.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SlideLayout {
    /// Layout name (e.g., "16x9")
    pub name: String,

    /// Slide width in inches
    pub width: f64,

    /// Slide height in inches
    pub height: f64,
}

impl SlideLayout {
    /// Height of the widescreen layout in inches.
    pub const WIDESCREEN_HEIGHT: f64 = 5.625;

    /// Create a new layout with the given dimensions.
    pub fn new(name: impl Into<String>, width: f64, height: f64) -> Self {
        Self {
            name: name.into(),
            width,
            height,
        }
    }

    /// The 16:9 layout: 10 x 5.625 inches.
    pub fn widescreen() -> Self {
        let height = Self::WIDESCREEN_HEIGHT;
        Self::new("16x9", height / 9.0 * 16.0, height)
    }

    /// Width divided by height.
    pub fn aspect_ratio(&self) -> f64 {
        self.width / self.height
    }
}

impl Default for SlideLayout {
    fn default() -> Self {
        Self::widescreen()
    }
}

/// A frame length, either absolute or relative to the slide dimension.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Extent {
    /// Absolute length in inches
    Inches(f64),
    /// Percentage (0-100) of the slide width or height
    Percent(f64),
}

impl Extent {
    /// Resolve to inches against the total length of the matching axis.
    pub fn resolve(&self, total: f64) -> f64 {
        match *self {
            Extent::Inches(v) => v,
            Extent::Percent(p) => total * p / 100.0,
        }
    }
}

impl From<f64> for Extent {
    fn from(inches: f64) -> Self {
        Extent::Inches(inches)
    }
}

impl std::fmt::Display for Extent {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Extent::Inches(v) => write!(f, "{}in", v),
            Extent::Percent(p) => write!(f, "{}%", p),
        }
    }
}

/// Font size presets in points.
pub struct FontSize;

impl FontSize {
    pub const PRESENTATION_TITLE: f64 = 36.0;
    pub const PRESENTATION_SUBTITLE: f64 = 12.0;
    pub const SLIDE_TITLE: f64 = 24.0;
    pub const DATE: f64 = 12.0;
    pub const SECTION_TITLE: f64 = 16.0;
    pub const TEXT: f64 = 12.0;
    pub const DETAIL: f64 = 8.0;
    pub const PLACEHOLDER: f64 = 10.0;
    pub const CITATION: f64 = 6.0;
    pub const SUBHEADER: f64 = 21.0;
}

/// Common spacing values in inches.
pub struct Margins;

impl Margins {
    pub const DEFAULT_PADDING_BOTTOM: f64 = 0.23;
    pub const ELEMENT_MEDIUM_PADDING_MEDIUM: f64 = 0.3;
    pub const ELEMENT_MEDIUM_PADDING_LARGE: f64 = 0.6;

    /// Gap kept between the citation band and the bottom slide edge.
    pub const CITATION_BOTTOM: f64 = 0.15;

    /// Top edge of the citation band for the given layout.
    pub fn citation_top(layout: &SlideLayout) -> f64 {
        layout.height - text_height(FontSize::CITATION) - Self::CITATION_BOTTOM
    }
}

/// Named colors (hex RGB without `#`).
pub struct Palette;

impl Palette {
    pub const WHITE: &'static str = "FFFFFF";
    pub const BLACK: &'static str = "000000";
    pub const NEAR_BLACK_NAVY: &'static str = "030A18";
    pub const LIGHT_GRAY: &'static str = "F5F5F5";
    pub const GREYISH_BLUE: &'static str = "97B1DF";
    pub const LIGHT_GREEN: &'static str = "A4B6B8";
}

/// Default font face.
pub const FONT_FACE: &str = "Arial";

/// Bullet indentation in points.
pub const BULLET_INDENT: f64 = 15.0;
