//! Model types for slide placement.
//!
//! This module defines the geometry produced by the fitting engine and the
//! recorded slide content that a presentation writer consumes. The model is
//! independent of any output file format.

mod drawing;
mod geometry;
mod layout;
mod slide;

pub use drawing::{AxisScale, ChartFrame, ChartKind, ChartSeries, Fill, LineStyle, ShapeKind};
pub use geometry::{CropWindow, FitResult, ImageDimensions, Rect, Sizing, Viewport};
pub use layout::{Extent, FontSize, Margins, Palette, SlideLayout, BULLET_INDENT, FONT_FACE};
pub use slide::{Bullet, Deck, Element, Hyperlink, JsonFormat, Slide, TextFrame, TextRun};
