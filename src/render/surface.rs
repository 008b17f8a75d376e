//! Drawing surface abstraction for slide content.
//!
//! The crate never encodes a presentation file itself. Anything that can
//! accept text boxes, placed images, shapes and charts, such as a binding to
//! a presentation writer or the recording [`Slide`], implements
//! [`SlideSurface`].
//!
//! # Example
//!
//! ```
//! use slidefit::render::SlideSurface;
//! use slidefit::model::{
//!     ChartFrame, ChartKind, ChartSeries, Fill, FitResult, LineStyle, Rect, ShapeKind, TextFrame,
//!     TextRun,
//! };
//! use std::path::Path;
//!
//! struct CountingSurface {
//!     calls: usize,
//! }
//!
//! impl SlideSurface for CountingSurface {
//!     fn add_text(&mut self, _runs: Vec<TextRun>, _frame: TextFrame) {
//!         self.calls += 1;
//!     }
//!
//!     fn add_image(&mut self, _path: &Path, _placement: FitResult) {
//!         self.calls += 1;
//!     }
//!
//!     fn add_shape(
//!         &mut self,
//!         _kind: ShapeKind,
//!         _rect: Rect,
//!         _fill: Option<Fill>,
//!         _line: Option<LineStyle>,
//!     ) {
//!         self.calls += 1;
//!     }
//!
//!     fn add_chart(&mut self, _kind: ChartKind, _series: Vec<ChartSeries>, _frame: ChartFrame) {
//!         self.calls += 1;
//!     }
//! }
//! ```

use crate::model::{
    ChartFrame, ChartKind, ChartSeries, Element, Fill, FitResult, LineStyle, Rect, ShapeKind,
    Slide, TextFrame, TextRun,
};
use std::path::Path;

/// Target of drawing commands for one slide.
pub trait SlideSurface {
    /// Add a text box containing `runs`, emitted as a single batch.
    fn add_text(&mut self, runs: Vec<TextRun>, frame: TextFrame);

    /// Add an image from `path` with precomputed placement geometry.
    fn add_image(&mut self, path: &Path, placement: FitResult);

    /// Add a preset shape. `None` leaves the fill or outline off.
    fn add_shape(
        &mut self,
        kind: ShapeKind,
        rect: Rect,
        fill: Option<Fill>,
        line: Option<LineStyle>,
    );

    /// Add a chart plotting `series` in `frame`.
    fn add_chart(&mut self, kind: ChartKind, series: Vec<ChartSeries>, frame: ChartFrame);
}

impl SlideSurface for Slide {
    fn add_text(&mut self, runs: Vec<TextRun>, frame: TextFrame) {
        self.elements.push(Element::Text { runs, frame });
    }

    fn add_image(&mut self, path: &Path, placement: FitResult) {
        self.elements.push(Element::Image {
            path: path.to_path_buf(),
            placement,
        });
    }

    fn add_shape(
        &mut self,
        kind: ShapeKind,
        rect: Rect,
        fill: Option<Fill>,
        line: Option<LineStyle>,
    ) {
        self.elements.push(Element::Shape {
            shape: kind,
            rect,
            fill,
            line,
        });
    }

    fn add_chart(&mut self, kind: ChartKind, series: Vec<ChartSeries>, frame: ChartFrame) {
        self.elements.push(Element::Chart {
            chart: kind,
            series,
            frame,
        });
    }
}

impl<S: SlideSurface + ?Sized> SlideSurface for &mut S {
    fn add_text(&mut self, runs: Vec<TextRun>, frame: TextFrame) {
        (**self).add_text(runs, frame);
    }

    fn add_image(&mut self, path: &Path, placement: FitResult) {
        (**self).add_image(path, placement);
    }

    fn add_shape(
        &mut self,
        kind: ShapeKind,
        rect: Rect,
        fill: Option<Fill>,
        line: Option<LineStyle>,
    ) {
        (**self).add_shape(kind, rect, fill, line);
    }

    fn add_chart(&mut self, kind: ChartKind, series: Vec<ChartSeries>, frame: ChartFrame) {
        (**self).add_chart(kind, series, frame);
    }
}
