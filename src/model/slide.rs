//! Recorded slide content.
//!
//! A [`Slide`] stores the drawing commands issued against it in order. The
//! deck can then be exported as JSON for a presentation writer to consume.

use super::drawing::{ChartFrame, ChartKind, ChartSeries, Fill, LineStyle, ShapeKind};
use super::geometry::{FitResult, Rect};
use super::layout::{Extent, SlideLayout, BULLET_INDENT};
use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// A hyperlink attached to a text run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Hyperlink {
    /// Link target
    pub url: String,
}

/// Bullet marker for a paragraph.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Bullet {
    /// Indentation in points
    pub indent: f64,
}

impl Default for Bullet {
    fn default() -> Self {
        Self {
            indent: BULLET_INDENT,
        }
    }
}

/// A run of text sharing the same style.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct TextRun {
    /// Text content
    pub text: String,

    /// Optional hyperlink
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hyperlink: Option<Hyperlink>,

    /// Text color (hex RGB)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,

    /// Font size override in points
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub font_size: Option<f64>,

    /// Bold text
    #[serde(default)]
    pub bold: bool,

    /// Render the run as its own bulleted paragraph
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bullet: Option<Bullet>,
}

impl TextRun {
    /// Create a plain run.
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            ..Default::default()
        }
    }

    /// Attach a hyperlink.
    pub fn with_link(mut self, url: impl Into<String>) -> Self {
        self.hyperlink = Some(Hyperlink { url: url.into() });
        self
    }

    /// Set the text color.
    pub fn with_color(mut self, color: impl Into<String>) -> Self {
        self.color = Some(color.into());
        self
    }

    /// Set the font size.
    pub fn with_font_size(mut self, size: f64) -> Self {
        self.font_size = Some(size);
        self
    }

    /// Make the run bold.
    pub fn bold(mut self) -> Self {
        self.bold = true;
        self
    }

    /// Bullet the run with the standard indentation.
    pub fn with_bullet(self) -> Self {
        self.with_bullet_indent(BULLET_INDENT)
    }

    /// Bullet the run with a custom indentation in points.
    pub fn with_bullet_indent(mut self, indent: f64) -> Self {
        self.bullet = Some(Bullet { indent });
        self
    }
}

/// Position, size and default style of a text box.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TextFrame {
    pub x: Extent,
    pub y: Extent,
    pub w: Extent,
    pub h: Extent,

    /// Font size in points
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub font_size: Option<f64>,

    /// Font face name
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub font_face: Option<String>,

    /// Default text color (hex RGB)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
}

impl TextFrame {
    /// Create a frame without style attributes.
    pub fn new(
        x: impl Into<Extent>,
        y: impl Into<Extent>,
        w: impl Into<Extent>,
        h: impl Into<Extent>,
    ) -> Self {
        Self {
            x: x.into(),
            y: y.into(),
            w: w.into(),
            h: h.into(),
            font_size: None,
            font_face: None,
            color: None,
        }
    }

    /// Set the font size.
    pub fn with_font_size(mut self, size: f64) -> Self {
        self.font_size = Some(size);
        self
    }

    /// Set the font face.
    pub fn with_font_face(mut self, face: impl Into<String>) -> Self {
        self.font_face = Some(face.into());
        self
    }

    /// Set the default text color.
    pub fn with_color(mut self, color: impl Into<String>) -> Self {
        self.color = Some(color.into());
        self
    }
}

/// A drawing command recorded on a slide.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum Element {
    /// A text box holding one or more runs
    Text { runs: Vec<TextRun>, frame: TextFrame },
    /// An image with its computed placement
    Image { path: PathBuf, placement: FitResult },
    /// A preset shape with optional fill and outline
    Shape {
        shape: ShapeKind,
        rect: Rect,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        fill: Option<Fill>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        line: Option<LineStyle>,
    },
    /// A chart over one or more data series
    Chart {
        chart: ChartKind,
        series: Vec<ChartSeries>,
        frame: ChartFrame,
    },
}

/// A single slide.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Slide {
    /// Slide number (1-indexed)
    pub number: u32,

    /// Recorded elements in drawing order
    pub elements: Vec<Element>,
}

impl Slide {
    /// Create an empty slide.
    pub fn new(number: u32) -> Self {
        Self {
            number,
            elements: Vec::new(),
        }
    }

    /// Check if nothing has been drawn yet.
    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    /// Iterate over all text runs on the slide.
    pub fn text_runs(&self) -> impl Iterator<Item = &TextRun> {
        self.elements
            .iter()
            .filter_map(|el| match el {
                Element::Text { runs, .. } => Some(runs),
                _ => None,
            })
            .flatten()
    }

    /// Iterate over all image placements on the slide.
    pub fn images(&self) -> impl Iterator<Item = (&Path, &FitResult)> {
        self.elements.iter().filter_map(|el| match el {
            Element::Image { path, placement } => Some((path.as_path(), placement)),
            _ => None,
        })
    }

    /// Iterate over all shapes on the slide.
    pub fn shapes(&self) -> impl Iterator<Item = (&ShapeKind, &Rect)> {
        self.elements.iter().filter_map(|el| match el {
            Element::Shape { shape, rect, .. } => Some((shape, rect)),
            _ => None,
        })
    }

    /// Iterate over all charts on the slide.
    pub fn charts(&self) -> impl Iterator<Item = (ChartKind, &[ChartSeries])> {
        self.elements.iter().filter_map(|el| match el {
            Element::Chart { chart, series, .. } => Some((*chart, series.as_slice())),
            _ => None,
        })
    }
}

/// JSON layout used when exporting a deck.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum JsonFormat {
    /// Indented, one field per line
    #[default]
    Pretty,
    /// Single line
    Compact,
}

/// An ordered collection of slides sharing one layout.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Deck {
    /// Page layout
    pub layout: SlideLayout,

    /// Slides in presentation order
    pub slides: Vec<Slide>,
}

impl Deck {
    /// Create an empty deck.
    pub fn new(layout: SlideLayout) -> Self {
        Self {
            layout,
            slides: Vec::new(),
        }
    }

    /// Append a new slide and return it for drawing.
    pub fn add_slide(&mut self) -> &mut Slide {
        let number = self.slides.len() as u32 + 1;
        self.slides.push(Slide::new(number));
        let last = self.slides.len() - 1;
        &mut self.slides[last]
    }

    /// Number of slides.
    pub fn slide_count(&self) -> usize {
        self.slides.len()
    }

    /// Get a slide by number (1-indexed).
    pub fn get_slide(&self, number: u32) -> Option<&Slide> {
        self.slides.iter().find(|s| s.number == number)
    }

    /// Serialize the deck to JSON.
    pub fn to_json(&self, format: JsonFormat) -> Result<String> {
        let json = match format {
            JsonFormat::Pretty => serde_json::to_string_pretty(self),
            JsonFormat::Compact => serde_json::to_string(self),
        };
        json.map_err(|e| Error::Render(format!("JSON serialization error: {}", e)))
    }

    /// Write the deck as pretty-printed JSON.
    pub fn write_file<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let json = self.to_json(JsonFormat::Pretty)?;
        std::fs::write(path.as_ref(), json)?;
        log::info!(
            "Wrote {} slides to {}",
            self.slides.len(),
            path.as_ref().display()
        );
        Ok(())
    }

    /// Write the deck as pretty-printed JSON without blocking the runtime.
    #[cfg(feature = "async")]
    pub async fn write_file_async<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let json = self.to_json(JsonFormat::Pretty)?;
        tokio::fs::write(path.as_ref(), json).await?;
        log::info!(
            "Wrote {} slides to {}",
            self.slides.len(),
            path.as_ref().display()
        );
        Ok(())
    }
}

impl Default for Deck {
    fn default() -> Self {
        Self::new(SlideLayout::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deck_numbers_slides() {
        let mut deck = Deck::default();
        deck.add_slide();
        let second = deck.add_slide();
        assert_eq!(second.number, 2);
        assert_eq!(deck.slide_count(), 2);
        assert!(deck.get_slide(1).unwrap().is_empty());
        assert!(deck.get_slide(3).is_none());
    }

    #[test]
    fn test_text_run_builder() {
        let run = TextRun::new("[1]")
            .with_link("https://example.com")
            .with_color("030A18");
        assert_eq!(run.hyperlink.unwrap().url, "https://example.com");
        assert_eq!(run.color.as_deref(), Some("030A18"));
        assert!(!run.bold);
        assert!(run.bullet.is_none());
    }

    #[test]
    fn test_bullet_uses_standard_indent() {
        let run = TextRun::new("Joint detection and tracking").with_bullet();
        assert_eq!(run.bullet, Some(Bullet { indent: 15.0 }));
        assert_eq!(Bullet::default().indent, BULLET_INDENT);

        let json = serde_json::to_value(&run).unwrap();
        assert_eq!(json["bullet"]["indent"], 15.0);
        let plain = serde_json::to_value(TextRun::new("x")).unwrap();
        assert!(plain.get("bullet").is_none());
    }

    #[test]
    fn test_slide_accessors() {
        let mut slide = Slide::new(1);
        slide.elements.push(Element::Text {
            runs: vec![TextRun::new("a"), TextRun::new("b")],
            frame: TextFrame::new(0.0, 0.0, 1.0, 1.0),
        });
        slide.elements.push(Element::Image {
            path: PathBuf::from("x.png"),
            placement: FitResult::placed(Rect::new(0.0, 0.0, 1.0, 1.0)),
        });
        slide.elements.push(Element::Shape {
            shape: ShapeKind::Rect,
            rect: Rect::new(0.3, 1.2, 9.4, 3.5),
            fill: Some(Fill::new("F3F6FA")),
            line: None,
        });
        assert_eq!(slide.text_runs().count(), 2);
        assert_eq!(slide.images().count(), 1);
        assert_eq!(slide.shapes().count(), 1);
        assert_eq!(slide.charts().count(), 0);
    }

    #[test]
    fn test_to_json_formats() {
        let mut deck = Deck::default();
        deck.add_slide().elements.push(Element::Image {
            path: PathBuf::from("title_background.png"),
            placement: FitResult::placed(Rect::new(5.5, 0.5, 4.5, 4.5)),
        });

        let pretty = deck.to_json(JsonFormat::Pretty).unwrap();
        assert!(pretty.contains("\"16x9\""));
        assert!(pretty.contains("title_background.png"));
        assert!(pretty.contains('\n'));

        let compact = deck.to_json(JsonFormat::Compact).unwrap();
        assert!(!compact.contains('\n'));
        assert_eq!(
            serde_json::from_str::<Deck>(&compact).unwrap(),
            serde_json::from_str::<Deck>(&pretty).unwrap()
        );
    }

    #[test]
    fn test_element_json_tag() {
        let el = Element::Image {
            path: PathBuf::from("x.png"),
            placement: FitResult::placed(Rect::new(0.0, 0.0, 1.0, 1.0)),
        };
        let json = serde_json::to_value(&el).unwrap();
        assert_eq!(json["kind"], "image");
        assert_eq!(json["placement"]["w"], 1.0);
    }
}
