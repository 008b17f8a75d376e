//! Rendering numbered citation links onto a slide.

use super::CitationRegister;
use crate::fit::text_height;
use crate::model::{Extent, FontSize, Margins, Palette, SlideLayout, TextFrame, TextRun};
use crate::render::SlideSurface;

/// Placement and appearance of the citation band at the bottom of a slide.
#[derive(Debug, Clone, PartialEq)]
pub struct CitationStyle {
    /// Text box frame
    pub frame: TextFrame,

    /// Color applied to every citation run
    pub color: String,
}

impl CitationStyle {
    /// The default band for a layout: left-aligned with the slide title,
    /// 94% wide, one 6pt line tall, 0.15in above the bottom edge.
    pub fn for_layout(layout: &SlideLayout) -> Self {
        let frame = TextFrame::new(
            0.3,
            Margins::citation_top(layout),
            Extent::Percent(94.0),
            text_height(FontSize::CITATION),
        )
        .with_font_size(FontSize::CITATION);

        Self {
            frame,
            color: Palette::NEAR_BLACK_NAVY.to_string(),
        }
    }

    /// Replace the frame.
    pub fn with_frame(mut self, frame: TextFrame) -> Self {
        self.frame = frame;
        self
    }

    /// Set the run color.
    pub fn with_color(mut self, color: impl Into<String>) -> Self {
        self.color = color.into();
        self
    }
}

impl Default for CitationStyle {
    fn default() -> Self {
        Self::for_layout(&SlideLayout::default())
    }
}

/// Emit one bracketed, hyperlinked label per URL onto `surface`.
///
/// Labels come from `register` in input order, so numbering continues across
/// calls and slides. All runs are written in a single `add_text` call. An
/// empty `urls` slice draws nothing and consumes no labels.
///
/// Returns the labels assigned, in order.
///
/// # Example
///
/// ```
/// use slidefit::citation::{render_citations, CitationRegister, CitationStyle};
/// use slidefit::model::Slide;
///
/// let register = CitationRegister::new();
/// let style = CitationStyle::default();
/// let mut slide = Slide::new(1);
///
/// let labels = render_citations(&mut slide, &register, &style, &["https://a", "https://b"]);
/// assert_eq!(labels, vec![1, 2]);
/// ```
pub fn render_citations<S, U>(
    surface: &mut S,
    register: &CitationRegister,
    style: &CitationStyle,
    urls: &[U],
) -> Vec<u64>
where
    S: SlideSurface + ?Sized,
    U: AsRef<str>,
{
    if urls.is_empty() {
        return Vec::new();
    }

    let mut labels = Vec::with_capacity(urls.len());
    let runs: Vec<TextRun> = urls
        .iter()
        .map(|url| {
            let label = register.next_label();
            labels.push(label);
            TextRun::new(format!("[{}]", label))
                .with_link(url.as_ref())
                .with_color(style.color.as_str())
        })
        .collect();

    log::debug!("Rendering citations {:?}", labels);
    surface.add_text(runs, style.frame.clone());
    labels
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Element, Slide};

    #[test]
    fn test_runs_carry_label_and_link() {
        let register = CitationRegister::new();
        let mut slide = Slide::new(1);

        render_citations(
            &mut slide,
            &register,
            &CitationStyle::default(),
            &["https://a.example", "https://b.example"],
        );

        assert_eq!(slide.elements.len(), 1);
        let Element::Text { runs, frame } = &slide.elements[0] else {
            panic!("expected a text element");
        };
        assert_eq!(runs.len(), 2);
        assert_eq!(runs[0].text, "[1]");
        assert_eq!(runs[1].text, "[2]");
        assert_eq!(runs[1].hyperlink.as_ref().unwrap().url, "https://b.example");
        assert_eq!(runs[0].color.as_deref(), Some("030A18"));
        assert_eq!(frame.font_size, Some(6.0));
        assert_eq!(frame.w, Extent::Percent(94.0));
    }

    #[test]
    fn test_numbering_continues_across_slides() {
        let register = CitationRegister::new();
        let style = CitationStyle::default();
        let mut first = Slide::new(1);
        let mut second = Slide::new(2);

        let a = render_citations(&mut first, &register, &style, &["u1"]);
        let b = render_citations(&mut second, &register, &style, &["u2", "u3", "u4"]);
        let c = render_citations(&mut first, &register, &style, &["u5"]);

        assert_eq!([a, b, c].concat(), vec![1, 2, 3, 4, 5]);
    }

    #[test]
    fn test_empty_urls_draw_nothing() {
        let register = CitationRegister::new();
        let mut slide = Slide::new(1);
        let style = CitationStyle::default();
        let labels = render_citations::<_, &str>(&mut slide, &register, &style, &[]);
        assert!(labels.is_empty());
        assert!(slide.is_empty());
        assert_eq!(register.peek(), 1);
    }

    #[test]
    fn test_urls_not_validated() {
        let register = CitationRegister::new();
        let mut slide = Slide::new(1);
        let labels = render_citations(
            &mut slide,
            &register,
            &CitationStyle::default(),
            &[String::from("【517453676776078†L205-L249】")],
        );
        assert_eq!(labels, vec![1]);
    }

    #[test]
    fn test_style_for_layout() {
        let layout = SlideLayout::new("4x3", 10.0, 7.5);
        let style = CitationStyle::for_layout(&layout).with_color("FFFFFF");
        let Extent::Inches(y) = style.frame.y else {
            panic!("citation band top should be absolute");
        };
        assert!((y - (7.5 - 0.25 - 0.15)).abs() < 1e-9);
        assert_eq!(style.color, "FFFFFF");
    }
}
