//! Document-generation session.
//!
//! A [`Session`] owns the state that must be shared across every slide of
//! one output document: the image metadata cache and the citation register.
//! Creating a new session starts citation numbering again at 1 and begins
//! with an empty cache.

use crate::citation::{render_citations, CitationRegister, CitationStyle};
use crate::error::Result;
use crate::fit::{text_height, BoxFitter, FitMode};
use crate::metadata::ImageMetadataCache;
use crate::model::{
    Deck, Extent, FitResult, FontSize, Palette, SlideLayout, TextFrame, TextRun, Viewport,
    FONT_FACE,
};
use crate::render::SlideSurface;
use std::path::Path;

/// Shared state and helpers for building one slide deck.
///
/// # Example
///
/// ```no_run
/// use slidefit::{FitMode, Session, Viewport};
///
/// let session = Session::new();
/// let mut deck = session.new_deck();
/// let slide = deck.add_slide();
///
/// session.add_slide_title(slide, "Outline", None);
/// session.add_image(
///     slide,
///     "assets/planning_network.png",
///     FitMode::Contain,
///     Viewport::new(6.2, 1.9, 3.5, 2.5),
/// )?;
/// session.render_citations(slide, &["https://example.com/paper"]);
///
/// deck.write_file("deck.json")?;
/// # Ok::<(), slidefit::Error>(())
/// ```
#[derive(Debug)]
pub struct Session {
    layout: SlideLayout,
    cache: ImageMetadataCache,
    citations: CitationRegister,
    citation_style: CitationStyle,
}

impl Session {
    /// Create a session with the widescreen layout and a filesystem-backed
    /// metadata cache.
    pub fn new() -> Self {
        Self::with_cache(ImageMetadataCache::new())
    }

    /// Create a session around an existing cache.
    pub fn with_cache(cache: ImageMetadataCache) -> Self {
        let layout = SlideLayout::default();
        Self {
            citation_style: CitationStyle::for_layout(&layout),
            layout,
            cache,
            citations: CitationRegister::new(),
        }
    }

    /// Use a different page layout.
    ///
    /// The citation band is recomputed for the new layout.
    pub fn with_layout(mut self, layout: SlideLayout) -> Self {
        self.citation_style = CitationStyle::for_layout(&layout);
        self.layout = layout;
        self
    }

    /// Override the citation band style.
    pub fn with_citation_style(mut self, style: CitationStyle) -> Self {
        self.citation_style = style;
        self
    }

    /// Page layout of this session.
    pub fn layout(&self) -> &SlideLayout {
        &self.layout
    }

    /// The image metadata cache.
    pub fn cache(&self) -> &ImageMetadataCache {
        &self.cache
    }

    /// The citation register.
    pub fn citations(&self) -> &CitationRegister {
        &self.citations
    }

    /// A fitting engine bound to this session's cache.
    pub fn fitter(&self) -> BoxFitter<'_> {
        BoxFitter::new(&self.cache)
    }

    /// An empty deck using this session's layout.
    pub fn new_deck(&self) -> Deck {
        Deck::new(self.layout.clone())
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
        self.fitter().fit_contain(path, x, y, w, h)
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
        self.fitter().fit_crop(path, x, y, w, h)
    }

    /// Fit an image and draw it on `surface`.
    ///
    /// Nothing is drawn if fitting fails.
    pub fn add_image<S, P>(
        &self,
        surface: &mut S,
        path: P,
        mode: FitMode,
        viewport: Viewport,
    ) -> Result<FitResult>
    where
        S: SlideSurface + ?Sized,
        P: AsRef<Path>,
    {
        let path = path.as_ref();
        let placement = self.fitter().fit(path, mode, viewport)?;
        surface.add_image(path, placement);
        Ok(placement)
    }

    /// Draw a slide title in the standard title frame.
    ///
    /// Defaults to black when no color is given.
    pub fn add_slide_title<S>(&self, surface: &mut S, title: &str, color: Option<&str>)
    where
        S: SlideSurface + ?Sized,
    {
        let frame = TextFrame::new(
            0.3,
            0.3,
            Extent::Percent(94.0),
            text_height(FontSize::SLIDE_TITLE),
        )
        .with_font_face(FONT_FACE)
        .with_font_size(FontSize::SLIDE_TITLE)
        .with_color(color.unwrap_or(Palette::BLACK));

        surface.add_text(vec![TextRun::new(title)], frame);
    }

    /// Draw a bulleted list in `frame`, one paragraph per item.
    ///
    /// Items use the body text size and color with the standard bullet
    /// indentation. An empty list draws nothing.
    pub fn add_bullets<S, T>(&self, surface: &mut S, items: &[T], frame: TextFrame)
    where
        S: SlideSurface + ?Sized,
        T: AsRef<str>,
    {
        if items.is_empty() {
            return;
        }

        let runs = items
            .iter()
            .map(|item| {
                TextRun::new(item.as_ref())
                    .with_bullet()
                    .with_font_size(FontSize::TEXT)
                    .with_color(Palette::NEAR_BLACK_NAVY)
            })
            .collect();
        let frame = match frame.font_face {
            Some(_) => frame,
            None => frame.with_font_face(FONT_FACE),
        };

        surface.add_text(runs, frame);
    }

    /// Draw numbered citation links for `urls` in the citation band.
    ///
    /// Numbering continues from the previous call in this session.
    pub fn render_citations<S, U>(&self, surface: &mut S, urls: &[U]) -> Vec<u64>
    where
        S: SlideSurface + ?Sized,
        U: AsRef<str>,
    {
        render_citations(surface, &self.citations, &self.citation_style, urls)
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;
    use crate::metadata::{AssetSource, DimensionReader};
    use crate::model::{Element, Slide};
    use std::sync::Arc;

    struct FixedSource;

    impl AssetSource for FixedSource {
        fn read(&self, path: &Path) -> Result<Vec<u8>> {
            match path.to_str() {
                Some("wide.png") => Ok(b"16:9".to_vec()),
                _ => Err(Error::ResourceNotFound(path.display().to_string())),
            }
        }
    }

    struct FixedReader;

    impl DimensionReader for FixedReader {
        fn dimensions(&self, _bytes: &[u8]) -> Result<(u32, u32)> {
            Ok((1600, 900))
        }
    }

    fn session() -> Session {
        Session::with_cache(ImageMetadataCache::with_collaborators(
            Arc::new(FixedSource),
            Arc::new(FixedReader),
        ))
    }

    #[test]
    fn test_add_image_records_placement() {
        let session = session();
        let mut slide = Slide::new(1);

        let placement = session
            .add_image(
                &mut slide,
                "wide.png",
                FitMode::Crop,
                Viewport::new(5.5, 0.5625, 4.5, 4.5),
            )
            .unwrap();

        let (path, recorded) = slide.images().next().unwrap();
        assert_eq!(path, Path::new("wide.png"));
        assert_eq!(*recorded, placement);
        assert!(placement.is_cropped());
    }

    #[test]
    fn test_add_image_failure_draws_nothing() {
        let session = session();
        let mut slide = Slide::new(1);

        let result = session.add_image(
            &mut slide,
            "missing.png",
            FitMode::Contain,
            Viewport::new(0.0, 0.0, 1.0, 1.0),
        );
        assert!(matches!(result, Err(Error::ResourceNotFound(_))));

        let result = session.add_image(
            &mut slide,
            "wide.png",
            FitMode::Contain,
            Viewport::new(0.0, 0.0, 0.0, 1.0),
        );
        assert!(matches!(result, Err(Error::InvalidViewport { .. })));
        assert!(slide.is_empty());
        assert!(session.cache().is_empty());
    }

    #[test]
    fn test_slide_title_frame() {
        let session = session();
        let mut slide = Slide::new(1);
        session.add_slide_title(&mut slide, "Outline", None);

        let Element::Text { runs, frame } = &slide.elements[0] else {
            panic!("expected a text element");
        };
        assert_eq!(runs[0].text, "Outline");
        assert_eq!(frame.color.as_deref(), Some("000000"));
        assert_eq!(frame.font_face.as_deref(), Some("Arial"));
        let Extent::Inches(h) = frame.h else {
            panic!("title height should be absolute");
        };
        assert!((h - (24.0 / 72.0 * 1.2 + 0.15)).abs() < 1e-9);
    }

    #[test]
    fn test_add_bullets() {
        let session = session();
        let mut slide = Slide::new(1);
        session.add_bullets(
            &mut slide,
            &["Detection queries", "Track queries"],
            TextFrame::new(0.5, 1.3, 9.0, 3.3),
        );
        session.add_bullets::<_, &str>(&mut slide, &[], TextFrame::new(0.0, 0.0, 1.0, 1.0));

        assert_eq!(slide.elements.len(), 1);
        let Element::Text { runs, frame } = &slide.elements[0] else {
            panic!("expected a text element");
        };
        assert_eq!(frame.font_face.as_deref(), Some(FONT_FACE));
        for run in runs {
            assert_eq!(run.bullet.map(|b| b.indent), Some(crate::model::BULLET_INDENT));
            assert_eq!(run.font_size, Some(FontSize::TEXT));
            assert_eq!(run.color.as_deref(), Some(Palette::NEAR_BLACK_NAVY));
        }
    }

    #[test]
    fn test_sessions_number_independently() {
        let first = session();
        let second = session();
        let mut slide = Slide::new(1);

        assert_eq!(first.render_citations(&mut slide, &["a", "b"]), vec![1, 2]);
        assert_eq!(second.render_citations(&mut slide, &["c"]), vec![1]);
        assert_eq!(first.render_citations(&mut slide, &["d"]), vec![3]);
    }
}
