//! Text-box height estimation.

/// Points per inch.
pub const POINTS_PER_INCH: f64 = 72.0;

/// Estimate the height in inches of a text box.
///
/// `lines * (font_size / 72) * leading + padding`. Inputs are expected to be
/// positive; this is not checked.
pub fn block_height(font_size: f64, lines: u32, leading: f64, padding: f64) -> f64 {
    let line_height = (font_size / POINTS_PER_INCH) * leading;
    lines as f64 * line_height + padding
}

/// Height of a single-line text box with default leading and padding.
pub fn text_height(font_size: f64) -> f64 {
    TextMetrics::default().height(font_size)
}

/// Line count and spacing used to size a text box.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TextMetrics {
    /// Number of lines
    pub lines: u32,

    /// Line height as a multiple of the font size
    pub leading: f64,

    /// Extra vertical space in inches
    pub padding: f64,
}

impl TextMetrics {
    /// Create metrics with defaults (1 line, 1.2 leading, 0.15in padding).
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the line count.
    pub fn with_lines(mut self, lines: u32) -> Self {
        self.lines = lines;
        self
    }

    /// Set the leading.
    pub fn with_leading(mut self, leading: f64) -> Self {
        self.leading = leading;
        self
    }

    /// Set the padding.
    pub fn with_padding(mut self, padding: f64) -> Self {
        self.padding = padding;
        self
    }

    /// Height in inches for the given font size.
    pub fn height(&self, font_size: f64) -> f64 {
        block_height(font_size, self.lines, self.leading, self.padding)
    }
}

impl Default for TextMetrics {
    fn default() -> Self {
        Self {
            lines: 1,
            leading: 1.2,
            padding: 0.15,
        }
    }
}
