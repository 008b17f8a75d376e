//! Layout fitting: image placement and text-box sizing.

mod engine;
mod text;

pub use engine::{contain_rect, crop_rect, BoxFitter, FitMode, CROP_TOLERANCE};
pub use text::{block_height, text_height, TextMetrics, POINTS_PER_INCH};
