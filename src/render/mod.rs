//! Rendering module: the drawing-surface seam between layout and a
//! presentation writer.

mod surface;

pub use surface::SlideSurface;
