//! Citation numbering shared across a document session.

mod register;
mod render;

pub use register::CitationRegister;
pub use render::{render_citations, CitationStyle};
