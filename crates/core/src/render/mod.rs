//! Report rendering: CSV in-process, PDF through an external engine.
//!
//! The CSV path is synchronous and deterministic. The PDF path launches a
//! fresh headless-Chromium process per report, guarantees release of that
//! process on every exit path, and degrades to an HTML artifact when the
//! engine fails for any reason other than a timeout.

pub mod artifact;
pub mod csv;
pub mod engine;
pub mod error;
pub mod html;
pub mod pdf;

#[cfg(test)]
mod tests;

pub use artifact::ReportArtifact;
pub use csv::render_csv;
pub use engine::{ChromiumEngine, RenderEngine, RenderSession};
pub use error::RenderError;
pub use html::render_html;
pub use pdf::PdfRenderer;
