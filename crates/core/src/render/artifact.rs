//! Rendered report artifacts.

use serde::{Deserialize, Serialize};

/// One rendered report, ready for download.
///
/// `degraded` marks a successful-but-fallback outcome: the PDF engine
/// failed and the caller received the equivalent HTML instead. Callers
/// must surface this to the end user; it is not an error.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReportArtifact {
    /// Content-disposition filename.
    pub filename: String,
    /// MIME type of `bytes`.
    pub content_type: &'static str,
    /// The rendered payload.
    pub bytes: Vec<u8>,
    /// True when this is an HTML fallback for a failed PDF render.
    pub degraded: bool,
}

impl ReportArtifact {
    /// A successfully rendered PDF.
    #[must_use]
    pub fn pdf(filename: String, bytes: Vec<u8>) -> Self {
        Self {
            filename,
            content_type: "application/pdf",
            bytes,
            degraded: false,
        }
    }

    /// A rendered CSV table.
    #[must_use]
    pub fn csv(filename: String, text: String) -> Self {
        Self {
            filename,
            content_type: "text/csv; charset=utf-8",
            bytes: text.into_bytes(),
            degraded: false,
        }
    }

    /// The HTML fallback for a failed PDF render.
    #[must_use]
    pub fn degraded_html(filename: String, html: String) -> Self {
        Self {
            filename,
            content_type: "text/html; charset=utf-8",
            bytes: html.into_bytes(),
            degraded: true,
        }
    }
}
