//! PDF rendering with resource-bounded execution and graceful degradation.

use std::sync::Arc;
use std::time::Duration;

use tracing::{info, warn};

use crate::report::{ReportBundle, ReportKind};

use super::artifact::ReportArtifact;
use super::engine::{RenderEngine, RenderSession};
use super::error::RenderError;
use super::html::{render_degraded_html, render_html};

/// Renders bundles to PDF through an external engine.
///
/// Policy: one engine instance per request with a hard overall timeout.
/// A timeout surfaces as [`RenderError::Timeout`] so the caller can retry;
/// every other engine failure degrades to an HTML artifact carrying the
/// same content and a visible banner.
pub struct PdfRenderer {
    engine: Arc<dyn RenderEngine>,
    timeout: Duration,
}

impl PdfRenderer {
    /// Creates a renderer over the given engine.
    #[must_use]
    pub fn new(engine: Arc<dyn RenderEngine>, timeout: Duration) -> Self {
        Self { engine, timeout }
    }

    /// Renders the bundle to a PDF artifact, or the degraded HTML
    /// equivalent when the engine fails.
    ///
    /// # Errors
    ///
    /// Returns [`RenderError::Timeout`] when the engine exceeds its bound.
    /// All other engine failures are contained and produce a degraded
    /// artifact instead of an error.
    pub async fn render(&self, bundle: &ReportBundle) -> Result<ReportArtifact, RenderError> {
        let html = render_html(bundle);
        let engine = Arc::clone(&self.engine);
        let document = html.clone();

        let job = tokio::task::spawn_blocking(move || {
            let session = engine.launch()?;
            // The guard releases the session on every path out of this
            // closure, including a panic inside print_to_pdf. If the
            // caller abandons the future, the closure still runs to
            // completion on the blocking pool and the release fires.
            let mut guard = SessionGuard::new(session);
            guard.print(&document)
        });

        match tokio::time::timeout(self.timeout, job).await {
            Err(_) => {
                let waited_ms = self.timeout.as_millis() as u64;
                warn!(waited_ms, organization = %bundle.organization.id, "PDF render timed out");
                Err(RenderError::Timeout { waited_ms })
            }
            Ok(Err(join_err)) => {
                warn!(error = %join_err, "PDF render task failed; returning degraded HTML");
                Ok(self.degraded(bundle))
            }
            Ok(Ok(Err(engine_err))) => {
                warn!(error = %engine_err, "PDF engine failed; returning degraded HTML");
                Ok(self.degraded(bundle))
            }
            Ok(Ok(Ok(bytes))) => {
                info!(
                    organization = %bundle.organization.id,
                    size = bytes.len(),
                    "rendered PDF report"
                );
                Ok(ReportArtifact::pdf(
                    bundle.filename(ReportKind::All, "pdf"),
                    bytes,
                ))
            }
        }
    }

    fn degraded(&self, bundle: &ReportBundle) -> ReportArtifact {
        ReportArtifact::degraded_html(
            bundle.filename(ReportKind::All, "html"),
            render_degraded_html(bundle),
        )
    }
}

/// Releases the wrapped session exactly once when dropped.
struct SessionGuard {
    session: Box<dyn RenderSession>,
}

impl SessionGuard {
    fn new(session: Box<dyn RenderSession>) -> Self {
        Self { session }
    }

    fn print(&mut self, html: &str) -> Result<Vec<u8>, RenderError> {
        self.session.print_to_pdf(html)
    }
}

impl Drop for SessionGuard {
    fn drop(&mut self) {
        self.session.release();
    }
}
