//! Rendering error types.

use thiserror::Error;

/// Errors that can occur while rendering a report.
#[derive(Debug, Error)]
pub enum RenderError {
    /// The external engine exceeded its time bound. Surfaced distinctly so
    /// the caller can retry instead of accepting a degraded artifact.
    #[error("PDF rendering timed out after {waited_ms} ms")]
    Timeout {
        /// How long the renderer waited before giving up.
        waited_ms: u64,
    },

    /// The engine failed to launch, crashed, or broke protocol.
    #[error("rendering engine failure: {0}")]
    Engine(String),

    /// CSV serialization failure.
    #[error("CSV write failure: {0}")]
    Csv(String),
}

impl From<csv::Error> for RenderError {
    fn from(err: csv::Error) -> Self {
        Self::Csv(err.to_string())
    }
}
