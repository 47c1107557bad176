//! Top-level report error taxonomy.

use thiserror::Error;
use weighbridge_shared::types::OrganizationId;

use crate::aggregate::AggregateError;
use crate::range::RangeError;
use crate::render::RenderError;

/// Errors surfaced by the report service.
///
/// Degraded HTML output is not represented here; it is a successful
/// artifact flagged via [`crate::render::ReportArtifact::degraded`].
#[derive(Debug, Error)]
pub enum ReportError {
    /// Unrecognized filter token, echoed back.
    #[error("Invalid date filter: {0}")]
    InvalidFilter(String),

    /// A custom range bound is absent.
    #[error("Missing date bound: {0}")]
    MissingBounds(&'static str),

    /// A date string did not parse as `YYYY-MM-DD`.
    #[error("Malformed date for {field}: {value}")]
    MalformedDate {
        /// Offending field name.
        field: &'static str,
        /// Value that failed to parse.
        value: String,
    },

    /// End date precedes start date.
    #[error("End date is before start date")]
    InvertedRange,

    /// Organization lookup returned nothing.
    #[error("Organization not found: {0}")]
    OrganizationNotFound(OrganizationId),

    /// Backing store failure, propagated unchanged.
    #[error("Repository failure: {0}")]
    Repository(String),

    /// The rendering engine exceeded its time bound; a retry is more
    /// appropriate than degraded output.
    #[error("Report rendering timed out after {waited_ms} ms; try again or narrow the range")]
    RenderTimeout {
        /// How long the renderer waited.
        waited_ms: u64,
    },

    /// Rendering failure that could not be contained by the fallback.
    #[error("Report rendering failed: {0}")]
    Render(String),
}

impl ReportError {
    /// Returns the HTTP status code equivalent for this error.
    #[must_use]
    pub const fn status_code(&self) -> u16 {
        match self {
            Self::InvalidFilter(_)
            | Self::MissingBounds(_)
            | Self::MalformedDate { .. }
            | Self::InvertedRange => 400,
            Self::OrganizationNotFound(_) => 404,
            Self::RenderTimeout { .. } => 504,
            Self::Repository(_) | Self::Render(_) => 500,
        }
    }

    /// Returns the error code for API responses.
    #[must_use]
    pub const fn error_code(&self) -> &'static str {
        match self {
            Self::InvalidFilter(_) => "INVALID_FILTER",
            Self::MissingBounds(_) => "MISSING_BOUNDS",
            Self::MalformedDate { .. } => "MALFORMED_DATE",
            Self::InvertedRange => "INVERTED_RANGE",
            Self::OrganizationNotFound(_) => "ORGANIZATION_NOT_FOUND",
            Self::Repository(_) => "REPOSITORY_ERROR",
            Self::RenderTimeout { .. } => "RENDER_TIMEOUT",
            Self::Render(_) => "RENDER_ERROR",
        }
    }
}

impl From<RangeError> for ReportError {
    fn from(err: RangeError) -> Self {
        match err {
            RangeError::InvalidFilter(token) => Self::InvalidFilter(token),
            RangeError::MissingBounds { field } => Self::MissingBounds(field),
            RangeError::MalformedDate { field, value } => Self::MalformedDate { field, value },
            RangeError::InvertedRange { .. } => Self::InvertedRange,
        }
    }
}

impl From<AggregateError> for ReportError {
    fn from(err: AggregateError) -> Self {
        match err {
            AggregateError::OrganizationNotFound(id) => Self::OrganizationNotFound(id),
            AggregateError::Repository(e) => Self::Repository(e.to_string()),
        }
    }
}

impl From<RenderError> for ReportError {
    fn from(err: RenderError) -> Self {
        match err {
            RenderError::Timeout { waited_ms } => Self::RenderTimeout { waited_ms },
            RenderError::Engine(msg) | RenderError::Csv(msg) => Self::Render(msg),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_codes() {
        assert_eq!(ReportError::InvalidFilter(String::new()).status_code(), 400);
        assert_eq!(ReportError::MissingBounds("start_date").status_code(), 400);
        assert_eq!(ReportError::InvertedRange.status_code(), 400);
        assert_eq!(
            ReportError::OrganizationNotFound(OrganizationId::new()).status_code(),
            404
        );
        assert_eq!(ReportError::Repository(String::new()).status_code(), 500);
        assert_eq!(ReportError::RenderTimeout { waited_ms: 1 }.status_code(), 504);
    }

    #[test]
    fn test_error_codes() {
        assert_eq!(
            ReportError::RenderTimeout { waited_ms: 1 }.error_code(),
            "RENDER_TIMEOUT"
        );
        assert_eq!(
            ReportError::InvalidFilter(String::new()).error_code(),
            "INVALID_FILTER"
        );
    }
}
