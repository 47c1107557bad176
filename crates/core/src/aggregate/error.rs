//! Aggregation error types.

use thiserror::Error;
use weighbridge_shared::types::OrganizationId;

use crate::fact::RepositoryError;

/// Errors that can occur during aggregation.
#[derive(Debug, Error)]
pub enum AggregateError {
    /// Organization lookup returned nothing. The surrounding layer is
    /// expected to have validated the id already, so this fails fast.
    #[error("Organization not found: {0}")]
    OrganizationNotFound(OrganizationId),

    /// Backing store failure, propagated unchanged.
    #[error(transparent)]
    Repository(#[from] RepositoryError),
}
