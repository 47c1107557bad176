//! Read-only collaborator traits for fact and organization lookup.
//!
//! Persistence lives outside this crate. The pipeline only ever reads, and
//! every query is scoped by organization id and UTC instant range.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use thiserror::Error;
use weighbridge_shared::types::OrganizationId;

use super::types::{ExpenseEntry, OrganizationMeta, WeighmentEntry};

/// A backing-store failure surfaced by a repository.
///
/// The pipeline propagates these unchanged; retrying is the collaborator's
/// concern.
#[derive(Debug, Error)]
#[error("repository error: {0}")]
pub struct RepositoryError(pub String);

/// Read access to weighment and expense facts.
#[async_trait]
pub trait FactRepository: Send + Sync {
    /// Fetches sales and raw-material entries for one organization with
    /// `occurred_at` in `[start_utc, end_utc]` inclusive.
    async fn find_weighments(
        &self,
        organization_id: OrganizationId,
        start_utc: DateTime<Utc>,
        end_utc: DateTime<Utc>,
    ) -> Result<Vec<WeighmentEntry>, RepositoryError>;

    /// Fetches expense entries for one organization with `occurred_at` in
    /// `[start_utc, end_utc]` inclusive.
    async fn find_expenses(
        &self,
        organization_id: OrganizationId,
        start_utc: DateTime<Utc>,
        end_utc: DateTime<Utc>,
    ) -> Result<Vec<ExpenseEntry>, RepositoryError>;
}

/// Read access to organization metadata.
#[async_trait]
pub trait OrganizationRepository: Send + Sync {
    /// Looks up an organization by id. `None` means not found.
    async fn find_by_id(
        &self,
        organization_id: OrganizationId,
    ) -> Result<Option<OrganizationMeta>, RepositoryError>;
}
