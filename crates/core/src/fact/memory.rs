//! In-memory repository implementations.
//!
//! Used by the seeding binary and throughout the test suite. Filtering
//! mirrors the SQL the production store would run: organization-scoped,
//! `occurred_at` between the bounds inclusive.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use weighbridge_shared::types::OrganizationId;

use super::repository::{FactRepository, OrganizationRepository, RepositoryError};
use super::types::{ExpenseEntry, OrganizationMeta, WeighmentEntry};

/// Fact repository backed by plain vectors.
#[derive(Debug, Default, Clone)]
pub struct InMemoryFactRepository {
    weighments: Vec<WeighmentEntry>,
    expenses: Vec<ExpenseEntry>,
}

impl InMemoryFactRepository {
    /// Creates an empty repository.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a repository seeded with the given facts.
    #[must_use]
    pub fn with_facts(weighments: Vec<WeighmentEntry>, expenses: Vec<ExpenseEntry>) -> Self {
        Self {
            weighments,
            expenses,
        }
    }

    /// Adds a weighment entry.
    pub fn push_weighment(&mut self, entry: WeighmentEntry) {
        self.weighments.push(entry);
    }

    /// Adds an expense entry.
    pub fn push_expense(&mut self, entry: ExpenseEntry) {
        self.expenses.push(entry);
    }
}

#[async_trait]
impl FactRepository for InMemoryFactRepository {
    async fn find_weighments(
        &self,
        organization_id: OrganizationId,
        start_utc: DateTime<Utc>,
        end_utc: DateTime<Utc>,
    ) -> Result<Vec<WeighmentEntry>, RepositoryError> {
        Ok(self
            .weighments
            .iter()
            .filter(|e| {
                e.organization_id == organization_id
                    && e.occurred_at >= start_utc
                    && e.occurred_at <= end_utc
            })
            .cloned()
            .collect())
    }

    async fn find_expenses(
        &self,
        organization_id: OrganizationId,
        start_utc: DateTime<Utc>,
        end_utc: DateTime<Utc>,
    ) -> Result<Vec<ExpenseEntry>, RepositoryError> {
        Ok(self
            .expenses
            .iter()
            .filter(|e| {
                e.organization_id == organization_id
                    && e.occurred_at >= start_utc
                    && e.occurred_at <= end_utc
            })
            .cloned()
            .collect())
    }
}

/// Organization repository backed by a plain vector.
#[derive(Debug, Default, Clone)]
pub struct InMemoryOrganizationRepository {
    organizations: Vec<OrganizationMeta>,
}

impl InMemoryOrganizationRepository {
    /// Creates a repository holding the given organizations.
    #[must_use]
    pub fn new(organizations: Vec<OrganizationMeta>) -> Self {
        Self { organizations }
    }
}

#[async_trait]
impl OrganizationRepository for InMemoryOrganizationRepository {
    async fn find_by_id(
        &self,
        organization_id: OrganizationId,
    ) -> Result<Option<OrganizationMeta>, RepositoryError> {
        Ok(self
            .organizations
            .iter()
            .find(|o| o.id == organization_id)
            .cloned())
    }
}
