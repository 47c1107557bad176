//! Immutable financial records and the repository traits that supply them.
//!
//! A fact is a weighment entry (sales or raw-material) or a miscellaneous
//! expense. Facts belong to exactly one organization and are never mutated
//! by the reporting pipeline; a report is a point-in-time snapshot.

pub mod memory;
pub mod repository;
pub mod types;

pub use memory::{InMemoryFactRepository, InMemoryOrganizationRepository};
pub use repository::{FactRepository, OrganizationRepository, RepositoryError};
pub use types::{EntryKind, ExpenseEntry, OrganizationMeta, WeighmentEntry};
