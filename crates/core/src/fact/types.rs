//! Fact and organization types.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use weighbridge_shared::types::{EntryId, ExpenseId, OrganizationId, UserId};

/// Kind of a weighment entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EntryKind {
    /// Material sold and weighed out.
    Sales,
    /// Raw material purchased and weighed in.
    RawMaterial,
}

/// A truck weighment entry, either a sale or a raw-material purchase.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WeighmentEntry {
    /// Unique identifier.
    pub id: EntryId,
    /// Owning organization (tenant partition).
    pub organization_id: OrganizationId,
    /// Sales or raw material.
    pub kind: EntryKind,
    /// Truck registration number.
    pub truck_id: String,
    /// Material type label (e.g., "20mm", "dust", "boulder").
    pub material_type: String,
    /// Number of units weighed (tons, trips).
    pub unit_count: Decimal,
    /// Rate per unit.
    pub rate_per_unit: Decimal,
    /// Total monetary amount for the entry.
    pub total_amount: Decimal,
    /// When the weighment occurred, stored in UTC.
    pub occurred_at: DateTime<Utc>,
    /// User who recorded the entry.
    pub author_id: UserId,
}

/// A miscellaneous expense entry.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExpenseEntry {
    /// Unique identifier.
    pub id: ExpenseId,
    /// Owning organization (tenant partition).
    pub organization_id: OrganizationId,
    /// Expense category label (e.g., "diesel", "maintenance").
    pub category: String,
    /// Monetary amount.
    pub amount: Decimal,
    /// When the expense occurred, stored in UTC.
    pub occurred_at: DateTime<Utc>,
    /// User who recorded the entry.
    pub author_id: UserId,
}

/// Organization metadata rendered into report headers.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OrganizationMeta {
    /// Unique identifier.
    pub id: OrganizationId,
    /// Display name.
    pub name: String,
    /// Postal address, if recorded.
    pub address: Option<String>,
    /// Contact phone, if recorded.
    pub phone: Option<String>,
}
