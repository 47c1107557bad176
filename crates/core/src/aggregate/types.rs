//! Computed aggregate types. Request-scoped, never persisted.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::fact::{ExpenseEntry, OrganizationMeta, WeighmentEntry};

/// Totals for one fact kind within a range.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct KindTotals {
    /// Number of facts.
    pub count: u64,
    /// Sum of unit quantities. Zero for expenses, which carry no units.
    pub unit_total: Decimal,
    /// Sum of monetary amounts.
    pub amount_total: Decimal,
}

/// Per-material-type totals over sales and raw-material entries.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MaterialBucket {
    /// Material type label.
    pub material_type: String,
    /// Number of entries for this material.
    pub count: u64,
    /// Sum of unit quantities.
    pub unit_total: Decimal,
    /// Sum of monetary amounts.
    pub amount_total: Decimal,
}

/// Per-calendar-month totals for trend views.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MonthBucket {
    /// Month of year, 1-12.
    pub month: u32,
    /// Sum of weighment amounts occurring in this local month.
    pub amount_total: Decimal,
}

/// Complete output of one aggregation pass.
///
/// Carries both the grouped buckets and the raw fact lists; the render
/// path needs the raw rows for line items, so they are never discarded.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AggregateOutcome {
    /// Organization the facts belong to.
    pub organization: OrganizationMeta,
    /// Totals for sales entries.
    pub sales: KindTotals,
    /// Totals for raw-material entries.
    pub raw_material: KindTotals,
    /// Totals for expense entries.
    pub expenses: KindTotals,
    /// Per-material breakdown, sorted descending by amount.
    pub material_buckets: Vec<MaterialBucket>,
    /// Net figure: sales − raw material − expenses.
    pub net_amount: Decimal,
    /// Raw sales entries.
    pub sales_facts: Vec<WeighmentEntry>,
    /// Raw raw-material entries.
    pub raw_material_facts: Vec<WeighmentEntry>,
    /// Raw expense entries.
    pub expense_facts: Vec<ExpenseEntry>,
}
