//! Report bundle types.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::aggregate::{KindTotals, MaterialBucket};
use crate::fact::{ExpenseEntry, OrganizationMeta, WeighmentEntry};
use crate::range::{RangeError, ResolvedRange};

/// Which slice of the report an artifact covers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ReportKind {
    /// All three fact kinds under labeled sections.
    All,
    /// Sales entries only.
    Sales,
    /// Raw-material entries only.
    RawStone,
    /// Expense entries only.
    Expenses,
}

impl ReportKind {
    /// Filename segment for this kind.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::All => "Report",
            Self::Sales => "Sales",
            Self::RawStone => "RawStone",
            Self::Expenses => "Expenses",
        }
    }
}

impl std::str::FromStr for ReportKind {
    type Err = RangeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "all" => Ok(Self::All),
            "sales" => Ok(Self::Sales),
            "rawstone" => Ok(Self::RawStone),
            "expenses" => Ok(Self::Expenses),
            other => Err(RangeError::InvalidFilter(other.to_string())),
        }
    }
}

/// The complete, self-contained data needed to render one report.
///
/// Built fresh per request and never mutated after construction.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReportBundle {
    /// Organization the report belongs to.
    pub organization: OrganizationMeta,
    /// Resolved instant range the facts were fetched for.
    pub range: ResolvedRange,
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
    /// Raw sales line items.
    pub sales_facts: Vec<WeighmentEntry>,
    /// Raw raw-material line items.
    pub raw_material_facts: Vec<WeighmentEntry>,
    /// Raw expense line items.
    pub expense_facts: Vec<ExpenseEntry>,
    /// When the bundle was assembled.
    pub generated_at: DateTime<Utc>,
}

impl ReportBundle {
    /// Content-disposition filename for an artifact rendered from this
    /// bundle: `{org}_{kind}_{start}_to_{end}.{ext}`.
    #[must_use]
    pub fn filename(&self, kind: ReportKind, extension: &str) -> String {
        format!(
            "{}_{}_{}_to_{}.{}",
            sanitize(&self.organization.name),
            kind.label(),
            self.range.start_date.format("%Y-%m-%d"),
            self.range.end_date.format("%Y-%m-%d"),
            extension
        )
    }
}

/// Keeps filenames header-safe: alphanumerics, dashes, and underscores.
fn sanitize(name: &str) -> String {
    name.chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() || c == '-' {
                c
            } else {
                '_'
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::sanitize;

    #[test]
    fn test_sanitize_replaces_spaces_and_punctuation() {
        assert_eq!(sanitize("Sri Balaji & Co."), "Sri_Balaji___Co_");
        assert_eq!(sanitize("plain-name"), "plain-name");
    }
}
