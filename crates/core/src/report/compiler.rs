//! Report bundle assembly.

use super::types::ReportBundle;
use crate::aggregate::AggregateOutcome;
use crate::range::ResolvedRange;

/// Assembles render-ready bundles from aggregation output.
///
/// Pure assembly, no I/O. Everything the renderers need, including the raw
/// line items, moves into the bundle here.
pub struct ReportCompiler;

impl ReportCompiler {
    /// Builds a [`ReportBundle`] for one request.
    #[must_use]
    pub fn compile(range: ResolvedRange, outcome: AggregateOutcome) -> ReportBundle {
        ReportBundle {
            organization: outcome.organization,
            range,
            sales: outcome.sales,
            raw_material: outcome.raw_material,
            expenses: outcome.expenses,
            material_buckets: outcome.material_buckets,
            net_amount: outcome.net_amount,
            sales_facts: outcome.sales_facts,
            raw_material_facts: outcome.raw_material_facts,
            expense_facts: outcome.expense_facts,
            generated_at: chrono::Utc::now(),
        }
    }
}
