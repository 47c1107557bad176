//! Fact aggregation service.

use std::collections::BTreeMap;
use std::sync::Arc;

use chrono::{DateTime, Datelike, NaiveDate, NaiveTime, Utc};
use rust_decimal::Decimal;
use tracing::debug;
use weighbridge_shared::types::OrganizationId;

use super::error::AggregateError;
use super::types::{AggregateOutcome, KindTotals, MaterialBucket, MonthBucket};
use crate::fact::{EntryKind, FactRepository, OrganizationRepository, WeighmentEntry};
use crate::range::ResolvedRange;
use crate::timezone;

/// Computes organization-scoped aggregates over a resolved range.
pub struct FactAggregator {
    facts: Arc<dyn FactRepository>,
    organizations: Arc<dyn OrganizationRepository>,
}

impl FactAggregator {
    /// Creates an aggregator over the given repositories.
    #[must_use]
    pub fn new(
        facts: Arc<dyn FactRepository>,
        organizations: Arc<dyn OrganizationRepository>,
    ) -> Self {
        Self {
            facts,
            organizations,
        }
    }

    /// Aggregates all facts for `organization_id` within `range`.
    ///
    /// # Errors
    ///
    /// Returns [`AggregateError::OrganizationNotFound`] when the lookup
    /// returns nothing, and propagates repository failures unchanged.
    pub async fn aggregate(
        &self,
        organization_id: OrganizationId,
        range: &ResolvedRange,
    ) -> Result<AggregateOutcome, AggregateError> {
        let organization = self
            .organizations
            .find_by_id(organization_id)
            .await?
            .ok_or(AggregateError::OrganizationNotFound(organization_id))?;

        let weighments = self
            .facts
            .find_weighments(organization_id, range.start_utc, range.end_utc)
            .await?;
        let expense_facts = self
            .facts
            .find_expenses(organization_id, range.start_utc, range.end_utc)
            .await?;

        let (sales_facts, raw_material_facts): (Vec<_>, Vec<_>) = weighments
            .into_iter()
            .partition(|e| e.kind == EntryKind::Sales);

        let sales = weighment_totals(&sales_facts);
        let raw_material = weighment_totals(&raw_material_facts);
        let expenses = KindTotals {
            count: expense_facts.len() as u64,
            unit_total: Decimal::ZERO,
            amount_total: expense_facts.iter().map(|e| e.amount).sum(),
        };

        let material_buckets =
            material_buckets(sales_facts.iter().chain(raw_material_facts.iter()));
        let net_amount = sales.amount_total - raw_material.amount_total - expenses.amount_total;

        debug!(
            organization = %organization_id,
            sales = sales.count,
            raw_material = raw_material.count,
            expenses = expenses.count,
            "aggregated facts"
        );

        Ok(AggregateOutcome {
            organization,
            sales,
            raw_material,
            expenses,
            material_buckets,
            net_amount,
            sales_facts,
            raw_material_facts,
            expense_facts,
        })
    }

    /// Sums weighment amounts per calendar month of `year`, in the local
    /// time of `zone`. Months with no entries appear with a zero total.
    ///
    /// # Errors
    ///
    /// Same failure modes as [`FactAggregator::aggregate`].
    pub async fn monthly_trend(
        &self,
        organization_id: OrganizationId,
        year: i32,
        zone: &str,
    ) -> Result<Vec<MonthBucket>, AggregateError> {
        self.organizations
            .find_by_id(organization_id)
            .await?
            .ok_or(AggregateError::OrganizationNotFound(organization_id))?;

        let offset = timezone::offset(zone);
        let (start_utc, end_utc) = year_bounds_utc(year, offset);

        let weighments = self
            .facts
            .find_weighments(organization_id, start_utc, end_utc)
            .await?;

        let mut totals = [Decimal::ZERO; 12];
        for entry in &weighments {
            let local_month = (entry.occurred_at + offset).month() as usize;
            totals[local_month - 1] += entry.total_amount;
        }

        Ok(totals
            .iter()
            .enumerate()
            .map(|(idx, amount)| MonthBucket {
                month: (idx + 1) as u32,
                amount_total: *amount,
            })
            .collect())
    }
}

fn weighment_totals(entries: &[WeighmentEntry]) -> KindTotals {
    KindTotals {
        count: entries.len() as u64,
        unit_total: entries.iter().map(|e| e.unit_count).sum(),
        amount_total: entries.iter().map(|e| e.total_amount).sum(),
    }
}

/// Groups entries by material type, descending by amount. Ties break on
/// the material name so the ordering is deterministic.
fn material_buckets<'a>(
    entries: impl Iterator<Item = &'a WeighmentEntry>,
) -> Vec<MaterialBucket> {
    let mut grouped: BTreeMap<&str, MaterialBucket> = BTreeMap::new();
    for entry in entries {
        let bucket = grouped
            .entry(entry.material_type.as_str())
            .or_insert_with(|| MaterialBucket {
                material_type: entry.material_type.clone(),
                count: 0,
                unit_total: Decimal::ZERO,
                amount_total: Decimal::ZERO,
            });
        bucket.count += 1;
        bucket.unit_total += entry.unit_count;
        bucket.amount_total += entry.total_amount;
    }

    let mut buckets: Vec<MaterialBucket> = grouped.into_values().collect();
    buckets.sort_by(|a, b| {
        b.amount_total
            .cmp(&a.amount_total)
            .then_with(|| a.material_type.cmp(&b.material_type))
    });
    buckets
}

fn year_bounds_utc(year: i32, offset: chrono::Duration) -> (DateTime<Utc>, DateTime<Utc>) {
    let jan1 = NaiveDate::from_ymd_opt(year, 1, 1).unwrap_or_default();
    let dec31 = NaiveDate::from_ymd_opt(year, 12, 31).unwrap_or_default();
    let start = (jan1.and_time(NaiveTime::MIN) - offset).and_utc();
    let end = (dec31
        .and_hms_milli_opt(23, 59, 59, 999)
        .unwrap_or_else(|| dec31.and_time(NaiveTime::MIN))
        - offset)
        .and_utc();
    (start, end)
}
