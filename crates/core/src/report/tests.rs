//! Tests for report compilation and filenames.

use chrono::{TimeZone, Utc};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use std::str::FromStr;
use weighbridge_shared::types::OrganizationId;

use super::compiler::ReportCompiler;
use super::types::{ReportBundle, ReportKind};
use crate::aggregate::{AggregateOutcome, KindTotals};
use crate::fact::OrganizationMeta;
use crate::range::{DateFilter, DateRangeResolver, ResolvedRange};

fn range() -> ResolvedRange {
    let now = Utc.with_ymd_and_hms(2024, 3, 15, 12, 0, 0).unwrap();
    DateRangeResolver::resolve(DateFilter::ThisMonth, "UTC", None, None, now).unwrap()
}

fn outcome(name: &str) -> AggregateOutcome {
    AggregateOutcome {
        organization: OrganizationMeta {
            id: OrganizationId::new(),
            name: name.to_string(),
            address: None,
            phone: None,
        },
        sales: KindTotals {
            count: 2,
            unit_total: dec!(30),
            amount_total: dec!(300.75),
        },
        raw_material: KindTotals::default(),
        expenses: KindTotals {
            count: 1,
            unit_total: Decimal::ZERO,
            amount_total: dec!(30.75),
        },
        material_buckets: Vec::new(),
        net_amount: dec!(270.00),
        sales_facts: Vec::new(),
        raw_material_facts: Vec::new(),
        expense_facts: Vec::new(),
    }
}

fn bundle(name: &str) -> ReportBundle {
    ReportCompiler::compile(range(), outcome(name))
}

#[test]
fn test_compile_moves_aggregates_through_unchanged() {
    let bundle = bundle("Sri Balaji Stone Crusher");

    assert_eq!(bundle.sales.amount_total, dec!(300.75));
    assert_eq!(bundle.expenses.amount_total, dec!(30.75));
    assert_eq!(bundle.net_amount, dec!(270.00));
    assert_eq!(bundle.range, range());
}

#[test]
fn test_filename_pattern() {
    let bundle = bundle("Sri Balaji Stone Crusher");

    assert_eq!(
        bundle.filename(ReportKind::All, "pdf"),
        "Sri_Balaji_Stone_Crusher_Report_2024-03-01_to_2024-03-31.pdf"
    );
    assert_eq!(
        bundle.filename(ReportKind::RawStone, "csv"),
        "Sri_Balaji_Stone_Crusher_RawStone_2024-03-01_to_2024-03-31.csv"
    );
}

#[test]
fn test_report_kind_parsing() {
    assert_eq!(ReportKind::from_str("all").unwrap(), ReportKind::All);
    assert_eq!(ReportKind::from_str("rawstone").unwrap(), ReportKind::RawStone);
    assert!(ReportKind::from_str("invoices").is_err());
}
