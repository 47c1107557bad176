//! Rendering tests: CSV determinism and engine resource safety.

use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;

use chrono::{TimeZone, Utc};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use weighbridge_shared::types::{EntryId, ExpenseId, OrganizationId, UserId};

use super::artifact::ReportArtifact;
use super::csv::render_csv;
use super::engine::{RenderEngine, RenderSession};
use super::error::RenderError;
use super::html::{render_degraded_html, render_html};
use super::pdf::PdfRenderer;
use crate::aggregate::KindTotals;
use crate::fact::{EntryKind, ExpenseEntry, OrganizationMeta, WeighmentEntry};
use crate::range::{DateFilter, DateRangeResolver};
use crate::report::{ReportBundle, ReportCompiler, ReportKind};
use crate::aggregate::AggregateOutcome;

fn weighment(material: &str, units: Decimal, amount: Decimal) -> WeighmentEntry {
    WeighmentEntry {
        id: EntryId::new(),
        organization_id: OrganizationId::new(),
        kind: EntryKind::Sales,
        truck_id: "TN-29-AB-1234".to_string(),
        material_type: material.to_string(),
        unit_count: units,
        rate_per_unit: dec!(100),
        total_amount: amount,
        occurred_at: Utc.with_ymd_and_hms(2024, 3, 5, 10, 0, 0).unwrap(),
        author_id: UserId::new(),
    }
}

fn bundle_with(sales: Vec<WeighmentEntry>, expenses: Vec<ExpenseEntry>) -> ReportBundle {
    let now = Utc.with_ymd_and_hms(2024, 3, 15, 12, 0, 0).unwrap();
    let range = DateRangeResolver::resolve(DateFilter::ThisMonth, "UTC", None, None, now).unwrap();
    let outcome = AggregateOutcome {
        organization: OrganizationMeta {
            id: OrganizationId::new(),
            name: "Test Crusher".to_string(),
            address: None,
            phone: None,
        },
        sales: KindTotals {
            count: sales.len() as u64,
            unit_total: sales.iter().map(|e| e.unit_count).sum(),
            amount_total: sales.iter().map(|e| e.total_amount).sum(),
        },
        raw_material: KindTotals::default(),
        expenses: KindTotals {
            count: expenses.len() as u64,
            unit_total: Decimal::ZERO,
            amount_total: expenses.iter().map(|e| e.amount).sum(),
        },
        material_buckets: Vec::new(),
        net_amount: Decimal::ZERO,
        sales_facts: sales,
        raw_material_facts: Vec::new(),
        expense_facts: expenses,
    };
    ReportCompiler::compile(range, outcome)
}

// ============================================================================
// CSV
// ============================================================================

#[test]
fn test_csv_has_header_plus_one_row_per_fact() {
    let sales = vec![
        weighment("20mm", dec!(10), dec!(1000.50)),
        weighment("dust", dec!(5), dec!(250.25)),
        weighment("40mm", dec!(2), dec!(99.99)),
    ];
    let bundle = bundle_with(sales, Vec::new());

    let csv_text = render_csv(&bundle, ReportKind::Sales).unwrap();
    let lines: Vec<&str> = csv_text.trim_end().lines().collect();

    assert_eq!(lines.len(), 4, "header + N rows");
    assert!(lines[0].starts_with("Date,Truck,Material,Units,Rate,Amount"));
}

#[test]
fn test_csv_monetary_columns_round_trip() {
    let amounts = [dec!(1000.50), dec!(0.01), dec!(123456.789)];
    let sales = amounts
        .iter()
        .map(|a| weighment("20mm", dec!(1), *a))
        .collect();
    let bundle = bundle_with(sales, Vec::new());

    let csv_text = render_csv(&bundle, ReportKind::Sales).unwrap();
    let parsed: Vec<Decimal> = csv_text
        .trim_end()
        .lines()
        .skip(1)
        .map(|line| line.split(',').nth(5).unwrap().parse().unwrap())
        .collect();

    assert_eq!(parsed, amounts);
}

#[test]
fn test_csv_quotes_embedded_delimiters() {
    let mut entry = weighment("20mm, washed", dec!(1), dec!(10));
    entry.truck_id = "says \"hello\"".to_string();
    let bundle = bundle_with(vec![entry], Vec::new());

    let csv_text = render_csv(&bundle, ReportKind::Sales).unwrap();
    let row = csv_text.trim_end().lines().nth(1).unwrap();

    assert!(row.contains("\"20mm, washed\""));
    assert!(row.contains("\"says \"\"hello\"\"\""));
}

#[test]
fn test_csv_all_variant_concatenates_labeled_sections() {
    let expenses = vec![ExpenseEntry {
        id: ExpenseId::new(),
        organization_id: OrganizationId::new(),
        category: "diesel".to_string(),
        amount: dec!(500),
        occurred_at: Utc.with_ymd_and_hms(2024, 3, 8, 9, 0, 0).unwrap(),
        author_id: UserId::new(),
    }];
    let bundle = bundle_with(vec![weighment("20mm", dec!(1), dec!(10))], expenses);

    let csv_text = render_csv(&bundle, ReportKind::All).unwrap();

    let sales_pos = csv_text.find("Sales\n").unwrap();
    let raw_pos = csv_text.find("Raw Material\n").unwrap();
    let exp_pos = csv_text.find("Expenses\n").unwrap();
    assert!(sales_pos < raw_pos && raw_pos < exp_pos);
    assert!(csv_text.contains("Date,Category,Amount,Entered By"));
}

#[test]
fn test_csv_empty_kind_is_header_only() {
    let bundle = bundle_with(Vec::new(), Vec::new());
    let csv_text = render_csv(&bundle, ReportKind::Expenses).unwrap();
    assert_eq!(csv_text.trim_end().lines().count(), 1);
}

// ============================================================================
// HTML
// ============================================================================

#[test]
fn test_html_escapes_user_content() {
    let mut entry = weighment("<script>alert(1)</script>", dec!(1), dec!(10));
    entry.truck_id = "A&B".to_string();
    let bundle = bundle_with(vec![entry], Vec::new());

    let html = render_html(&bundle);

    assert!(!html.contains("<script>alert"));
    assert!(html.contains("&lt;script&gt;"));
    assert!(html.contains("A&amp;B"));
}

#[test]
fn test_degraded_html_carries_banner() {
    let bundle = bundle_with(Vec::new(), Vec::new());
    let html = render_degraded_html(&bundle);

    assert!(html.contains("PDF unavailable"));
    assert_eq!(html.matches("<body>").count(), 1);
}

// ============================================================================
// PDF engine resource safety
// ============================================================================

enum FakeBehavior {
    Succeed,
    FailOnPrint,
    FailOnLaunch,
    Hang,
}

struct FakeEngine {
    behavior: FakeBehavior,
    launches: Arc<AtomicUsize>,
    releases: Arc<AtomicUsize>,
}

impl FakeEngine {
    fn new(behavior: FakeBehavior) -> Self {
        Self {
            behavior,
            launches: Arc::new(AtomicUsize::new(0)),
            releases: Arc::new(AtomicUsize::new(0)),
        }
    }
}

impl RenderEngine for FakeEngine {
    fn launch(&self) -> Result<Box<dyn RenderSession>, RenderError> {
        if matches!(self.behavior, FakeBehavior::FailOnLaunch) {
            return Err(RenderError::Engine("spawn failed".to_string()));
        }
        self.launches.fetch_add(1, Ordering::SeqCst);
        Ok(Box::new(FakeSession {
            fail: matches!(self.behavior, FakeBehavior::FailOnPrint),
            hang: matches!(self.behavior, FakeBehavior::Hang),
            releases: Arc::clone(&self.releases),
        }))
    }
}

struct FakeSession {
    fail: bool,
    hang: bool,
    releases: Arc<AtomicUsize>,
}

impl RenderSession for FakeSession {
    fn print_to_pdf(&mut self, _html: &str) -> Result<Vec<u8>, RenderError> {
        if self.hang {
            std::thread::sleep(Duration::from_millis(500));
        }
        if self.fail {
            return Err(RenderError::Engine("target crashed".to_string()));
        }
        Ok(b"%PDF-1.7 fake".to_vec())
    }

    fn release(&mut self) {
        self.releases.fetch_add(1, Ordering::SeqCst);
    }
}

fn renderer_with(engine: &Arc<FakeEngine>, timeout: Duration) -> PdfRenderer {
    PdfRenderer::new(Arc::clone(engine) as Arc<dyn RenderEngine>, timeout)
}

#[tokio::test]
async fn test_pdf_success_releases_session_once() {
    let engine = Arc::new(FakeEngine::new(FakeBehavior::Succeed));
    let renderer = renderer_with(&engine, Duration::from_secs(5));
    let bundle = bundle_with(vec![weighment("20mm", dec!(1), dec!(10))], Vec::new());

    let artifact = renderer.render(&bundle).await.unwrap();

    assert_eq!(artifact.content_type, "application/pdf");
    assert!(!artifact.degraded);
    assert!(artifact.filename.ends_with(".pdf"));
    assert_eq!(engine.releases.load(Ordering::SeqCst), 1);
}

#[tokio::test]
async fn test_pdf_print_failure_degrades_and_releases_once() {
    let engine = Arc::new(FakeEngine::new(FakeBehavior::FailOnPrint));
    let renderer = renderer_with(&engine, Duration::from_secs(5));
    let bundle = bundle_with(Vec::new(), Vec::new());

    let artifact = renderer.render(&bundle).await.unwrap();

    assert!(artifact.degraded);
    assert_eq!(artifact.content_type, "text/html; charset=utf-8");
    assert!(artifact.filename.ends_with(".html"));
    let body = String::from_utf8(artifact.bytes).unwrap();
    assert!(body.contains("PDF unavailable"));
    assert_eq!(engine.releases.load(Ordering::SeqCst), 1);
    assert_eq!(engine.launches.load(Ordering::SeqCst), 1);
}

#[tokio::test]
async fn test_pdf_launch_failure_degrades_without_session() {
    let engine = Arc::new(FakeEngine::new(FakeBehavior::FailOnLaunch));
    let renderer = renderer_with(&engine, Duration::from_secs(5));
    let bundle = bundle_with(Vec::new(), Vec::new());

    let artifact = renderer.render(&bundle).await.unwrap();

    assert!(artifact.degraded);
    // No session existed, so nothing to release.
    assert_eq!(engine.releases.load(Ordering::SeqCst), 0);
}

#[tokio::test]
async fn test_pdf_timeout_is_a_distinct_error() {
    let engine = Arc::new(FakeEngine::new(FakeBehavior::Hang));
    let renderer = renderer_with(&engine, Duration::from_millis(20));
    let bundle = bundle_with(Vec::new(), Vec::new());

    let err = renderer.render(&bundle).await.unwrap_err();

    assert!(matches!(err, RenderError::Timeout { .. }));
    // The abandoned blocking task still drains and releases the session.
    tokio::time::sleep(Duration::from_millis(700)).await;
    assert_eq!(engine.releases.load(Ordering::SeqCst), 1);
}

#[test]
fn test_artifact_constructors() {
    let pdf = ReportArtifact::pdf("a.pdf".to_string(), vec![1, 2, 3]);
    assert!(!pdf.degraded);

    let csv = ReportArtifact::csv("a.csv".to_string(), "x,y\n".to_string());
    assert_eq!(csv.bytes, b"x,y\n");

    let html = ReportArtifact::degraded_html("a.html".to_string(), "<html>".to_string());
    assert!(html.degraded);
}
