//! Weighbridge report generator
//!
//! Seeds an in-memory fact store and renders the three report artifacts
//! (summary JSON to stdout, CSV and PDF to `./out`). Useful for exercising
//! the pipeline end to end, including the real Chromium engine, without a
//! database or HTTP layer.

use std::sync::Arc;

use anyhow::Context;
use chrono::{Duration, Utc};
use rust_decimal::Decimal;
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use weighbridge_core::fact::{
    EntryKind, ExpenseEntry, InMemoryFactRepository, InMemoryOrganizationRepository,
    OrganizationMeta, WeighmentEntry,
};
use weighbridge_core::pipeline::{ReportRequest, ReportService};
use weighbridge_core::range::DateFilter;
use weighbridge_core::render::ChromiumEngine;
use weighbridge_core::report::ReportKind;
use weighbridge_shared::AppConfig;
use weighbridge_shared::types::{EntryId, ExpenseId, OrganizationId, UserId};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load environment variables from .env file
    dotenvy::dotenv().ok();

    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "weighbridge=debug,reportgen=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = AppConfig::load().context("Failed to load configuration")?;

    let (organization, facts) = seed();
    let org_id = organization.id;
    info!(organization = %org_id, "seeded sample facts");

    let service = ReportService::new(
        Arc::new(facts),
        Arc::new(InMemoryOrganizationRepository::new(vec![organization])),
        Arc::new(ChromiumEngine::new(config.renderer.clone())),
        &config.reporting,
        &config.renderer,
    );

    let request = ReportRequest {
        organization_id: org_id,
        filter: DateFilter::Last30Days,
        timezone: None,
        start_date: None,
        end_date: None,
    };

    let summary = service.summary(&request).await?;
    println!("{}", serde_json::to_string_pretty(&summary)?);

    std::fs::create_dir_all("out").context("Failed to create out/")?;

    let csv = service.csv_report(&request, ReportKind::All).await?;
    std::fs::write(format!("out/{}", csv.filename), &csv.bytes)?;
    info!(file = %csv.filename, "wrote CSV report");

    match service.pdf_report(&request).await {
        Ok(artifact) => {
            if artifact.degraded {
                warn!(file = %artifact.filename, "PDF unavailable, wrote HTML fallback");
            } else {
                info!(file = %artifact.filename, "wrote PDF report");
            }
            std::fs::write(format!("out/{}", artifact.filename), &artifact.bytes)?;
        }
        Err(err) => warn!(error = %err, "PDF rendering failed"),
    }

    Ok(())
}

/// A week of plausible weighbridge activity for one organization.
fn seed() -> (OrganizationMeta, InMemoryFactRepository) {
    let organization = OrganizationMeta {
        id: OrganizationId::new(),
        name: "Sri Balaji Stone Crusher".to_string(),
        address: Some("NH-44, Hosur, Tamil Nadu".to_string()),
        phone: Some("+91 98400 00000".to_string()),
    };

    let mut facts = InMemoryFactRepository::new();
    let author = UserId::new();
    let now = Utc::now();

    let sales: [(&str, &str, i64, i64); 4] = [
        ("TN-29-AB-1234", "20mm", 12, 850),
        ("TN-29-AB-1234", "dust", 9, 400),
        ("KA-01-QX-7777", "40mm", 15, 780),
        ("TN-70-CD-4321", "20mm", 8, 850),
    ];
    for (day, (truck, material, units, rate)) in sales.into_iter().enumerate() {
        let units = Decimal::from(units);
        let rate = Decimal::from(rate);
        facts.push_weighment(WeighmentEntry {
            id: EntryId::new(),
            organization_id: organization.id,
            kind: EntryKind::Sales,
            truck_id: truck.to_string(),
            material_type: material.to_string(),
            unit_count: units,
            rate_per_unit: rate,
            total_amount: units * rate,
            occurred_at: now - Duration::days(day as i64),
            author_id: author,
        });
    }

    let boulder_units = Decimal::from(40);
    let boulder_rate = Decimal::from(220);
    facts.push_weighment(WeighmentEntry {
        id: EntryId::new(),
        organization_id: organization.id,
        kind: EntryKind::RawMaterial,
        truck_id: "TN-29-ZZ-0001".to_string(),
        material_type: "boulder".to_string(),
        unit_count: boulder_units,
        rate_per_unit: boulder_rate,
        total_amount: boulder_units * boulder_rate,
        occurred_at: now - Duration::days(2),
        author_id: author,
    });

    for (day, (category, amount)) in [("diesel", 4_500), ("maintenance", 2_750)]
        .into_iter()
        .enumerate()
    {
        facts.push_expense(ExpenseEntry {
            id: ExpenseId::new(),
            organization_id: organization.id,
            category: category.to_string(),
            amount: Decimal::from(amount),
            occurred_at: now - Duration::days(day as i64 + 1),
            author_id: author,
        });
    }

    (organization, facts)
}
