//! Report service orchestration.

use std::sync::Arc;
use std::time::Duration;

use chrono::Utc;
use serde::{Deserialize, Serialize};
use tracing::info;
use weighbridge_shared::config::{RendererConfig, ReportingConfig};
use weighbridge_shared::types::OrganizationId;

use super::error::ReportError;
use crate::aggregate::{FactAggregator, KindTotals, MaterialBucket, MonthBucket};
use crate::fact::{FactRepository, OrganizationMeta, OrganizationRepository};
use crate::range::{DateFilter, DateRangeResolver, ResolvedRange};
use crate::render::{PdfRenderer, RenderEngine, ReportArtifact, render_csv};
use crate::report::{ReportBundle, ReportCompiler, ReportKind, format_amount_short};

/// One report request, pre-authorized by the surrounding layer.
#[derive(Debug, Clone)]
pub struct ReportRequest {
    /// Organization to report on.
    pub organization_id: OrganizationId,
    /// Symbolic date filter.
    pub filter: DateFilter,
    /// Timezone name; the configured default applies when absent.
    pub timezone: Option<String>,
    /// Explicit start bound, `YYYY-MM-DD`, required for `custom`.
    pub start_date: Option<String>,
    /// Explicit end bound, `YYYY-MM-DD`, required for `custom`.
    pub end_date: Option<String>,
}

/// Summary object for programmatic (non-file) consumption.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReportSummary {
    /// Organization metadata.
    pub organization: OrganizationMeta,
    /// Resolved instant range.
    pub range: ResolvedRange,
    /// Sales totals.
    pub sales: KindTotals,
    /// Raw-material totals.
    pub raw_material: KindTotals,
    /// Expense totals.
    pub expenses: KindTotals,
    /// Per-material breakdown.
    pub material_buckets: Vec<MaterialBucket>,
    /// Net figure: sales − raw material − expenses.
    pub net_amount: rust_decimal::Decimal,
    /// Net figure in abbreviated display units.
    pub net_amount_short: String,
}

/// End-to-end report generation service.
pub struct ReportService {
    aggregator: FactAggregator,
    renderer: PdfRenderer,
    timezone_default: String,
}

impl ReportService {
    /// Creates a service over the given collaborators.
    #[must_use]
    pub fn new(
        facts: Arc<dyn FactRepository>,
        organizations: Arc<dyn OrganizationRepository>,
        engine: Arc<dyn RenderEngine>,
        reporting: &ReportingConfig,
        renderer: &RendererConfig,
    ) -> Self {
        Self {
            aggregator: FactAggregator::new(facts, organizations),
            renderer: PdfRenderer::new(engine, Duration::from_secs(renderer.render_timeout_secs)),
            timezone_default: reporting.timezone.clone(),
        }
    }

    /// Resolves, aggregates, and compiles a bundle for one request.
    ///
    /// # Errors
    ///
    /// Validation errors surface before any repository call.
    pub async fn compile(&self, request: &ReportRequest) -> Result<ReportBundle, ReportError> {
        let zone = request
            .timezone
            .as_deref()
            .unwrap_or(&self.timezone_default);
        let range = DateRangeResolver::resolve(
            request.filter,
            zone,
            request.start_date.as_deref(),
            request.end_date.as_deref(),
            Utc::now(),
        )?;

        let outcome = self
            .aggregator
            .aggregate(request.organization_id, &range)
            .await?;

        Ok(ReportCompiler::compile(range, outcome))
    }

    /// Returns the aggregate summary without rendering a file.
    pub async fn summary(&self, request: &ReportRequest) -> Result<ReportSummary, ReportError> {
        let bundle = self.compile(request).await?;
        Ok(ReportSummary {
            net_amount_short: format_amount_short(bundle.net_amount),
            organization: bundle.organization,
            range: bundle.range,
            sales: bundle.sales,
            raw_material: bundle.raw_material,
            expenses: bundle.expenses,
            material_buckets: bundle.material_buckets,
            net_amount: bundle.net_amount,
        })
    }

    /// Renders a CSV artifact for one fact kind, or all three.
    pub async fn csv_report(
        &self,
        request: &ReportRequest,
        kind: ReportKind,
    ) -> Result<ReportArtifact, ReportError> {
        let bundle = self.compile(request).await?;
        let text = render_csv(&bundle, kind)?;
        info!(
            organization = %request.organization_id,
            kind = kind.label(),
            "rendered CSV report"
        );
        Ok(ReportArtifact::csv(bundle.filename(kind, "csv"), text))
    }

    /// Renders the PDF artifact, degrading to HTML when the engine fails.
    ///
    /// # Errors
    ///
    /// [`ReportError::RenderTimeout`] when the engine exceeds its bound;
    /// the caller should retry rather than accept degraded output.
    pub async fn pdf_report(&self, request: &ReportRequest) -> Result<ReportArtifact, ReportError> {
        let bundle = self.compile(request).await?;
        Ok(self.renderer.render(&bundle).await?)
    }

    /// Monthly trend over a caller-supplied year.
    pub async fn monthly_trend(
        &self,
        organization_id: OrganizationId,
        year: i32,
        timezone: Option<&str>,
    ) -> Result<Vec<MonthBucket>, ReportError> {
        let zone = timezone.unwrap_or(&self.timezone_default);
        Ok(self
            .aggregator
            .monthly_trend(organization_id, year, zone)
            .await?)
    }
}
