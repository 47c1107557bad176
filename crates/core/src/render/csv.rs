//! CSV rendering.
//!
//! Deterministic and fully in-process. Column order is fixed per fact
//! kind; quoting follows standard CSV rules via the `csv` crate. Monetary
//! columns emit plain decimal strings that parse back to the exact
//! original amounts.

use crate::fact::{ExpenseEntry, WeighmentEntry};
use crate::report::{ReportBundle, ReportKind};

use super::error::RenderError;

const WEIGHMENT_HEADER: [&str; 7] = [
    "Date",
    "Truck",
    "Material",
    "Units",
    "Rate",
    "Amount",
    "Entered By",
];
const EXPENSE_HEADER: [&str; 4] = ["Date", "Category", "Amount", "Entered By"];

/// Renders one kind of the bundle, or all three under section labels.
pub fn render_csv(bundle: &ReportBundle, kind: ReportKind) -> Result<String, RenderError> {
    match kind {
        ReportKind::Sales => weighment_table(&bundle.sales_facts),
        ReportKind::RawStone => weighment_table(&bundle.raw_material_facts),
        ReportKind::Expenses => expense_table(&bundle.expense_facts),
        ReportKind::All => {
            let sections = [
                ("Sales", weighment_table(&bundle.sales_facts)?),
                ("Raw Material", weighment_table(&bundle.raw_material_facts)?),
                ("Expenses", expense_table(&bundle.expense_facts)?),
            ];
            let mut out = String::new();
            for (label, table) in sections {
                out.push_str(label);
                out.push('\n');
                out.push_str(&table);
                out.push('\n');
            }
            // Drop the trailing blank section separator.
            out.truncate(out.trim_end_matches('\n').len() + 1);
            Ok(out)
        }
    }
}

fn weighment_table(entries: &[WeighmentEntry]) -> Result<String, RenderError> {
    let mut writer = csv::Writer::from_writer(Vec::new());
    writer.write_record(WEIGHMENT_HEADER)?;
    for entry in entries {
        writer.write_record([
            entry.occurred_at.format("%Y-%m-%d").to_string(),
            entry.truck_id.clone(),
            entry.material_type.clone(),
            entry.unit_count.to_string(),
            entry.rate_per_unit.to_string(),
            entry.total_amount.to_string(),
            entry.author_id.to_string(),
        ])?;
    }
    finish(writer)
}

fn expense_table(entries: &[ExpenseEntry]) -> Result<String, RenderError> {
    let mut writer = csv::Writer::from_writer(Vec::new());
    writer.write_record(EXPENSE_HEADER)?;
    for entry in entries {
        writer.write_record([
            entry.occurred_at.format("%Y-%m-%d").to_string(),
            entry.category.clone(),
            entry.amount.to_string(),
            entry.author_id.to_string(),
        ])?;
    }
    finish(writer)
}

fn finish(writer: csv::Writer<Vec<u8>>) -> Result<String, RenderError> {
    let bytes = writer
        .into_inner()
        .map_err(|e| RenderError::Csv(e.to_string()))?;
    String::from_utf8(bytes).map_err(|e| RenderError::Csv(e.to_string()))
}
