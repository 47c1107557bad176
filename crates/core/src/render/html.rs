//! Styled HTML document for PDF printing and the degraded fallback.
//!
//! One styling path only. The same document feeds the Chromium print
//! pipeline and, with a warning banner prepended, the HTML fallback.

use std::fmt::Write as _;

use crate::fact::{ExpenseEntry, WeighmentEntry};
use crate::report::{ReportBundle, format_amount_short};

const STYLE: &str = "\
  body { font-family: 'Helvetica Neue', Arial, sans-serif; color: #1f2937; margin: 24px; }\n\
  h1 { font-size: 20px; margin-bottom: 2px; }\n\
  .meta { color: #6b7280; font-size: 12px; margin-bottom: 18px; }\n\
  .cards { display: flex; gap: 12px; margin-bottom: 20px; }\n\
  .card { flex: 1; border: 1px solid #e5e7eb; border-radius: 6px; padding: 10px 14px; }\n\
  .card .label { font-size: 11px; color: #6b7280; text-transform: uppercase; }\n\
  .card .value { font-size: 16px; font-weight: 600; margin-top: 4px; }\n\
  .net { background: #f0fdf4; }\n\
  h2 { font-size: 14px; border-bottom: 1px solid #e5e7eb; padding-bottom: 4px; margin-top: 22px; }\n\
  table { width: 100%; border-collapse: collapse; font-size: 12px; }\n\
  th { text-align: left; background: #f9fafb; padding: 6px 8px; border-bottom: 1px solid #d1d5db; }\n\
  td { padding: 5px 8px; border-bottom: 1px solid #f3f4f6; }\n\
  td.num, th.num { text-align: right; }\n\
  tr { page-break-inside: avoid; }\n\
  .banner { background: #fef3c7; border: 1px solid #f59e0b; border-radius: 6px;\n\
            padding: 10px 14px; margin-bottom: 16px; font-size: 13px; }\n\
  @page { size: A4; margin: 12mm; }\n";

/// Renders the bundle as a complete, print-ready HTML document.
#[must_use]
pub fn render_html(bundle: &ReportBundle) -> String {
    let mut body = String::new();

    let _ = write!(
        body,
        "<h1>{}</h1>\n<div class=\"meta\">{} &mdash; {} to {}{}</div>\n",
        escape(&bundle.organization.name),
        "Weighment Report",
        bundle.range.start_date.format("%d %b %Y"),
        bundle.range.end_date.format("%d %b %Y"),
        bundle
            .organization
            .address
            .as_deref()
            .map(|a| format!(" &bull; {}", escape(a)))
            .unwrap_or_default(),
    );

    body.push_str("<div class=\"cards\">\n");
    summary_card(&mut body, "Sales", &format_amount_short(bundle.sales.amount_total), "");
    summary_card(
        &mut body,
        "Raw Material",
        &format_amount_short(bundle.raw_material.amount_total),
        "",
    );
    summary_card(
        &mut body,
        "Expenses",
        &format_amount_short(bundle.expenses.amount_total),
        "",
    );
    summary_card(&mut body, "Net", &format_amount_short(bundle.net_amount), " net");
    body.push_str("</div>\n");

    if !bundle.material_buckets.is_empty() {
        body.push_str("<h2>Material Breakdown</h2>\n<table>\n<tr><th>Material</th><th class=\"num\">Entries</th><th class=\"num\">Units</th><th class=\"num\">Amount</th></tr>\n");
        for bucket in &bundle.material_buckets {
            let _ = write!(
                body,
                "<tr><td>{}</td><td class=\"num\">{}</td><td class=\"num\">{}</td><td class=\"num\">{}</td></tr>\n",
                escape(&bucket.material_type),
                bucket.count,
                bucket.unit_total,
                bucket.amount_total,
            );
        }
        body.push_str("</table>\n");
    }

    weighment_section(&mut body, "Sales Entries", &bundle.sales_facts);
    weighment_section(&mut body, "Raw Material Entries", &bundle.raw_material_facts);
    expense_section(&mut body, &bundle.expense_facts);

    let _ = write!(
        body,
        "<div class=\"meta\">Generated {}</div>\n",
        bundle.generated_at.format("%Y-%m-%d %H:%M UTC"),
    );

    document(&bundle.organization.name, &body)
}

/// Wraps the rendered document with a visible degradation banner.
#[must_use]
pub fn render_degraded_html(bundle: &ReportBundle) -> String {
    let full = render_html(bundle);
    let banner = "<div class=\"banner\">PDF unavailable &mdash; this page contains the \
                  equivalent report content.</div>";
    // Inject right after <body> so the banner leads the document.
    full.replacen("<body>", &format!("<body>\n{banner}"), 1)
}

fn document(title: &str, body: &str) -> String {
    format!(
        "<!DOCTYPE html>\n<html>\n<head>\n<meta charset=\"utf-8\">\n<title>{}</title>\n<style>\n{STYLE}</style>\n</head>\n<body>\n{body}</body>\n</html>\n",
        escape(title),
    )
}

fn summary_card(out: &mut String, label: &str, value: &str, extra_class: &str) {
    let _ = write!(
        out,
        "<div class=\"card{extra_class}\"><div class=\"label\">{label}</div><div class=\"value\">{}</div></div>\n",
        escape(value),
    );
}

fn weighment_section(out: &mut String, title: &str, entries: &[WeighmentEntry]) {
    if entries.is_empty() {
        return;
    }
    let _ = write!(
        out,
        "<h2>{title}</h2>\n<table>\n<tr><th>Date</th><th>Truck</th><th>Material</th><th class=\"num\">Units</th><th class=\"num\">Rate</th><th class=\"num\">Amount</th></tr>\n",
    );
    for entry in entries {
        let _ = write!(
            out,
            "<tr><td>{}</td><td>{}</td><td>{}</td><td class=\"num\">{}</td><td class=\"num\">{}</td><td class=\"num\">{}</td></tr>\n",
            entry.occurred_at.format("%Y-%m-%d"),
            escape(&entry.truck_id),
            escape(&entry.material_type),
            entry.unit_count,
            entry.rate_per_unit,
            entry.total_amount,
        );
    }
    out.push_str("</table>\n");
}

fn expense_section(out: &mut String, entries: &[ExpenseEntry]) {
    if entries.is_empty() {
        return;
    }
    out.push_str(
        "<h2>Expenses</h2>\n<table>\n<tr><th>Date</th><th>Category</th><th class=\"num\">Amount</th></tr>\n",
    );
    for entry in entries {
        let _ = write!(
            out,
            "<tr><td>{}</td><td>{}</td><td class=\"num\">{}</td></tr>\n",
            entry.occurred_at.format("%Y-%m-%d"),
            escape(&entry.category),
            entry.amount,
        );
    }
    out.push_str("</table>\n");
}

fn escape(raw: &str) -> String {
    raw.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}
