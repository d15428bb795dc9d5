//! Builds the container-details modal from the three strings carried by the
//! "show details" trigger: sku, raw container details, and total quantity.

use crate::core::container_details;
use crate::domain::model::{ArrivalRow, ModalViewModel};
use crate::utils::error::{PanelError, Result};
use std::fmt::Write;

pub const NO_DATA_MESSAGE: &str = "No container details available";

/// Build the modal view model. Never fails.
///
/// Details that are non-empty but contain no parsable group are kept as a
/// single row with the raw total, so nothing the caller sent is dropped.
pub fn present(sku: &str, details: &str, total_qty: &str) -> ModalViewModel {
    let mut view = ModalViewModel {
        sku_label: sku.to_string(),
        total_quantity: total_qty.to_string(),
        entries: Vec::new(),
        fallback_text: None,
    };

    if container_details::is_no_data(details) {
        tracing::debug!(sku, "No container details");
        return view;
    }

    let parsed = container_details::parse(details);
    if parsed.is_empty() {
        tracing::debug!(sku, details, "Container details not parsable, showing raw text");
        view.entries.push(ArrivalRow {
            quantity: total_qty.to_string(),
            arrival_date: details.to_string(),
        });
        view.fallback_text = Some(details.to_string());
    } else {
        view.entries = parsed.into_iter().map(ArrivalRow::from).collect();
    }

    view
}

impl ModalViewModel {
    /// Render the modal body as an HTML fragment.
    pub fn render_html(&self) -> String {
        let mut html = String::new();
        let _ = writeln!(
            html,
            r#"<h3 class="modal-title">Container Details: {}</h3>"#,
            escape_html(&self.sku_label)
        );
        let _ = writeln!(
            html,
            r#"<p class="modal-summary">Total Incoming: <strong>{}</strong></p>"#,
            escape_html(&self.total_quantity)
        );

        if self.entries.is_empty() {
            let _ = writeln!(html, r#"<p class="modal-empty">{}</p>"#, NO_DATA_MESSAGE);
            return html;
        }

        html.push_str("<ul class=\"arrival-list\">\n");
        for row in &self.entries {
            let _ = writeln!(
                html,
                r#"  <li><span class="arrival-qty">{}</span> <span class="arrival-date">{}</span></li>"#,
                escape_html(&row.quantity),
                escape_html(&row.arrival_date)
            );
        }
        html.push_str("</ul>\n");
        html
    }

    /// Plain-text rendering used by the CLI.
    pub fn render_text(&self) -> String {
        let mut out = format!(
            "Container Details: {}\nTotal Incoming: {}\n",
            self.sku_label, self.total_quantity
        );
        if self.entries.is_empty() {
            out.push_str(NO_DATA_MESSAGE);
            out.push('\n');
        }
        for row in &self.entries {
            let _ = writeln!(out, "  {:>8}  {}", row.quantity, row.arrival_date);
        }
        out
    }

    /// Arrival rows as CSV with a `sku,quantity,arrival_date` header.
    pub fn to_csv(&self) -> Result<String> {
        let mut writer = csv::Writer::from_writer(Vec::new());
        writer.write_record(["sku", "quantity", "arrival_date"])?;
        for row in &self.entries {
            writer.write_record([&self.sku_label, &row.quantity, &row.arrival_date])?;
        }
        let bytes = writer.into_inner().map_err(|e| {
            PanelError::IoError(std::io::Error::new(e.error().kind(), e.error().to_string()))
        })?;
        String::from_utf8(bytes).map_err(|e| PanelError::ProcessingError {
            message: format!("CSV output is not UTF-8: {}", e),
        })
    }
}

fn escape_html(input: &str) -> String {
    input
        .replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#39;")
}
