use serde::Serialize;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

use crate::config::Config;
use crate::error::Result;
use crate::invoice::{format_long_date, invoice_filename, BillingPeriod};
use crate::pdf::Renderer;

/// Column headings of the charge table, in order.
pub const TABLE_HEADER: [&str; 5] = [
    "Service",
    "Document Date",
    "Due Date",
    "Currency",
    "Total Amount",
];

/// A "Label: value" line in one of the address blocks
#[derive(Debug, Serialize, Clone, PartialEq, Eq)]
pub struct LabeledLine {
    pub label: String,
    pub value: String,
}

impl LabeledLine {
    fn new(label: &str, value: &str) -> Self {
        Self {
            label: label.to_string(),
            value: value.to_string(),
        }
    }
}

/// The single row of the charge table
#[derive(Debug, Serialize, Clone, PartialEq, Eq)]
pub struct ChargeRow {
    pub service: String,
    pub document_date: String,
    pub due_date: String,
    pub currency: String,
    pub total_amount: String,
}

impl ChargeRow {
    /// Cells in the same order as [`TABLE_HEADER`].
    pub fn cells(&self) -> [&str; 5] {
        [
            self.service.as_str(),
            self.document_date.as_str(),
            self.due_date.as_str(),
            self.currency.as_str(),
            self.total_amount.as_str(),
        ]
    }
}

/// Complete, preformatted invoice content for PDF generation
#[derive(Debug, Serialize, Clone)]
pub struct InvoiceData {
    pub title: String,
    pub heading: String,
    pub issuer: Vec<LabeledLine>,
    pub recipient_name: String,
    pub recipient: Vec<LabeledLine>,
    pub period: String,
    pub header: Vec<String>,
    pub charge: ChargeRow,
    pub bank_heading: String,
    pub bank: Vec<LabeledLine>,
}

impl InvoiceData {
    pub fn new(config: &Config, period: &BillingPeriod) -> Self {
        let issuer = &config.issuer;
        let client = &config.client;
        let bank = &config.bank;

        Self {
            title: "INVOICE".to_string(),
            heading: period.label(),
            issuer: vec![
                LabeledLine::new("Name", &issuer.full_name),
                LabeledLine::new("Tax ID", &issuer.tax_id),
                LabeledLine::new("Address", &issuer.address),
                LabeledLine::new("Postal Code", &issuer.postcode),
                LabeledLine::new("Location", &issuer.city),
                LabeledLine::new("Country", &issuer.country),
                LabeledLine::new("Phone", &issuer.phone),
                LabeledLine::new("Email", &issuer.email),
            ],
            recipient_name: client.name.clone(),
            recipient: vec![
                LabeledLine::new("Address", &client.address),
                LabeledLine::new("Tax ID", &client.tax_id),
            ],
            period: format!(
                "{} – {}",
                format_long_date(period.first_day),
                format_long_date(period.last_day)
            ),
            header: TABLE_HEADER.iter().map(|h| h.to_string()).collect(),
            charge: ChargeRow {
                service: config.service.description.clone(),
                document_date: format_long_date(period.document_date()),
                due_date: format_long_date(period.due_date()),
                currency: config.service.currency.clone(),
                total_amount: format_amount(config.service.amount),
            },
            bank_heading: "Information for Bank Transfer:".to_string(),
            bank: vec![
                LabeledLine::new("IBAN", &bank.iban),
                LabeledLine::new("SWIFT/BIC", &bank.swift),
                LabeledLine::new("Correspondent BIC", &bank.correspondent_bic),
            ],
        }
    }
}

/// Two decimals, no grouping: `1234.5` -> `"1234.50"`
pub fn format_amount(amount: f64) -> String {
    // Adding zero turns -0.0 into 0.0, which would otherwise print as "-0.00".
    format!("{:.2}", amount + 0.0)
}

/// The invoice PDF produced for one run
#[derive(Debug, Clone)]
pub struct RenderedDocument {
    pub filename: String,
    pub path: PathBuf,
    pub bytes: Vec<u8>,
}

/// Render this period's invoice into `dir` and read it back.
pub fn render_document(
    config: &Config,
    period: &BillingPeriod,
    renderer: &dyn Renderer,
    dir: &Path,
) -> Result<RenderedDocument> {
    let filename = invoice_filename(&config.issuer.full_name, period)?;
    let path = dir.join(&filename);
    let data = InvoiceData::new(config, period);

    debug!(path = %path.display(), "rendering invoice");
    renderer.render(&data, &path)?;

    let bytes = std::fs::read(&path)?;
    info!(file = %filename, size = bytes.len(), "invoice rendered");

    Ok(RenderedDocument {
        filename,
        path,
        bytes,
    })
}
