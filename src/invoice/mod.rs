mod generator;
mod name;
mod period;

pub use generator::{
    format_amount, render_document, ChargeRow, InvoiceData, LabeledLine, RenderedDocument,
    TABLE_HEADER,
};
pub use name::{email_subject, invoice_filename, split_name};
pub use period::{current_period, format_long_date, BillingPeriod, DUE_DAYS};
