use crate::error::{InvoiceError, Result};
use crate::invoice::BillingPeriod;

/// Split a full name into (first, last) on single spaces.
///
/// Middle tokens are dropped. A name without a space is all first name.
pub fn split_name(full_name: &str) -> Result<(String, String)> {
    if full_name.is_empty() {
        return Err(InvoiceError::EmptyName);
    }

    let tokens: Vec<&str> = full_name.split(' ').collect();
    match tokens.as_slice() {
        [first, .., last] => Ok((first.to_string(), last.to_string())),
        _ => Ok((full_name.to_string(), String::new())),
    }
}

/// `JaneDoe_March_2024_invoice.pdf`
pub fn invoice_filename(full_name: &str, period: &BillingPeriod) -> Result<String> {
    let (first, last) = split_name(full_name)?;
    Ok(format!(
        "{}{}_{}_{}_invoice.pdf",
        first, last, period.month_name, period.year
    ))
}

/// `Jane Doe – Invoice for March 2024`
pub fn email_subject(full_name: &str, period: &BillingPeriod) -> Result<String> {
    let (first, last) = split_name(full_name)?;
    Ok(format!(
        "{} {} – Invoice for {} {}",
        first, last, period.month_name, period.year
    ))
}
