use chrono::{Datelike, Days, Local, NaiveDate};
use serde::Serialize;

/// Days between the end of the billing month and the payment due date.
pub const DUE_DAYS: u64 = 10;

/// The calendar month an invoice covers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BillingPeriod {
    pub year: i32,
    pub month_name: String,
    pub first_day: NaiveDate,
    pub last_day: NaiveDate,
}

impl BillingPeriod {
    /// The period containing today's local date.
    pub fn current() -> Self {
        current_period(Local::now().date_naive())
    }

    /// Document date shown on the invoice (the last day of the month).
    pub fn document_date(&self) -> NaiveDate {
        self.last_day
    }

    pub fn due_date(&self) -> NaiveDate {
        self.last_day + Days::new(DUE_DAYS)
    }

    /// "March 2024"
    pub fn label(&self) -> String {
        format!("{} {}", self.month_name, self.year)
    }
}

/// Compute the billing period for the month containing `today`.
pub fn current_period(today: NaiveDate) -> BillingPeriod {
    let first_day = today - Days::new(u64::from(today.day0()));

    // Day 28 exists in every month and four more days always crosses into the
    // next one; stepping back by that date's day-of-month lands on month end.
    let next_month = first_day + Days::new(27) + Days::new(4);
    let last_day = next_month - Days::new(u64::from(next_month.day()));

    BillingPeriod {
        year: first_day.year(),
        month_name: first_day.format("%B").to_string(),
        first_day,
        last_day,
    }
}

/// Format a date as "05 March 2024".
pub fn format_long_date(date: NaiveDate) -> String {
    date.format("%d %B %Y").to_string()
}
