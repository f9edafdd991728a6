pub mod config;
pub mod dispatch;
pub mod error;
pub mod invoice;
pub mod pdf;
pub mod workflow;

pub use config::{ArchiveDestination, BankDetails, Client, Config, EmailRouting, Issuer, Profile, Service};
pub use error::{InvoiceError, Result};
pub use invoice::{current_period, BillingPeriod, InvoiceData, RenderedDocument};
pub use workflow::{handle_event, run, run_current_month, Dispatch, RunStatus};
