use serde::Serialize;
use tracing::info;

use crate::config::{Config, Profile};
use crate::dispatch::{archive, InvoiceEmail, Mailer, ObjectStore, S3Store, SmtpMailer};
use crate::error::Result;
use crate::invoice::{render_document, BillingPeriod};
use crate::pdf::{Renderer, TypstRenderer};

/// The collaborators a run talks to.
pub struct Dispatch<'a> {
    pub renderer: &'a dyn Renderer,
    pub mailer: &'a dyn Mailer,
    pub store: &'a dyn ObjectStore,
}

/// Result record of a successful run
#[derive(Debug, Serialize, Clone, PartialEq, Eq)]
pub struct RunStatus {
    pub status: String,
    pub month: String,
    pub year: i32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub archived: Option<String>,
}

impl RunStatus {
    fn ok(period: &BillingPeriod, archived: Option<String>) -> Self {
        Self {
            status: "ok".to_string(),
            month: period.month_name.clone(),
            year: period.year,
            archived,
        }
    }
}

/// Render, email and (if configured) archive the invoice for `period`.
///
/// Every step runs to completion before the next starts and the first error
/// aborts the run. Nothing is undone: if archival fails the email stays sent.
/// The rendered file lives in a temporary directory that is removed when this
/// returns, on success or failure.
pub fn run(config: &Config, period: &BillingPeriod, deps: &Dispatch<'_>) -> Result<RunStatus> {
    config.validate()?;
    info!(period = %period.label(), archive = config.archive.is_some(), "starting invoice run");

    let work_dir = tempfile::Builder::new().prefix("invoice-mailer").tempdir()?;

    let document = render_document(config, period, deps.renderer, work_dir.path())?;

    let email = InvoiceEmail::new(&document, period, config)?;
    deps.mailer.send(&email)?;

    let archived = archive(&document, config.archive.as_ref(), deps.store)?;

    Ok(RunStatus::ok(period, archived))
}

/// Run for the current month with Typst, Gmail SMTP and S3.
pub fn run_current_month(config: &Config) -> Result<RunStatus> {
    let renderer = TypstRenderer::new();
    let mailer = SmtpMailer::gmail(config);
    let store = S3Store::new();

    run(
        config,
        &BillingPeriod::current(),
        &Dispatch {
            renderer: &renderer,
            mailer: &mailer,
            store: &store,
        },
    )
}

/// Event-triggered entry: configuration from the event key profile.
pub fn handle_event() -> Result<RunStatus> {
    let config = Config::from_env(Profile::Event)?;
    run_current_month(&config)
}
