use lettre::message::{header::ContentType, Attachment, Mailbox, Message, MultiPart, SinglePart};
use lettre::transport::smtp::authentication::Credentials;
use lettre::{SmtpTransport, Transport};
use tracing::{debug, info};

use crate::config::Config;
use crate::error::{InvoiceError, Result};
use crate::invoice::{email_subject, BillingPeriod, RenderedDocument};

/// Mail submission endpoint. Always STARTTLS with login.
pub const SMTP_HOST: &str = "smtp.gmail.com";
pub const SMTP_PORT: u16 = 587;

/// Reply codes that mean the server rejected our credentials.
const AUTH_FAILURE_CODES: [&str; 3] = ["530", "534", "535"];

/// Everything needed to send one invoice email
#[derive(Debug, Clone)]
pub struct InvoiceEmail {
    pub from: String,
    pub to: String,
    pub cc: String,
    pub subject: String,
    pub body: String,
    pub attachment_name: String,
    pub attachment: Vec<u8>,
}

impl InvoiceEmail {
    pub fn new(document: &RenderedDocument, period: &BillingPeriod, config: &Config) -> Result<Self> {
        let routing = &config.email;
        Ok(Self {
            from: routing.sender.clone(),
            to: routing.recipient.clone(),
            cc: routing.cc.clone(),
            subject: email_subject(&config.issuer.full_name, period)?,
            body: email_body(&routing.greeting_name, period, &routing.signature_name),
            attachment_name: document.filename.clone(),
            attachment: document.bytes.clone(),
        })
    }
}

pub fn email_body(greeting_name: &str, period: &BillingPeriod, signature_name: &str) -> String {
    format!(
        "Hi {greeting_name},\n\nPlease find attached the invoice for {}.\n\nBest regards,\n{signature_name}",
        period.label()
    )
}

/// Delivers an invoice email. One attempt, no retry.
pub trait Mailer {
    fn send(&self, email: &InvoiceEmail) -> Result<()>;
}

/// Build the multipart message: plain-text body plus the PDF attachment.
pub fn build_message(email: &InvoiceEmail) -> Result<Message> {
    let pdf = ContentType::parse("application/pdf")
        .map_err(|e| InvoiceError::EmailBuild(e.to_string()))?;
    let attachment = Attachment::new(email.attachment_name.clone()).body(email.attachment.clone(), pdf);

    Message::builder()
        .from(parse_mailbox("sender", &email.from)?)
        .to(parse_mailbox("recipient", &email.to)?)
        .cc(parse_mailbox("cc", &email.cc)?)
        .subject(email.subject.clone())
        .multipart(
            MultiPart::mixed()
                .singlepart(SinglePart::plain(email.body.clone()))
                .singlepart(attachment),
        )
        .map_err(|e| InvoiceError::EmailBuild(e.to_string()))
}

fn parse_mailbox(field: &str, address: &str) -> Result<Mailbox> {
    address.parse().map_err(|e: lettre::address::AddressError| InvoiceError::InvalidAddress {
        field: field.to_string(),
        reason: e.to_string(),
    })
}

/// Sends through an authenticated STARTTLS SMTP session.
pub struct SmtpMailer {
    host: String,
    port: u16,
    username: String,
    password: String,
}

impl SmtpMailer {
    pub fn new(host: impl Into<String>, port: u16, username: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            host: host.into(),
            port,
            username: username.into(),
            password: password.into(),
        }
    }

    /// The fixed Gmail submission endpoint, logging in as the sender.
    pub fn gmail(config: &Config) -> Self {
        Self::new(SMTP_HOST, SMTP_PORT, &config.email.sender, &config.email.password)
    }

    fn transport(&self) -> Result<SmtpTransport> {
        let transport = SmtpTransport::starttls_relay(&self.host)
            .map_err(|e| InvoiceError::Delivery(format!("invalid SMTP host {}: {e}", self.host)))?
            .port(self.port)
            .credentials(Credentials::new(self.username.clone(), self.password.clone()))
            .build();
        Ok(transport)
    }
}

impl Mailer for SmtpMailer {
    fn send(&self, email: &InvoiceEmail) -> Result<()> {
        let message = build_message(email)?;
        let transport = self.transport()?;

        debug!(host = %self.host, port = self.port, "opening SMTP session");
        transport.send(&message).map_err(classify_smtp_error)?;

        info!(to = %email.to, cc = %email.cc, "invoice email sent");
        Ok(())
    }
}

fn classify_smtp_error(err: lettre::transport::smtp::Error) -> InvoiceError {
    let code = err.status().map(|c| c.to_string());
    match code.as_deref() {
        Some(c) if AUTH_FAILURE_CODES.contains(&c) => InvoiceError::Authentication(err.to_string()),
        _ => InvoiceError::Delivery(err.to_string()),
    }
}
