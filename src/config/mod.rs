mod client;
mod email;
mod env;
mod issuer;
mod service;

pub use client::Client;
pub use email::{ArchiveDestination, EmailRouting};
pub use env::{EnvKeys, Profile, EVENT_KEYS, LOCAL_KEYS};
pub use issuer::{BankDetails, Config, Issuer};
pub use service::Service;

use crate::error::{InvoiceError, Result};
use crate::invoice::split_name;
use directories::ProjectDirs;
use lettre::message::Mailbox;
use std::fs;
use std::path::{Path, PathBuf};

/// Get the config directory path (~/.invoice-mailer/)
pub fn config_dir() -> Result<PathBuf> {
    // First try XDG-style directories
    if let Some(proj_dirs) = ProjectDirs::from("", "", "invoice-mailer") {
        return Ok(proj_dirs.config_dir().to_path_buf());
    }

    // Fallback to ~/.invoice-mailer/
    let home = std::env::var_os("HOME").map(PathBuf::from).ok_or_else(|| {
        InvoiceError::Io(std::io::Error::new(
            std::io::ErrorKind::NotFound,
            "Could not determine home directory",
        ))
    })?;

    Ok(home.join(".invoice-mailer"))
}

/// Default location of config.toml
pub fn default_config_file() -> Result<PathBuf> {
    Ok(config_dir()?.join("config.toml"))
}

/// Load a config.toml
pub fn load_config(path: &Path) -> Result<Config> {
    if !path.exists() {
        return Err(InvoiceError::ConfigFileNotFound(path.to_path_buf()));
    }
    let content = fs::read_to_string(path)?;
    let config: Config = toml::from_str(&content).map_err(|e| InvoiceError::ConfigParse {
        path: path.to_path_buf(),
        source: e,
    })?;
    config.validated()
}

/// Write the config template to `path`, refusing to overwrite an existing file.
pub fn init_config(path: &Path) -> Result<()> {
    if path.exists() {
        return Err(InvoiceError::AlreadyInitialized(path.to_path_buf()));
    }
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    fs::write(path, CONFIG_TEMPLATE)?;
    Ok(())
}

impl Config {
    /// Normalize optional settings and validate, as done by every loader.
    pub fn validated(mut self) -> Result<Config> {
        // An empty bucket means archival is switched off.
        self.archive = self.archive.filter(|a| !a.bucket.trim().is_empty());
        self.validate()?;
        Ok(self)
    }

    /// Check everything the later stages rely on, so a bad value fails the run
    /// before anything is rendered or sent.
    pub fn validate(&self) -> Result<()> {
        split_name(&self.issuer.full_name)?;

        for (field, value) in [
            ("sender", &self.email.sender),
            ("recipient", &self.email.recipient),
            ("cc", &self.email.cc),
        ] {
            value
                .parse::<Mailbox>()
                .map_err(|e| InvoiceError::InvalidAddress {
                    field: field.to_string(),
                    reason: e.to_string(),
                })?;
        }

        if !self.service.amount.is_finite() || self.service.amount < 0.0 {
            return Err(InvoiceError::InvalidField {
                field: "service.amount".to_string(),
                value: self.service.amount.to_string(),
                reason: "must be a non-negative amount".to_string(),
            });
        }

        Ok(())
    }
}

/// Template content for config.toml
pub const CONFIG_TEMPLATE: &str = r#"# Configuration for invoice-mailer.
# Every value is required except the [archive] table.

[issuer]
full_name = "Jane Doe"
tax_id = "123456789"
address = "1 Example Street"
postcode = "1000-001"
city = "Lisbon"
country = "Portugal"
phone = "+351 900 000 000"
email = "jane@example.com"

[bank]
iban = "PT50 0000 0000 0000 0000 0000 0"
swift = "EXAMPLEXXX"
correspondent_bic = "CORRESPXXX"

[client]
name = "Example Client Inc."
address = "456 Client Avenue, Los Angeles"
tax_id = "US-987654321"

[service]
description = "Software Development"
currency = "USD"
amount = 5000

[email]
sender = "jane.sender@gmail.com"        # also the SMTP username
recipient = "billing@example-client.com"
cc = "jane@example.com"
password = "app-password"
greeting_name = "Team"
signature_name = "Jane"

# Uncomment to keep a copy of every invoice in S3.
# [archive]
# bucket = "my-invoices"
"#;
