use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum InvoiceError {
    #[error("Config file not found: {0}")]
    ConfigFileNotFound(PathBuf),

    #[error("Failed to parse config file {path}: {source}")]
    ConfigParse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("Missing configuration value: {0}")]
    MissingField(String),

    #[error("Invalid value '{value}' for {field}: {reason}")]
    InvalidField {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Full name is empty; cannot derive first and last name")]
    EmptyName,

    #[error("Invalid email address for {field}: {reason}")]
    InvalidAddress { field: String, reason: String },

    #[error("Config file already exists at {0}")]
    AlreadyInitialized(PathBuf),

    #[error("Typst not found. Install it from https://typst.app/ or run: cargo install typst-cli")]
    TypstNotFound,

    #[error("Failed to generate PDF: {0}")]
    PdfGeneration(String),

    #[error("Failed to build email: {0}")]
    EmailBuild(String),

    #[error("SMTP authentication failed: {0}")]
    Authentication(String),

    #[error("Failed to send email: {0}")]
    Delivery(String),

    #[error("Failed to upload s3://{bucket}/{key}: {reason}")]
    Upload {
        bucket: String,
        key: String,
        reason: String,
    },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl InvoiceError {
    /// True for errors raised while assembling configuration, before any I/O.
    pub fn is_configuration(&self) -> bool {
        matches!(
            self,
            InvoiceError::ConfigFileNotFound(_)
                | InvoiceError::ConfigParse { .. }
                | InvoiceError::MissingField(_)
                | InvoiceError::InvalidField { .. }
                | InvoiceError::EmptyName
                | InvoiceError::InvalidAddress { .. }
                | InvoiceError::AlreadyInitialized(_)
        )
    }
}

pub type Result<T> = std::result::Result<T, InvoiceError>;
