use crate::error::{InvoiceError, Result};

use super::{ArchiveDestination, BankDetails, Client, Config, EmailRouting, Issuer, Service};

/// Which set of environment variable names to read configuration from.
///
/// The local run and the event-triggered run were historically configured
/// with different key names; both map onto the same [`Config`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum Profile {
    /// Keys used by a direct run from a workstation. Never archives.
    Local,
    /// Keys used by the event-triggered run, including the optional bucket.
    Event,
}

impl Profile {
    pub fn keys(self) -> &'static EnvKeys {
        match self {
            Profile::Local => &LOCAL_KEYS,
            Profile::Event => &EVENT_KEYS,
        }
    }
}

/// Environment variable name for every configuration field.
#[derive(Debug)]
pub struct EnvKeys {
    pub full_name: &'static str,
    pub tax_id: &'static str,
    pub address: &'static str,
    pub postcode: &'static str,
    pub city: &'static str,
    pub country: &'static str,
    pub phone: &'static str,
    pub issuer_email: &'static str,
    pub iban: &'static str,
    pub swift: &'static str,
    pub correspondent_bic: &'static str,
    pub client_name: &'static str,
    pub client_address: &'static str,
    pub client_tax_id: &'static str,
    pub service_description: &'static str,
    pub currency: &'static str,
    pub amount: &'static str,
    pub sender: &'static str,
    pub recipient: &'static str,
    pub cc: &'static str,
    pub password: &'static str,
    pub greeting_name: &'static str,
    pub signature_name: &'static str,
    pub archive_bucket: Option<&'static str>,
}

pub static LOCAL_KEYS: EnvKeys = EnvKeys {
    full_name: "MY_FULL_NAME",
    tax_id: "MY_NIF",
    address: "MY_ADDRESS",
    postcode: "MY_POSTCODE",
    city: "MY_LOCATION",
    country: "MY_COUNTRY",
    phone: "MY_PHONE",
    issuer_email: "MY_PERSONAL_HOTMAIL",
    iban: "MY_IBAN",
    swift: "MY_SWIFT",
    correspondent_bic: "MY_CORRESPONDENT_BIC",
    client_name: "EMPLOYER_NAME",
    client_address: "EMPLOYER_ADDRESS",
    client_tax_id: "EMPLOYER_TAXID",
    service_description: "MY_PROFESSION",
    currency: "CURRENCY_TO_BE_PAID",
    amount: "SALARY",
    sender: "MY_PERSONAL_GMAIL",
    recipient: "MY_WORK_EMAIL",
    cc: "MY_PERSONAL_HOTMAIL",
    password: "EMAIL_PASSWORD",
    greeting_name: "EMAIL_BODY_SEND_TO_NAME",
    signature_name: "EMAIL_BODY_MY_NAME",
    archive_bucket: None,
};

pub static EVENT_KEYS: EnvKeys = EnvKeys {
    full_name: "PERSON_NAME",
    tax_id: "PERSON_TAX_ID",
    address: "PERSON_ADDRESS",
    postcode: "PERSON_POSTCODE",
    city: "PERSON_CITY",
    country: "PERSON_COUNTRY",
    phone: "PERSON_PHONE",
    issuer_email: "EMAIL_CC_ADDRESS",
    iban: "BANK_IBAN",
    swift: "BANK_SWIFT",
    correspondent_bic: "BANK_CORRESPONDENT_BIC",
    client_name: "CLIENT_NAME",
    client_address: "CLIENT_ADDRESS",
    client_tax_id: "CLIENT_TAX_ID",
    service_description: "INVOICE_SERVICE_DESCRIPTION",
    currency: "INVOICE_CURRENCY",
    amount: "INVOICE_AMOUNT",
    sender: "EMAIL_SENDER_ADDRESS",
    recipient: "EMAIL_RECIPIENT_ADDRESS",
    cc: "EMAIL_CC_ADDRESS",
    password: "EMAIL_SENDER_PASSWORD",
    greeting_name: "EMAIL_GREETING_NAME",
    signature_name: "EMAIL_SIGNATURE_NAME",
    archive_bucket: Some("AWS_S3_BUCKET"),
};

impl Config {
    /// Build a config from the process environment.
    pub fn from_env(profile: Profile) -> Result<Config> {
        Self::from_lookup(profile, |key| std::env::var(key).ok())
    }

    /// Build a config from any key/value source, using the key names of `profile`.
    pub fn from_lookup<F>(profile: Profile, lookup: F) -> Result<Config>
    where
        F: Fn(&str) -> Option<String>,
    {
        let keys = profile.keys();
        let get = |key: &str| lookup(key).ok_or_else(|| InvoiceError::MissingField(key.to_string()));

        let config = Config {
            issuer: Issuer {
                full_name: get(keys.full_name)?,
                tax_id: get(keys.tax_id)?,
                address: get(keys.address)?,
                postcode: get(keys.postcode)?,
                city: get(keys.city)?,
                country: get(keys.country)?,
                phone: get(keys.phone)?,
                email: get(keys.issuer_email)?,
            },
            bank: BankDetails {
                iban: get(keys.iban)?,
                swift: get(keys.swift)?,
                correspondent_bic: get(keys.correspondent_bic)?,
            },
            client: Client {
                name: get(keys.client_name)?,
                address: get(keys.client_address)?,
                tax_id: get(keys.client_tax_id)?,
            },
            service: Service {
                description: get(keys.service_description)?,
                currency: get(keys.currency)?,
                amount: parse_amount(keys.amount, &get(keys.amount)?)?,
            },
            email: EmailRouting {
                sender: get(keys.sender)?,
                recipient: get(keys.recipient)?,
                cc: get(keys.cc)?,
                password: get(keys.password)?,
                greeting_name: get(keys.greeting_name)?,
                signature_name: get(keys.signature_name)?,
            },
            archive: keys
                .archive_bucket
                .and_then(|key| lookup(key))
                .map(|bucket| ArchiveDestination { bucket }),
        };

        config.validated()
    }
}

fn parse_amount(key: &str, raw: &str) -> Result<f64> {
    let invalid = |reason: &str| InvoiceError::InvalidField {
        field: key.to_string(),
        value: raw.to_string(),
        reason: reason.to_string(),
    };

    let amount: f64 = raw.trim().parse().map_err(|_| invalid("must be a number"))?;
    if !amount.is_finite() || amount < 0.0 {
        return Err(invalid("must be a non-negative amount"));
    }
    // "-0" passes the check above; store it as plain zero.
    Ok(amount + 0.0)
}
