use serde::{Deserialize, Serialize};

use super::{ArchiveDestination, Client, EmailRouting, Service};

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct Config {
    pub issuer: Issuer,
    pub bank: BankDetails,
    pub client: Client,
    pub service: Service,
    pub email: EmailRouting,
    #[serde(default)]
    pub archive: Option<ArchiveDestination>,
}

/// The person issuing the invoice.
#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct Issuer {
    pub full_name: String,
    pub tax_id: String,
    pub address: String,
    pub postcode: String,
    pub city: String,
    pub country: String,
    pub phone: String,
    pub email: String,
}

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct BankDetails {
    pub iban: String,
    pub swift: String,
    pub correspondent_bic: String,
}
