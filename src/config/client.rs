use serde::{Deserialize, Serialize};

/// The employer or client being billed.
#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct Client {
    pub name: String,
    pub address: String,
    pub tax_id: String,
}
