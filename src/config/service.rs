use serde::{Deserialize, Serialize};

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct Service {
    pub description: String,
    pub currency: String,
    pub amount: f64,
}
