use serde::{Deserialize, Serialize};

/// Addresses, credentials and names used for the outgoing invoice email.
#[derive(Deserialize, Serialize, Clone)]
pub struct EmailRouting {
    pub sender: String,
    pub recipient: String,
    pub cc: String,
    pub password: String,
    pub greeting_name: String,
    pub signature_name: String,
}

// Hand-written so the SMTP password never ends up in logs.
impl std::fmt::Debug for EmailRouting {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("EmailRouting")
            .field("sender", &self.sender)
            .field("recipient", &self.recipient)
            .field("cc", &self.cc)
            .field("password", &"<redacted>")
            .field("greeting_name", &self.greeting_name)
            .field("signature_name", &self.signature_name)
            .finish()
    }
}

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Eq)]
pub struct ArchiveDestination {
    pub bucket: String,
}
