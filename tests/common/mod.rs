#![allow(dead_code)]

use std::collections::HashMap;

use invoice_mailer::{BankDetails, Client, Config, EmailRouting, Issuer, Service};

pub fn sample_config() -> Config {
    Config {
        issuer: Issuer {
            full_name: "Jane Doe".to_string(),
            tax_id: "PT123456789".to_string(),
            address: "1 Rua Exemplo".to_string(),
            postcode: "1000-001".to_string(),
            city: "Lisbon".to_string(),
            country: "Portugal".to_string(),
            phone: "+351 900 000 000".to_string(),
            email: "jane@example.com".to_string(),
        },
        bank: BankDetails {
            iban: "PT50000000000000000000000".to_string(),
            swift: "EXAMPLEXXX".to_string(),
            correspondent_bic: "CORRESPXXX".to_string(),
        },
        client: Client {
            name: "Acme Corp".to_string(),
            address: "456 Client Avenue".to_string(),
            tax_id: "US-987654321".to_string(),
        },
        service: Service {
            description: "Software Development".to_string(),
            currency: "USD".to_string(),
            amount: 1234.5,
        },
        email: EmailRouting {
            sender: "jane.sender@gmail.com".to_string(),
            recipient: "billing@acme.test".to_string(),
            cc: "jane@example.com".to_string(),
            password: "secret".to_string(),
            greeting_name: "Team".to_string(),
            signature_name: "Jane".to_string(),
        },
        archive: None,
    }
}

/// Every key of the local profile, with valid values.
pub fn local_env() -> HashMap<&'static str, &'static str> {
    HashMap::from([
        ("MY_FULL_NAME", "Jane Doe"),
        ("MY_NIF", "PT123456789"),
        ("MY_ADDRESS", "1 Rua Exemplo"),
        ("MY_POSTCODE", "1000-001"),
        ("MY_LOCATION", "Lisbon"),
        ("MY_COUNTRY", "Portugal"),
        ("MY_PHONE", "+351 900 000 000"),
        ("MY_PERSONAL_HOTMAIL", "jane@example.com"),
        ("MY_IBAN", "PT50000000000000000000000"),
        ("MY_SWIFT", "EXAMPLEXXX"),
        ("MY_CORRESPONDENT_BIC", "CORRESPXXX"),
        ("EMPLOYER_NAME", "Acme Corp"),
        ("EMPLOYER_ADDRESS", "456 Client Avenue"),
        ("EMPLOYER_TAXID", "US-987654321"),
        ("MY_PROFESSION", "Software Development"),
        ("CURRENCY_TO_BE_PAID", "USD"),
        ("SALARY", "1234.5"),
        ("MY_PERSONAL_GMAIL", "jane.sender@gmail.com"),
        ("MY_WORK_EMAIL", "billing@acme.test"),
        ("EMAIL_PASSWORD", "secret"),
        ("EMAIL_BODY_SEND_TO_NAME", "Team"),
        ("EMAIL_BODY_MY_NAME", "Jane"),
    ])
}

/// Every key of the event profile, with valid values and no bucket.
pub fn event_env() -> HashMap<&'static str, &'static str> {
    HashMap::from([
        ("PERSON_NAME", "Jane Doe"),
        ("PERSON_TAX_ID", "PT123456789"),
        ("PERSON_ADDRESS", "1 Rua Exemplo"),
        ("PERSON_POSTCODE", "1000-001"),
        ("PERSON_CITY", "Lisbon"),
        ("PERSON_COUNTRY", "Portugal"),
        ("PERSON_PHONE", "+351 900 000 000"),
        ("EMAIL_CC_ADDRESS", "jane@example.com"),
        ("BANK_IBAN", "PT50000000000000000000000"),
        ("BANK_SWIFT", "EXAMPLEXXX"),
        ("BANK_CORRESPONDENT_BIC", "CORRESPXXX"),
        ("CLIENT_NAME", "Acme Corp"),
        ("CLIENT_ADDRESS", "456 Client Avenue"),
        ("CLIENT_TAX_ID", "US-987654321"),
        ("INVOICE_SERVICE_DESCRIPTION", "Software Development"),
        ("INVOICE_CURRENCY", "USD"),
        ("INVOICE_AMOUNT", "2500"),
        ("EMAIL_SENDER_ADDRESS", "jane.sender@gmail.com"),
        ("EMAIL_RECIPIENT_ADDRESS", "billing@acme.test"),
        ("EMAIL_SENDER_PASSWORD", "secret"),
        ("EMAIL_GREETING_NAME", "Team"),
        ("EMAIL_SIGNATURE_NAME", "Jane"),
    ])
}

pub fn lookup<'a>(
    env: &'a HashMap<&'static str, &'static str>,
) -> impl Fn(&str) -> Option<String> + 'a {
    move |key| env.get(key).map(|v| v.to_string())
}
