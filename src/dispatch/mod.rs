mod archive;
mod email;

pub use archive::{archive, ObjectStore, S3Store};
pub use email::{
    build_message, email_body, InvoiceEmail, Mailer, SmtpMailer, SMTP_HOST, SMTP_PORT,
};
