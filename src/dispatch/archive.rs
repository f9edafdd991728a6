use aws_config::BehaviorVersion;
use aws_sdk_s3::error::DisplayErrorContext;
use aws_sdk_s3::primitives::ByteStream;
use tracing::{debug, info};

use crate::config::ArchiveDestination;
use crate::error::{InvoiceError, Result};
use crate::invoice::RenderedDocument;

/// A place to keep a copy of each invoice.
pub trait ObjectStore {
    /// Store `body` under `key`, replacing any existing object.
    fn put(&self, bucket: &str, key: &str, body: Vec<u8>) -> Result<()>;
}

/// Upload the document under its filename, or do nothing without a destination.
///
/// Returns the `s3://` URI of the stored copy.
pub fn archive(
    document: &RenderedDocument,
    destination: Option<&ArchiveDestination>,
    store: &dyn ObjectStore,
) -> Result<Option<String>> {
    let Some(destination) = destination else {
        debug!("no archive destination configured, skipping upload");
        return Ok(None);
    };

    let key = &document.filename;
    store.put(&destination.bucket, key, document.bytes.clone())?;

    let uri = format!("s3://{}/{}", destination.bucket, key);
    info!(uri = %uri, "invoice archived");
    Ok(Some(uri))
}

/// Amazon S3 via the AWS SDK, with credentials from the default provider chain.
///
/// The SDK is async; each upload runs on its own current-thread runtime so
/// callers stay blocking.
#[derive(Debug, Default, Clone)]
pub struct S3Store;

impl S3Store {
    pub fn new() -> Self {
        Self
    }
}

impl ObjectStore for S3Store {
    fn put(&self, bucket: &str, key: &str, body: Vec<u8>) -> Result<()> {
        let upload_error = |reason: String| InvoiceError::Upload {
            bucket: bucket.to_string(),
            key: key.to_string(),
            reason,
        };

        let runtime = tokio::runtime::Builder::new_current_thread()
            .enable_all()
            .build()
            .map_err(|e| upload_error(e.to_string()))?;

        runtime.block_on(async {
            let sdk_config = aws_config::defaults(BehaviorVersion::latest()).load().await;
            let client = aws_sdk_s3::Client::new(&sdk_config);

            debug!(bucket, key, size = body.len(), "uploading to S3");
            client
                .put_object()
                .bucket(bucket)
                .key(key)
                .content_type("application/pdf")
                .body(ByteStream::from(body))
                .send()
                .await
                .map_err(|e| upload_error(DisplayErrorContext(&e).to_string()))?;

            Ok::<(), InvoiceError>(())
        })
    }
}
