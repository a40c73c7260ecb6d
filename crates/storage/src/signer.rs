use async_trait::async_trait;

/// Errors from the object-storage signing layer.
#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    /// The HTTP request itself failed (network, DNS, TLS, etc.).
    #[error("HTTP request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// The storage API returned a non-2xx status code.
    #[error("Storage API error ({status}): {body}")]
    ApiError {
        /// HTTP status code.
        status: u16,
        /// Raw response body for debugging.
        body: String,
    },

    /// The storage API answered 2xx but without a usable signed URL.
    #[error("Invalid signing response: {0}")]
    InvalidResponse(String),
}

/// Mints time-limited read URLs for private storage objects.
#[async_trait]
pub trait ObjectSigner: Send + Sync {
    /// Create an absolute signed URL for `bucket`/`path` valid for
    /// `ttl_secs` seconds.
    async fn create_signed_url(
        &self,
        bucket: &str,
        path: &str,
        ttl_secs: u64,
    ) -> Result<String, StorageError>;
}
