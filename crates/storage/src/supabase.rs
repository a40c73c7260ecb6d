//! REST client for the hosted storage API.
//!
//! Only the "create signed URL" endpoint is used:
//!
//! ```text
//! POST {base}/storage/v1/object/sign/{bucket}/{path}   {"expiresIn": <secs>}
//!   -> {"signedURL": "/object/sign/{bucket}/{path}?token=..."}
//! ```
//!
//! The returned `signedURL` is relative to `{base}/storage/v1`.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::config::StorageConfig;
use crate::signer::{ObjectSigner, StorageError};

/// HTTP client for a single storage project.
pub struct SupabaseStorage {
    client: reqwest::Client,
    base_url: String,
    service_key: String,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct SignRequest {
    expires_in: u64,
}

#[derive(Deserialize)]
struct SignResponse {
    #[serde(rename = "signedURL", alias = "signedUrl")]
    signed_url: Option<String>,
}

impl SupabaseStorage {
    /// Create a client with its own connection pool.
    pub fn new(config: &StorageConfig) -> Self {
        Self::with_client(reqwest::Client::new(), config)
    }

    /// Create a client reusing an existing [`reqwest::Client`].
    pub fn with_client(client: reqwest::Client, config: &StorageConfig) -> Self {
        Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            service_key: config.service_key.clone(),
        }
    }

    fn sign_endpoint(&self, bucket: &str, path: &str) -> String {
        format!(
            "{}/storage/v1/object/sign/{}/{}",
            self.base_url,
            bucket,
            path.trim_start_matches('/')
        )
    }

    /// Turn the API's relative `signedURL` into an absolute URL.
    fn absolute_url(&self, signed: &str) -> String {
        if signed.starts_with("http") {
            return signed.to_string();
        }
        let signed = signed.trim_start_matches('/');
        format!("{}/storage/v1/{}", self.base_url, signed)
    }
}

#[async_trait]
impl ObjectSigner for SupabaseStorage {
    async fn create_signed_url(
        &self,
        bucket: &str,
        path: &str,
        ttl_secs: u64,
    ) -> Result<String, StorageError> {
        let response = self
            .client
            .post(self.sign_endpoint(bucket, path))
            .bearer_auth(&self.service_key)
            .header("apikey", &self.service_key)
            .json(&SignRequest {
                expires_in: ttl_secs,
            })
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "<unreadable body>".to_string());
            return Err(StorageError::ApiError {
                status: status.as_u16(),
                body,
            });
        }

        let parsed: SignResponse = response.json().await?;
        let signed = parsed
            .signed_url
            .filter(|s| !s.is_empty())
            .ok_or_else(|| StorageError::InvalidResponse("missing signedURL".into()))?;

        Ok(self.absolute_url(&signed))
    }
}
