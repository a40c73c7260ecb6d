//! Classified reference -> playable URL.

use learnhub_core::video_ref::VideoReference;
use serde::Serialize;

use crate::signer::{ObjectSigner, StorageError};

/// A URL the client (or the proxy) can fetch, plus its lifetime.
///
/// `expires_in` is `None` for external URLs: the caller must not assume any
/// expiry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PlaybackUrl {
    pub url: String,
    pub expires_in: Option<u64>,
}

/// Mint a fresh signed URL for a storage reference, or pass an external
/// reference through unchanged.
///
/// Raw paths are signed against `default_bucket`. Nothing is cached; every
/// call hits the signer.
pub async fn sign_reference(
    signer: &dyn ObjectSigner,
    reference: &VideoReference,
    default_bucket: &str,
    ttl_secs: u64,
) -> Result<PlaybackUrl, StorageError> {
    let (bucket, path) = match reference {
        VideoReference::External { url } => {
            return Ok(PlaybackUrl {
                url: url.clone(),
                expires_in: None,
            });
        }
        VideoReference::StorageUrl { bucket, path } => (bucket.as_str(), path.as_str()),
        VideoReference::StoragePath { path } => (default_bucket, path.as_str()),
    };

    let url = signer.create_signed_url(bucket, path, ttl_secs).await?;
    tracing::debug!(bucket, path, ttl_secs, "Signed storage object");

    Ok(PlaybackUrl {
        url,
        expires_in: Some(ttl_secs),
    })
}

#[cfg(test)]
mod tests {
    use std::sync::Mutex;

    use assert_matches::assert_matches;
    use async_trait::async_trait;
    use learnhub_core::video_ref::classify;

    use super::*;

    #[derive(Default)]
    struct RecordingSigner {
        calls: Mutex<Vec<(String, String, u64)>>,
        fail: bool,
    }

    #[async_trait]
    impl ObjectSigner for RecordingSigner {
        async fn create_signed_url(
            &self,
            bucket: &str,
            path: &str,
            ttl_secs: u64,
        ) -> Result<String, StorageError> {
            self.calls
                .lock()
                .unwrap()
                .push((bucket.to_string(), path.to_string(), ttl_secs));
            if self.fail {
                return Err(StorageError::ApiError {
                    status: 404,
                    body: "Object not found".into(),
                });
            }
            Ok(format!("https://signed.test/{bucket}/{path}?ttl={ttl_secs}"))
        }
    }

    #[tokio::test]
    async fn raw_path_signed_in_default_bucket() {
        let signer = RecordingSigner::default();
        let out = sign_reference(&signer, &classify("lesson1/video.mp4"), "videos", 3600)
            .await
            .unwrap();

        assert_eq!(out.url, "https://signed.test/videos/lesson1/video.mp4?ttl=3600");
        assert_eq!(out.expires_in, Some(3600));
        assert_eq!(
            signer.calls.lock().unwrap().as_slice(),
            &[("videos".to_string(), "lesson1/video.mp4".to_string(), 3600)]
        );
    }

    #[tokio::test]
    async fn storage_url_signed_in_its_own_bucket() {
        let signer = RecordingSigner::default();
        let reference = classify("https://p.supabase.co/storage/v1/object/public/media/intro.mp4");
        let out = sign_reference(&signer, &reference, "videos", 60).await.unwrap();

        assert_eq!(out.url, "https://signed.test/media/intro.mp4?ttl=60");
        assert_eq!(out.expires_in, Some(60));
    }

    #[tokio::test]
    async fn external_bypasses_signer() {
        let signer = RecordingSigner::default();
        let out = sign_reference(&signer, &classify("https://vimeo.com/1"), "videos", 3600)
            .await
            .unwrap();

        assert_eq!(
            out,
            PlaybackUrl {
                url: "https://vimeo.com/1".into(),
                expires_in: None
            }
        );
        assert!(signer.calls.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn signer_failure_propagates() {
        let signer = RecordingSigner {
            fail: true,
            ..Default::default()
        };
        let err = sign_reference(&signer, &classify("a.mp4"), "videos", 60)
            .await
            .unwrap_err();
        assert_matches!(err, StorageError::ApiError { status: 404, .. });
    }

    #[test]
    fn serializes_camel_case_with_null_expiry() {
        let json = serde_json::to_value(PlaybackUrl {
            url: "https://x".into(),
            expires_in: None,
        })
        .unwrap();
        assert_eq!(json, serde_json::json!({"url": "https://x", "expiresIn": null}));
    }
}
