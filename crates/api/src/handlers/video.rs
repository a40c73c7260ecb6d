//! Handlers for the `/video` resource.
//!
//! Two ways to play a lesson video:
//!
//! - `GET /video/signed-url` returns a URL the browser fetches itself
//!   (signed for one hour when the video lives in object storage).
//! - `GET /video` proxies the bytes, forwarding `Range` so seeking works,
//!   and re-signs storage objects with a short TTL on every request.
//!
//! Nothing is cached between requests: every call re-resolves the lesson's
//! reference and mints a fresh signature.

use axum::body::Body;
use axum::extract::{Query, State};
use axum::http::header::{self, HeaderMap, HeaderValue};
use axum::http::StatusCode;
use axum::response::Response;
use axum::Json;
use futures::TryStreamExt;
use learnhub_core::delivery::resolve_reference;
use learnhub_core::error::CoreError;
use learnhub_core::types::DbId;
use learnhub_core::video_ref::{classify, VideoReference, DIRECT_URL_TTL_SECS, PROXY_URL_TTL_SECS};
use learnhub_storage::{sign_reference, PlaybackUrl};
use serde::Deserialize;

use crate::error::{AppError, AppResult};
use crate::middleware::auth::AuthUser;
use crate::state::AppState;

/// Content type used when the upstream does not send one.
const DEFAULT_CONTENT_TYPE: &str = "video/mp4";

// ---------------------------------------------------------------------------
// Query types
// ---------------------------------------------------------------------------

#[derive(Debug, Deserialize)]
pub struct SignedUrlParams {
    #[serde(rename = "topicId")]
    pub topic_id: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct StreamParams {
    #[serde(rename = "topicId")]
    pub topic_id: Option<String>,
    /// Explicit upstream reference; skips resolution when non-empty.
    pub url: Option<String>,
}

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

/// Parse a required `topicId` query value.
fn required_topic_id(raw: Option<&str>, missing_message: &str) -> AppResult<DbId> {
    let raw = raw
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .ok_or_else(|| AppError::BadRequest(missing_message.to_string()))?;

    raw.parse::<DbId>()
        .map_err(|_| AppError::BadRequest(format!("Invalid topicId '{raw}'")))
}

/// Turn a reference into the URL the proxy fetches.
///
/// Storage URLs whose re-sign fails fall back to the original URL (it may
/// still be public). Raw paths cannot be fetched without a signature, so a
/// failed sign is a bad request.
async fn proxy_upstream_url(
    state: &AppState,
    topic_id: DbId,
    reference: &str,
) -> AppResult<String> {
    let classified = classify(reference);
    let bucket = &state.config.storage.default_bucket;

    match &classified {
        VideoReference::External { url } => Ok(url.clone()),
        VideoReference::StorageUrl { .. } => {
            match sign_reference(state.signer.as_ref(), &classified, bucket, PROXY_URL_TTL_SECS)
                .await
            {
                Ok(signed) => Ok(signed.url),
                Err(err) => {
                    tracing::warn!(
                        %topic_id,
                        url = %reference,
                        error = %err,
                        "Failed to re-sign storage URL, using original",
                    );
                    Ok(reference.to_string())
                }
            }
        }
        VideoReference::StoragePath { path } => {
            sign_reference(state.signer.as_ref(), &classified, bucket, PROXY_URL_TTL_SECS)
                .await
                .map(|signed| signed.url)
                .map_err(|err| {
                    tracing::error!(%topic_id, path = %path, error = %err, "Failed to sign storage path");
                    AppError::BadRequest("Invalid video path or URL".into())
                })
        }
    }
}

/// Check that the lesson and its owning course exist.
///
/// The course's publication flag is read but not enforced.
async fn ensure_lesson_and_course(state: &AppState, topic_id: DbId) -> AppResult<()> {
    let lesson = state
        .catalog
        .find_lesson(topic_id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Topic",
            id: topic_id,
        }))?;

    let course = state
        .catalog
        .find_course(lesson.course_id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Course",
            id: lesson.course_id,
        }))?;

    // TODO: decide whether unpublished courses should be blocked here once
    // enrollment-based access rules exist.
    tracing::debug!(
        %topic_id,
        course_id = %course.id,
        is_published = course.is_published,
        "Course found for proxied video",
    );
    Ok(())
}

/// Copy a header from the upstream response if present.
fn mirror_header(
    builder: axum::http::response::Builder,
    upstream: &reqwest::header::HeaderMap,
    name: header::HeaderName,
) -> axum::http::response::Builder {
    match upstream.get(&name) {
        Some(value) => builder.header(name, value.clone()),
        None => builder,
    }
}

// ---------------------------------------------------------------------------
// Handlers
// ---------------------------------------------------------------------------

/// GET /api/video/signed-url?topicId=
///
/// Returns `{url, expiresIn}` for native `<video src>` playback. Storage
/// objects are signed for one hour; external URLs come back unchanged with
/// `expiresIn: null`.
pub async fn get_signed_url(
    State(state): State<AppState>,
    Query(params): Query<SignedUrlParams>,
    user: Option<AuthUser>,
) -> AppResult<Json<PlaybackUrl>> {
    let topic_id = required_topic_id(params.topic_id.as_deref(), "Missing topic ID")?;
    let user = user.ok_or_else(|| {
        AppError::Core(CoreError::Unauthorized("Not authenticated".into()))
    })?;

    let resolved = resolve_reference(state.catalog.as_ref(), topic_id).await?;
    let reference = classify(&resolved.reference);

    let playback = sign_reference(
        state.signer.as_ref(),
        &reference,
        &state.config.storage.default_bucket,
        DIRECT_URL_TTL_SECS,
    )
    .await
    .inspect_err(|err| {
        tracing::error!(
            %topic_id,
            reference = %resolved.reference,
            error = %err,
            "Failed to sign video reference",
        );
    })?;

    tracing::info!(
        %topic_id,
        user_id = %user.user_id,
        kind = reference.kind(),
        source = ?resolved.source,
        "Issued playback URL",
    );

    Ok(Json(playback))
}

/// GET /api/video?topicId=[&url=]
///
/// Streams the lesson video from its upstream, forwarding the client's
/// `Range` header verbatim. Only upstream 200 and 206 are relayed; any other
/// status (including 404) becomes a 500. Once headers are sent, an upstream
/// error mid-body aborts the client connection.
pub async fn stream_video(
    State(state): State<AppState>,
    Query(params): Query<StreamParams>,
    headers: HeaderMap,
) -> AppResult<Response> {
    let topic_id = required_topic_id(params.topic_id.as_deref(), "Missing topicId parameter")?;

    let reference = match params.url.filter(|u| !u.is_empty()) {
        Some(url) => url,
        None => {
            let resolved = resolve_reference(state.catalog.as_ref(), topic_id).await?;
            tracing::debug!(%topic_id, reference = %resolved.reference, "Resolved video reference");
            resolved.reference
        }
    };

    ensure_lesson_and_course(&state, topic_id).await?;

    let upstream_url = proxy_upstream_url(&state, topic_id, &reference).await?;

    // --- Upstream request ---
    let mut request = state.http.get(&upstream_url);
    if let Some(range) = headers.get(header::RANGE) {
        tracing::debug!(%topic_id, range = ?range, "Forwarding Range header");
        request = request.header(header::RANGE, range.clone());
    }
    if let Some(agent) = headers.get(header::USER_AGENT) {
        request = request.header(header::USER_AGENT, agent.clone());
    }

    let upstream = request.send().await.map_err(|err| {
        AppError::UpstreamFetch(format!("request to {upstream_url} failed: {err}"))
    })?;

    let status = upstream.status();
    if status != StatusCode::OK && status != StatusCode::PARTIAL_CONTENT {
        return Err(AppError::UpstreamFetch(format!(
            "{upstream_url} returned {status}"
        )));
    }

    // --- Response headers ---
    let upstream_headers = upstream.headers().clone();
    let content_type = upstream_headers
        .get(header::CONTENT_TYPE)
        .cloned()
        .unwrap_or_else(|| HeaderValue::from_static(DEFAULT_CONTENT_TYPE));

    tracing::info!(
        %topic_id,
        status = status.as_u16(),
        content_type = ?content_type,
        content_range = ?upstream_headers.get(header::CONTENT_RANGE),
        "Streaming upstream video",
    );

    let mut builder = Response::builder()
        .status(status)
        .header(header::CONTENT_TYPE, content_type)
        .header(header::ACCEPT_RANGES, "bytes")
        .header(header::CACHE_CONTROL, "no-cache, no-store, must-revalidate")
        .header(header::PRAGMA, "no-cache")
        .header(header::EXPIRES, "0")
        .header(header::CONTENT_DISPOSITION, "inline")
        .header(header::X_CONTENT_TYPE_OPTIONS, "nosniff");
    builder = mirror_header(builder, &upstream_headers, header::CONTENT_LENGTH);
    builder = mirror_header(builder, &upstream_headers, header::CONTENT_RANGE);

    // --- Body ---
    // Pulled chunk by chunk as the client drains; dropping the response
    // (client disconnect) drops the upstream stream with it.
    let stream = upstream.bytes_stream().inspect_err(move |err| {
        tracing::error!(%topic_id, error = %err, "Upstream stream failed mid-body");
    });

    builder
        .body(Body::from_stream(stream))
        .map_err(|e| AppError::InternalError(e.to_string()))
}
