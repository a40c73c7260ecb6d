use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use learnhub_core::error::CoreError;
use learnhub_storage::StorageError;
use serde_json::json;

/// Application-level error type for HTTP handlers.
///
/// Wraps [`CoreError`] for domain errors and adds HTTP-specific variants.
/// Every variant renders as `{"error": <message>, "code": <CODE>}`.
/// Errors raised after a streamed body has started cannot be reported this
/// way; the connection is simply closed.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error(transparent)]
    Core(#[from] CoreError),

    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// Malformed or missing request input; the message is returned as-is.
    #[error("Bad request: {0}")]
    BadRequest(String),

    /// The storage backend refused or failed to mint a signed URL.
    #[error("Signing failed: {0}")]
    Signing(#[from] StorageError),

    /// The upstream video fetch failed (network error or a status other
    /// than 200/206). The detail is logged, never returned.
    #[error("Upstream fetch failed: {0}")]
    UpstreamFetch(String),

    #[error("Internal error: {0}")]
    InternalError(String),
}

/// Convenience type alias for handler return values.
pub type AppResult<T> = Result<T, AppError>;

type ErrorParts = (StatusCode, &'static str, String);

/// Sanitized 500 used wherever the real cause must stay in the logs.
fn internal() -> ErrorParts {
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        "INTERNAL_ERROR",
        "Internal server error".to_string(),
    )
}

impl AppError {
    /// Status, machine-readable code and client-facing message.
    fn parts(&self) -> ErrorParts {
        match self {
            AppError::Core(CoreError::NotFound { entity, id }) => {
                tracing::debug!(entity, %id, "Entity not found");
                (
                    StatusCode::NOT_FOUND,
                    "NOT_FOUND",
                    format!("{entity} not found"),
                )
            }
            AppError::Core(CoreError::Validation(msg)) => {
                (StatusCode::BAD_REQUEST, "VALIDATION_ERROR", msg.clone())
            }
            AppError::Core(CoreError::Conflict(msg)) => {
                (StatusCode::CONFLICT, "CONFLICT", msg.clone())
            }
            AppError::Core(CoreError::Unauthorized(msg)) => {
                (StatusCode::UNAUTHORIZED, "UNAUTHORIZED", msg.clone())
            }
            AppError::Core(CoreError::Internal(msg)) => {
                tracing::error!(error = %msg, "Catalog failure");
                internal()
            }
            AppError::Database(err) => classify_sqlx_error(err),
            AppError::BadRequest(msg) => (StatusCode::BAD_REQUEST, "BAD_REQUEST", msg.clone()),
            AppError::Signing(err) => {
                tracing::error!(error = %err, "Failed to create signed URL");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "SIGNING_FAILED",
                    "Failed to generate video URL".to_string(),
                )
            }
            AppError::UpstreamFetch(detail) => {
                tracing::error!(error = %detail, "Upstream video fetch failed");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "UPSTREAM_FAILURE",
                    "Failed to fetch video".to_string(),
                )
            }
            AppError::InternalError(msg) => {
                tracing::error!(error = %msg, "Internal error");
                internal()
            }
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, code, message) = self.parts();
        (status, axum::Json(json!({ "error": message, "code": code }))).into_response()
    }
}

/// Map a sqlx error onto the HTTP surface.
///
/// - `RowNotFound` -> 404.
/// - Unique violations on a `uq_*` constraint -> 409 (duplicate enrollment).
/// - Foreign-key violations -> 400 (e.g. a lesson for an unknown course).
/// - Everything else -> sanitized 500.
fn classify_sqlx_error(err: &sqlx::Error) -> ErrorParts {
    let sqlx::Error::Database(db_err) = err else {
        if matches!(err, sqlx::Error::RowNotFound) {
            return (
                StatusCode::NOT_FOUND,
                "NOT_FOUND",
                "Resource not found".to_string(),
            );
        }
        tracing::error!(error = %err, "Database error");
        return internal();
    };

    let constraint = db_err.constraint().unwrap_or_default();
    match db_err.code().as_deref() {
        Some("23505") if constraint.starts_with("uq_") => {
            let message = if constraint == "uq_enrollments_user_course" {
                "Already enrolled in this course".to_string()
            } else {
                format!("Duplicate value violates unique constraint: {constraint}")
            };
            (StatusCode::CONFLICT, "CONFLICT", message)
        }
        Some("23503") => (
            StatusCode::BAD_REQUEST,
            "BAD_REQUEST",
            "Referenced record does not exist".to_string(),
        ),
        _ => {
            tracing::error!(error = %db_err, constraint, "Database error");
            internal()
        }
    }
}
