use crate::types::DbId;

/// Domain errors shared by the catalog, the resolver and quiz scoring.
///
/// Transport layers map these onto their own status codes; the `entity`
/// name of [`CoreError::NotFound`] is user-facing ("Video", "Topic",
/// "Course").
#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    #[error("{entity} not found (id {id})")]
    NotFound { entity: &'static str, id: DbId },

    #[error("Invalid input: {0}")]
    Validation(String),

    #[error("Conflict: {0}")]
    Conflict(String),

    /// Missing or unusable caller identity.
    #[error("Unauthenticated: {0}")]
    Unauthorized(String),

    /// A backing store failed; the message is for logs only.
    #[error("Internal error: {0}")]
    Internal(String),
}
