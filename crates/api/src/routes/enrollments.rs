use axum::routing::get;
use axum::Router;

use crate::handlers::enrollments;
use crate::state::AppState;

/// Routes mounted at `/enrollments`.
///
/// ```text
/// GET  /   -> list_enrollments
/// POST /   -> create_enrollment
/// ```
pub fn router() -> Router<AppState> {
    Router::new().route(
        "/",
        get(enrollments::list_enrollments).post(enrollments::create_enrollment),
    )
}
