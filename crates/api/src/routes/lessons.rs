//! Route definitions for the `/lessons` resource.

use axum::routing::{get, post};
use axum::Router;

use crate::handlers::lessons;
use crate::state::AppState;

/// Routes mounted at `/lessons`.
///
/// ```text
/// POST /              -> create_lesson
/// GET  /course/{id}   -> list_course_lessons
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", post(lessons::create_lesson))
        .route("/course/{id}", get(lessons::list_course_lessons))
}
