pub mod enrollments;
pub mod health;
pub mod lessons;
pub mod quiz;
pub mod video;

use axum::routing::post;
use axum::Router;

use crate::handlers;
use crate::state::AppState;

/// Build the `/api` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /video                          stream (GET, Range-aware proxy)
/// /video/signed-url               direct playback URL (GET, requires identity)
///
/// /lessons                        create or replace (POST)
/// /lessons/course/{id}            list by course (GET)
/// /videos                         create lesson + video asset (POST)
///
/// /enrollments                    list, enroll (requires identity)
///
/// /quiz/submit                    score and store an attempt (requires identity)
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        // Video delivery.
        .nest("/video", video::router())
        // Lesson authoring.
        .nest("/lessons", lessons::router())
        .route("/videos", post(handlers::lessons::create_video_lesson))
        // Learner progress.
        .nest("/enrollments", enrollments::router())
        .nest("/quiz", quiz::router())
}
