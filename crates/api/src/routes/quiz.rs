use axum::routing::post;
use axum::Router;

use crate::handlers::quiz;
use crate::state::AppState;

/// Routes mounted at `/quiz`.
pub fn router() -> Router<AppState> {
    Router::new().route("/submit", post(quiz::submit_quiz))
}
