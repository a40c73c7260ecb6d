//! Route definitions for the `/video` resource.

use axum::routing::get;
use axum::Router;

use crate::handlers::video;
use crate::state::AppState;

/// Routes mounted at `/video`.
///
/// ```text
/// GET /             -> stream_video    (?topicId=[&url=], honours Range)
/// GET /signed-url   -> get_signed_url  (?topicId=)
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(video::stream_video))
        .route("/signed-url", get(video::get_signed_url))
}
