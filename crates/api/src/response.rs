//! Shared response envelope types for API handlers.
//!
//! Only enrollment listing uses the `{ "data": ... }` envelope, and
//! `POST /api/videos` returns `{ "message", "data" }`. Every other endpoint
//! returns its payload flat; the video endpoints (`{url, expiresIn}`) are
//! consumed directly by players.

use serde::Serialize;

/// Standard `{ "data": T }` response envelope.
#[derive(Debug, Serialize)]
pub struct DataResponse<T: Serialize> {
    pub data: T,
}
