use std::sync::Arc;

use learnhub_core::delivery::VideoCatalog;
use learnhub_storage::ObjectSigner;

use crate::config::ServerConfig;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// This is cheaply cloneable (inner data is behind `Arc` or is already
/// `Clone`). Every external client is constructed by the entry point and
/// injected here; nothing is global.
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool.
    pub pool: learnhub_db::DbPool,
    /// Server configuration.
    pub config: Arc<ServerConfig>,
    /// Lesson / video asset / course lookups for the delivery path.
    pub catalog: Arc<dyn VideoCatalog>,
    /// Mints signed URLs for private storage objects.
    pub signer: Arc<dyn ObjectSigner>,
    /// Client used for upstream video fetches.
    pub http: reqwest::Client,
}
