use std::future::IntoFuture;
use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use learnhub_api::config::ServerConfig;
use learnhub_api::router::build_app_router;
use learnhub_api::state::AppState;
use learnhub_db::PgVideoCatalog;
use learnhub_storage::SupabaseStorage;

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();

    // --- Tracing ---
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
                "learnhub_api=debug,learnhub_storage=debug,tower_http=debug".into()
            }),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // --- Configuration ---
    let config = ServerConfig::from_env();
    tracing::info!(
        host = %config.host,
        port = %config.port,
        storage = %config.storage.base_url,
        bucket = %config.storage.default_bucket,
        "Loaded server configuration",
    );

    // --- Database ---
    let database_url = std::env::var("DATABASE_URL").expect("DATABASE_URL must be set");

    let pool = learnhub_db::create_pool(&database_url)
        .await
        .expect("Failed to connect to database");
    tracing::info!("Database connection pool created");

    learnhub_db::health_check(&pool)
        .await
        .expect("Database health check failed");
    tracing::info!("Database health check passed");

    learnhub_db::run_migrations(&pool)
        .await
        .expect("Failed to run database migrations");
    tracing::info!("Database migrations applied");

    // --- Outbound HTTP ---
    // One client for signing calls and upstream video fetches. No overall
    // timeout: proxied bodies stream for as long as the player reads.
    let http = reqwest::Client::builder()
        .connect_timeout(Duration::from_secs(config.upstream_connect_timeout_secs))
        .build()
        .expect("Failed to build HTTP client");

    let signer = Arc::new(SupabaseStorage::with_client(http.clone(), &config.storage));
    let catalog = Arc::new(PgVideoCatalog::new(pool.clone()));

    // --- App state ---
    let state = AppState {
        pool,
        config: Arc::new(config.clone()),
        catalog,
        signer,
        http,
    };

    let app = build_app_router(state, &config);

    // --- Start server ---
    let addr = SocketAddr::new(
        config.host.parse().expect("Invalid HOST address"),
        config.port,
    );
    tracing::info!(%addr, "Starting server");

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .expect("Failed to bind to address");

    let server = axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .into_future();

    // In-flight streams can outlive the signal; bound how long we wait.
    let drain = Duration::from_secs(config.shutdown_timeout_secs);
    tokio::select! {
        result = server => result.expect("Server error"),
        () = async {
            shutdown_signal().await;
            tokio::time::sleep(drain).await;
        } => {
            tracing::warn!(timeout_secs = drain.as_secs(), "Shutdown timeout elapsed, dropping open connections");
        }
    }

    tracing::info!("Graceful shutdown complete");
}

/// Wait for a termination signal to initiate graceful shutdown.
///
/// Handles both SIGINT (Ctrl-C) and SIGTERM (on Unix).
async fn shutdown_signal() {
    let ctrl_c = async {
        tokio::signal::ctrl_c()
            .await
            .expect("Failed to install Ctrl-C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
            .expect("Failed to install SIGTERM handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {
            tracing::info!("Received SIGINT (Ctrl-C), starting graceful shutdown");
        }
        () = terminate => {
            tracing::info!("Received SIGTERM, starting graceful shutdown");
        }
    }
}
