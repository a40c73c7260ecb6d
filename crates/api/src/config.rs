use learnhub_storage::StorageConfig;

/// Server configuration loaded from environment variables.
///
/// All fields except the storage credentials have sensible defaults suitable
/// for local development. In production, override via environment variables.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Bind address (default: `0.0.0.0`).
    pub host: String,
    /// Bind port (default: `3000`).
    pub port: u16,
    /// Allowed CORS origins, parsed from comma-separated `CORS_ORIGINS` env var.
    pub cors_origins: Vec<String>,
    /// Time allowed until response headers are produced, in seconds
    /// (default: `30`). Streamed video bodies are not bounded by it.
    pub request_timeout_secs: u64,
    /// Graceful shutdown timeout in seconds (default: `30`).
    pub shutdown_timeout_secs: u64,
    /// Connect timeout for upstream video fetches in seconds (default: `10`).
    pub upstream_connect_timeout_secs: u64,
    /// Object-storage project and default video bucket.
    pub storage: StorageConfig,
}

impl ServerConfig {
    /// Load configuration from environment variables with defaults.
    ///
    /// | Env Var                         | Default                    |
    /// |---------------------------------|----------------------------|
    /// | `HOST`                          | `0.0.0.0`                  |
    /// | `PORT`                          | `3000`                     |
    /// | `CORS_ORIGINS`                  | `http://localhost:3000`    |
    /// | `REQUEST_TIMEOUT_SECS`          | `30`                       |
    /// | `SHUTDOWN_TIMEOUT_SECS`         | `30`                       |
    /// | `UPSTREAM_CONNECT_TIMEOUT_SECS` | `10`                       |
    ///
    /// Storage settings are documented on [`StorageConfig::from_env`].
    pub fn from_env() -> Self {
        let host = std::env::var("HOST").unwrap_or_else(|_| "0.0.0.0".into());

        let port: u16 = std::env::var("PORT")
            .unwrap_or_else(|_| "3000".into())
            .parse()
            .expect("PORT must be a valid u16");

        let cors_origins: Vec<String> = std::env::var("CORS_ORIGINS")
            .unwrap_or_else(|_| "http://localhost:3000".into())
            .split(',')
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .collect();

        let request_timeout_secs = env_u64("REQUEST_TIMEOUT_SECS", 30);
        let shutdown_timeout_secs = env_u64("SHUTDOWN_TIMEOUT_SECS", 30);
        let upstream_connect_timeout_secs = env_u64("UPSTREAM_CONNECT_TIMEOUT_SECS", 10);

        Self {
            host,
            port,
            cors_origins,
            request_timeout_secs,
            shutdown_timeout_secs,
            upstream_connect_timeout_secs,
            storage: StorageConfig::from_env(),
        }
    }
}

fn env_u64(name: &str, default: u64) -> u64 {
    match std::env::var(name) {
        Ok(raw) => raw
            .parse()
            .unwrap_or_else(|_| panic!("{name} must be a valid u64")),
        Err(_) => default,
    }
}
