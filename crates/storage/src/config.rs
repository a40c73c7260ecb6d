use learnhub_core::video_ref::DEFAULT_VIDEO_BUCKET;

/// Object-storage configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct StorageConfig {
    /// Project base URL, e.g. `https://abcd.supabase.co` (no trailing slash).
    pub base_url: String,
    /// Service-role key; bypasses row-level security for signing.
    pub service_key: String,
    /// Bucket that raw object paths are resolved against.
    pub default_bucket: String,
}

impl StorageConfig {
    /// Load storage configuration from environment variables.
    ///
    /// | Env Var                     | Required | Default  |
    /// |-----------------------------|----------|----------|
    /// | `SUPABASE_URL`              | **yes**  | --       |
    /// | `SUPABASE_SERVICE_ROLE_KEY` | **yes**  | --       |
    /// | `VIDEO_DEFAULT_BUCKET`      | no       | `videos` |
    pub fn from_env() -> Self {
        let base_url = std::env::var("SUPABASE_URL")
            .expect("SUPABASE_URL must be set")
            .trim_end_matches('/')
            .to_string();

        let service_key = std::env::var("SUPABASE_SERVICE_ROLE_KEY")
            .expect("SUPABASE_SERVICE_ROLE_KEY must be set");

        let default_bucket = std::env::var("VIDEO_DEFAULT_BUCKET")
            .ok()
            .map(|b| b.trim().to_string())
            .filter(|b| !b.is_empty())
            .unwrap_or_else(|| DEFAULT_VIDEO_BUCKET.to_string());

        Self {
            base_url,
            service_key,
            default_bucket,
        }
    }
}
