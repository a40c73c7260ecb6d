/// Primary keys issued by the hosted database are UUIDs, as are caller
/// identities forwarded by the auth provider.
pub type DbId = uuid::Uuid;

/// All timestamps are UTC.
pub type Timestamp = chrono::DateTime<chrono::Utc>;
