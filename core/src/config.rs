//! Connection settings for `MongoStore`.

use std::time::Duration;

pub const DEFAULT_URI: &str = "mongodb://localhost:27017/go_todos";
pub const DEFAULT_DATABASE: &str = "go_todos";
pub const DEFAULT_COLLECTION: &str = "todos";
pub const DEFAULT_CONNECT_TIMEOUT: Duration = Duration::from_secs(30);

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoreConfig {
    pub uri: String,
    pub database: String,
    pub collection: String,
    /// Bound on establishing the initial connection. Startup fails once it
    /// elapses; there is no retry.
    pub connect_timeout: Duration,
    /// Optional deadline applied to every store operation. `None` leaves
    /// operations unbounded.
    pub op_timeout: Option<Duration>,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            uri: DEFAULT_URI.to_string(),
            database: DEFAULT_DATABASE.to_string(),
            collection: DEFAULT_COLLECTION.to_string(),
            connect_timeout: DEFAULT_CONNECT_TIMEOUT,
            op_timeout: None,
        }
    }
}
