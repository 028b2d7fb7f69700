//! HTTP API handlers.

use crate::db::Database;

/// Application state shared with handlers.
///
/// Carries the startup database connection handle. The handlers below never
/// read it; it rides along so anything holding the router's state can reach
/// the connection and its health accessor.
#[derive(Debug, Clone)]
pub struct AppState {
    /// Database connection handle opened at startup.
    pub db: Database,
}

impl AppState {
    /// Create app state around the startup connection handle.
    pub fn new(db: Database) -> Self {
        Self { db }
    }
}

/// Root handler.
pub async fn root() -> &'static str {
    "Hello World!"
}

/// Test endpoint handler.
pub async fn test() -> &'static str {
    "Hello Test!"
}
