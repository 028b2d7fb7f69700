//! Startup database connection handle.
//!
//! The connection is opened once when the process starts and is never
//! queried on the request path. The handle tracks the outcome of that
//! single handshake and hands the raw connection to external consumers
//! on request.

use std::sync::Arc;

use sqlx::mysql::{MySqlConnectOptions, MySqlConnection};
use sqlx::Connection;
use tokio::sync::{Mutex, RwLock};
use tracing::{error, info};

use crate::config::Config;

/// Lifecycle of the startup connection attempt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConnectionState {
    /// Attempt not yet resolved.
    Pending,
    /// Handshake succeeded.
    Connected,
    /// Handshake failed with the given reason.
    Failed(String),
}

/// Handle to the database connection opened at startup.
///
/// Cheap to clone; all clones observe the same state.
#[derive(Debug, Clone)]
pub struct Database {
    state: Arc<RwLock<ConnectionState>>,
    conn: Arc<Mutex<Option<MySqlConnection>>>,
}

impl Database {
    /// Create a handle with no connection attempt made yet.
    pub fn new() -> Self {
        Self {
            state: Arc::new(RwLock::new(ConnectionState::Pending)),
            conn: Arc::new(Mutex::new(None)),
        }
    }

    /// Attempt the startup handshake described by `config`.
    ///
    /// The outcome lands in the log and in [`ConnectionState`]; it is never
    /// escalated. The HTTP server keeps serving either way, and there is no
    /// retry.
    pub async fn connect(&self, config: &Config) {
        match establish(config).await {
            Ok(conn) => {
                *self.conn.lock().await = Some(conn);
                *self.state.write().await = ConnectionState::Connected;
                info!("Connected to MySQL database");
            }
            Err(e) => {
                error!("Error connecting to MySQL: {}", e);
                *self.state.write().await = ConnectionState::Failed(e.to_string());
            }
        }
    }

    /// Current state of the startup connection attempt.
    pub async fn state(&self) -> ConnectionState {
        self.state.read().await.clone()
    }

    /// Whether the handshake has succeeded.
    pub async fn is_connected(&self) -> bool {
        matches!(*self.state.read().await, ConnectionState::Connected)
    }

    /// Take the raw connection out of the handle, if one was established.
    ///
    /// Request handlers never touch this; it exists for external consumers
    /// such as a test harness.
    pub async fn take_connection(&self) -> Option<MySqlConnection> {
        self.conn.lock().await.take()
    }
}

impl Default for Database {
    fn default() -> Self {
        Self::new()
    }
}

/// Open a single MySQL connection with the configured credentials.
async fn establish(config: &Config) -> crate::Result<MySqlConnection> {
    let options = MySqlConnectOptions::new()
        .host(&config.db_host)
        .username(&config.user)
        .password(&config.password)
        .database(&config.database);

    Ok(MySqlConnection::connect_with(&options).await?)
}
