//! Application configuration loaded from environment variables.

use serde::Deserialize;

/// Application configuration loaded from environment variables.
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    // === Server Configuration ===
    /// HTTP listen port.
    #[serde(default = "default_port")]
    pub port: u16,

    // === Database Credentials ===
    /// Database host.
    #[serde(default = "default_db_host")]
    pub db_host: String,

    /// Database user.
    #[serde(default = "default_user")]
    pub user: String,

    /// Database password.
    #[serde(default = "default_password")]
    pub password: String,

    /// Database name.
    #[serde(default = "default_database")]
    pub database: String,
}

fn default_port() -> u16 {
    80
}

fn default_db_host() -> String {
    "localhost".to_string()
}

fn default_user() -> String {
    "myuser".to_string()
}

fn default_password() -> String {
    "mypassword".to_string()
}

fn default_database() -> String {
    "mydatabase".to_string()
}

impl Config {
    /// Load configuration from environment, reading .env file first.
    pub fn load() -> crate::Result<Self> {
        dotenvy::dotenv().ok();
        Ok(envy::from_env()?)
    }
}
