//! Runtime configuration.

use serde::{Deserialize, Serialize};

/// Server configuration, sourced from environment variables.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    /// HTTP server port for REST endpoints (/health, /api/*).
    #[serde(default = "default_http_port")]
    pub http_port: u16,
    /// Bind address.
    #[serde(default = "default_bind_address")]
    pub bind_address: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            http_port: default_http_port(),
            bind_address: default_bind_address(),
        }
    }
}

impl ServerConfig {
    /// Read configuration from `HTTP_PORT` and `BIND_ADDRESS`, falling back
    /// to defaults for missing or unparseable values.
    #[must_use]
    pub fn from_env() -> Self {
        let http_port = std::env::var("HTTP_PORT")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or_else(default_http_port);

        let bind_address = std::env::var("BIND_ADDRESS").unwrap_or_else(|_| default_bind_address());

        Self {
            http_port,
            bind_address,
        }
    }
}

const fn default_http_port() -> u16 {
    3000
}

fn default_bind_address() -> String {
    "0.0.0.0".to_string()
}
