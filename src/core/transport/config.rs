//! Transport configuration types.

use serde::{Deserialize, Serialize};

use crate::core::config::Settings;

/// Transport configuration options.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum TransportConfig {
    /// Standard input/output transport (default for MCP).
    Stdio,

    /// HTTP transport: JSON-RPC over POST, SSE handshake, REST tool routes.
    Http(HttpConfig),
}

/// HTTP transport configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HttpConfig {
    /// Host address to bind to.
    pub host: String,

    /// Port number to listen on.
    pub port: u16,

    /// Path prefix for the REST tool routes.
    pub api_prefix: String,

    /// Path for the JSON-RPC endpoint.
    #[serde(default = "default_rpc_path")]
    pub rpc_path: String,

    /// Enable CORS for browser clients.
    #[serde(default = "default_cors")]
    pub enable_cors: bool,
}

fn default_rpc_path() -> String {
    "/mcp".to_string()
}

fn default_cors() -> bool {
    true
}

impl HttpConfig {
    /// Build an HTTP config bound to the settings' host and port.
    pub fn from_settings(settings: &Settings) -> Self {
        Self {
            host: settings.host.clone(),
            port: settings.port,
            api_prefix: settings.api_prefix.clone(),
            rpc_path: default_rpc_path(),
            enable_cors: default_cors(),
        }
    }
}

impl TransportConfig {
    /// Load the transport config from environment variables.
    ///
    /// `TRANSPORT` selects the transport (`stdio` by default; `http` or `sse`
    /// select the HTTP transport bound to the settings' host and port).
    /// `RPC_PATH` and `HTTP_CORS` tune the HTTP transport.
    pub fn from_env(settings: &Settings) -> Self {
        let transport = std::env::var("TRANSPORT").unwrap_or_default().to_lowercase();

        match transport.as_str() {
            "http" | "sse" => {
                let mut config = HttpConfig::from_settings(settings);
                if let Ok(rpc_path) = std::env::var("RPC_PATH") {
                    config.rpc_path = rpc_path;
                }
                if let Ok(cors) = std::env::var("HTTP_CORS") {
                    config.enable_cors = cors.to_lowercase() != "false" && cors != "0";
                }
                Self::Http(config)
            }
            _ => Self::Stdio,
        }
    }

    /// Get a description of this transport for logging.
    pub fn description(&self) -> String {
        match self {
            Self::Stdio => "STDIO (standard MCP mode)".to_string(),
            Self::Http(cfg) => format!("HTTP on {}:{}{}", cfg.host, cfg.port, cfg.rpc_path),
        }
    }

    /// Check if this transport is the standard STDIO mode.
    pub fn is_stdio(&self) -> bool {
        matches!(self, Self::Stdio)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;

    // Mutex to ensure env var tests run serially
    static ENV_TEST_LOCK: Mutex<()> = Mutex::new(());

    fn clear_vars() {
        for var in ["TRANSPORT", "RPC_PATH", "HTTP_CORS"] {
            unsafe {
                std::env::remove_var(var);
            }
        }
    }

    #[test]
    fn test_default_transport_is_stdio() {
        let _lock = ENV_TEST_LOCK.lock().unwrap();
        clear_vars();

        let config = TransportConfig::from_env(&Settings::default());
        assert!(config.is_stdio());
    }

    #[test]
    fn test_http_transport_binds_settings() {
        let _lock = ENV_TEST_LOCK.lock().unwrap();
        clear_vars();
        unsafe {
            std::env::set_var("TRANSPORT", "http");
        }

        let settings = Settings {
            host: "0.0.0.0".to_string(),
            port: 9000,
            ..Settings::default()
        };

        match TransportConfig::from_env(&settings) {
            TransportConfig::Http(cfg) => {
                assert_eq!(cfg.host, "0.0.0.0");
                assert_eq!(cfg.port, 9000);
                assert_eq!(cfg.api_prefix, "/api/v1");
                assert_eq!(cfg.rpc_path, "/mcp");
                assert!(cfg.enable_cors);
            }
            other => panic!("Expected HTTP transport, got {}", other.description()),
        }

        clear_vars();
    }

    #[test]
    fn test_sse_selects_http_transport() {
        let _lock = ENV_TEST_LOCK.lock().unwrap();
        clear_vars();
        unsafe {
            std::env::set_var("TRANSPORT", "sse");
            std::env::set_var("HTTP_CORS", "false");
        }

        match TransportConfig::from_env(&Settings::default()) {
            TransportConfig::Http(cfg) => assert!(!cfg.enable_cors),
            other => panic!("Expected HTTP transport, got {}", other.description()),
        }

        clear_vars();
    }
}
