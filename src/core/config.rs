//! Settings management for the MCP server.
//!
//! This module provides the typed settings record that is populated once at
//! process startup from environment variables, with an optional `.env` file
//! as a fallback source.

use serde::{Deserialize, Serialize};

use super::error::{Error, Result};

/// Application settings for the MCP server.
///
/// Built once in `main` and passed into the server bootstrap; never mutated
/// afterwards. Each field is read from the environment variable of the same
/// (upper-cased) name, falling back to values from a `.env` file in the
/// working directory, then to the defaults below.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    /// Host address the HTTP transport binds to.
    pub host: String,

    /// Port the HTTP transport listens on.
    pub port: u16,

    /// Debug mode. Lowers the log level to debug.
    pub debug: bool,

    /// Path prefix for the REST API routes.
    pub api_prefix: String,

    /// Log level filter (e.g., "INFO", "DEBUG").
    pub log_level: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 8000,
            debug: false,
            api_prefix: "/api/v1".to_string(),
            log_level: "INFO".to_string(),
        }
    }
}

impl Settings {
    /// Load settings from the environment.
    ///
    /// Reads `HOST`, `PORT`, `DEBUG`, `API_PREFIX`, and `LOG_LEVEL`. A `.env`
    /// file in the working directory supplies values for variables that are
    /// not already set; the process environment always wins because dotenvy
    /// never overrides existing variables.
    ///
    /// Returns a configuration error if a value fails to parse (`PORT` must
    /// be an integer, `DEBUG` a boolean). No record is produced in that case.
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok();

        Self::from_vars()
    }

    /// Build settings from whatever is currently in the process environment.
    pub(crate) fn from_vars() -> Result<Self> {
        let mut settings = Self::default();

        if let Ok(host) = std::env::var("HOST") {
            settings.host = host;
        }

        if let Ok(port) = std::env::var("PORT") {
            settings.port = port
                .parse()
                .map_err(|_| Error::config(format!("PORT must be an integer, got {port:?}")))?;
        }

        if let Ok(debug) = std::env::var("DEBUG") {
            settings.debug = parse_bool(&debug)
                .ok_or_else(|| Error::config(format!("DEBUG must be a boolean, got {debug:?}")))?;
        }

        if let Ok(api_prefix) = std::env::var("API_PREFIX") {
            settings.api_prefix = api_prefix;
        }

        if let Ok(log_level) = std::env::var("LOG_LEVEL") {
            settings.log_level = log_level;
        }

        Ok(settings)
    }
}

/// Parse a boolean environment value. Accepts true/false/1/0, case-insensitive.
fn parse_bool(value: &str) -> Option<bool> {
    match value.to_lowercase().as_str() {
        "true" | "1" => Some(true),
        "false" | "0" => Some(false),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use std::sync::Mutex;

    // Mutex to ensure env var tests run serially
    static ENV_TEST_LOCK: Mutex<()> = Mutex::new(());

    const VARS: &[&str] = &["HOST", "PORT", "DEBUG", "API_PREFIX", "LOG_LEVEL"];

    fn clear_vars() {
        for var in VARS {
            unsafe {
                std::env::remove_var(var);
            }
        }
    }

    #[test]
    fn test_defaults_when_nothing_is_set() {
        let _lock = ENV_TEST_LOCK.lock().unwrap();
        clear_vars();

        let settings = Settings::from_vars().unwrap();
        assert_eq!(settings.host, "127.0.0.1");
        assert_eq!(settings.port, 8000);
        assert!(!settings.debug);
        assert_eq!(settings.api_prefix, "/api/v1");
        assert_eq!(settings.log_level, "INFO");
    }

    #[test]
    fn test_env_overrides_defaults() {
        let _lock = ENV_TEST_LOCK.lock().unwrap();
        clear_vars();
        unsafe {
            std::env::set_var("HOST", "0.0.0.0");
            std::env::set_var("PORT", "9100");
            std::env::set_var("DEBUG", "true");
            std::env::set_var("API_PREFIX", "/api/v2");
            std::env::set_var("LOG_LEVEL", "DEBUG");
        }

        let settings = Settings::from_vars().unwrap();
        assert_eq!(settings.host, "0.0.0.0");
        assert_eq!(settings.port, 9100);
        assert!(settings.debug);
        assert_eq!(settings.api_prefix, "/api/v2");
        assert_eq!(settings.log_level, "DEBUG");

        clear_vars();
    }

    #[test]
    fn test_invalid_port_fails_construction() {
        let _lock = ENV_TEST_LOCK.lock().unwrap();
        clear_vars();
        unsafe {
            std::env::set_var("PORT", "not-a-port");
        }

        let result = Settings::from_vars();
        assert!(matches!(result, Err(Error::Config(_))));

        clear_vars();
    }

    #[test]
    fn test_invalid_debug_fails_construction() {
        let _lock = ENV_TEST_LOCK.lock().unwrap();
        clear_vars();
        unsafe {
            std::env::set_var("DEBUG", "maybe");
        }

        let result = Settings::from_vars();
        assert!(matches!(result, Err(Error::Config(_))));

        clear_vars();
    }

    #[test]
    fn test_env_file_fills_unset_vars_but_env_wins() {
        let _lock = ENV_TEST_LOCK.lock().unwrap();
        clear_vars();

        let dir = tempfile::tempdir().unwrap();
        let env_path = dir.path().join(".env");
        let mut file = std::fs::File::create(&env_path).unwrap();
        writeln!(file, "PORT=9000").unwrap();
        writeln!(file, "LOG_LEVEL=WARN").unwrap();

        // PORT is already set in the environment, so only LOG_LEVEL should
        // come from the file.
        unsafe {
            std::env::set_var("PORT", "8100");
        }
        dotenvy::from_path(&env_path).unwrap();

        let settings = Settings::from_vars().unwrap();
        assert_eq!(settings.port, 8100);
        assert_eq!(settings.log_level, "WARN");

        clear_vars();
    }

    #[test]
    fn test_parse_bool() {
        assert_eq!(parse_bool("true"), Some(true));
        assert_eq!(parse_bool("TRUE"), Some(true));
        assert_eq!(parse_bool("1"), Some(true));
        assert_eq!(parse_bool("false"), Some(false));
        assert_eq!(parse_bool("0"), Some(false));
        assert_eq!(parse_bool("yes"), None);
    }
}
