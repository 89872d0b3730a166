//! Application configuration
//!
//! Centralized configuration management with environment variable support
//! and sensible defaults. The API base URL is configuration, never logic.

use std::env;

/// Default hosted backend, used when no environment override is present
const DEFAULT_BASE_URL: &str = "https://8xhpiqce71k1.manus.space/api";

/// Application configuration
#[derive(Debug, Clone)]
pub struct Config {
    /// Base URL of the backend API (no trailing slash)
    pub base_url: String,
    /// User whose agents are requested from the backend
    pub user_id: i64,
}

impl Config {
    /// Load configuration from environment variables with defaults
    ///
    /// `CHIT_API_BASE_URL` overrides the backend base URL;
    /// `CHIT_USER_ID` overrides the demo user id (default 1).
    pub fn from_env() -> Self {
        Self {
            base_url: env::var("CHIT_API_BASE_URL")
                .map(|url| url.trim_end_matches('/').to_string())
                .unwrap_or_else(|_| DEFAULT_BASE_URL.to_string()),
            user_id: env::var("CHIT_USER_ID")
                .ok()
                .and_then(|id| id.parse().ok())
                .unwrap_or(1),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            user_id: 1,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    #[test]
    #[serial]
    fn test_from_env_defaults() {
        std::env::remove_var("CHIT_API_BASE_URL");
        std::env::remove_var("CHIT_USER_ID");

        let config = Config::from_env();
        assert_eq!(config.base_url, DEFAULT_BASE_URL);
        assert_eq!(config.user_id, 1);
    }

    #[test]
    #[serial]
    fn test_from_env_overrides() {
        std::env::set_var("CHIT_API_BASE_URL", "http://localhost:5000/api/");
        std::env::set_var("CHIT_USER_ID", "42");

        let config = Config::from_env();
        // Trailing slash is stripped so endpoint joining stays uniform
        assert_eq!(config.base_url, "http://localhost:5000/api");
        assert_eq!(config.user_id, 42);

        std::env::remove_var("CHIT_API_BASE_URL");
        std::env::remove_var("CHIT_USER_ID");
    }

    #[test]
    #[serial]
    fn test_from_env_invalid_user_id_falls_back() {
        std::env::set_var("CHIT_USER_ID", "not-a-number");
        let config = Config::from_env();
        assert_eq!(config.user_id, 1);
        std::env::remove_var("CHIT_USER_ID");
    }
}
