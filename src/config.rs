//! Application configuration management.
//!
//! This module handles loading configuration from environment variables.
//! It uses the `envy` crate to deserialize environment variables into a type-safe struct.

use serde::Deserialize;

/// Application configuration loaded from environment variables.
///
/// # Environment Variables
///
/// - `SERVER_PORT` (optional): HTTP server port, defaults to 3000
/// - `BIND_ADDRESS` (optional): interface to listen on, defaults to 0.0.0.0
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Config {
    #[serde(default = "default_port")]
    pub server_port: u16,

    #[serde(default = "default_bind_address")]
    pub bind_address: String,
}

/// Default port if SERVER_PORT environment variable is not set.
fn default_port() -> u16 {
    3000
}

fn default_bind_address() -> String {
    "0.0.0.0".to_string()
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// A `.env` file is loaded first if present.
    ///
    /// # Errors
    ///
    /// Returns an error if a variable is set but cannot be parsed into the
    /// expected type (e.g. a non-numeric `SERVER_PORT`).
    pub fn from_env() -> Result<Self, envy::Error> {
        dotenvy::dotenv().ok();

        Self::from_vars(std::env::vars())
    }

    /// Build configuration from explicit key/value pairs.
    pub fn from_vars<I>(vars: I) -> Result<Self, envy::Error>
    where
        I: IntoIterator<Item = (String, String)>,
    {
        // Field names are converted automatically: server_port -> SERVER_PORT
        envy::from_iter::<_, Config>(vars)
    }

    /// Socket address the server binds to.
    pub fn listen_addr(&self) -> String {
        format!("{}:{}", self.bind_address, self.server_port)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_apply_when_unset() {
        let config = Config::from_vars(Vec::new()).unwrap();
        assert_eq!(config.server_port, 3000);
        assert_eq!(config.listen_addr(), "0.0.0.0:3000");
    }

    #[test]
    fn variables_override_defaults() {
        let config = Config::from_vars(vec![
            ("SERVER_PORT".to_string(), "8080".to_string()),
            ("BIND_ADDRESS".to_string(), "127.0.0.1".to_string()),
        ])
        .unwrap();
        assert_eq!(config.listen_addr(), "127.0.0.1:8080");
    }

    #[test]
    fn invalid_port_is_an_error() {
        let result = Config::from_vars(vec![("SERVER_PORT".to_string(), "abc".to_string())]);
        assert!(result.is_err());
    }
}
