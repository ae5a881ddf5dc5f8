//! Application settings loaded from `config.toml` and the environment.
//!
//! Every field has a default, so the service runs without any config file. A file
//! only needs to list the values it wants to change. `PORT` and `SEED_URL` in the
//! environment win over the file.

use crate::errors::{Error, Result};
use serde::Deserialize;
use std::{net::SocketAddr, path::Path, time::Duration};

/// Location of the bundled product transaction dataset.
pub const DEFAULT_SEED_URL: &str = "https://s3.amazonaws.com/roxiler.com/product_transaction.json";

/// Runtime settings for the HTTP service
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct Settings {
    /// Interface to listen on
    pub bind_address: String,
    /// TCP port to listen on
    pub port: u16,
    /// Path prefix every route is mounted under
    pub base_path: String,
    /// Where the seed operation downloads records from
    pub seed_url: String,
    /// Request timeout for the seed download
    pub seed_timeout_secs: u64,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            bind_address: "0.0.0.0".to_string(),
            port: 5000,
            base_path: "/api/transactions".to_string(),
            seed_url: DEFAULT_SEED_URL.to_string(),
            seed_timeout_secs: 30,
        }
    }
}

impl Settings {
    /// Socket address built from `bind_address` and `port`.
    pub fn socket_addr(&self) -> Result<SocketAddr> {
        format!("{}:{}", self.bind_address, self.port)
            .parse()
            .map_err(|e| Error::Config {
                message: format!(
                    "Invalid bind address {}:{}: {e}",
                    self.bind_address, self.port
                ),
            })
    }

    /// Seed download timeout as a `Duration`.
    #[must_use]
    pub const fn seed_timeout(&self) -> Duration {
        Duration::from_secs(self.seed_timeout_secs)
    }

    /// Applies `PORT` and `SEED_URL` overrides, read through `lookup`.
    fn apply_overrides<F>(mut self, lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(port) = lookup("PORT") {
            self.port = port.trim().parse().map_err(|e| Error::Config {
                message: format!("Invalid PORT value {port:?}: {e}"),
            })?;
        }
        if let Some(seed_url) = lookup("SEED_URL") {
            self.seed_url = seed_url;
        }
        Ok(self)
    }
}

/// Parses settings from a TOML file.
pub fn load_settings<P: AsRef<Path>>(path: P) -> Result<Settings> {
    let path_ref = path.as_ref();
    tracing::debug!("Attempting to load settings from: {:?}", path_ref);
    let contents = std::fs::read_to_string(path_ref).map_err(|e| Error::Config {
        message: format!("Failed to read config file {}: {e}", path_ref.display()),
    })?;

    toml::from_str(&contents).map_err(|e| Error::Config {
        message: format!("Failed to parse {}: {e}", path_ref.display()),
    })
}

/// Loads settings the way the binary does at startup.
///
/// Reads the file named by `SALES_CONFIG` (default `config.toml`) when it exists,
/// otherwise starts from the defaults, then applies environment overrides.
pub fn load_app_settings() -> Result<Settings> {
    let path = std::env::var("SALES_CONFIG").unwrap_or_else(|_| "config.toml".to_string());
    let settings = if Path::new(&path).exists() {
        load_settings(&path)?
    } else {
        tracing::info!("No config file at {path}, using defaults");
        Settings::default()
    };
    settings.apply_overrides(|key| std::env::var(key).ok())
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]
    use super::*;
    use std::collections::HashMap;
    use std::io::Write;

    #[test]
    fn test_defaults() {
        let settings = Settings::default();
        assert_eq!(settings.port, 5000);
        assert_eq!(settings.base_path, "/api/transactions");
        assert_eq!(settings.seed_url, DEFAULT_SEED_URL);
        assert_eq!(settings.seed_timeout(), Duration::from_secs(30));
    }

    #[test]
    fn test_partial_toml_keeps_defaults() {
        let settings: Settings = toml::from_str(
            r#"
            port = 8080
            seed_url = "http://localhost:9000/seed.json"
        "#,
        )
        .unwrap();
        assert_eq!(settings.port, 8080);
        assert_eq!(settings.seed_url, "http://localhost:9000/seed.json");
        assert_eq!(settings.bind_address, "0.0.0.0");
        assert_eq!(settings.base_path, "/api/transactions");
    }

    #[test]
    fn test_load_settings_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "bind_address = \"127.0.0.1\"\nseed_timeout_secs = 5").unwrap();

        let settings = load_settings(file.path()).unwrap();
        assert_eq!(settings.bind_address, "127.0.0.1");
        assert_eq!(settings.seed_timeout_secs, 5);
        assert_eq!(
            settings.socket_addr().unwrap(),
            "127.0.0.1:5000".parse().unwrap()
        );
    }

    #[test]
    fn test_load_settings_rejects_bad_toml() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "port = \"not a number\"").unwrap();

        let result = load_settings(file.path());
        assert!(matches!(result, Err(Error::Config { .. })));
    }

    #[test]
    fn test_env_overrides() {
        let env: HashMap<&str, &str> = [("PORT", "7000"), ("SEED_URL", "http://seed.local/")]
            .into_iter()
            .collect();
        let settings = Settings::default()
            .apply_overrides(|key| env.get(key).map(ToString::to_string))
            .unwrap();
        assert_eq!(settings.port, 7000);
        assert_eq!(settings.seed_url, "http://seed.local/");
    }

    #[test]
    fn test_invalid_port_override() {
        let result = Settings::default().apply_overrides(|key| {
            (key == "PORT").then(|| "http".to_string())
        });
        assert!(matches!(result, Err(Error::Config { .. })));
    }

    #[test]
    fn test_invalid_bind_address() {
        let settings = Settings {
            bind_address: "not an address".to_string(),
            ..Settings::default()
        };
        assert!(settings.socket_addr().is_err());
    }
}
