//! # Client Configuration
//!
//! Configuration is loaded from environment variables (a `.env` file is read
//! first when present) and validated up front so a misconfigured client fails
//! before the first request.
//!
//! | Variable | Meaning | Default |
//! |---|---|---|
//! | `DASHBOARD_API_DOMAIN` | Backend domain, requests go to `https://<domain>` | required unless the base URL is set |
//! | `DASHBOARD_API_BASE_URL` | Full base URL, overrides the domain | unset |
//! | `DASHBOARD_HTTP_TIMEOUT_SECS` | Per-request timeout | `15` |
//! | `DASHBOARD_STORAGE_PATH` | Persisted session file | `data/session.json` |

use std::env;
use std::path::PathBuf;
use std::time::Duration;

use crate::core::{AppError, Result};

pub const ENV_API_DOMAIN: &str = "DASHBOARD_API_DOMAIN";
pub const ENV_API_BASE_URL: &str = "DASHBOARD_API_BASE_URL";
pub const ENV_HTTP_TIMEOUT: &str = "DASHBOARD_HTTP_TIMEOUT_SECS";
pub const ENV_STORAGE_PATH: &str = "DASHBOARD_STORAGE_PATH";

const DEFAULT_TIMEOUT_SECS: u64 = 15;
const DEFAULT_STORAGE_PATH: &str = "data/session.json";

/// Dashboard client configuration.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ClientConfig {
    /// Base URL every request path is appended to, without a trailing slash.
    pub base_url: String,

    /// Request timeout handed to reqwest.
    ///
    /// Valid range: 1-300 seconds.
    pub timeout_secs: u64,

    /// File backing the persisted session (token, user, profile, cookie).
    pub storage_path: PathBuf,
}

impl ClientConfig {
    /// Build a config for an explicit base URL with default timeout and storage.
    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        Self {
            base_url: normalize_base_url(&base_url.into()),
            timeout_secs: DEFAULT_TIMEOUT_SECS,
            storage_path: PathBuf::from(DEFAULT_STORAGE_PATH),
        }
    }

    /// Load configuration from environment variables.
    pub fn from_env() -> Result<Self> {
        // Missing .env is fine, the variables may come from the process environment
        let _ = dotenvy::dotenv();

        let base_url = match env::var(ENV_API_BASE_URL) {
            Ok(url) if !url.trim().is_empty() => normalize_base_url(&url),
            _ => {
                let domain = env::var(ENV_API_DOMAIN).map_err(|_| {
                    AppError::Config(format!(
                        "{} or {} must be set in environment",
                        ENV_API_DOMAIN, ENV_API_BASE_URL
                    ))
                })?;
                base_url_for_domain(&domain)
            }
        };

        let timeout_secs = match env::var(ENV_HTTP_TIMEOUT) {
            Ok(raw) => raw.trim().parse().map_err(|e| {
                AppError::Config(format!("{} must be a valid number: {}", ENV_HTTP_TIMEOUT, e))
            })?,
            Err(_) => DEFAULT_TIMEOUT_SECS,
        };

        let storage_path = env::var(ENV_STORAGE_PATH)
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from(DEFAULT_STORAGE_PATH));

        let config = Self {
            base_url,
            timeout_secs,
            storage_path,
        };
        config.validate()?;
        Ok(config)
    }

    /// Validate configuration values.
    pub fn validate(&self) -> Result<()> {
        if !(self.base_url.starts_with("http://") || self.base_url.starts_with("https://")) {
            return Err(AppError::Config(format!(
                "base URL must start with http:// or https://, got {:?}",
                self.base_url
            )));
        }

        if self.timeout_secs < 1 || self.timeout_secs > 300 {
            return Err(AppError::Config(format!(
                "{} must be between 1 and 300",
                ENV_HTTP_TIMEOUT
            )));
        }

        Ok(())
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}

/// `https://<domain>` for a bare domain; a domain that already carries a scheme is kept.
pub fn base_url_for_domain(domain: &str) -> String {
    let domain = domain.trim();
    if domain.starts_with("http://") || domain.starts_with("https://") {
        normalize_base_url(domain)
    } else {
        normalize_base_url(&format!("https://{}", domain))
    }
}

fn normalize_base_url(url: &str) -> String {
    url.trim().trim_end_matches('/').to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_base_url_for_domain() {
        assert_eq!(base_url_for_domain("api.example.vn"), "https://api.example.vn");
        assert_eq!(base_url_for_domain(" api.example.vn/ "), "https://api.example.vn");
        assert_eq!(base_url_for_domain("http://localhost:5000/"), "http://localhost:5000");
    }

    #[test]
    fn test_with_base_url_defaults() {
        let config = ClientConfig::with_base_url("http://127.0.0.1:5000/");
        assert_eq!(config.base_url, "http://127.0.0.1:5000");
        assert_eq!(config.timeout(), Duration::from_secs(15));
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_bad_values() {
        let mut config = ClientConfig::with_base_url("ftp://example.vn");
        assert!(matches!(config.validate(), Err(AppError::Config(_))));

        config.base_url = "https://example.vn".to_string();
        config.timeout_secs = 0;
        assert!(config.validate().is_err());

        config.timeout_secs = 301;
        assert!(config.validate().is_err());
    }
}
