//! Logging configuration from environment variables

use std::path::PathBuf;

/// Logging configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogConfig {
    /// Log filter directive (e.g., "dashboard=debug,info")
    pub log_level: String,
    /// Directory of the rotated log files
    pub log_dir: PathBuf,
    /// File name prefix inside `log_dir`
    pub file_prefix: String,
    /// Also write human-readable output to stderr
    pub log_to_stderr: bool,
    /// Emit JSON lines instead of the plain text format
    pub json: bool,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            log_level: "dashboard=info,warn".to_string(),
            log_dir: PathBuf::from("logs"),
            file_prefix: "dashboard.log".to_string(),
            log_to_stderr: true,
            json: false,
        }
    }
}

impl LogConfig {
    /// Load configuration from environment variables
    pub fn from_env() -> Self {
        let defaults = Self::default();

        Self {
            log_level: std::env::var("RUST_LOG").unwrap_or(defaults.log_level),
            log_dir: std::env::var("DASHBOARD_LOG_DIR")
                .map(PathBuf::from)
                .unwrap_or(defaults.log_dir),
            file_prefix: defaults.file_prefix,
            log_to_stderr: std::env::var("DASHBOARD_LOG_STDERR")
                .map(|v| v == "1")
                .unwrap_or(defaults.log_to_stderr),
            json: std::env::var("DASHBOARD_LOG_JSON")
                .map(|v| v == "1")
                .unwrap_or(defaults.json),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_level_is_info() {
        let config = LogConfig::default();
        assert_eq!(config.log_level, "dashboard=info,warn");
        assert_eq!(config.log_dir, PathBuf::from("logs"));
        assert!(config.log_to_stderr);
        assert!(!config.json);
    }
}
