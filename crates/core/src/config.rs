//! Dashboard configuration
//!
//! Values come from the process environment (a `.env` file in the working
//! directory is loaded first via `dotenvy`) and may then be overridden by
//! command-line flags.
//!
//! | Variable                      | Default                      |
//! |-------------------------------|------------------------------|
//! | `TUNING_API_URL`              | `http://127.0.0.1:8000/api`  |
//! | `TUNING_REQUEST_TIMEOUT_SECS` | `15`                         |
//! | `RUST_LOG`                    | `info`                       |

use std::path::PathBuf;
use std::time::Duration;

use crate::error::{DashboardError, DashboardResult};
use crate::traits::Validatable;

/// Environment variable holding the API endpoint
pub const ENV_API_URL: &str = "TUNING_API_URL";

/// Environment variable holding the request timeout in seconds
pub const ENV_REQUEST_TIMEOUT: &str = "TUNING_REQUEST_TIMEOUT_SECS";

/// Environment variable holding the log filter
pub const ENV_LOG: &str = "RUST_LOG";

/// Default API endpoint
pub const DEFAULT_API_URL: &str = "http://127.0.0.1:8000/api";

/// Default request timeout in seconds
pub const DEFAULT_TIMEOUT_SECS: u64 = 15;

/// Default log filter
pub const DEFAULT_LOG_LEVEL: &str = "info";

/// Runtime configuration for the dashboard
#[derive(Debug, Clone, PartialEq)]
pub struct DashboardConfig {
    /// The single API endpoint all reads and writes go to
    pub api_url: String,

    /// Per-request timeout
    pub request_timeout: Duration,

    /// `tracing` filter directive (e.g. `info`, `tuning_api=debug`)
    pub log_level: String,

    /// The `.env` file that was read, if one was found
    pub env_file: Option<PathBuf>,
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            api_url: DEFAULT_API_URL.to_string(),
            request_timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
            log_level: DEFAULT_LOG_LEVEL.to_string(),
            env_file: None,
        }
    }
}

impl DashboardConfig {
    /// Load configuration from the process environment.
    ///
    /// A missing `.env` file is fine; a malformed one is an error.
    pub fn from_env() -> DashboardResult<Self> {
        let env_file = env_file_outcome(dotenvy::dotenv())?;
        let mut config = Self::from_lookup(|key| std::env::var(key).ok())?;
        config.env_file = env_file;
        Ok(config)
    }

    /// Load configuration through an arbitrary key lookup
    pub fn from_lookup<F>(lookup: F) -> DashboardResult<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(url) = lookup(ENV_API_URL).filter(|v| !v.trim().is_empty()) {
            config.api_url = url.trim().to_string();
        }

        if let Some(raw) = lookup(ENV_REQUEST_TIMEOUT) {
            let secs = raw.trim().parse::<u64>().map_err(|_| {
                DashboardError::config(format!("{ENV_REQUEST_TIMEOUT} must be a whole number, got '{raw}'"))
            })?;
            config.request_timeout = Duration::from_secs(secs);
        }

        if let Some(level) = lookup(ENV_LOG).filter(|v| !v.trim().is_empty()) {
            config.log_level = level;
        }

        config.validate()?;
        Ok(config)
    }

    /// Apply command-line overrides and re-validate
    pub fn with_overrides(
        mut self,
        api_url: Option<String>,
        timeout_secs: Option<u64>,
        log_level: Option<String>,
    ) -> DashboardResult<Self> {
        if let Some(url) = api_url {
            self.api_url = url;
        }
        if let Some(secs) = timeout_secs {
            self.request_timeout = Duration::from_secs(secs);
        }
        if let Some(level) = log_level {
            self.log_level = level;
        }
        self.validate()?;
        Ok(self)
    }
}

/// Runs before logging is installed, so the path is returned rather than logged
fn env_file_outcome(result: Result<PathBuf, dotenvy::Error>) -> DashboardResult<Option<PathBuf>> {
    match result {
        Ok(path) => Ok(Some(path)),
        Err(e) if e.not_found() => Ok(None),
        Err(e) => Err(DashboardError::EnvFile(e.to_string())),
    }
}

impl Validatable for DashboardConfig {
    fn validate(&self) -> DashboardResult<()> {
        let rest = self
            .api_url
            .strip_prefix("http://")
            .or_else(|| self.api_url.strip_prefix("https://"))
            .ok_or_else(|| {
                DashboardError::config(format!(
                    "API url must start with http:// or https://, got '{}'",
                    self.api_url
                ))
            })?;

        if rest.is_empty() || rest.starts_with('/') {
            return Err(DashboardError::config(format!(
                "API url has no host: '{}'",
                self.api_url
            )));
        }

        if self.request_timeout.is_zero() {
            return Err(DashboardError::config("request timeout must be greater than zero"));
        }

        Ok(())
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_defaults_when_environment_is_empty() {
        let config = DashboardConfig::from_lookup(lookup_from(&[])).unwrap();
        assert_eq!(config, DashboardConfig::default());
        assert_eq!(config.api_url, DEFAULT_API_URL);
    }

    #[test]
    fn test_reads_all_variables() {
        let config = DashboardConfig::from_lookup(lookup_from(&[
            (ENV_API_URL, "https://api.tuning.example/v1"),
            (ENV_REQUEST_TIMEOUT, "5"),
            (ENV_LOG, "tuning_api=debug"),
        ]))
        .unwrap();

        assert_eq!(config.api_url, "https://api.tuning.example/v1");
        assert_eq!(config.request_timeout, Duration::from_secs(5));
        assert_eq!(config.log_level, "tuning_api=debug");
    }

    #[test]
    fn test_rejects_bad_timeout() {
        let err = DashboardConfig::from_lookup(lookup_from(&[(ENV_REQUEST_TIMEOUT, "soon")]))
            .unwrap_err();
        assert!(err.is_config());

        let err =
            DashboardConfig::from_lookup(lookup_from(&[(ENV_REQUEST_TIMEOUT, "0")])).unwrap_err();
        assert!(err.is_config());
    }

    #[test]
    fn test_rejects_relative_url() {
        let err = DashboardConfig::from_lookup(lookup_from(&[(ENV_API_URL, "/api")])).unwrap_err();
        assert!(err.is_config());

        let err =
            DashboardConfig::from_lookup(lookup_from(&[(ENV_API_URL, "http:///api")])).unwrap_err();
        assert!(err.is_config());
    }

    #[test]
    fn test_env_file_outcome() {
        let found = env_file_outcome(Ok(PathBuf::from("/srv/tuning/.env"))).unwrap();
        assert_eq!(found, Some(PathBuf::from("/srv/tuning/.env")));

        let missing = dotenvy::Error::Io(std::io::Error::from(std::io::ErrorKind::NotFound));
        assert_eq!(env_file_outcome(Err(missing)).unwrap(), None);

        let malformed = dotenvy::Error::LineParse("TUNING_API_URL".into(), 14);
        assert!(env_file_outcome(Err(malformed)).unwrap_err().is_config());
    }

    #[test]
    fn test_overrides_take_precedence() {
        let config = DashboardConfig::default()
            .with_overrides(Some("http://10.0.0.2:9000".into()), Some(30), None)
            .unwrap();
        assert_eq!(config.api_url, "http://10.0.0.2:9000");
        assert_eq!(config.request_timeout, Duration::from_secs(30));
        assert_eq!(config.log_level, DEFAULT_LOG_LEVEL);

        assert!(
            DashboardConfig::default()
                .with_overrides(Some("ftp://x".into()), None, None)
                .is_err()
        );
    }
}
