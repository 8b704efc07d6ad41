use std::path::PathBuf;
use std::time::Duration;

use directories::ProjectDirs;
use serde::Deserialize;
use url::Url;

use crate::error::{AdminError, Result};

pub const DEFAULT_API_URL: &str = "http://localhost:8000";
pub const DEFAULT_POLL_INTERVAL_SECS: u64 = 10;
pub const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 15;
pub const DEFAULT_LOG_LEVEL: &str = "warn";

/// Env var naming the backend the `/api` prefix is proxied to.
pub const API_TARGET_ENV: &str = "API_PROXY_TARGET";

#[derive(Deserialize, Default, Debug)]
pub struct Config {
    pub api_url: Option<String>,
    pub poll_interval_secs: Option<u64>,
    pub request_timeout_secs: Option<u64>,
    pub log_level: Option<String>,
}

impl Config {
    pub fn load() -> Result<Self> {
        let config_path = Self::config_path()?;

        if !config_path.exists() {
            return Ok(Config::default());
        }

        let contents =
            std::fs::read_to_string(&config_path).map_err(|e| AdminError::ConfigRead {
                path: config_path.clone(),
                source: e,
            })?;

        Self::parse(&contents).map_err(|e| AdminError::ConfigParse {
            path: config_path,
            source: e,
        })
    }

    fn parse(contents: &str) -> std::result::Result<Self, toml::de::Error> {
        toml::from_str(contents)
    }

    pub fn config_path() -> Result<PathBuf> {
        ProjectDirs::from("", "", "svu-admin")
            .map(|dirs| dirs.config_dir().join("config.toml"))
            .ok_or(AdminError::NoConfigDir)
    }

    /// Resolve the backend base URL: explicit flag, then env var, then config file.
    pub fn api_url(&self, explicit: Option<&str>) -> Result<Url> {
        let env = std::env::var(API_TARGET_ENV).ok();
        self.resolve_api_url(explicit, env.as_deref())
    }

    pub(crate) fn resolve_api_url(&self, explicit: Option<&str>, env: Option<&str>) -> Result<Url> {
        let raw = explicit
            .or(env.filter(|s| !s.trim().is_empty()))
            .or(self.api_url.as_deref())
            .unwrap_or(DEFAULT_API_URL);

        let url = Url::parse(raw.trim()).map_err(|_| AdminError::InvalidUrl(raw.to_string()))?;
        if url.cannot_be_a_base() || !matches!(url.scheme(), "http" | "https") {
            return Err(AdminError::InvalidUrl(raw.to_string()));
        }
        Ok(url)
    }

    pub fn poll_interval(&self) -> Duration {
        let secs = self
            .poll_interval_secs
            .filter(|s| *s > 0)
            .unwrap_or(DEFAULT_POLL_INTERVAL_SECS);
        Duration::from_secs(secs)
    }

    /// Upper bound on one request to the backend, connect through body.
    pub fn request_timeout(&self) -> Duration {
        let secs = self
            .request_timeout_secs
            .filter(|s| *s > 0)
            .unwrap_or(DEFAULT_REQUEST_TIMEOUT_SECS);
        Duration::from_secs(secs)
    }

    pub fn log_level(&self) -> &str {
        self.log_level.as_deref().unwrap_or(DEFAULT_LOG_LEVEL)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_when_empty() {
        let config = Config::parse("").unwrap();
        assert_eq!(config.poll_interval(), Duration::from_secs(10));
        assert_eq!(config.request_timeout(), Duration::from_secs(15));
        assert_eq!(config.log_level(), "warn");
        let url = config.resolve_api_url(None, None).unwrap();
        assert_eq!(url.as_str(), "http://localhost:8000/");
    }

    #[test]
    fn test_parse_full_file() {
        let config = Config::parse(
            r#"
api_url = "http://admin.internal:9000"
poll_interval_secs = 30
request_timeout_secs = 5
log_level = "debug"
"#,
        )
        .unwrap();
        assert_eq!(config.poll_interval(), Duration::from_secs(30));
        assert_eq!(config.request_timeout(), Duration::from_secs(5));
        assert_eq!(config.log_level(), "debug");
        let url = config.resolve_api_url(None, None).unwrap();
        assert_eq!(url.host_str(), Some("admin.internal"));
    }

    #[test]
    fn test_zero_interval_falls_back_to_default() {
        let config = Config {
            poll_interval_secs: Some(0),
            request_timeout_secs: Some(0),
            ..Default::default()
        };
        assert_eq!(config.poll_interval(), Duration::from_secs(10));
        assert_eq!(config.request_timeout(), Duration::from_secs(15));
    }

    #[test]
    fn test_api_url_precedence() {
        let config = Config {
            api_url: Some("http://from-file:1".to_string()),
            ..Default::default()
        };
        let url = config
            .resolve_api_url(Some("http://from-flag:3"), Some("http://from-env:2"))
            .unwrap();
        assert_eq!(url.host_str(), Some("from-flag"));

        let url = config
            .resolve_api_url(None, Some("http://from-env:2"))
            .unwrap();
        assert_eq!(url.host_str(), Some("from-env"));

        let url = config.resolve_api_url(None, Some("  ")).unwrap();
        assert_eq!(url.host_str(), Some("from-file"));
    }

    #[test]
    fn test_rejects_invalid_url() {
        let config = Config::default();
        assert!(matches!(
            config.resolve_api_url(Some("not a url"), None),
            Err(AdminError::InvalidUrl(_))
        ));
        assert!(matches!(
            config.resolve_api_url(Some("ftp://example.com"), None),
            Err(AdminError::InvalidUrl(_))
        ));
    }
}
