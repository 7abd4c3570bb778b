use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use tracing::debug;

/// Page size used when neither config nor command line sets one
pub const DEFAULT_ROW_COUNT: u32 = 7;

const DEFAULT_API_URL: &str = "http://localhost:8080";

/// Backend paths for each list/detail resource
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Endpoints {
    pub reservations: String,
    pub amounts: String,
    pub reviews: String,
    pub payments: String,
}

impl Default for Endpoints {
    fn default() -> Self {
        Self {
            reservations: "/admin/reservation".to_string(),
            amounts: "/admin/reservation/amount".to_string(),
            reviews: "/admin/review".to_string(),
            payments: "/admin/payment".to_string(),
        }
    }
}

/// Application configuration
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Base URL of the booking backend
    pub api_url: String,

    /// Directory holding the persisted session
    pub data_dir: PathBuf,

    /// Rows requested per page
    pub row_count: u32,

    /// Request timeout
    pub timeout_seconds: u64,

    /// User agent sent with every request
    pub user_agent: String,

    pub endpoints: Endpoints,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_url: DEFAULT_API_URL.to_string(),
            data_dir: dirs::data_dir()
                .map(|dir| dir.join("booking-admin"))
                .unwrap_or_else(|| PathBuf::from("./data")),
            row_count: DEFAULT_ROW_COUNT,
            timeout_seconds: 30,
            user_agent: format!("booking-admin/{}", env!("CARGO_PKG_VERSION")),
            endpoints: Endpoints::default(),
        }
    }
}

impl Config {
    /// Initialize configuration from various sources
    pub async fn init() -> Result<Self> {
        debug!("Initializing configuration");

        let mut config = Self::default();

        config.load_from_env();

        if let Ok(file_config) = Self::load_from_file(&Self::config_paths()).await {
            config.merge_with(file_config);
        }

        Ok(config)
    }

    /// Config file search order, first match wins
    pub fn config_paths() -> Vec<PathBuf> {
        let mut paths = vec![
            PathBuf::from("./.booking-admin.json"),
            PathBuf::from("./booking-admin.json"),
        ];
        if let Some(config_dir) = dirs::config_dir() {
            paths.push(config_dir.join("booking-admin").join("config.json"));
        }
        paths
    }

    /// Load configuration from environment variables
    pub fn load_from_env(&mut self) {
        self.apply_env(|key| std::env::var(key).ok());
    }

    /// Apply `BOOKING_ADMIN_*` variables read through `lookup`
    pub fn apply_env<F>(&mut self, lookup: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(url) = lookup("BOOKING_ADMIN_API_URL") {
            self.api_url = url;
        }

        if let Some(rows) = lookup("BOOKING_ADMIN_ROWS") {
            if let Ok(rows) = rows.parse() {
                self.row_count = rows;
            }
        }

        if let Some(data_dir) = lookup("BOOKING_ADMIN_DATA_DIR") {
            self.data_dir = PathBuf::from(data_dir);
        }

        if let Some(timeout) = lookup("BOOKING_ADMIN_TIMEOUT") {
            if let Ok(timeout) = timeout.parse() {
                self.timeout_seconds = timeout;
            }
        }
    }

    /// Load the first configuration file found in `paths`
    pub async fn load_from_file(paths: &[PathBuf]) -> Result<Self> {
        for path in paths {
            if path.exists() {
                debug!("Loading configuration from: {}", path.display());
                let content = tokio::fs::read_to_string(path).await?;
                let config: Self = serde_json::from_str(&content)?;
                return Ok(config);
            }
        }

        Err(anyhow::anyhow!("No configuration file found"))
    }

    /// Merge another configuration into this one, keeping values it leaves at default
    pub fn merge_with(&mut self, other: Self) {
        let defaults = Self::default();

        if other.api_url != defaults.api_url {
            self.api_url = other.api_url;
        }
        if other.data_dir != defaults.data_dir {
            self.data_dir = other.data_dir;
        }
        if other.row_count != defaults.row_count {
            self.row_count = other.row_count;
        }
        if other.timeout_seconds != defaults.timeout_seconds {
            self.timeout_seconds = other.timeout_seconds;
        }
        if other.user_agent != defaults.user_agent {
            self.user_agent = other.user_agent;
        }
        if other.endpoints != defaults.endpoints {
            self.endpoints = other.endpoints;
        }
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<()> {
        if !(self.api_url.starts_with("http://") || self.api_url.starts_with("https://")) {
            return Err(anyhow::anyhow!(
                "api_url must start with http:// or https://, got '{}'",
                self.api_url
            ));
        }

        if self.row_count == 0 {
            return Err(anyhow::anyhow!("row_count must be greater than 0"));
        }

        if self.timeout_seconds == 0 {
            return Err(anyhow::anyhow!("timeout_seconds must be greater than 0"));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;
    use tempfile::tempdir;

    #[test]
    fn test_default_values() {
        let config = Config::default();
        assert_eq!(config.row_count, 7);
        assert_eq!(config.api_url, "http://localhost:8080");
        assert_eq!(config.endpoints.reservations, "/admin/reservation");
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_env_overrides() {
        let vars: HashMap<&str, &str> = [
            ("BOOKING_ADMIN_API_URL", "https://api.example.com"),
            ("BOOKING_ADMIN_ROWS", "20"),
            ("BOOKING_ADMIN_TIMEOUT", "not-a-number"),
        ]
        .into_iter()
        .collect();

        let mut config = Config::default();
        config.apply_env(|key| vars.get(key).map(|v| v.to_string()));

        assert_eq!(config.api_url, "https://api.example.com");
        assert_eq!(config.row_count, 20);
        assert_eq!(config.timeout_seconds, 30);
    }

    #[tokio::test]
    async fn test_partial_file_merges_over_defaults() {
        let temp_dir = tempdir().unwrap();
        let path = temp_dir.path().join("booking-admin.json");
        std::fs::write(
            &path,
            r#"{"row_count": 10, "endpoints": {"reviews": "/v2/review"}}"#,
        )
        .unwrap();

        let missing = temp_dir.path().join("missing.json");
        let file_config = Config::load_from_file(&[missing, path]).await.unwrap();

        let mut config = Config::default();
        config.api_url = "https://from-env.example".to_string();
        config.merge_with(file_config);

        assert_eq!(config.row_count, 10);
        assert_eq!(config.api_url, "https://from-env.example");
        assert_eq!(config.endpoints.reviews, "/v2/review");
        assert_eq!(config.endpoints.reservations, "/admin/reservation");
    }

    #[tokio::test]
    async fn test_no_config_file() {
        let temp_dir = tempdir().unwrap();
        let result = Config::load_from_file(&[temp_dir.path().join("nope.json")]).await;
        assert!(result.is_err());
    }

    #[test]
    fn test_validation() {
        let mut config = Config::default();
        config.api_url = "localhost:8080".to_string();
        assert!(config.validate().is_err());

        let mut config = Config::default();
        config.row_count = 0;
        assert!(config.validate().is_err());
    }
}
