//! Storefront configuration, loaded from the environment.

use std::path::PathBuf;

use thiserror::Error;

/// Default number of pets fetched per listing page.
pub const DEFAULT_PAGE_SIZE: i64 = 12;

/// Configuration loading errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Missing environment variable: {0}")]
    MissingEnvVar(String),
    #[error("Invalid environment variable {0}: {1}")]
    InvalidEnvVar(String, String),
    #[error("No data directory available; set PETHAVEN_DATA_DIR")]
    NoDataDir,
}

/// Storefront application configuration.
#[derive(Debug, Clone)]
pub struct StorefrontConfig {
    /// Pet store GraphQL endpoint URL.
    pub api_url: String,
    /// Directory holding persisted session and cart state.
    pub data_dir: PathBuf,
    /// Pets fetched per listing page.
    pub page_size: i64,
}

impl StorefrontConfig {
    /// Load configuration from environment variables.
    ///
    /// Calls `dotenvy::dotenv()` to load from `.env` file if present.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if `PETHAVEN_API_URL` is missing, if
    /// `PETHAVEN_PAGE_SIZE` is set but not a positive integer, or if no
    /// data directory can be determined.
    pub fn from_env() -> Result<Self, ConfigError> {
        // Load .env file if present (ignore errors if not found)
        let _ = dotenvy::dotenv();

        let api_url = get_required_env("PETHAVEN_API_URL")?;

        let data_dir = match get_optional_env("PETHAVEN_DATA_DIR") {
            Some(dir) => PathBuf::from(dir),
            None => default_data_dir().ok_or(ConfigError::NoDataDir)?,
        };

        let page_size = match get_optional_env("PETHAVEN_PAGE_SIZE") {
            Some(raw) => parse_page_size(&raw)?,
            None => DEFAULT_PAGE_SIZE,
        };

        Ok(Self {
            api_url,
            data_dir,
            page_size,
        })
    }
}

/// Platform data directory for the application, when one exists.
fn default_data_dir() -> Option<PathBuf> {
    directories::ProjectDirs::from("com", "pethaven", "pethaven")
        .map(|dirs| dirs.data_dir().to_path_buf())
}

fn parse_page_size(raw: &str) -> Result<i64, ConfigError> {
    let invalid = |msg: &str| {
        ConfigError::InvalidEnvVar("PETHAVEN_PAGE_SIZE".to_string(), msg.to_string())
    };
    let size: i64 = raw.parse().map_err(|_| invalid("must be an integer"))?;
    if size <= 0 {
        return Err(invalid("must be positive"));
    }
    Ok(size)
}

fn get_required_env(key: &str) -> Result<String, ConfigError> {
    std::env::var(key).map_err(|_| ConfigError::MissingEnvVar(key.to_string()))
}

fn get_optional_env(key: &str) -> Option<String> {
    std::env::var(key).ok()
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_page_size_accepts_positive_integers() {
        assert_eq!(parse_page_size("12").unwrap(), 12);
        assert_eq!(parse_page_size("1").unwrap(), 1);
    }

    #[test]
    fn test_parse_page_size_rejects_zero_and_negative() {
        assert!(parse_page_size("0").is_err());
        assert!(parse_page_size("-3").is_err());
    }

    #[test]
    fn test_parse_page_size_rejects_non_numeric() {
        let err = parse_page_size("twelve").unwrap_err();
        assert!(err.to_string().contains("PETHAVEN_PAGE_SIZE"));
    }
}
