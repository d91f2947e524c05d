use std::path::PathBuf;

use thiserror::Error;

/// Failures while assembling a [`crate::Config`].
#[derive(Debug, Error)]
pub enum ConfigLoadError {
    #[error(
        "no metadata API key configured; set TMDB_API_KEY in the environment, a .env file, or [api].key in popcorn.toml"
    )]
    MissingApiKey,
    #[error("failed to read config file {path}: {source}")]
    ReadFile {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse config file {path}: {source}")]
    ParseFile {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
    #[error("failed to load env file {path}: {source}")]
    EnvFile {
        path: PathBuf,
        #[source]
        source: dotenvy::Error,
    },
    #[error("{key} is not a valid URL ({value}): {source}")]
    InvalidUrl {
        key: &'static str,
        value: String,
        #[source]
        source: url::ParseError,
    },
    #[error("{key} must use http or https, got {scheme}")]
    UnsupportedScheme { key: &'static str, scheme: String },
    #[error("{key} is not a valid duration ({value}): {source}")]
    InvalidDuration {
        key: &'static str,
        value: String,
        #[source]
        source: humantime::DurationError,
    },
    #[error("{key} is not a valid number: {value}")]
    InvalidNumber { key: &'static str, value: String },
    #[error("region must be a two-letter country code, got {value}")]
    InvalidRegion { value: String },
    #[error("unknown retry backoff {value}; expected linear or exponential")]
    InvalidBackoff { value: String },
}

impl ConfigLoadError {
    /// Whether the error is the missing-secret case the UI must surface
    /// as a blocking banner.
    pub fn is_missing_api_key(&self) -> bool {
        matches!(self, Self::MissingApiKey)
    }
}
