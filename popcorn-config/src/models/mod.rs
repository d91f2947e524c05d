pub mod secret;
pub mod sources;

use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;
use std::time::Duration;

use crate::constants::{
    DEFAULT_API_BASE_URL, DEFAULT_BACKDROP_PLACEHOLDER,
    DEFAULT_DETAIL_CACHE_CAPACITY, DEFAULT_HTTP_TIMEOUT,
    DEFAULT_IMAGE_BASE_URL, DEFAULT_POSTER_PLACEHOLDER,
    DEFAULT_PROFILE_PLACEHOLDER, DEFAULT_REGION, DEFAULT_RETRY_BASE_DELAY,
    DEFAULT_RETRY_LIMIT, DEFAULT_VIDEO_EMBED_BASE_URL,
    DEFAULT_VIDEO_THUMBNAIL_BASE_URL, DEFAULT_VIDEO_WATCH_BASE_URL,
};
use secret::ApiKey;

/// Fully resolved, immutable runtime configuration.
#[derive(Debug, Clone)]
pub struct Config {
    pub api: ApiConfig,
    pub images: ImageConfig,
    pub video: VideoConfig,
    pub catalog: CatalogConfig,
    pub http: HttpConfig,
    pub retry: RetryConfig,
    pub cache: CacheConfig,
    pub metadata: ConfigMetadata,
}

impl Config {
    /// Defaults for everything except the key. Used by programmatic
    /// callers and tests that do not go through [`crate::ConfigLoader`].
    pub fn with_api_key(api_key: ApiKey) -> Self {
        Self {
            api: ApiConfig {
                api_key,
                base_url: DEFAULT_API_BASE_URL.to_string(),
            },
            images: ImageConfig::default(),
            video: VideoConfig::default(),
            catalog: CatalogConfig::default(),
            http: HttpConfig::default(),
            retry: RetryConfig::default(),
            cache: CacheConfig::default(),
            metadata: ConfigMetadata::default(),
        }
    }

    /// Points the metadata API at another base URL, e.g. a mock server.
    pub fn with_api_base_url(mut self, base_url: impl AsRef<str>) -> Self {
        self.api.base_url = trim_base(base_url.as_ref());
        self
    }

    pub fn region(&self) -> &str {
        &self.catalog.region
    }
}

/// Metadata API endpoint and credentials.
#[derive(Debug, Clone)]
pub struct ApiConfig {
    pub api_key: ApiKey,
    /// Base URL without trailing slash
    pub base_url: String,
}

/// Image CDN settings.
#[derive(Debug, Clone)]
pub struct ImageConfig {
    pub base_url: String,
    pub poster_placeholder: String,
    pub backdrop_placeholder: String,
    pub profile_placeholder: String,
}

impl Default for ImageConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_IMAGE_BASE_URL.to_string(),
            poster_placeholder: DEFAULT_POSTER_PLACEHOLDER.to_string(),
            backdrop_placeholder: DEFAULT_BACKDROP_PLACEHOLDER.to_string(),
            profile_placeholder: DEFAULT_PROFILE_PLACEHOLDER.to_string(),
        }
    }
}

/// Video platform URL bases used for trailers.
#[derive(Debug, Clone)]
pub struct VideoConfig {
    pub watch_base_url: String,
    pub embed_base_url: String,
    pub thumbnail_base_url: String,
}

impl Default for VideoConfig {
    fn default() -> Self {
        Self {
            watch_base_url: DEFAULT_VIDEO_WATCH_BASE_URL.to_string(),
            embed_base_url: DEFAULT_VIDEO_EMBED_BASE_URL.to_string(),
            thumbnail_base_url: DEFAULT_VIDEO_THUMBNAIL_BASE_URL.to_string(),
        }
    }
}

#[derive(Debug, Clone)]
pub struct CatalogConfig {
    /// Upper-case ISO 3166-1 code selecting watch providers and
    /// certifications
    pub region: String,
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            region: DEFAULT_REGION.to_string(),
        }
    }
}

#[derive(Debug, Clone)]
pub struct HttpConfig {
    /// Ceiling applied to every request, connect included
    pub timeout: Duration,
}

impl Default for HttpConfig {
    fn default() -> Self {
        Self {
            timeout: DEFAULT_HTTP_TIMEOUT,
        }
    }
}

/// Delay growth between automatic retries.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum BackoffKind {
    /// `base × n` for the n-th retry
    #[default]
    Linear,
    /// `base × 2^(n-1)` for the n-th retry
    Exponential,
}

impl FromStr for BackoffKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "linear" => Ok(Self::Linear),
            "exponential" | "exp" => Ok(Self::Exponential),
            other => Err(other.to_string()),
        }
    }
}

impl fmt::Display for BackoffKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BackoffKind::Linear => f.write_str("linear"),
            BackoffKind::Exponential => f.write_str("exponential"),
        }
    }
}

#[derive(Debug, Clone)]
pub struct RetryConfig {
    /// Automatic retries per failing fetch; 0 disables them
    pub limit: u32,
    pub base_delay: Duration,
    pub backoff: BackoffKind,
}

impl Default for RetryConfig {
    fn default() -> Self {
        Self {
            limit: DEFAULT_RETRY_LIMIT,
            base_delay: DEFAULT_RETRY_BASE_DELAY,
            backoff: BackoffKind::default(),
        }
    }
}

#[derive(Debug, Clone)]
pub struct CacheConfig {
    /// Maximum cached detail records; 0 disables the cache
    pub detail_capacity: u64,
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self {
            detail_capacity: DEFAULT_DETAIL_CACHE_CAPACITY,
        }
    }
}

impl CacheConfig {
    pub fn is_enabled(&self) -> bool {
        self.detail_capacity > 0
    }
}

/// Where the effective configuration came from.
#[derive(Debug, Clone, Default)]
pub struct ConfigMetadata {
    pub config_path: Option<PathBuf>,
    pub env_file: Option<PathBuf>,
}

pub(crate) fn trim_base(raw: &str) -> String {
    raw.trim().trim_end_matches('/').to_string()
}
