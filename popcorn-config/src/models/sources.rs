use std::collections::HashMap;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::constants::{
    ENV_API_BASE_URL, ENV_API_KEY, ENV_CONFIG_PATH, ENV_DETAIL_CACHE_CAPACITY,
    ENV_HTTP_TIMEOUT, ENV_IMAGE_BASE_URL, ENV_REGION, ENV_RETRY_BACKOFF,
    ENV_RETRY_BASE_DELAY, ENV_RETRY_LIMIT, ENV_VIDEO_EMBED_BASE_URL,
    ENV_VIDEO_THUMBNAIL_BASE_URL, ENV_VIDEO_WATCH_BASE_URL,
};
use crate::util::non_blank;

/// Raw configuration as defined in a TOML file.
#[derive(Debug, Default, Clone, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub struct FileConfig {
    #[serde(default)]
    pub api: FileApiConfig,
    #[serde(default)]
    pub images: FileImageConfig,
    #[serde(default)]
    pub video: FileVideoConfig,
    #[serde(default)]
    pub catalog: FileCatalogConfig,
    #[serde(default)]
    pub http: FileHttpConfig,
    #[serde(default)]
    pub retry: FileRetryConfig,
    #[serde(default)]
    pub cache: FileCacheConfig,
}

#[derive(Debug, Default, Clone, Deserialize, Serialize)]
pub struct FileApiConfig {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub key: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub base_url: Option<String>,
}

#[derive(Debug, Default, Clone, Deserialize, Serialize)]
pub struct FileImageConfig {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub base_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub poster_placeholder: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub backdrop_placeholder: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub profile_placeholder: Option<String>,
}

#[derive(Debug, Default, Clone, Deserialize, Serialize)]
pub struct FileVideoConfig {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub watch_base_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub embed_base_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub thumbnail_base_url: Option<String>,
}

#[derive(Debug, Default, Clone, Deserialize, Serialize)]
pub struct FileCatalogConfig {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub region: Option<String>,
}

#[derive(Debug, Default, Clone, Deserialize, Serialize)]
pub struct FileHttpConfig {
    /// Humantime duration such as `"10s"`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub timeout: Option<String>,
}

#[derive(Debug, Default, Clone, Deserialize, Serialize)]
pub struct FileRetryConfig {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub limit: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub base_delay: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub backoff: Option<String>,
}

#[derive(Debug, Default, Clone, Deserialize, Serialize)]
pub struct FileCacheConfig {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub detail_capacity: Option<u64>,
}

/// Environment-derived configuration values.
///
/// Values are kept as raw strings; the loader parses and validates them
/// so a malformed variable is reported instead of silently ignored.
#[derive(Debug, Default, Clone)]
pub struct EnvConfig {
    pub api_key: Option<String>,
    pub api_base_url: Option<String>,
    pub image_base_url: Option<String>,
    pub video_watch_base_url: Option<String>,
    pub video_embed_base_url: Option<String>,
    pub video_thumbnail_base_url: Option<String>,
    pub region: Option<String>,
    pub http_timeout: Option<String>,
    pub retry_limit: Option<String>,
    pub retry_base_delay: Option<String>,
    pub retry_backoff: Option<String>,
    pub detail_cache_capacity: Option<String>,
    pub config_path: Option<PathBuf>,
}

impl EnvConfig {
    /// Snapshot of the process environment.
    pub fn gather() -> Self {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Builds from explicit key/value pairs instead of the process
    /// environment.
    pub fn from_pairs<I, K, V>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        let vars: HashMap<String, String> = pairs
            .into_iter()
            .map(|(key, value)| (key.into(), value.into()))
            .collect();
        Self::from_lookup(|name| vars.get(name).cloned())
    }

    /// Builds from any variable lookup. Blank values count as unset.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let var = |name: &str| lookup(name).and_then(non_blank);
        Self {
            api_key: var(ENV_API_KEY),
            api_base_url: var(ENV_API_BASE_URL),
            image_base_url: var(ENV_IMAGE_BASE_URL),
            video_watch_base_url: var(ENV_VIDEO_WATCH_BASE_URL),
            video_embed_base_url: var(ENV_VIDEO_EMBED_BASE_URL),
            video_thumbnail_base_url: var(ENV_VIDEO_THUMBNAIL_BASE_URL),
            region: var(ENV_REGION),
            http_timeout: var(ENV_HTTP_TIMEOUT),
            retry_limit: var(ENV_RETRY_LIMIT),
            retry_base_delay: var(ENV_RETRY_BASE_DELAY),
            retry_backoff: var(ENV_RETRY_BACKOFF),
            detail_cache_capacity: var(ENV_DETAIL_CACHE_CAPACITY),
            config_path: var(ENV_CONFIG_PATH).map(PathBuf::from),
        }
    }
}
