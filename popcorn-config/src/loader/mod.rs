pub mod error;

use std::fs;
use std::path::{Path, PathBuf};

use tracing::{debug, info};

use crate::constants::{
    DEFAULT_CONFIG_PATHS, ENV_API_BASE_URL, ENV_DETAIL_CACHE_CAPACITY,
    ENV_HTTP_TIMEOUT, ENV_IMAGE_BASE_URL, ENV_RETRY_BASE_DELAY,
    ENV_RETRY_LIMIT, ENV_VIDEO_EMBED_BASE_URL, ENV_VIDEO_THUMBNAIL_BASE_URL,
    ENV_VIDEO_WATCH_BASE_URL,
};
use crate::models::secret::ApiKey;
use crate::models::sources::{EnvConfig, FileConfig};
use crate::models::{
    BackoffKind, CacheConfig, CatalogConfig, Config,
    ConfigMetadata, HttpConfig, ImageConfig, RetryConfig, VideoConfig,
};
use crate::util::{parse_base_url, parse_duration, parse_number, parse_region};
use crate::validation::{ConfigWarnings, collect_warnings};
use error::ConfigLoadError;

/// Result of a successful load.
#[derive(Debug)]
pub struct ConfigLoad {
    pub config: Config,
    pub warnings: ConfigWarnings,
}

/// Layers defaults, an optional TOML file and environment variables into a
/// [`Config`]. Later layers win.
#[derive(Debug, Default)]
pub struct ConfigLoader {
    config_path: Option<PathBuf>,
    env_file: Option<PathBuf>,
    skip_dotenv: bool,
    env: Option<EnvConfig>,
}

impl ConfigLoader {
    pub fn new() -> Self {
        Self::default()
    }

    /// Use this TOML file instead of probing the default locations.
    pub fn with_config_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.config_path = Some(path.into());
        self
    }

    /// Seed the environment from this file instead of `./.env`.
    pub fn with_env_file(mut self, path: impl Into<PathBuf>) -> Self {
        self.env_file = Some(path.into());
        self
    }

    pub fn without_dotenv(mut self) -> Self {
        self.skip_dotenv = true;
        self
    }

    /// Use pre-gathered variables. The process environment and any `.env`
    /// file are ignored.
    pub fn with_env(mut self, env: EnvConfig) -> Self {
        self.env = Some(env);
        self
    }

    pub fn load(self) -> Result<ConfigLoad, ConfigLoadError> {
        let ConfigLoader {
            config_path,
            env_file,
            skip_dotenv,
            env,
        } = self;

        let mut metadata = ConfigMetadata::default();
        let env = match env {
            Some(env) => env,
            None => {
                if !skip_dotenv {
                    metadata.env_file = load_env_file(env_file.as_deref())?;
                }
                EnvConfig::gather()
            }
        };

        let path = config_path
            .or_else(|| env.config_path.clone())
            .or_else(discover_config_path);
        let file = match path.as_deref() {
            Some(path) => read_config_file(path)?,
            None => FileConfig::default(),
        };
        metadata.config_path = path;

        let config = merge(file, env, metadata)?;
        let warnings = collect_warnings(&config);
        for warning in warnings.iter() {
            tracing::warn!("{warning}");
        }
        info!(
            region = %config.catalog.region,
            config_file = ?config.metadata.config_path,
            "configuration loaded"
        );
        Ok(ConfigLoad { config, warnings })
    }
}

fn load_env_file(path: Option<&Path>) -> Result<Option<PathBuf>, ConfigLoadError> {
    match path {
        Some(path) => dotenvy::from_path(path)
            .map(|_| Some(path.to_path_buf()))
            .map_err(|source| ConfigLoadError::EnvFile {
                path: path.to_path_buf(),
                source,
            }),
        None => match dotenvy::dotenv() {
            Ok(found) => Ok(Some(found)),
            Err(err) if err.not_found() => Ok(None),
            Err(source) => Err(ConfigLoadError::EnvFile {
                path: PathBuf::from(".env"),
                source,
            }),
        },
    }
}

fn discover_config_path() -> Option<PathBuf> {
    DEFAULT_CONFIG_PATHS
        .iter()
        .map(PathBuf::from)
        .find(|candidate| candidate.is_file())
}

fn read_config_file(path: &Path) -> Result<FileConfig, ConfigLoadError> {
    debug!(path = %path.display(), "reading config file");
    let raw = fs::read_to_string(path).map_err(|source| {
        ConfigLoadError::ReadFile {
            path: path.to_path_buf(),
            source,
        }
    })?;
    toml::from_str(&raw).map_err(|source| ConfigLoadError::ParseFile {
        path: path.to_path_buf(),
        source,
    })
}

fn merge(
    file: FileConfig,
    env: EnvConfig,
    metadata: ConfigMetadata,
) -> Result<Config, ConfigLoadError> {
    let api_key = env
        .api_key
        .or(file.api.key)
        .and_then(ApiKey::new)
        .ok_or(ConfigLoadError::MissingApiKey)?;

    let mut config = Config::with_api_key(api_key);
    config.metadata = metadata;

    if let Some(raw) = env.api_base_url.or(file.api.base_url) {
        config.api.base_url = parse_base_url(ENV_API_BASE_URL, &raw)?;
    }

    let defaults = ImageConfig::default();
    config.images = ImageConfig {
        base_url: match env.image_base_url.or(file.images.base_url) {
            Some(raw) => parse_base_url(ENV_IMAGE_BASE_URL, &raw)?,
            None => defaults.base_url,
        },
        poster_placeholder: file
            .images
            .poster_placeholder
            .unwrap_or(defaults.poster_placeholder),
        backdrop_placeholder: file
            .images
            .backdrop_placeholder
            .unwrap_or(defaults.backdrop_placeholder),
        profile_placeholder: file
            .images
            .profile_placeholder
            .unwrap_or(defaults.profile_placeholder),
    };

    let defaults = VideoConfig::default();
    config.video = VideoConfig {
        watch_base_url: url_or(
            ENV_VIDEO_WATCH_BASE_URL,
            env.video_watch_base_url.or(file.video.watch_base_url),
            defaults.watch_base_url,
        )?,
        embed_base_url: url_or(
            ENV_VIDEO_EMBED_BASE_URL,
            env.video_embed_base_url.or(file.video.embed_base_url),
            defaults.embed_base_url,
        )?,
        thumbnail_base_url: url_or(
            ENV_VIDEO_THUMBNAIL_BASE_URL,
            env.video_thumbnail_base_url.or(file.video.thumbnail_base_url),
            defaults.thumbnail_base_url,
        )?,
    };

    if let Some(raw) = env.region.or(file.catalog.region) {
        config.catalog = CatalogConfig {
            region: parse_region(&raw)?,
        };
    }

    if let Some(raw) = env.http_timeout.or(file.http.timeout) {
        config.http = HttpConfig {
            timeout: parse_duration(ENV_HTTP_TIMEOUT, &raw)?,
        };
    }

    let mut retry = RetryConfig::default();
    if let Some(raw) = env.retry_limit {
        retry.limit = parse_number(ENV_RETRY_LIMIT, &raw)?;
    } else if let Some(limit) = file.retry.limit {
        retry.limit = limit;
    }
    if let Some(raw) = env.retry_base_delay.or(file.retry.base_delay) {
        retry.base_delay = parse_duration(ENV_RETRY_BASE_DELAY, &raw)?;
    }
    if let Some(raw) = env.retry_backoff.or(file.retry.backoff) {
        retry.backoff = raw
            .parse::<BackoffKind>()
            .map_err(|value| ConfigLoadError::InvalidBackoff { value })?;
    }
    config.retry = retry;

    if let Some(raw) = env.detail_cache_capacity {
        config.cache = CacheConfig {
            detail_capacity: parse_number(ENV_DETAIL_CACHE_CAPACITY, &raw)?,
        };
    } else if let Some(detail_capacity) = file.cache.detail_capacity {
        config.cache = CacheConfig { detail_capacity };
    }

    Ok(config)
}

fn url_or(
    key: &'static str,
    raw: Option<String>,
    default: String,
) -> Result<String, ConfigLoadError> {
    match raw {
        Some(raw) => parse_base_url(key, &raw),
        None => Ok(default),
    }
}
