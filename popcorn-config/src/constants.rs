//! Default values and environment variable names.

use std::time::Duration;

pub const DEFAULT_API_BASE_URL: &str = "https://api.themoviedb.org/3";
pub const DEFAULT_IMAGE_BASE_URL: &str = "https://image.tmdb.org/t/p";
pub const DEFAULT_VIDEO_WATCH_BASE_URL: &str = "https://www.youtube.com/watch";
pub const DEFAULT_VIDEO_EMBED_BASE_URL: &str = "https://www.youtube.com/embed";
pub const DEFAULT_VIDEO_THUMBNAIL_BASE_URL: &str = "https://img.youtube.com/vi";

pub const DEFAULT_POSTER_PLACEHOLDER: &str = "/placeholder-poster.jpg";
pub const DEFAULT_BACKDROP_PLACEHOLDER: &str = "/placeholder-backdrop.jpg";
pub const DEFAULT_PROFILE_PLACEHOLDER: &str = "/placeholder-profile.jpg";

pub const DEFAULT_REGION: &str = "IN";
pub const DEFAULT_HTTP_TIMEOUT: Duration = Duration::from_secs(10);
pub const DEFAULT_RETRY_LIMIT: u32 = 3;
pub const DEFAULT_RETRY_BASE_DELAY: Duration = Duration::from_secs(1);
pub const DEFAULT_DETAIL_CACHE_CAPACITY: u64 = 64;

/// Candidate config files probed, in order, when no path is given.
pub const DEFAULT_CONFIG_PATHS: &[&str] = &["popcorn.toml", "config/popcorn.toml"];

pub const ENV_API_KEY: &str = "TMDB_API_KEY";
pub const ENV_API_BASE_URL: &str = "TMDB_BASE_URL";
pub const ENV_IMAGE_BASE_URL: &str = "TMDB_IMAGE_BASE_URL";
pub const ENV_VIDEO_WATCH_BASE_URL: &str = "YOUTUBE_WATCH_BASE_URL";
pub const ENV_VIDEO_EMBED_BASE_URL: &str = "YOUTUBE_EMBED_BASE_URL";
pub const ENV_VIDEO_THUMBNAIL_BASE_URL: &str = "YOUTUBE_THUMBNAIL_BASE_URL";
pub const ENV_REGION: &str = "POPCORN_REGION";
pub const ENV_HTTP_TIMEOUT: &str = "POPCORN_HTTP_TIMEOUT";
pub const ENV_RETRY_LIMIT: &str = "POPCORN_RETRY_LIMIT";
pub const ENV_RETRY_BASE_DELAY: &str = "POPCORN_RETRY_BASE_DELAY";
pub const ENV_RETRY_BACKOFF: &str = "POPCORN_RETRY_BACKOFF";
pub const ENV_DETAIL_CACHE_CAPACITY: &str = "POPCORN_DETAIL_CACHE_CAPACITY";
pub const ENV_CONFIG_PATH: &str = "POPCORN_CONFIG_PATH";
