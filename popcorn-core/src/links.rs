//! URL builders for the image CDN and the trailer host.

use popcorn_config::{ImageConfig, VideoConfig};
use popcorn_model::{BackdropSize, PosterSize, ProfileSize, ThumbnailQuality};

/// Builds image CDN URLs, falling back to local placeholders.
#[derive(Debug, Clone)]
pub struct ImageLinks {
    base_url: String,
    poster_placeholder: String,
    backdrop_placeholder: String,
    profile_placeholder: String,
}

impl ImageLinks {
    pub fn new(config: &ImageConfig) -> Self {
        Self {
            base_url: config.base_url.trim_end_matches('/').to_string(),
            poster_placeholder: config.poster_placeholder.clone(),
            backdrop_placeholder: config.backdrop_placeholder.clone(),
            profile_placeholder: config.profile_placeholder.clone(),
        }
    }

    pub fn poster_url(&self, path: Option<&str>, size: PosterSize) -> String {
        self.sized(path, size.as_str())
            .unwrap_or_else(|| self.poster_placeholder.clone())
    }

    pub fn backdrop_url(&self, path: Option<&str>, size: BackdropSize) -> String {
        self.sized(path, size.as_str())
            .unwrap_or_else(|| self.backdrop_placeholder.clone())
    }

    pub fn profile_url(&self, path: Option<&str>, size: ProfileSize) -> String {
        self.sized(path, size.as_str())
            .unwrap_or_else(|| self.profile_placeholder.clone())
    }

    /// Original-resolution URL, or `None` without a path.
    pub fn original_url(&self, path: Option<&str>) -> Option<String> {
        self.sized(path, "original")
    }

    fn sized(&self, path: Option<&str>, size: &str) -> Option<String> {
        let path = path.map(str::trim).filter(|p| !p.is_empty())?;
        let separator = if path.starts_with('/') { "" } else { "/" };
        Some(format!("{}/{size}{separator}{path}", self.base_url))
    }
}

/// Builds trailer URLs from a video id.
#[derive(Debug, Clone)]
pub struct VideoLinks {
    watch_base_url: String,
    embed_base_url: String,
    thumbnail_base_url: String,
}

impl VideoLinks {
    pub fn new(config: &VideoConfig) -> Self {
        Self {
            watch_base_url: config.watch_base_url.trim_end_matches('/').to_string(),
            embed_base_url: config.embed_base_url.trim_end_matches('/').to_string(),
            thumbnail_base_url: config
                .thumbnail_base_url
                .trim_end_matches('/')
                .to_string(),
        }
    }

    pub fn watch_url(&self, key: Option<&str>) -> Option<String> {
        let key = video_key(key)?;
        Some(format!(
            "{}?v={}",
            self.watch_base_url,
            urlencoding::encode(key)
        ))
    }

    pub fn embed_url(&self, key: Option<&str>) -> Option<String> {
        let key = video_key(key)?;
        Some(format!("{}/{key}", self.embed_base_url))
    }

    pub fn thumbnail_url(&self, key: Option<&str>, quality: ThumbnailQuality) -> Option<String> {
        let key = video_key(key)?;
        Some(format!(
            "{}/{key}/{}.jpg",
            self.thumbnail_base_url,
            quality.file_stem()
        ))
    }
}

fn video_key(key: Option<&str>) -> Option<&str> {
    key.map(str::trim).filter(|k| !k.is_empty())
}
