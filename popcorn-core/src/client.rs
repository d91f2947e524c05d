use std::sync::Arc;

use popcorn_config::Config;
use popcorn_model::{ContentDetail, ContentKind, Genre, Query};

use crate::aggregator::DetailAggregator;
use crate::cache::{DetailCache, DetailService};
use crate::catalog::{CatalogFetcher, CatalogPage};
use crate::error::Result;
use crate::links::{ImageLinks, VideoLinks};
use crate::providers::http::HttpClient;
use crate::providers::transport::ApiTransport;

/// Everything a front end needs, wired from one [`Config`].
#[derive(Debug, Clone)]
pub struct PopcornClient {
    catalog: CatalogFetcher,
    details: DetailService,
    images: ImageLinks,
    videos: VideoLinks,
}

impl PopcornClient {
    /// Client backed by the real HTTP transport.
    pub fn from_config(config: &Config) -> Result<Self> {
        let transport = Arc::new(HttpClient::new(config)?);
        Ok(Self::with_transport(transport, config))
    }

    /// Client over any transport; used with scripted transports in tests.
    pub fn with_transport(transport: Arc<dyn ApiTransport>, config: &Config) -> Self {
        let aggregator = DetailAggregator::new(Arc::clone(&transport), config.region());
        let cache = config
            .cache
            .is_enabled()
            .then(|| DetailCache::new(config.cache.detail_capacity));
        Self {
            catalog: CatalogFetcher::new(transport),
            details: DetailService::new(aggregator, cache),
            images: ImageLinks::new(&config.images),
            videos: VideoLinks::new(&config.video),
        }
    }

    pub async fn fetch_page(&self, query: &Query) -> Result<CatalogPage> {
        self.catalog.fetch_page(query).await
    }

    pub async fn fetch_detail(&self, id: u64, kind: ContentKind) -> Result<ContentDetail> {
        self.details.fetch_detail(id, kind).await
    }

    pub async fn fetch_genres(&self, kind: ContentKind) -> Result<Vec<Genre>> {
        self.catalog.fetch_genres(kind).await
    }

    pub async fn check_connection(&self) -> Result<()> {
        self.catalog.check_connection().await
    }

    pub fn images(&self) -> &ImageLinks {
        &self.images
    }

    pub fn videos(&self) -> &VideoLinks {
        &self.videos
    }
}
