use std::sync::Arc;

use moka::future::Cache;
use popcorn_model::{ContentDetail, ContentKind};
use tracing::debug;

use crate::aggregator::DetailAggregator;
use crate::error::Result;

type DetailKey = (u64, ContentKind);

/// Bounded in-memory store of aggregated details keyed by `(id, kind)`.
#[derive(Clone)]
pub struct DetailCache {
    inner: Cache<DetailKey, Arc<ContentDetail>>,
}

impl std::fmt::Debug for DetailCache {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DetailCache")
            .field("entries", &self.inner.entry_count())
            .finish()
    }
}

impl DetailCache {
    pub fn new(capacity: u64) -> Self {
        Self {
            inner: Cache::builder().max_capacity(capacity).build(),
        }
    }

    pub async fn get(&self, id: u64, kind: ContentKind) -> Option<Arc<ContentDetail>> {
        self.inner.get(&(id, kind)).await
    }

    /// Store `detail` under the key it was requested with and, when the
    /// kind fell back, under the key it resolved to.
    pub async fn insert(&self, requested: DetailKey, detail: Arc<ContentDetail>) {
        let resolved = detail.summary.key();
        if resolved != requested {
            self.inner.insert(resolved, Arc::clone(&detail)).await;
        }
        self.inner.insert(requested, detail).await;
    }

    pub fn invalidate_all(&self) {
        self.inner.invalidate_all();
    }
}

/// Detail lookups with optional memoization in front of the aggregator.
///
/// Only successful results are stored, so a cached entry is always a
/// value the aggregator actually produced.
#[derive(Debug, Clone)]
pub struct DetailService {
    aggregator: DetailAggregator,
    cache: Option<DetailCache>,
}

impl DetailService {
    pub fn new(aggregator: DetailAggregator, cache: Option<DetailCache>) -> Self {
        Self { aggregator, cache }
    }

    pub fn uncached(aggregator: DetailAggregator) -> Self {
        Self::new(aggregator, None)
    }

    pub async fn fetch_detail(&self, id: u64, kind: ContentKind) -> Result<ContentDetail> {
        let Some(cache) = &self.cache else {
            return self.aggregator.fetch_detail(id, kind).await;
        };

        if let Some(hit) = cache.get(id, kind).await {
            debug!(id, kind = %kind, "detail cache hit");
            return Ok(ContentDetail::clone(&hit));
        }

        let detail = self.aggregator.fetch_detail(id, kind).await?;
        cache.insert((id, kind), Arc::new(detail.clone())).await;
        Ok(detail)
    }
}
