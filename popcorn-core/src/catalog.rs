use std::sync::Arc;

use popcorn_model::{ContentKind, ContentSummary, Genre, Query, QueryMode};
use tracing::debug;

use crate::classify::classify;
use crate::error::Result;
use crate::providers::endpoints::{POPULARITY_DESC, Resource};
use crate::providers::payloads::{GenreListPayload, ListItem, PagedResponse};
use crate::providers::transport::{ApiTransport, get_typed};

/// One page of list results plus upstream paging metadata.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct CatalogPage {
    pub page: u32,
    pub total_pages: u32,
    pub total_results: u32,
    pub items: Vec<ContentSummary>,
}

/// Paginated discovery, search, trending and chart listings.
#[derive(Clone)]
pub struct CatalogFetcher {
    transport: Arc<dyn ApiTransport>,
}

impl std::fmt::Debug for CatalogFetcher {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CatalogFetcher").finish_non_exhaustive()
    }
}

impl CatalogFetcher {
    pub fn new(transport: Arc<dyn ApiTransport>) -> Self {
        Self { transport }
    }

    /// Fetch the page described by `query`.
    ///
    /// Items without a poster are kept. Multi search drops results that
    /// are not movies or shows.
    pub async fn fetch_page(&self, query: &Query) -> Result<CatalogPage> {
        let request = resource_for(query).request()?;
        let response: PagedResponse<ListItem> =
            get_typed(self.transport.as_ref(), &request).await?;

        let items: Vec<ContentSummary> = match query.mode() {
            QueryMode::SearchAll(_) => response
                .results
                .into_iter()
                .filter_map(|item| classify(&item).map(|kind| item.into_summary(kind)))
                .collect(),
            _ => response
                .results
                .into_iter()
                .map(|item| item.into_summary(query.kind()))
                .collect(),
        };
        debug!(
            path = request.path(),
            page = query.page(),
            count = items.len(),
            "catalog page fetched"
        );

        Ok(CatalogPage {
            page: if response.page == 0 { query.page() } else { response.page },
            total_pages: response.total_pages,
            total_results: response.total_results,
            items,
        })
    }

    /// Live genre list for `kind`.
    pub async fn fetch_genres(&self, kind: ContentKind) -> Result<Vec<Genre>> {
        let request = Resource::GenreList { kind }.request()?;
        let payload: GenreListPayload =
            get_typed(self.transport.as_ref(), &request).await?;
        Ok(payload.genres.into_iter().map(Genre::from).collect())
    }

    /// Probe the upstream with a cheap authenticated request.
    pub async fn check_connection(&self) -> Result<()> {
        let request = Resource::Configuration.request()?;
        self.transport.get_json(&request).await.map(|_| ())
    }
}

/// Upstream resource serving `query`.
pub fn resource_for(query: &Query) -> Resource {
    let kind = query.kind();
    let page = query.page();
    match query.mode() {
        QueryMode::DefaultPopular => Resource::Discover {
            kind,
            sort_by: Some(POPULARITY_DESC.to_string()),
            genre: None,
            page,
        },
        QueryMode::SearchText(text) => Resource::Search {
            kind,
            text: text.clone(),
            page,
        },
        QueryMode::GenreFilter(genre) => Resource::Discover {
            kind,
            sort_by: None,
            genre: Some(*genre),
            page,
        },
        QueryMode::Trending(window) => Resource::Trending {
            kind,
            window: *window,
            page,
        },
        QueryMode::Chart(chart) => Resource::Chart {
            kind,
            chart: *chart,
            page,
        },
        QueryMode::SearchAll(text) => Resource::SearchMulti {
            text: text.clone(),
            page,
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use popcorn_model::{Chart, TimeWindow};

    fn rendered(query: &Query) -> (String, String) {
        let request = resource_for(query).request().unwrap();
        (request.path().to_string(), request.query_string())
    }

    #[test]
    fn modes_map_to_endpoints() {
        let base = Query::popular(ContentKind::Movie).with_page(2);
        assert_eq!(
            rendered(&base),
            ("/discover/movie".into(), "sort_by=popularity.desc&page=2".into())
        );
        assert_eq!(
            rendered(&base.clone().search("Matrix")),
            ("/search/movie".into(), "query=Matrix&page=1".into())
        );
        assert_eq!(
            rendered(&base.clone().filter_genre(878).with_kind(ContentKind::Tv)),
            ("/discover/tv".into(), "with_genres=878&page=1".into())
        );
        assert_eq!(
            rendered(&base.clone().with_mode(QueryMode::Trending(TimeWindow::Day))),
            ("/trending/movie/day".into(), "page=1".into())
        );
        assert_eq!(
            rendered(&base.clone().with_mode(QueryMode::Chart(Chart::Upcoming))),
            ("/movie/upcoming".into(), "page=1".into())
        );
        assert_eq!(
            rendered(&base.with_mode(QueryMode::search_all("dune"))),
            ("/search/multi".into(), "query=dune&page=1".into())
        );
    }
}
