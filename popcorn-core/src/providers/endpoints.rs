use std::fmt::Write as _;

use popcorn_model::{Chart, ContentKind, TimeWindow};

use crate::error::{FetchError, Result};

/// Sort order used by the default listing.
pub const POPULARITY_DESC: &str = "popularity.desc";

/// A logical upstream resource.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Resource {
    /// `/discover/{kind}`
    Discover {
        kind: ContentKind,
        sort_by: Option<String>,
        genre: Option<u32>,
        page: u32,
    },
    /// `/search/{kind}`
    Search {
        kind: ContentKind,
        text: String,
        page: u32,
    },
    /// `/search/multi`
    SearchMulti { text: String, page: u32 },
    /// `/trending/{kind}/{window}`
    Trending {
        kind: ContentKind,
        window: TimeWindow,
        page: u32,
    },
    /// `/{kind}/{chart}`
    Chart {
        kind: ContentKind,
        chart: Chart,
        page: u32,
    },
    /// `/{kind}/{id}`
    Detail { kind: ContentKind, id: u64 },
    Credits { kind: ContentKind, id: u64 },
    Videos { kind: ContentKind, id: u64 },
    WatchProviders { kind: ContentKind, id: u64 },
    Similar { kind: ContentKind, id: u64 },
    Recommendations { kind: ContentKind, id: u64 },
    /// First page of user reviews
    Reviews { kind: ContentKind, id: u64 },
    /// `/movie/{id}/release_dates`; movies only
    ReleaseDates { id: u64 },
    GenreList { kind: ContentKind },
    Configuration,
}

impl Resource {
    /// Short name for logs.
    pub fn name(&self) -> &'static str {
        match self {
            Resource::Discover { .. } => "discover",
            Resource::Search { .. } => "search",
            Resource::SearchMulti { .. } => "search_multi",
            Resource::Trending { .. } => "trending",
            Resource::Chart { .. } => "chart",
            Resource::Detail { .. } => "detail",
            Resource::Credits { .. } => "credits",
            Resource::Videos { .. } => "videos",
            Resource::WatchProviders { .. } => "watch_providers",
            Resource::Similar { .. } => "similar",
            Resource::Recommendations { .. } => "recommendations",
            Resource::Reviews { .. } => "reviews",
            Resource::ReleaseDates { .. } => "release_dates",
            Resource::GenreList { .. } => "genre_list",
            Resource::Configuration => "configuration",
        }
    }

    /// Resolve to a concrete path and query parameters.
    ///
    /// Fails without touching the network for requests the upstream
    /// cannot serve: blank search text and charts offered only for the
    /// other kind.
    pub fn request(&self) -> Result<ApiRequest> {
        let request = match self {
            Resource::Discover {
                kind,
                sort_by,
                genre,
                page,
            } => {
                let mut request =
                    ApiRequest::new(format!("/discover/{}", kind.path_segment()));
                if let Some(sort_by) = sort_by {
                    request = request.with_param("sort_by", sort_by);
                }
                if let Some(genre) = genre {
                    request = request.with_param("with_genres", genre.to_string());
                }
                request.with_page(*page)
            }
            Resource::Search { kind, text, page } => {
                ApiRequest::new(format!("/search/{}", kind.path_segment()))
                    .with_param("query", search_term(text)?)
                    .with_page(*page)
            }
            Resource::SearchMulti { text, page } => ApiRequest::new("/search/multi")
                .with_param("query", search_term(text)?)
                .with_page(*page),
            Resource::Trending { kind, window, page } => ApiRequest::new(format!(
                "/trending/{}/{}",
                kind.path_segment(),
                window.as_str()
            ))
            .with_page(*page),
            Resource::Chart { kind, chart, page } => {
                if !chart.supports(*kind) {
                    return Err(FetchError::InvalidRequest(format!(
                        "{} chart is not available for {kind}",
                        chart.path_segment()
                    )));
                }
                ApiRequest::new(format!(
                    "/{}/{}",
                    kind.path_segment(),
                    chart.path_segment()
                ))
                .with_page(*page)
            }
            Resource::Detail { kind, id } => {
                ApiRequest::new(format!("/{}/{id}", kind.path_segment()))
            }
            Resource::Credits { kind, id } => {
                ApiRequest::new(format!("/{}/{id}/credits", kind.path_segment()))
            }
            Resource::Videos { kind, id } => {
                ApiRequest::new(format!("/{}/{id}/videos", kind.path_segment()))
            }
            Resource::WatchProviders { kind, id } => ApiRequest::new(format!(
                "/{}/{id}/watch/providers",
                kind.path_segment()
            )),
            Resource::Similar { kind, id } => {
                ApiRequest::new(format!("/{}/{id}/similar", kind.path_segment()))
            }
            Resource::Recommendations { kind, id } => ApiRequest::new(format!(
                "/{}/{id}/recommendations",
                kind.path_segment()
            )),
            Resource::Reviews { kind, id } => {
                ApiRequest::new(format!("/{}/{id}/reviews", kind.path_segment()))
            }
            Resource::ReleaseDates { id } => {
                ApiRequest::new(format!("/movie/{id}/release_dates"))
            }
            Resource::GenreList { kind } => {
                ApiRequest::new(format!("/genre/{}/list", kind.path_segment()))
            }
            Resource::Configuration => ApiRequest::new("/configuration"),
        };
        Ok(request)
    }
}

fn search_term(text: &str) -> Result<&str> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        Err(FetchError::InvalidRequest("search text is empty".to_string()))
    } else {
        Ok(trimmed)
    }
}

/// Concrete path plus unencoded query parameters, minus the API key.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiRequest {
    path: String,
    params: Vec<(String, String)>,
}

impl ApiRequest {
    pub fn new(path: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            params: Vec::new(),
        }
    }

    /// Add a parameter. Values are kept verbatim and only encoded when
    /// the query string is rendered.
    pub fn with_param(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.params.push((key.into(), value.into()));
        self
    }

    /// Set `page`, replacing any previous value. Pages start at 1.
    pub fn with_page(mut self, page: u32) -> Self {
        self.params.retain(|(key, _)| key != "page");
        self.params.push(("page".to_string(), page.max(1).to_string()));
        self
    }

    pub fn path(&self) -> &str {
        &self.path
    }

    pub fn params(&self) -> &[(String, String)] {
        &self.params
    }

    pub fn param(&self, key: &str) -> Option<&str> {
        self.params
            .iter()
            .find(|(name, _)| name == key)
            .map(|(_, value)| value.as_str())
    }

    /// `key=value` pairs joined by `&`, percent-encoded.
    pub fn query_string(&self) -> String {
        let mut out = String::new();
        for (index, (key, value)) in self.params.iter().enumerate() {
            if index > 0 {
                out.push('&');
            }
            let _ = write!(
                out,
                "{}={}",
                urlencoding::encode(key),
                urlencoding::encode(value)
            );
        }
        out
    }
}
