use std::sync::Arc;

use popcorn_model::{
    CastCredit, ContentDetail, ContentKind, ContentSummary, MAX_CAST,
    MAX_RECOMMENDATIONS, MAX_SIMILAR, NOT_AVAILABLE, NOT_RATED, Platform, Review,
};
use serde::de::DeserializeOwned;
use tracing::{debug, info, warn};

use crate::error::{FetchError, Result};
use crate::providers::endpoints::Resource;
use crate::providers::payloads::{
    CreditsPayload, CrewPayload, DetailPayload, ListItem, PagedResponse,
    ReleaseDatesPayload, ReviewPayload, VideoPayload, VideosPayload,
    WatchProvidersPayload,
};
use crate::providers::transport::{ApiTransport, get_typed};

/// Joins the primary detail request with its dependent requests into one
/// [`ContentDetail`].
#[derive(Clone)]
pub struct DetailAggregator {
    transport: Arc<dyn ApiTransport>,
    region: String,
}

impl std::fmt::Debug for DetailAggregator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DetailAggregator")
            .field("region", &self.region)
            .finish_non_exhaustive()
    }
}

impl DetailAggregator {
    /// `region` selects watch providers and certifications.
    pub fn new(transport: Arc<dyn ApiTransport>, region: impl Into<String>) -> Self {
        Self {
            transport,
            region: region.into(),
        }
    }

    pub fn region(&self) -> &str {
        &self.region
    }

    /// Fetch and normalize one item.
    ///
    /// A 404 on the primary request re-runs the whole fan-out once with
    /// the opposite kind. A second 404 yields [`FetchError::NotFound`];
    /// any other primary failure yields [`FetchError::Aggregation`].
    /// Dependent request failures only reset their own fields.
    pub async fn fetch_detail(&self, id: u64, kind: ContentKind) -> Result<ContentDetail> {
        match self.fetch_as(id, kind).await {
            Ok(detail) => Ok(detail),
            Err(err) if err.is_not_found_status() => {
                let fallback = kind.opposite();
                info!(id, requested = %kind, fallback = %fallback, "detail not found, retrying with opposite kind");
                match self.fetch_as(id, fallback).await {
                    Ok(detail) => Ok(detail),
                    Err(err) if err.is_not_found_status() => Err(FetchError::NotFound { id }),
                    Err(err) => Err(FetchError::Aggregation(Box::new(err))),
                }
            }
            Err(err) => Err(FetchError::Aggregation(Box::new(err))),
        }
    }

    async fn fetch_as(&self, id: u64, kind: ContentKind) -> Result<ContentDetail> {
        let (primary, credits, videos, providers, releases, similar, recommended, reviews) =
            tokio::join!(
                self.get::<DetailPayload>(Resource::Detail { kind, id }),
                self.get::<CreditsPayload>(Resource::Credits { kind, id }),
                self.get::<VideosPayload>(Resource::Videos { kind, id }),
                self.get::<WatchProvidersPayload>(Resource::WatchProviders { kind, id }),
                async {
                    match kind {
                        ContentKind::Movie => {
                            Some(self.get::<ReleaseDatesPayload>(Resource::ReleaseDates { id }).await)
                        }
                        ContentKind::Tv => None,
                    }
                },
                self.get::<PagedResponse<ListItem>>(Resource::Similar { kind, id }),
                self.get::<PagedResponse<ListItem>>(Resource::Recommendations { kind, id }),
                self.get::<PagedResponse<ReviewPayload>>(Resource::Reviews { kind, id }),
            );

        let primary = primary?;
        debug!(id, kind = %kind, "primary detail resolved");

        let credits = self.degrade(id, kind, "credits", credits);
        let videos = self.degrade(id, kind, "videos", videos);
        let providers = self.degrade(id, kind, "watch_providers", providers);
        let similar = self.degrade(id, kind, "similar", similar);
        let recommended = self.degrade(id, kind, "recommendations", recommended);
        let reviews = self.degrade(id, kind, "reviews", reviews);
        let certification = releases.map(|releases| {
            let releases = self.degrade(id, kind, "release_dates", releases);
            certification(&releases, &self.region)
        });

        let mut detail = ContentDetail::from_summary(primary.summary(kind));
        detail.overview = primary.overview.clone().unwrap_or_default();
        detail.backdrop_path = primary.backdrop_path.clone().filter(|p| !p.trim().is_empty());
        detail.release_date = primary.date(kind);
        detail.runtime_minutes = primary.runtime_minutes(kind);
        detail.genres = primary.genres.into_iter().map(Into::into).collect();
        detail.director = director(&credits.crew, kind);
        detail.cast = top_cast(credits.cast.into_iter().map(CastCredit::from));
        detail.trailer_key = trailer_key(&videos.results);
        detail.platforms = platforms(providers, &self.region);
        detail.certification = certification;
        detail.similar = similar_titles(similar.results, kind);
        detail.recommendations = recommendations(recommended.results, kind);
        detail.reviews = reviews.results.into_iter().map(Review::from).collect();
        Ok(detail)
    }

    async fn get<T: DeserializeOwned>(&self, resource: Resource) -> Result<T> {
        let request = resource.request()?;
        get_typed(self.transport.as_ref(), &request).await
    }

    fn degrade<T: Default>(
        &self,
        id: u64,
        kind: ContentKind,
        resource: &'static str,
        result: Result<T>,
    ) -> T {
        result.unwrap_or_else(|err| {
            warn!(id, kind = %kind, resource, error = %err, "dependent request failed; using defaults");
            T::default()
        })
    }
}

/// Name of the first crew member credited as `Director` (movies) or
/// `Creator` (shows).
pub fn director(crew: &[CrewPayload], kind: ContentKind) -> String {
    let job = match kind {
        ContentKind::Movie => "Director",
        ContentKind::Tv => "Creator",
    };
    crew.iter()
        .find(|member| member.job.as_deref() == Some(job))
        .map(|member| member.name.clone())
        .filter(|name| !name.trim().is_empty())
        .unwrap_or_else(|| NOT_AVAILABLE.to_string())
}

/// First YouTube video typed `Trailer`.
pub fn trailer_key(videos: &[VideoPayload]) -> Option<String> {
    videos
        .iter()
        .find(|video| video.video_type == "Trailer" && video.site == "YouTube")
        .map(|video| video.key.clone())
        .filter(|key| !key.is_empty())
}

/// Flat-rate providers offered in `region`, in upstream order.
pub fn platforms(mut providers: WatchProvidersPayload, region: &str) -> Vec<Platform> {
    providers
        .results
        .remove(region)
        .map(|region| region.flatrate.into_iter().map(Platform::from).collect())
        .unwrap_or_default()
}

/// Certification from the first release entry of the first record for
/// `region`, or [`NOT_RATED`].
pub fn certification(releases: &ReleaseDatesPayload, region: &str) -> String {
    releases
        .results
        .iter()
        .find(|entry| entry.iso_3166_1 == region)
        .and_then(|entry| entry.release_dates.first())
        .and_then(|release| release.certification.as_deref())
        .map(str::trim)
        .filter(|cert| !cert.is_empty())
        .unwrap_or(NOT_RATED)
        .to_string()
}

/// The first [`MAX_SIMILAR`] related titles, tagged with the parent's kind.
pub fn similar_titles(items: Vec<ListItem>, kind: ContentKind) -> Vec<ContentSummary> {
    items
        .into_iter()
        .take(MAX_SIMILAR)
        .map(|item| item.into_summary(kind))
        .collect()
}

/// Recommended titles that have a poster, capped at [`MAX_RECOMMENDATIONS`].
pub fn recommendations(items: Vec<ListItem>, kind: ContentKind) -> Vec<ContentSummary> {
    items
        .into_iter()
        .map(|item| item.into_summary(kind))
        .filter(|summary| summary.poster_path.is_some())
        .take(MAX_RECOMMENDATIONS)
        .collect()
}

/// Keep the first [`MAX_CAST`] entries without reordering.
pub fn top_cast(cast: impl IntoIterator<Item = CastCredit>) -> Vec<CastCredit> {
    cast.into_iter().take(MAX_CAST).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::providers::transport::MockApiTransport;
    use mockall::predicate::always;
    use serde_json::json;

    fn movie_payload() -> serde_json::Value {
        json!({
            "id": 603,
            "title": "The Matrix",
            "overview": "A hacker learns the truth.",
            "release_date": "1999-03-31",
            "runtime": 136,
            "vote_average": 8.2,
            "genres": [{"id": 28, "name": "Action"}]
        })
    }

    #[tokio::test]
    async fn dependent_failures_degrade_to_defaults() {
        let mut transport = MockApiTransport::new();
        transport
            .expect_get_json()
            .with(always())
            .returning(|request| match request.path() {
                "/movie/603" => Ok(movie_payload()),
                _ => Err(FetchError::Http { status: 500 }),
            });

        let aggregator = DetailAggregator::new(Arc::new(transport), "IN");
        let detail = aggregator.fetch_detail(603, ContentKind::Movie).await.unwrap();

        assert_eq!(detail.title(), "The Matrix");
        assert_eq!(detail.director, NOT_AVAILABLE);
        assert!(detail.cast.is_empty());
        assert_eq!(detail.trailer_key, None);
        assert!(detail.platforms.is_empty());
        assert_eq!(detail.certification.as_deref(), Some(NOT_RATED));
        assert_eq!(detail.runtime_minutes, Some(136));
        assert_eq!(detail.summary.release_year, Some(1999));
        assert_eq!(detail.summary.genre_ids, vec![28]);
        assert!(detail.similar.is_empty());
        assert!(detail.recommendations.is_empty());
        assert!(detail.reviews.is_empty());
    }

    #[tokio::test]
    async fn tv_skips_release_dates() {
        let mut transport = MockApiTransport::new();
        transport
            .expect_get_json()
            .withf(|request| request.path().contains("release_dates"))
            .never();
        transport
            .expect_get_json()
            .returning(|request| match request.path() {
                "/tv/1399" => Ok(json!({"id": 1399, "name": "Game of Thrones"})),
                _ => Ok(json!({})),
            });

        let aggregator = DetailAggregator::new(Arc::new(transport), "IN");
        let detail = aggregator.fetch_detail(1399, ContentKind::Tv).await.unwrap();

        assert_eq!(detail.kind(), ContentKind::Tv);
        assert_eq!(detail.certification, None);
        assert_eq!(detail.director, NOT_AVAILABLE);
    }

    #[tokio::test]
    async fn primary_server_error_is_an_aggregation_failure() {
        let mut transport = MockApiTransport::new();
        transport
            .expect_get_json()
            .returning(|_| Err(FetchError::Http { status: 503 }));

        let aggregator = DetailAggregator::new(Arc::new(transport), "IN");
        let err = aggregator.fetch_detail(7, ContentKind::Movie).await.unwrap_err();

        assert_eq!(err, FetchError::Aggregation(Box::new(FetchError::Http { status: 503 })));
        assert!(err.is_recoverable());
    }

    #[test]
    fn director_requires_kind_specific_job() {
        let crew = vec![
            CrewPayload {
                name: "Bill Pope".into(),
                job: Some("Director of Photography".into()),
                department: None,
            },
            CrewPayload {
                name: "Lana Wachowski".into(),
                job: Some("Director".into()),
                department: None,
            },
        ];
        assert_eq!(director(&crew, ContentKind::Movie), "Lana Wachowski");
        assert_eq!(director(&crew, ContentKind::Tv), NOT_AVAILABLE);
    }

    #[test]
    fn trailer_must_be_youtube_trailer() {
        let video = |key: &str, site: &str, kind: &str| VideoPayload {
            key: key.into(),
            site: site.into(),
            video_type: kind.into(),
            name: None,
        };
        let videos = vec![
            video("teaser", "YouTube", "Teaser"),
            video("vimeo", "Vimeo", "Trailer"),
            video("m8e-FF8MsqU", "YouTube", "Trailer"),
            video("later", "YouTube", "Trailer"),
        ];
        assert_eq!(trailer_key(&videos).as_deref(), Some("m8e-FF8MsqU"));
        assert_eq!(trailer_key(&videos[..2]), None);
    }

    #[test]
    fn certification_uses_first_record_of_region() {
        let releases: ReleaseDatesPayload = serde_json::from_value(json!({
            "results": [
                {"iso_3166_1": "US", "release_dates": [{"certification": "R"}]},
                {"iso_3166_1": "IN", "release_dates": [
                    {"certification": "A"},
                    {"certification": "UA"}
                ]}
            ]
        }))
        .unwrap();
        assert_eq!(certification(&releases, "IN"), "A");
        assert_eq!(certification(&releases, "US"), "R");
        assert_eq!(certification(&releases, "GB"), NOT_RATED);
    }

    #[test]
    fn empty_certification_is_not_rated() {
        let releases: ReleaseDatesPayload = serde_json::from_value(json!({
            "results": [{"iso_3166_1": "IN", "release_dates": [{"certification": ""}]}]
        }))
        .unwrap();
        assert_eq!(certification(&releases, "IN"), NOT_RATED);
    }
}
