//! Wire shapes of the metadata API.
//!
//! Every optional sub-object defaults when absent so a sparse payload
//! still decodes; the aggregator decides what the defaults mean.

use std::collections::HashMap;

use chrono::{Datelike, NaiveDate};
use popcorn_model::{CastCredit, ContentKind, ContentSummary, Genre, Platform, Review};
use serde::Deserialize;

#[derive(Debug, Clone, Default, Deserialize)]
pub struct PagedResponse<T> {
    #[serde(default)]
    pub page: u32,
    #[serde(default = "Vec::new")]
    pub results: Vec<T>,
    #[serde(default)]
    pub total_pages: u32,
    #[serde(default)]
    pub total_results: u32,
}

/// One element of a list endpoint. Movies carry `title`/`release_date`,
/// shows carry `name`/`first_air_date`, multi search adds `media_type`.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct ListItem {
    pub id: u64,
    pub media_type: Option<String>,
    pub title: Option<String>,
    pub name: Option<String>,
    pub original_title: Option<String>,
    pub original_name: Option<String>,
    pub poster_path: Option<String>,
    pub release_date: Option<String>,
    pub first_air_date: Option<String>,
    pub vote_average: Option<f32>,
    pub genre_ids: Vec<u32>,
}

impl ListItem {
    pub fn has_release_date(&self) -> bool {
        is_present(self.release_date.as_deref())
    }

    pub fn has_first_air_date(&self) -> bool {
        is_present(self.first_air_date.as_deref())
    }

    pub fn into_summary(self, kind: ContentKind) -> ContentSummary {
        let display_title = display_title(
            kind,
            [self.title, self.name, self.original_title, self.original_name],
        );
        let date = match kind {
            ContentKind::Movie => self.release_date.or(self.first_air_date),
            ContentKind::Tv => self.first_air_date.or(self.release_date),
        };
        ContentSummary {
            id: self.id,
            kind,
            display_title,
            poster_path: non_empty(self.poster_path),
            release_year: release_year(date.as_deref()),
            vote_average: self.vote_average.map(clamp_vote),
            genre_ids: self.genre_ids,
        }
    }
}

/// Primary `/{kind}/{id}` payload.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct DetailPayload {
    pub id: u64,
    pub title: Option<String>,
    pub name: Option<String>,
    pub original_title: Option<String>,
    pub original_name: Option<String>,
    pub overview: Option<String>,
    pub poster_path: Option<String>,
    pub backdrop_path: Option<String>,
    pub release_date: Option<String>,
    pub first_air_date: Option<String>,
    pub vote_average: Option<f32>,
    pub genres: Vec<GenrePayload>,
    pub runtime: Option<u32>,
    pub episode_run_time: Vec<u32>,
}

impl DetailPayload {
    pub fn date(&self, kind: ContentKind) -> Option<NaiveDate> {
        let raw = match kind {
            ContentKind::Movie => self.release_date.as_deref(),
            ContentKind::Tv => self.first_air_date.as_deref(),
        };
        parse_date(raw)
    }

    pub fn runtime_minutes(&self, kind: ContentKind) -> Option<u32> {
        let minutes = match kind {
            ContentKind::Movie => self.runtime,
            ContentKind::Tv => self.episode_run_time.first().copied(),
        };
        minutes.filter(|m| *m > 0)
    }

    /// Summary fields of the detail record, tagged with the kind that
    /// resolved.
    pub fn summary(&self, kind: ContentKind) -> ContentSummary {
        let display_title = display_title(
            kind,
            [
                self.title.clone(),
                self.name.clone(),
                self.original_title.clone(),
                self.original_name.clone(),
            ],
        );
        let raw_date = match kind {
            ContentKind::Movie => self.release_date.as_deref(),
            ContentKind::Tv => self.first_air_date.as_deref(),
        };
        ContentSummary {
            id: self.id,
            kind,
            display_title,
            poster_path: non_empty(self.poster_path.clone()),
            release_year: release_year(raw_date),
            vote_average: self.vote_average.map(clamp_vote),
            genre_ids: self.genres.iter().map(|genre| genre.id).collect(),
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct GenrePayload {
    pub id: u32,
    pub name: String,
}

impl From<GenrePayload> for Genre {
    fn from(value: GenrePayload) -> Self {
        Genre {
            id: value.id,
            name: value.name,
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct GenreListPayload {
    pub genres: Vec<GenrePayload>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct CreditsPayload {
    pub cast: Vec<CastPayload>,
    pub crew: Vec<CrewPayload>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct CastPayload {
    pub name: String,
    pub character: Option<String>,
    pub profile_path: Option<String>,
}

impl From<CastPayload> for CastCredit {
    fn from(value: CastPayload) -> Self {
        CastCredit {
            name: value.name,
            character: value.character.unwrap_or_default(),
            profile_path: non_empty(value.profile_path),
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct CrewPayload {
    pub name: String,
    pub job: Option<String>,
    pub department: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct VideosPayload {
    pub results: Vec<VideoPayload>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct VideoPayload {
    pub key: String,
    pub site: String,
    #[serde(rename = "type")]
    pub video_type: String,
    pub name: Option<String>,
}

/// `/watch/providers`: per-region availability keyed by ISO country code.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct WatchProvidersPayload {
    pub results: HashMap<String, RegionProviders>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct RegionProviders {
    pub link: Option<String>,
    pub flatrate: Vec<ProviderPayload>,
    pub rent: Vec<ProviderPayload>,
    pub buy: Vec<ProviderPayload>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct ProviderPayload {
    pub provider_id: u64,
    pub provider_name: String,
    pub logo_path: Option<String>,
}

impl From<ProviderPayload> for Platform {
    fn from(value: ProviderPayload) -> Self {
        Platform {
            provider_id: value.provider_id,
            provider_name: value.provider_name,
            logo_path: non_empty(value.logo_path),
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct ReleaseDatesPayload {
    pub results: Vec<RegionReleases>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct RegionReleases {
    pub iso_3166_1: String,
    pub release_dates: Vec<ReleaseDateEntry>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct ReleaseDateEntry {
    pub certification: Option<String>,
    pub release_date: Option<String>,
    #[serde(rename = "type")]
    pub release_type: Option<u8>,
}

/// `/reviews` entry.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct ReviewPayload {
    pub author: String,
    pub content: String,
    pub url: Option<String>,
    pub author_details: AuthorDetails,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct AuthorDetails {
    pub rating: Option<f32>,
}

impl From<ReviewPayload> for Review {
    fn from(value: ReviewPayload) -> Self {
        Review {
            author: value.author,
            content: value.content.trim().to_string(),
            url: non_empty(value.url),
            rating: value.author_details.rating.map(clamp_vote),
        }
    }
}

fn is_present(raw: Option<&str>) -> bool {
    raw.is_some_and(|value| !value.trim().is_empty())
}

fn non_empty(raw: Option<String>) -> Option<String> {
    raw.filter(|value| !value.trim().is_empty())
}

fn clamp_vote(vote: f32) -> f32 {
    vote.clamp(0.0, 10.0)
}

fn display_title(kind: ContentKind, candidates: [Option<String>; 4]) -> String {
    let [title, name, original_title, original_name] = candidates;
    let ordered = match kind {
        ContentKind::Movie => [title, original_title, name, original_name],
        ContentKind::Tv => [name, original_name, title, original_title],
    };
    ordered
        .into_iter()
        .flatten()
        .find(|value| !value.trim().is_empty())
        .unwrap_or_default()
}

/// Parse an upstream `YYYY-MM-DD` date; empty strings are absent.
pub fn parse_date(raw: Option<&str>) -> Option<NaiveDate> {
    let raw = raw?.trim();
    NaiveDate::parse_from_str(raw, "%Y-%m-%d").ok()
}

/// Year of an upstream date string, tolerating partial dates like `"1999"`.
pub fn release_year(raw: Option<&str>) -> Option<i32> {
    let raw = raw?.trim();
    if raw.is_empty() {
        return None;
    }
    parse_date(Some(raw))
        .map(|date| date.year())
        .or_else(|| raw.split('-').next().and_then(|year| year.parse().ok()))
}
