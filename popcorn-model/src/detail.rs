use chrono::NaiveDate;

use crate::{ContentKind, ContentSummary, NOT_AVAILABLE};

/// A billed cast member.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CastCredit {
    pub name: String,
    /// Character played; empty when the upstream omits it
    pub character: String,
    pub profile_path: Option<String>,
}

/// A streaming service offering the title in the configured region.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Platform {
    pub provider_id: u64,
    pub provider_name: String,
    pub logo_path: Option<String>,
}

/// Named genre as returned by detail and genre-list endpoints.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Genre {
    pub id: u32,
    pub name: String,
}

/// A user review attached to a title.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Review {
    pub author: String,
    pub content: String,
    pub url: Option<String>,
    /// Author's own rating out of 10, when given
    pub rating: Option<f32>,
}

/// Aggregated single-item record shown in the detail view.
///
/// Produced by joining the primary detail request with its dependent
/// requests. Every field sourced from a dependent request has a
/// well-defined default so a partial upstream failure never leaves the
/// record half-built.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ContentDetail {
    /// List-level fields; `kind` is the kind that actually resolved
    #[cfg_attr(feature = "serde", serde(flatten))]
    pub summary: ContentSummary,
    /// Synopsis, possibly empty
    pub overview: String,
    pub backdrop_path: Option<String>,
    /// Full release (movie) or first-air (tv) date
    pub release_date: Option<NaiveDate>,
    /// Director for movies, creator for shows
    pub director: String,
    /// At most [`crate::MAX_CAST`] entries in upstream billing order
    pub cast: Vec<CastCredit>,
    /// YouTube video id of the first official trailer
    pub trailer_key: Option<String>,
    /// Flat-rate providers for the configured region
    pub platforms: Vec<Platform>,
    /// Regional certification; only ever set for movies
    pub certification: Option<String>,
    pub runtime_minutes: Option<u32>,
    pub genres: Vec<Genre>,
    /// Titles the upstream considers similar, at most [`crate::MAX_SIMILAR`]
    pub similar: Vec<ContentSummary>,
    /// Recommended titles with a poster, at most
    /// [`crate::MAX_RECOMMENDATIONS`]
    pub recommendations: Vec<ContentSummary>,
    /// First page of user reviews
    pub reviews: Vec<Review>,
}

impl ContentDetail {
    /// A detail record carrying only summary data, with every aggregated
    /// field at its default.
    pub fn from_summary(summary: ContentSummary) -> Self {
        Self {
            summary,
            overview: String::new(),
            backdrop_path: None,
            release_date: None,
            director: NOT_AVAILABLE.to_string(),
            cast: Vec::new(),
            trailer_key: None,
            platforms: Vec::new(),
            certification: None,
            runtime_minutes: None,
            genres: Vec::new(),
            similar: Vec::new(),
            recommendations: Vec::new(),
            reviews: Vec::new(),
        }
    }

    pub fn id(&self) -> u64 {
        self.summary.id
    }

    pub fn kind(&self) -> ContentKind {
        self.summary.kind
    }

    pub fn title(&self) -> &str {
        &self.summary.display_title
    }

    /// Label for the `director` field as it applies to this kind.
    pub fn director_label(&self) -> &'static str {
        match self.kind() {
            ContentKind::Movie => "Director",
            ContentKind::Tv => "Creator",
        }
    }
}
