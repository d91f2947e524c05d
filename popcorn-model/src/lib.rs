//! Content data model shared across PopcornHub crates.
//!
//! Everything here is plain data: list summaries, aggregated detail
//! records, the active list query, genre tables and image size tokens.
//! Network access and normalization live in `popcorn-core`.
#![allow(missing_docs)]

pub mod content_kind;
pub mod detail;
pub mod genres;
pub mod query;
pub mod sizes;
pub mod summary;

pub use content_kind::{ContentKind, ParseContentKindError};
pub use detail::{CastCredit, ContentDetail, Genre, Platform, Review};
pub use genres::{genre_name, genre_names, standard_genres};
pub use query::{Chart, Query, QueryMode, TimeWindow};
pub use sizes::{BackdropSize, PosterSize, ProfileSize, ThumbnailQuality};
pub use summary::ContentSummary;

/// Placeholder used when a movie has no director or a show has no creator.
pub const NOT_AVAILABLE: &str = "Not Available";

/// Certification shown when no regional release rating exists.
pub const NOT_RATED: &str = "Not Rated";

/// Upper bound on the number of cast entries kept on a detail record.
pub const MAX_CAST: usize = 15;

/// Upper bound on similar titles kept on a detail record.
pub const MAX_SIMILAR: usize = 8;

/// Upper bound on recommended titles kept on a detail record.
pub const MAX_RECOMMENDATIONS: usize = 6;

/// Highest page the upstream list endpoints will serve.
pub const MAX_PAGE: u32 = 500;
