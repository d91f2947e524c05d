use crate::ContentKind;

/// One catalog list entry.
///
/// Built from a single element of a list endpoint response and never
/// mutated afterwards; the browser drops the whole page when the query
/// changes.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ContentSummary {
    /// Upstream id, unique within `kind`
    pub id: u64,
    /// Endpoint family the record was fetched from
    pub kind: ContentKind,
    /// `title` for movies, `name` for shows
    pub display_title: String,
    /// Relative poster path; `None` renders a placeholder
    pub poster_path: Option<String>,
    /// Year taken from the release or first-air date
    pub release_year: Option<i32>,
    /// Vote average in `[0, 10]`
    pub vote_average: Option<f32>,
    /// Upstream genre ids in response order
    pub genre_ids: Vec<u32>,
}

impl ContentSummary {
    pub fn new(id: u64, kind: ContentKind, display_title: impl Into<String>) -> Self {
        Self {
            id,
            kind,
            display_title: display_title.into(),
            poster_path: None,
            release_year: None,
            vote_average: None,
            genre_ids: Vec::new(),
        }
    }

    /// Key used to address this item in detail lookups and caches.
    pub fn key(&self) -> (u64, ContentKind) {
        (self.id, self.kind)
    }
}
