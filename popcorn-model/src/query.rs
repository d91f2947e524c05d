use crate::ContentKind;

/// Trending aggregation window.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum TimeWindow {
    Day,
    #[default]
    Week,
}

impl TimeWindow {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Day => "day",
            Self::Week => "week",
        }
    }
}

/// Curated upstream lists addressed as `/{kind}/{chart}`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum Chart {
    Popular,
    TopRated,
    /// Movie only
    Upcoming,
    /// Movie only
    NowPlaying,
    /// TV only
    OnTheAir,
    /// TV only
    AiringToday,
}

impl Chart {
    pub const fn path_segment(self) -> &'static str {
        match self {
            Self::Popular => "popular",
            Self::TopRated => "top_rated",
            Self::Upcoming => "upcoming",
            Self::NowPlaying => "now_playing",
            Self::OnTheAir => "on_the_air",
            Self::AiringToday => "airing_today",
        }
    }

    /// Whether the upstream serves this chart for `kind`.
    pub const fn supports(self, kind: ContentKind) -> bool {
        match self {
            Self::Popular | Self::TopRated => true,
            Self::Upcoming | Self::NowPlaying => kind.is_movie(),
            Self::OnTheAir | Self::AiringToday => !kind.is_movie(),
        }
    }
}

/// What the list view is currently showing.
///
/// Search text and genre filter are variants of one enum, so at most one
/// of them can be active.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum QueryMode {
    /// Discover sorted by popularity, descending
    #[default]
    DefaultPopular,
    /// Kind-specific title search
    SearchText(String),
    /// Discover constrained to one genre id
    GenreFilter(u32),
    Trending(TimeWindow),
    Chart(Chart),
    /// Multi search across movies and shows
    SearchAll(String),
}

impl QueryMode {
    /// Search mode for `text`, or the default listing when the text is
    /// blank.
    pub fn search(text: &str) -> Self {
        let trimmed = text.trim();
        if trimmed.is_empty() {
            Self::DefaultPopular
        } else {
            Self::SearchText(trimmed.to_string())
        }
    }

    pub fn search_all(text: &str) -> Self {
        let trimmed = text.trim();
        if trimmed.is_empty() {
            Self::DefaultPopular
        } else {
            Self::SearchAll(trimmed.to_string())
        }
    }

    pub fn search_text(&self) -> Option<&str> {
        match self {
            Self::SearchText(text) | Self::SearchAll(text) => Some(text),
            _ => None,
        }
    }

    pub fn genre(&self) -> Option<u32> {
        match self {
            Self::GenreFilter(id) => Some(*id),
            _ => None,
        }
    }
}

/// The active list-fetch intent.
///
/// Every transition that changes mode or kind lands back on page 1; the
/// page number is never below 1.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Query {
    mode: QueryMode,
    kind: ContentKind,
    page: u32,
}

impl Default for Query {
    fn default() -> Self {
        Self::popular(ContentKind::Movie)
    }
}

impl Query {
    pub fn new(mode: QueryMode, kind: ContentKind) -> Self {
        Self {
            mode,
            kind,
            page: 1,
        }
    }

    pub fn popular(kind: ContentKind) -> Self {
        Self::new(QueryMode::DefaultPopular, kind)
    }

    pub fn mode(&self) -> &QueryMode {
        &self.mode
    }

    pub fn kind(&self) -> ContentKind {
        self.kind
    }

    pub fn page(&self) -> u32 {
        self.page
    }

    /// Same mode and kind on `page`, clamped to at least 1.
    pub fn with_page(mut self, page: u32) -> Self {
        self.page = page.max(1);
        self
    }

    /// Replaces the mode. Any active search or genre filter is dropped.
    pub fn with_mode(mut self, mode: QueryMode) -> Self {
        self.mode = mode;
        self.page = 1;
        self
    }

    pub fn with_kind(mut self, kind: ContentKind) -> Self {
        self.kind = kind;
        self.page = 1;
        self
    }

    pub fn search(self, text: &str) -> Self {
        self.with_mode(QueryMode::search(text))
    }

    pub fn filter_genre(self, genre_id: u32) -> Self {
        self.with_mode(QueryMode::GenreFilter(genre_id))
    }

    pub fn next_page(self) -> Self {
        let page = self.page.saturating_add(1);
        self.with_page(page)
    }

    pub fn previous_page(self) -> Self {
        let page = self.page.saturating_sub(1);
        self.with_page(page)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn on_page_five() -> Query {
        Query::popular(ContentKind::Movie).with_page(5)
    }

    #[test]
    fn search_and_genre_reset_to_first_page() {
        assert_eq!(on_page_five().search("Matrix").page(), 1);
        assert_eq!(on_page_five().filter_genre(28).page(), 1);
        assert_eq!(on_page_five().with_kind(ContentKind::Tv).page(), 1);
    }

    #[test]
    fn search_replaces_genre_filter() {
        let query = on_page_five().filter_genre(28).search("Alien");
        assert_eq!(query.mode().genre(), None);
        assert_eq!(query.mode().search_text(), Some("Alien"));

        let query = query.filter_genre(878);
        assert_eq!(query.mode().search_text(), None);
        assert_eq!(query.mode().genre(), Some(878));
    }

    #[test]
    fn blank_search_falls_back_to_popular() {
        let query = on_page_five().search("   ");
        assert_eq!(query.mode(), &QueryMode::DefaultPopular);
    }

    #[test]
    fn previous_page_never_goes_below_one() {
        let query = Query::default().previous_page().previous_page();
        assert_eq!(query.page(), 1);
        assert_eq!(query.with_page(0).page(), 1);
        assert_eq!(Query::default().next_page().page(), 2);
    }

    #[test]
    fn charts_respect_kind() {
        assert!(Chart::Upcoming.supports(ContentKind::Movie));
        assert!(!Chart::Upcoming.supports(ContentKind::Tv));
        assert!(Chart::AiringToday.supports(ContentKind::Tv));
        assert!(Chart::TopRated.supports(ContentKind::Tv));
    }
}
