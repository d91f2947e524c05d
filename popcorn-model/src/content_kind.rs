use std::fmt::{Display, Formatter};
use std::str::FromStr;

/// Discriminates the two endpoint families of the metadata API.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum ContentKind {
    /// Feature film
    #[default]
    Movie,
    /// Television show
    Tv,
}

impl ContentKind {
    /// Both kinds, movie first.
    pub const ALL: [ContentKind; 2] = [Self::Movie, Self::Tv];

    /// The other endpoint family. Used when an id turns out to belong to
    /// the opposite kind.
    pub const fn opposite(self) -> Self {
        match self {
            Self::Movie => Self::Tv,
            Self::Tv => Self::Movie,
        }
    }

    /// Path segment used by the upstream API (`/movie/...`, `/tv/...`).
    pub const fn path_segment(self) -> &'static str {
        match self {
            Self::Movie => "movie",
            Self::Tv => "tv",
        }
    }

    pub const fn is_movie(self) -> bool {
        matches!(self, Self::Movie)
    }
}

impl Display for ContentKind {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            ContentKind::Movie => write!(f, "Movie"),
            ContentKind::Tv => write!(f, "TV"),
        }
    }
}

/// Returned when a string is neither `movie` nor `tv`.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown content kind: {0}")]
pub struct ParseContentKindError(pub String);

impl FromStr for ContentKind {
    type Err = ParseContentKindError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "movie" | "movies" => Ok(Self::Movie),
            "tv" | "show" | "series" => Ok(Self::Tv),
            other => Err(ParseContentKindError(other.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn opposite_is_an_involution() {
        for kind in ContentKind::ALL {
            assert_ne!(kind, kind.opposite());
            assert_eq!(kind, kind.opposite().opposite());
        }
    }

    #[test]
    fn parses_upstream_and_loose_spellings() {
        assert_eq!("movie".parse::<ContentKind>(), Ok(ContentKind::Movie));
        assert_eq!(" TV ".parse::<ContentKind>(), Ok(ContentKind::Tv));
        assert!("person".parse::<ContentKind>().is_err());
    }
}
