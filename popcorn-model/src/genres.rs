//! Built-in copy of the upstream's standard genre lists.
//!
//! The live lists can be fetched through `popcorn-core`; these tables let
//! list views label genre ids without an extra round trip.

use crate::{ContentKind, Genre};

const MOVIE_GENRES: &[(u32, &str)] = &[
    (28, "Action"),
    (12, "Adventure"),
    (16, "Animation"),
    (35, "Comedy"),
    (80, "Crime"),
    (99, "Documentary"),
    (18, "Drama"),
    (10751, "Family"),
    (14, "Fantasy"),
    (36, "History"),
    (27, "Horror"),
    (10402, "Music"),
    (9648, "Mystery"),
    (10749, "Romance"),
    (878, "Science Fiction"),
    (10770, "TV Movie"),
    (53, "Thriller"),
    (10752, "War"),
    (37, "Western"),
];

const TV_GENRES: &[(u32, &str)] = &[
    (10759, "Action & Adventure"),
    (16, "Animation"),
    (35, "Comedy"),
    (80, "Crime"),
    (99, "Documentary"),
    (18, "Drama"),
    (10751, "Family"),
    (10762, "Kids"),
    (9648, "Mystery"),
    (10763, "News"),
    (10764, "Reality"),
    (10765, "Sci-Fi & Fantasy"),
    (10766, "Soap"),
    (10767, "Talk"),
    (10768, "War & Politics"),
    (37, "Western"),
];

fn table(kind: ContentKind) -> &'static [(u32, &'static str)] {
    match kind {
        ContentKind::Movie => MOVIE_GENRES,
        ContentKind::Tv => TV_GENRES,
    }
}

/// Standard genres for `kind`, in the order the upstream lists them.
pub fn standard_genres(kind: ContentKind) -> Vec<Genre> {
    table(kind)
        .iter()
        .map(|(id, name)| Genre {
            id: *id,
            name: (*name).to_string(),
        })
        .collect()
}

pub fn genre_name(id: u32, kind: ContentKind) -> Option<&'static str> {
    table(kind)
        .iter()
        .find(|(genre_id, _)| *genre_id == id)
        .map(|(_, name)| *name)
}

/// Names for `ids`, skipping any id unknown to the table.
pub fn genre_names(ids: &[u32], kind: ContentKind) -> Vec<&'static str> {
    ids.iter().filter_map(|id| genre_name(*id, kind)).collect()
}
