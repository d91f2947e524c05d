//! Kind detection for polymorphic results.
//!
//! Kind-specific endpoints tag their results directly; only multi search
//! needs to decide per item. The precedence is:
//!
//! 1. an explicit `media_type` of `movie` or `tv`,
//! 2. `person` (or any other explicit non-content type) is not content,
//! 3. a `first_air_date` marks a show,
//! 4. anything else is a movie.

use popcorn_model::ContentKind;

use crate::providers::payloads::ListItem;

/// Classify one list item. `None` means the item is not content.
pub fn classify(item: &ListItem) -> Option<ContentKind> {
    match item.media_type.as_deref().map(str::trim) {
        Some("movie") => Some(ContentKind::Movie),
        Some("tv") => Some(ContentKind::Tv),
        Some(other) if !other.is_empty() => None,
        _ if item.has_first_air_date() => Some(ContentKind::Tv),
        _ => Some(ContentKind::Movie),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn item(media_type: Option<&str>, release: Option<&str>, first_air: Option<&str>) -> ListItem {
        ListItem {
            id: 1,
            media_type: media_type.map(str::to_string),
            release_date: release.map(str::to_string),
            first_air_date: first_air.map(str::to_string),
            ..ListItem::default()
        }
    }

    #[test]
    fn explicit_media_type_wins_over_dates() {
        assert_eq!(
            classify(&item(Some("movie"), None, Some("2011-04-17"))),
            Some(ContentKind::Movie)
        );
        assert_eq!(
            classify(&item(Some("tv"), Some("1999-03-31"), None)),
            Some(ContentKind::Tv)
        );
    }

    #[test]
    fn people_are_not_content() {
        assert_eq!(classify(&item(Some("person"), None, None)), None);
    }

    #[test]
    fn date_presence_decides_without_media_type() {
        assert_eq!(classify(&item(None, None, Some("2011-04-17"))), Some(ContentKind::Tv));
        assert_eq!(classify(&item(None, Some("1999-03-31"), None)), Some(ContentKind::Movie));
        assert_eq!(classify(&item(None, None, Some(""))), Some(ContentKind::Movie));
    }

    #[test]
    fn defaults_to_movie() {
        assert_eq!(classify(&item(None, None, None)), Some(ContentKind::Movie));
        assert_eq!(classify(&item(Some(""), None, None)), Some(ContentKind::Movie));
    }
}
