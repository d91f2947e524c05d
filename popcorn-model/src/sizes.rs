//! Size tokens understood by the image CDN and the video thumbnail host.

use std::fmt::{Display, Formatter};

/// Poster widths served by the image CDN.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum PosterSize {
    /// 92px width - tiny thumbnail
    W92,
    /// 154px width
    W154,
    /// 185px width - grid card
    W185,
    /// 342px width
    W342,
    /// 500px width - detail view (default)
    #[default]
    W500,
    /// 780px width - high quality poster
    W780,
    /// Original upload
    Original,
}

impl PosterSize {
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::W92 => "w92",
            Self::W154 => "w154",
            Self::W185 => "w185",
            Self::W342 => "w342",
            Self::W500 => "w500",
            Self::W780 => "w780",
            Self::Original => "original",
        }
    }

    /// Get the width for this size
    pub const fn width(&self) -> Option<u16> {
        match self {
            Self::W92 => Some(92),
            Self::W154 => Some(154),
            Self::W185 => Some(185),
            Self::W342 => Some(342),
            Self::W500 => Some(500),
            Self::W780 => Some(780),
            Self::Original => None,
        }
    }
}

/// Backdrop widths served by the image CDN.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum BackdropSize {
    W300,
    W780,
    #[default]
    W1280,
    Original,
}

impl BackdropSize {
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::W300 => "w300",
            Self::W780 => "w780",
            Self::W1280 => "w1280",
            Self::Original => "original",
        }
    }

    pub const fn width(&self) -> Option<u16> {
        match self {
            Self::W300 => Some(300),
            Self::W780 => Some(780),
            Self::W1280 => Some(1280),
            Self::Original => None,
        }
    }
}

/// Person profile image sizes.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ProfileSize {
    W45,
    #[default]
    W185,
    /// 632px tall
    H632,
    Original,
}

impl ProfileSize {
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::W45 => "w45",
            Self::W185 => "w185",
            Self::H632 => "h632",
            Self::Original => "original",
        }
    }
}

/// Trailer thumbnail variants published by the video host.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ThumbnailQuality {
    /// 120x90
    Default,
    /// 320x180
    Medium,
    /// 480x360
    High,
    /// 640x480
    Standard,
    /// 1280x720
    #[default]
    MaxRes,
}

impl ThumbnailQuality {
    pub const fn file_stem(&self) -> &'static str {
        match self {
            Self::Default => "default",
            Self::Medium => "mqdefault",
            Self::High => "hqdefault",
            Self::Standard => "sddefault",
            Self::MaxRes => "maxresdefault",
        }
    }
}

impl Display for PosterSize {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Display for BackdropSize {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Display for ProfileSize {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
