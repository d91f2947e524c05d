use std::time::Duration;

use crate::ConfigLoadError;

/// `Some(trimmed)` unless the value is empty after trimming.
pub fn non_blank(raw: String) -> Option<String> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}

/// Parse a humantime duration (`"750ms"`, `"10s"`, `"1m 30s"`).
pub fn parse_duration(
    key: &'static str,
    raw: &str,
) -> Result<Duration, ConfigLoadError> {
    humantime::parse_duration(raw.trim()).map_err(|source| {
        ConfigLoadError::InvalidDuration {
            key,
            value: raw.to_string(),
            source,
        }
    })
}

pub fn parse_number<T: std::str::FromStr>(
    key: &'static str,
    raw: &str,
) -> Result<T, ConfigLoadError> {
    raw.trim()
        .parse()
        .map_err(|_| ConfigLoadError::InvalidNumber {
            key,
            value: raw.to_string(),
        })
}

/// Validate an absolute http(s) URL and strip any trailing slash.
pub fn parse_base_url(
    key: &'static str,
    raw: &str,
) -> Result<String, ConfigLoadError> {
    let parsed = url::Url::parse(raw.trim()).map_err(|source| {
        ConfigLoadError::InvalidUrl {
            key,
            value: raw.to_string(),
            source,
        }
    })?;
    if !matches!(parsed.scheme(), "http" | "https") {
        return Err(ConfigLoadError::UnsupportedScheme {
            key,
            scheme: parsed.scheme().to_string(),
        });
    }
    Ok(crate::models::trim_base(raw))
}

/// Two ASCII letters, normalised to upper case.
pub fn parse_region(raw: &str) -> Result<String, ConfigLoadError> {
    let trimmed = raw.trim();
    if trimmed.len() == 2 && trimmed.chars().all(|c| c.is_ascii_alphabetic()) {
        Ok(trimmed.to_ascii_uppercase())
    } else {
        Err(ConfigLoadError::InvalidRegion {
            value: raw.to_string(),
        })
    }
}
