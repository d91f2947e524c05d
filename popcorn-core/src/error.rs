use thiserror::Error;

/// Failures surfaced by the HTTP client, the catalog fetcher and the
/// aggregator.
///
/// `Clone` so the browser can keep the last error on screen while a retry
/// is pending.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FetchError {
    /// No response: connection failure, TLS failure or timeout
    #[error("network error: {0}")]
    Network(String),

    /// Response status outside 2xx
    #[error("HTTP error: status {status}")]
    Http { status: u16 },

    /// HTTP 200 whose body reports `success: false`
    #[error("API error: {message}")]
    Api { message: String },

    #[error("failed to decode response: {0}")]
    Decode(String),

    /// Rejected before any request was sent
    #[error("invalid request: {0}")]
    InvalidRequest(String),

    /// The id 404'd as both a movie and a TV show
    #[error("content {id} was not found as a movie or a TV show")]
    NotFound { id: u64 },

    /// The primary detail request failed for a reason other than 404
    #[error("failed to load details: {0}")]
    Aggregation(#[source] Box<FetchError>),
}

impl FetchError {
    /// Whether retrying the same request could plausibly succeed.
    pub fn is_recoverable(&self) -> bool {
        !matches!(self, Self::NotFound { .. } | Self::InvalidRequest(_))
    }

    /// `true` for a bare HTTP 404.
    pub fn is_not_found_status(&self) -> bool {
        matches!(self, Self::Http { status: 404 })
    }

    /// The confirmed-absent outcome of a detail lookup.
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }
}

/// The request URL carries the API key, so it is stripped before the
/// error is rendered.
impl From<reqwest::Error> for FetchError {
    fn from(err: reqwest::Error) -> Self {
        let err = err.without_url();
        if err.is_decode() {
            FetchError::Decode(err.to_string())
        } else if let Some(status) = err.status() {
            FetchError::Http {
                status: status.as_u16(),
            }
        } else if err.is_timeout() {
            FetchError::Network(format!("request timed out: {err}"))
        } else {
            FetchError::Network(err.to_string())
        }
    }
}

pub type Result<T> = std::result::Result<T, FetchError>;
