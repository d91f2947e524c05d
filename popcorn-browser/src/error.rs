use popcorn_config::ConfigLoadError;
use popcorn_core::FetchError;
use thiserror::Error;

/// Error shown to the user for a slot or for the whole session.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BrowseError {
    /// Startup configuration is unusable; nothing can be fetched
    #[error("{0}")]
    Configuration(String),

    #[error("This title could not be found.")]
    NotFound { id: u64 },

    #[error(transparent)]
    Fetch(FetchError),
}

impl BrowseError {
    /// Whether the automatic retry timer may fire for this error.
    pub fn is_auto_retryable(&self) -> bool {
        match self {
            BrowseError::Fetch(err) => err.is_recoverable(),
            BrowseError::Configuration(_) | BrowseError::NotFound { .. } => false,
        }
    }
}

impl From<FetchError> for BrowseError {
    fn from(err: FetchError) -> Self {
        match err {
            FetchError::NotFound { id } => BrowseError::NotFound { id },
            other => BrowseError::Fetch(other),
        }
    }
}

impl From<&ConfigLoadError> for BrowseError {
    fn from(err: &ConfigLoadError) -> Self {
        BrowseError::Configuration(err.to_string())
    }
}
