use std::fmt;
use std::time::Duration;

use crate::Config;

/// Non-fatal observations about a loaded configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigWarning {
    /// `retry.limit` is 0, so failed fetches are never retried
    /// automatically
    AutomaticRetryDisabled,
    /// The API key would travel over plain http
    InsecureApiBaseUrl { base_url: String },
    /// Timeout so long that a stalled request looks like a hang
    LongHttpTimeout { timeout: Duration },
}

impl fmt::Display for ConfigWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigWarning::AutomaticRetryDisabled => {
                write!(f, "automatic retry is disabled (retry limit is 0)")
            }
            ConfigWarning::InsecureApiBaseUrl { base_url } => write!(
                f,
                "metadata API base URL {base_url} is not https; the API key is sent in clear text"
            ),
            ConfigWarning::LongHttpTimeout { timeout } => write!(
                f,
                "HTTP timeout of {} is unusually long",
                humantime::format_duration(*timeout)
            ),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ConfigWarnings(Vec<ConfigWarning>);

impl ConfigWarnings {
    pub fn iter(&self) -> impl Iterator<Item = &ConfigWarning> {
        self.0.iter()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn contains(&self, warning: &ConfigWarning) -> bool {
        self.0.contains(warning)
    }
}

const LONG_TIMEOUT: Duration = Duration::from_secs(60);

pub(crate) fn collect_warnings(config: &Config) -> ConfigWarnings {
    let mut warnings = Vec::new();
    if config.retry.limit == 0 {
        warnings.push(ConfigWarning::AutomaticRetryDisabled);
    }
    if config.api.base_url.starts_with("http://") {
        warnings.push(ConfigWarning::InsecureApiBaseUrl {
            base_url: config.api.base_url.clone(),
        });
    }
    if config.http.timeout > LONG_TIMEOUT {
        warnings.push(ConfigWarning::LongHttpTimeout {
            timeout: config.http.timeout,
        });
    }
    ConfigWarnings(warnings)
}
