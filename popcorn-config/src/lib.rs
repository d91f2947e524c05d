//! Configuration library for PopcornHub.
//!
//! Builds one immutable [`Config`] from built-in defaults, an optional TOML
//! file and the process environment (optionally seeded from `.env`). The
//! resulting value is handed to the HTTP client and the browser runtime;
//! nothing else in the workspace reads the environment.
#![allow(missing_docs)]

pub mod constants;
pub mod loader;
pub mod models;
pub mod util;
pub mod validation;

pub use loader::{ConfigLoad, ConfigLoader, error::ConfigLoadError};
pub use models::secret::ApiKey;
pub use models::sources::{EnvConfig, FileConfig};
pub use models::{
    ApiConfig, BackoffKind, CacheConfig, CatalogConfig, Config,
    ConfigMetadata, HttpConfig, ImageConfig, RetryConfig, VideoConfig,
};
pub use validation::{ConfigWarning, ConfigWarnings};
