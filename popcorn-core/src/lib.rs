//! Client-side data layer for PopcornHub.
//!
//! * [`providers`] speaks to the metadata API: endpoint building, the HTTP
//!   transport and the raw payload shapes.
//! * [`aggregator`] fans a detail lookup out into its dependent requests
//!   and joins them into one [`ContentDetail`].
//! * [`catalog`] fetches paginated list pages for a [`Query`].
//! * [`cache`] memoizes detail lookups.
//! * [`links`] and [`format`] turn records into URLs and display strings.
#![allow(missing_docs)]

pub mod aggregator;
pub mod cache;
pub mod catalog;
pub mod classify;
pub mod client;
pub mod error;
pub mod format;
pub mod links;
pub mod providers;

pub use aggregator::DetailAggregator;
pub use cache::{DetailCache, DetailService};
pub use catalog::{CatalogFetcher, CatalogPage};
pub use classify::classify;
pub use client::PopcornClient;
pub use error::{FetchError, Result};
pub use links::{ImageLinks, VideoLinks};
pub use providers::endpoints::{ApiRequest, Resource};
pub use providers::http::HttpClient;
pub use providers::transport::ApiTransport;

pub use popcorn_model::{
    ContentDetail, ContentKind, ContentSummary, Genre, Query, QueryMode, Review,
};
