#![allow(dead_code)]

use std::sync::{Arc, Mutex};
use std::time::Duration;

use async_trait::async_trait;
use popcorn_browser::{BrowseRuntime, RetryPolicy};
use popcorn_config::{ApiKey, Config};
use popcorn_core::{ApiRequest, ApiTransport, FetchError, PopcornClient};
use serde_json::Value;
use tokio::time::Instant;

type Route = dyn Fn(&ApiRequest) -> (Duration, Result<Value, FetchError>) + Send + Sync;

/// Transport answering through a routing closure, with an optional
/// simulated latency per response. Records when each request arrived.
pub struct RoutedTransport {
    route: Box<Route>,
    calls: Mutex<Vec<(Instant, ApiRequest)>>,
}

impl RoutedTransport {
    pub fn new(
        route: impl Fn(&ApiRequest) -> (Duration, Result<Value, FetchError>) + Send + Sync + 'static,
    ) -> Self {
        Self {
            route: Box::new(route),
            calls: Mutex::new(Vec::new()),
        }
    }

    pub fn instant(
        route: impl Fn(&ApiRequest) -> Result<Value, FetchError> + Send + Sync + 'static,
    ) -> Self {
        Self::new(move |request| (Duration::ZERO, route(request)))
    }

    pub fn calls_to(&self, path: &str) -> Vec<Instant> {
        self.calls
            .lock()
            .unwrap()
            .iter()
            .filter(|(_, request)| request.path() == path)
            .map(|(at, _)| *at)
            .collect()
    }

    pub fn total_calls(&self) -> usize {
        self.calls.lock().unwrap().len()
    }
}

#[async_trait]
impl ApiTransport for RoutedTransport {
    async fn get_json(&self, request: &ApiRequest) -> Result<Value, FetchError> {
        self.calls
            .lock()
            .unwrap()
            .push((Instant::now(), request.clone()));
        let (latency, response) = (self.route)(request);
        if !latency.is_zero() {
            tokio::time::sleep(latency).await;
        }
        response
    }
}

pub fn test_config() -> Config {
    Config::with_api_key(ApiKey::new("test-key").unwrap())
}

pub fn runtime_over(transport: Arc<RoutedTransport>) -> BrowseRuntime {
    let config = test_config();
    let client = PopcornClient::with_transport(transport, &config);
    BrowseRuntime::new(Arc::new(client), RetryPolicy::from(&config.retry))
}
