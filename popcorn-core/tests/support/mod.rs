//! Scripted transport shared by the integration tests.
#![allow(dead_code)]

use std::collections::{HashMap, VecDeque};
use std::sync::Mutex;

use async_trait::async_trait;
use popcorn_core::{ApiRequest, ApiTransport, FetchError};
use serde_json::{Value, json};

/// Transport that answers by request path and records every call.
///
/// Each path holds a queue of responses; the last one repeats. Paths with
/// no script answer HTTP 404.
#[derive(Default)]
pub struct ScriptedTransport {
    routes: Mutex<HashMap<String, VecDeque<Result<Value, FetchError>>>>,
    calls: Mutex<Vec<ApiRequest>>,
}

impl ScriptedTransport {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn on(self, path: &str, response: Result<Value, FetchError>) -> Self {
        self.routes
            .lock()
            .unwrap()
            .entry(path.to_string())
            .or_default()
            .push_back(response);
        self
    }

    pub fn ok(self, path: &str, body: Value) -> Self {
        self.on(path, Ok(body))
    }

    pub fn fail(self, path: &str, error: FetchError) -> Self {
        self.on(path, Err(error))
    }

    pub fn calls(&self) -> Vec<ApiRequest> {
        self.calls.lock().unwrap().clone()
    }

    pub fn calls_to(&self, path: &str) -> usize {
        self.calls
            .lock()
            .unwrap()
            .iter()
            .filter(|request| request.path() == path)
            .count()
    }
}

#[async_trait]
impl ApiTransport for ScriptedTransport {
    async fn get_json(&self, request: &ApiRequest) -> Result<Value, FetchError> {
        self.calls.lock().unwrap().push(request.clone());
        let mut routes = self.routes.lock().unwrap();
        match routes.get_mut(request.path()) {
            Some(queue) if queue.len() > 1 => queue.pop_front().unwrap(),
            Some(queue) => queue.front().cloned().unwrap(),
            None => Err(FetchError::Http { status: 404 }),
        }
    }
}

pub fn matrix_detail() -> Value {
    json!({
        "id": 603,
        "title": "The Matrix",
        "overview": "Set in the 22nd century...",
        "poster_path": "/p.jpg",
        "backdrop_path": "/b.jpg",
        "release_date": "1999-03-31",
        "runtime": 136,
        "vote_average": 8.2,
        "genres": [{"id": 28, "name": "Action"}, {"id": 878, "name": "Science Fiction"}]
    })
}

pub fn matrix_credits() -> Value {
    json!({
        "id": 603,
        "cast": [
            {"name": "Keanu Reeves", "character": "Neo", "profile_path": "/k.jpg"},
            {"name": "Laurence Fishburne", "character": "Morpheus"}
        ],
        "crew": [
            {"name": "Bill Pope", "job": "Director of Photography"},
            {"name": "Lana Wachowski", "job": "Director"},
            {"name": "Lilly Wachowski", "job": "Director"}
        ]
    })
}

pub fn matrix_videos() -> Value {
    json!({
        "results": [
            {"key": "featurette", "site": "YouTube", "type": "Featurette"},
            {"key": "m8e-FF8MsqU", "site": "YouTube", "type": "Trailer"}
        ]
    })
}

pub fn matrix_providers() -> Value {
    json!({
        "results": {
            "IN": {"flatrate": [
                {"provider_id": 8, "provider_name": "Netflix", "logo_path": "/n.jpg"},
                {"provider_id": 119, "provider_name": "Amazon Prime Video"}
            ]},
            "US": {"flatrate": [{"provider_id": 1899, "provider_name": "Max"}]}
        }
    })
}

pub fn matrix_release_dates() -> Value {
    json!({
        "results": [
            {"iso_3166_1": "US", "release_dates": [{"certification": "R"}]},
            {"iso_3166_1": "IN", "release_dates": [{"certification": "A"}]}
        ]
    })
}

pub fn matrix_similar() -> Value {
    let results: Vec<_> = (0..12)
        .map(|i| json!({"id": 1000 + i, "title": format!("Similar {i}"), "release_date": "2001-01-01"}))
        .collect();
    json!({"page": 1, "results": results})
}

pub fn matrix_recommendations() -> Value {
    let results: Vec<_> = (0..10)
        .map(|i| {
            let poster = if i % 2 == 0 { json!(format!("/r{i}.jpg")) } else { json!(null) };
            json!({"id": 2000 + i, "title": format!("Pick {i}"), "poster_path": poster})
        })
        .collect();
    json!({"page": 1, "results": results})
}

pub fn matrix_reviews() -> Value {
    json!({
        "results": [
            {"author": "cinephile", "content": "A landmark.", "author_details": {"rating": 10.0}},
            {"author": "skeptic", "content": "Overrated.", "url": "https://example.org/r/2"}
        ]
    })
}

/// Transport serving a complete movie 603 fan-out.
pub fn matrix_transport() -> ScriptedTransport {
    ScriptedTransport::new()
        .ok("/movie/603", matrix_detail())
        .ok("/movie/603/credits", matrix_credits())
        .ok("/movie/603/videos", matrix_videos())
        .ok("/movie/603/watch/providers", matrix_providers())
        .ok("/movie/603/release_dates", matrix_release_dates())
        .ok("/movie/603/similar", matrix_similar())
        .ok("/movie/603/recommendations", matrix_recommendations())
        .ok("/movie/603/reviews", matrix_reviews())
}
