//! End-to-end browsing flows through the async runtime.

mod support;

use std::sync::Arc;
use std::time::Duration;

use popcorn_browser::{BrowseRuntime, Message, Phase, Slot};
use popcorn_config::{ConfigLoader, EnvConfig};
use popcorn_core::FetchError;
use popcorn_model::ContentKind;
use serde_json::json;
use support::{RoutedTransport, runtime_over};

fn matrix_page() -> serde_json::Value {
    json!({
        "page": 1,
        "total_pages": 1,
        "total_results": 1,
        "results": [{
            "id": 603,
            "title": "The Matrix",
            "poster_path": "/p.jpg",
            "vote_average": 8.7,
            "genre_ids": [28, 878]
        }]
    })
}

#[tokio::test(start_paused = true)]
async fn network_failures_retry_three_times_with_linear_backoff() {
    let transport = Arc::new(RoutedTransport::instant(|_| {
        Err(FetchError::Network("connection refused".into()))
    }));
    let mut runtime = runtime_over(transport.clone());

    runtime.dispatch(Message::Mount);
    runtime.settle().await;

    let calls = transport.calls_to("/discover/movie");
    assert_eq!(calls.len(), 4, "initial fetch plus three automatic retries");
    let gaps: Vec<_> = calls.windows(2).map(|pair| pair[1] - pair[0]).collect();
    assert_eq!(
        gaps,
        vec![Duration::from_secs(1), Duration::from_secs(2), Duration::from_secs(3)]
    );

    let state = runtime.state();
    assert_eq!(state.list.fetch.phase, Phase::Error);
    assert_eq!(state.list.fetch.auto_retries, 3);
    assert!(state.can_retry(Slot::List));
    assert_eq!(runtime.pending(), 0);

    runtime.dispatch(Message::Retry(Slot::List));
    runtime.settle().await;
    assert_eq!(transport.calls_to("/discover/movie").len(), 5);
    assert!(runtime.state().can_retry(Slot::List));
}

#[tokio::test(start_paused = true)]
async fn recovery_after_one_failure() {
    let attempts = Arc::new(std::sync::atomic::AtomicUsize::new(0));
    let counter = attempts.clone();
    let transport = Arc::new(RoutedTransport::instant(move |_| {
        if counter.fetch_add(1, std::sync::atomic::Ordering::SeqCst) == 0 {
            Err(FetchError::Http { status: 502 })
        } else {
            Ok(matrix_page())
        }
    }));
    let mut runtime = runtime_over(transport);

    runtime.dispatch(Message::Mount);
    runtime.settle().await;

    let state = runtime.state();
    assert_eq!(state.list.fetch.phase, Phase::Ready);
    assert_eq!(state.list.fetch.auto_retries, 0);
    assert_eq!(state.list.items().len(), 1);
    assert!(state.banner().is_none());
}

#[test]
fn missing_api_key_blocks_all_fetching() {
    let load = ConfigLoader::new().with_env(EnvConfig::default()).load();
    assert!(load.is_err());

    let mut runtime = BrowseRuntime::from_config(load.as_ref().map(|load| &load.config));
    runtime.dispatch(Message::Mount);
    runtime.dispatch(Message::Search("Matrix".into()));
    runtime.dispatch(Message::SelectItem { id: 603, kind: ContentKind::Movie });

    assert_eq!(runtime.pending(), 0);
    let state = runtime.state();
    assert!(state.is_blocked());
    assert_eq!(state.list.fetch.phase, Phase::Idle);
    let banner = state.banner().expect("configuration banner");
    assert_eq!(banner.retry, None);
    assert!(banner.message.contains("TMDB_API_KEY"));
}

#[tokio::test(start_paused = true)]
async fn slower_superseded_search_does_not_win() {
    let transport = Arc::new(RoutedTransport::new(|request| {
        let term = request.param("query").unwrap_or_default().to_string();
        let latency = if term == "Alien" {
            Duration::from_secs(5)
        } else {
            Duration::from_millis(10)
        };
        let body = json!({
            "page": 1,
            "total_pages": 1,
            "results": [{"id": 1, "title": term}]
        });
        (latency, Ok(body))
    }));
    let mut runtime = runtime_over(transport);

    runtime.dispatch(Message::Search("Alien".into()));
    runtime.dispatch(Message::Search("Aliens".into()));
    runtime.settle().await;

    let state = runtime.state();
    assert_eq!(state.list.fetch.phase, Phase::Ready);
    assert_eq!(state.list.items()[0].display_title, "Aliens");
}

#[tokio::test]
async fn selecting_an_item_loads_its_detail() {
    let transport = Arc::new(RoutedTransport::instant(|request| match request.path() {
        "/discover/movie" => Ok(matrix_page()),
        "/movie/603" => Ok(json!({"id": 603, "title": "The Matrix", "release_date": "1999-03-31"})),
        "/movie/603/credits" => Ok(json!({
            "cast": [{"name": "Keanu Reeves", "character": "Neo"}],
            "crew": [{"name": "Lana Wachowski", "job": "Director"}]
        })),
        _ => Ok(json!({})),
    }));
    let mut runtime = runtime_over(transport);

    runtime.dispatch(Message::Mount);
    runtime.settle().await;
    let first = runtime.state().list.items()[0].clone();

    runtime.dispatch(Message::SelectItem { id: first.id, kind: first.kind });
    runtime.settle().await;

    let detail = runtime.state().detail.detail.as_ref().expect("detail");
    assert_eq!(detail.director, "Lana Wachowski");
    assert_eq!(detail.cast.len(), 1);
    assert_eq!(runtime.state().detail.fetch.phase, Phase::Ready);

    runtime.dispatch(Message::CloseDetail);
    assert!(runtime.state().detail.detail.is_none());
}

#[tokio::test]
async fn unknown_id_shows_not_found_without_auto_retry() {
    let transport = Arc::new(RoutedTransport::instant(|_| Err(FetchError::Http { status: 404 })));
    let mut runtime = runtime_over(transport.clone());

    runtime.dispatch(Message::SelectItem { id: 999, kind: ContentKind::Movie });
    runtime.settle().await;

    let state = runtime.state();
    assert_eq!(state.detail.fetch.phase, Phase::Error);
    assert_eq!(state.detail.fetch.auto_retries, 0);
    assert_eq!(transport.calls_to("/movie/999").len(), 1);
    assert_eq!(transport.calls_to("/tv/999").len(), 1);
}

#[tokio::test]
async fn a_panicking_fetch_does_not_stall_settle() {
    let transport = Arc::new(RoutedTransport::instant(|request| {
        if request.path() == "/movie/7" {
            panic!("transport bug");
        }
        Ok(matrix_page())
    }));
    let mut runtime = runtime_over(transport);

    runtime.dispatch(Message::Mount);
    runtime.dispatch(Message::SelectItem { id: 7, kind: ContentKind::Movie });
    tokio::time::timeout(Duration::from_secs(5), runtime.settle())
        .await
        .expect("settle returns once every task has finished");

    assert_eq!(runtime.pending(), 0);
    assert_eq!(runtime.state().list.fetch.phase, Phase::Ready);
    assert_eq!(runtime.state().list.items().len(), 1);
}
