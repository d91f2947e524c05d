mod support;

use std::sync::Arc;

use popcorn_core::{CatalogFetcher, ContentKind, FetchError, Query, QueryMode};
use serde_json::json;
use support::ScriptedTransport;

#[tokio::test]
async fn search_page_maps_results_into_summaries() {
    let transport = Arc::new(ScriptedTransport::new().ok(
        "/search/movie",
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
        }),
    ));
    let fetcher = CatalogFetcher::new(transport.clone());

    let query = Query::popular(ContentKind::Movie).search("Matrix");
    let page = fetcher.fetch_page(&query).await.expect("page");

    assert_eq!(page.items.len(), 1);
    let item = &page.items[0];
    assert_eq!(item.id, 603);
    assert_eq!(item.kind, ContentKind::Movie);
    assert_eq!(item.display_title, "The Matrix");
    assert_eq!(item.poster_path.as_deref(), Some("/p.jpg"));
    assert_eq!(item.vote_average, Some(8.7));
    assert_eq!(item.genre_ids, vec![28, 878]);
    assert_eq!(item.release_year, None);

    let calls = transport.calls();
    assert_eq!(calls.len(), 1);
    assert_eq!(calls[0].param("query"), Some("Matrix"));
    assert_eq!(calls[0].param("page"), Some("1"));
}

#[tokio::test]
async fn items_without_posters_are_kept() {
    let transport = Arc::new(ScriptedTransport::new().ok(
        "/discover/tv",
        json!({
            "page": 3,
            "total_pages": 500,
            "total_results": 10000,
            "results": [
                {"id": 1, "name": "With Poster", "poster_path": "/a.jpg"},
                {"id": 2, "name": "Without Poster", "poster_path": null},
                {"id": 3, "name": "Empty Poster", "poster_path": ""}
            ]
        }),
    ));
    let fetcher = CatalogFetcher::new(transport.clone());

    let page = fetcher
        .fetch_page(&Query::popular(ContentKind::Tv).with_page(3))
        .await
        .expect("page");

    assert_eq!(page.page, 3);
    assert_eq!(page.total_pages, 500);
    assert_eq!(page.items.len(), 3);
    assert!(page.items.iter().all(|item| item.kind == ContentKind::Tv));
    assert_eq!(page.items[1].poster_path, None);
    assert_eq!(page.items[2].poster_path, None);
    assert_eq!(transport.calls()[0].param("sort_by"), Some("popularity.desc"));
}

#[tokio::test]
async fn genre_filter_uses_discover_constraint() {
    let transport = Arc::new(
        ScriptedTransport::new().ok("/discover/movie", json!({"results": []})),
    );
    let fetcher = CatalogFetcher::new(transport.clone());

    let page = fetcher
        .fetch_page(&Query::default().filter_genre(878))
        .await
        .expect("page");

    assert!(page.items.is_empty());
    assert_eq!(page.page, 1);
    let call = &transport.calls()[0];
    assert_eq!(call.param("with_genres"), Some("878"));
    assert_eq!(call.param("sort_by"), None);
}

#[tokio::test]
async fn multi_search_classifies_and_drops_people() {
    let transport = Arc::new(ScriptedTransport::new().ok(
        "/search/multi",
        json!({
            "results": [
                {"id": 603, "media_type": "movie", "title": "The Matrix"},
                {"id": 6384, "media_type": "person", "name": "Keanu Reeves"},
                {"id": 1399, "media_type": "tv", "name": "Game of Thrones"},
                {"id": 77, "name": "Untagged Show", "first_air_date": "2020-01-01"}
            ]
        }),
    ));
    let fetcher = CatalogFetcher::new(transport);

    let query = Query::default().with_mode(QueryMode::search_all("matrix"));
    let page = fetcher.fetch_page(&query).await.expect("page");

    let kinds: Vec<_> = page.items.iter().map(|item| (item.id, item.kind)).collect();
    assert_eq!(
        kinds,
        vec![
            (603, ContentKind::Movie),
            (1399, ContentKind::Tv),
            (77, ContentKind::Tv),
        ]
    );
}

#[tokio::test]
async fn upstream_errors_propagate_unchanged() {
    let transport = Arc::new(
        ScriptedTransport::new()
            .fail("/discover/movie", FetchError::Api { message: "Invalid API key".into() }),
    );
    let fetcher = CatalogFetcher::new(transport);

    let err = fetcher.fetch_page(&Query::default()).await.expect_err("api error");
    assert_eq!(err, FetchError::Api { message: "Invalid API key".into() });
}

#[tokio::test]
async fn genres_and_connection_probe() {
    let transport = Arc::new(
        ScriptedTransport::new()
            .ok("/genre/tv/list", json!({"genres": [{"id": 10765, "name": "Sci-Fi & Fantasy"}]}))
            .ok("/configuration", json!({"images": {}})),
    );
    let fetcher = CatalogFetcher::new(transport);

    let genres = fetcher.fetch_genres(ContentKind::Tv).await.expect("genres");
    assert_eq!(genres.len(), 1);
    assert_eq!(genres[0].name, "Sci-Fi & Fantasy");
    fetcher.check_connection().await.expect("reachable");
}
