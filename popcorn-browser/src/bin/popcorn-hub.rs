//! Headless smoke test: load configuration, fetch one list page and print
//! it. Pass a search term as the first argument to search instead.

use anyhow::Result;
use popcorn_browser::{BrowseRuntime, Message, Phase};
use popcorn_config::ConfigLoader;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::registry()
        .with(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "popcorn_hub=info,popcorn_config=info,popcorn_core=info,popcorn_browser=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let load = ConfigLoader::new().load();
    let mut runtime = BrowseRuntime::from_config(load.as_ref().map(|load| &load.config));

    match std::env::args().nth(1) {
        Some(term) => runtime.dispatch(Message::Search(term)),
        None => runtime.dispatch(Message::Mount),
    }
    runtime.settle().await;

    let state = runtime.state();
    if let Some(banner) = state.banner() {
        eprintln!("error: {}", banner.message);
    }
    if state.list.fetch.phase == Phase::Ready {
        for item in state.list.items() {
            let year = item
                .release_year
                .map(|year| year.to_string())
                .unwrap_or_else(|| "----".to_string());
            println!("{:>8}  {year}  {}", item.id, item.display_title);
        }
        if let Some(total) = state.list.total_pages() {
            println!("page {} of {total}", state.list.query.page());
        }
    }
    Ok(())
}
