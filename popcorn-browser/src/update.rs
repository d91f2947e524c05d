//! Browsing state transitions.

use popcorn_model::{Query, QueryMode};
use tracing::debug;

use crate::error::BrowseError;
use crate::messages::{Effect, Message, Slot, UpdateResult};
use crate::state::{BrowseState, Phase};
use crate::token::RequestToken;

/// Apply `message` to `state` and return the effects to execute.
///
/// Never blocks and never fails. While configuration is broken no effect
/// is produced, whatever the message.
pub fn update(state: &mut BrowseState, message: Message) -> UpdateResult {
    if state.is_blocked() {
        if let Message::DismissError = message {
            state.config_error_dismissed = true;
        }
        debug!(message = message.name(), "ignoring message: configuration error");
        return UpdateResult::none();
    }

    match message {
        Message::Mount => start_list_fetch(state),

        Message::Search(text) => {
            let query = state.list.query.clone().search(&text);
            change_query(state, query)
        }

        Message::SearchAll(text) => {
            let query = state
                .list
                .query
                .clone()
                .with_mode(QueryMode::search_all(&text));
            change_query(state, query)
        }

        Message::SelectGenre(genre_id) => {
            let query = state.list.query.clone().filter_genre(genre_id);
            change_query(state, query)
        }

        Message::SetKind(kind) => {
            let query = state.list.query.clone().with_kind(kind);
            change_query(state, query)
        }

        Message::ShowTrending(window) => {
            let query = state
                .list
                .query
                .clone()
                .with_mode(QueryMode::Trending(window));
            change_query(state, query)
        }

        Message::ShowChart(chart) => {
            let query = state.list.query.clone().with_mode(QueryMode::Chart(chart));
            change_query(state, query)
        }

        Message::ClearFilters => {
            let query = Query::popular(state.list.query.kind());
            change_query(state, query)
        }

        Message::NextPage => {
            if state.list.query.page() >= state.list.last_page() {
                return UpdateResult::none();
            }
            let query = state.list.query.clone().next_page();
            change_query(state, query)
        }

        Message::PreviousPage => {
            if state.list.query.page() <= 1 {
                return UpdateResult::none();
            }
            let query = state.list.query.clone().previous_page();
            change_query(state, query)
        }

        Message::GoToPage(page) => {
            let page = page.clamp(1, state.list.last_page());
            if page == state.list.query.page() {
                return UpdateResult::none();
            }
            let query = state.list.query.clone().with_page(page);
            change_query(state, query)
        }

        Message::Retry(slot) => {
            if !state.can_retry(slot) {
                return UpdateResult::none();
            }
            debug!(%slot, "manual retry");
            retry_slot(state, slot)
        }

        Message::RetryTimerFired { slot, token } => {
            let current = state.slot(slot);
            if !current.is_current(token) || current.phase != Phase::Error {
                debug!(%slot, %token, "discarding stale retry timer");
                return UpdateResult::none();
            }
            debug!(%slot, attempt = current.auto_retries, "automatic retry");
            retry_slot(state, slot)
        }

        Message::ListLoaded { token, result } => {
            if !state.list.fetch.is_current(token) {
                debug!(slot = %Slot::List, %token, "discarding stale response");
                return UpdateResult::none();
            }
            match result {
                Ok(page) => {
                    state.list.page = Some(page);
                    state.list.fetch.succeed();
                    UpdateResult::none()
                }
                Err(err) => handle_failure(state, Slot::List, token, err.into()),
            }
        }

        Message::SelectItem { id, kind } => {
            state.detail.selected = Some((id, kind));
            state.detail.detail = None;
            let token = state.detail.fetch.begin_fresh();
            UpdateResult::effect(Effect::FetchDetail { token, id, kind })
        }

        Message::DetailLoaded { token, result } => {
            if !state.detail.fetch.is_current(token) {
                debug!(slot = %Slot::Detail, %token, "discarding stale response");
                return UpdateResult::none();
            }
            match result {
                Ok(detail) => {
                    state.detail.detail = Some(detail);
                    state.detail.fetch.succeed();
                    UpdateResult::none()
                }
                Err(err) => handle_failure(state, Slot::Detail, token, err.into()),
            }
        }

        Message::CloseDetail => {
            state.detail.selected = None;
            state.detail.detail = None;
            state.detail.fetch.reset();
            UpdateResult::none()
        }

        Message::DismissError => {
            state.list.fetch.dismissed = true;
            state.detail.fetch.dismissed = true;
            UpdateResult::none()
        }
    }
}

fn change_query(state: &mut BrowseState, query: Query) -> UpdateResult {
    state.list.query = query;
    start_list_fetch(state)
}

fn start_list_fetch(state: &mut BrowseState) -> UpdateResult {
    let token = state.list.fetch.begin_fresh();
    UpdateResult::effect(Effect::FetchList {
        token,
        query: state.list.query.clone(),
    })
}

fn retry_slot(state: &mut BrowseState, slot: Slot) -> UpdateResult {
    match slot {
        Slot::List => {
            let token = state.list.fetch.begin_retry();
            UpdateResult::effect(Effect::FetchList {
                token,
                query: state.list.query.clone(),
            })
        }
        Slot::Detail => {
            let Some((id, kind)) = state.detail.selected else {
                return UpdateResult::none();
            };
            let token = state.detail.fetch.begin_retry();
            UpdateResult::effect(Effect::FetchDetail { token, id, kind })
        }
    }
}

fn handle_failure(
    state: &mut BrowseState,
    slot: Slot,
    token: RequestToken,
    error: BrowseError,
) -> UpdateResult {
    let policy = state.retry;
    let fetch = state.slot_mut(slot);
    let retryable = error.is_auto_retryable();
    debug!(%slot, %token, error = %error, retryable, "fetch failed");
    fetch.fail(error);

    if !retryable || !policy.allows(fetch.auto_retries) {
        return UpdateResult::none();
    }
    fetch.auto_retries += 1;
    let delay = policy.delay_for(fetch.auto_retries);
    UpdateResult::effect(Effect::ScheduleRetry { slot, token, delay })
}
