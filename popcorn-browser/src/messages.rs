use std::time::Duration;

use popcorn_core::{CatalogPage, FetchError};
use popcorn_model::{Chart, ContentDetail, ContentKind, Query, TimeWindow};

use crate::token::RequestToken;

/// The two independently fetched regions of the view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Slot {
    List,
    Detail,
}

impl std::fmt::Display for Slot {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Slot::List => f.write_str("list"),
            Slot::Detail => f.write_str("detail"),
        }
    }
}

#[derive(Debug, Clone)]
pub enum Message {
    // User actions
    /// View became visible; loads the first page
    Mount,
    Search(String),
    SearchAll(String),
    SelectGenre(u32),
    SetKind(ContentKind),
    ShowTrending(TimeWindow),
    ShowChart(Chart),
    /// Back to the default popularity listing
    ClearFilters,
    NextPage,
    PreviousPage,
    GoToPage(u32),
    /// Manual retry of the failed fetch in `slot`
    Retry(Slot),
    SelectItem { id: u64, kind: ContentKind },
    CloseDetail,
    DismissError,

    // Internal events
    RetryTimerFired { slot: Slot, token: RequestToken },
    ListLoaded {
        token: RequestToken,
        result: Result<CatalogPage, FetchError>,
    },
    DetailLoaded {
        token: RequestToken,
        result: Result<ContentDetail, FetchError>,
    },
}

impl Message {
    pub fn name(&self) -> &'static str {
        match self {
            Message::Mount => "Mount",
            Message::Search(_) => "Search",
            Message::SearchAll(_) => "SearchAll",
            Message::SelectGenre(_) => "SelectGenre",
            Message::SetKind(_) => "SetKind",
            Message::ShowTrending(_) => "ShowTrending",
            Message::ShowChart(_) => "ShowChart",
            Message::ClearFilters => "ClearFilters",
            Message::NextPage => "NextPage",
            Message::PreviousPage => "PreviousPage",
            Message::GoToPage(_) => "GoToPage",
            Message::Retry(_) => "Retry",
            Message::SelectItem { .. } => "SelectItem",
            Message::CloseDetail => "CloseDetail",
            Message::DismissError => "DismissError",
            Message::RetryTimerFired { .. } => "RetryTimerFired",
            Message::ListLoaded { .. } => "ListLoaded",
            Message::DetailLoaded { .. } => "DetailLoaded",
        }
    }
}

/// Work requested by the reducer.
#[derive(Debug, Clone, PartialEq)]
pub enum Effect {
    FetchList {
        token: RequestToken,
        query: Query,
    },
    FetchDetail {
        token: RequestToken,
        id: u64,
        kind: ContentKind,
    },
    /// Deliver [`Message::RetryTimerFired`] after `delay`
    ScheduleRetry {
        slot: Slot,
        token: RequestToken,
        delay: Duration,
    },
}

/// Effects produced by one [`crate::update`] call.
#[derive(Debug, Default, PartialEq)]
pub struct UpdateResult {
    pub effects: Vec<Effect>,
}

impl UpdateResult {
    pub fn none() -> Self {
        Self::default()
    }

    pub fn effect(effect: Effect) -> Self {
        Self {
            effects: vec![effect],
        }
    }

    pub fn is_empty(&self) -> bool {
        self.effects.is_empty()
    }
}
