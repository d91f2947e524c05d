use popcorn_core::CatalogPage;
use popcorn_model::{ContentDetail, ContentKind, ContentSummary, MAX_PAGE, Query};

use crate::error::BrowseError;
use crate::messages::Slot;
use crate::retry::RetryPolicy;
use crate::token::RequestToken;

/// Lifecycle of one fetch slot.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Phase {
    #[default]
    Idle,
    Loading,
    Ready,
    Error,
}

/// Fetch bookkeeping shared by the list and detail slots.
#[derive(Debug, Clone, Default)]
pub struct SlotState {
    /// Current phase
    pub phase: Phase,
    /// Token of the fetch whose result will be accepted
    pub token: RequestToken,
    /// Last failure, kept until the next fetch starts
    pub error: Option<BrowseError>,
    /// Automatic retries used since the last fresh fetch or success
    pub auto_retries: u32,
    /// The user hid the error banner for this failure
    pub dismissed: bool,
}

impl SlotState {
    /// Start a fetch for a new intent: fresh retry budget.
    pub(crate) fn begin_fresh(&mut self) -> RequestToken {
        self.auto_retries = 0;
        self.begin_retry()
    }

    /// Start a fetch that repeats the failed one; the budget carries over.
    pub(crate) fn begin_retry(&mut self) -> RequestToken {
        self.token = self.token.next();
        self.phase = Phase::Loading;
        self.error = None;
        self.dismissed = false;
        self.token
    }

    /// Drop interest in any in-flight fetch and return to idle.
    pub(crate) fn reset(&mut self) {
        self.token = self.token.next();
        self.phase = Phase::Idle;
        self.error = None;
        self.auto_retries = 0;
        self.dismissed = false;
    }

    pub(crate) fn succeed(&mut self) {
        self.phase = Phase::Ready;
        self.error = None;
        self.auto_retries = 0;
        self.dismissed = false;
    }

    pub(crate) fn fail(&mut self, error: BrowseError) {
        self.phase = Phase::Error;
        self.error = Some(error);
        self.dismissed = false;
    }

    pub fn is_current(&self, token: RequestToken) -> bool {
        self.token == token
    }

    pub fn is_loading(&self) -> bool {
        self.phase == Phase::Loading
    }
}

/// List slot: the active query and the last page that arrived for it.
#[derive(Debug, Clone, Default)]
pub struct ListState {
    pub query: Query,
    pub page: Option<CatalogPage>,
    pub fetch: SlotState,
}

impl ListState {
    pub fn items(&self) -> &[ContentSummary] {
        self.page.as_ref().map(|page| page.items.as_slice()).unwrap_or(&[])
    }

    /// Reachable page count once a page has arrived. The upstream reports
    /// more pages than it will serve, so this never exceeds [`MAX_PAGE`].
    pub fn total_pages(&self) -> Option<u32> {
        self.page
            .as_ref()
            .map(|page| page.total_pages.min(MAX_PAGE))
            .filter(|total| *total > 0)
    }

    /// Last page navigation may request.
    pub fn last_page(&self) -> u32 {
        self.total_pages().unwrap_or(MAX_PAGE)
    }
}

/// Detail slot: the selected item and its aggregated record.
#[derive(Debug, Clone, Default)]
pub struct DetailState {
    pub selected: Option<(u64, ContentKind)>,
    pub detail: Option<ContentDetail>,
    pub fetch: SlotState,
}

impl DetailState {
    pub fn is_open(&self) -> bool {
        self.selected.is_some()
    }
}

/// What the error banner shows, if anything.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Banner {
    pub message: String,
    /// Slot a manual retry would re-run; `None` for configuration errors
    pub retry: Option<Slot>,
}

/// Complete view state of a browsing session.
#[derive(Debug, Clone, Default)]
pub struct BrowseState {
    pub list: ListState,
    pub detail: DetailState,
    pub retry: RetryPolicy,
    /// Set when startup configuration failed; blocks every fetch
    pub config_error: Option<BrowseError>,
    pub config_error_dismissed: bool,
}

impl BrowseState {
    pub fn new(retry: RetryPolicy) -> Self {
        Self {
            retry,
            ..Self::default()
        }
    }

    /// A session that can never fetch, carrying the reason.
    pub fn misconfigured(error: BrowseError) -> Self {
        Self {
            config_error: Some(error),
            ..Self::default()
        }
    }

    pub fn is_blocked(&self) -> bool {
        self.config_error.is_some()
    }

    pub fn slot(&self, slot: Slot) -> &SlotState {
        match slot {
            Slot::List => &self.list.fetch,
            Slot::Detail => &self.detail.fetch,
        }
    }

    pub(crate) fn slot_mut(&mut self, slot: Slot) -> &mut SlotState {
        match slot {
            Slot::List => &mut self.list.fetch,
            Slot::Detail => &mut self.detail.fetch,
        }
    }

    /// Manual retry is offered for any failed slot unless configuration
    /// is broken.
    pub fn can_retry(&self, slot: Slot) -> bool {
        !self.is_blocked() && self.slot(slot).phase == Phase::Error
    }

    /// The most relevant undismissed error: configuration, then detail,
    /// then list.
    pub fn banner(&self) -> Option<Banner> {
        if let Some(error) = &self.config_error {
            return (!self.config_error_dismissed).then(|| Banner {
                message: error.to_string(),
                retry: None,
            });
        }
        [Slot::Detail, Slot::List].into_iter().find_map(|slot| {
            let state = self.slot(slot);
            match (&state.error, state.dismissed) {
                (Some(error), false) => Some(Banner {
                    message: error.to_string(),
                    retry: Some(slot),
                }),
                _ => None,
            }
        })
    }
}
