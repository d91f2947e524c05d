use std::sync::Arc;

use popcorn_config::{Config, ConfigLoadError};
use popcorn_core::PopcornClient;
use tokio::task::JoinSet;
use tracing::{debug, error};

use crate::error::BrowseError;
use crate::messages::{Effect, Message};
use crate::retry::RetryPolicy;
use crate::state::BrowseState;
use crate::update::update;

/// Drives [`update`] and executes its effects on the tokio runtime.
///
/// Fetches and retry timers run as tasks in a [`JoinSet`] whose output is
/// the message they report; only [`BrowseRuntime::dispatch`] mutates the
/// state.
#[derive(Debug)]
pub struct BrowseRuntime {
    state: BrowseState,
    client: Option<Arc<PopcornClient>>,
    tasks: JoinSet<Message>,
}

impl BrowseRuntime {
    pub fn new(client: Arc<PopcornClient>, retry: RetryPolicy) -> Self {
        Self::build(BrowseState::new(retry), Some(client))
    }

    /// Runtime for the outcome of configuration loading. A load error
    /// yields a session that shows the error and never touches the
    /// network.
    pub fn from_config(config: Result<&Config, &ConfigLoadError>) -> Self {
        match config {
            Ok(config) => match PopcornClient::from_config(config) {
                Ok(client) => Self::new(Arc::new(client), RetryPolicy::from(&config.retry)),
                Err(err) => {
                    error!(error = %err, "failed to initialise HTTP client");
                    Self::misconfigured(BrowseError::Configuration(err.to_string()))
                }
            },
            Err(err) => {
                error!(error = %err, "configuration error; fetching disabled");
                Self::misconfigured(BrowseError::from(err))
            }
        }
    }

    pub fn misconfigured(error: BrowseError) -> Self {
        Self::build(BrowseState::misconfigured(error), None)
    }

    fn build(state: BrowseState, client: Option<Arc<PopcornClient>>) -> Self {
        Self {
            state,
            client,
            tasks: JoinSet::new(),
        }
    }

    pub fn state(&self) -> &BrowseState {
        &self.state
    }

    /// Effects spawned whose result message has not been handled yet.
    pub fn pending(&self) -> usize {
        self.tasks.len()
    }

    /// Apply a message and start the resulting effects.
    pub fn dispatch(&mut self, message: Message) {
        debug!(message = message.name(), "dispatch");
        let result = update(&mut self.state, message);
        for effect in result.effects {
            self.spawn(effect);
        }
    }

    /// Wait for the next effect to report back and apply it. Returns
    /// `false` when nothing is outstanding.
    ///
    /// A task that panicked is logged and dropped; its slot keeps its
    /// current phase until the user acts again.
    pub async fn step(&mut self) -> bool {
        match self.tasks.join_next().await {
            Some(Ok(message)) => {
                self.dispatch(message);
                true
            }
            Some(Err(err)) => {
                error!(error = %err, "effect task failed");
                true
            }
            None => false,
        }
    }

    /// Process results until no fetch or timer is outstanding.
    pub async fn settle(&mut self) {
        while self.step().await {}
    }

    fn spawn(&mut self, effect: Effect) {
        let Some(client) = self.client.clone() else {
            debug!(?effect, "no client; dropping effect");
            return;
        };

        match effect {
            Effect::FetchList { token, query } => {
                self.tasks.spawn(async move {
                    let result = client.fetch_page(&query).await;
                    Message::ListLoaded { token, result }
                });
            }
            Effect::FetchDetail { token, id, kind } => {
                self.tasks.spawn(async move {
                    let result = client.fetch_detail(id, kind).await;
                    Message::DetailLoaded { token, result }
                });
            }
            Effect::ScheduleRetry { slot, token, delay } => {
                self.tasks.spawn(async move {
                    tokio::time::sleep(delay).await;
                    Message::RetryTimerFired { slot, token }
                });
            }
        }
    }
}
