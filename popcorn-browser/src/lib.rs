//! Browsing session for PopcornHub.
//!
//! [`update`] is a pure reducer: it applies a [`Message`] to
//! [`BrowseState`] and returns the [`Effect`]s to run. [`BrowseRuntime`]
//! executes those effects on tokio and feeds their results back in, so
//! all state changes happen on one task.
#![allow(missing_docs)]

pub mod error;
pub mod messages;
pub mod retry;
pub mod runtime;
pub mod state;
pub mod token;
pub mod update;

pub use error::BrowseError;
pub use messages::{Effect, Message, Slot, UpdateResult};
pub use retry::RetryPolicy;
pub use runtime::BrowseRuntime;
pub use state::{Banner, BrowseState, DetailState, ListState, Phase, SlotState};
pub use token::RequestToken;
pub use update::update;
