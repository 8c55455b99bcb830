//! Search state and fetch orchestration
//!
//! [`SearchController`] owns the [`SearchState`] and turns user actions into
//! fetches. Fetches run through a [`FetchDispatcher`]; in the interactive UI
//! that is a [`ThreadDispatcher`] whose outcomes are drained on the UI thread
//! and handed back to [`SearchController::apply`].

mod controller;
mod dispatcher;
mod state;
mod types;

pub use controller::{ControllerSettings, RESULT_FETCH_ERROR, SearchController};
pub use dispatcher::{FetchDispatcher, ThreadDispatcher, execute};
pub use state::SearchState;
pub use types::{FetchKind, FetchOutcome, FetchPolicy, FetchRequest, RequestId};
