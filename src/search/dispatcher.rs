//! Fetch dispatchers
//!
//! The controller hands every fetch to a [`FetchDispatcher`]. The production
//! dispatcher runs each request on its own background thread and posts the
//! [`FetchOutcome`] back over a channel; the owner of the receiving end feeds
//! outcomes to `SearchController::apply` on the UI thread.
//!
//! Requests are never cancelled, de-duplicated, or retried.

use super::types::{FetchOutcome, FetchRequest};
use crate::provider::{ProviderError, SearchProvider};
use std::panic::{self, AssertUnwindSafe};
use std::sync::Arc;
use std::sync::mpsc::{Receiver, Sender, channel};
use std::thread;

/// Something that can start fetches on behalf of the controller
pub trait FetchDispatcher {
    /// Start a fetch; completion is reported asynchronously
    fn dispatch(&mut self, request: FetchRequest);
}

/// Dispatcher that runs each fetch on a dedicated thread
pub struct ThreadDispatcher {
    provider: Arc<dyn SearchProvider>,
    sender: Sender<FetchOutcome>,
}

impl ThreadDispatcher {
    /// Create a dispatcher and the receiver its outcomes are posted to
    #[must_use]
    pub fn new(provider: Arc<dyn SearchProvider>) -> (Self, Receiver<FetchOutcome>) {
        let (sender, receiver) = channel();
        (Self { provider, sender }, receiver)
    }
}

impl FetchDispatcher for ThreadDispatcher {
    fn dispatch(&mut self, request: FetchRequest) {
        let provider = Arc::clone(&self.provider);
        let sender = self.sender.clone();
        let fallback = request.clone();
        let name = format!("novelhunt-fetch-{}", request.id().0);

        let spawned = thread::Builder::new().name(name).spawn(move || {
            let outcome = execute(provider.as_ref(), request);
            // The receiver is gone once the UI has shut down
            let _ = sender.send(outcome);
        });

        if let Err(e) = spawned {
            log::error!("Failed to spawn fetch worker for {}: {e}", fallback.id());
            let error = ProviderError::Aborted(format!("worker failed to start: {e}"));
            let _ = self.sender.send(fallback.fail(error));
        }
    }
}

/// Run one request against the provider, always producing an outcome
///
/// A panicking provider is reported as an aborted fetch so the controller
/// still completes the fetch cycle.
pub fn execute(provider: &dyn SearchProvider, request: FetchRequest) -> FetchOutcome {
    let fallback = request.clone();
    let outcome = panic::catch_unwind(AssertUnwindSafe(|| match request {
        FetchRequest::Results { id, title, genre } => FetchOutcome::Results {
            id,
            result: provider.search(&title, genre.as_deref()),
        },
        FetchRequest::Suggestions { id, partial, limit } => FetchOutcome::Suggestions {
            id,
            result: provider.suggest(&partial, limit),
        },
    }));

    outcome.unwrap_or_else(|_| {
        log::error!("Search provider panicked while serving {}", fallback.id());
        fallback.fail(ProviderError::Aborted("provider panicked".to_string()))
    })
}
