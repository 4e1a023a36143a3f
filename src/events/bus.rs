//! Listener registry and dispatch.
//!
//! Listeners are fire-and-forget collaborators (sound, animation hooks,
//! analytics). Whatever they do, the engine state is already committed when
//! they run, and a failing or panicking listener is logged and skipped.

use std::panic::{catch_unwind, AssertUnwindSafe};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::event::EngineEvent;

/// Why a listener couldn't handle an event. Only ever logged.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum ListenerError {
    #[error("backend unavailable: {0}")]
    Unavailable(String),

    #[error("listener failed: {0}")]
    Failed(String),
}

/// Receives engine events.
pub trait EventListener: Send {
    /// Handle one event.
    fn on_event(&mut self, event: &EngineEvent) -> Result<(), ListenerError>;

    /// Name used in logs.
    fn name(&self) -> &str {
        "listener"
    }
}

/// Adapter so plain closures can subscribe.
struct FnListener<F> {
    f: F,
}

impl<F> EventListener for FnListener<F>
where
    F: FnMut(&EngineEvent) + Send,
{
    fn on_event(&mut self, event: &EngineEvent) -> Result<(), ListenerError> {
        (self.f)(event);
        Ok(())
    }

    fn name(&self) -> &str {
        "closure"
    }
}

/// Handle returned by `subscribe`, used to unsubscribe.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ListenerId(pub u32);

/// Ordered set of listeners.
#[derive(Default)]
pub struct EventBus {
    listeners: Vec<(ListenerId, Box<dyn EventListener>)>,
    next_id: u32,
}

impl EventBus {
    /// Create an empty bus.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a listener. Listeners run in subscription order.
    pub fn subscribe(&mut self, listener: impl EventListener + 'static) -> ListenerId {
        let id = ListenerId(self.next_id);
        self.next_id += 1;
        self.listeners.push((id, Box::new(listener)));
        id
    }

    /// Add a closure listener.
    pub fn subscribe_fn<F>(&mut self, f: F) -> ListenerId
    where
        F: FnMut(&EngineEvent) + Send + 'static,
    {
        self.subscribe(FnListener { f })
    }

    /// Remove a listener. Returns true if it was registered.
    pub fn unsubscribe(&mut self, id: ListenerId) -> bool {
        let before = self.listeners.len();
        self.listeners.retain(|(lid, _)| *lid != id);
        self.listeners.len() != before
    }

    /// Number of listeners.
    #[must_use]
    pub fn len(&self) -> usize {
        self.listeners.len()
    }

    /// True if no one is listening.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.listeners.is_empty()
    }

    /// Deliver an event to every listener.
    ///
    /// Returns the number of listeners that handled it successfully.
    pub fn emit(&mut self, event: &EngineEvent) -> usize {
        let mut delivered = 0;
        for (id, listener) in &mut self.listeners {
            match catch_unwind(AssertUnwindSafe(|| listener.on_event(event))) {
                Ok(Ok(())) => delivered += 1,
                Ok(Err(error)) => {
                    tracing::warn!(
                        listener = listener.name(),
                        id = id.0,
                        event = event.name(),
                        cards = ?event.cards(),
                        %error,
                        "event listener failed; ignoring"
                    );
                }
                Err(_) => {
                    tracing::warn!(
                        listener = listener.name(),
                        id = id.0,
                        event = event.name(),
                        cards = ?event.cards(),
                        "event listener panicked; ignoring"
                    );
                }
            }
        }
        delivered
    }
}

impl std::fmt::Debug for EventBus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("EventBus")
            .field("listeners", &self.listeners.len())
            .finish()
    }
}
