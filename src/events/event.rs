//! Engine transition events.

use serde::{Deserialize, Serialize};

use crate::cards::CardIndex;

/// Something visible happened on the table.
///
/// Events are emitted after the state change they describe, so a listener
/// never sees a transition the engine hasn't committed.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EngineEvent {
    /// A card was flipped face up.
    Revealed(CardIndex),
    /// A pair was committed to Matched.
    Matched([CardIndex; 2]),
    /// A mismatched pair flipped back face down.
    MismatchResolved([CardIndex; 2]),
    /// The last pair was matched.
    Won,
}

impl EngineEvent {
    /// Short name, for logs.
    #[must_use]
    pub fn name(&self) -> &'static str {
        match self {
            EngineEvent::Revealed(_) => "revealed",
            EngineEvent::Matched(_) => "matched",
            EngineEvent::MismatchResolved(_) => "mismatch_resolved",
            EngineEvent::Won => "won",
        }
    }

    /// Cards this event concerns.
    #[must_use]
    pub fn cards(&self) -> &[CardIndex] {
        match self {
            EngineEvent::Revealed(index) => std::slice::from_ref(index),
            EngineEvent::Matched(pair) | EngineEvent::MismatchResolved(pair) => pair,
            EngineEvent::Won => &[],
        }
    }
}
