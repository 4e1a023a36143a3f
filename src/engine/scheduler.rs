//! Deferred pair resolution.
//!
//! Revealing the second card of a pair doesn't resolve it on the spot.
//! The engine schedules a [`Continuation`] that fires after the settle delay.
//! Time is virtual: the host moves the clock forward with
//! [`TimerQueue::advance`], and due continuations come out in the order they
//! were scheduled.
//!
//! Every continuation carries the [`Generation`] it was scheduled in. A new
//! game bumps the generation, so anything still in flight from the previous
//! deal is recognisably stale even if a host timer delivers it late.

use std::collections::VecDeque;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::cards::CardIndex;

/// Epoch counter, incremented on every new game.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Generation(pub u64);

impl Generation {
    /// The generation after this one.
    #[must_use]
    pub const fn next(self) -> Self {
        Self(self.0.wrapping_add(1))
    }
}

impl std::fmt::Display for Generation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Gen({})", self.0)
    }
}

/// How a pair will resolve.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Resolution {
    /// Faces are equal; the pair becomes Matched.
    Match,
    /// Faces differ; the pair flips back.
    Mismatch,
}

/// A scheduled pair resolution.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Continuation {
    /// Generation the pair was revealed in.
    pub generation: Generation,
    /// Unique per engine; distinguishes repeat reveals of the same pair.
    pub ticket: u64,
    /// The pair, in reveal order.
    pub pair: [CardIndex; 2],
    /// Outcome decided when the second card was revealed.
    pub resolution: Resolution,
    /// Virtual time at which it fires.
    pub due_at: Duration,
}

/// FIFO queue of continuations on a virtual clock.
#[derive(Clone, Debug, Default)]
pub struct TimerQueue {
    now: Duration,
    next_ticket: u64,
    pending: VecDeque<Continuation>,
}

impl TimerQueue {
    /// Empty queue at time zero.
    pub fn new() -> Self {
        Self::default()
    }

    /// Current virtual time.
    #[must_use]
    pub fn now(&self) -> Duration {
        self.now
    }

    /// Number of continuations waiting to fire.
    #[must_use]
    pub fn len(&self) -> usize {
        self.pending.len()
    }

    /// True if nothing is waiting.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }

    /// Waiting continuations in firing order.
    pub fn iter(&self) -> impl Iterator<Item = &Continuation> {
        self.pending.iter()
    }

    /// Schedule a resolution `delay` from now and return it.
    pub fn schedule(
        &mut self,
        delay: Duration,
        generation: Generation,
        pair: [CardIndex; 2],
        resolution: Resolution,
    ) -> Continuation {
        let continuation = Continuation {
            generation,
            ticket: self.next_ticket,
            pair,
            resolution,
            due_at: self.now.saturating_add(delay),
        };
        self.next_ticket += 1;
        self.pending.push_back(continuation);
        continuation
    }

    /// Move the clock forward and pop everything now due.
    ///
    /// A continuation never overtakes one scheduled before it, even if its
    /// own deadline is earlier. The clock saturates at `Duration::MAX`.
    pub fn advance(&mut self, elapsed: Duration) -> Vec<Continuation> {
        self.now = self.now.saturating_add(elapsed);
        let mut due = Vec::new();
        while let Some(front) = self.pending.front() {
            if front.due_at > self.now {
                break;
            }
            due.extend(self.pending.pop_front());
        }
        due
    }

    /// Pop everything regardless of deadline, jumping the clock to the last
    /// deadline popped.
    pub fn drain(&mut self) -> Vec<Continuation> {
        if let Some(last) = self.pending.iter().map(|c| c.due_at).max() {
            self.now = self.now.max(last);
        }
        self.pending.drain(..).collect()
    }

    /// Remove a continuation by ticket. Returns true if it was queued.
    pub fn remove(&mut self, ticket: u64) -> bool {
        let before = self.pending.len();
        self.pending.retain(|c| c.ticket != ticket);
        self.pending.len() != before
    }

    /// Drop everything. Returns how many were cancelled.
    pub fn cancel_all(&mut self) -> usize {
        let cancelled = self.pending.len();
        self.pending.clear();
        cancelled
    }
}
