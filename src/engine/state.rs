//! Game state and its read-only snapshot.
//!
//! `GameState` is owned by the [`MatchEngine`](super::MatchEngine). Renderers
//! get a clone via `snapshot()`; the deck and matched set are `im`
//! structures, so that clone shares storage with the live game.
//!
//! ## Invariants
//!
//! - `revealed` and `matched` are disjoint
//! - `revealed` holds at most two cards
//! - `won` is only set once every card is matched

use im::OrdSet;
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use super::progress::MoveCounter;
use crate::cards::{Card, CardIndex, CardState, Deck};
use crate::core::Symbol;

/// Engine-level phase, derived from the state.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Phase {
    /// Zero or one card face up; clicks are accepted.
    Idle,
    /// Two cards face up; clicks are ignored until the pair resolves.
    Resolving,
    /// Every card matched.
    Won,
}

/// Complete state of one deal.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameState {
    deck: Deck,
    /// Face-up, unresolved cards in reveal order.
    revealed: SmallVec<[CardIndex; 2]>,
    matched: OrdSet<CardIndex>,
    moves: MoveCounter,
    won: bool,
}

impl GameState {
    /// Fresh state for a deal: everything hidden, no moves.
    #[must_use]
    pub fn new(deck: Deck) -> Self {
        Self {
            deck,
            revealed: SmallVec::new(),
            matched: OrdSet::new(),
            moves: MoveCounter::new(),
            won: false,
        }
    }

    // === Queries ===

    /// The dealt faces.
    #[must_use]
    pub fn deck(&self) -> &Deck {
        &self.deck
    }

    /// Number of cards on the table.
    #[must_use]
    pub fn card_count(&self) -> usize {
        self.deck.len()
    }

    /// Face-up, unresolved cards in reveal order.
    #[must_use]
    pub fn revealed(&self) -> &[CardIndex] {
        &self.revealed
    }

    /// Cards permanently face up.
    #[must_use]
    pub fn matched(&self) -> &OrdSet<CardIndex> {
        &self.matched
    }

    /// Completed pair attempts.
    #[must_use]
    pub fn move_count(&self) -> u32 {
        self.moves.count()
    }

    /// Has the game been won?
    #[must_use]
    pub fn is_won(&self) -> bool {
        self.won
    }

    /// Current phase.
    #[must_use]
    pub fn phase(&self) -> Phase {
        if self.won {
            Phase::Won
        } else if self.revealed.len() >= 2 {
            Phase::Resolving
        } else {
            Phase::Idle
        }
    }

    /// True once every card is in the matched set.
    #[must_use]
    pub fn all_matched(&self) -> bool {
        !self.deck.is_empty() && self.matched.len() == self.deck.len()
    }

    /// Is the index on the table?
    #[must_use]
    pub fn contains(&self, index: CardIndex) -> bool {
        index.index() < self.deck.len()
    }

    /// Face at a position.
    #[must_use]
    pub fn symbol(&self, index: CardIndex) -> Option<&Symbol> {
        self.deck.get(index)
    }

    /// Visibility of a card. Out-of-range indices read as Hidden.
    #[must_use]
    pub fn card_state(&self, index: CardIndex) -> CardState {
        if self.matched.contains(&index) {
            CardState::Matched
        } else if self.revealed.contains(&index) {
            CardState::Revealed
        } else {
            CardState::Hidden
        }
    }

    /// A single card.
    #[must_use]
    pub fn card(&self, index: CardIndex) -> Option<Card> {
        let symbol = self.symbol(index)?.clone();
        Some(Card {
            index,
            symbol,
            state: self.card_state(index),
        })
    }

    /// Every card in table order.
    pub fn cards(&self) -> impl Iterator<Item = Card> + '_ {
        CardIndex::all(self.deck.len())
            .zip(self.deck.iter())
            .map(move |(index, symbol)| Card {
                index,
                symbol: symbol.clone(),
                state: self.card_state(index),
            })
    }

    // === Mutation (engine only) ===

    pub(crate) fn push_revealed(&mut self, index: CardIndex) {
        debug_assert!(self.revealed.len() < 2);
        debug_assert!(!self.matched.contains(&index));
        self.revealed.push(index);
    }

    /// Move a revealed pair into the matched set and count the move.
    pub(crate) fn commit_match(&mut self, first: CardIndex, second: CardIndex) {
        self.revealed.retain(|i| *i != first && *i != second);
        self.matched.insert(first);
        self.matched.insert(second);
        self.moves.record_attempt();
    }

    /// Flip a revealed pair back down and count the move.
    pub(crate) fn revert_mismatch(&mut self, first: CardIndex, second: CardIndex) {
        self.revealed.retain(|i| *i != first && *i != second);
        self.moves.record_attempt();
    }

    pub(crate) fn mark_won(&mut self) {
        self.won = true;
    }
}
