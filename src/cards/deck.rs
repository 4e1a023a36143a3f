//! Deck construction.
//!
//! A deck is the ordered list of faces on the table. Every face appears
//! exactly twice. Decks are normally dealt by [`Deck::deal`]; hosts and tests
//! that need a fixed layout go through [`Deck::from_symbols`], which enforces
//! the same pairing rule.

use im::Vector;
use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::CardIndex;
use crate::core::{GameRng, Symbol};

/// Reasons a fixed layout can't be used as a deck.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum DeckError {
    #[error("deck is empty")]
    Empty,

    #[error("deck has an odd number of cards ({0})")]
    OddLength(usize),

    #[error("symbol {symbol} appears {count} times, expected 2")]
    WrongMultiplicity { symbol: Symbol, count: usize },
}

/// Ordered sequence of card faces, two of each.
///
/// Backed by `im::Vector` so snapshots share structure with the live game.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Deck {
    faces: Vector<Symbol>,
}

impl Deck {
    /// Lay out each symbol twice, in order, without shuffling.
    ///
    /// `[a, b]` becomes `[a, a, b, b]`.
    pub fn paired(symbols: &[Symbol]) -> Self {
        let faces = symbols
            .iter()
            .flat_map(|s| [s.clone(), s.clone()])
            .collect();
        Self { faces }
    }

    /// Build a fresh shuffled deck from distinct symbols.
    pub fn deal(symbols: &[Symbol], rng: &mut GameRng) -> Self {
        let mut faces: Vec<Symbol> = Self::paired(symbols).faces.into_iter().collect();
        rng.shuffle(&mut faces);
        Self {
            faces: faces.into_iter().collect(),
        }
    }

    /// Use a fixed layout. Every symbol must appear exactly twice.
    pub fn from_symbols<I, S>(faces: I) -> Result<Self, DeckError>
    where
        I: IntoIterator<Item = S>,
        S: Into<Symbol>,
    {
        let faces: Vector<Symbol> = faces.into_iter().map(Into::into).collect();

        if faces.is_empty() {
            return Err(DeckError::Empty);
        }
        if faces.len() % 2 != 0 {
            return Err(DeckError::OddLength(faces.len()));
        }

        let deck = Self { faces };
        let counts = deck.symbol_counts();
        // Report in table order so the error is stable.
        for symbol in deck.faces.iter() {
            let count = counts[symbol];
            if count != 2 {
                return Err(DeckError::WrongMultiplicity {
                    symbol: symbol.clone(),
                    count,
                });
            }
        }

        Ok(deck)
    }

    /// Number of cards.
    #[must_use]
    pub fn len(&self) -> usize {
        self.faces.len()
    }

    /// True if the deck holds no cards.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.faces.is_empty()
    }

    /// Face at a position.
    #[must_use]
    pub fn get(&self, index: CardIndex) -> Option<&Symbol> {
        self.faces.get(index.index())
    }

    /// Faces in table order.
    pub fn iter(&self) -> impl Iterator<Item = &Symbol> {
        self.faces.iter()
    }

    /// Distinct faces in order of first appearance.
    #[must_use]
    pub fn distinct_symbols(&self) -> Vec<Symbol> {
        let mut out: Vec<Symbol> = Vec::with_capacity(self.len() / 2);
        for symbol in self.faces.iter() {
            if !out.contains(symbol) {
                out.push(symbol.clone());
            }
        }
        out
    }

    /// How many times each face appears.
    #[must_use]
    pub fn symbol_counts(&self) -> FxHashMap<Symbol, usize> {
        let mut counts = FxHashMap::default();
        for symbol in self.faces.iter() {
            *counts.entry(symbol.clone()).or_insert(0) += 1;
        }
        counts
    }
}
