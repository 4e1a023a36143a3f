//! Card positions and per-card visibility.

use serde::{Deserialize, Serialize};

use crate::core::Symbol;

/// Position of a card on the table, `0..N`.
///
/// Stable for the lifetime of one deal; a new game reuses the same
/// positions with freshly shuffled faces.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct CardIndex(pub u32);

impl CardIndex {
    /// Create a new card index.
    #[must_use]
    pub const fn new(index: u32) -> Self {
        Self(index)
    }

    /// Get the index as a usize (for slice indexing).
    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }

    /// Iterate over every position of an `n`-card table.
    pub fn all(n: usize) -> impl Iterator<Item = CardIndex> {
        (0..u32::try_from(n).unwrap_or(u32::MAX)).map(CardIndex)
    }
}

/// Positions past `u32::MAX` saturate, which no table can hold, so the
/// engine treats them as off the table.
impl From<usize> for CardIndex {
    fn from(index: usize) -> Self {
        Self(u32::try_from(index).unwrap_or(u32::MAX))
    }
}

impl std::fmt::Display for CardIndex {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Card({})", self.0)
    }
}

/// Visibility of a single card.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CardState {
    /// Face down.
    #[default]
    Hidden,
    /// Face up, waiting for its pair to resolve.
    Revealed,
    /// Face up for the rest of the game.
    Matched,
}

impl CardState {
    /// Is the face visible?
    #[must_use]
    pub fn is_face_up(self) -> bool {
        !matches!(self, CardState::Hidden)
    }
}

/// A card as seen in a snapshot: where it is, what it shows, how it lies.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Card {
    pub index: CardIndex,
    pub symbol: Symbol,
    pub state: CardState,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_card_index() {
        let index = CardIndex::new(5);
        assert_eq!(index.index(), 5);
        assert_eq!(format!("{}", index), "Card(5)");
        assert_eq!(CardIndex::from(3usize), CardIndex(3));
    }

    #[test]
    fn test_card_index_all() {
        let all: Vec<_> = CardIndex::all(3).collect();
        assert_eq!(all, vec![CardIndex(0), CardIndex(1), CardIndex(2)]);
        assert_eq!(CardIndex::all(0).count(), 0);
    }

    #[cfg(target_pointer_width = "64")]
    #[test]
    fn test_oversized_index_saturates() {
        assert_eq!(CardIndex::from(u32::MAX as usize + 7), CardIndex(u32::MAX));
        assert_eq!(CardIndex::all(usize::MAX).next(), Some(CardIndex(0)));
    }

    #[test]
    fn test_card_state_face_up() {
        assert!(!CardState::Hidden.is_face_up());
        assert!(CardState::Revealed.is_face_up());
        assert!(CardState::Matched.is_face_up());
        assert_eq!(CardState::default(), CardState::Hidden);
    }
}
