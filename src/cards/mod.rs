//! Cards and decks.
//!
//! ## Key Types
//!
//! - `CardIndex`: Position of a card on the table
//! - `CardState`: Hidden, Revealed or Matched
//! - `Card`: Index, face and state together, as handed to renderers
//! - `Deck`: Ordered faces, two of each symbol

pub mod card;
pub mod deck;

pub use card::{Card, CardIndex, CardState};
pub use deck::{Deck, DeckError};
