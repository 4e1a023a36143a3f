//! Match engine: the card-flipping state machine.
//!
//! ## Lifecycle
//!
//! Each card goes Hidden → Revealed → Matched, or back to Hidden when its
//! pair doesn't match. Globally the engine is Idle (0 or 1 card up),
//! Resolving (2 up, waiting for the settle delay) or Won.
//!
//! ## Timing
//!
//! Resolution is deferred, not blocking. The second reveal schedules a
//! [`Continuation`]; the host drives time with [`MatchEngine::advance`] (or
//! hands continuations back via [`MatchEngine::resume`]). A new game bumps
//! the [`Generation`] so late continuations can't touch the fresh deal.
//!
//! ```
//! use std::time::Duration;
//!
//! use match_em::cards::{CardIndex, Deck};
//! use match_em::core::GameConfig;
//! use match_em::engine::{MatchEngine, Phase};
//!
//! let deck = Deck::from_symbols(["🐶", "🐱", "🐶", "🐱"]).unwrap();
//! let mut engine = MatchEngine::with_deck(GameConfig::new().with_seed(7), deck).unwrap();
//!
//! engine.reveal(CardIndex(0));
//! engine.reveal(CardIndex(2));
//! assert_eq!(engine.phase(), Phase::Resolving);
//!
//! engine.advance(Duration::from_secs(1));
//! assert_eq!(engine.state().matched().len(), 2);
//! assert_eq!(engine.state().move_count(), 1);
//! ```

mod match_engine;
pub mod progress;
pub mod scheduler;
pub mod state;

pub use match_engine::{IgnoreReason, MatchEngine, RevealOutcome};
pub use progress::{MoveCounter, WinDetector};
pub use scheduler::{Continuation, Generation, Resolution, TimerQueue};
pub use state::{GameState, Phase};
