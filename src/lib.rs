//! # match-em
//!
//! A memory-matching card game engine. Cards are dealt face down in pairs;
//! the player flips two at a time, matching pairs stay up, mismatches flip
//! back after a short pause.
//!
//! ## Design Principles
//!
//! 1. **One entry point**: The [`MatchEngine`] owns the game. Hosts send
//!    intents (`reveal`, `new_game`) and read snapshots. Nothing else mutates
//!    game state.
//!
//! 2. **No faults from clicks**: Every invalid click is a no-op. The only
//!    fallible calls are the constructors, which validate configuration.
//!
//! 3. **Virtual time**: Settle delays are scheduled continuations on a clock
//!    the host advances. A generation counter makes continuations from an
//!    abandoned game harmless.
//!
//! 4. **Side effects are listeners**: Sound and other chrome subscribe to
//!    engine events and can fail without affecting the game.
//!
//! ## Modules
//!
//! - `core`: RNG, card faces, configuration
//! - `cards`: Card positions, visibility, deck construction
//! - `engine`: The state machine, scheduler, move and win tracking
//! - `events`: Transition events and the listener bus
//! - `ui`: Theme, settings, stopwatch, sound cues, render model

pub mod core;
pub mod cards;
pub mod engine;
pub mod events;
pub mod ui;

#[cfg(feature = "python")]
pub mod python;

// Re-export commonly used types
pub use crate::core::{ConfigError, GameConfig, GameRng, Symbol};

pub use crate::cards::{Card, CardIndex, CardState, Deck, DeckError};

pub use crate::engine::{
    Continuation, Generation, GameState, IgnoreReason, MatchEngine, MoveCounter, Phase,
    Resolution, RevealOutcome, TimerQueue, WinDetector,
};

pub use crate::events::{EngineEvent, EventBus, EventListener, ListenerError, ListenerId};

pub use crate::ui::{App, AudioCues, AudioSink, BoardView, CardView, GameClock, Settings, SoundCue, SoundSwitch, Theme};
