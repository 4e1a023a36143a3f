//! Core building blocks: RNG, card faces, configuration.
//!
//! Nothing in here knows about the matching rules; the engine module
//! builds on these.

pub mod rng;
pub mod symbol;
pub mod config;

pub use rng::GameRng;
pub use symbol::Symbol;
pub use config::{ConfigError, GameConfig, DEFAULT_SYMBOLS};
