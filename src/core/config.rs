//! Game configuration.
//!
//! Hosts configure a session by providing:
//! - The card faces (each dealt twice)
//! - Settle delays for match and mismatch resolution
//! - An optional seed for reproducible deals
//!
//! Configs are serde-friendly so a host page can ship them as JSON.

use std::time::Duration;

use rustc_hash::FxHashSet;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::Symbol;
use crate::cards::DeckError;

/// Faces dealt when the host doesn't supply its own.
pub const DEFAULT_SYMBOLS: [&str; 6] = ["🤪", "😎", "😭", "🥸", "🤠", "🥶"];

/// Default pause before a matching pair is committed.
pub const DEFAULT_MATCH_DELAY_MS: u64 = 500;

/// Default pause before a mismatched pair flips back.
pub const DEFAULT_MISMATCH_DELAY_MS: u64 = 750;

/// Errors raised while building a game session.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("at least one symbol is required")]
    NoSymbols,

    #[error("symbol {0} is listed more than once")]
    DuplicateSymbol(Symbol),

    #[error("mismatch delay ({mismatch_ms}ms) must not be shorter than match delay ({match_ms}ms)")]
    MismatchFasterThanMatch { match_ms: u64, mismatch_ms: u64 },

    #[error("invalid config JSON: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("invalid deck: {0}")]
    Deck(#[from] DeckError),
}

/// Complete session configuration.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// Distinct card faces. Each is dealt exactly twice.
    pub symbols: Vec<Symbol>,

    /// Settle delay before a matching pair becomes Matched, in milliseconds.
    pub match_delay_ms: u64,

    /// Settle delay before a mismatched pair flips back, in milliseconds.
    pub mismatch_delay_ms: u64,

    /// Fixed seed for reproducible deals. `None` seeds from entropy.
    pub seed: Option<u64>,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            symbols: DEFAULT_SYMBOLS.iter().copied().map(Symbol::new).collect(),
            match_delay_ms: DEFAULT_MATCH_DELAY_MS,
            mismatch_delay_ms: DEFAULT_MISMATCH_DELAY_MS,
            seed: None,
        }
    }
}

impl GameConfig {
    /// Create the default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse and validate a JSON configuration. Missing fields take defaults.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Replace the card faces.
    #[must_use]
    pub fn with_symbols<I, S>(mut self, symbols: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<Symbol>,
    {
        self.symbols = symbols.into_iter().map(Into::into).collect();
        self
    }

    /// Set both settle delays.
    #[must_use]
    pub fn with_delays(mut self, match_delay: Duration, mismatch_delay: Duration) -> Self {
        self.match_delay_ms = duration_ms(match_delay);
        self.mismatch_delay_ms = duration_ms(mismatch_delay);
        self
    }

    /// Fix the RNG seed.
    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Settle delay for a matching pair.
    #[must_use]
    pub fn match_delay(&self) -> Duration {
        Duration::from_millis(self.match_delay_ms)
    }

    /// Settle delay for a mismatched pair.
    #[must_use]
    pub fn mismatch_delay(&self) -> Duration {
        Duration::from_millis(self.mismatch_delay_ms)
    }

    /// Number of cards on the table.
    #[must_use]
    pub fn card_count(&self) -> usize {
        self.symbols.len() * 2
    }

    /// Check the config can produce a playable game.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.symbols.is_empty() {
            return Err(ConfigError::NoSymbols);
        }

        let mut seen = FxHashSet::default();
        for symbol in &self.symbols {
            if !seen.insert(symbol) {
                return Err(ConfigError::DuplicateSymbol(symbol.clone()));
            }
        }

        if self.mismatch_delay_ms < self.match_delay_ms {
            return Err(ConfigError::MismatchFasterThanMatch {
                match_ms: self.match_delay_ms,
                mismatch_ms: self.mismatch_delay_ms,
            });
        }

        Ok(())
    }
}

/// Whole milliseconds, saturating at `u64::MAX`.
pub(crate) fn duration_ms(duration: Duration) -> u64 {
    u64::try_from(duration.as_millis()).unwrap_or(u64::MAX)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = GameConfig::default();

        assert_eq!(config.symbols.len(), 6);
        assert_eq!(config.card_count(), 12);
        assert_eq!(config.match_delay(), Duration::from_millis(500));
        assert_eq!(config.mismatch_delay(), Duration::from_millis(750));
        assert_eq!(config.seed, None);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_builder() {
        let config = GameConfig::new()
            .with_symbols(["a", "b"])
            .with_delays(Duration::from_millis(10), Duration::from_millis(20))
            .with_seed(9);

        assert_eq!(config.symbols, vec![Symbol::new("a"), Symbol::new("b")]);
        assert_eq!(config.match_delay_ms, 10);
        assert_eq!(config.mismatch_delay_ms, 20);
        assert_eq!(config.seed, Some(9));
    }

    #[test]
    fn test_validate_rejects_empty() {
        let config = GameConfig::new().with_symbols(Vec::<Symbol>::new());
        assert!(matches!(config.validate(), Err(ConfigError::NoSymbols)));
    }

    #[test]
    fn test_validate_rejects_duplicates() {
        let config = GameConfig::new().with_symbols(["a", "b", "a"]);
        match config.validate() {
            Err(ConfigError::DuplicateSymbol(symbol)) => assert_eq!(symbol.as_str(), "a"),
            other => panic!("unexpected: {other:?}"),
        }
    }

    #[test]
    fn test_validate_rejects_fast_mismatch() {
        let config = GameConfig::new()
            .with_delays(Duration::from_millis(800), Duration::from_millis(700));
        assert!(matches!(
            config.validate(),
            Err(ConfigError::MismatchFasterThanMatch { match_ms: 800, mismatch_ms: 700 })
        ));
    }

    #[test]
    fn test_equal_delays_are_allowed() {
        let config = GameConfig::new()
            .with_delays(Duration::from_millis(700), Duration::from_millis(700));
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_from_json_with_defaults() {
        let config = GameConfig::from_json(r#"{ "symbols": ["🐶", "🐱"], "seed": 3 }"#).unwrap();

        assert_eq!(config.card_count(), 4);
        assert_eq!(config.seed, Some(3));
        assert_eq!(config.match_delay_ms, DEFAULT_MATCH_DELAY_MS);
    }

    #[test]
    fn test_from_json_errors() {
        assert!(matches!(GameConfig::from_json("{"), Err(ConfigError::Parse(_))));
        assert!(matches!(
            GameConfig::from_json(r#"{ "symbols": [] }"#),
            Err(ConfigError::NoSymbols)
        ));
    }

    #[test]
    fn test_config_serde() {
        let config = GameConfig::new().with_seed(1);
        let json = serde_json::to_string(&config).unwrap();
        let back: GameConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(config, back);
    }

    #[test]
    fn test_duration_ms_saturates() {
        assert_eq!(duration_ms(Duration::from_millis(750)), 750);
        assert_eq!(duration_ms(Duration::MAX), u64::MAX);
    }
}
