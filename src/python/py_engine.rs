//! Engine bindings for Python.

use pyo3::exceptions::PyValueError;
use pyo3::prelude::*;

use crate::cards::{CardIndex, CardState};
use crate::core::GameConfig;
use crate::engine::{MatchEngine, Phase};

/// Python wrapper for MatchEngine.
#[pyclass(name = "MatchEngine")]
#[derive(Debug)]
pub struct PyMatchEngine {
    inner: MatchEngine,
}

#[pymethods]
impl PyMatchEngine {
    /// Create a game. Uses the default faces unless `symbols` is given.
    #[new]
    #[pyo3(signature = (seed=None, symbols=None))]
    fn new(seed: Option<u64>, symbols: Option<Vec<String>>) -> PyResult<Self> {
        let mut config = GameConfig::new();
        if let Some(symbols) = symbols {
            config = config.with_symbols(symbols);
        }
        if let Some(seed) = seed {
            config = config.with_seed(seed);
        }

        MatchEngine::new(config)
            .map(|inner| Self { inner })
            .map_err(|e| PyValueError::new_err(e.to_string()))
    }

    /// Flip a card. Returns False if the click was ignored.
    fn reveal(&mut self, index: u32) -> bool {
        self.inner.reveal(CardIndex::new(index)).is_accepted()
    }

    /// Reshuffle and reset.
    fn new_game(&mut self) {
        self.inner.new_game();
    }

    /// Advance the engine clock. Returns the number of pairs resolved.
    fn advance_ms(&mut self, ms: u64) -> usize {
        self.inner.advance(std::time::Duration::from_millis(ms))
    }

    /// Resolve anything pending immediately.
    fn settle(&mut self) -> usize {
        self.inner.settle()
    }

    #[getter]
    fn moves(&self) -> u32 {
        self.inner.state().move_count()
    }

    #[getter]
    fn won(&self) -> bool {
        self.inner.state().is_won()
    }

    #[getter]
    fn phase(&self) -> &'static str {
        match self.inner.phase() {
            Phase::Idle => "idle",
            Phase::Resolving => "resolving",
            Phase::Won => "won",
        }
    }

    /// Faces in table order.
    fn deck(&self) -> Vec<String> {
        self.inner
            .state()
            .deck()
            .iter()
            .map(|s| s.as_str().to_string())
            .collect()
    }

    /// "hidden" / "revealed" / "matched" per card.
    fn card_states(&self) -> Vec<&'static str> {
        self.inner
            .state()
            .cards()
            .map(|card| match card.state {
                CardState::Hidden => "hidden",
                CardState::Revealed => "revealed",
                CardState::Matched => "matched",
            })
            .collect()
    }

    fn __repr__(&self) -> String {
        format!(
            "MatchEngine(cards={}, moves={}, phase={})",
            self.inner.state().card_count(),
            self.inner.state().move_count(),
            self.phase()
        )
    }
}
