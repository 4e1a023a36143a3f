//! Python bindings for the match engine.
//!
//! Lets scripts and headless test harnesses drive a game without a browser.
//!
//! # Quick Start
//!
//! ```python
//! import match_em
//!
//! game = match_em.MatchEngine(seed=42)
//! game.reveal(0)
//! game.reveal(1)
//! game.settle()
//! print(game.moves, game.card_states())
//! ```

use pyo3::prelude::*;

mod py_engine;

pub use py_engine::*;

/// match_em: memory-matching card game engine.
#[pymodule]
fn match_em(m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_class::<PyMatchEngine>()?;
    Ok(())
}
