//! Presentation slice.
//!
//! Header, settings menu, stopwatch, sound cues and the render model. All of
//! it is local state owned by [`App`]; the engine never depends on it.
//!
//! ## Data flow
//!
//! - Intents go up: `App::click`, `App::new_game`, `App::tick`, toggles
//! - Frames come down: `App::view` builds a [`BoardView`] from a snapshot
//! - Side effects hang off engine events (see [`AudioCues`])

pub mod app;
pub mod audio;
pub mod clock;
pub mod settings;
pub mod theme;
pub mod view;

pub use app::App;
pub use audio::{AudioCues, AudioSink, SoundCue, SoundSwitch};
pub use clock::GameClock;
pub use settings::Settings;
pub use theme::Theme;
pub use view::{card_class, moves_label, BoardView, CardView};
