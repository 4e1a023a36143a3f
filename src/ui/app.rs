//! The widget root.
//!
//! Intents come in (`click`, `new_game`, `tick`, toggles), frames go out
//! (`view`). Child components get snapshots and send intents back here;
//! none of them hold a handle to the engine.

use std::time::Duration;

use super::audio::{AudioCues, AudioSink, SoundSwitch};
use super::clock::GameClock;
use super::settings::Settings;
use super::theme::Theme;
use super::view::BoardView;
use crate::cards::CardIndex;
use crate::core::{ConfigError, GameConfig};
use crate::engine::{MatchEngine, RevealOutcome};

/// Engine plus the presentation slice.
#[derive(Debug)]
pub struct App {
    engine: MatchEngine,
    settings: Settings,
    clock: GameClock,
    sound: SoundSwitch,
}

impl App {
    /// Build a widget with a fresh deal.
    pub fn new(config: GameConfig) -> Result<Self, ConfigError> {
        Ok(Self::with_engine(MatchEngine::new(config)?))
    }

    /// Wrap an existing engine.
    pub fn with_engine(engine: MatchEngine) -> Self {
        let settings = Settings::default();
        Self {
            engine,
            sound: SoundSwitch::new(settings.sound_enabled),
            settings,
            clock: GameClock::new(),
        }
    }

    /// Start from saved settings instead of the defaults.
    #[must_use]
    pub fn with_settings(mut self, settings: Settings) -> Self {
        self.sound.set(settings.sound_enabled);
        self.settings = settings;
        self
    }

    /// Attach an audio backend. Cues follow the sound toggle.
    #[must_use]
    pub fn with_audio<S: AudioSink + 'static>(mut self, sink: S) -> Self {
        self.engine.subscribe(AudioCues::new(sink, self.sound.clone()));
        self
    }

    // === Intents ===

    /// A card was clicked.
    pub fn click(&mut self, index: CardIndex) -> RevealOutcome {
        let outcome = self.engine.reveal(index);
        if outcome.is_accepted() {
            self.clock.start();
        }
        outcome
    }

    /// The "New Game" button.
    pub fn new_game(&mut self) {
        self.engine.new_game();
        self.clock.reset();
    }

    /// Host timer tick: runs the stopwatch and due resolutions.
    pub fn tick(&mut self, elapsed: Duration) {
        self.clock.tick(elapsed);
        self.engine.advance(elapsed);
        if self.engine.state().is_won() {
            self.clock.stop();
        }
    }

    pub fn toggle_theme(&mut self) -> Theme {
        self.settings.toggle_theme()
    }

    pub fn toggle_sound(&mut self) -> bool {
        let enabled = self.settings.toggle_sound();
        self.sound.set(enabled);
        enabled
    }

    pub fn toggle_menu(&mut self) -> bool {
        self.settings.toggle_menu()
    }

    // === Output ===

    /// Current frame.
    #[must_use]
    pub fn view(&self) -> BoardView {
        BoardView::render(self.engine.state(), &self.clock, &self.settings)
    }

    #[must_use]
    pub fn engine(&self) -> &MatchEngine {
        &self.engine
    }

    #[must_use]
    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    #[must_use]
    pub fn clock(&self) -> &GameClock {
        &self.clock
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::Deck;

    fn app() -> App {
        let deck = Deck::from_symbols(["a", "b", "a", "b"]).unwrap();
        App::with_engine(MatchEngine::with_deck(GameConfig::new().with_seed(5), deck).unwrap())
    }

    #[test]
    fn test_clock_starts_on_first_flip() {
        let mut app = app();
        app.tick(Duration::from_secs(3));
        assert_eq!(app.view().timer, "00:00:00");

        app.click(CardIndex(0));
        app.tick(Duration::from_secs(2));
        assert_eq!(app.view().timer, "00:00:02");
    }

    #[test]
    fn test_ignored_click_does_not_start_clock() {
        let mut app = app();
        app.click(CardIndex(99));
        assert!(!app.clock().is_running());
    }

    #[test]
    fn test_new_game_resets_clock() {
        let mut app = app();
        app.click(CardIndex(0));
        app.tick(Duration::from_secs(10));

        app.new_game();

        assert_eq!(app.view().timer, "00:00:00");
        assert!(!app.clock().is_running());
        assert_eq!(app.view().moves_label, "0 moves");
    }

    #[test]
    fn test_with_settings() {
        let settings = Settings {
            theme: Theme::Dark,
            sound_enabled: false,
            menu_open: false,
        };
        let app = app().with_settings(settings);

        assert_eq!(app.view().theme_class, "theme-dark");
        assert!(!app.view().sound_enabled);
    }
}
