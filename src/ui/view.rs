//! Render model.
//!
//! A `BoardView` is everything a renderer needs for one frame, derived from
//! an engine snapshot plus the UI slice. Renderers read it; they never call
//! back into it.

use serde::Serialize;

use super::clock::GameClock;
use super::settings::Settings;
use crate::cards::{CardIndex, CardState};
use crate::core::Symbol;
use crate::engine::GameState;

/// One card cell.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct CardView {
    pub index: CardIndex,
    pub state: CardState,
    /// Face, only present when the card is face up.
    pub face: Option<Symbol>,
    /// CSS class for the cell.
    pub class: &'static str,
}

/// A full frame.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct BoardView {
    pub cards: Vec<CardView>,
    pub moves_label: String,
    pub timer: String,
    pub show_win_overlay: bool,
    pub theme_class: &'static str,
    pub menu_open: bool,
    pub sound_enabled: bool,
}

impl BoardView {
    /// Build a frame.
    pub fn render(snapshot: &GameState, clock: &GameClock, settings: &Settings) -> Self {
        let cards = snapshot
            .cards()
            .map(|card| CardView {
                index: card.index,
                state: card.state,
                face: card.state.is_face_up().then_some(card.symbol),
                class: card_class(card.state),
            })
            .collect();

        Self {
            cards,
            moves_label: moves_label(snapshot.move_count()),
            timer: clock.display(),
            show_win_overlay: snapshot.is_won(),
            theme_class: settings.theme.css_class(),
            menu_open: settings.menu_open,
            sound_enabled: settings.sound_enabled,
        }
    }
}

/// CSS class for a card state.
#[must_use]
pub fn card_class(state: CardState) -> &'static str {
    match state {
        CardState::Hidden => "card hidden",
        CardState::Revealed => "card revealed",
        CardState::Matched => "card matched",
    }
}

/// `"1 move"`, `"0 moves"`, `"12 moves"`.
#[must_use]
pub fn moves_label(count: u32) -> String {
    if count == 1 {
        "1 move".to_string()
    } else {
        format!("{count} moves")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::Deck;
    use crate::ui::Theme;

    #[test]
    fn test_moves_label() {
        assert_eq!(moves_label(0), "0 moves");
        assert_eq!(moves_label(1), "1 move");
        assert_eq!(moves_label(12), "12 moves");
    }

    #[test]
    fn test_hidden_faces_are_not_leaked() {
        let state = GameState::new(Deck::from_symbols(["a", "b", "a", "b"]).unwrap());
        let view = BoardView::render(&state, &GameClock::new(), &Settings::default());

        assert_eq!(view.cards.len(), 4);
        assert!(view.cards.iter().all(|c| c.face.is_none()));
        assert!(view.cards.iter().all(|c| c.class == "card hidden"));
        assert_eq!(view.moves_label, "0 moves");
        assert_eq!(view.timer, "00:00:00");
        assert!(!view.show_win_overlay);
    }

    #[test]
    fn test_settings_flow_into_view() {
        let state = GameState::new(Deck::from_symbols(["a", "a"]).unwrap());
        let settings = Settings {
            theme: Theme::Dark,
            sound_enabled: false,
            menu_open: true,
        };
        let view = BoardView::render(&state, &GameClock::new(), &settings);

        assert_eq!(view.theme_class, "theme-dark");
        assert!(view.menu_open);
        assert!(!view.sound_enabled);
    }
}
