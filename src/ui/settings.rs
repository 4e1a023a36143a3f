//! Settings menu state.
//!
//! The menu holds two toggles, sound and theme, behind a cog button. This
//! is plain state: nothing here reaches into the page.

use serde::{Deserialize, Serialize};

use super::theme::Theme;

/// User-facing settings.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub theme: Theme,
    pub sound_enabled: bool,
    pub menu_open: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            theme: Theme::Light,
            sound_enabled: true,
            menu_open: false,
        }
    }
}

impl Settings {
    /// Switch between light and dark. Returns the new theme.
    pub fn toggle_theme(&mut self) -> Theme {
        self.theme = self.theme.toggled();
        self.theme
    }

    /// Mute or unmute. Returns whether sound is now on.
    pub fn toggle_sound(&mut self) -> bool {
        self.sound_enabled = !self.sound_enabled;
        self.sound_enabled
    }

    /// Open or close the menu. Returns whether it is now open.
    pub fn toggle_menu(&mut self) -> bool {
        self.menu_open = !self.menu_open;
        self.menu_open
    }
}
