//! User preference state.
//!
//! # Invariants
//! - Defaults match first launch: dark theme, notifications off.
//! - Changes are in-memory only; nothing here persists.

use crate::feedback::Notification;
use serde::{Deserialize, Serialize};

/// Color theme choice.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Theme {
    Light,
    #[default]
    Dark,
    /// Follow the host platform preference.
    System,
}

/// Preference panel state.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Settings {
    pub theme: Theme,
    pub notifications_enabled: bool,
}

impl Settings {
    pub fn set_theme(&mut self, theme: Theme) {
        self.theme = theme;
    }

    /// Applies the dark-mode switch: `true` selects dark, `false` light.
    pub fn set_dark_mode(&mut self, enabled: bool) {
        self.theme = if enabled { Theme::Dark } else { Theme::Light };
    }

    pub fn is_dark_mode(&self) -> bool {
        self.theme == Theme::Dark
    }

    /// Stores the notification flag and returns the confirmation to show.
    pub fn set_notifications_enabled(&mut self, enabled: bool) -> Notification {
        self.notifications_enabled = enabled;
        if enabled {
            Notification::new(
                "Notifications Enabled",
                "You will now receive notifications",
            )
        } else {
            Notification::new(
                "Notifications Disabled",
                "You will no longer receive notifications",
            )
        }
    }
}
