//! # Playground Configuration
//!
//! Settings, theme and layout. None of these are part of the undo history.
//!
//! [`AppConfig`] is the single process-wide configuration object. It is loaded
//! from the store once at startup, written through on every change, and stored
//! again on teardown.

use serde::{Deserialize, Serialize};

use crate::persistence::{PersistenceBridge, LAYOUT_KEY, SETTINGS_KEY, THEME_KEY};
use crate::store::KeyValueStore;

pub const FONT_SIZE_RANGE: (u32, u32) = (8, 24);
pub const AUTO_RUN_DELAY_RANGE: (u64, u64) = (200, 2000);

/// Editor and auto-run preferences
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Settings {
    #[serde(default = "default_font_size")]
    pub font_size: u32,

    #[serde(default = "default_auto_run")]
    pub auto_run: bool,

    /// Debounce delay in milliseconds
    #[serde(default = "default_auto_run_delay")]
    pub auto_run_delay: u64,
}

fn default_font_size() -> u32 {
    14
}

fn default_auto_run() -> bool {
    true
}

fn default_auto_run_delay() -> u64 {
    500
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            font_size: default_font_size(),
            auto_run: default_auto_run(),
            auto_run_delay: default_auto_run_delay(),
        }
    }
}

impl Settings {
    /// Bound values to what the settings form accepts
    pub fn clamped(self) -> Self {
        Self {
            font_size: self.font_size.clamp(FONT_SIZE_RANGE.0, FONT_SIZE_RANGE.1),
            auto_run: self.auto_run,
            auto_run_delay: self
                .auto_run_delay
                .clamp(AUTO_RUN_DELAY_RANGE.0, AUTO_RUN_DELAY_RANGE.1),
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Dark,
    Light,
}

impl Theme {
    pub fn toggle(self) -> Self {
        match self {
            Theme::Dark => Theme::Light,
            Theme::Light => Theme::Dark,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Theme::Dark => "dark",
            Theme::Light => "light",
        }
    }
}

/// Direction of the editor/preview split
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Layout {
    #[default]
    Horizontal,
    Vertical,
}

impl Layout {
    pub fn toggle(self) -> Self {
        match self {
            Layout::Horizontal => Layout::Vertical,
            Layout::Vertical => Layout::Horizontal,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Layout::Horizontal => "horizontal",
            Layout::Vertical => "vertical",
        }
    }
}

/// Process-wide UI configuration
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AppConfig {
    pub theme: Theme,
    pub layout: Layout,
    pub settings: Settings,

    /// Whether the settings dialog is open (not persisted)
    pub settings_open: bool,
}

impl AppConfig {
    /// Read every persisted part, falling back to defaults per key
    pub fn load<S: KeyValueStore>(bridge: &PersistenceBridge<S>) -> Self {
        Self {
            theme: bridge.load_or(THEME_KEY, Theme::default()),
            layout: bridge.load_or(LAYOUT_KEY, Layout::default()),
            settings: bridge.load_or(SETTINGS_KEY, Settings::default()).clamped(),
            settings_open: false,
        }
    }

    /// Write every persisted part
    pub fn store<S: KeyValueStore>(&self, bridge: &mut PersistenceBridge<S>) {
        bridge.save(THEME_KEY, &self.theme);
        bridge.save(LAYOUT_KEY, &self.layout);
        bridge.save(SETTINGS_KEY, &self.settings);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_settings() {
        let settings = Settings::default();
        assert_eq!(settings.font_size, 14);
        assert!(settings.auto_run);
        assert_eq!(settings.auto_run_delay, 500);
    }

    #[test]
    fn test_parse_settings() {
        let json = r#"{ "fontSize": 18, "autoRun": false, "autoRunDelay": 800 }"#;
        let settings: Settings = serde_json::from_str(json).unwrap();

        assert_eq!(settings.font_size, 18);
        assert!(!settings.auto_run);
        assert_eq!(settings.auto_run_delay, 800);
    }

    #[test]
    fn test_missing_fields_use_defaults() {
        let settings: Settings = serde_json::from_str(r#"{ "autoRun": false }"#).unwrap();
        assert_eq!(settings.font_size, 14);
        assert_eq!(settings.auto_run_delay, 500);
    }

    #[test]
    fn test_clamped() {
        let settings = Settings {
            font_size: 100,
            auto_run: true,
            auto_run_delay: 10,
        }
        .clamped();

        assert_eq!(settings.font_size, 24);
        assert_eq!(settings.auto_run_delay, 200);
    }

    #[test]
    fn test_toggles() {
        assert_eq!(Theme::Dark.toggle(), Theme::Light);
        assert_eq!(Layout::Vertical.toggle(), Layout::Horizontal);
        assert_eq!(serde_json::to_string(&Theme::Light).unwrap(), "\"light\"");
        assert_eq!(serde_json::to_string(&Layout::Horizontal).unwrap(), "\"horizontal\"");
    }

    #[test]
    fn test_load_clamps_and_falls_back() {
        let store = crate::MemoryStore::new()
            .with_value(SETTINGS_KEY, r#"{ "fontSize": 2, "autoRunDelay": 9000 }"#)
            .with_value(THEME_KEY, "not json");
        let config = AppConfig::load(&PersistenceBridge::new(store));

        assert_eq!(config.settings.font_size, 8);
        assert_eq!(config.settings.auto_run_delay, 2000);
        assert_eq!(config.theme, Theme::Dark);
        assert_eq!(config.layout, Layout::Horizontal);
        assert!(!config.settings_open);
    }
}
