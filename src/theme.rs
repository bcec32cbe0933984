//! Color Theme
//!
//! Light/dark/system preference, persisted in localStorage and applied as a
//! class on the root `<html>` element.

use crate::config::THEME_STORAGE_KEY;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Theme {
    Light,
    Dark,
    #[default]
    System,
}

impl Theme {
    pub fn as_str(self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
            Theme::System => "system",
        }
    }

    /// Unknown values fall back to `System`
    pub fn parse(raw: &str) -> Self {
        match raw.trim() {
            "light" => Theme::Light,
            "dark" => Theme::Dark,
            _ => Theme::System,
        }
    }

    /// Light -> Dark -> System -> Light
    pub fn next(self) -> Self {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::System,
            Theme::System => Theme::Light,
        }
    }

    /// Class to put on `<html>`, given the OS dark-mode preference
    pub fn resolved_class(self, prefers_dark: bool) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
            Theme::System if prefers_dark => "dark",
            Theme::System => "light",
        }
    }

    pub fn icon(self) -> &'static str {
        match self {
            Theme::Light => "☀",
            Theme::Dark => "☾",
            Theme::System => "◐",
        }
    }
}

fn local_storage() -> Option<web_sys::Storage> {
    web_sys::window()?.local_storage().ok().flatten()
}

pub fn load_theme() -> Theme {
    local_storage()
        .and_then(|s| s.get_item(THEME_STORAGE_KEY).ok().flatten())
        .map(|raw| Theme::parse(&raw))
        .unwrap_or_default()
}

/// Persist and apply to the document root
pub fn apply_theme(theme: Theme) {
    if let Some(storage) = local_storage() {
        let _ = storage.set_item(THEME_STORAGE_KEY, theme.as_str());
    }
    let Some(window) = web_sys::window() else { return };
    let prefers_dark = window
        .match_media("(prefers-color-scheme: dark)")
        .ok()
        .flatten()
        .map(|m| m.matches())
        .unwrap_or(false);
    if let Some(root) = window.document().and_then(|d| d.document_element()) {
        let classes = root.class_list();
        let _ = classes.remove_2("light", "dark");
        let _ = classes.add_1(theme.resolved_class(prefers_dark));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_round_trips_names() {
        for theme in [Theme::Light, Theme::Dark, Theme::System] {
            assert_eq!(Theme::parse(theme.as_str()), theme);
        }
        assert_eq!(Theme::parse("sepia"), Theme::System);
    }

    #[test]
    fn test_next_cycles_through_all() {
        let start = Theme::Light;
        assert_eq!(start.next().next().next(), start);
    }

    #[test]
    fn test_system_follows_os_preference() {
        assert_eq!(Theme::System.resolved_class(true), "dark");
        assert_eq!(Theme::System.resolved_class(false), "light");
        assert_eq!(Theme::Light.resolved_class(true), "light");
    }
}
