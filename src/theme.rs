//! Display Theme
//!
//! Light/dark preference, persisted alongside the session token. Pure
//! presentation: the rest of the app only sees a CSS class.

use crate::session::Session;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    pub fn as_str(self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }

    pub fn from_str(s: &str) -> Self {
        match s {
            "dark" => Theme::Dark,
            _ => Theme::Light,
        }
    }

    /// CSS class applied to the app root.
    pub fn class(self) -> &'static str {
        match self {
            Theme::Light => "theme-light",
            Theme::Dark => "theme-dark",
        }
    }

    pub fn toggled(self) -> Self {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }

    pub fn load(session: &Session) -> Self {
        session
            .theme()
            .map(|s| Theme::from_str(&s))
            .unwrap_or_default()
    }

    pub fn store(self, session: &Session) {
        session.store_theme(self.as_str());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::session::MemoryStorage;

    #[test]
    fn test_defaults_to_light_when_unset() {
        let session = Session::new(MemoryStorage::default());
        assert_eq!(Theme::load(&session), Theme::Light);
    }

    #[test]
    fn test_persisted_round_trip() {
        let session = Session::new(MemoryStorage::default());
        Theme::Dark.store(&session);
        assert_eq!(Theme::load(&session), Theme::Dark);
        assert_eq!(Theme::load(&session).class(), "theme-dark");
    }

    #[test]
    fn test_unknown_value_falls_back_to_light() {
        let session = Session::new(MemoryStorage::default());
        session.store_theme("solarized");
        assert_eq!(Theme::load(&session), Theme::Light);
    }
}
