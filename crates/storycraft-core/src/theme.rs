//! Light/dark theme resolution and persistence.
//!
//! One `ThemeController` exists per session, created at bootstrap and shared
//! by every surface that needs the mode. The persisted value is a side effect
//! of mutation, not a source of truth queried ad hoc: after `initialize` the
//! resolved mode lives on the controller.

use serde::{Deserialize, Serialize};

use crate::settings::Settings;

/// Storage key for the persisted theme flag.
pub const THEME_STORAGE_KEY: &str = "theme";

/// The two presentation modes. Exactly one is active at any time.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemeMode {
    Light,
    Dark,
}

impl ThemeMode {
    pub fn flipped(self) -> Self {
        match self {
            ThemeMode::Light => ThemeMode::Dark,
            ThemeMode::Dark => ThemeMode::Light,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            ThemeMode::Light => "light",
            ThemeMode::Dark => "dark",
        }
    }

    /// Parse a persisted value. Unknown strings are treated as absent so a
    /// corrupted flag falls back to the system preference.
    pub fn parse(raw: &str) -> Option<Self> {
        match raw {
            "light" => Some(ThemeMode::Light),
            "dark" => Some(ThemeMode::Dark),
            _ => None,
        }
    }

    pub fn is_dark(self) -> bool {
        self == ThemeMode::Dark
    }
}

/// Applies a resolved mode to the document-level presentation state.
///
/// In the desktop app this flips the `dark` class on the root element; tests
/// record the applied modes instead.
pub trait AppearanceSink {
    fn apply(&mut self, mode: ThemeMode);
}

/// Process-wide theme state.
pub struct ThemeController<S, A> {
    store: S,
    sink: A,
    resolved: Option<ThemeMode>,
}

impl<S: Settings, A: AppearanceSink> ThemeController<S, A> {
    pub fn new(store: S, sink: A) -> Self {
        Self {
            store,
            sink,
            resolved: None,
        }
    }

    /// Resolve the mode: the persisted value wins, otherwise the system-level
    /// dark preference. Applies the resolved mode before returning so the
    /// first paint is already themed.
    ///
    /// Idempotent: a second call observes the already-resolved mode and does
    /// not re-read storage or re-apply.
    pub fn initialize(&mut self, system_prefers_dark: bool) -> ThemeMode {
        if let Some(mode) = self.resolved {
            return mode;
        }

        let mode = self
            .store
            .get(THEME_STORAGE_KEY)
            .and_then(|raw| ThemeMode::parse(&raw))
            .unwrap_or(if system_prefers_dark {
                ThemeMode::Dark
            } else {
                ThemeMode::Light
            });

        self.sink.apply(mode);
        self.resolved = Some(mode);
        mode
    }

    /// The currently resolved mode, if `initialize` has run.
    pub fn mode(&self) -> Option<ThemeMode> {
        self.resolved
    }

    /// Flip the mode, re-apply the presentation marker, and persist the new
    /// value. A failed write degrades to in-memory state only; visual state
    /// and the returned mode are unaffected.
    pub fn toggle(&mut self) -> ThemeMode {
        let next = self.resolved.unwrap_or(ThemeMode::Light).flipped();
        self.sink.apply(next);
        if let Err(e) = self.store.set(THEME_STORAGE_KEY, next.as_str()) {
            tracing::warn!(error = %e, "failed to persist theme, keeping in-memory state");
        }
        self.resolved = Some(next);
        next
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::CoreError;
    use crate::settings::MemorySettings;

    /// Records every applied mode.
    #[derive(Default)]
    struct RecordingSink(Vec<ThemeMode>);

    impl AppearanceSink for &mut RecordingSink {
        fn apply(&mut self, mode: ThemeMode) {
            self.0.push(mode);
        }
    }

    /// A store whose writes always fail.
    struct BrokenSettings;

    impl Settings for BrokenSettings {
        fn get(&self, _key: &str) -> Option<String> {
            None
        }

        fn set(&mut self, _key: &str, _value: &str) -> Result<(), CoreError> {
            Err(CoreError::Io(std::io::Error::other("disk on fire")))
        }
    }

    #[test]
    fn no_persisted_value_uses_system_preference() {
        let mut sink = RecordingSink::default();
        let mut theme = ThemeController::new(MemorySettings::new(), &mut sink);
        assert_eq!(theme.initialize(true), ThemeMode::Dark);
        drop(theme);
        // Applied before the call returned.
        assert_eq!(sink.0, vec![ThemeMode::Dark]);
    }

    #[test]
    fn persisted_value_wins_over_system_preference() {
        let mut store = MemorySettings::new();
        store.set(THEME_STORAGE_KEY, "light").unwrap();
        let mut sink = RecordingSink::default();
        let mut theme = ThemeController::new(store, &mut sink);
        assert_eq!(theme.initialize(true), ThemeMode::Light);
    }

    #[test]
    fn initialize_is_idempotent() {
        let mut sink = RecordingSink::default();
        let mut theme = ThemeController::new(MemorySettings::new(), &mut sink);
        let first = theme.initialize(true);
        let second = theme.initialize(false);
        assert_eq!(first, second);
        drop(theme);
        // The second call did not re-apply.
        assert_eq!(sink.0.len(), 1);
    }

    #[test]
    fn toggle_flips_persists_and_applies() {
        let mut sink = RecordingSink::default();
        let mut theme = ThemeController::new(MemorySettings::new(), &mut sink);
        theme.initialize(false);
        assert_eq!(theme.toggle(), ThemeMode::Dark);
        assert_eq!(theme.mode(), Some(ThemeMode::Dark));
        assert_eq!(
            theme.store.get(THEME_STORAGE_KEY),
            Some("dark".to_string())
        );
        drop(theme);
        assert_eq!(sink.0, vec![ThemeMode::Light, ThemeMode::Dark]);
    }

    #[test]
    fn toggle_twice_returns_to_original() {
        let mut sink = RecordingSink::default();
        let mut theme = ThemeController::new(MemorySettings::new(), &mut sink);
        let start = theme.initialize(true);
        theme.toggle();
        assert_eq!(theme.toggle(), start);
    }

    #[test]
    fn broken_store_degrades_to_in_memory_mode() {
        let mut sink = RecordingSink::default();
        let mut theme = ThemeController::new(BrokenSettings, &mut sink);
        theme.initialize(false);
        // Does not panic, and the in-memory mode still flips.
        assert_eq!(theme.toggle(), ThemeMode::Dark);
        assert_eq!(theme.mode(), Some(ThemeMode::Dark));
    }

    #[test]
    fn corrupted_persisted_value_falls_back_to_system_preference() {
        let mut store = MemorySettings::new();
        store.set(THEME_STORAGE_KEY, "mauve").unwrap();
        let mut sink = RecordingSink::default();
        let mut theme = ThemeController::new(store, &mut sink);
        assert_eq!(theme.initialize(true), ThemeMode::Dark);
    }
}
