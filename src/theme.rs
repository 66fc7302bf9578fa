//! Light/dark theme preference, persisted on every change.
//!
//! The controller never touches the terminal. Callers take the returned
//! [`PresentationHint`] and apply it themselves.

use crate::prefs::{PreferenceStore, THEME_KEY};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ThemePreference {
    #[default]
    Light,
    Dark,
}

impl ThemePreference {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            ThemePreference::Light => "light",
            ThemePreference::Dark => "dark",
        }
    }

    /// Parse a stored value. Only the exact lowercase names are accepted.
    #[must_use]
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "light" => Some(ThemePreference::Light),
            "dark" => Some(ThemePreference::Dark),
            _ => None,
        }
    }

    #[must_use]
    pub fn toggled(self) -> Self {
        match self {
            ThemePreference::Light => ThemePreference::Dark,
            ThemePreference::Dark => ThemePreference::Light,
        }
    }
}

impl std::fmt::Display for ThemePreference {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// What the presentation layer needs to reflect a preference.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PresentationHint {
    pub preference: ThemePreference,
    /// Global dark-mode flag for the renderer.
    pub dark_mode: bool,
    /// Toggle button label; names the mode the toggle switches to.
    pub toggle_label: &'static str,
    pub toggle_title: &'static str,
}

#[must_use]
pub fn presentation_hint(preference: ThemePreference) -> PresentationHint {
    match preference {
        ThemePreference::Light => PresentationHint {
            preference,
            dark_mode: false,
            toggle_label: "Dark",
            toggle_title: "Switch to Dark Mode",
        },
        ThemePreference::Dark => PresentationHint {
            preference,
            dark_mode: true,
            toggle_label: "Light",
            toggle_title: "Switch to Light Mode",
        },
    }
}

type PreferenceObserver = Box<dyn FnMut(ThemePreference)>;

pub struct ThemeController<P> {
    preference: ThemePreference,
    store: P,
    observers: Vec<PreferenceObserver>,
}

impl<P: PreferenceStore> ThemeController<P> {
    /// Controller starts at [`ThemePreference::Light`] until [`Self::initialize`] runs.
    pub fn new(store: P) -> Self {
        Self {
            preference: ThemePreference::default(),
            store,
            observers: Vec::new(),
        }
    }

    /// Load the stored preference (default light) and persist it back.
    pub fn initialize(&mut self) -> PresentationHint {
        let stored = self.store.get(THEME_KEY);
        self.preference = match stored.as_deref() {
            Some(value) => ThemePreference::parse(value).unwrap_or_else(|| {
                tracing::debug!(value, "unknown stored theme; using light");
                ThemePreference::Light
            }),
            None => ThemePreference::Light,
        };
        self.commit()
    }

    pub fn toggle(&mut self) -> PresentationHint {
        self.preference = self.preference.toggled();
        self.commit()
    }

    /// Register a callback run after every change, including initialization.
    pub fn on_preference_changed(&mut self, observer: impl FnMut(ThemePreference) + 'static) {
        self.observers.push(Box::new(observer));
    }

    #[must_use]
    pub fn preference(&self) -> ThemePreference {
        self.preference
    }

    #[must_use]
    pub fn hint(&self) -> PresentationHint {
        presentation_hint(self.preference)
    }

    #[must_use]
    pub fn store(&self) -> &P {
        &self.store
    }

    fn commit(&mut self) -> PresentationHint {
        let preference = self.preference;
        if let Err(err) = self.store.set(THEME_KEY, preference.as_str()) {
            tracing::warn!(error = %err, theme = %preference, "failed to persist theme");
        }
        for observer in &mut self.observers {
            observer(preference);
        }
        presentation_hint(preference)
    }
}
