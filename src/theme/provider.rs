//! Theme state shared by the shell.
//!
//! Before [`ThemeProvider::mount`] the provider only knows its default; the
//! toggle stays hidden and nothing is written. Mounting reads the saved
//! preference once, and every later change is persisted.

use super::palette::Palette;
use super::preference::{PreferenceStore, ThemePreference};
use super::signal::DarkModeSignal;

pub struct ThemeProvider {
    theme: ThemePreference,
    default_theme: ThemePreference,
    mounted: bool,
    store: Box<dyn PreferenceStore>,
    signal: Box<dyn DarkModeSignal>,
}

impl ThemeProvider {
    pub fn new(
        default_theme: ThemePreference,
        store: Box<dyn PreferenceStore>,
        signal: Box<dyn DarkModeSignal>,
    ) -> Self {
        Self {
            theme: default_theme,
            default_theme,
            mounted: false,
            store,
            signal,
        }
    }

    /// Resolve the starting theme. A saved preference wins; otherwise a
    /// `system` default becomes the terminal's concrete value.
    pub fn mount(&mut self) {
        if self.mounted {
            return;
        }
        self.mounted = true;

        let saved = self.store.get_preference();
        match saved.as_deref().map(|raw| (raw, ThemePreference::parse(raw))) {
            Some((_, Some(theme))) => self.theme = theme,
            Some((raw, None)) => {
                tracing::warn!("Ignoring unknown saved theme '{}'", raw);
                self.apply_default();
            }
            None => self.apply_default(),
        }

        tracing::info!("Theme mounted: {} (effective {})", self.theme, self.effective());
        self.persist();
    }

    fn apply_default(&mut self) {
        if self.default_theme == ThemePreference::System {
            self.theme = if self.signal.prefers_dark() {
                ThemePreference::Dark
            } else {
                ThemePreference::Light
            };
        }
    }

    fn persist(&mut self) {
        if !self.mounted {
            return;
        }
        if let Err(e) = self.store.set_preference(self.theme.as_str()) {
            tracing::warn!("Could not save theme preference: {} ({})", e, e.error_code());
        }
    }

    pub fn is_mounted(&self) -> bool {
        self.mounted
    }

    pub fn theme(&self) -> ThemePreference {
        self.theme
    }

    pub fn set_theme(&mut self, theme: ThemePreference) {
        if theme == self.theme {
            return;
        }
        tracing::info!("Theme {} -> {}", self.theme, theme);
        self.theme = theme;
        self.persist();
    }

    /// Dark goes to light, anything else goes to dark.
    pub fn toggle(&mut self) {
        let next = if self.theme == ThemePreference::Dark {
            ThemePreference::Light
        } else {
            ThemePreference::Dark
        };
        self.set_theme(next);
    }

    /// Concrete theme after resolving `system`.
    pub fn effective(&self) -> ThemePreference {
        match self.theme {
            ThemePreference::System if self.signal.prefers_dark() => ThemePreference::Dark,
            ThemePreference::System => ThemePreference::Light,
            other => other,
        }
    }

    pub fn is_dark(&self) -> bool {
        self.effective() == ThemePreference::Dark
    }

    /// Footer caption, keyed off the chosen theme rather than the effective one.
    pub fn label(&self) -> &'static str {
        if self.theme == ThemePreference::Dark {
            "Dark Mode"
        } else {
            "Light Mode"
        }
    }

    pub fn palette(&self) -> Palette {
        Palette::for_dark(self.is_dark())
    }
}

impl std::fmt::Debug for ThemeProvider {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ThemeProvider")
            .field("theme", &self.theme)
            .field("default_theme", &self.default_theme)
            .field("mounted", &self.mounted)
            .finish()
    }
}
