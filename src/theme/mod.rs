//! Light/dark theming.

mod palette;
mod preference;
mod provider;
mod signal;

pub use palette::Palette;
pub use preference::{
    FilePreferenceStore, MemoryPreferenceStore, PreferenceStore, ThemePreference, CONFIG_DIR, PREFERENCES_FILE,
};
pub use provider::ThemeProvider;
pub use signal::{background_is_dark, DarkModeSignal, EnvDarkModeSignal, FixedDarkModeSignal};
