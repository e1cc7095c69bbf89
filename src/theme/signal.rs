//! Terminal dark-mode detection.

/// Whether the host prefers a dark theme.
pub trait DarkModeSignal {
    fn prefers_dark(&self) -> bool;
}

/// Reads the `COLORFGBG` variable set by many terminals (`"fg;bg"`).
///
/// Missing or unparseable values count as dark.
#[derive(Debug, Clone, Copy, Default)]
pub struct EnvDarkModeSignal;

impl DarkModeSignal for EnvDarkModeSignal {
    fn prefers_dark(&self) -> bool {
        std::env::var("COLORFGBG")
            .ok()
            .and_then(|value| background_is_dark(&value))
            .unwrap_or(true)
    }
}

/// Interpret a `COLORFGBG` value. The background is the last field; ANSI 7
/// and 9 through 15 are light.
pub fn background_is_dark(value: &str) -> Option<bool> {
    let bg: u8 = value.rsplit(';').next()?.trim().parse().ok()?;
    Some(!(bg == 7 || (9..=15).contains(&bg)))
}

/// A signal with a fixed answer.
#[derive(Debug, Clone, Copy)]
pub struct FixedDarkModeSignal(pub bool);

impl DarkModeSignal for FixedDarkModeSignal {
    fn prefers_dark(&self) -> bool {
        self.0
    }
}
