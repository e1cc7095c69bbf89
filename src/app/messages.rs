//! Messages carrying overlay notifications back into the app.

/// Sent by controlled overlays when they want a new open value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AppMessage {
    /// A sidebar disclosure asked to open or close
    SubmenuToggled { label: String, open: bool },
    /// The narrow-layout navigation panel asked to open or close
    MobileNavChanged(bool),
}
