//! UI-related error types.
//!
//! Overlay composition errors live here. They are raised when a primitive is
//! wired incorrectly, never because of user input.

use std::fmt;

/// UI-specific error variants.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UiError {
    /// A sub-component was built outside the overlay root it belongs to.
    OutsideProvider {
        component: &'static str,
        provider: &'static str,
    },

    /// A dismissal observer was activated while the overlay already holds one.
    DismissalAlreadyActive { overlay: String },

    /// An external value was pushed into an overlay that owns its own state.
    NotControlled { overlay: String },

    /// Terminal initialization failed.
    TerminalInitFailed { message: String },

    /// Rendering error.
    RenderFailed { component: String, message: String },
}

impl UiError {
    /// Check if this error is a wiring mistake rather than an environment issue.
    pub fn is_usage_error(&self) -> bool {
        matches!(
            self,
            UiError::OutsideProvider { .. }
                | UiError::DismissalAlreadyActive { .. }
                | UiError::NotControlled { .. }
        )
    }

    /// Get a user-friendly error message.
    pub fn user_message(&self) -> String {
        match self {
            UiError::OutsideProvider {
                component,
                provider,
            } => format!("{} must be used within a {}.", component, provider),
            UiError::DismissalAlreadyActive { overlay } => {
                format!("The {} overlay tried to listen for dismissal twice.", overlay)
            }
            UiError::NotControlled { overlay } => {
                format!(
                    "The {} overlay manages its own open state and cannot be driven externally.",
                    overlay
                )
            }
            UiError::TerminalInitFailed { .. } => {
                "Failed to initialize the terminal. Please check your terminal settings."
                    .to_string()
            }
            UiError::RenderFailed { component, .. } => {
                format!("Failed to render {}. Please try again.", component)
            }
        }
    }

    /// Get a short error code for logging.
    pub fn error_code(&self) -> &'static str {
        match self {
            UiError::OutsideProvider { .. } => "E_UI_PROVIDER",
            UiError::DismissalAlreadyActive { .. } => "E_UI_DISMISS_TWICE",
            UiError::NotControlled { .. } => "E_UI_NOT_CONTROLLED",
            UiError::TerminalInitFailed { .. } => "E_UI_TERM_INIT",
            UiError::RenderFailed { .. } => "E_UI_RENDER",
        }
    }
}

impl fmt::Display for UiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            UiError::OutsideProvider {
                component,
                provider,
            } => write!(f, "{} used outside of {}", component, provider),
            UiError::DismissalAlreadyActive { overlay } => {
                write!(f, "dismissal already active for overlay '{}'", overlay)
            }
            UiError::NotControlled { overlay } => {
                write!(f, "overlay '{}' is uncontrolled", overlay)
            }
            UiError::TerminalInitFailed { message } => {
                write!(f, "Terminal initialization failed: {}", message)
            }
            UiError::RenderFailed { component, message } => {
                write!(f, "Render failed for '{}': {}", component, message)
            }
        }
    }
}

impl std::error::Error for UiError {}
