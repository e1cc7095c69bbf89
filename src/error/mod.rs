//! Unified error handling for the shell.
//!
//! - **Error Categories**: `Client` marks wiring mistakes (an overlay part used
//!   outside its root, a second dismissal registration) so they fail loudly
//!   instead of degrading
//! - **Domain errors**: [`UiError`], [`SystemError`], [`ConfigError`]
//! - **Unified type**: [`ShellError`] with `ShellResult<T>`
//!
//! | Category | Description | Fatal |
//! |----------|-------------|-------|
//! | Client | Overlay composition bugs | Yes |
//! | User | Bad command-line values | No |
//! | System | Filesystem / terminal | No |
//! | Configuration | Bad nav or preference files | No |

mod category;
mod config;
mod result;
mod shell_error;
mod system;
mod ui;

pub use category::ErrorCategory;
pub use config::ConfigError;
pub use result::{ShellResult, UiResult};
pub use shell_error::ShellError;
pub use system::{classify_io_error, SystemError};
pub use ui::UiError;

#[cfg(test)]
mod integration_tests {
    use super::*;

    #[test]
    fn test_error_unification() {
        let ui: ShellError = UiError::OutsideProvider {
            component: "TooltipContent",
            provider: "Tooltip",
        }
        .into();
        let sys: ShellError = SystemError::NoConfigDirectory.into();
        let user: ShellError = ConfigError::MissingValue {
            flag: "--route".to_string(),
        }
        .into();
        let cfg: ShellError = ConfigError::InvalidNavigation {
            path: "nav.json".to_string(),
            message: "expected array".to_string(),
        }
        .into();

        assert_eq!(ui.category(), ErrorCategory::Client);
        assert_eq!(sys.category(), ErrorCategory::System);
        assert_eq!(user.category(), ErrorCategory::User);
        assert_eq!(cfg.category(), ErrorCategory::Configuration);

        for err in [&ui, &sys, &user, &cfg] {
            assert!(!err.error_code().is_empty());
            assert!(!err.user_message().is_empty());
            assert!(!err.recovery_hint().is_empty());
        }
    }

    #[test]
    fn test_terminal_failure_is_not_client_error() {
        let err: ShellError = UiError::TerminalInitFailed {
            message: "not a tty".to_string(),
        }
        .into();
        assert_eq!(err.category(), ErrorCategory::System);
        assert!(!err.category().is_fatal());
    }

    #[test]
    fn test_io_error_converts_to_system() {
        let io = std::io::Error::new(std::io::ErrorKind::NotFound, "gone");
        let err: ShellError = io.into();
        assert_eq!(err.error_code(), "E_SYS_IO");
    }
}
