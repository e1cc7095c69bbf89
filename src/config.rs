//! Shell configuration.
//!
//! Built from command-line flags; everything has a default so the shell runs
//! with no arguments at all.

use std::path::PathBuf;

use crate::error::ShellResult;
use crate::nav::{self, NavEntry, DEFAULT_ROUTE};
use crate::theme::{FilePreferenceStore, ThemePreference};

/// Terminal width below which the sidebar moves into a panel.
pub const DEFAULT_MOBILE_BREAKPOINT: u16 = 80;

/// Configuration for one shell session.
///
/// # Example
///
/// ```
/// use hrbuddie::config::ShellConfig;
///
/// let config = ShellConfig::default()
///     .with_initial_route("/orders")
///     .with_collapsed(true);
/// assert_eq!(config.initial_route, "/orders");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShellConfig {
    /// Route shown on start
    pub initial_route: String,
    /// Theme used until a saved preference is found
    pub default_theme: ThemePreference,
    /// Start with the sidebar in icon-only mode
    pub collapsed: bool,
    /// Override for the preference file location
    pub prefs_path: Option<PathBuf>,
    /// Navigation file replacing the built-in tree
    pub nav_path: Option<PathBuf>,
    pub mobile_breakpoint: u16,
}

impl Default for ShellConfig {
    fn default() -> Self {
        Self {
            initial_route: DEFAULT_ROUTE.to_string(),
            default_theme: ThemePreference::System,
            collapsed: false,
            prefs_path: None,
            nav_path: None,
            mobile_breakpoint: DEFAULT_MOBILE_BREAKPOINT,
        }
    }
}

impl ShellConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_initial_route(mut self, route: impl Into<String>) -> Self {
        self.initial_route = route.into();
        self
    }

    pub fn with_default_theme(mut self, theme: ThemePreference) -> Self {
        self.default_theme = theme;
        self
    }

    pub fn with_collapsed(mut self, collapsed: bool) -> Self {
        self.collapsed = collapsed;
        self
    }

    pub fn with_prefs_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.prefs_path = Some(path.into());
        self
    }

    pub fn with_nav_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.nav_path = Some(path.into());
        self
    }

    pub fn with_mobile_breakpoint(mut self, columns: u16) -> Self {
        self.mobile_breakpoint = columns;
        self
    }

    /// The navigation tree: the file when one is configured, else the
    /// built-in tree.
    pub fn load_navigation(&self) -> ShellResult<Vec<NavEntry>> {
        match &self.nav_path {
            Some(path) => nav::load_tree(path),
            None => Ok(nav::default_tree()),
        }
    }

    pub fn preference_store(&self) -> ShellResult<FilePreferenceStore> {
        match &self.prefs_path {
            Some(path) => Ok(FilePreferenceStore::new(path)),
            None => FilePreferenceStore::in_config_dir(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = ShellConfig::new();
        assert_eq!(config.initial_route, "/dashboard");
        assert_eq!(config.default_theme, ThemePreference::System);
        assert!(!config.collapsed);
        assert_eq!(config.mobile_breakpoint, 80);
    }

    #[test]
    fn test_builder_chain() {
        let config = ShellConfig::default()
            .with_default_theme(ThemePreference::Dark)
            .with_prefs_path("/tmp/prefs.json")
            .with_mobile_breakpoint(100);
        assert_eq!(config.default_theme, ThemePreference::Dark);
        assert_eq!(config.prefs_path, Some(PathBuf::from("/tmp/prefs.json")));
        assert_eq!(config.mobile_breakpoint, 100);
    }

    #[test]
    fn test_builtin_navigation_without_file() {
        let tree = ShellConfig::default().load_navigation().unwrap();
        assert_eq!(tree, nav::default_tree());
    }

    #[test]
    fn test_explicit_prefs_path() {
        let config = ShellConfig::default().with_prefs_path("/tmp/x/prefs.json");
        let store = config.preference_store().unwrap();
        assert_eq!(store.path(), std::path::Path::new("/tmp/x/prefs.json"));
    }
}
