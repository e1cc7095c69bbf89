// Integration tests for command-line configuration and navigation files

use hrbuddie::cli::{parse_args, CliCommand};
use hrbuddie::config::ShellConfig;
use hrbuddie::error::{ConfigError, ErrorCategory, ShellError};
use hrbuddie::theme::ThemePreference;
use std::io::Write;
use tempfile::NamedTempFile;

fn parse(args: &[&str]) -> Result<CliCommand, ConfigError> {
    parse_args(std::iter::once("hrbuddie".to_string()).chain(args.iter().map(|a| a.to_string())))
}

fn run_config(args: &[&str]) -> ShellConfig {
    match parse(args).unwrap() {
        CliCommand::Run(config) => config,
        other => panic!("expected a run, got {:?}", other),
    }
}

// =============================================================================
// Flags
// =============================================================================

#[test]
fn test_full_flag_set() {
    let config = run_config(&[
        "--route",
        "/settings/security",
        "--theme",
        "dark",
        "--collapsed",
        "--breakpoint",
        "100",
    ]);
    assert_eq!(config.initial_route, "/settings/security");
    assert_eq!(config.default_theme, ThemePreference::Dark);
    assert!(config.collapsed);
    assert_eq!(config.mobile_breakpoint, 100);
}

#[test]
fn test_bad_values_are_user_errors() {
    for args in [
        &["--theme", "sepia"][..],
        &["--route", "orders"][..],
        &["--breakpoint", "0"][..],
        &["--route"][..],
    ] {
        let err: ShellError = parse(args).unwrap_err().into();
        assert_eq!(err.category(), ErrorCategory::User, "{:?}", args);
    }
}

// =============================================================================
// Navigation files
// =============================================================================

#[test]
fn test_navigation_file_replaces_tree() {
    let mut file = NamedTempFile::new().unwrap();
    write!(
        file,
        r#"[
            {{"label": "People", "href": "/people", "icon": "users",
              "subItems": [{{"label": "Directory", "href": "/people/directory"}}]}},
            {{"label": "Help", "href": "/help", "icon": "life-buoy", "isSecondary": true}}
        ]"#
    )
    .unwrap();

    let config = run_config(&["--nav", file.path().to_str().unwrap()]);
    let tree = config.load_navigation().unwrap();
    assert_eq!(tree.len(), 2);
    assert_eq!(tree[0].sub_items[0].href, "/people/directory");
    assert!(tree[1].is_secondary);
}

#[test]
fn test_invalid_navigation_file_is_config_error() {
    let mut file = NamedTempFile::new().unwrap();
    write!(file, r#"[{{"label": "A", "href": "a"}}]"#).unwrap();

    let config = ShellConfig::default().with_nav_path(file.path());
    let err = config.load_navigation().unwrap_err();
    assert_eq!(err.category(), ErrorCategory::Configuration);
}

#[test]
fn test_missing_navigation_file_is_system_error() {
    let config = ShellConfig::default().with_nav_path("/definitely/not/here/nav.json");
    let err = config.load_navigation().unwrap_err();
    assert_eq!(err.category(), ErrorCategory::System);
}

#[test]
fn test_prefs_flag_picks_file_store() {
    let config = run_config(&["--prefs", "/tmp/hrbuddie-prefs.json"]);
    let store = config.preference_store().unwrap();
    assert_eq!(store.path(), std::path::Path::new("/tmp/hrbuddie-prefs.json"));
}
