//! Built-in navigation tree and usage figures, plus loading a replacement
//! tree from a JSON file.

use std::collections::HashSet;
use std::path::Path;

use super::entry::{Icon, NavEntry};
use crate::error::{classify_io_error, ConfigError, ShellResult};

/// The shell's default navigation.
pub fn default_tree() -> Vec<NavEntry> {
    vec![
        NavEntry::link("Dashboard", "/dashboard", Icon::LayoutDashboard),
        NavEntry::link("Orders", "/orders", Icon::ShoppingBag),
        NavEntry::link("Customers", "/customers", Icon::Users).with_sub_items(vec![
            NavEntry::link("All Customers", "/customers", Icon::Users),
            NavEntry::link("Segments", "/customers/segments", Icon::BookUser),
        ]),
        NavEntry::link("Products", "/products", Icon::Package),
        NavEntry::link("Marketing", "/marketing", Icon::Megaphone),
        NavEntry::link("Inventory", "/inventory", Icon::Boxes),
        NavEntry::link("Integrations", "/integrations", Icon::Plug),
        NavEntry::link("Analytics", "/analytics", Icon::AreaChart),
        NavEntry::link("Reports", "/reports", Icon::FileText).secondary(),
        NavEntry::link("Settings", "/settings", Icon::Settings)
            .secondary()
            .with_sub_items(vec![
                NavEntry::link("General", "/settings/general", Icon::Settings),
                NavEntry::link("Security", "/settings/security", Icon::Shield),
                NavEntry::link("Archive", "/settings/archive", Icon::Archive),
            ]),
        NavEntry::link("Help", "/help", Icon::LifeBuoy).secondary(),
    ]
}

/// Per-section usage shown on the dashboard.
pub const USAGE: &[(&str, u64)] = &[
    ("Dashboard", 15),
    ("Orders", 80),
    ("Customers", 50),
    ("Analytics", 95),
    ("Reports", 25),
    ("Settings", 10),
    ("Products", 60),
    ("Marketing", 30),
    ("Inventory", 70),
    ("Integrations", 20),
    ("Help", 5),
];

/// Check a tree before the shell uses it.
///
/// Top-level labels key the accordion's open set, so they must be unique.
pub fn validate(tree: &[NavEntry]) -> Result<(), String> {
    if tree.is_empty() {
        return Err("navigation must contain at least one entry".to_string());
    }
    let mut seen = HashSet::new();
    for entry in tree {
        if !seen.insert(entry.label.as_str()) {
            return Err(format!("duplicate entry label '{}'", entry.label));
        }
        for link in std::iter::once(entry).chain(entry.sub_items.iter()) {
            if !link.href.starts_with('/') {
                return Err(format!("href '{}' of '{}' must start with '/'", link.href, link.label));
            }
        }
    }
    Ok(())
}

/// Read a navigation tree from a JSON array of entries.
pub fn load_tree(path: &Path) -> ShellResult<Vec<NavEntry>> {
    let content = std::fs::read_to_string(path)
        .map_err(|e| classify_io_error(&e, "read navigation file", Some(path.to_path_buf())))?;

    let invalid = |message: String| ConfigError::InvalidNavigation {
        path: path.display().to_string(),
        message,
    };
    let tree: Vec<NavEntry> = serde_json::from_str(&content).map_err(|e| invalid(e.to_string()))?;
    validate(&tree).map_err(invalid)?;

    tracing::info!("Loaded {} navigation entries from {}", tree.len(), path.display());
    Ok(tree)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ShellError;
    use std::io::Write;

    #[test]
    fn test_default_tree_shape() {
        let tree = default_tree();
        assert_eq!(tree.len(), 11);
        assert!(validate(&tree).is_ok());

        let settings = tree.iter().find(|e| e.label == "Settings").unwrap();
        assert!(settings.is_secondary);
        assert_eq!(
            settings.sub_items.iter().map(|s| s.href.as_str()).collect::<Vec<_>>(),
            ["/settings/general", "/settings/security", "/settings/archive"]
        );
        assert_eq!(tree.iter().filter(|e| e.is_secondary).count(), 3);
    }

    #[test]
    fn test_validate_rejects_duplicates_and_relative_links() {
        let dup = vec![
            NavEntry::link("Orders", "/orders", Icon::ShoppingBag),
            NavEntry::link("Orders", "/orders2", Icon::ShoppingBag),
        ];
        assert!(validate(&dup).unwrap_err().contains("duplicate"));

        let relative = vec![NavEntry::link("Orders", "orders", Icon::ShoppingBag)];
        assert!(validate(&relative).is_err());
        assert!(validate(&[]).is_err());
    }

    #[test]
    fn test_load_tree_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            r#"[{{"label":"Home","href":"/dashboard","icon":"layout-dashboard"}},
               {{"label":"Help","href":"/help","isSecondary":true}}]"#
        )
        .unwrap();

        let tree = load_tree(file.path()).unwrap();
        assert_eq!(tree.len(), 2);
        assert!(tree[1].is_secondary);
    }

    #[test]
    fn test_load_tree_reports_bad_json() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "{{ not a list").unwrap();
        assert!(matches!(
            load_tree(file.path()),
            Err(ShellError::Config(ConfigError::InvalidNavigation { .. }))
        ));
    }

    #[test]
    fn test_load_tree_missing_file_is_system_error() {
        let err = load_tree(Path::new("/definitely/not/here.json")).unwrap_err();
        assert!(matches!(err, ShellError::System(_)));
    }
}
