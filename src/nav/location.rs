//! Current route and back history.

use super::entry::NavEntry;

/// Route the shell starts on when none is given.
pub const DEFAULT_ROUTE: &str = "/dashboard";

/// Routes remembered for `back`; the oldest falls off past this depth.
pub const HISTORY_DEPTH: usize = 50;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Location {
    path: String,
    history: Vec<String>,
}

impl Default for Location {
    fn default() -> Self {
        Self::new(DEFAULT_ROUTE)
    }
}

impl Location {
    pub fn new(path: &str) -> Self {
        Self {
            path: path.to_string(),
            history: Vec::new(),
        }
    }

    pub fn path(&self) -> &str {
        &self.path
    }

    /// Go to `href`. Returns false when already there.
    pub fn navigate(&mut self, href: &str) -> bool {
        if self.path == href {
            return false;
        }
        tracing::info!("Navigate {} -> {}", self.path, href);
        let previous = std::mem::replace(&mut self.path, href.to_string());
        if self.history.len() == HISTORY_DEPTH {
            self.history.remove(0);
        }
        self.history.push(previous);
        true
    }

    /// Return to the previous route. Returns false with no history.
    pub fn back(&mut self) -> bool {
        match self.history.pop() {
            Some(previous) => {
                tracing::info!("Back {} -> {}", self.path, previous);
                self.path = previous;
                true
            }
            None => false,
        }
    }

    pub fn can_go_back(&self) -> bool {
        !self.history.is_empty()
    }
}

/// Labels leading to the entry whose link is exactly `path`.
///
/// A child link wins over a parent sharing the same href, so `/customers`
/// reads as "Customers › All Customers".
pub fn breadcrumb(tree: &[NavEntry], path: &str) -> Option<Vec<String>> {
    for entry in tree {
        if let Some(sub) = entry.sub_items.iter().find(|sub| sub.href == path) {
            return Some(vec![entry.label.clone(), sub.label.clone()]);
        }
        if entry.href == path {
            return Some(vec![entry.label.clone()]);
        }
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::nav::data::default_tree;

    #[test]
    fn test_navigate_and_back() {
        let mut location = Location::default();
        assert_eq!(location.path(), "/dashboard");
        assert!(!location.can_go_back());

        assert!(location.navigate("/orders"));
        assert!(!location.navigate("/orders"));
        assert!(location.navigate("/settings/security"));

        assert!(location.back());
        assert_eq!(location.path(), "/orders");
        assert!(location.back());
        assert_eq!(location.path(), "/dashboard");
        assert!(!location.back());
    }

    #[test]
    fn test_history_keeps_most_recent_routes() {
        let mut location = Location::default();
        for i in 0..HISTORY_DEPTH + 10 {
            location.navigate(&format!("/reports/{}", i));
        }

        let mut steps = 0;
        while location.back() {
            steps += 1;
        }
        assert_eq!(steps, HISTORY_DEPTH);
        assert_eq!(location.path(), "/reports/9");
    }

    #[test]
    fn test_breadcrumb() {
        let tree = default_tree();
        assert_eq!(
            breadcrumb(&tree, "/settings/security"),
            Some(vec!["Settings".to_string(), "Security".to_string()])
        );
        assert_eq!(
            breadcrumb(&tree, "/customers"),
            Some(vec!["Customers".to_string(), "All Customers".to_string()])
        );
        assert_eq!(breadcrumb(&tree, "/orders"), Some(vec!["Orders".to_string()]));
        assert_eq!(breadcrumb(&tree, "/nowhere"), None);
    }
}
