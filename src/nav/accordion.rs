//! Sidebar submenu policy.
//!
//! At most one top-level submenu is open while the sidebar is expanded. The
//! open set is a pure function of (tree, location, mode) and is recomputed in
//! full whenever one of them changes; manual toggles only live until then.

use std::collections::BTreeMap;

use super::entry::NavEntry;

/// The root link, active only on an exact match.
pub const ROOT_HREF: &str = "/dashboard";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SidebarMode {
    #[default]
    Expanded,
    /// Icon-only; submenus become floating menus.
    Compact,
}

/// Open flag per top-level label.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OpenSet(BTreeMap<String, bool>);

impl OpenSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_open(&self, label: &str) -> bool {
        self.0.get(label).copied().unwrap_or(false)
    }

    /// Opening makes `label` the only open entry; closing clears just its flag.
    pub fn toggle(&mut self, label: &str, open: bool) {
        if open {
            self.0.clear();
            self.0.insert(label.to_string(), true);
        } else {
            self.0.insert(label.to_string(), false);
        }
    }

    pub fn clear(&mut self) {
        self.0.clear();
    }

    /// Labels whose flag is set.
    pub fn open_labels(&self) -> Vec<&str> {
        self.0
            .iter()
            .filter(|(_, open)| **open)
            .map(|(label, _)| label.as_str())
            .collect()
    }

    pub fn is_empty(&self) -> bool {
        self.open_labels().is_empty()
    }
}

fn prefix_matches(href: &str, location: &str) -> bool {
    location.starts_with(href)
}

/// Recompute the open set from scratch.
pub fn derive_open_set(tree: &[NavEntry], location: &str, mode: SidebarMode) -> OpenSet {
    let mut open = OpenSet::new();
    if mode == SidebarMode::Compact {
        return open;
    }
    for entry in tree {
        if entry.sub_items.iter().any(|sub| prefix_matches(&sub.href, location)) {
            open.0.insert(entry.label.clone(), true);
        }
    }
    open
}

/// Whether a top-level entry is highlighted for `location`.
pub fn is_active(entry: &NavEntry, location: &str) -> bool {
    let own = prefix_matches(&entry.href, location) && (entry.href != ROOT_HREF || location == ROOT_HREF);
    own || entry.sub_items.iter().any(|sub| prefix_matches(&sub.href, location))
}

/// Whether a child link is highlighted. Children match exactly.
pub fn is_sub_active(sub: &NavEntry, location: &str) -> bool {
    sub.href == location
}

/// Keeps the open set in step with location and sidebar mode.
#[derive(Debug, Clone)]
pub struct AccordionPolicy {
    tree: Vec<NavEntry>,
    open: OpenSet,
    mode: SidebarMode,
    location: String,
}

impl AccordionPolicy {
    pub fn new(tree: Vec<NavEntry>, location: &str, mode: SidebarMode) -> Self {
        let open = derive_open_set(&tree, location, mode);
        Self {
            tree,
            open,
            mode,
            location: location.to_string(),
        }
    }

    pub fn tree(&self) -> &[NavEntry] {
        &self.tree
    }

    pub fn open_set(&self) -> &OpenSet {
        &self.open
    }

    pub fn mode(&self) -> SidebarMode {
        self.mode
    }

    pub fn location(&self) -> &str {
        &self.location
    }

    pub fn is_open(&self, label: &str) -> bool {
        self.open.is_open(label)
    }

    pub fn on_location_change(&mut self, location: &str) {
        if self.location == location {
            return;
        }
        self.location = location.to_string();
        self.recompute();
    }

    pub fn on_mode_change(&mut self, mode: SidebarMode) {
        if self.mode == mode {
            return;
        }
        self.mode = mode;
        self.recompute();
    }

    /// Apply a user toggle. Ignored in compact mode and for entries without
    /// children; returns whether the set changed.
    pub fn toggle(&mut self, label: &str, open: bool) -> bool {
        if self.mode == SidebarMode::Compact {
            tracing::debug!("Ignoring submenu toggle of '{}' in compact mode", label);
            return false;
        }
        if !self.tree.iter().any(|e| e.label == label && e.has_sub_items()) {
            return false;
        }
        let before = self.open.clone();
        self.open.toggle(label, open);
        tracing::debug!("Submenu '{}' open={} -> {:?}", label, open, self.open.open_labels());
        before != self.open
    }

    pub fn is_active(&self, entry: &NavEntry) -> bool {
        is_active(entry, &self.location)
    }

    pub fn is_sub_active(&self, sub: &NavEntry) -> bool {
        is_sub_active(sub, &self.location)
    }

    fn recompute(&mut self) {
        self.open = derive_open_set(&self.tree, &self.location, self.mode);
        tracing::debug!(
            "Open set for {} ({:?}): {:?}",
            self.location,
            self.mode,
            self.open.open_labels()
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::nav::data::default_tree;

    fn entry<'a>(tree: &'a [NavEntry], label: &str) -> &'a NavEntry {
        tree.iter().find(|e| e.label == label).unwrap()
    }

    #[test]
    fn test_opening_closes_others() {
        let mut open = OpenSet::new();
        open.toggle("Settings", true);
        open.toggle("Customers", true);
        assert_eq!(open.open_labels(), ["Customers"]);
        assert!(!open.is_open("Settings"));
    }

    #[test]
    fn test_closing_leaves_others() {
        let mut open = OpenSet::new();
        open.toggle("Customers", true);
        open.toggle("Settings", false);
        assert_eq!(open.open_labels(), ["Customers"]);
        open.toggle("Customers", false);
        assert!(open.is_empty());
    }

    #[test]
    fn test_derive_from_location() {
        let tree = default_tree();
        let open = derive_open_set(&tree, "/customers/segments", SidebarMode::Expanded);
        assert_eq!(open.open_labels(), ["Customers"]);

        let open = derive_open_set(&tree, "/orders", SidebarMode::Expanded);
        assert!(open.is_empty());

        let open = derive_open_set(&tree, "/customers/segments", SidebarMode::Compact);
        assert!(open.is_empty());
    }

    #[test]
    fn test_compact_clears_and_blocks_toggles() {
        let mut policy = AccordionPolicy::new(default_tree(), "/orders", SidebarMode::Expanded);
        assert!(policy.toggle("Settings", true));
        assert_eq!(policy.open_set().open_labels(), ["Settings"]);

        policy.on_mode_change(SidebarMode::Compact);
        assert!(policy.open_set().is_empty());
        assert!(!policy.toggle("Settings", true));
        assert!(policy.open_set().is_empty());
    }

    #[test]
    fn test_navigation_discards_manual_toggles() {
        let mut policy = AccordionPolicy::new(default_tree(), "/orders", SidebarMode::Expanded);
        policy.toggle("Customers", true);
        policy.on_location_change("/settings/general");
        assert_eq!(policy.open_set().open_labels(), ["Settings"]);
    }

    #[test]
    fn test_toggle_ignores_leaf_entries() {
        let mut policy = AccordionPolicy::new(default_tree(), "/orders", SidebarMode::Expanded);
        assert!(!policy.toggle("Orders", true));
        assert!(!policy.toggle("Unknown", true));
    }

    #[test]
    fn test_root_only_active_on_exact_match() {
        let tree = default_tree();
        let dashboard = entry(&tree, "Dashboard");
        assert!(is_active(dashboard, "/dashboard"));
        assert!(!is_active(dashboard, "/dashboard/widgets"));

        let orders = entry(&tree, "Orders");
        assert!(is_active(orders, "/orders/42"));
    }

    #[test]
    fn test_sub_items_match_exactly() {
        let tree = default_tree();
        let customers = entry(&tree, "Customers");
        assert!(is_sub_active(&customers.sub_items[0], "/customers"));
        assert!(!is_sub_active(&customers.sub_items[0], "/customers/segments"));
        assert!(is_active(customers, "/customers/segments"));
    }
}
