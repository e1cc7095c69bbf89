//! Keyboard focus over the sidebar.

use crate::nav::NavEntry;

/// Something in the sidebar that can hold keyboard focus.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FocusTarget {
    /// Top-level entry, by index into the tree
    Entry(usize),
    /// Child link of an entry
    SubItem(usize, usize),
    ThemeToggle,
}

/// Focusable targets in display order: main group, then secondary group,
/// children of open entries right after their parent, theme toggle last.
pub fn focus_order<F>(tree: &[NavEntry], is_expanded: F, theme_toggle: bool) -> Vec<FocusTarget>
where
    F: Fn(usize) -> bool,
{
    let main = tree.iter().enumerate().filter(|(_, e)| !e.is_secondary);
    let secondary = tree.iter().enumerate().filter(|(_, e)| e.is_secondary);

    let mut order = Vec::new();
    for (index, entry) in main.chain(secondary) {
        order.push(FocusTarget::Entry(index));
        if entry.has_sub_items() && is_expanded(index) {
            order.extend((0..entry.sub_items.len()).map(|sub| FocusTarget::SubItem(index, sub)));
        }
    }
    if theme_toggle {
        order.push(FocusTarget::ThemeToggle);
    }
    order
}

/// Next target from `current`, stopping at either end.
pub fn step(order: &[FocusTarget], current: Option<FocusTarget>, forward: bool) -> Option<FocusTarget> {
    if order.is_empty() {
        return None;
    }
    let next = match current.and_then(|c| order.iter().position(|t| *t == c)) {
        Some(pos) if forward => (pos + 1).min(order.len() - 1),
        Some(pos) => pos.saturating_sub(1),
        None if forward => 0,
        None => order.len() - 1,
    };
    Some(order[next])
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::nav::default_tree;

    #[test]
    fn test_order_groups_and_children() {
        let tree = default_tree();
        let settings = tree.iter().position(|e| e.label == "Settings").unwrap();
        let order = focus_order(&tree, |i| i == settings, true);

        // Eight main entries, Reports, Settings and its three children, Help, toggle.
        assert_eq!(order.len(), 8 + 1 + 1 + 3 + 1 + 1);
        assert_eq!(order[0], FocusTarget::Entry(0));
        let pos = order.iter().position(|t| *t == FocusTarget::Entry(settings)).unwrap();
        assert_eq!(order[pos + 1], FocusTarget::SubItem(settings, 0));
        assert_eq!(*order.last().unwrap(), FocusTarget::ThemeToggle);
    }

    #[test]
    fn test_step_clamps() {
        let order = vec![FocusTarget::Entry(0), FocusTarget::Entry(1)];
        assert_eq!(step(&order, None, true), Some(FocusTarget::Entry(0)));
        assert_eq!(step(&order, None, false), Some(FocusTarget::Entry(1)));
        assert_eq!(step(&order, Some(FocusTarget::Entry(1)), true), Some(FocusTarget::Entry(1)));
        assert_eq!(step(&order, Some(FocusTarget::Entry(0)), false), Some(FocusTarget::Entry(0)));
        assert_eq!(step(&[], None, true), None);
    }
}
