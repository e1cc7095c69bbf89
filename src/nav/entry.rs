//! Navigation entries.

use serde::{Deserialize, Serialize};

/// Icons the sidebar knows how to draw. Names follow the lucide set so a
/// navigation file written for the web build loads unchanged.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Icon {
    LayoutDashboard,
    ShoppingBag,
    Users,
    BookUser,
    Package,
    Megaphone,
    Boxes,
    Plug,
    AreaChart,
    FileText,
    Settings,
    Shield,
    Archive,
    LifeBuoy,
}

impl Icon {
    /// Single-column glyph for the icon.
    pub fn glyph(&self) -> &'static str {
        match self {
            Icon::LayoutDashboard => "▦",
            Icon::ShoppingBag => "◈",
            Icon::Users => "☺",
            Icon::BookUser => "☷",
            Icon::Package => "▣",
            Icon::Megaphone => "◉",
            Icon::Boxes => "▤",
            Icon::Plug => "⌁",
            Icon::AreaChart => "▲",
            Icon::FileText => "≡",
            Icon::Settings => "✱",
            Icon::Shield => "◊",
            Icon::Archive => "▥",
            Icon::LifeBuoy => "⊕",
        }
    }
}

/// One link in the sidebar, optionally with child links.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NavEntry {
    pub label: String,
    pub href: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub icon: Option<Icon>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub sub_items: Vec<NavEntry>,
    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub is_secondary: bool,
}

impl NavEntry {
    pub fn link(label: &str, href: &str, icon: Icon) -> Self {
        Self {
            label: label.to_string(),
            href: href.to_string(),
            icon: Some(icon),
            sub_items: Vec::new(),
            is_secondary: false,
        }
    }

    /// Move the entry to the "Tools & Settings" group.
    pub fn secondary(mut self) -> Self {
        self.is_secondary = true;
        self
    }

    pub fn with_sub_items(mut self, sub_items: Vec<NavEntry>) -> Self {
        self.sub_items = sub_items;
        self
    }

    pub fn has_sub_items(&self) -> bool {
        !self.sub_items.is_empty()
    }

    pub fn glyph(&self) -> &'static str {
        self.icon.map_or("•", |icon| icon.glyph())
    }
}

/// Split a tree into the main and secondary groups, keeping order.
pub fn partition(tree: &[NavEntry]) -> (Vec<&NavEntry>, Vec<&NavEntry>) {
    tree.iter().partition(|entry| !entry.is_secondary)
}
