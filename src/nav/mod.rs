//! Navigation model: the entry tree, the current location and the sidebar's
//! submenu policy.

pub mod accordion;
pub mod data;
pub mod entry;
pub mod location;

pub use accordion::{derive_open_set, is_active, is_sub_active, AccordionPolicy, OpenSet, SidebarMode};
pub use data::{default_tree, load_tree, USAGE};
pub use entry::{partition, Icon, NavEntry};
pub use location::{breadcrumb, Location, DEFAULT_ROUTE};
