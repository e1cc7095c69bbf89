//! Overlay primitives.
//!
//! Shared machinery first:
//! - [`state`]: controlled / uncontrolled open state
//! - [`position`]: anchored placement math
//! - [`router`] and [`dismiss`]: capture-phase outside-click / Escape dismissal
//! - [`scope`] and [`slot`]: how overlay parts find their root and attach to
//!   caller-drawn elements
//!
//! Then the four widgets built from them: [`Disclosure`], [`Menu`], [`Panel`]
//! and [`Tooltip`].

pub mod disclosure;
pub mod dismiss;
pub mod menu;
pub mod panel;
pub mod position;
pub mod router;
pub mod scope;
pub mod slot;
pub mod state;
pub mod tooltip;

pub use disclosure::{Disclosure, DisclosureContent, DisclosureTrigger};
pub use dismiss::{activate, DismissReason, DismissalGuard, DismissalSlot, Regions};
pub use menu::{Menu, MenuContent, MenuItem, MenuItemKind, MenuTrigger};
pub use panel::{Panel, PanelClose, PanelContent, PanelTrigger};
pub use position::{AnchorRect, ComputedPosition, FloatRect, Placement, Shift, Side, TransformHint};
pub use router::{EventRouter, ListenerId, Propagation};
pub use scope::{OverlayContext, OverlayId, OverlayKind, Scope};
pub use slot::{OverlayAction, Slot, TriggerProps};
pub use state::{Notifier, OpenState, SharedNotifier};
pub use tooltip::{Tooltip, TooltipContent, TooltipTrigger};

use crate::error::UiResult;

/// Input an overlay root understands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OverlayCommand {
    Toggle,
    Open,
    Close,
    /// A menu item was chosen.
    Select(usize),
    HighlightNext,
    HighlightPrev,
    PointerEnter,
    PointerLeave,
    FocusGained,
    FocusLost,
}

/// Common surface of every overlay root.
pub trait Overlay {
    fn id(&self) -> OverlayId;

    fn kind(&self) -> OverlayKind;

    fn is_open(&self) -> bool;

    /// Route a command through the overlay's open state. Commands that do not
    /// apply to this kind of overlay are ignored.
    fn apply(&mut self, command: OverlayCommand) -> UiResult<()>;

    /// Snapshot handed to the overlay's parts for one render pass.
    fn context(&self) -> OverlayContext {
        OverlayContext {
            id: self.id(),
            kind: self.kind(),
            open: self.is_open(),
        }
    }
}
