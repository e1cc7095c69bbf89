//! Explicit overlay scopes.
//!
//! Parts of an overlay (trigger, content, items) need their root's id and
//! open flag. The root hands a [`OverlayContext`] to its render function, which
//! nests it into the [`Scope`] chain it passes down. A part built without its
//! root in the chain is a wiring bug and fails immediately.

use std::fmt;
use std::sync::atomic::{AtomicU32, Ordering};

use crate::error::{UiError, UiResult};

static NEXT_OVERLAY_ID: AtomicU32 = AtomicU32::new(1);

/// Process-unique overlay identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct OverlayId(u32);

impl OverlayId {
    pub fn next() -> Self {
        OverlayId(NEXT_OVERLAY_ID.fetch_add(1, Ordering::Relaxed))
    }
}

impl fmt::Display for OverlayId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OverlayKind {
    Disclosure,
    Menu,
    Panel,
    Tooltip,
}

impl OverlayKind {
    pub fn name(&self) -> &'static str {
        match self {
            OverlayKind::Disclosure => "Disclosure",
            OverlayKind::Menu => "Menu",
            OverlayKind::Panel => "Panel",
            OverlayKind::Tooltip => "Tooltip",
        }
    }
}

/// Snapshot of an overlay root, shared with its parts for one render pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OverlayContext {
    pub id: OverlayId,
    pub kind: OverlayKind,
    pub open: bool,
}

/// Chain of enclosing overlay contexts.
#[derive(Debug, Clone, Copy)]
pub struct Scope<'a> {
    parent: Option<&'a Scope<'a>>,
    context: Option<OverlayContext>,
}

impl Scope<'static> {
    /// A scope with no enclosing overlay.
    pub fn root() -> Self {
        Scope {
            parent: None,
            context: None,
        }
    }
}

impl<'a> Scope<'a> {
    /// Nest an overlay root inside this scope.
    pub fn enter(&'a self, context: OverlayContext) -> Scope<'a> {
        Scope {
            parent: Some(self),
            context: Some(context),
        }
    }

    /// Nearest enclosing overlay of `kind`.
    pub fn nearest(&self, kind: OverlayKind) -> Option<OverlayContext> {
        let mut scope = Some(self);
        while let Some(current) = scope {
            if let Some(ctx) = current.context.filter(|ctx| ctx.kind == kind) {
                return Some(ctx);
            }
            scope = current.parent;
        }
        None
    }

    /// Like [`nearest`](Self::nearest) but a missing root is an error naming
    /// the offending part.
    pub fn require(&self, kind: OverlayKind, component: &'static str) -> UiResult<OverlayContext> {
        self.nearest(kind).ok_or_else(|| {
            tracing::error!("{} built outside of a {}", component, kind.name());
            UiError::OutsideProvider {
                component,
                provider: kind.name(),
            }
        })
    }
}
