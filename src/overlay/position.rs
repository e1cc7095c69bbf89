//! Anchored placement of floating elements.
//!
//! Pure geometry: given the trigger's rectangle and a requested side, work out
//! where the floating element goes. Coordinates are terminal cells with the
//! origin at the top-left of the screen; they are signed because a placement
//! may legitimately start off-screen.
//!
//! Known limitation: positions are never clamped to the screen. A floating
//! element that overflows is clipped when drawn, not moved, so it keeps the
//! exact offset from its anchor.

use std::fmt;

use ratatui::layout::Rect;

/// Snapshot of a trigger's geometry, taken for one computation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct AnchorRect {
    pub top: i32,
    pub left: i32,
    pub width: i32,
    pub height: i32,
    pub right: i32,
    pub bottom: i32,
}

impl AnchorRect {
    pub fn new(left: i32, top: i32, width: i32, height: i32) -> Self {
        Self {
            top,
            left,
            width,
            height,
            right: left + width,
            bottom: top + height,
        }
    }
}

impl From<Rect> for AnchorRect {
    fn from(rect: Rect) -> Self {
        Self::new(
            i32::from(rect.x),
            i32::from(rect.y),
            i32::from(rect.width),
            i32::from(rect.height),
        )
    }
}

/// Side of the anchor the floating element attaches to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Side {
    Top,
    #[default]
    Bottom,
    Left,
    Right,
}

impl Side {
    /// Parse a side name. Anything unrecognized places below the anchor.
    pub fn parse(value: &str) -> Self {
        match value.trim().to_ascii_lowercase().as_str() {
            "top" => Side::Top,
            "left" => Side::Left,
            "right" => Side::Right,
            "bottom" => Side::Bottom,
            other => {
                tracing::debug!("Unrecognized placement side '{}', using bottom", other);
                Side::Bottom
            }
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Side::Top => "top",
            Side::Bottom => "bottom",
            Side::Left => "left",
            Side::Right => "right",
        }
    }

    /// True when the floating element sits above or below the anchor.
    pub fn is_vertical(&self) -> bool {
        matches!(self, Side::Top | Side::Bottom)
    }
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Requested side plus the gap between anchor and floating element.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Placement {
    pub side: Side,
    pub offset: u16,
}

impl Placement {
    pub fn new(side: Side, offset: u16) -> Self {
        Self { side, offset }
    }
}

impl Default for Placement {
    fn default() -> Self {
        Self::new(Side::Bottom, 1)
    }
}

/// How far back the floating element moves along one axis, as a fraction of
/// its own size.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Shift {
    #[default]
    None,
    Half,
    Full,
}

impl Shift {
    fn amount(self, size: u16) -> i32 {
        let size = i32::from(size);
        match self {
            Shift::None => 0,
            Shift::Half => size / 2,
            Shift::Full => size,
        }
    }
}

/// Compensation for the floating element's own size, per axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TransformHint {
    pub x: Shift,
    pub y: Shift,
}

impl TransformHint {
    pub const NONE: TransformHint = TransformHint {
        x: Shift::None,
        y: Shift::None,
    };
    pub const FULL_UP: TransformHint = TransformHint {
        x: Shift::None,
        y: Shift::Full,
    };
    pub const FULL_LEFT: TransformHint = TransformHint {
        x: Shift::Full,
        y: Shift::None,
    };
    pub const CENTER_X: TransformHint = TransformHint {
        x: Shift::Half,
        y: Shift::None,
    };
    pub const CENTER_Y: TransformHint = TransformHint {
        x: Shift::None,
        y: Shift::Half,
    };
}

/// Output of a placement computation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ComputedPosition {
    pub top: i32,
    pub left: i32,
    pub transform: TransformHint,
}

impl ComputedPosition {
    /// Apply the transform hint for a floating element of the given size.
    pub fn resolve(&self, width: u16, height: u16) -> FloatRect {
        FloatRect {
            x: self.left - self.transform.x.amount(width),
            y: self.top - self.transform.y.amount(height),
            width,
            height,
        }
    }
}

/// A floating element's rectangle before clipping to the screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FloatRect {
    pub x: i32,
    pub y: i32,
    pub width: u16,
    pub height: u16,
}

impl FloatRect {
    /// The part of this rectangle that lies inside `area`, if any.
    pub fn clip(&self, area: Rect) -> Option<Rect> {
        let left = self.x.max(i32::from(area.x));
        let top = self.y.max(i32::from(area.y));
        let right = (self.x + i32::from(self.width)).min(i32::from(area.right()));
        let bottom = (self.y + i32::from(self.height)).min(i32::from(area.bottom()));
        if right <= left || bottom <= top {
            return None;
        }
        // Bounded by `area`, so every value fits in u16.
        Some(Rect::new(
            left as u16,
            top as u16,
            (right - left) as u16,
            (bottom - top) as u16,
        ))
    }
}

/// Edge-aligned placement used by menus.
pub fn compute(anchor: &AnchorRect, placement: Placement) -> ComputedPosition {
    let offset = i32::from(placement.offset);
    match placement.side {
        Side::Top => ComputedPosition {
            top: anchor.top - offset,
            left: anchor.left,
            transform: TransformHint::FULL_UP,
        },
        Side::Bottom => ComputedPosition {
            top: anchor.bottom + offset,
            left: anchor.left,
            transform: TransformHint::NONE,
        },
        Side::Left => ComputedPosition {
            top: anchor.top,
            left: anchor.left - offset,
            transform: TransformHint::FULL_LEFT,
        },
        Side::Right => ComputedPosition {
            top: anchor.top,
            left: anchor.right + offset,
            transform: TransformHint::NONE,
        },
    }
}

/// Center-anchored placement used by tooltips.
///
/// The cross-axis coordinate is the anchor's midpoint and the element is
/// shifted back by half its size on that axis only.
pub fn compute_centered(anchor: &AnchorRect, placement: Placement) -> ComputedPosition {
    let offset = i32::from(placement.offset);
    let mid_x = anchor.left + anchor.width / 2;
    let mid_y = anchor.top + anchor.height / 2;
    match placement.side {
        Side::Top => ComputedPosition {
            top: anchor.top - offset,
            left: mid_x,
            transform: TransformHint::CENTER_X,
        },
        Side::Bottom => ComputedPosition {
            top: anchor.bottom + offset,
            left: mid_x,
            transform: TransformHint::CENTER_X,
        },
        Side::Left => ComputedPosition {
            top: mid_y,
            left: anchor.left - offset,
            transform: TransformHint::CENTER_Y,
        },
        Side::Right => ComputedPosition {
            top: mid_y,
            left: anchor.right + offset,
            transform: TransformHint::CENTER_Y,
        },
    }
}
