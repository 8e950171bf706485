//! # Geometry Math
//!
//! Pure sub-rectangle computations for composite controls. Everything here
//! is deterministic arithmetic on [Rect]s; no painting, no widget access.
//!
//! Each resolver takes a [SubControlQuery] and returns `Some(rect)` for the
//! parts this style lays out, or `None` when the combination is unknown so
//! the caller can delegate. Deliberately absent parts (scrollbar step
//! buttons) come back as `Some(Rect::ZERO)`, which is a real answer, not a
//! delegation.

use vello::kurbo::Rect;

use crate::request::LayoutDirection;

pub mod combobox;
pub mod groupbox;
pub mod scrollbar;
pub mod slider;
pub mod spinbox;
pub mod tabs;
pub mod titlebar;

/// Mirror `logical` inside `bounds` for right-to-left layouts.
///
/// Left-to-right returns the rect unchanged. Applying the RTL mirror twice
/// returns the original rect.
pub fn visual_rect(direction: LayoutDirection, bounds: Rect, logical: Rect) -> Rect {
    match direction {
        LayoutDirection::LeftToRight => logical,
        LayoutDirection::RightToLeft => {
            let x0 = bounds.x0 + (bounds.x1 - logical.x1);
            Rect::new(x0, logical.y0, x0 + logical.width(), logical.y1)
        }
    }
}

/// Swap the axes of a rect, mapping it to the origin.
///
/// Used by vertical tab layout: compute in horizontal space after
/// transposing, then transpose back.
pub fn transposed(rect: Rect) -> Rect {
    Rect::new(0.0, 0.0, rect.height(), rect.width())
}

/// A rect of the given size centered on `outer`'s center.
pub fn centered(outer: Rect, width: f64, height: f64) -> Rect {
    let cx = (outer.x0 + outer.x1) / 2.0;
    let cy = (outer.y0 + outer.y1) / 2.0;
    Rect::new(
        cx - width / 2.0,
        cy - height / 2.0,
        cx + width / 2.0,
        cy + height / 2.0,
    )
}

/// Grow/shrink each edge by the given deltas (adds to each coordinate).
pub fn adjusted(rect: Rect, dx0: f64, dy0: f64, dx1: f64, dy1: f64) -> Rect {
    Rect::new(rect.x0 + dx0, rect.y0 + dy0, rect.x1 + dx1, rect.y1 + dy1)
}
