//! # Paint Primitives
//!
//! Per-element painting routines. Each routine reads a [DrawRequest], draws
//! into a [Painter](crate::surface::Painter), and reports whether it handled
//! the element. A routine that finds a payload mismatching its element kind
//! draws nothing and returns [DrawOutcome::Delegate] so the host can fall
//! back to its default rendering; it never panics and never paints half an
//! element.
//!
//! Geometry comes from [crate::geometry]; colors come from the request's
//! palette plus the derived shades in [crate::palette].

use vello::kurbo::{Point, Rect, RoundedRect};
use vello::peniko::{Brush, Color, Gradient};

pub mod button;
pub mod grips;
pub mod indicator;
pub mod item;
pub mod menu;
pub mod progress;
pub mod scrollbar;
pub mod tabs;

/// Result of a draw routine.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DrawOutcome {
    /// The element was painted.
    Handled,
    /// Not painted; the host should use its fallback rendering.
    Delegate,
}

pub(crate) fn rounded(rect: Rect, radius: f64) -> RoundedRect {
    rect.to_rounded_rect(radius)
}

/// Vertical linear gradient across `rect`.
pub(crate) fn vertical_gradient<const N: usize>(rect: Rect, stops: [(f32, Color); N]) -> Brush {
    Brush::Gradient(
        Gradient::new_linear(Point::new(rect.x0, rect.y0), Point::new(rect.x0, rect.y1))
            .with_stops(stops),
    )
}
