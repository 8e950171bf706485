//! Grip dot grids: splitters, size grips, toolbar and dock handles.
//!
//! Every grip is the same two-layer dot, a 2x2 light square with a 1x1
//! dark square in its corner, repeated on a 3px lattice around the rect
//! center. Only the lattice extents differ per element.

use vello::kurbo::Rect;

use super::DrawOutcome;
use crate::config::StyleConfig;
use crate::palette::{dark_shade, light_shade};
use crate::request::{DrawRequest, StateFlags};
use crate::surface::Painter;

fn dot(p: &mut Painter, x: f64, y: f64) {
    p.fill(&Rect::new(x, y, x + 2.0, y + 2.0), light_shade());
    p.fill(&Rect::new(x, y, x + 1.0, y + 1.0), dark_shade());
}

/// Splitter handle. Single-pixel splitters stay blank.
pub fn splitter(
    _config: &StyleConfig,
    request: &DrawRequest,
    painter: &mut Painter,
) -> DrawOutcome {
    let rect = request.rect;
    if rect.width() <= 1.0 || rect.height() <= 1.0 {
        return DrawOutcome::Handled;
    }
    let cx = (rect.x0 + rect.x1) / 2.0;
    let cy = (rect.y0 + rect.y1) / 2.0;
    painter.scoped(|p| {
        if request.state.contains(StateFlags::HORIZONTAL) {
            let mut j = -6.0;
            while j < 12.0 {
                dot(p, cx + 1.0, cy + j);
                j += 3.0;
            }
        } else {
            let mut i = -6.0;
            while i < 12.0 {
                dot(p, cx + i, cy);
                i += 3.0;
            }
        }
    });
    DrawOutcome::Handled
}

/// Dock resize handle: a splitter with the orientation flag inverted,
/// since the handle extends across the split direction.
pub fn dock_resize_handle(
    config: &StyleConfig,
    request: &DrawRequest,
    painter: &mut Painter,
) -> DrawOutcome {
    let mut flipped = DrawRequest::new(request.rect, request.palette);
    flipped.state = request.state;
    flipped.direction = request.direction;
    flipped.state.toggle(StateFlags::HORIZONTAL);
    splitter(config, &flipped, painter)
}

/// Corner size grip: triangular dot field pointing into the window.
pub fn size_grip(
    _config: &StyleConfig,
    request: &DrawRequest,
    painter: &mut Painter,
) -> DrawOutcome {
    let rect = request.rect;
    let cx = (rect.x0 + rect.x1) / 2.0;
    let cy = (rect.y0 + rect.y1) / 2.0;
    let rtl = request.right_to_left();
    painter.scoped(|p| {
        let mut i = -6.0;
        while i < 12.0 {
            let mut j = -6.0;
            while j < 12.0 {
                if (!rtl && i > -j) || (rtl && j > i) {
                    dot(p, cx + i, cy + j);
                }
                j += 3.0;
            }
            i += 3.0;
        }
    });
    DrawOutcome::Handled
}

/// Toolbar drag handle: a short two-column (or two-row) dot strip.
pub fn tool_bar_handle(
    _config: &StyleConfig,
    request: &DrawRequest,
    painter: &mut Painter,
) -> DrawOutcome {
    let rect = request.rect;
    let cx = (rect.x0 + rect.x1) / 2.0;
    let cy = (rect.y0 + rect.y1) / 2.0;
    painter.scoped(|p| {
        if request.state.contains(StateFlags::HORIZONTAL) {
            let mut i = -3.0;
            while i < 2.0 {
                let mut j = -8.0;
                while j < 10.0 {
                    dot(p, cx + i, cy + j);
                    j += 3.0;
                }
                i += 3.0;
            }
        } else {
            let mut i = -6.0;
            while i < 12.0 {
                let mut j = -3.0;
                while j < 2.0 {
                    dot(p, cx + i, cy + j);
                    j += 3.0;
                }
                i += 3.0;
            }
        }
    });
    DrawOutcome::Handled
}
