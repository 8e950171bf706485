//! Tab bar painting.
//!
//! All four rounded orientations share the north code path: south, west
//! and east set up a transform mapping north-space drawing onto their
//! edge, then draw as if the tabs sat on top. The transform is dropped by
//! the enclosing painter scope.

use std::f64::consts::FRAC_PI_2;

use vello::kurbo::{Affine, Rect};

use super::{rounded, DrawOutcome};
use crate::config::StyleConfig;
use crate::geometry::tabs::tab_layout;
use crate::metrics::{pixel_metric, PixelMetric};
use crate::request::{
    DrawRequest, Payload, SectionPosition, StateFlags, TabShape,
};
use crate::surface::Painter;

/// Tab background. Selected tabs get a rounded highlight pill inset by
/// the corner radius; unselected rounded tabs draw nothing. Triangular
/// shapes keep a plain bordered rect.
pub fn tab_shape(
    config: &StyleConfig,
    request: &DrawRequest,
    painter: &mut Painter,
) -> DrawOutcome {
    let opt = match request.payload {
        Payload::Tab(opt) => opt,
        _ => return DrawOutcome::Delegate,
    };

    let rtl_hor_tabs = request.right_to_left() && !opt.shape.is_vertical();
    let last = (!rtl_hor_tabs && opt.position == SectionPosition::End)
        || (rtl_hor_tabs && opt.position == SectionPosition::Beginning);
    let only_one = opt.position == SectionPosition::OnlyOne;
    let overlap = pixel_metric(PixelMetric::TabBarTabOverlap, config).unwrap_or(0.0);

    let mut rect = request.rect;
    if !(only_one || last) {
        rect.x1 += overlap;
    }

    let selected = request.state.contains(StateFlags::SELECTED);
    painter.scoped(|p| {
        match opt.shape {
            TabShape::RoundedNorth | TabShape::TriangularNorth => {}
            TabShape::RoundedSouth | TabShape::TriangularSouth => {
                // Mirror vertically onto the bottom edge.
                p.apply_transform(Affine::new([
                    1.0,
                    0.0,
                    0.0,
                    -1.0,
                    0.0,
                    rect.height() - 1.0,
                ]));
            }
            TabShape::RoundedWest | TabShape::TriangularWest => {
                // Transpose; drawing happens in horizontal space.
                p.apply_transform(Affine::new([0.0, 1.0, 1.0, 0.0, 0.0, 0.0]));
                rect = Rect::new(rect.y0, rect.x0, rect.y1, rect.x1);
            }
            TabShape::RoundedEast | TabShape::TriangularEast => {
                let w = rect.width();
                p.apply_transform(Affine::new([0.0, 1.0, -1.0, 0.0, w - 1.0, 0.0]));
                rect = Rect::new(rect.y0, rect.x0, rect.y1, rect.x1);
            }
        }
        p.apply_transform(Affine::translate((0.5, 0.5)));

        if opt.shape.is_triangular() {
            let r = Rect::new(rect.x0, rect.y0, rect.x1 - 1.0, rect.y1 - 1.0);
            if selected {
                p.fill(&r, request.palette.highlight);
            }
            p.stroke(&r, request.palette.outline(), 1.0);
        } else if selected {
            let radius = rect.height() * config.radius_ratio;
            let pill = Rect::new(
                rect.x0 + radius,
                rect.y0 + radius,
                rect.x1 - radius,
                rect.y1 - radius,
            );
            p.fill(&rounded(pill, radius), request.palette.highlight);
        }
    });
    DrawOutcome::Handled
}

/// Tab caption: icon slot plus centered text, highlighted while selected.
/// Vertical bars rotate 90 degrees around the tab corner and restore.
pub fn tab_label(
    _config: &StyleConfig,
    request: &DrawRequest,
    painter: &mut Painter,
) -> DrawOutcome {
    let opt = match request.payload {
        Payload::Tab(opt) => opt,
        _ => return DrawOutcome::Delegate,
    };
    let layout = match tab_layout(request) {
        Some(layout) => layout,
        None => return DrawOutcome::Delegate,
    };
    let text = match opt.text {
        Some(text) if !text.is_empty() => text,
        _ => return DrawOutcome::Handled,
    };
    let rect = request.rect;
    let selected = request.state.contains(StateFlags::SELECTED) && request.enabled();
    let color = if selected {
        request.palette.highlighted_text
    } else {
        request.palette.window_text
    };

    painter.scoped(|p| {
        if opt.shape.is_vertical() {
            let east = matches!(opt.shape, TabShape::RoundedEast | TabShape::TriangularEast);
            let m = if east {
                Affine::translate((rect.x1, rect.y0)) * Affine::rotate(FRAC_PI_2)
            } else {
                Affine::translate((rect.x0, rect.y1)) * Affine::rotate(-FRAC_PI_2)
            };
            p.apply_transform(m);
        }
        let tr = layout.text;
        let origin = ((tr.x0 + tr.x1) / 2.0, (tr.y0 + tr.y1) / 2.0);
        p.draw_text(origin.into(), text, tr.height().min(16.0), color);
    });
    DrawOutcome::Handled
}

/// Page area frame of a tab widget. This style keeps the pane flush with
/// the window background, so nothing is drawn.
pub fn tab_widget_frame(
    _config: &StyleConfig,
    _request: &DrawRequest,
    _painter: &mut Painter,
) -> DrawOutcome {
    DrawOutcome::Handled
}
