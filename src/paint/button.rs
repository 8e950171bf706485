//! Buttons, line-edit frames and focus outlines.

use vello::kurbo::{Line, Rect};
use vello::peniko::Color;

use super::{rounded, vertical_gradient, DrawOutcome};
use crate::config::StyleConfig;
use crate::palette::{top_shadow, with_alpha8};
use crate::request::{DrawRequest, Payload, StateFlags, WidgetKind};
use crate::surface::Painter;

const FILL_BASE: Color = Color::from_rgb8(242, 242, 242);
const FILL_HOVER: Color = Color::from_rgb8(224, 224, 224);
const FILL_PRESSED: Color = Color::from_rgb8(204, 204, 204);

/// Rounded push-button panel with the 3-state fill ramp.
pub fn button_panel(
    config: &StyleConfig,
    request: &DrawRequest,
    painter: &mut Painter,
) -> DrawOutcome {
    if !matches!(request.payload, Payload::Button(_) | Payload::None) {
        return DrawOutcome::Delegate;
    }
    let rect = request.rect;
    let radius = config.control_radius(rect.height());

    let sunken = request.sunken();
    let fill = if request.hovered() {
        if sunken {
            FILL_PRESSED
        } else {
            FILL_HOVER
        }
    } else {
        FILL_BASE
    };

    painter.scoped(|p| {
        // Shrink away from the bottom-right so neighbors never clip the pill.
        let base = Rect::new(rect.x0, rect.y0, rect.x1 - radius / 2.0, rect.y1 - radius / 2.0);
        p.fill(&rounded(base, radius), fill);
        if request.hovered() && sunken {
            p.stroke(&rounded(base, radius), request.palette.highlight, 1.0);
        }
        if request.effectively_focused() {
            p.stroke(&rounded(base, radius), request.palette.highlight, 1.0);
        }
    });
    DrawOutcome::Handled
}

/// Tool-button panel: auto-raise buttons only show a panel when active,
/// dock title buttons only when hovered.
pub fn tool_button_panel(
    config: &StyleConfig,
    request: &DrawRequest,
    painter: &mut Painter,
) -> DrawOutcome {
    let raised = request.state.contains(StateFlags::AUTO_RAISE)
        && !request
            .state
            .intersects(StateFlags::SUNKEN | StateFlags::ON | StateFlags::MOUSE_OVER);
    if raised {
        return DrawOutcome::Handled;
    }
    if request.widget_kind() == WidgetKind::DockTitleButton
        && !request.state.contains(StateFlags::MOUSE_OVER)
    {
        return DrawOutcome::Handled;
    }
    button_panel(config, request, painter)
}

/// Line-edit frame: outline, soft focus ring, 1px top inner shadow.
pub fn line_edit_frame(
    _config: &StyleConfig,
    request: &DrawRequest,
    painter: &mut Painter,
) -> DrawOutcome {
    let rect = request.rect;
    let focused = request.state.contains(StateFlags::HAS_FOCUS);
    let outline = if focused {
        request.palette.highlighted_outline()
    } else {
        request.palette.outline()
    };

    painter.scoped(|p| {
        let r = Rect::new(rect.x0, rect.y0, rect.x1 - 1.0, rect.y1 - 1.0);
        p.stroke(&rounded(r, 2.0), outline, 1.0);

        if focused {
            let soft = with_alpha8(request.palette.highlighted_outline(), 40);
            let inner = Rect::new(rect.x0 + 1.0, rect.y0 + 1.0, rect.x1 - 2.0, rect.y1 - 2.0);
            p.stroke(&rounded(inner, 1.7), soft, 1.0);
        }

        p.stroke(
            &Line::new(
                (rect.x0 + 2.0, rect.y0 + 1.0),
                (rect.x1 - 2.0, rect.y0 + 1.0),
            ),
            top_shadow(),
            1.0,
        );
    });
    DrawOutcome::Handled
}

/// Keyboard focus outline, drawn only after keyboard-driven focus changes.
pub fn focus_rect(
    _config: &StyleConfig,
    request: &DrawRequest,
    painter: &mut Painter,
) -> DrawOutcome {
    if !request.state.contains(StateFlags::KEYBOARD_FOCUS_CHANGE) {
        return DrawOutcome::Handled;
    }
    let rect = request.rect;
    let outline = request.palette.highlighted_outline();
    let pen = with_alpha8(crate::palette::darker(outline, 120), 80);

    painter.scoped(|p| {
        let fill_lo = with_alpha8(outline, 30);
        let fill_hi = with_alpha8(crate::palette::lighter(outline, 160), 30);
        let r = Rect::new(rect.x0, rect.y0, rect.x1 - 1.0, rect.y1 - 1.0);
        p.fill_brush(
            &rounded(r, 1.0),
            &vertical_gradient(rect, [(0.0, fill_hi), (1.0, fill_lo)]),
        );
        p.stroke(&rounded(r, 1.0), pen, 1.0);
    });
    DrawOutcome::Handled
}
