//! Check, radio, branch and sort indicators.

use vello::kurbo::{Affine, BezPath, Circle, Line, Point, Rect, Stroke};
use vello::peniko::Color;

use super::{vertical_gradient, DrawOutcome};
use crate::config::StyleConfig;
use crate::palette::{darker, lighter, merged, with_alpha8};
use crate::request::{DrawRequest, HeaderOpt, Payload, SortIndicator, StateFlags};
use crate::surface::Painter;

/// Direction of a small triangular arrow glyph.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum ArrowDirection {
    Up,
    Down,
    Left,
    Right,
}

/// Filled triangle arrow centered in `rect`, sized to a third of it.
pub(crate) fn arrow(painter: &mut Painter, rect: Rect, direction: ArrowDirection, color: Color) {
    let cx = (rect.x0 + rect.x1) / 2.0;
    let cy = (rect.y0 + rect.y1) / 2.0;
    let half = (rect.width().min(rect.height()) / 3.0).max(2.0);

    let mut path = BezPath::new();
    let (a, b, c) = match direction {
        ArrowDirection::Up => (
            Point::new(cx - half, cy + half / 2.0),
            Point::new(cx + half, cy + half / 2.0),
            Point::new(cx, cy - half / 2.0),
        ),
        ArrowDirection::Down => (
            Point::new(cx - half, cy - half / 2.0),
            Point::new(cx + half, cy - half / 2.0),
            Point::new(cx, cy + half / 2.0),
        ),
        ArrowDirection::Left => (
            Point::new(cx + half / 2.0, cy - half),
            Point::new(cx + half / 2.0, cy + half),
            Point::new(cx - half / 2.0, cy),
        ),
        ArrowDirection::Right => (
            Point::new(cx - half / 2.0, cy - half),
            Point::new(cx - half / 2.0, cy + half),
            Point::new(cx + half / 2.0, cy),
        ),
    };
    path.move_to(a);
    path.line_to(b);
    path.line_to(c);
    path.close_path();
    painter.fill(&path, color);
}

/// Checkbox indicator: outlined gradient square, tick or indeterminate pad.
pub fn check_box(
    _config: &StyleConfig,
    request: &DrawRequest,
    painter: &mut Painter,
) -> DrawOutcome {
    let rect = Rect::new(
        request.rect.x0,
        request.rect.y0,
        request.rect.x1 - 1.0,
        request.rect.y1 - 1.0,
    );
    let palette = request.palette;
    let sunken = request.state.contains(StateFlags::SUNKEN);
    let pressed = merged(palette.base, palette.window_text, 85);

    painter.scoped(|p| {
        if sunken {
            p.fill(&rect, pressed);
        } else {
            p.fill_brush(
                &rect,
                &vertical_gradient(
                    rect,
                    [
                        (0.0, darker(palette.base, 115)),
                        (0.15, palette.base),
                        (1.0, palette.base),
                    ],
                ),
            );
        }
        let outline = if request.state.contains(StateFlags::HAS_FOCUS)
            && request.state.contains(StateFlags::KEYBOARD_FOCUS_CHANGE)
        {
            palette.highlighted_outline()
        } else {
            lighter(palette.outline(), 110)
        };
        p.stroke(&rect, outline, 1.0);

        let mark = darker(palette.text, 120);
        let pad = 1.0 + rect.width() * 0.13;

        if request.state.contains(StateFlags::NO_CHANGE) {
            let inner = Rect::new(rect.x0 + pad, rect.y0 + pad, rect.x1 - pad, rect.y1 - pad);
            p.fill_brush(
                &inner,
                &vertical_gradient(
                    inner,
                    [(0.0, with_alpha8(mark, 80)), (1.0, with_alpha8(mark, 140))],
                ),
            );
            p.stroke(&inner, with_alpha8(mark, 180), 1.0);
        } else if request.state.contains(StateFlags::ON) {
            let h = rect.height();
            let pen_width = 1.5_f64.max(0.13 * h).min(0.20 * h);
            let mut tick = BezPath::new();
            tick.move_to(Point::new(pad + h * 0.11, h * 0.47));
            tick.line_to(Point::new(h * 0.5, h - pad));
            tick.line_to(Point::new(h - pad, pad));
            p.apply_transform(Affine::translate((rect.x0 - 0.8, rect.y0 + 0.5)));
            p.stroke_styled(&tick, mark, &Stroke::new(pen_width));
        }
    });
    DrawOutcome::Handled
}

/// Radio button indicator: outlined circle, filled dot when on.
pub fn radio_button(
    _config: &StyleConfig,
    request: &DrawRequest,
    painter: &mut Painter,
) -> DrawOutcome {
    let rect = request.rect;
    let palette = request.palette;
    let center = Point::new(
        (rect.x0 + rect.x1) / 2.0 + 1.0,
        (rect.y0 + rect.y1) / 2.0 + 1.0,
    );
    let outline_radius = rect.width() / 2.0 - 1.0;

    painter.scoped(|p| {
        let fill = if request.state.contains(StateFlags::SUNKEN) {
            merged(palette.base, palette.window_text, 85)
        } else {
            palette.base
        };
        let circle = Circle::new(center, outline_radius);
        p.fill(&circle, fill);
        let pen = if request.state.contains(StateFlags::HAS_FOCUS)
            && request.state.contains(StateFlags::KEYBOARD_FOCUS_CHANGE)
        {
            palette.highlighted_outline()
        } else {
            darker(palette.window, 150)
        };
        p.stroke(&circle, pen, 1.0);

        if request.state.contains(StateFlags::ON) {
            let mark = darker(palette.text, 120);
            let dot = Circle::new(center, outline_radius / 2.32);
            p.fill(&dot, with_alpha8(mark, 180));
            p.stroke(&dot, with_alpha8(mark, 200), 1.0);
        }
    });
    DrawOutcome::Handled
}

/// Header sort arrow: two-segment chevron.
pub fn header_arrow(
    _config: &StyleConfig,
    request: &DrawRequest,
    painter: &mut Painter,
) -> DrawOutcome {
    let opt = match request.payload {
        Payload::Header(opt) => opt,
        _ => return DrawOutcome::Delegate,
    };
    if opt.sort_indicator == SortIndicator::None {
        return DrawOutcome::Handled;
    }
    let pen = chevron_pen(request, &opt);
    let rect = request.rect;
    let w = 8.0;
    let h = 4.0;
    let x = rect.x0 + 9.0 + (rect.width() - w) / 2.0;
    let y = rect.y0 + 9.0 + (rect.height() - h) / 2.0;

    let (p0, p1, p2, p3) = if opt.sort_indicator == SortIndicator::Up {
        (
            Point::new(x, y),
            Point::new(x + w / 2.0, y + h),
            Point::new(x + w / 2.0, y + h),
            Point::new(x + w, y),
        )
    } else {
        (
            Point::new(x, y + h),
            Point::new(x + w / 2.0, y),
            Point::new(x + w / 2.0, y),
            Point::new(x + w, y + h),
        )
    };
    painter.scoped(|p| {
        p.stroke(&Line::new(p0, p1), pen, 1.1);
        p.stroke(&Line::new(p2, p3), pen, 1.1);
    });
    DrawOutcome::Handled
}

fn chevron_pen(request: &DrawRequest, _opt: &HeaderOpt) -> Color {
    if request.enabled() {
        if request.state.contains(StateFlags::MOUSE_OVER) {
            request.palette.highlight
        } else {
            request.palette.window_text
        }
    } else {
        request.palette.text
    }
}

/// Tree-view branch indicator: arrow when the node has children.
pub fn branch(
    _config: &StyleConfig,
    request: &DrawRequest,
    painter: &mut Painter,
) -> DrawOutcome {
    if !request.state.contains(StateFlags::CHILDREN) {
        return DrawOutcome::Handled;
    }
    let direction = if request.state.contains(StateFlags::OPEN) {
        ArrowDirection::Down
    } else if request.right_to_left() {
        ArrowDirection::Left
    } else {
        ArrowDirection::Right
    };
    arrow(painter, request.rect, direction, request.palette.window_text);
    DrawOutcome::Handled
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::palette::Palette;
    use crate::surface::record::{Op, Recorder};

    fn paint(
        request: &DrawRequest,
        f: impl Fn(&StyleConfig, &DrawRequest, &mut Painter) -> DrawOutcome,
    ) -> Recorder {
        let config = StyleConfig::default();
        let mut rec = Recorder::default();
        let mut painter = Painter::new(&mut rec);
        let _ = f(&config, request, &mut painter);
        assert_eq!(painter.save_depth(), 0);
        assert_eq!(painter.layer_depth(), 0);
        rec
    }

    #[test]
    fn checked_box_strokes_the_tick_path() {
        let palette = Palette::standard();
        let mut request = DrawRequest::new(Rect::new(0.0, 0.0, 14.0, 14.0), &palette);
        request.state |= StateFlags::ON;
        let rec = paint(&request, check_box);

        // Fill + outline + tick stroke.
        let strokes: Vec<_> = rec
            .ops
            .iter()
            .filter(|op| matches!(op, Op::Stroke { .. }))
            .collect();
        assert_eq!(strokes.len(), 2);
        match strokes[1] {
            Op::Stroke { width, bounds, .. } => {
                // Pen clamped to [0.13, 0.20] of the height.
                let h = 13.0;
                assert!(*width >= 0.13 * h - 1e-9 && *width <= 0.20 * h + 1e-9);
                // Tick vertices stay inside the box.
                assert!(bounds.x1 <= 14.0 + 1.0);
            }
            _ => unreachable!(),
        }
    }

    #[test]
    fn indeterminate_box_draws_inner_pad_not_tick() {
        let palette = Palette::standard();
        let mut request = DrawRequest::new(Rect::new(0.0, 0.0, 14.0, 14.0), &palette);
        request.state |= StateFlags::NO_CHANGE;
        let rec = paint(&request, check_box);
        let fills = rec
            .ops
            .iter()
            .filter(|op| matches!(op, Op::Fill { .. }))
            .count();
        assert_eq!(fills, 2);
    }

    #[test]
    fn radio_on_adds_inner_dot() {
        let palette = Palette::standard();
        let mut request = DrawRequest::new(Rect::new(0.0, 0.0, 14.0, 14.0), &palette);
        let off = paint(&request, radio_button);
        request.state |= StateFlags::ON;
        let on = paint(&request, radio_button);
        assert_eq!(on.ops.len(), off.ops.len() + 2);
    }

    #[test]
    fn branch_without_children_is_empty() {
        let palette = Palette::standard();
        let request = DrawRequest::new(Rect::new(0.0, 0.0, 16.0, 16.0), &palette);
        let rec = paint(&request, branch);
        assert!(rec.ops.is_empty());
    }

    #[test]
    fn header_arrow_needs_a_header_payload() {
        let palette = Palette::standard();
        let request = DrawRequest::new(Rect::new(0.0, 0.0, 20.0, 20.0), &palette);
        let config = StyleConfig::default();
        let mut rec = Recorder::default();
        let mut painter = Painter::new(&mut rec);
        assert_eq!(
            header_arrow(&config, &request, &mut painter),
            DrawOutcome::Delegate
        );
        assert!(rec.ops.is_empty());
    }
}
