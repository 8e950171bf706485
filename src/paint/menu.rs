//! Popup menu and menu bar painting.

use vello::kurbo::{BezPath, Circle, Line, Point, Rect};
use vello::peniko::Color;

use super::{rounded, DrawOutcome};
use crate::config::StyleConfig;
use crate::geometry::visual_rect;
use crate::palette::{darker, lighter, merged, with_alpha8};
use crate::paint::indicator::{arrow, ArrowDirection};
use crate::request::{
    DrawRequest, MenuCheckKind, MenuItemKind, Payload, StateFlags, WidgetKind,
};
use crate::surface::{shape_to_path, Painter};

const SEPARATOR_MARGIN: f64 = 5.0;
const CHECK_COL_H_OFFSET: f64 = 4.0; // item h-margin + item frame - 1
const CHECK_BOX_MARGIN: f64 = 3.5;
const HALO_STD_DEV: f64 = 2.5;

/// Translucent popup frame with a soft drop-shadow halo.
///
/// The halo is the blurred silhouette of the frame, clipped so it only
/// shows around the sharp rounded fill, never under it. An explicit
/// widget mask wins over the default rounded silhouette.
pub fn menu_frame(
    config: &StyleConfig,
    request: &DrawRequest,
    painter: &mut Painter,
) -> DrawOutcome {
    let radius = config.frame_radius;
    let rect = request.rect;
    let silhouette = Rect::new(
        rect.x0 + radius,
        rect.y0 + radius,
        rect.x1 - radius,
        rect.y1 - radius,
    );
    let fill = with_alpha8(request.palette.base, config.menu_fill_alpha);

    painter.scoped(|p| {
        let mask = request.widget.and_then(|w| w.mask()).filter(|r| !r.is_empty());
        let sharp: BezPath = match &mask {
            Some(region) => region.to_path(),
            None => shape_to_path(&rounded(silhouette, radius)),
        };

        // Clip the halo to the outside of the frame; its interior must
        // stay clear so the translucent fill keeps the base color.
        let mut outside = shape_to_path(&rect);
        outside.extend(sharp.reverse_subpaths());
        p.scoped(|p| {
            p.push_clip(&outside);
            p.blurred_rounded_rect(silhouette, Color::BLACK, radius, HALO_STD_DEV);
        });

        p.fill(&sharp, fill);
    });
    DrawOutcome::Handled
}

/// One entry in a popup menu: separator, highlight pill, check column and
/// submenu arrow. Label text is drawn by the host into the rects this
/// leaves free.
pub fn menu_item(
    _config: &StyleConfig,
    request: &DrawRequest,
    painter: &mut Painter,
) -> DrawOutcome {
    let opt = match request.payload {
        Payload::MenuItem(opt) => opt,
        _ => return DrawOutcome::Delegate,
    };
    let rect = request.rect;
    let palette = request.palette;

    // Separators take their own branch before any highlight drawing.
    if opt.item_kind == MenuItemKind::Separator {
        let text_w = if opt.section_text_width > 0.0 {
            opt.section_text_width + SEPARATOR_MARGIN
        } else {
            0.0
        };
        let cy = (rect.y0 + rect.y1) / 2.0;
        let (x0, x1) = if request.right_to_left() {
            (rect.x0 + SEPARATOR_MARGIN, rect.x1 - SEPARATOR_MARGIN - text_w)
        } else {
            (rect.x0 + SEPARATOR_MARGIN + text_w, rect.x1 - SEPARATOR_MARGIN)
        };
        painter.scoped(|p| {
            p.stroke(&Line::new((x0, cy), (x1, cy)), Color::from_rgba8(0, 0, 0, 60), 1.0);
        });
        return DrawOutcome::Handled;
    }

    let selected = request.state.contains(StateFlags::SELECTED) && request.enabled();
    let sunken = request.state.contains(StateFlags::SUNKEN);

    painter.scoped(|p| {
        if selected {
            let radius = rect.height() * 0.2;
            let pill = Rect::new(rect.x0 + 0.5, rect.y0 + 0.5, rect.x1 - 0.5, rect.y1 - 0.5);
            p.fill(&rounded(pill, radius), palette.highlight);
        }

        // Combo popups provide their own check marks.
        let in_combo = opt.in_combo || request.widget_kind() == WidgetKind::ComboBox;
        let checkable = opt.check_kind != MenuCheckKind::NotCheckable;

        if !in_combo && checkable {
            let checkcol = (rect.height() * 0.79)
                .max(opt.max_icon_width)
                .max(21.0);
            let box_width = checkcol - 2.0 * CHECK_BOX_MARGIN;
            let cy = (rect.y0 + rect.y1) / 2.0;
            let check = Rect::new(
                rect.x0 + CHECK_BOX_MARGIN + CHECK_COL_H_OFFSET,
                cy - box_width / 2.0 + 1.0,
                rect.x0 + CHECK_BOX_MARGIN + CHECK_COL_H_OFFSET + box_width,
                cy + box_width / 2.0 + 1.0,
            );
            let check = visual_rect(request.direction, rect, check);

            match opt.check_kind {
                MenuCheckKind::Exclusive => {
                    if opt.checked || request.state.contains(StateFlags::ON) || sunken {
                        let mark = if !request.enabled() {
                            palette.text
                        } else if selected {
                            palette.highlighted_text
                        } else {
                            palette.button_text
                        };
                        let inset = check.height() * 0.3;
                        let dot = Rect::new(
                            check.x0 + inset,
                            check.y0 + inset,
                            check.x1 - inset,
                            check.y1 - inset,
                        );
                        p.fill(
                            &Circle::new(
                                Point::new((dot.x0 + dot.x1) / 2.0, (dot.y0 + dot.y1) / 2.0),
                                dot.width() / 2.0,
                            ),
                            mark,
                        );
                    }
                }
                MenuCheckKind::NonExclusive => {
                    if !opt.has_icon {
                        let mut sub = DrawRequest::new(check, palette);
                        sub.state = request.state;
                        if opt.checked || request.state.contains(StateFlags::ON) {
                            sub.state |= StateFlags::ON;
                        } else {
                            sub.state |= StateFlags::OFF;
                            sub.state.remove(StateFlags::ON);
                        }
                        crate::paint::indicator::check_box(_config, &sub, p);
                    }
                }
                MenuCheckKind::NotCheckable => {}
            }
        }

        if opt.item_kind == MenuItemKind::SubMenu {
            let dim = (rect.height() - 4.0) / 2.0;
            let xpos = rect.x1 - 3.0 - dim;
            let cy = (rect.y0 + rect.y1) / 2.0;
            let sub_rect = visual_rect(
                request.direction,
                rect,
                Rect::new(xpos, cy - dim / 2.0, xpos + dim, cy + dim / 2.0),
            );
            let direction = if request.right_to_left() {
                ArrowDirection::Left
            } else {
                ArrowDirection::Right
            };
            let color = if selected {
                palette.highlighted_text
            } else {
                palette.window_text
            };
            arrow(p, sub_rect, direction, color);
        }
    });
    DrawOutcome::Handled
}

/// Menu bar entry: highlight block when pressed open, bottom shadow
/// otherwise.
pub fn menu_bar_item(
    _config: &StyleConfig,
    request: &DrawRequest,
    painter: &mut Painter,
) -> DrawOutcome {
    let rect = request.rect;
    let palette = request.palette;
    let active = request
        .state
        .contains(StateFlags::SELECTED | StateFlags::SUNKEN);

    painter.scoped(|p| {
        p.fill(&rect, palette.window);
        if active {
            let r = Rect::new(rect.x0, rect.y0, rect.x1 - 1.0, rect.y1 - 1.0);
            p.fill(&r, palette.highlight);
            p.stroke(&r, darker(palette.highlight, 125), 1.0);
        } else {
            p.stroke(
                &Line::new((rect.x0, rect.y1), (rect.x1, rect.y1)),
                bar_shadow(request),
                1.0,
            );
        }
    });
    DrawOutcome::Handled
}

/// Unoccupied menu bar area: window fill plus the bottom shadow line.
pub fn menu_bar_empty_area(
    _config: &StyleConfig,
    request: &DrawRequest,
    painter: &mut Painter,
) -> DrawOutcome {
    let rect = request.rect;
    painter.scoped(|p| {
        p.fill(&rect, request.palette.window);
        p.stroke(
            &Line::new((rect.x0, rect.y1), (rect.x1, rect.y1)),
            bar_shadow(request),
            1.0,
        );
    });
    DrawOutcome::Handled
}

fn bar_shadow(request: &DrawRequest) -> Color {
    merged(
        darker(request.palette.window, 120),
        lighter(request.palette.outline(), 140),
        60,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::palette::Palette;
    use crate::request::MenuItemOpt;
    use crate::surface::record::{Op, Recorder};

    fn paint(
        request: &DrawRequest,
        f: impl Fn(&StyleConfig, &DrawRequest, &mut Painter) -> DrawOutcome,
    ) -> (Recorder, DrawOutcome) {
        let config = StyleConfig::default();
        let mut rec = Recorder::default();
        let outcome = {
            let mut painter = Painter::new(&mut rec);
            let out = f(&config, request, &mut painter);
            assert_eq!(painter.save_depth(), 0);
            assert_eq!(painter.layer_depth(), 0);
            out
        };
        (rec, outcome)
    }

    #[test]
    fn frame_records_clipped_halo_then_sharp_fill() {
        let palette = Palette::standard();
        let request = DrawRequest::new(Rect::new(0.0, 0.0, 200.0, 300.0), &palette);
        let (rec, outcome) = paint(&request, menu_frame);
        assert_eq!(outcome, DrawOutcome::Handled);
        // The halo is drawn inside a clip layer that is closed before the
        // fill, so the blur cannot darken the translucent interior.
        assert!(matches!(rec.ops[0], Op::PushLayer { .. }));
        assert!(matches!(rec.ops[1], Op::BlurredRect { radius, .. } if radius == 9.0));
        assert!(matches!(rec.ops[2], Op::PopLayer));
        match &rec.ops[3] {
            Op::Fill { bounds, .. } => {
                // Silhouette inset by the frame radius on every side.
                assert_eq!(bounds.x0, 9.0);
                assert_eq!(bounds.y1, 291.0);
            }
            other => panic!("unexpected op {other:?}"),
        }
    }

    #[test]
    fn separator_draws_only_a_line() {
        let palette = Palette::standard();
        let mut request = DrawRequest::new(Rect::new(0.0, 0.0, 180.0, 8.0), &palette);
        request.state |= StateFlags::SELECTED;
        request.payload = Payload::MenuItem(MenuItemOpt {
            item_kind: MenuItemKind::Separator,
            ..MenuItemOpt::default()
        });
        let (rec, _) = paint(&request, menu_item);
        assert_eq!(rec.ops.len(), 1);
        assert!(matches!(rec.ops[0], Op::Stroke { .. }));
    }

    #[test]
    fn selected_item_paints_highlight_pill() {
        let palette = Palette::standard();
        let mut request = DrawRequest::new(Rect::new(0.0, 0.0, 180.0, 24.0), &palette);
        request.state |= StateFlags::SELECTED;
        request.payload = Payload::MenuItem(MenuItemOpt::default());
        let (rec, _) = paint(&request, menu_item);
        assert_eq!(rec.fill_colors(), vec![palette.highlight]);
    }

    #[test]
    fn exclusive_check_draws_dot_when_checked() {
        let palette = Palette::standard();
        let mut request = DrawRequest::new(Rect::new(0.0, 0.0, 180.0, 24.0), &palette);
        request.payload = Payload::MenuItem(MenuItemOpt {
            check_kind: MenuCheckKind::Exclusive,
            checked: true,
            ..MenuItemOpt::default()
        });
        let (rec, _) = paint(&request, menu_item);
        let fills = rec
            .ops
            .iter()
            .filter(|op| matches!(op, Op::Fill { .. }))
            .count();
        assert_eq!(fills, 1);
    }

    #[test]
    fn combo_popup_items_skip_the_check_column() {
        let palette = Palette::standard();
        let mut request = DrawRequest::new(Rect::new(0.0, 0.0, 180.0, 24.0), &palette);
        request.payload = Payload::MenuItem(MenuItemOpt {
            check_kind: MenuCheckKind::Exclusive,
            checked: true,
            in_combo: true,
            ..MenuItemOpt::default()
        });
        let (rec, _) = paint(&request, menu_item);
        assert!(rec.ops.is_empty());
    }

    #[test]
    fn menu_bar_item_idle_has_bottom_shadow() {
        let palette = Palette::standard();
        let request = DrawRequest::new(Rect::new(0.0, 0.0, 60.0, 22.0), &palette);
        let (rec, _) = paint(&request, menu_bar_item);
        assert!(matches!(rec.ops.last(), Some(Op::Stroke { .. })));
    }
}
