//! Item views, headers, docks and window chrome.

use std::f64::consts::FRAC_PI_2;

use vello::kurbo::{Affine, Line, Point, Rect};
use vello::peniko::Color;

use super::{rounded, DrawOutcome};
use crate::config::StyleConfig;
use crate::geometry::{adjusted, combobox};
use crate::palette::{darker, with_alpha8};
use crate::request::{
    DrawRequest, Payload, SectionPosition, StateFlags, SubControl, SubControlQuery,
};
use crate::surface::Painter;

/// Item-view row background. Selection is a flat highlight fill, rounded
/// into a pill in icon views.
pub fn item_row(
    config: &StyleConfig,
    request: &DrawRequest,
    painter: &mut Painter,
) -> DrawOutcome {
    let icon_view = match request.payload {
        Payload::Item(opt) => opt.icon_view,
        Payload::None => false,
        _ => return DrawOutcome::Delegate,
    };
    if !request.state.contains(StateFlags::SELECTED) {
        return DrawOutcome::Handled;
    }
    let rect = request.rect;
    let highlight = if request.enabled() && request.state.contains(StateFlags::ACTIVE) {
        request.palette.highlight
    } else {
        request.palette.disabled_highlight
    };
    painter.scoped(|p| {
        if icon_view {
            let radius = rect.height() * config.radius_ratio;
            p.fill(&rounded(rect, radius), highlight);
        } else {
            p.fill(&rect, highlight);
        }
    });
    DrawOutcome::Handled
}

/// Drop indicator between item-view rows: a translucent highlight pill.
pub fn item_drop_indicator(
    config: &StyleConfig,
    request: &DrawRequest,
    painter: &mut Painter,
) -> DrawOutcome {
    let radius = config.frame_radius;
    let rect = adjusted(request.rect, radius, radius, -radius, -radius);
    if rect.height() <= 0.0 {
        return DrawOutcome::Handled;
    }
    let highlight = request.palette.highlight;
    painter.scoped(|p| {
        p.fill(&rounded(rect, radius), with_alpha8(highlight, 60));
        p.stroke(&rounded(rect, radius), highlight, 1.0);
    });
    DrawOutcome::Handled
}

/// Rubber-band selection rectangle.
pub fn rubber_band(
    _config: &StyleConfig,
    request: &DrawRequest,
    painter: &mut Painter,
) -> DrawOutcome {
    let rect = request.rect;
    let highlight = request.palette.highlight;
    let pen = with_alpha8(darker(highlight, 120), 180);
    let c = highlight.to_rgba8();
    let dim = Color::from_rgba8(
        (c.r as u32 / 2 + 110).min(255) as u8,
        (c.g as u32 / 2 + 110).min(255) as u8,
        (c.b as u32 / 2 + 110).min(255) as u8,
        80,
    );
    painter.scoped(|p| {
        let outer = rounded(adjusted(rect, 0.5, 0.5, -0.5, -0.5), 1.0);
        p.fill(&outer, dim);
        p.stroke(&outer, pen, 1.0);
        p.stroke(
            &rounded(adjusted(rect, 1.5, 1.5, -1.5, -1.5), 1.0),
            Color::from_rgba8(255, 255, 255, 40),
            1.0,
        );
    });
    DrawOutcome::Handled
}

/// Header section: alternate-base fill with hairline separators. The
/// trailing divider is inset by a fifth of the height and skipped on the
/// last section.
pub fn header_section(
    _config: &StyleConfig,
    request: &DrawRequest,
    painter: &mut Painter,
) -> DrawOutcome {
    let opt = match request.payload {
        Payload::Header(opt) => opt,
        _ => return DrawOutcome::Delegate,
    };
    let rect = request.rect;
    let horizontal = request.state.contains(StateFlags::HORIZONTAL);
    let last = opt.position == SectionPosition::End;
    let fill = request.palette.alternate_base;
    let line = darker(fill, 110);

    painter.scoped(|p| {
        p.fill(&rect, fill);
        if horizontal {
            if !last {
                let inset = rect.height() / 5.0;
                p.stroke(
                    &Line::new((rect.x1, rect.y0 + inset), (rect.x1, rect.y1 - inset)),
                    line,
                    1.0,
                );
            }
            p.stroke(&Line::new((rect.x0, rect.y1), (rect.x1, rect.y1)), line, 1.0);
        } else {
            if !last {
                p.stroke(&Line::new((rect.x0, rect.y1), (rect.x1, rect.y1)), line, 1.0);
            }
            p.stroke(&Line::new((rect.x1, rect.y0), (rect.x1, rect.y1)), line, 1.0);
        }
    });
    DrawOutcome::Handled
}

/// Text area of a non-editable combo box, clipped to the edit field.
pub fn combo_box_label(
    _config: &StyleConfig,
    request: &DrawRequest,
    painter: &mut Painter,
) -> DrawOutcome {
    let opt = match request.payload {
        Payload::ComboBox(opt) => opt,
        _ => return DrawOutcome::Delegate,
    };
    let mut query = SubControlQuery::new(request.rect, request.palette);
    query.state = request.state;
    query.direction = request.direction;
    query.payload = request.payload;
    let edit = match combobox::sub_control_rect(&query, SubControl::ComboBoxEditField) {
        Some(rect) => rect,
        None => return DrawOutcome::Delegate,
    };

    painter.scoped(|p| {
        p.push_clip(&edit);
        if let Some(text) = opt.text {
            if !text.is_empty() && !opt.editable {
                let origin = Point::new(edit.x0 + 1.0, (edit.y0 + edit.y1) / 2.0);
                p.draw_text(origin, text, edit.height().min(16.0), request.palette.button_text);
            }
        }
    });
    DrawOutcome::Handled
}

/// Dock widget frame: soft shadow outline with a light inner left edge.
pub fn dock_frame(
    _config: &StyleConfig,
    request: &DrawRequest,
    painter: &mut Painter,
) -> DrawOutcome {
    let rect = request.rect;
    let palette = request.palette;
    let soft_shadow = darker(palette.window, 120);
    painter.scoped(|p| {
        p.stroke(&adjusted(rect, 0.0, 0.0, -1.0, -1.0), soft_shadow, 1.0);
        p.stroke(
            &Line::new((rect.x0 + 1.0, rect.y0 + 1.0), (rect.x0 + 1.0, rect.y1 - 1.0)),
            palette.light,
            1.0,
        );
        p.stroke(
            &Line::new((rect.x0 + 1.0, rect.y1 - 1.0), (rect.x1 - 2.0, rect.y1 - 1.0)),
            soft_shadow,
            1.0,
        );
        p.stroke(
            &Line::new((rect.x1 - 1.0, rect.y0 + 1.0), (rect.x1 - 1.0, rect.y1 - 1.0)),
            soft_shadow,
            1.0,
        );
    });
    DrawOutcome::Handled
}

/// Dock title text, left-aligned and vertically centered. Vertical title
/// bars rotate -90 degrees around the transposed origin.
pub fn dock_title(
    _config: &StyleConfig,
    request: &DrawRequest,
    painter: &mut Painter,
) -> DrawOutcome {
    let opt = match request.payload {
        Payload::DockTitle(opt) => opt,
        _ => return DrawOutcome::Delegate,
    };
    let text = match opt.title {
        Some(text) if !text.is_empty() => text,
        _ => return DrawOutcome::Handled,
    };
    let rect = request.rect;
    painter.scoped(|p| {
        let title = if opt.vertical {
            // Transposed in place: same origin, swapped extents.
            let r = Rect::new(rect.x0, rect.y0, rect.x0 + rect.height(), rect.y0 + rect.width());
            p.apply_transform(
                Affine::translate((r.x0, r.y0 + r.width()))
                    * Affine::rotate(-FRAC_PI_2)
                    * Affine::translate((-r.x0, -r.y0)),
            );
            r
        } else {
            rect
        };
        let origin = Point::new(title.x0 + 4.0, (title.y0 + title.y1) / 2.0);
        p.draw_text(origin, text, title.height().min(14.0), request.palette.window_text);
    });
    DrawOutcome::Handled
}

/// Top-level window frame lines.
pub fn window_frame(
    _config: &StyleConfig,
    request: &DrawRequest,
    painter: &mut Painter,
) -> DrawOutcome {
    let rect = request.rect;
    let palette = request.palette;
    let dark = darker(palette.window, 120);
    painter.scoped(|p| {
        p.stroke(&adjusted(rect, 0.0, 0.0, -1.0, -1.0), darker(palette.outline(), 150), 1.0);
        p.stroke(
            &Line::new((rect.x0 + 1.0, rect.y0 + 1.0), (rect.x0 + 1.0, rect.y1 - 1.0)),
            palette.light,
            1.0,
        );
        p.stroke(
            &Line::new((rect.x0 + 1.0, rect.y1 - 1.0), (rect.x1 - 2.0, rect.y1 - 1.0)),
            dark,
            1.0,
        );
        p.stroke(
            &Line::new((rect.x1 - 1.0, rect.y0 + 1.0), (rect.x1 - 1.0, rect.y1 - 1.0)),
            dark,
            1.0,
        );
    });
    DrawOutcome::Handled
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::palette::Palette;
    use crate::request::{ComboBoxOpt, DockTitleOpt, HeaderOpt, ItemOpt};
    use crate::surface::record::{Op, Recorder};

    fn paint<'a>(
        request: &DrawRequest<'a>,
        f: impl Fn(&StyleConfig, &DrawRequest, &mut Painter) -> DrawOutcome,
    ) -> Recorder {
        let config = StyleConfig::default();
        let mut rec = Recorder::default();
        {
            let mut painter = Painter::new(&mut rec);
            f(&config, request, &mut painter);
            assert_eq!(painter.save_depth(), 0);
            assert_eq!(painter.layer_depth(), 0);
        }
        rec
    }

    #[test]
    fn unselected_row_paints_nothing() {
        let palette = Palette::standard();
        let request = DrawRequest::new(Rect::new(0.0, 0.0, 200.0, 24.0), &palette);
        assert!(paint(&request, item_row).ops.is_empty());
    }

    #[test]
    fn selected_icon_view_row_is_a_pill() {
        let palette = Palette::standard();
        let mut request = DrawRequest::new(Rect::new(0.0, 0.0, 80.0, 80.0), &palette);
        request.state |= StateFlags::SELECTED | StateFlags::ACTIVE;
        request.payload = Payload::Item(ItemOpt { icon_view: true });
        let rec = paint(&request, item_row);
        assert_eq!(rec.fill_colors(), vec![palette.highlight]);
    }

    #[test]
    fn drop_indicator_collapses_when_too_small() {
        let palette = Palette::standard();
        let request = DrawRequest::new(Rect::new(0.0, 0.0, 100.0, 10.0), &palette);
        // Height 10 minus two 9px insets leaves nothing to draw.
        assert!(paint(&request, item_drop_indicator).ops.is_empty());
    }

    #[test]
    fn drop_indicator_fill_is_translucent_highlight() {
        let palette = Palette::standard();
        let request = DrawRequest::new(Rect::new(0.0, 0.0, 120.0, 40.0), &palette);
        let rec = paint(&request, item_drop_indicator);
        assert_eq!(rec.fill_colors(), vec![with_alpha8(palette.highlight, 60)]);
    }

    #[test]
    fn header_divider_skipped_on_last_section() {
        let palette = Palette::standard();
        let mut request = DrawRequest::new(Rect::new(0.0, 0.0, 80.0, 25.0), &palette);
        request.state |= StateFlags::HORIZONTAL;
        request.payload = Payload::Header(HeaderOpt::default());
        let middle = paint(&request, header_section);
        request.payload = Payload::Header(HeaderOpt {
            position: SectionPosition::End,
            ..HeaderOpt::default()
        });
        let last = paint(&request, header_section);
        assert_eq!(middle.ops.len(), last.ops.len() + 1);
    }

    #[test]
    fn rubber_band_has_dim_fill_and_inner_line() {
        let palette = Palette::standard();
        let request = DrawRequest::new(Rect::new(0.0, 0.0, 60.0, 40.0), &palette);
        let rec = paint(&request, rubber_band);
        let fill = rec.fill_colors()[0].to_rgba8();
        assert_eq!(fill.a, 80);
        assert_eq!(
            rec.ops
                .iter()
                .filter(|op| matches!(op, Op::Stroke { .. }))
                .count(),
            2
        );
    }

    #[test]
    fn combo_label_clips_to_edit_field() {
        let palette = Palette::standard();
        let mut request = DrawRequest::new(Rect::new(0.0, 0.0, 120.0, 24.0), &palette);
        request.payload = Payload::ComboBox(ComboBoxOpt {
            text: Some("Primary"),
            ..ComboBoxOpt::default()
        });
        let rec = paint(&request, combo_box_label);
        assert!(matches!(rec.ops[0], Op::PushLayer { .. }));
        assert!(rec
            .ops
            .iter()
            .any(|op| matches!(op, Op::Text { text, .. } if text == "Primary")));
        assert_eq!(rec.open_layers(), 0);
    }

    #[test]
    fn editable_combo_draws_no_text() {
        let palette = Palette::standard();
        let mut request = DrawRequest::new(Rect::new(0.0, 0.0, 120.0, 24.0), &palette);
        request.payload = Payload::ComboBox(ComboBoxOpt {
            text: Some("Primary"),
            editable: true,
            ..ComboBoxOpt::default()
        });
        let rec = paint(&request, combo_box_label);
        assert!(!rec.ops.iter().any(|op| matches!(op, Op::Text { .. })));
    }

    #[test]
    fn vertical_dock_title_rotates_the_text() {
        let palette = Palette::standard();
        let mut request = DrawRequest::new(Rect::new(0.0, 0.0, 20.0, 120.0), &palette);
        request.payload = Payload::DockTitle(DockTitleOpt {
            title: Some("Outline"),
            vertical: true,
        });
        let rec = paint(&request, dock_title);
        match &rec.ops[0] {
            Op::Text { origin, .. } => {
                // Mapped back into the vertical strip.
                assert!(origin.x >= 0.0 && origin.x <= 20.0);
                assert!(origin.y >= 0.0 && origin.y <= 120.0);
            }
            other => panic!("unexpected op {other:?}"),
        }
    }

    #[test]
    fn window_frame_draws_four_lines() {
        let palette = Palette::standard();
        let request = DrawRequest::new(Rect::new(0.0, 0.0, 300.0, 200.0), &palette);
        let rec = paint(&request, window_frame);
        assert_eq!(rec.ops.len(), 4);
        assert!(rec.ops.iter().all(|op| matches!(op, Op::Stroke { .. })));
    }
}
