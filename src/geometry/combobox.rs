//! Combo box sub-control geometry.

use vello::kurbo::{Rect, Vec2};

use super::visual_rect;
use crate::request::{Payload, StateFlags, SubControl, SubControlQuery};

const ARROW_WIDTH: f64 = 19.0;
const FRAME_WIDTH: f64 = 2.0;

/// Resolve a combo box arrow or edit-field rect.
pub fn sub_control_rect(query: &SubControlQuery, sub: SubControl) -> Option<Rect> {
    let rect = query.rect;
    match sub {
        SubControl::ComboBoxArrow => {
            // Slightly overshoots the frame vertically so the arrow area
            // reaches the control edge.
            let logical = Rect::new(
                rect.x1 - (ARROW_WIDTH - 1.0),
                rect.y0 - 2.0,
                rect.x1 + 1.0,
                rect.y1 + 2.0,
            );
            Some(visual_rect(query.direction, rect, logical))
        }
        SubControl::ComboBoxEditField => {
            let mut logical = Rect::new(
                rect.x0 + FRAME_WIDTH,
                rect.y0 + FRAME_WIDTH,
                rect.x1 - ARROW_WIDTH - FRAME_WIDTH,
                rect.y1 - FRAME_WIDTH,
            );
            if let Payload::ComboBox(opt) = query.payload {
                if !opt.editable {
                    logical.x0 += 2.0;
                    if query.state.intersects(StateFlags::SUNKEN | StateFlags::ON) {
                        logical = logical + Vec2::new(1.0, 1.0);
                    }
                }
            }
            Some(visual_rect(query.direction, rect, logical))
        }
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::palette::Palette;
    use crate::request::{ComboBoxOpt, LayoutDirection};

    #[test]
    fn arrow_hugs_the_trailing_edge() {
        let palette = Palette::standard();
        let q = SubControlQuery::new(Rect::new(0.0, 0.0, 120.0, 24.0), &palette);
        let arrow = sub_control_rect(&q, SubControl::ComboBoxArrow).unwrap();
        assert_eq!(arrow.width(), 20.0);
        assert!(arrow.x1 >= 120.0);
    }

    #[test]
    fn edit_field_excludes_the_arrow() {
        let palette = Palette::standard();
        let mut q = SubControlQuery::new(Rect::new(0.0, 0.0, 120.0, 24.0), &palette);
        q.payload = Payload::ComboBox(ComboBoxOpt {
            editable: true,
            has_frame: true,
            ..ComboBoxOpt::default()
        });
        let edit = sub_control_rect(&q, SubControl::ComboBoxEditField).unwrap();
        let arrow = sub_control_rect(&q, SubControl::ComboBoxArrow).unwrap();
        assert!(edit.x1 <= arrow.x0 + 1.0);
    }

    #[test]
    fn pressed_non_editable_field_shifts() {
        let palette = Palette::standard();
        let mut q = SubControlQuery::new(Rect::new(0.0, 0.0, 120.0, 24.0), &palette);
        q.payload = Payload::ComboBox(ComboBoxOpt::default());
        let up = sub_control_rect(&q, SubControl::ComboBoxEditField).unwrap();
        q.state |= StateFlags::SUNKEN;
        let down = sub_control_rect(&q, SubControl::ComboBoxEditField).unwrap();
        assert_eq!(down.x0 - up.x0, 1.0);
        assert_eq!(down.y0 - up.y0, 1.0);
    }

    #[test]
    fn rtl_mirrors_the_arrow() {
        let palette = Palette::standard();
        let mut q = SubControlQuery::new(Rect::new(0.0, 0.0, 120.0, 24.0), &palette);
        q.direction = LayoutDirection::RightToLeft;
        let arrow = sub_control_rect(&q, SubControl::ComboBoxArrow).unwrap();
        assert!(arrow.x0 <= 0.0);
    }
}
