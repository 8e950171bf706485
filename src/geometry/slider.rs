//! Slider sub-control geometry.

use vello::kurbo::Rect;

use super::visual_rect;
use crate::request::{Payload, StateFlags, SubControl, SubControlQuery};

const HANDLE_LENGTH: f64 = 15.0;
const HANDLE_THICKNESS: f64 = 15.0;
const GROOVE_THICKNESS: f64 = 7.0;
const TICK_OFFSET: f64 = 4.0;

/// Resolve a slider groove or handle rect.
pub fn sub_control_rect(query: &SubControlQuery, sub: SubControl) -> Option<Rect> {
    let opt = match query.payload {
        Payload::Slider(opt) => opt,
        _ => return None,
    };
    let rect = query.rect;
    let horizontal = query.state.contains(StateFlags::HORIZONTAL);

    // Ticks on one side push the groove and handle toward the other.
    let mut tick_shift = 0.0;
    if opt.tick_position.above() {
        tick_shift += TICK_OFFSET;
    }
    if opt.tick_position.below() {
        tick_shift -= TICK_OFFSET;
    }

    match sub {
        SubControl::SliderGroove => {
            let logical = if horizontal {
                let cy = (rect.y0 + rect.y1) / 2.0 + tick_shift;
                Rect::new(
                    rect.x0,
                    cy - GROOVE_THICKNESS / 2.0,
                    rect.x1,
                    cy + GROOVE_THICKNESS / 2.0,
                )
            } else {
                let cx = (rect.x0 + rect.x1) / 2.0 + tick_shift;
                Rect::new(
                    cx - GROOVE_THICKNESS / 2.0,
                    rect.y0,
                    cx + GROOVE_THICKNESS / 2.0,
                    rect.y1,
                )
            };
            Some(logical)
        }
        SubControl::SliderHandle => {
            let range = (opt.maximum - opt.minimum) as f64;
            let span = if horizontal {
                rect.width()
            } else {
                rect.height()
            } - HANDLE_LENGTH;
            let mut pos = if range > 0.0 {
                ((opt.position - opt.minimum) as f64 / range * span).round()
            } else {
                0.0
            };
            if opt.upside_down {
                pos = span - pos;
            }
            let logical = if horizontal {
                let cy = (rect.y0 + rect.y1) / 2.0 + tick_shift;
                Rect::new(
                    rect.x0 + pos,
                    cy - HANDLE_THICKNESS / 2.0,
                    rect.x0 + pos + HANDLE_LENGTH,
                    cy + HANDLE_THICKNESS / 2.0,
                )
            } else {
                let cx = (rect.x0 + rect.x1) / 2.0 + tick_shift;
                Rect::new(
                    cx - HANDLE_THICKNESS / 2.0,
                    rect.y0 + pos,
                    cx + HANDLE_THICKNESS / 2.0,
                    rect.y0 + pos + HANDLE_LENGTH,
                )
            };
            Some(visual_rect(query.direction, rect, logical))
        }
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::palette::Palette;
    use crate::request::{SliderOpt, TickPosition};

    fn query(palette: &Palette, opt: SliderOpt) -> SubControlQuery<'_> {
        let mut q = SubControlQuery::new(Rect::new(0.0, 0.0, 200.0, 30.0), palette);
        q.state |= StateFlags::HORIZONTAL;
        q.payload = Payload::Slider(opt);
        q
    }

    #[test]
    fn groove_is_centered() {
        let palette = Palette::standard();
        let q = query(&palette, SliderOpt::default());
        let groove = sub_control_rect(&q, SubControl::SliderGroove).unwrap();
        assert_eq!(groove.height(), GROOVE_THICKNESS);
        assert_eq!((groove.y0 + groove.y1) / 2.0, 15.0);
    }

    #[test]
    fn ticks_above_push_groove_down() {
        let palette = Palette::standard();
        let opt = SliderOpt {
            tick_position: TickPosition::Above,
            ..SliderOpt::default()
        };
        let q = query(&palette, opt);
        let groove = sub_control_rect(&q, SubControl::SliderGroove).unwrap();
        assert_eq!((groove.y0 + groove.y1) / 2.0, 15.0 + TICK_OFFSET);
    }

    #[test]
    fn handle_tracks_position() {
        let palette = Palette::standard();
        let at_min = query(
            &palette,
            SliderOpt {
                position: 0,
                ..SliderOpt::default()
            },
        );
        let at_max = query(
            &palette,
            SliderOpt {
                position: 100,
                ..SliderOpt::default()
            },
        );
        let h0 = sub_control_rect(&at_min, SubControl::SliderHandle).unwrap();
        let h1 = sub_control_rect(&at_max, SubControl::SliderHandle).unwrap();
        assert_eq!(h0.x0, 0.0);
        assert_eq!(h1.x1, 200.0);
    }
}
