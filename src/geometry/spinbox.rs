//! Spin box sub-control geometry.
//!
//! The step buttons sit in a single column on the trailing edge, stacked
//! vertically; the edit field takes the remainder inside the frame.

use vello::kurbo::Rect;

use super::visual_rect;
use crate::request::{Payload, SpinButtonSymbols, SubControl, SubControlQuery};

const BUTTON_WIDTH: f64 = 14.0;

/// Resolve one spin box sub-control rect.
pub fn sub_control_rect(query: &SubControlQuery, sub: SubControl) -> Option<Rect> {
    let opt = match query.payload {
        Payload::SpinBox(opt) => opt,
        _ => return None,
    };
    let rect = query.rect;
    let w = rect.width();
    let h = rect.height();
    let center = h / 2.0;
    let fw = if opt.has_frame { 3.0 } else { 0.0 };
    let no_buttons = opt.symbols == SpinButtonSymbols::NoButtons;

    // Button column start, relative to the left edge.
    let x = w - fw - BUTTON_WIDTH + 2.0;

    let logical = match sub {
        SubControl::SpinBoxUp => {
            if no_buttons {
                return Some(Rect::ZERO);
            }
            Rect::new(x, fw, x + BUTTON_WIDTH, center)
        }
        SubControl::SpinBoxDown => {
            if no_buttons {
                return Some(Rect::ZERO);
            }
            Rect::new(x, center, x + BUTTON_WIDTH, h - fw)
        }
        SubControl::SpinBoxEditField => {
            if no_buttons {
                Rect::new(fw, fw, w - fw, h - fw)
            } else {
                let rx = x - fw;
                Rect::new(fw, fw, fw + rx - (fw - 1.0).max(0.0), h - fw)
            }
        }
        SubControl::SpinBoxFrame => Rect::new(0.0, 0.0, w, h),
        _ => return None,
    };

    let logical = logical + rect.origin().to_vec2();
    Some(visual_rect(query.direction, rect, logical))
}
