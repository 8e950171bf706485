//! Group box sub-control geometry.
//!
//! A label band (optional checkbox + title text) sits above a content rect
//! inset by fixed margins.

use vello::kurbo::Rect;

use super::visual_rect;
use crate::request::{LabelAlignment, Payload, SubControl, SubControlQuery};

const MARGIN: f64 = 3.0;
const TOP_MARGIN: f64 = 3.0;
const INDICATOR_SIZE: f64 = 14.0;
const CHECKBOX_GAP: f64 = 5.0;

/// Resolve one group box sub-control rect.
pub fn sub_control_rect(query: &SubControlQuery, sub: SubControl) -> Option<Rect> {
    let opt = match query.payload {
        Payload::GroupBox(opt) => opt,
        _ => return None,
    };
    let rect = query.rect;

    match sub {
        SubControl::GroupBoxFrame => Some(rect),
        SubControl::GroupBoxContents => {
            let top = INDICATOR_SIZE.max(opt.font_height) + TOP_MARGIN;
            Some(Rect::new(
                rect.x0 + MARGIN,
                rect.y0 + MARGIN + top,
                rect.x1 - MARGIN,
                rect.y1 - MARGIN,
            ))
        }
        SubControl::GroupBoxCheckBox | SubControl::GroupBoxLabel => {
            let text_w = opt.text_size.width + 2.0;
            let text_h = opt.text_size.height + 2.0;
            let band_w = text_w
                + if opt.has_checkbox {
                    INDICATOR_SIZE + CHECKBOX_GAP
                } else {
                    0.0
                };

            let mut left = 0.0;
            if rect.width() > band_w {
                left = match opt.label_alignment {
                    LabelAlignment::Left => 0.0,
                    LabelAlignment::Center => (rect.width() - band_w) / 2.0,
                    LabelAlignment::Right => rect.width() - band_w,
                };
            }

            let logical = if sub == SubControl::GroupBoxCheckBox {
                let top = if text_h > INDICATOR_SIZE {
                    (text_h - INDICATOR_SIZE) / 2.0
                } else {
                    0.0
                };
                Rect::new(
                    left + 1.0,
                    top,
                    left + 1.0 + INDICATOR_SIZE,
                    top + INDICATOR_SIZE,
                )
            } else {
                let shift = if opt.has_checkbox {
                    INDICATOR_SIZE + CHECKBOX_GAP
                } else {
                    0.0
                };
                Rect::new(left + shift, 1.0, left + shift + text_w, 1.0 + text_h)
            };
            let logical = logical + rect.origin().to_vec2();
            Some(visual_rect(query.direction, rect, logical))
        }
        _ => None,
    }
}
