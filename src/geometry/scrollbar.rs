//! Scrollbar sub-control geometry.
//!
//! This style draws transient overlay scrollbars: no step buttons, the
//! groove spans the full rect and the slider is a proportional pill inside
//! it.

use vello::kurbo::Rect;

use super::{adjusted, visual_rect};
use crate::request::{Payload, SubControl, SubControlQuery};

/// Shortest slider the user can still grab.
pub const MIN_SLIDER_LENGTH: f64 = 26.0;

/// Resolve one scrollbar sub-control rect.
pub fn sub_control_rect(query: &SubControlQuery, sub: SubControl) -> Option<Rect> {
    match sub {
        // Step buttons do not exist in this style.
        SubControl::ScrollBarSubLine | SubControl::ScrollBarAddLine => Some(Rect::ZERO),
        SubControl::ScrollBarGroove => Some(query.rect),
        SubControl::ScrollBarSlider => Some(slider_rect(query)?),
        SubControl::ScrollBarSubPage => {
            let slider = slider_rect(query)?;
            let groove = query.rect;
            let logical = if query.horizontal() {
                Rect::new(groove.x0, groove.y0, slider.x0, groove.y1)
            } else {
                Rect::new(groove.x0, groove.y0, groove.x1, slider.y0)
            };
            Some(visual_rect(query.direction, query.rect, logical))
        }
        SubControl::ScrollBarAddPage => {
            let slider = slider_rect(query)?;
            let groove = query.rect;
            let logical = if query.horizontal() {
                Rect::new(slider.x1, groove.y0, groove.x1, groove.y1)
            } else {
                Rect::new(groove.x0, slider.y1, groove.x1, groove.y1)
            };
            Some(visual_rect(query.direction, query.rect, logical))
        }
        _ => None,
    }
}

fn slider_rect(query: &SubControlQuery) -> Option<Rect> {
    let opt = match query.payload {
        Payload::Slider(opt) => opt,
        _ => return None,
    };

    // Inset the groove so the pill floats off the edges.
    let groove = adjusted(query.rect, 0.0, 2.0, 1.0, 1.0);
    if opt.minimum == opt.maximum {
        return Some(groove);
    }

    let horizontal = query.horizontal();
    let track = if horizontal {
        groove.width()
    } else {
        groove.height()
    };

    let range = (opt.maximum - opt.minimum) as f64;
    let slider_len = (track * opt.page_step as f64 / (range + opt.page_step as f64))
        .max(MIN_SLIDER_LENGTH)
        .min(track);

    let space = track - slider_len;
    if space <= 0.0 {
        return Some(groove);
    }

    let mut pos = ((opt.position - opt.minimum) as f64 / range * space).round();
    if opt.upside_down {
        pos = space - pos;
    }

    let logical = if horizontal {
        Rect::new(groove.x0 + pos, groove.y0, groove.x0 + pos + slider_len, groove.y1)
    } else {
        Rect::new(groove.x0, groove.y0 + pos, groove.x1, groove.y0 + pos + slider_len)
    };
    Some(visual_rect(query.direction, query.rect, logical))
}
