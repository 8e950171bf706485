//! Tab label geometry.
//!
//! Splits a tab rect into icon and text areas. Vertical tab bars are
//! handled by transposing into horizontal space, computing there, and
//! letting the paint code apply the rotation transform.

use vello::kurbo::{Rect, Size};

use super::{transposed, visual_rect};
use crate::request::{DrawRequest, Payload, StateFlags, TabShape};

const H_PADDING: f64 = 12.0;
const V_PADDING: f64 = 6.0;
const VERTICAL_SHIFT: f64 = 2.0;
const HORIZONTAL_SHIFT: f64 = 0.0;
const ICON_GAP: f64 = 4.0;
const BUTTON_GAP: f64 = 4.0;
const SMALL_ICON: f64 = 16.0;

/// Icon and text rects of a tab.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TabLayout {
    /// Text area. For vertical tabs this is in the rotated (horizontal)
    /// coordinate space, origin at the tab's top-left.
    pub text: Rect,
    /// Icon area, when an icon is reserved.
    pub icon: Option<Rect>,
}

/// Compute the icon/text split for a tab draw request.
///
/// Returns `None` when the payload is not a tab.
pub fn tab_layout(request: &DrawRequest) -> Option<TabLayout> {
    let opt = match request.payload {
        Payload::Tab(opt) => opt,
        _ => return None,
    };
    let vertical = opt.shape.is_vertical();
    let mut tr = if vertical {
        transposed(request.rect)
    } else {
        request.rect
    };

    let mut vshift = VERTICAL_SHIFT;
    if matches!(opt.shape, TabShape::RoundedSouth | TabShape::TriangularSouth) {
        vshift = -vshift;
    }
    tr.x0 += H_PADDING;
    tr.y0 += vshift - V_PADDING;
    tr.x1 += HORIZONTAL_SHIFT - H_PADDING;
    tr.y1 += V_PADDING;

    if request.state.contains(StateFlags::SELECTED) {
        tr.y0 -= vshift;
        tr.x1 -= HORIZONTAL_SHIFT;
    }

    let side = |size: Size| if vertical { size.height } else { size.width };
    if let Some(size) = opt.left_button_size {
        tr.x0 += BUTTON_GAP + side(size);
    }
    if let Some(size) = opt.right_button_size {
        tr.x1 -= BUTTON_GAP + side(size);
    }

    let mut icon_rect = None;
    if let Some(requested) = opt.icon_size {
        // Cap at the widget's configured icon size (small icons when the
        // host gives none).
        let cap = request
            .widget
            .and_then(|w| w.icon_size())
            .unwrap_or(Size::new(SMALL_ICON, SMALL_ICON));
        let icon = Size::new(
            requested.width.min(cap.width),
            requested.height.min(cap.height),
        );
        let cy = (tr.y0 + tr.y1) / 2.0;
        let mut r = Rect::new(
            tr.x0,
            cy - icon.height / 2.0,
            tr.x0 + icon.width,
            cy + icon.height / 2.0,
        );
        if !vertical {
            r = visual_rect(request.direction, request.rect, r);
        }
        icon_rect = Some(r);
        tr.x0 += icon.width + ICON_GAP;
    }

    if !vertical {
        tr = visual_rect(request.direction, request.rect, tr);
    }

    Some(TabLayout {
        text: tr,
        icon: icon_rect,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::palette::Palette;
    use crate::request::{TabOpt, WidgetRef};

    fn request<'a>(palette: &'a Palette, opt: TabOpt<'a>, selected: bool) -> DrawRequest<'a> {
        let mut r = DrawRequest::new(Rect::new(0.0, 0.0, 120.0, 30.0), palette);
        if selected {
            r.state |= StateFlags::SELECTED;
        }
        r.payload = Payload::Tab(opt);
        r
    }

    #[test]
    fn text_is_inset_by_padding() {
        let palette = Palette::standard();
        let r = request(&palette, TabOpt::default(), false);
        let layout = tab_layout(&r).unwrap();
        assert_eq!(layout.text.x0, H_PADDING);
        assert_eq!(layout.text.x1, 120.0 - H_PADDING);
        assert!(layout.icon.is_none());
    }

    #[test]
    fn selected_tab_drops_the_shift() {
        let palette = Palette::standard();
        let unselected = tab_layout(&request(&palette, TabOpt::default(), false)).unwrap();
        let selected = tab_layout(&request(&palette, TabOpt::default(), true)).unwrap();
        assert_eq!(unselected.text.y0 - selected.text.y0, VERTICAL_SHIFT);
    }

    #[test]
    fn icon_reserves_leading_space() {
        let palette = Palette::standard();
        let opt = TabOpt {
            icon_size: Some(Size::new(16.0, 16.0)),
            ..TabOpt::default()
        };
        let layout = tab_layout(&request(&palette, opt, false)).unwrap();
        let icon = layout.icon.unwrap();
        assert_eq!(icon.width(), 16.0);
        assert_eq!(layout.text.x0, icon.x1 + ICON_GAP);
    }

    #[test]
    fn oversized_icon_is_capped_to_small() {
        let palette = Palette::standard();
        let opt = TabOpt {
            icon_size: Some(Size::new(32.0, 32.0)),
            ..TabOpt::default()
        };
        let layout = tab_layout(&request(&palette, opt, false)).unwrap();
        assert_eq!(layout.icon.unwrap().width(), SMALL_ICON);
    }

    #[test]
    fn widget_icon_size_raises_the_cap() {
        struct LargeIcons;
        impl WidgetRef for LargeIcons {
            fn icon_size(&self) -> Option<Size> {
                Some(Size::new(24.0, 24.0))
            }
        }
        let palette = Palette::standard();
        let opt = TabOpt {
            icon_size: Some(Size::new(32.0, 32.0)),
            ..TabOpt::default()
        };
        let widget = LargeIcons;
        let mut r = request(&palette, opt, false);
        r.widget = Some(&widget);
        let layout = tab_layout(&r).unwrap();
        assert_eq!(layout.icon.unwrap().width(), 24.0);
    }

    #[test]
    fn vertical_tabs_compute_in_transposed_space() {
        let palette = Palette::standard();
        let opt = TabOpt {
            shape: TabShape::RoundedWest,
            ..TabOpt::default()
        };
        let mut r = request(&palette, opt, false);
        r.rect = Rect::new(0.0, 0.0, 30.0, 120.0);
        let layout = tab_layout(&r).unwrap();
        // Transposed: spans the long axis of the tab.
        assert!(layout.text.width() > layout.text.height());
    }
}
