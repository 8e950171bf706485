//! Title bar sub-control geometry.
//!
//! Window buttons are fixed squares laid out right-to-left from the window
//! edge. Each button's offset is the accumulated width of every present
//! button at or after its slot in the declared order, so absent buttons
//! leave no gap.

use vello::kurbo::Rect;

use super::visual_rect;
use crate::request::{Payload, SubControl, SubControlQuery, TitleBarFlags, TitleBarOpt};

const INDENT: f64 = 3.0;
const TOP_MARGIN: f64 = 3.0;
const BOTTOM_MARGIN: f64 = 3.0;
const WIDTH_MARGIN: f64 = 2.0;

// Right-to-left slot order; the last entry is the outermost button.
const CHAIN: [SubControl; 7] = [
    SubControl::TitleBarContextHelpButton,
    SubControl::TitleBarMinButton,
    SubControl::TitleBarNormalButton,
    SubControl::TitleBarMaxButton,
    SubControl::TitleBarShadeButton,
    SubControl::TitleBarUnshadeButton,
    SubControl::TitleBarCloseButton,
];

fn present(sub: SubControl, opt: &TitleBarOpt) -> bool {
    let flags = opt.flags;
    match sub {
        SubControl::TitleBarContextHelpButton => flags.contains(TitleBarFlags::CONTEXT_HELP),
        SubControl::TitleBarMinButton => {
            !opt.minimized && flags.contains(TitleBarFlags::MINIMIZE)
        }
        SubControl::TitleBarNormalButton => {
            (opt.minimized && flags.contains(TitleBarFlags::MINIMIZE))
                || (opt.maximized && flags.contains(TitleBarFlags::MAXIMIZE))
        }
        SubControl::TitleBarMaxButton => {
            !opt.maximized && flags.contains(TitleBarFlags::MAXIMIZE)
        }
        SubControl::TitleBarShadeButton => {
            !opt.minimized && flags.contains(TitleBarFlags::SHADE)
        }
        SubControl::TitleBarUnshadeButton => {
            opt.minimized && flags.contains(TitleBarFlags::SHADE)
        }
        SubControl::TitleBarCloseButton => flags.contains(TitleBarFlags::SYS_MENU),
        _ => false,
    }
}

/// Resolve one title bar sub-control rect.
pub fn sub_control_rect(query: &SubControlQuery, sub: SubControl) -> Option<Rect> {
    let opt = match query.payload {
        Payload::TitleBar(opt) => opt,
        _ => return None,
    };
    let rect = query.rect;
    let control_height = rect.height() - TOP_MARGIN - BOTTOM_MARGIN;
    let delta = control_height + WIDTH_MARGIN;

    let logical = match sub {
        SubControl::TitleBarLabel => {
            if !opt
                .flags
                .intersects(TitleBarFlags::TITLE | TitleBarFlags::SYS_MENU)
            {
                return None;
            }
            let mut r = rect;
            if opt.flags.contains(TitleBarFlags::SYS_MENU) {
                r.x0 += delta;
                r.x1 -= delta;
            }
            for flag in [
                TitleBarFlags::MINIMIZE,
                TitleBarFlags::MAXIMIZE,
                TitleBarFlags::SHADE,
                TitleBarFlags::CONTEXT_HELP,
            ] {
                if opt.flags.contains(flag) {
                    r.x1 -= delta;
                }
            }
            r
        }
        SubControl::TitleBarSysMenu => {
            if !opt.flags.contains(TitleBarFlags::SYS_MENU) {
                return None;
            }
            Rect::new(
                rect.x0 + WIDTH_MARGIN + INDENT,
                rect.y0 + TOP_MARGIN,
                rect.x0 + WIDTH_MARGIN + INDENT + control_height,
                rect.y0 + TOP_MARGIN + control_height,
            )
        }
        _ => {
            let slot = CHAIN.iter().position(|&s| s == sub)?;
            if !present(sub, &opt) {
                return None;
            }
            let offset: f64 = CHAIN[slot..]
                .iter()
                .filter(|&&s| present(s, &opt))
                .map(|_| delta)
                .sum();
            Rect::new(
                rect.x1 - INDENT - offset,
                rect.y0 + TOP_MARGIN,
                rect.x1 - INDENT - offset + control_height,
                rect.y0 + TOP_MARGIN + control_height,
            )
        }
    };
    Some(visual_rect(query.direction, rect, logical))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::palette::Palette;

    fn query(palette: &Palette, opt: TitleBarOpt) -> SubControlQuery<'_> {
        let mut q = SubControlQuery::new(Rect::new(0.0, 0.0, 300.0, 24.0), palette);
        q.payload = Payload::TitleBar(opt);
        q
    }

    #[test]
    fn close_is_outermost() {
        let palette = Palette::standard();
        let opt = TitleBarOpt {
            flags: TitleBarFlags::SYS_MENU | TitleBarFlags::MINIMIZE | TitleBarFlags::MAXIMIZE,
            ..TitleBarOpt::default()
        };
        let q = query(&palette, opt);
        let close = sub_control_rect(&q, SubControl::TitleBarCloseButton).unwrap();
        let max = sub_control_rect(&q, SubControl::TitleBarMaxButton).unwrap();
        let min = sub_control_rect(&q, SubControl::TitleBarMinButton).unwrap();
        assert!(close.x0 > max.x0);
        assert!(max.x0 > min.x0);
        assert_eq!(close.width(), 24.0 - TOP_MARGIN - BOTTOM_MARGIN);
    }

    #[test]
    fn absent_buttons_leave_no_gap() {
        let palette = Palette::standard();
        let with_max = query(
            &palette,
            TitleBarOpt {
                flags: TitleBarFlags::SYS_MENU | TitleBarFlags::MINIMIZE | TitleBarFlags::MAXIMIZE,
                ..TitleBarOpt::default()
            },
        );
        let without_max = query(
            &palette,
            TitleBarOpt {
                flags: TitleBarFlags::SYS_MENU | TitleBarFlags::MINIMIZE,
                ..TitleBarOpt::default()
            },
        );
        let a = sub_control_rect(&with_max, SubControl::TitleBarMinButton).unwrap();
        let b = sub_control_rect(&without_max, SubControl::TitleBarMinButton).unwrap();
        let delta = (24.0 - TOP_MARGIN - BOTTOM_MARGIN) + WIDTH_MARGIN;
        assert_eq!(b.x0 - a.x0, delta);
    }

    #[test]
    fn maximized_swaps_max_for_normal() {
        let palette = Palette::standard();
        let opt = TitleBarOpt {
            flags: TitleBarFlags::SYS_MENU | TitleBarFlags::MAXIMIZE,
            maximized: true,
            ..TitleBarOpt::default()
        };
        let q = query(&palette, opt);
        assert!(sub_control_rect(&q, SubControl::TitleBarMaxButton).is_none());
        assert!(sub_control_rect(&q, SubControl::TitleBarNormalButton).is_some());
    }

    #[test]
    fn label_shrinks_per_button() {
        let palette = Palette::standard();
        let q = query(
            &palette,
            TitleBarOpt {
                flags: TitleBarFlags::TITLE
                    | TitleBarFlags::SYS_MENU
                    | TitleBarFlags::MINIMIZE
                    | TitleBarFlags::MAXIMIZE,
                ..TitleBarOpt::default()
            },
        );
        let label = sub_control_rect(&q, SubControl::TitleBarLabel).unwrap();
        let delta = (24.0 - TOP_MARGIN - BOTTOM_MARGIN) + WIDTH_MARGIN;
        assert_eq!(label.x0, delta);
        assert_eq!(label.x1, 300.0 - 3.0 * delta);
    }
}
