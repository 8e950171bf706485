//! Progress bar painting.
//!
//! Vertical bars rotate the painter 90 degrees and reuse the horizontal
//! code path. The indeterminate animation is driven by the host through
//! the payload's `animation_step`; this code is pure per-frame.

use std::f64::consts::FRAC_PI_2;

use vello::kurbo::{Affine, Line, Point, Rect, Vec2};
use vello::peniko::Color;

use super::{rounded, vertical_gradient, DrawOutcome};
use crate::config::StyleConfig;
use crate::geometry::adjusted;
use crate::palette::{darker, gray_value, lighter, top_shadow, with_alpha8};
use crate::request::{DrawRequest, Payload, ProgressOpt};
use crate::surface::Painter;

/// Stripe spacing of the indeterminate animation, in pixels.
pub const STRIPE_PERIOD: f64 = 22.0;

/// Sunken groove behind the fill.
pub fn groove(
    _config: &StyleConfig,
    request: &DrawRequest,
    painter: &mut Painter,
) -> DrawOutcome {
    let rect = request.rect;
    painter.scoped(|p| {
        p.stroke(
            &Line::new((rect.x0, rect.y0 - 1.0), (rect.x1, rect.y0 - 1.0)),
            Color::from_rgba8(0, 0, 0, 16),
            1.0,
        );
        let r = Rect::new(rect.x0, rect.y0, rect.x1 - 1.0, rect.y1 - 1.0);
        p.fill(&rounded(r, 2.0), request.palette.base);
        p.stroke(&rounded(r, 2.0), request.palette.outline(), 1.0);
        p.stroke(
            &Line::new((rect.x0 + 1.0, rect.y0 + 1.0), (rect.x1 - 1.0, rect.y0 + 1.0)),
            top_shadow(),
            1.0,
        );
    });
    DrawOutcome::Handled
}

/// Determinate fill or indeterminate marching stripes.
pub fn contents(
    _config: &StyleConfig,
    request: &DrawRequest,
    painter: &mut Painter,
) -> DrawOutcome {
    let opt = match request.payload {
        Payload::Progress(opt) => opt,
        _ => return DrawOutcome::Delegate,
    };
    let palette = request.palette;
    let indeterminate = opt.is_indeterminate();
    let complete = !indeterminate && opt.progress >= opt.maximum;

    painter.scoped(|p| {
        let mut rect = request.rect;
        if opt.vertical {
            // Rotate clockwise and continue as if horizontal.
            rect = Rect::new(rect.x0, rect.y0, rect.x0 + rect.height(), rect.y0 + rect.width());
            p.apply_transform(
                Affine::translate((rect.height() - 1.0, -1.0)) * Affine::rotate(FRAC_PI_2),
            );
        }

        let track = rect.width();
        let total_steps = (opt.maximum - opt.minimum).max(1) as f64;
        let progress_steps = (opt.progress.max(opt.minimum) - opt.minimum) as f64;
        let width = if indeterminate {
            track
        } else {
            progress_steps * track / total_steps
        };

        let mut reverse = (!opt.vertical && request.right_to_left()) || opt.vertical;
        if opt.inverted {
            reverse = !reverse;
        }

        let bar = if indeterminate {
            Rect::new(rect.x0, rect.y0, rect.x1 - 1.0, rect.y1 - 1.0)
        } else if !reverse {
            Rect::new(rect.x0, rect.y0, rect.x0 + width - 1.0, rect.y1 - 1.0)
        } else {
            Rect::new(rect.x1 - width - 1.0, rect.y0, rect.x1 + 1.0, rect.y1 - 1.0)
        };

        let highlight = palette.highlight;
        let mut outline = palette.outline();
        let highlighted_outline = darker(highlight, 140);
        if gray_value(outline) > gray_value(highlighted_outline) {
            outline = highlighted_outline;
        }

        // Soft edge at the moving boundary of a partial fill.
        if !indeterminate && !complete {
            let shadow = Color::from_rgba8(0, 0, 0, 35);
            if !reverse {
                p.stroke(
                    &Line::new((bar.x1 + 2.0, bar.y0 + 1.0), (bar.x1 + 2.0, bar.y1)),
                    shadow,
                    1.0,
                );
                p.stroke(
                    &Line::new((bar.x1 + 1.0, bar.y0 + 1.0), (bar.x1 + 1.0, bar.y1)),
                    highlighted_outline,
                    1.0,
                );
            } else {
                p.stroke(
                    &Line::new((bar.x0 - 2.0, bar.y0 + 1.0), (bar.x0 - 2.0, bar.y1)),
                    shadow,
                    1.0,
                );
                p.stroke(
                    &Line::new((bar.x0 - 1.0, bar.y0 + 1.0), (bar.x0 - 1.0, bar.y1)),
                    highlighted_outline,
                    1.0,
                );
            }
        }

        if indeterminate || opt.progress > opt.minimum {
            let start = lighter(highlight, 120);

            p.scoped(|p| {
                if !complete && !indeterminate {
                    p.push_clip(&adjusted(bar, -1.0, -1.0, -1.0, 1.0));
                }
                let fill_rect = adjusted(
                    bar,
                    if !indeterminate && !complete && reverse { -2.0 } else { 0.0 },
                    0.0,
                    if indeterminate || complete || reverse { 0.0 } else { 2.0 },
                    0.0,
                );
                p.fill_brush(
                    &rounded(fill_rect, 2.0),
                    &vertical_gradient(rect, [(0.0, start), (1.0, highlight)]),
                );
                p.stroke(&rounded(fill_rect, 2.0), outline, 1.0);
            });

            p.stroke(
                &rounded(adjusted(bar, 1.0, 1.0, -1.0, -1.0), 1.0),
                Color::from_rgba8(255, 255, 255, 50),
                1.0,
            );

            if indeterminate {
                stripes(p, rect, bar, start, opt);
            }
        }
    });
    DrawOutcome::Handled
}

fn stripes(p: &mut Painter, rect: Rect, bar: Rect, color: Color, opt: ProgressOpt) {
    let step = (opt.animation_step as f64) % STRIPE_PERIOD;
    p.scoped(|p| {
        p.push_clip(&adjusted(bar, 1.0, 1.0, -1.0, -1.0));
        let pen = with_alpha8(color, 120);
        let mut x = bar.x0 - rect.height();
        while x < rect.x1 {
            p.stroke(
                &Line::new((x + step, bar.y1 + 1.0), (x + rect.height() + step, bar.y0 - 2.0)),
                pen,
                9.0,
            );
            x += STRIPE_PERIOD;
        }
    });
}

/// Text overlay with the color swap at the fill boundary.
///
/// The label is drawn twice with complementary clips so the part over the
/// fill uses the highlighted text color.
pub fn label(
    _config: &StyleConfig,
    request: &DrawRequest,
    painter: &mut Painter,
) -> DrawOutcome {
    let opt = match request.payload {
        Payload::Progress(opt) => opt,
        _ => return DrawOutcome::Delegate,
    };
    let text = match opt.text {
        Some(text) if !text.is_empty() => text,
        _ => return DrawOutcome::Handled,
    };
    let palette = request.palette;

    let mut rect = request.rect;
    if opt.vertical {
        rect = Rect::new(rect.x0, rect.y0, rect.x0 + rect.height(), rect.y0 + rect.width());
    }
    let total_steps = (opt.maximum - opt.minimum).max(1) as f64;
    let progress_steps = (opt.progress - opt.minimum) as f64;
    let pos = (progress_steps * rect.width() / total_steps).clamp(0.0, rect.width());

    let mut left = Rect::new(rect.x0, rect.y0, rect.x0 + pos, rect.y1);
    if opt.vertical {
        left = left + Vec2::new(rect.width() - pos, 0.0);
    }
    let flip = !opt.vertical && (request.right_to_left() != opt.inverted);
    let (over_fill, over_base) = if flip {
        (palette.text, palette.highlighted_text)
    } else {
        (palette.highlighted_text, palette.text)
    };

    let origin = Point::new((rect.x0 + rect.x1) / 2.0, (rect.y0 + rect.y1) / 2.0);
    let size = rect.height() * 0.6;

    painter.scoped(|p| {
        p.scoped(|p| {
            let right = Rect::new(left.x1, rect.y0, rect.x1, rect.y1);
            p.push_clip(&right);
            p.draw_text(origin, text, size, over_base);
        });
        if left.width() > 0.0 {
            p.scoped(|p| {
                p.push_clip(&left);
                p.draw_text(origin, text, size, over_fill);
            });
        }
    });
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
        {
            let mut painter = Painter::new(&mut rec);
            f(&config, request, &mut painter);
            assert_eq!(painter.save_depth(), 0);
            assert_eq!(painter.layer_depth(), 0);
        }
        rec
    }

    fn progress_request<'a>(palette: &'a Palette, opt: ProgressOpt<'a>) -> DrawRequest<'a> {
        let mut r = DrawRequest::new(Rect::new(0.0, 0.0, 200.0, 20.0), palette);
        r.payload = Payload::Progress(opt);
        r
    }

    #[test]
    fn determinate_width_is_proportional() {
        let palette = Palette::standard();
        let half = paint(
            &progress_request(
                &palette,
                ProgressOpt {
                    minimum: 0,
                    maximum: 100,
                    progress: 50,
                    ..ProgressOpt::default()
                },
            ),
            contents,
        );
        let fill = half
            .ops
            .iter()
            .find_map(|op| match op {
                Op::Fill { bounds, .. } => Some(*bounds),
                _ => None,
            })
            .unwrap();
        assert!((fill.width() - 101.0).abs() <= 2.5);
    }

    #[test]
    fn degenerate_range_does_not_divide_by_zero() {
        let palette = Palette::standard();
        // minimum == maximum != 0: not indeterminate, zero progress span.
        let rec = paint(
            &progress_request(
                &palette,
                ProgressOpt {
                    minimum: 5,
                    maximum: 5,
                    progress: 5,
                    ..ProgressOpt::default()
                },
            ),
            contents,
        );
        for op in &rec.ops {
            if let Op::Fill { bounds, .. } = op {
                assert!(bounds.width().is_finite());
            }
        }
    }

    #[test]
    fn stripes_repeat_with_the_period() {
        let palette = Palette::standard();
        let at = |step: u32| {
            let rec = paint(
                &progress_request(
                    &palette,
                    ProgressOpt {
                        minimum: 0,
                        maximum: 0,
                        animation_step: step,
                        ..ProgressOpt::default()
                    },
                ),
                contents,
            );
            rec.ops
                .iter()
                .filter_map(|op| match op {
                    Op::Stroke { width, bounds, .. } if *width == 9.0 => Some(*bounds),
                    _ => None,
                })
                .collect::<Vec<_>>()
        };
        assert_eq!(at(0), at(22));
        assert_ne!(at(0), at(11));
    }

    #[test]
    fn label_draws_two_clipped_passes() {
        let palette = Palette::standard();
        let rec = paint(
            &progress_request(
                &palette,
                ProgressOpt {
                    minimum: 0,
                    maximum: 100,
                    progress: 50,
                    text: Some("50%"),
                    ..ProgressOpt::default()
                },
            ),
            label,
        );
        let texts = rec
            .ops
            .iter()
            .filter(|op| matches!(op, Op::Text { .. }))
            .count();
        assert_eq!(texts, 2);
        assert_eq!(rec.open_layers(), 0);
    }

    #[test]
    fn vertical_label_swaps_at_the_fill_boundary() {
        let palette = Palette::standard();
        let mut r = DrawRequest::new(Rect::new(0.0, 0.0, 20.0, 200.0), &palette);
        r.payload = Payload::Progress(ProgressOpt {
            minimum: 0,
            maximum: 100,
            progress: 50,
            vertical: true,
            text: Some("50%"),
            ..ProgressOpt::default()
        });
        let rec = paint(&r, label);
        let texts = rec
            .ops
            .iter()
            .filter(|op| matches!(op, Op::Text { .. }))
            .count();
        assert_eq!(texts, 2);
        assert_eq!(rec.open_layers(), 0);
    }

    #[test]
    fn empty_label_is_a_no_op() {
        let palette = Palette::standard();
        let rec = paint(
            &progress_request(&palette, ProgressOpt::default()),
            label,
        );
        assert!(rec.ops.is_empty());
    }
}
