//! Transient scrollbar slider painting.

use super::{rounded, DrawOutcome};
use crate::config::StyleConfig;
use crate::geometry::adjusted;
use crate::request::{DrawRequest, Payload, StateFlags};
use crate::surface::Painter;

const OPACITY_IDLE: f64 = 0.2;
const OPACITY_HOVER: f64 = 0.7;

/// Overlay slider pill. Opacity is binary: faint while idle, solid while
/// the pointer is over the bar; the host re-renders on hover changes.
pub fn slider(
    _config: &StyleConfig,
    request: &DrawRequest,
    painter: &mut Painter,
) -> DrawOutcome {
    if !matches!(request.payload, Payload::Slider(_)) {
        return DrawOutcome::Delegate;
    }
    let horizontal = request.state.contains(StateFlags::HORIZONTAL);
    let hovered = request.state.contains(StateFlags::ACTIVE)
        && request.enabled()
        && request.state.contains(StateFlags::MOUSE_OVER);
    let opacity = if hovered { OPACITY_HOVER } else { OPACITY_IDLE };

    // The pill swells toward the viewport edge as it becomes opaque.
    let rect = if horizontal {
        adjusted(request.rect, -1.0, 4.0, 0.0, -4.0)
    } else {
        adjusted(request.rect, 4.0, -1.0, -4.0, 0.0)
    };
    let handle = if horizontal {
        let r = adjusted(rect, 0.0, 6.0, 0.0, 2.0);
        adjusted(r, 3.0, -6.0 * opacity, -6.0, -2.0 * opacity)
    } else {
        let r = adjusted(rect, 6.0, 0.0, 2.0, 0.0);
        adjusted(r, -6.0 * opacity, 2.0, -2.0 * opacity, -4.0)
    };
    if handle.width() <= 0.0 || handle.height() <= 0.0 {
        return DrawOutcome::Handled;
    }

    let radius = 0.5 * handle.width().min(handle.height());
    painter.scoped(|p| {
        p.apply_opacity(opacity as f32);
        p.fill(&rounded(handle, radius), request.palette.window_text);
    });
    DrawOutcome::Handled
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::palette::Palette;
    use crate::request::SliderOpt;
    use crate::surface::record::{Op, Recorder};
    use vello::kurbo::Rect;

    fn paint(request: &DrawRequest) -> Recorder {
        let config = StyleConfig::default();
        let mut rec = Recorder::default();
        {
            let mut painter = Painter::new(&mut rec);
            slider(&config, request, &mut painter);
            assert_eq!(painter.save_depth(), 0);
        }
        rec
    }

    fn request<'a>(palette: &'a Palette, hovered: bool) -> DrawRequest<'a> {
        let mut r = DrawRequest::new(Rect::new(0.0, 40.0, 14.0, 120.0), palette);
        r.payload = Payload::Slider(SliderOpt::default());
        if hovered {
            r.state |= StateFlags::ACTIVE | StateFlags::MOUSE_OVER;
        }
        r
    }

    #[test]
    fn hover_raises_opacity() {
        let palette = Palette::standard();
        let idle = paint(&request(&palette, false));
        let hover = paint(&request(&palette, true));
        let alpha = |rec: &Recorder| match rec.ops[0] {
            Op::Fill {
                color: Some(c), ..
            } => c.to_rgba8().a,
            _ => panic!("expected fill"),
        };
        assert!(alpha(&hover) > alpha(&idle));
    }

    #[test]
    fn mismatched_payload_delegates() {
        let palette = Palette::standard();
        let r = DrawRequest::new(Rect::new(0.0, 0.0, 14.0, 100.0), &palette);
        let config = StyleConfig::default();
        let mut rec = Recorder::default();
        let mut painter = Painter::new(&mut rec);
        assert_eq!(slider(&config, &r, &mut painter), DrawOutcome::Delegate);
        assert!(rec.ops.is_empty());
    }
}
