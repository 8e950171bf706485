//! # Palette & Color Algebra
//!
//! Role-based color table consumed by every draw request, plus the small
//! color algebra (lighten/darken/merge) the painting code leans on.
//!
//! A [Palette] is supplied by the host per request; the style never stores
//! one. Derived colors (outlines, button tints, shadow shades) are computed
//! on demand from the roles so custom palettes restyle the whole engine.

use vello::peniko::Color;

/// Ordered role -> color mapping for one render pass.
///
/// Roles follow the usual desktop-toolkit split between `window` (chrome
/// background), `base` (content background) and `button` surfaces, with
/// matching text roles and a highlight pair for selections.
#[derive(Debug, Clone, PartialEq)]
pub struct Palette {
    /// General window background.
    pub window: Color,
    /// Text drawn on `window`.
    pub window_text: Color,
    /// Content background (text fields, item views).
    pub base: Color,
    /// Alternate row background for item views.
    pub alternate_base: Color,
    /// Text drawn on `base`.
    pub text: Color,
    /// Button face color.
    pub button: Color,
    /// Text drawn on buttons.
    pub button_text: Color,
    /// Selection/accent color.
    pub highlight: Color,
    /// Text drawn over `highlight`.
    pub highlighted_text: Color,
    /// Lightest shade for bevels.
    pub light: Color,
    /// Between `light` and `mid`.
    pub midlight: Color,
    /// Medium bevel shade.
    pub mid: Color,
    /// Dark bevel shade.
    pub dark: Color,
    /// Darkest shade, used for shadows.
    pub shadow: Color,
    /// Placeholder text in empty inputs.
    pub placeholder_text: Color,
    /// Text color when disabled.
    pub disabled_text: Color,
    /// Highlight color when disabled.
    pub disabled_highlight: Color,
}

impl Palette {
    /// The built-in light palette.
    pub fn standard() -> Self {
        let background = Color::from_rgb8(255, 255, 255);
        let light = lighter(background, 150);
        let mid = darker(background, 130);
        let midlight = lighter(mid, 110);
        let base = Color::WHITE;
        let dark = darker(background, 150);
        let shadow = darker(dark, 135);
        let mut placeholder = Color::BLACK;
        placeholder = with_alpha8(placeholder, 128);

        Self {
            window: base,
            window_text: Color::BLACK,
            base,
            alternate_base: darker(base, 106),
            text: Color::BLACK,
            button: background,
            button_text: Color::BLACK,
            highlight: Color::from_rgb8(84, 156, 255),
            highlighted_text: Color::WHITE,
            light,
            midlight,
            mid,
            dark,
            shadow,
            placeholder_text: placeholder,
            disabled_text: Color::from_rgb8(190, 190, 190),
            disabled_highlight: Color::from_rgb8(145, 145, 145),
        }
    }

    /// Frame/outline color derived from the window color.
    pub fn outline(&self) -> Color {
        darker(self.window, 140)
    }

    /// Outline color for focused controls, capped so it never washes out.
    pub fn highlighted_outline(&self) -> Color {
        let mut c = darker(self.highlight, 125);
        let (h, s, v) = rgb_to_hsv(c);
        if v > 160 {
            c = hsv_to_rgb(h, s, 160, alpha8(c));
        }
        c
    }

    /// Button face tint: desaturated and brightened toward a neutral face.
    pub fn button_color(&self) -> Color {
        let val = gray_value(self.button);
        let c = lighter(self.button, 100 + (180 - val as i32).max(1) as u32 / 6);
        let (h, s, v) = rgb_to_hsv(c);
        hsv_to_rgb(h, (s as f32 * 0.75) as i32, v, alpha8(c))
    }

    /// Background tint behind tab frames.
    pub fn tab_frame_color(&self) -> Color {
        lighter(self.button_color(), 104)
    }
}

impl Default for Palette {
    fn default() -> Self {
        Self::standard()
    }
}

/// Translucent white used for grip highlights.
pub fn light_shade() -> Color {
    Color::from_rgba8(255, 255, 255, 90)
}

/// Translucent black used for grip shadows.
pub fn dark_shade() -> Color {
    Color::from_rgba8(0, 0, 0, 60)
}

/// Faint shadow line under top edges.
pub fn top_shadow() -> Color {
    Color::from_rgba8(0, 0, 0, 18)
}

/// Faint white line drawn inside outlines for contrast.
pub fn inner_contrast_line() -> Color {
    Color::from_rgba8(255, 255, 255, 30)
}

/// Replace the alpha channel of a color (0..=255).
pub fn with_alpha8(color: Color, alpha: u8) -> Color {
    let c = color.to_rgba8();
    Color::from_rgba8(c.r, c.g, c.b, alpha)
}

fn alpha8(color: Color) -> u8 {
    color.to_rgba8().a
}

/// Perceptual gray value (0..=255) of a color.
pub fn gray_value(color: Color) -> u8 {
    let c = color.to_rgba8();
    ((c.r as u32 * 11 + c.g as u32 * 16 + c.b as u32 * 5) / 32) as u8
}

/// Blend two colors; `factor` is the percentage of `a` in the result.
pub fn merged(a: Color, b: Color, factor: u32) -> Color {
    let max = 100;
    let factor = factor.min(max);
    let ca = a.to_rgba8();
    let cb = b.to_rgba8();
    let mix = |x: u8, y: u8| -> u8 {
        ((x as u32 * factor) / max + (y as u32 * (max - factor)) / max) as u8
    };
    Color::from_rgba8(mix(ca.r, cb.r), mix(ca.g, cb.g), mix(ca.b, cb.b), ca.a)
}

/// Return a lighter color; `factor` is a percentage, 150 means 50% brighter.
///
/// Factors below 100 delegate to [darker] with the reciprocal factor.
pub fn lighter(color: Color, factor: u32) -> Color {
    if factor == 0 {
        return color;
    }
    if factor < 100 {
        return darker(color, 10_000 / factor);
    }
    let (h, s, v) = rgb_to_hsv(color);
    let mut v = v * factor as i32 / 100;
    let mut s = s;
    if v > 255 {
        s -= v - 255;
        if s < 0 {
            s = 0;
        }
        v = 255;
    }
    hsv_to_rgb(h, s, v, alpha8(color))
}

/// Return a darker color; `factor` is a percentage, 200 means half as bright.
pub fn darker(color: Color, factor: u32) -> Color {
    if factor == 0 {
        return color;
    }
    if factor < 100 {
        return lighter(color, 10_000 / factor);
    }
    let (h, s, v) = rgb_to_hsv(color);
    hsv_to_rgb(h, s, v * 100 / factor as i32, alpha8(color))
}

// Hue in degrees (-1 for achromatic), saturation/value in 0..=255.
fn rgb_to_hsv(color: Color) -> (f32, i32, i32) {
    let c = color.to_rgba8();
    let (r, g, b) = (c.r as f32, c.g as f32, c.b as f32);
    let max = r.max(g).max(b);
    let min = r.min(g).min(b);
    let delta = max - min;

    let v = max as i32;
    if delta == 0.0 {
        return (-1.0, 0, v);
    }
    let s = (delta / max * 255.0) as i32;
    let h = if max == r {
        ((g - b) / delta).rem_euclid(6.0)
    } else if max == g {
        (b - r) / delta + 2.0
    } else {
        (r - g) / delta + 4.0
    } * 60.0;
    (h, s, v)
}

fn hsv_to_rgb(h: f32, s: i32, v: i32, alpha: u8) -> Color {
    let v = v.clamp(0, 255) as f32;
    let s = s.clamp(0, 255) as f32 / 255.0;
    if h < 0.0 || s == 0.0 {
        let g = v as u8;
        return Color::from_rgba8(g, g, g, alpha);
    }
    let h = h.rem_euclid(360.0) / 60.0;
    let i = h.floor();
    let f = h - i;
    let p = v * (1.0 - s);
    let q = v * (1.0 - s * f);
    let t = v * (1.0 - s * (1.0 - f));
    let (r, g, b) = match i as u32 {
        0 => (v, t, p),
        1 => (q, v, p),
        2 => (p, v, t),
        3 => (p, q, v),
        4 => (t, p, v),
        _ => (v, p, q),
    };
    Color::from_rgba8(r as u8, g as u8, b as u8, alpha)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn darker_reduces_gray_value() {
        let c = Color::from_rgb8(200, 200, 200);
        let d = darker(c, 150);
        assert!(gray_value(d) < gray_value(c));
    }

    #[test]
    fn lighter_then_darker_is_close_to_identity() {
        let c = Color::from_rgb8(120, 80, 40);
        let round = darker(lighter(c, 150), 150);
        let a = c.to_rgba8();
        let b = round.to_rgba8();
        assert!((a.r as i32 - b.r as i32).abs() <= 3);
        assert!((a.g as i32 - b.g as i32).abs() <= 3);
        assert!((a.b as i32 - b.b as i32).abs() <= 3);
    }

    #[test]
    fn merged_at_extremes_returns_inputs() {
        let a = Color::from_rgb8(10, 20, 30);
        let b = Color::from_rgb8(200, 100, 50);
        assert_eq!(merged(a, b, 100).to_rgba8().r, 10);
        assert_eq!(merged(a, b, 0).to_rgba8().g, 100);
    }

    #[test]
    fn highlighted_outline_is_capped() {
        let pal = Palette::standard();
        let (_, _, v) = rgb_to_hsv(pal.highlighted_outline());
        assert!(v <= 160);
    }

    #[test]
    fn standard_palette_roles() {
        let pal = Palette::standard();
        assert_eq!(pal.highlight.to_rgba8().r, 84);
        assert_eq!(pal.base, Color::WHITE);
        assert_eq!(pal.placeholder_text.to_rgba8().a, 128);
    }
}
