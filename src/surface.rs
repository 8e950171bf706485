//! # Paint Surface Abstraction
//!
//! Backend abstraction the painting code draws through, plus the [Painter]
//! wrapper that scopes transform, opacity and clip-layer state so paint
//! routines always leave the surface the way they found it.
//!
//! ## Overview
//!
//! - **[Surface]**: object-safe trait over a rendering backend
//! - **[SceneSurface]**: the production implementation for [vello::Scene]
//! - **[Painter]**: scoped save/restore, transform composition, opacity
//!
//! Methods take `&BezPath` for object-safety. Concrete shapes (Rect,
//! RoundedRect, Circle, Line) are converted with [shape_to_path].

use vello::kurbo::{Affine, BezPath, Point, Rect, Shape, Stroke};
use vello::peniko::{Brush, Color, Fill, Mix};
use vello::Scene;

/// Convert a concrete shape to a [BezPath] for the [Surface] methods.
pub fn shape_to_path(shape: &impl Shape) -> BezPath {
    shape.to_path(0.1)
}

/// A rendering backend the style paints into.
pub trait Surface {
    /// Fill a shape with the given brush.
    fn fill(&mut self, fill_rule: Fill, transform: Affine, brush: &Brush, shape: &BezPath);

    /// Stroke a shape with the given brush.
    fn stroke(&mut self, style: &Stroke, transform: Affine, brush: &Brush, shape: &BezPath);

    /// Push a clip/blend layer.
    fn push_layer(&mut self, mix: Mix, alpha: f32, transform: Affine, clip: &BezPath);

    /// Pop the most recent layer.
    fn pop_layer(&mut self);

    /// Draw a rounded rectangle with a gaussian-blurred silhouette.
    fn blurred_rounded_rect(
        &mut self,
        transform: Affine,
        rect: Rect,
        color: Color,
        radius: f64,
        std_dev: f64,
    );

    /// Draw a run of text. The style computes positions and colors; text
    /// shaping and glyph rendering belong to the host, so backends without
    /// a text pipeline may ignore this.
    fn draw_text(&mut self, transform: Affine, origin: Point, text: &str, size: f64, brush: &Brush);

    /// Access the underlying [Scene] when the backend has one, for host
    /// text pipelines that append glyph runs directly.
    fn as_scene_mut(&mut self) -> Option<&mut Scene>;
}

/// [Surface] implementation over a [vello::Scene].
pub struct SceneSurface<'a> {
    scene: &'a mut Scene,
}

impl<'a> SceneSurface<'a> {
    /// Wrap a scene.
    pub fn new(scene: &'a mut Scene) -> Self {
        Self { scene }
    }
}

impl<'a> Surface for SceneSurface<'a> {
    fn fill(&mut self, fill_rule: Fill, transform: Affine, brush: &Brush, shape: &BezPath) {
        self.scene.fill(fill_rule, transform, brush, None, shape);
    }

    fn stroke(&mut self, style: &Stroke, transform: Affine, brush: &Brush, shape: &BezPath) {
        self.scene.stroke(style, transform, brush, None, shape);
    }

    fn push_layer(&mut self, mix: Mix, alpha: f32, transform: Affine, clip: &BezPath) {
        self.scene.push_layer(mix, alpha, transform, clip);
    }

    fn pop_layer(&mut self) {
        self.scene.pop_layer();
    }

    fn blurred_rounded_rect(
        &mut self,
        transform: Affine,
        rect: Rect,
        color: Color,
        radius: f64,
        std_dev: f64,
    ) {
        self.scene
            .draw_blurred_rounded_rect(transform, rect, color, radius, std_dev);
    }

    fn draw_text(
        &mut self,
        _transform: Affine,
        _origin: Point,
        _text: &str,
        _size: f64,
        _brush: &Brush,
    ) {
        // Glyph runs are appended by the host through as_scene_mut.
    }

    fn as_scene_mut(&mut self) -> Option<&mut Scene> {
        Some(self.scene)
    }
}

#[derive(Clone, Copy)]
struct PainterState {
    transform: Affine,
    opacity: f32,
    layer_depth: usize,
}

/// Scoped painting context over a [Surface].
///
/// Tracks a current transform, a global opacity and the clip-layer depth.
/// [Painter::save]/[Painter::restore] bracket state changes; restore pops
/// any layers pushed since the matching save, so a paint routine cannot
/// leak layers or transforms no matter which exit path it takes.
pub struct Painter<'a> {
    surface: &'a mut dyn Surface,
    transform: Affine,
    opacity: f32,
    layer_depth: usize,
    saved: Vec<PainterState>,
}

impl<'a> Painter<'a> {
    /// Wrap a surface with identity transform and full opacity.
    pub fn new(surface: &'a mut dyn Surface) -> Self {
        Self {
            surface,
            transform: Affine::IDENTITY,
            opacity: 1.0,
            layer_depth: 0,
            saved: Vec::new(),
        }
    }

    /// Current transform.
    pub fn transform(&self) -> Affine {
        self.transform
    }

    /// Current global opacity.
    pub fn opacity(&self) -> f32 {
        self.opacity
    }

    /// Number of open clip layers.
    pub fn layer_depth(&self) -> usize {
        self.layer_depth
    }

    /// Number of saved states on the stack.
    pub fn save_depth(&self) -> usize {
        self.saved.len()
    }

    /// Push the current state.
    pub fn save(&mut self) {
        self.saved.push(PainterState {
            transform: self.transform,
            opacity: self.opacity,
            layer_depth: self.layer_depth,
        });
    }

    /// Pop back to the matching [save](Painter::save), closing any layers
    /// opened since. A restore without a save resets to the initial state.
    pub fn restore(&mut self) {
        let state = self.saved.pop().unwrap_or(PainterState {
            transform: Affine::IDENTITY,
            opacity: 1.0,
            layer_depth: 0,
        });
        while self.layer_depth > state.layer_depth {
            self.surface.pop_layer();
            self.layer_depth -= 1;
        }
        self.transform = state.transform;
        self.opacity = state.opacity;
    }

    /// Run `f` inside a save/restore pair.
    pub fn scoped<R>(&mut self, f: impl FnOnce(&mut Self) -> R) -> R {
        self.save();
        let out = f(self);
        self.restore();
        out
    }

    /// Compose an additional transform onto the current one.
    pub fn apply_transform(&mut self, transform: Affine) {
        self.transform *= transform;
    }

    /// Multiply the global opacity.
    pub fn apply_opacity(&mut self, opacity: f32) {
        self.opacity *= opacity.clamp(0.0, 1.0);
    }

    /// Open a clip layer; closed by the enclosing restore (or [pop_layer]).
    ///
    /// [pop_layer]: Painter::pop_layer
    pub fn push_clip(&mut self, shape: &impl Shape) {
        self.surface
            .push_layer(Mix::Clip, 1.0, self.transform, &shape_to_path(shape));
        self.layer_depth += 1;
    }

    /// Explicitly close the innermost layer.
    pub fn pop_layer(&mut self) {
        if self.layer_depth > 0 {
            self.surface.pop_layer();
            self.layer_depth -= 1;
        }
    }

    /// Fill a shape with a solid color, honoring the global opacity.
    pub fn fill(&mut self, shape: &impl Shape, color: Color) {
        let brush = Brush::Solid(self.faded(color));
        self.surface
            .fill(Fill::NonZero, self.transform, &brush, &shape_to_path(shape));
    }

    /// Fill a shape with an arbitrary brush (gradients).
    pub fn fill_brush(&mut self, shape: &impl Shape, brush: &Brush) {
        self.surface
            .fill(Fill::NonZero, self.transform, brush, &shape_to_path(shape));
    }

    /// Stroke a shape outline with a solid color.
    pub fn stroke(&mut self, shape: &impl Shape, color: Color, width: f64) {
        let brush = Brush::Solid(self.faded(color));
        self.surface.stroke(
            &Stroke::new(width),
            self.transform,
            &brush,
            &shape_to_path(shape),
        );
    }

    /// Stroke with full [Stroke] options (caps, joins).
    pub fn stroke_styled(&mut self, shape: &impl Shape, color: Color, style: &Stroke) {
        let brush = Brush::Solid(self.faded(color));
        self.surface
            .stroke(style, self.transform, &brush, &shape_to_path(shape));
    }

    /// Draw a blurred rounded rectangle silhouette.
    pub fn blurred_rounded_rect(&mut self, rect: Rect, color: Color, radius: f64, std_dev: f64) {
        self.surface
            .blurred_rounded_rect(self.transform, rect, self.faded(color), radius, std_dev);
    }

    /// Hand a text run to the backend.
    pub fn draw_text(&mut self, origin: Point, text: &str, size: f64, color: Color) {
        let brush = Brush::Solid(self.faded(color));
        self.surface
            .draw_text(self.transform, origin, text, size, &brush);
    }

    /// Access the backing scene, when there is one.
    pub fn as_scene_mut(&mut self) -> Option<&mut Scene> {
        self.surface.as_scene_mut()
    }

    fn faded(&self, color: Color) -> Color {
        if self.opacity >= 1.0 {
            return color;
        }
        let c = color.to_rgba8();
        let a = (c.a as f32 * self.opacity).round().clamp(0.0, 255.0) as u8;
        Color::from_rgba8(c.r, c.g, c.b, a)
    }
}
