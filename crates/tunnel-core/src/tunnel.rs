//! Per-frame perspective projection of the shape sequence.
//!
//! Each slot `i` sits at `z = i * spacing - z_offset`. Its on-screen size is
//! `base_shape_width * perspective_scale * camera_zoom` where
//! `perspective_scale = d / (d + z)`. Slots at or behind the camera plane
//! (scale <= 0) are culled.

use crate::config::{LineStyle, TunnelConfig};
use crate::error::Result;
use crate::sequence::ShapeSequence;
use crate::shapes::{CircleDef, PathGeometry, ShapeCatalog, ShapeDefinition, ShapeKind};
use glam::Vec2;

/// Drawable area in screen units. The tunnel is centred on it.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Viewport {
    pub width: f32,
    pub height: f32,
}

impl Viewport {
    pub fn new(width: f32, height: f32) -> Self {
        Self {
            width: width.max(0.0),
            height: height.max(0.0),
        }
    }

    pub fn center(&self) -> Vec2 {
        Vec2::new(self.width * 0.5, self.height * 0.5)
    }
}

/// Uniform design-space to screen mapping: `translate + (p - anchor) * scale`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DrawTransform {
    pub translate: Vec2,
    pub scale: f32,
    pub anchor: Vec2,
}

impl DrawTransform {
    #[inline]
    pub fn apply(&self, p: Vec2) -> Vec2 {
        self.translate + (p - self.anchor) * self.scale
    }

    /// Canvas-style `[a, b, c, d, e, f]` matrix.
    pub fn matrix(&self) -> [f64; 6] {
        let s = self.scale as f64;
        [
            s,
            0.0,
            0.0,
            s,
            self.translate.x as f64 - self.anchor.x as f64 * s,
            self.translate.y as f64 - self.anchor.y as f64 * s,
        ]
    }

    pub fn to_affine(&self) -> kurbo::Affine {
        kurbo::Affine::new(self.matrix())
    }
}

/// Stroke colour and width. `width` is in design-space units and is scaled
/// together with the geometry.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct StrokeStyle {
    pub rgb: [u8; 3],
    pub alpha: u8,
    pub width: f32,
}

impl StrokeStyle {
    pub fn css_color(&self) -> String {
        format!(
            "rgba({}, {}, {}, {})",
            self.rgb[0],
            self.rgb[1],
            self.rgb[2],
            self.alpha as f32 / 255.0
        )
    }

    pub fn rgba(&self) -> [f32; 4] {
        [
            self.rgb[0] as f32 / 255.0,
            self.rgb[1] as f32 / 255.0,
            self.rgb[2] as f32 / 255.0,
            self.alpha as f32 / 255.0,
        ]
    }

    /// Width after the transform's scale is applied.
    pub fn screen_width(&self, transform: &DrawTransform) -> f32 {
        self.width * transform.scale
    }
}

/// Rendering collaborator: strokes paths and circles, never fills.
pub trait StrokeSurface {
    fn stroke_paths(
        &mut self,
        paths: &[PathGeometry],
        transform: &DrawTransform,
        style: &StrokeStyle,
    ) -> Result<()>;

    fn stroke_circles(
        &mut self,
        circles: &[CircleDef],
        transform: &DrawTransform,
        style: &StrokeStyle,
    ) -> Result<()>;
}

/// Projection of one visible slot.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SlotProjection {
    pub index: usize,
    pub kind: ShapeKind,
    pub z_pos: f64,
    pub perspective_scale: f64,
    /// Design-space to screen scale for this slot's shape.
    pub draw_scale: f32,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct FrameStats {
    pub drawn: usize,
    pub culled: usize,
    pub failed: usize,
}

#[inline]
pub fn perspective_scale(perspective_distance: f64, z_pos: f64) -> f64 {
    perspective_distance / (perspective_distance + z_pos)
}

#[derive(Clone, Debug)]
pub struct TunnelRenderer {
    spacing: f64,
    perspective_distance: f64,
    camera_zoom: f32,
    base_shape_width: f32,
    base_shape_height: f32,
    line: LineStyle,
}

impl TunnelRenderer {
    pub fn new(config: &TunnelConfig) -> Self {
        Self {
            spacing: config.spacing as f64,
            perspective_distance: config.perspective_distance as f64,
            camera_zoom: config.camera_zoom,
            base_shape_width: config.base_shape_width,
            base_shape_height: config.base_shape_height,
            line: config.line.clone(),
        }
    }

    /// Project one slot, or `None` when it is at or behind the camera.
    pub fn project_slot(
        &self,
        index: usize,
        shape: &ShapeDefinition,
        z_offset: f64,
    ) -> Option<SlotProjection> {
        let z_pos = index as f64 * self.spacing - z_offset;
        let scale = perspective_scale(self.perspective_distance, z_pos);
        if !(scale.is_finite() && scale > 0.0) {
            return None;
        }
        let on_screen_width = self.base_shape_width * scale as f32 * self.camera_zoom;
        let draw_scale = on_screen_width / shape.width;
        if !(draw_scale.is_finite() && draw_scale > 0.0) {
            return None;
        }
        Some(SlotProjection {
            index,
            kind: shape.kind,
            z_pos,
            perspective_scale: scale,
            draw_scale,
        })
    }

    /// Visible slots in sequence order.
    pub fn project<'a>(
        &'a self,
        catalog: &'a ShapeCatalog,
        sequence: &'a ShapeSequence,
        z_offset: f64,
    ) -> impl Iterator<Item = SlotProjection> + 'a {
        sequence
            .iter()
            .enumerate()
            .filter_map(move |(i, kind)| self.project_slot(i, catalog.get(kind), z_offset))
    }

    /// Stroke width compensation: thinner in design space as the shape grows,
    /// so the on-screen weight only grows with `sqrt(draw_scale)`.
    pub fn stroke_style(&self, draw_scale: f32) -> StrokeStyle {
        StrokeStyle {
            rgb: self.line.rgb,
            alpha: self.line.alpha,
            width: self.line.weight / draw_scale.sqrt(),
        }
    }

    /// Centre the shape horizontally on its own width and vertically on the
    /// shared tunnel height so both variants' common outline lines up.
    pub fn transform(
        &self,
        shape: &ShapeDefinition,
        draw_scale: f32,
        viewport: Viewport,
    ) -> DrawTransform {
        DrawTransform {
            translate: viewport.center(),
            scale: draw_scale,
            anchor: Vec2::new(
                (shape.width * 0.5).round(),
                (self.base_shape_height * 0.5).round(),
            ),
        }
    }

    pub fn render(
        &self,
        catalog: &ShapeCatalog,
        sequence: &ShapeSequence,
        z_offset: f64,
        viewport: Viewport,
        surface: &mut dyn StrokeSurface,
    ) -> FrameStats {
        let mut stats = FrameStats::default();
        for (i, kind) in sequence.iter().enumerate() {
            let shape = catalog.get(kind);
            let Some(slot) = self.project_slot(i, shape, z_offset) else {
                stats.culled += 1;
                continue;
            };
            if shape.is_empty() {
                continue;
            }
            let transform = self.transform(shape, slot.draw_scale, viewport);
            let style = self.stroke_style(slot.draw_scale);
            let result = surface
                .stroke_paths(&shape.outlines, &transform, &style)
                .and_then(|_| surface.stroke_circles(shape.circles, &transform, &style));
            match result {
                Ok(()) => stats.drawn += 1,
                Err(e) => {
                    stats.failed += 1;
                    log::debug!("[tunnel] slot {i} ({}) not drawn: {e}", kind.name());
                }
            }
        }
        stats
    }
}
