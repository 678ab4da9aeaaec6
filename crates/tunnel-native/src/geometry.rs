//! Screen-space triangle geometry for one frame.
//!
//! Outlines are transformed into screen space first and then stroked by
//! `lyon`, so the tessellation tolerance is in pixels regardless of how far
//! away a shape is.

use glam::Vec2;
use kurbo::PathEl;
use lyon::math::point;
use lyon::path::Path;
use lyon::tessellation::{
    BuffersBuilder, StrokeOptions, StrokeTessellator, StrokeVertex, VertexBuffers,
};
use tunnel_core::{
    CircleDef, DrawTransform, Glyph, OverlayFrame, PathGeometry, StrokeStyle, StrokeSurface,
    TunnelError,
};

/// Max distance in pixels between a curve and its flattened approximation.
pub const STROKE_TOLERANCE: f32 = 0.1;

#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct Vertex {
    pub pos: [f32; 2],
    pub color: [f32; 4],
}

fn to_point(transform: &DrawTransform, p: kurbo::Point) -> lyon::math::Point {
    let s = transform.apply(Vec2::new(p.x as f32, p.y as f32));
    point(s.x, s.y)
}

/// Rebuild a design-space outline as a screen-space lyon path.
pub fn screen_path(geom: &PathGeometry, transform: &DrawTransform) -> Path {
    let mut pb = Path::builder();
    let mut open = false;
    for el in geom.path.elements() {
        match *el {
            PathEl::MoveTo(p) => {
                if open {
                    pb.end(false);
                }
                pb.begin(to_point(transform, p));
                open = true;
            }
            PathEl::LineTo(p) if open => {
                pb.line_to(to_point(transform, p));
            }
            PathEl::QuadTo(c, p) if open => {
                pb.quadratic_bezier_to(to_point(transform, c), to_point(transform, p));
            }
            PathEl::CurveTo(c1, c2, p) if open => {
                pb.cubic_bezier_to(
                    to_point(transform, c1),
                    to_point(transform, c2),
                    to_point(transform, p),
                );
            }
            PathEl::ClosePath if open => {
                pb.close();
                open = false;
            }
            // segments before any MoveTo
            _ => {}
        }
    }
    if open {
        pb.end(false);
    }
    pb.build()
}

/// `StrokeSurface` that accumulates triangles for a single draw call.
pub struct GeometrySurface {
    tessellator: StrokeTessellator,
    pub buffers: VertexBuffers<Vertex, u32>,
}

impl Default for GeometrySurface {
    fn default() -> Self {
        Self::new()
    }
}

impl GeometrySurface {
    pub fn new() -> Self {
        Self {
            tessellator: StrokeTessellator::new(),
            buffers: VertexBuffers::new(),
        }
    }

    pub fn clear(&mut self) {
        self.buffers.vertices.clear();
        self.buffers.indices.clear();
    }

    pub fn is_empty(&self) -> bool {
        self.buffers.indices.is_empty()
    }

    fn options(style: &StrokeStyle, transform: &DrawTransform) -> StrokeOptions {
        StrokeOptions::tolerance(STROKE_TOLERANCE).with_line_width(style.screen_width(transform))
    }

    fn push_triangle(&mut self, pts: [Vec2; 3], color: [f32; 4]) {
        let base = self.buffers.vertices.len() as u32;
        for p in pts {
            self.buffers.vertices.push(Vertex {
                pos: p.to_array(),
                color,
            });
        }
        self.buffers.indices.extend_from_slice(&[base, base + 1, base + 2]);
    }

    /// Filled play/pause glyph. The label itself goes to the window title.
    pub fn fill_glyph(&mut self, frame: &OverlayFrame) {
        let color = frame.rgba.map(|c| c as f32 / 255.0);
        match frame.glyph {
            Glyph::Pause(bars) => {
                for bar in bars {
                    let min = bar.center - bar.size * 0.5;
                    let max = bar.center + bar.size * 0.5;
                    self.push_triangle([min, Vec2::new(max.x, min.y), max], color);
                    self.push_triangle([min, max, Vec2::new(min.x, max.y)], color);
                }
            }
            Glyph::Play(tri) => self.push_triangle(tri, color),
        }
    }
}

impl StrokeSurface for GeometrySurface {
    fn stroke_paths(
        &mut self,
        paths: &[PathGeometry],
        transform: &DrawTransform,
        style: &StrokeStyle,
    ) -> Result<(), TunnelError> {
        let options = Self::options(style, transform);
        let color = style.rgba();
        for geom in paths {
            let path = screen_path(geom, transform);
            self.tessellator
                .tessellate_path(
                    &path,
                    &options,
                    &mut BuffersBuilder::new(&mut self.buffers, |v: StrokeVertex| Vertex {
                        pos: v.position().to_array(),
                        color,
                    }),
                )
                .map_err(|e| TunnelError::surface(format!("{e:?}")))?;
        }
        Ok(())
    }

    fn stroke_circles(
        &mut self,
        circles: &[CircleDef],
        transform: &DrawTransform,
        style: &StrokeStyle,
    ) -> Result<(), TunnelError> {
        let options = Self::options(style, transform);
        let color = style.rgba();
        for c in circles {
            let center = transform.apply(Vec2::new(c.cx, c.cy));
            self.tessellator
                .tessellate_circle(
                    point(center.x, center.y),
                    c.r * transform.scale,
                    &options,
                    &mut BuffersBuilder::new(&mut self.buffers, |v: StrokeVertex| Vertex {
                        pos: v.position().to_array(),
                        color,
                    }),
                )
                .map_err(|e| TunnelError::surface(format!("{e:?}")))?;
        }
        Ok(())
    }
}
