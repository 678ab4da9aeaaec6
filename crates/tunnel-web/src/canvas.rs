use fnv::FnvHashMap;
use std::f64::consts::TAU;
use tunnel_core::{CircleDef, DrawTransform, PathGeometry, StrokeStyle, StrokeSurface, TunnelError};
use wasm_bindgen::JsValue;
use web_sys as web;

fn js_err(e: JsValue) -> TunnelError {
    TunnelError::surface(format!("{:?}", e))
}

/// Canvas 2D stroke backend. Outline strings are compiled into `Path2D`
/// objects on first use and reused every frame after that.
pub struct CanvasSurface {
    ctx: web::CanvasRenderingContext2d,
    paths: FnvHashMap<&'static str, web::Path2d>,
    dpr: f64,
}

impl CanvasSurface {
    pub fn new(ctx: web::CanvasRenderingContext2d) -> Self {
        Self {
            ctx,
            paths: FnvHashMap::default(),
            dpr: 1.0,
        }
    }

    pub fn context(&self) -> &web::CanvasRenderingContext2d {
        &self.ctx
    }

    pub fn set_device_pixel_ratio(&mut self, dpr: f64) {
        self.dpr = dpr;
    }

    /// Fill the whole backing store with `css`.
    pub fn clear(&self, css: &str, width_px: u32, height_px: u32) -> Result<(), TunnelError> {
        self.ctx.set_transform(1.0, 0.0, 0.0, 1.0, 0.0, 0.0).map_err(js_err)?;
        self.ctx.set_fill_style(&JsValue::from_str(css));
        self.ctx.fill_rect(0.0, 0.0, width_px as f64, height_px as f64);
        Ok(())
    }

    fn apply(&self, transform: &DrawTransform, style: &StrokeStyle) -> Result<(), TunnelError> {
        let [a, b, c, d, e, f] = transform.matrix().map(|v| v * self.dpr);
        self.ctx.set_transform(a, b, c, d, e, f).map_err(js_err)?;
        self.ctx.set_stroke_style(&JsValue::from_str(&style.css_color()));
        self.ctx.set_line_width(style.width as f64);
        Ok(())
    }

    fn path_for(&mut self, geom: &PathGeometry) -> Result<&web::Path2d, TunnelError> {
        if !self.paths.contains_key(geom.source) {
            let path = web::Path2d::new_with_path_string(geom.source).map_err(js_err)?;
            self.paths.insert(geom.source, path);
        }
        self.paths
            .get(geom.source)
            .ok_or_else(|| TunnelError::surface("path cache miss"))
    }
}

impl StrokeSurface for CanvasSurface {
    fn stroke_paths(
        &mut self,
        paths: &[PathGeometry],
        transform: &DrawTransform,
        style: &StrokeStyle,
    ) -> Result<(), TunnelError> {
        self.apply(transform, style)?;
        for geom in paths {
            let path = self.path_for(geom)?.clone();
            self.ctx.stroke_with_path(&path);
        }
        Ok(())
    }

    fn stroke_circles(
        &mut self,
        circles: &[CircleDef],
        transform: &DrawTransform,
        style: &StrokeStyle,
    ) -> Result<(), TunnelError> {
        self.apply(transform, style)?;
        for c in circles {
            self.ctx.begin_path();
            self.ctx
                .arc(c.cx as f64, c.cy as f64, c.r as f64, 0.0, TAU)
                .map_err(js_err)?;
            self.ctx.stroke();
        }
        Ok(())
    }
}
