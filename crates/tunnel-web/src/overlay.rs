use crate::constants::{LABEL_TEXT_ALIGN, LABEL_TEXT_BASELINE};
use tunnel_core::{Glyph, OverlayFrame};
use wasm_bindgen::JsValue;
use web_sys as web;

fn rgba_css(rgba: [u8; 4]) -> String {
    format!(
        "rgba({}, {}, {}, {})",
        rgba[0],
        rgba[1],
        rgba[2],
        rgba[3] as f32 / 255.0
    )
}

/// Width of `label` in CSS pixels with the overlay font applied.
pub fn measure_label(ctx: &web::CanvasRenderingContext2d, font: &str, label: &str) -> f32 {
    ctx.set_font(font);
    match ctx.measure_text(label) {
        Ok(m) => m.width() as f32,
        Err(e) => {
            log::debug!("[overlay] measure_text failed: {:?}", e);
            0.0
        }
    }
}

/// Draw the timestamp and glyph on top of the tunnel. Coordinates in `frame`
/// are CSS pixels; `dpr` maps them onto the backing store.
pub fn paint(
    ctx: &web::CanvasRenderingContext2d,
    dpr: f64,
    font: &str,
    frame: &OverlayFrame,
) -> Result<(), JsValue> {
    ctx.set_transform(dpr, 0.0, 0.0, dpr, 0.0, 0.0)?;
    let color = JsValue::from_str(&rgba_css(frame.rgba));
    ctx.set_fill_style(&color);

    ctx.set_font(font);
    ctx.set_text_align(LABEL_TEXT_ALIGN);
    ctx.set_text_baseline(LABEL_TEXT_BASELINE);
    ctx.fill_text(
        &frame.label,
        frame.label_anchor.x as f64,
        frame.label_anchor.y as f64,
    )?;

    match frame.glyph {
        Glyph::Pause(bars) => {
            for bar in bars {
                let top_left = bar.center - bar.size * 0.5;
                ctx.fill_rect(
                    top_left.x as f64,
                    top_left.y as f64,
                    bar.size.x as f64,
                    bar.size.y as f64,
                );
            }
        }
        Glyph::Play([a, b, c]) => {
            ctx.begin_path();
            ctx.move_to(a.x as f64, a.y as f64);
            ctx.line_to(b.x as f64, b.y as f64);
            ctx.line_to(c.x as f64, c.y as f64);
            ctx.close_path();
            ctx.fill();
        }
    }
    Ok(())
}
