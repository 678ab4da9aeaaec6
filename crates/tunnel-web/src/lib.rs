#![cfg(target_arch = "wasm32")]
use instant::Instant;
use std::cell::RefCell;
use std::rc::Rc;
use tunnel_core::{
    AudioTransport, FramePacer, SilentTransport, TunnelConfig, TunnelSession, Viewport,
    MAX_CATCH_UP_TICKS,
};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;
use web_sys as web;

mod audio;
mod canvas;
mod constants;
mod dom;
mod events;
mod frame;
mod overlay;

use constants::CANVAS_ELEMENT_ID;

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("tunnel-web starting");

    spawn_local(async move {
        if let Err(e) = init() {
            log::error!("init error: {:?}", e);
        }
    });
    Ok(())
}

/// Falls back to the silent transport when the element cannot be created.
fn build_audio(config: &TunnelConfig) -> Box<dyn AudioTransport> {
    match audio::MediaTransport::new(&config.audio_path) {
        Ok(t) => Box::new(t),
        Err(e) => {
            log::warn!("[init] {e}; continuing without sound");
            Box::new(SilentTransport)
        }
    }
}

fn init() -> anyhow::Result<()> {
    let document = dom::window_document().ok_or_else(|| anyhow::anyhow!("no document"))?;

    let canvas_el = document
        .get_element_by_id(CANVAS_ELEMENT_ID)
        .ok_or_else(|| anyhow::anyhow!("missing #{CANVAS_ELEMENT_ID}"))?;
    let canvas: web::HtmlCanvasElement = canvas_el
        .dyn_into::<web::HtmlCanvasElement>()
        .map_err(|e| anyhow::anyhow!(format!("{:?}", e)))?;

    let ctx = dom::context_2d(&canvas)?;
    let (w, h) = dom::sync_canvas_backing_size(&canvas);

    let config = TunnelConfig::default();
    let audio: frame::SharedAudio = Rc::new(RefCell::new(build_audio(&config)));
    let session = TunnelSession::new(config, Viewport::new(w, h))?;
    let font = session.overlay().css_font();
    let pacer = FramePacer::new(session.config().frame_rate, MAX_CATCH_UP_TICKS);
    let session: frame::SharedSession = Rc::new(RefCell::new(session));

    events::wire_canvas_resize(&canvas, session.clone());
    events::wire_pointerdown(&canvas, session.clone(), audio.clone());
    events::wire_global_keydown(session.clone(), audio.clone(), canvas.clone());

    let frame_ctx = Rc::new(RefCell::new(frame::FrameContext {
        session,
        audio,
        canvas,
        surface: canvas::CanvasSurface::new(ctx),
        pacer,
        font,
        last_instant: Instant::now(),
    }));
    frame::start_loop(frame_ctx);
    Ok(())
}
