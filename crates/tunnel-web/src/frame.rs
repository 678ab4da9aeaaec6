use crate::canvas::CanvasSurface;
use crate::constants::BACKGROUND_CSS;
use crate::{dom, overlay};
use instant::Instant;
use std::cell::RefCell;
use std::rc::Rc;
use tunnel_core::{AudioTransport, FramePacer, TickEvent, TunnelSession};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

pub type SharedSession = Rc<RefCell<TunnelSession>>;
pub type SharedAudio = Rc<RefCell<Box<dyn AudioTransport>>>;

pub struct FrameContext {
    pub session: SharedSession,
    pub audio: SharedAudio,
    pub canvas: web::HtmlCanvasElement,
    pub surface: CanvasSurface,
    pub pacer: FramePacer,
    pub font: String,
    pub last_instant: Instant,
}

impl FrameContext {
    pub fn frame(&mut self) {
        let now = Instant::now();
        let dt = now - self.last_instant;
        self.last_instant = now;

        let ticks = self.pacer.advance(dt);
        {
            let mut session = self.session.borrow_mut();
            let mut audio = self.audio.borrow_mut();
            for _ in 0..ticks {
                if session.step(&mut **audio) == TickEvent::Restarted {
                    log::debug!("[frame] loop restarted");
                }
            }
        }

        let dpr = dom::device_pixel_ratio();
        self.surface.set_device_pixel_ratio(dpr);
        if let Err(e) = self
            .surface
            .clear(BACKGROUND_CSS, self.canvas.width(), self.canvas.height())
        {
            log::debug!("[frame] clear failed: {e}");
        }

        let stats = self.session.borrow().render(&mut self.surface);
        if stats.failed > 0 {
            log::debug!("[frame] {} shapes failed to draw", stats.failed);
        }

        let ctx = self.surface.context().clone();
        let mut session = self.session.borrow_mut();
        let label = session.overlay_label();
        let width = overlay::measure_label(&ctx, &self.font, &label);
        let frame = session.layout_overlay(width);
        if let Err(e) = overlay::paint(&ctx, dpr, &self.font, &frame) {
            log::debug!("[frame] overlay paint failed: {:?}", e);
        }
    }
}

pub fn start_loop(frame_ctx: Rc<RefCell<FrameContext>>) {
    let tick: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
    let tick_clone = tick.clone();
    let frame_ctx_tick = frame_ctx.clone();
    *tick.borrow_mut() = Some(Closure::wrap(Box::new(move || {
        frame_ctx_tick.borrow_mut().frame();
        request_frame(&tick_clone);
    }) as Box<dyn FnMut()>));
    request_frame(&tick);
}

fn request_frame(tick: &Rc<RefCell<Option<Closure<dyn FnMut()>>>>) {
    if let (Some(w), Some(cb)) = (web::window(), tick.borrow().as_ref()) {
        _ = w.request_animation_frame(cb.as_ref().unchecked_ref());
    }
}
