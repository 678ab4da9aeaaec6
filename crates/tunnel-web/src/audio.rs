use crate::constants::AUDIO_PRELOAD;
use std::cell::Cell;
use std::rc::Rc;
use tunnel_core::{AudioTransport, TunnelError};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::{spawn_local, JsFuture};
use web_sys as web;

/// `AudioTransport` over an `<audio>` element.
///
/// A load error flips the transport into silent mode; the element is left in
/// place but every request becomes a no-op and `is_playing` reports false.
pub struct MediaTransport {
    el: web::HtmlAudioElement,
    failed: Rc<Cell<bool>>,
}

impl MediaTransport {
    pub fn new(src: &str) -> Result<Self, TunnelError> {
        let el = web::HtmlAudioElement::new_with_src(src)
            .map_err(|e| TunnelError::AudioLoad(format!("{:?}", e)))?;
        el.set_preload(AUDIO_PRELOAD);

        let failed = Rc::new(Cell::new(false));
        let failed_flag = failed.clone();
        let src_owned = src.to_string();
        let on_error = Closure::wrap(Box::new(move || {
            failed_flag.set(true);
            log::warn!("[audio] could not load {src_owned}; continuing without sound");
        }) as Box<dyn FnMut()>);
        el.add_event_listener_with_callback("error", on_error.as_ref().unchecked_ref())
            .map_err(|e| TunnelError::AudioLoad(format!("{:?}", e)))?;
        on_error.forget();

        log::info!("[audio] loading {src}");
        Ok(Self { el, failed })
    }

    fn available(&self) -> bool {
        !self.failed.get()
    }
}

impl AudioTransport for MediaTransport {
    fn play(&mut self, start_offset_sec: Option<f64>) {
        if !self.available() {
            return;
        }
        self.el.set_current_time(start_offset_sec.unwrap_or(0.0));
        match self.el.play() {
            Ok(promise) => {
                // autoplay policy or a late load error rejects here
                spawn_local(async move {
                    if let Err(e) = JsFuture::from(promise).await {
                        log::warn!("[audio] play rejected: {:?}", e);
                    }
                });
            }
            Err(e) => log::warn!("[audio] play failed: {:?}", e),
        }
    }

    fn pause(&mut self) {
        if let Err(e) = self.el.pause() {
            log::debug!("[audio] pause failed: {:?}", e);
        }
    }

    fn stop(&mut self) {
        self.pause();
        self.el.set_current_time(0.0);
    }

    fn current_position(&self) -> f64 {
        self.el.current_time()
    }

    fn duration(&self) -> Option<f64> {
        let d = self.el.duration();
        (d.is_finite() && d > 0.0).then_some(d)
    }

    fn is_playing(&self) -> bool {
        self.available() && !self.el.paused() && !self.el.ended()
    }
}
