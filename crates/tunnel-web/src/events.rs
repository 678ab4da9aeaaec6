use crate::dom;
use crate::frame::{SharedAudio, SharedSession};
use tunnel_core::KeyAction;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Pointer position relative to the canvas, in CSS pixels.
#[inline]
fn pointer_canvas_css(ev: &web::PointerEvent, canvas: &web::HtmlCanvasElement) -> (f32, f32) {
    let rect = canvas.get_bounding_client_rect();
    (
        ev.client_x() as f32 - rect.left() as f32,
        ev.client_y() as f32 - rect.top() as f32,
    )
}

pub fn wire_pointerdown(
    canvas: &web::HtmlCanvasElement,
    session: SharedSession,
    audio: SharedAudio,
) {
    let canvas_ev = canvas.clone();
    let closure = Closure::wrap(Box::new(move |ev: web::PointerEvent| {
        let (x, y) = pointer_canvas_css(&ev, &canvas_ev);
        let mut audio = audio.borrow_mut();
        if session.borrow_mut().pointer_pressed(x, y, &mut **audio) {
            log::debug!("[events] glyph pressed at ({x:.0}, {y:.0})");
        }
    }) as Box<dyn FnMut(_)>);
    _ = canvas.add_event_listener_with_callback("pointerdown", closure.as_ref().unchecked_ref());
    closure.forget();
}

pub fn handle_global_keydown(
    ev: &web::KeyboardEvent,
    session: &SharedSession,
    audio: &SharedAudio,
    canvas: &web::HtmlCanvasElement,
) {
    let Some(action) = KeyAction::from_key(&ev.key()) else {
        return;
    };
    match action {
        KeyAction::TogglePlayback => {
            // keep the page from scrolling
            ev.prevent_default();
            let mut audio = audio.borrow_mut();
            session.borrow_mut().toggle(&mut **audio);
        }
        KeyAction::ToggleFullscreen => dom::toggle_fullscreen(canvas),
        KeyAction::ExitFullscreen => dom::exit_fullscreen(),
    }
}

pub fn wire_global_keydown(
    session: SharedSession,
    audio: SharedAudio,
    canvas: web::HtmlCanvasElement,
) {
    if let Some(window) = web::window() {
        let closure = Closure::wrap(Box::new(move |ev: web::KeyboardEvent| {
            handle_global_keydown(&ev, &session, &audio, &canvas);
        }) as Box<dyn FnMut(_)>);
        _ = window.add_event_listener_with_callback("keydown", closure.as_ref().unchecked_ref());
        closure.forget();
    }
}

/// Keep the backing store and the session viewport in step with the window.
pub fn wire_canvas_resize(canvas: &web::HtmlCanvasElement, session: SharedSession) {
    let canvas_resize = canvas.clone();
    let resize_closure = Closure::wrap(Box::new(move || {
        let (w, h) = dom::sync_canvas_backing_size(&canvas_resize);
        session.borrow_mut().resize(w, h);
    }) as Box<dyn FnMut()>);
    if let Some(window) = web::window() {
        _ = window
            .add_event_listener_with_callback("resize", resize_closure.as_ref().unchecked_ref());
    }
    resize_closure.forget();
}
