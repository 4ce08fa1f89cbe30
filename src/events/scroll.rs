use super::Listener;
use crate::dom;
use crate::state::PortalState;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys as web;

/// Scroll bursts are coalesced: the first event of a frame schedules one
/// `requestAnimationFrame` read, later ones are dropped until it runs.
pub fn wire_scroll(window: &web::Window, state: Rc<PortalState>) -> Result<Listener, JsValue> {
    let wnd = window.clone();
    Listener::new(window, "scroll", move |_: web::Event| {
        if !state.alive.get() {
            return;
        }
        if !state.scroll_sampler.borrow_mut().notify() {
            return;
        }
        let frame_state = state.clone();
        let frame_wnd = wnd.clone();
        let cb = Closure::once_into_js(move || {
            if frame_state.alive.get() {
                recompute_scroll(&frame_wnd, &frame_state);
            }
        });
        if let Err(e) = wnd.request_animation_frame(cb.unchecked_ref()) {
            log::warn!("[scroll] requestAnimationFrame failed: {:?}", e);
            // Fall back to reading immediately so the pending flag clears.
            recompute_scroll(&wnd, &state);
        }
    })
}

/// Read the scroll offset and publish it. Also used once at mount.
pub fn recompute_scroll(window: &web::Window, state: &PortalState) {
    let (scroll_y, viewport_h) = dom::scroll_metrics(window);
    let zoom = state
        .scroll_sampler
        .borrow_mut()
        .on_frame(scroll_y, viewport_h);
    state.zoom.set(zoom);
}
