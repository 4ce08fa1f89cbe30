use super::Listener;
use crate::dom;
use crate::state::PortalState;
use portal_core::{DeviceTier, PointerSignal};
use std::rc::Rc;
use wasm_bindgen::JsValue;
use web_sys as web;

pub fn wire_resize(
    window: &web::Window,
    canvas: Option<web::HtmlCanvasElement>,
    state: Rc<PortalState>,
) -> Result<Listener, JsValue> {
    let wnd = window.clone();
    Listener::new(window, "resize", move |_: web::Event| {
        if !state.alive.get() {
            return;
        }
        reclassify(&wnd, &state);
        if let Some(c) = canvas.as_ref() {
            dom::sync_canvas_backing_size(c);
        }
    })
}

/// Re-run device classification; on a switch to Mobile the pointer is pinned.
pub fn reclassify(window: &web::Window, state: &PortalState) {
    let probe = dom::viewport_probe(window);
    let changed = state.profiler.borrow_mut().update(probe);
    if let Some(tier) = changed {
        log::info!("[device] tier now {:?}", tier);
        if tier == DeviceTier::Mobile {
            state.pointer_sampler.borrow_mut().reset_to_center();
            state.pointer.set(PointerSignal::CENTER);
        }
        state.tier.set(tier);
    }
}
