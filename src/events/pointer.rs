use super::Listener;
use crate::constants::PORTAL_CONTAINER_ID;
use crate::dom;
use crate::state::PortalState;
use instant::Instant;
use std::rc::Rc;
use wasm_bindgen::JsValue;
use web_sys as web;

/// Pointer tracking over the portal container. Rate limiting and the
/// mobile cut-off live in `PointerSampler`.
pub fn wire_pointermove(
    window: &web::Window,
    document: &web::Document,
    state: Rc<PortalState>,
) -> Result<Listener, JsValue> {
    let container = document
        .get_element_by_id(PORTAL_CONTAINER_ID)
        .or_else(|| document.document_element());

    Listener::new(window, "pointermove", move |ev: web::PointerEvent| {
        if !state.alive.get() {
            return;
        }
        let Some(container) = container.as_ref() else {
            return;
        };
        let tier = state.tier.get();
        let rect = dom::container_rect(container);
        let sampled = state.pointer_sampler.borrow_mut().sample(
            tier,
            Instant::now(),
            ev.client_x() as f32,
            ev.client_y() as f32,
            rect,
        );
        if let Some(signal) = sampled {
            state.pointer.set(signal);
        }
    })
}
