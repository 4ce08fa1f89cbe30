use super::Listener;
use crate::state::PortalState;
use portal_core::modal_command_for_key;
use std::rc::Rc;
use wasm_bindgen::JsValue;
use web_sys as web;

/// Arrow keys and Escape drive the detail overlay while it is open.
pub fn wire_modal_keys(window: &web::Window, state: Rc<PortalState>) -> Result<Listener, JsValue> {
    Listener::new(window, "keydown", move |ev: web::KeyboardEvent| {
        if !state.alive.get() || ev.repeat() {
            return;
        }
        let key = ev.key();
        if let Some(cmd) = modal_command_for_key(&key, state.modal.selection()) {
            state.modal.apply(cmd);
            ev.prevent_default();
        }
    })
}
