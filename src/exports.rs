//! Entry points for the JavaScript collaborators: static parameter bundles,
//! live snapshots, and the notifications they send back.
#![allow(deprecated)] // JsValue::from_serde

use crate::constants::TIMELINE_SOURCE;
use crate::with_state;
use portal_core::{
    CardGridParams, Catalog, DrawerEvent, DrawerParams, ModalCommand, TimelineEmbed, TypingParams,
};
use wasm_bindgen::prelude::*;

fn to_js<T: serde::Serialize>(value: &T) -> Result<JsValue, JsValue> {
    JsValue::from_serde(value).map_err(|e| JsValue::from_str(&e.to_string()))
}

#[wasm_bindgen]
pub fn typing_params() -> Result<JsValue, JsValue> {
    to_js(&TypingParams::default())
}

#[wasm_bindgen]
pub fn drawer_params() -> Result<JsValue, JsValue> {
    to_js(&DrawerParams::default())
}

#[wasm_bindgen]
pub fn card_grid_params() -> Result<JsValue, JsValue> {
    let catalog = Catalog::members().map_err(|e| JsValue::from_str(&e.to_string()))?;
    to_js(&CardGridParams::from_catalog(&catalog))
}

#[wasm_bindgen]
pub fn timeline_src(source: Option<String>) -> String {
    TimelineEmbed::new(source.unwrap_or_else(|| TIMELINE_SOURCE.to_string())).url()
}

/// Current effect bundle, or `null` before mount.
#[wasm_bindgen]
pub fn effect_parameters() -> Result<JsValue, JsValue> {
    match with_state(|s| s.effect_parameters()) {
        Some(p) => to_js(&p),
        None => Ok(JsValue::NULL),
    }
}

#[wasm_bindgen]
pub fn transition_state() -> Result<JsValue, JsValue> {
    match with_state(|s| s.transition_state()) {
        Some(t) => to_js(&t),
        None => Ok(JsValue::NULL),
    }
}

#[wasm_bindgen]
pub fn menu_opened() {
    with_state(|s| s.drawer_events.emit(DrawerEvent::Opened));
}

#[wasm_bindgen]
pub fn menu_closed() {
    with_state(|s| s.drawer_events.emit(DrawerEvent::Closed));
}

/// Catalog-position dispatch for grids rendered outside the page markup.
#[wasm_bindgen]
pub fn select_member(index: usize) {
    with_state(|s| s.modal.apply(ModalCommand::Select(index)));
}

/// Open index, or `undefined` while the overlay is closed.
#[wasm_bindgen]
pub fn selected_member() -> Option<usize> {
    with_state(|s| s.modal.selection().index()).flatten()
}
