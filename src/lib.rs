#![cfg(target_arch = "wasm32")]
use portal_core::{Catalog, DrawerEvent, PortalConfig, Subscription};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys as web;

mod constants;
mod dom;
mod effect;
mod events;
mod exports;
mod frame;
mod markup;
mod overlay;
mod render;
mod state;

use constants::{EFFECT_CANVAS_ID, EFFECT_PLACEHOLDER_ID};
use state::PortalState;

/// A mounted page. Dropping it releases every listener and subscription
/// and stops the render loop.
pub(crate) struct Portal {
    state: Rc<PortalState>,
    _listeners: Vec<events::Listener>,
    _subscriptions: Vec<Subscription>,
    _render_loop: frame::RenderLoop,
}

impl Drop for Portal {
    fn drop(&mut self) {
        self.state.alive.set(false);
        log::info!("portal unmounted");
    }
}

thread_local! {
    static MOUNTED: RefCell<Option<Portal>> = const { RefCell::new(None) };
}

/// Run `f` against the mounted page's state, if any.
pub(crate) fn with_state<R>(f: impl FnOnce(&PortalState) -> R) -> Option<R> {
    MOUNTED.with(|m| m.borrow().as_ref().map(|p| f(&p.state)))
}

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("portal-web starting");
    mount()
}

/// Wire the page. Mounting twice replaces the previous instance.
#[wasm_bindgen]
pub fn mount() -> Result<(), JsValue> {
    unmount();
    match build() {
        Ok(portal) => {
            MOUNTED.with(|m| *m.borrow_mut() = Some(portal));
            Ok(())
        }
        Err(e) => {
            log::error!("mount error: {:?}", e);
            Err(JsValue::from_str(&e.to_string()))
        }
    }
}

/// Tear the page down; later events and frames are no-ops.
#[wasm_bindgen]
pub fn unmount() {
    // Take first so the drop runs outside the thread-local borrow.
    let prev = MOUNTED.with(|m| m.borrow_mut().take());
    drop(prev);
}

fn build() -> anyhow::Result<Portal> {
    let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
    let document = window
        .document()
        .ok_or_else(|| anyhow::anyhow!("no document"))?;
    let js = |e: JsValue| anyhow::anyhow!("{:?}", e);

    let catalog = Catalog::members()?;
    log::info!("[catalog] {} members", catalog.len());
    let state = Rc::new(PortalState::new(PortalConfig::default(), catalog));

    let canvas = document
        .get_element_by_id(EFFECT_CANVAS_ID)
        .and_then(|e| e.dyn_into::<web::HtmlCanvasElement>().ok());
    if let Some(c) = canvas.as_ref() {
        dom::sync_canvas_backing_size(c);
    }
    let placeholder = dom::element(&document, EFFECT_PLACEHOLDER_ID);

    // Derived state and presentation
    let layers = Rc::new(frame::Layers::find(&document));
    let mut subscriptions = Vec::new();
    {
        let st = Rc::downgrade(&state);
        let layers = layers.clone();
        subscriptions.push(state.zoom.subscribe(move |zoom| {
            let Some(st) = st.upgrade() else {
                return;
            };
            let changed = st.transition.borrow_mut().set_zoom(*zoom);
            if let Some(t) = changed {
                layers.apply(&t);
            }
        }));
    }
    {
        let doc = document.clone();
        let st = Rc::downgrade(&state);
        subscriptions.push(state.modal.subscribe(move |_| {
            if let Some(st) = st.upgrade() {
                overlay::sync(&doc, &st.modal);
            }
        }));
    }
    subscriptions.push(state.drawer_events.subscribe(|e| match e {
        DrawerEvent::Opened => log::info!("Menu opened"),
        DrawerEvent::Closed => log::info!("Menu closed"),
    }));

    // Initial classification, scroll read and layer styles
    events::reclassify(&window, &state);
    events::recompute_scroll(&window, &state);
    layers.apply(&state.transition_state());
    overlay::sync(&document, &state.modal);

    // Input listeners
    let mut listeners = vec![
        events::wire_pointermove(&window, &document, state.clone()).map_err(js)?,
        events::wire_scroll(&window, state.clone()).map_err(js)?,
        events::wire_resize(&window, canvas.clone(), state.clone()).map_err(js)?,
        events::wire_modal_keys(&window, state.clone()).map_err(js)?,
    ];
    listeners.extend(events::wire_modal_clicks(&document, &state).map_err(js)?);

    let render_loop = frame::start_loop(frame::FrameContext {
        state: state.clone(),
        effect: effect::EffectLayer::new(canvas, placeholder),
        last_instant: instant::Instant::now(),
        pushed: None,
    });

    log::info!(
        "portal mounted: tier={:?} zoom={:.2} listeners={}",
        state.tier.get(),
        state.zoom.get(),
        listeners.len()
    );
    Ok(Portal {
        state,
        _listeners: listeners,
        _subscriptions: subscriptions,
        _render_loop: render_loop,
    })
}
