use crate::constants::PLACEHOLDER_FILL;
use crate::dom;
use crate::render::BurstRenderer;
use portal_core::{EffectParameters, LazyResource, LoadPhase};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen_futures::spawn_local;
use web_sys as web;

/// The background-effect slot: a placeholder until the WebGPU renderer is
/// built on first use, then the live renderer for the rest of the page.
pub struct EffectLayer {
    canvas: Option<web::HtmlCanvasElement>,
    placeholder: Option<web::HtmlElement>,
    renderer: Rc<RefCell<LazyResource<BurstRenderer>>>,
}

impl EffectLayer {
    pub fn new(canvas: Option<web::HtmlCanvasElement>, placeholder: Option<web::HtmlElement>) -> Self {
        if let Some(p) = placeholder.as_ref() {
            dom::set_style(p, "background", PLACEHOLDER_FILL);
            dom::set_style(p, "pointer-events", "none");
        }
        Self {
            canvas,
            placeholder,
            renderer: Rc::new(RefCell::new(LazyResource::new())),
        }
    }

    pub fn phase(&self) -> LoadPhase {
        self.renderer.borrow().phase()
    }

    /// Start building the renderer if this is the first time it is needed.
    /// Failures are logged and leave the placeholder up.
    pub fn ensure_requested(&self) {
        if !self.renderer.borrow_mut().request() {
            return;
        }
        let Some(canvas) = self.canvas.clone() else {
            log::warn!("[effect] no canvas; placeholder stays");
            return;
        };
        let slot = self.renderer.clone();
        let placeholder = self.placeholder.clone();
        spawn_local(async move {
            dom::sync_canvas_backing_size(&canvas);
            match BurstRenderer::new(&canvas).await {
                Ok(r) => {
                    if slot.borrow_mut().resolve(r) {
                        if let Some(p) = placeholder.as_ref() {
                            dom::set_style(p, "display", "none");
                        }
                    }
                }
                Err(e) => log::error!("[effect] WebGPU init error: {:?}", e),
            }
        });
    }

    /// Push a new parameter bundle into the live renderer, if there is one.
    pub fn update_params(&self, params: &EffectParameters) {
        if let Some(r) = self.renderer.borrow_mut().get_mut() {
            r.set_params(params);
        }
    }

    pub fn render(&self, dt_sec: f32) {
        let mut slot = self.renderer.borrow_mut();
        let Some(r) = slot.get_mut() else {
            return;
        };
        if let Some(c) = self.canvas.as_ref() {
            r.resize_if_needed(c.width(), c.height());
        }
        if let Err(e) = r.render(dt_sec) {
            log::warn!("[effect] frame skipped: {:?}", e);
        }
    }
}
