use crate::constants::{
    CONTENT_PANEL_ID, EFFECT_LAYER_ID, FRAME_DT_MAX_SEC, HEADLINE_ID, VIGNETTE_ID,
};
use crate::dom;
use crate::effect::EffectLayer;
use crate::state::PortalState;
use instant::Instant;
use portal_core::{LayerStyles, LoadPhase, TransitionState};
use std::cell::{Cell, RefCell};
use std::rc::{Rc, Weak};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

/// The page layers whose styles follow the transition state.
pub struct Layers {
    effect: Option<web::HtmlElement>,
    vignette: Option<web::HtmlElement>,
    headline: Option<web::HtmlElement>,
    content: Option<web::HtmlElement>,
}

impl Layers {
    pub fn find(document: &web::Document) -> Self {
        Self {
            effect: dom::element(document, EFFECT_LAYER_ID),
            vignette: dom::element(document, VIGNETTE_ID),
            headline: dom::element(document, HEADLINE_ID),
            content: dom::element(document, CONTENT_PANEL_ID),
        }
    }

    pub fn apply(&self, t: &TransitionState) {
        let s = LayerStyles::from_transition(t);
        if let Some(el) = &self.effect {
            dom::set_style(el, "opacity", &s.effect_opacity.to_string());
        }
        if let Some(el) = &self.vignette {
            dom::set_style(el, "opacity", &s.vignette_opacity.to_string());
        }
        if let Some(el) = &self.headline {
            dom::set_style(el, "opacity", &s.title_opacity.to_string());
            dom::set_style(el, "transform", &format!("scale({:.4})", s.title_scale));
        }
        if let Some(el) = &self.content {
            dom::set_style(el, "opacity", &s.content_opacity.to_string());
            let events = if s.content_interactive { "auto" } else { "none" };
            dom::set_style(el, "pointer-events", events);
        }
    }
}

pub struct FrameContext {
    pub state: Rc<PortalState>,
    pub effect: EffectLayer,
    pub last_instant: Instant,
    /// (renderer phase, composer recompute count) last pushed to the renderer.
    pub pushed: Option<(LoadPhase, u64)>,
}

impl FrameContext {
    pub fn frame(&mut self) {
        let now = Instant::now();
        let dt_sec = (now - self.last_instant).as_secs_f32().min(FRAME_DT_MAX_SEC);
        self.last_instant = now;

        let styles = LayerStyles::from_transition(&self.state.transition_state());
        if styles.effect_opacity > 0.0 {
            self.effect.ensure_requested();
        }

        let params = self.state.effect_parameters();
        let key = (
            self.effect.phase(),
            self.state.composer.borrow().recomputations(),
        );
        if self.pushed != Some(key) {
            self.effect.update_params(&params);
            self.pushed = Some(key);
        }

        // Fully faded out: keep the renderer alive but skip the GPU work.
        if styles.effect_opacity > 0.0 {
            self.effect.render(dt_sec);
        }
    }
}

/// Handle for the continuous render loop. Dropping it cancels the pending
/// frame and releases the callback.
pub struct RenderLoop {
    tick: Rc<RefCell<Option<Closure<dyn FnMut()>>>>,
    frame_id: Rc<Cell<Option<i32>>>,
}

impl Drop for RenderLoop {
    fn drop(&mut self) {
        if let (Some(w), Some(id)) = (web::window(), self.frame_id.take()) {
            _ = w.cancel_animation_frame(id);
        }
        self.tick.borrow_mut().take();
    }
}

pub fn start_loop(frame_ctx: FrameContext) -> RenderLoop {
    let tick: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
    let frame_id: Rc<Cell<Option<i32>>> = Rc::new(Cell::new(None));
    let weak_tick: Weak<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::downgrade(&tick);
    let id_tick = frame_id.clone();
    let mut ctx = frame_ctx;
    *tick.borrow_mut() = Some(Closure::wrap(Box::new(move || {
        id_tick.set(None);
        if !ctx.state.alive.get() {
            return;
        }
        ctx.frame();
        if let Some(tick) = weak_tick.upgrade() {
            id_tick.set(request_frame(&tick));
        }
    }) as Box<dyn FnMut()>));
    frame_id.set(request_frame(&tick));
    RenderLoop { tick, frame_id }
}

fn request_frame(tick: &RefCell<Option<Closure<dyn FnMut()>>>) -> Option<i32> {
    let w = web::window()?;
    let slot = tick.borrow();
    let cb = slot.as_ref()?;
    w.request_animation_frame(cb.as_ref().unchecked_ref()).ok()
}
