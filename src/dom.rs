use portal_core::{ContainerRect, ViewportProbe};
use wasm_bindgen::{JsCast, JsValue};
use web_sys as web;

#[inline]
pub fn element(document: &web::Document, id: &str) -> Option<web::HtmlElement> {
    document
        .get_element_by_id(id)
        .and_then(|el| el.dyn_into::<web::HtmlElement>().ok())
}

/// Viewport width plus touch capability. A failing probe reports `None`.
pub fn viewport_probe(window: &web::Window) -> ViewportProbe {
    let width = window
        .inner_width()
        .ok()
        .and_then(|v| v.as_f64())
        .unwrap_or(0.0);
    ViewportProbe {
        width,
        touch: touch_capable(window),
    }
}

fn touch_capable(window: &web::Window) -> Option<bool> {
    let has_touch_events = js_sys::Reflect::has(window, &JsValue::from_str("ontouchstart")).ok()?;
    let points = window.navigator().max_touch_points();
    Some(has_touch_events || points > 0)
}

/// Current scroll offset and viewport height, both in CSS pixels.
pub fn scroll_metrics(window: &web::Window) -> (f64, f64) {
    let scroll_y = window.scroll_y().unwrap_or(0.0);
    let height = window
        .inner_height()
        .ok()
        .and_then(|v| v.as_f64())
        .unwrap_or(0.0);
    (scroll_y, height)
}

pub fn container_rect(el: &web::Element) -> ContainerRect {
    let rect = el.get_bounding_client_rect();
    ContainerRect {
        left: rect.left() as f32,
        top: rect.top() as f32,
        width: rect.width() as f32,
        height: rect.height() as f32,
    }
}

pub fn set_style(el: &web::HtmlElement, property: &str, value: &str) {
    if let Err(e) = el.style().set_property(property, value) {
        log::warn!("[dom] set {} failed: {:?}", property, e);
    }
}

pub fn sync_canvas_backing_size(canvas: &web::HtmlCanvasElement) {
    if let Some(w) = web::window() {
        let dpr = w.device_pixel_ratio();
        let rect = canvas.get_bounding_client_rect();
        let w_px = (rect.width() * dpr) as u32;
        let h_px = (rect.height() * dpr) as u32;
        canvas.set_width(w_px.max(1));
        canvas.set_height(h_px.max(1));
    }
}
