use super::Listener;
use crate::constants::{MEMBER_GRID_ID, MEMBER_ID_ATTR, MODAL_CLOSE_ID, MODAL_NEXT_ID, MODAL_PREV_ID};
use crate::state::PortalState;
use portal_core::ModalCommand;
use std::rc::Rc;
use wasm_bindgen::{JsCast, JsValue};
use web_sys as web;

/// Card clicks (delegated on the grid) and the overlay's own buttons.
pub fn wire_modal_clicks(
    document: &web::Document,
    state: &Rc<PortalState>,
) -> Result<Vec<Listener>, JsValue> {
    let mut out = Vec::new();

    if let Some(grid) = document.get_element_by_id(MEMBER_GRID_ID) {
        let st = state.clone();
        out.push(Listener::new(&grid, "click", move |ev: web::MouseEvent| {
            let Some(card) = clicked_card(&ev) else {
                return;
            };
            let Some(id) = card.get_attribute(MEMBER_ID_ATTR) else {
                return;
            };
            match st.modal.catalog().position(&id) {
                Some(i) => {
                    log::info!("[modal] open {}", id);
                    st.modal.select(i);
                }
                None => log::warn!("[modal] unknown member id {}", id),
            }
        })?);
    }

    let buttons = [
        (MODAL_NEXT_ID, ModalCommand::Next),
        (MODAL_PREV_ID, ModalCommand::Previous),
        (MODAL_CLOSE_ID, ModalCommand::Close),
    ];
    for (id, cmd) in buttons {
        let st = state.clone();
        if let Some(l) = Listener::click(document, id, move || st.modal.apply(cmd))? {
            out.push(l);
        }
    }
    Ok(out)
}

fn clicked_card(ev: &web::MouseEvent) -> Option<web::Element> {
    let target = ev.target()?.dyn_into::<web::Element>().ok()?;
    let selector = format!("[{}]", MEMBER_ID_ATTR);
    target.closest(&selector).ok().flatten()
}
