use crate::constants::{MODAL_BODY_ID, MODAL_ID};
use crate::markup::member_html;
use portal_core::{CatalogEntry, ModalSelection, ModalNavigator};
use web_sys as web;

#[inline]
pub fn show(document: &web::Document) {
    if let Some(el) = document.get_element_by_id(MODAL_ID) {
        let cl = el.class_list();
        _ = cl.remove_1("hidden");
        // fallback for environments without CSS class
        _ = el.set_attribute("style", "");
        _ = el.set_attribute("aria-hidden", "false");
    }
}

#[inline]
pub fn hide(document: &web::Document) {
    if let Some(el) = document.get_element_by_id(MODAL_ID) {
        let cl = el.class_list();
        _ = cl.add_1("hidden");
        // fallback
        _ = el.set_attribute("style", "display:none");
        _ = el.set_attribute("aria-hidden", "true");
    }
}

/// Bring the overlay in line with the navigator's current selection.
pub fn sync(document: &web::Document, modal: &ModalNavigator) {
    match modal.selection() {
        ModalSelection::Closed => hide(document),
        ModalSelection::Open(_) => {
            if let Some((entry, i)) = modal.current() {
                render_entry(document, entry, i, modal.catalog().len());
                show(document);
            }
        }
    }
}

fn render_entry(document: &web::Document, entry: &CatalogEntry, index: usize, total: usize) {
    if let Some(el) = document.get_element_by_id(MODAL_BODY_ID) {
        el.set_inner_html(&member_html(entry, index, total));
    }
}
