//! Error panel inside the preview region.
use crate::constants::{PREVIEW_ERROR_ID, PREVIEW_ERROR_MESSAGE_ID};
use crate::dom;
use web_sys as web;

#[inline]
pub fn show_error(document: &web::Document, message: &str) {
    dom::set_text(document, PREVIEW_ERROR_MESSAGE_ID, message);
    if let Some(el) = document.get_element_by_id(PREVIEW_ERROR_ID) {
        _ = el.class_list().remove_1("hidden");
        // fallback for environments without CSS class
        _ = el.set_attribute("style", "");
    }
}

#[inline]
pub fn hide_error(document: &web::Document) {
    if let Some(el) = document.get_element_by_id(PREVIEW_ERROR_ID) {
        _ = el.class_list().add_1("hidden");
        // fallback
        _ = el.set_attribute("style", "display:none");
    }
}

