use crate::constants::CLASS_HIDDEN;
use web_sys as web;

#[inline]
pub fn show(document: &web::Document, element_id: &str) {
    if let Some(el) = document.get_element_by_id(element_id) {
        let cl = el.class_list();
        _ = cl.remove_1(CLASS_HIDDEN);
        // fallback for environments without CSS class
        _ = el.set_attribute("style", "");
    }
}

#[inline]
pub fn hide(document: &web::Document, element_id: &str) {
    if let Some(el) = document.get_element_by_id(element_id) {
        let cl = el.class_list();
        _ = cl.add_1(CLASS_HIDDEN);
        // fallback
        _ = el.set_attribute("style", "display:none");
    }
}

#[inline]
pub fn is_hidden(document: &web::Document, element_id: &str) -> bool {
    if let Some(el) = document.get_element_by_id(element_id) {
        if el.class_list().contains(CLASS_HIDDEN) {
            return true;
        }
        return el
            .get_attribute("style")
            .map(|s| s.contains("display:none"))
            .unwrap_or(false);
    }
    false
}
