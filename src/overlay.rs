use crate::constants::{STATS_OVERLAY_ID, STATS_OVERLAY_STYLE};
use glowfield_core::StatsSnapshot;
use web_sys as web;

/// Stats element, created on first use so pages need no markup for it.
fn ensure(document: &web::Document) -> Option<web::Element> {
    if let Some(el) = document.get_element_by_id(STATS_OVERLAY_ID) {
        return Some(el);
    }
    let el = document.create_element("div").ok()?;
    el.set_id(STATS_OVERLAY_ID);
    _ = el.set_attribute("style", &format!("{STATS_OVERLAY_STYLE};display:none"));
    let body = document.body()?;
    _ = body.append_child(&el);
    Some(el)
}

#[inline]
pub fn show(document: &web::Document) {
    if let Some(el) = ensure(document) {
        _ = el.class_list().remove_1("hidden");
        _ = el.set_attribute("style", STATS_OVERLAY_STYLE);
    }
}

#[inline]
pub fn hide(document: &web::Document) {
    if let Some(el) = document.get_element_by_id(STATS_OVERLAY_ID) {
        _ = el.class_list().add_1("hidden");
        _ = el.set_attribute("style", &format!("{STATS_OVERLAY_STYLE};display:none"));
    }
}

/// Write the latest stats summary into the overlay.
pub fn update_stats(document: &web::Document, snapshot: &StatsSnapshot) {
    if let Some(el) = document.get_element_by_id(STATS_OVERLAY_ID) {
        el.set_text_content(Some(&snapshot.to_string()));
    }
}
