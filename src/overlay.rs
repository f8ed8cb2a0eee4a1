use crate::constants::HUD_ID;
use crate::core::Session;
use web_sys as web;

#[inline]
pub fn show(document: &web::Document) {
    if let Some(el) = document.get_element_by_id(HUD_ID) {
        let cl = el.class_list();
        _ = cl.remove_1("hidden");
        // fallback for environments without CSS class
        _ = el.set_attribute("style", "");
    }
}

#[inline]
pub fn hide(document: &web::Document) {
    if let Some(el) = document.get_element_by_id(HUD_ID) {
        let cl = el.class_list();
        _ = cl.add_1("hidden");
        // fallback
        _ = el.set_attribute("style", "display:none");
    }
}

#[inline]
pub fn is_hidden(document: &web::Document) -> bool {
    if let Some(el) = document.get_element_by_id(HUD_ID) {
        if el.class_list().contains("hidden") {
            return true;
        }
        return el
            .get_attribute("style")
            .map(|s| s.contains("display:none"))
            .unwrap_or(false);
    }
    true
}

#[inline]
pub fn toggle(document: &web::Document) {
    if is_hidden(document) {
        show(document);
    } else {
        hide(document);
    }
}

/// Refresh the diagnostics line; does nothing while hidden.
pub fn update_hud(document: &web::Document, session: &Session) {
    if is_hidden(document) {
        return;
    }
    if let Some(el) = document.get_element_by_id(HUD_ID) {
        let profile = session.profile();
        el.set_text_content(Some(&format!(
            "{} • tier {} • {} fps target • {:.1} fps observed • {}",
            session.variant().name(),
            profile.tier.name(),
            profile.target_fps,
            session.observed_fps(),
            session.scene_label()
        )));
    }
}

/// Replace the page with a plain-text notice.
pub fn show_fatal_notice(document: &web::Document, message: &str) {
    match document.body() {
        Some(body) => body.set_inner_text(message),
        None => log::error!("[init] no <body> to show notice: {}", message),
    }
}
