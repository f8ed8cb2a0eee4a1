use crate::core::keymap::{key_action, KeyAction};
use crate::core::Session;
use crate::overlay;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use web_sys as web;

pub fn handle_global_keydown(ev: &web::KeyboardEvent, session: &Rc<RefCell<Session>>) {
    let Some(action) = key_action(&ev.key()) else {
        return;
    };
    match action.as_input() {
        Some(msg) => session.borrow_mut().handle(msg),
        None => {
            if action == KeyAction::ToggleHud {
                if let Some(document) = crate::dom::window_document() {
                    overlay::toggle(&document);
                    overlay::update_hud(&document, &session.borrow());
                }
            }
        }
    }
    ev.prevent_default();
}

pub fn wire_global_keydown(session: Rc<RefCell<Session>>) {
    if let Some(window) = web::window() {
        let closure =
            wasm_bindgen::closure::Closure::wrap(Box::new(move |ev: web::KeyboardEvent| {
                handle_global_keydown(&ev, &session);
            }) as Box<dyn FnMut(_)>);
        _ = window.add_event_listener_with_callback("keydown", closure.as_ref().unchecked_ref());
        closure.forget();
    }
}
