use crate::constants::POWER_KEYS;
use crate::core::mode_for_key;
use crate::dom;
use crate::events::controls::sync_controls;
use crate::WebApp;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Digits 1-4 switch color mode, `p` toggles power.
pub fn wire_global_keydown(window: &web::Window, app: Rc<RefCell<WebApp>>) {
    dom::listen(window, "keydown", move |ev| {
        let Some(ke) = ev.dyn_ref::<web::KeyboardEvent>() else {
            return;
        };
        if ke.repeat() || ke.ctrl_key() || ke.meta_key() || ke.alt_key() {
            return;
        }
        let key = ke.key();
        let mut a = app.borrow_mut();
        if let Some(mode) = mode_for_key(&key) {
            a.set_mode(mode);
        } else if POWER_KEYS.contains(&key.as_str()) {
            a.toggle_power();
        } else {
            return;
        }
        if let Some(document) = dom::window_document() {
            sync_controls(&document, &a);
        }
    });
}
