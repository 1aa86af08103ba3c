use crate::constants::{MODE_SWITCH_ID, POWER_TOGGLE_ID};
use crate::dom;
use crate::WebApp;
use std::cell::RefCell;
use std::rc::Rc;
use web_sys as web;

/// Reflect app state in the selector and the power button.
pub fn sync_controls(document: &web::Document, app: &WebApp) {
    if let Some(select) = dom::select_element(document, MODE_SWITCH_ID) {
        select.set_value(app.mode().name());
    }
    dom::set_text(document, POWER_TOGGLE_ID, app.power_label());
}

pub fn wire_mode_switch(document: &web::Document, app: Rc<RefCell<WebApp>>) {
    let Some(select) = dom::select_element(document, MODE_SWITCH_ID) else {
        log::warn!("[dom] missing #{} select", MODE_SWITCH_ID);
        return;
    };
    let select_read = select.clone();
    dom::listen(&select, "change", move |_ev| {
        let value = select_read.value();
        app.borrow_mut().select_mode(&value);
    });
}

pub fn wire_power_toggle(document: &web::Document, app: Rc<RefCell<WebApp>>) {
    let doc = document.clone();
    dom::add_click_listener(document, POWER_TOGGLE_ID, move |_ev| {
        let label = {
            let mut a = app.borrow_mut();
            a.toggle_power();
            a.power_label()
        };
        dom::set_text(&doc, POWER_TOGGLE_ID, label);
    });
}
