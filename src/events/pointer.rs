use crate::dom;
use crate::WebApp;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Mouse and touch movement both feed the same pointer state.
pub fn wire_pointer_handlers(canvas: &web::HtmlCanvasElement, app: Rc<RefCell<WebApp>>) {
    wire_mousemove(canvas, app.clone());
    wire_touchmove(canvas, app);
}

fn wire_mousemove(canvas: &web::HtmlCanvasElement, app: Rc<RefCell<WebApp>>) {
    dom::listen(canvas, "mousemove", move |ev| {
        if let Some(me) = ev.dyn_ref::<web::MouseEvent>() {
            app.borrow_mut()
                .pointer_moved(me.client_x() as f64, me.client_y() as f64);
        }
    });
}

fn wire_touchmove(canvas: &web::HtmlCanvasElement, app: Rc<RefCell<WebApp>>) {
    dom::listen(canvas, "touchmove", move |ev| {
        let Some(te) = ev.dyn_ref::<web::TouchEvent>() else {
            return;
        };
        // first finger only
        if let Some(touch) = te.touches().get(0) {
            app.borrow_mut()
                .pointer_moved(touch.client_x() as f64, touch.client_y() as f64);
        }
    });
}
