use crate::core::{Scheduler, TickFn};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

type RafSlot = Rc<RefCell<Option<Closure<dyn FnMut()>>>>;

/// `Scheduler` backed by `requestAnimationFrame`: one tick per display frame,
/// no fixed rate and no catch-up.
#[derive(Default)]
pub struct RafScheduler;

impl Scheduler for RafScheduler {
    fn schedule(&mut self, mut tick: TickFn) {
        let slot: RafSlot = Rc::new(RefCell::new(None));
        let slot_tick = slot.clone();
        *slot.borrow_mut() = Some(Closure::wrap(Box::new(move || {
            if tick().is_break() {
                log::info!("[frame] loop stopped");
                return;
            }
            request_frame(&slot_tick);
        }) as Box<dyn FnMut()>));
        request_frame(&slot);
    }
}

fn request_frame(slot: &RafSlot) {
    let Some(w) = web::window() else {
        return;
    };
    if let Some(cb) = slot.borrow().as_ref() {
        _ = w.request_animation_frame(cb.as_ref().unchecked_ref());
    }
}
