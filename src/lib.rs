//! Plasma tendrils on a 2D canvas.
//!
//! `core` is the platform-free engine and builds everywhere. The remaining
//! modules are the browser front-end and only exist on `wasm32`.

pub mod core;

#[cfg(target_arch = "wasm32")]
mod audio;
#[cfg(target_arch = "wasm32")]
mod constants;
#[cfg(target_arch = "wasm32")]
mod dom;
#[cfg(target_arch = "wasm32")]
mod events;
#[cfg(target_arch = "wasm32")]
mod frame;
#[cfg(target_arch = "wasm32")]
mod storage;
#[cfg(target_arch = "wasm32")]
mod surface;

#[cfg(target_arch = "wasm32")]
pub use web_entry::start;
#[cfg(target_arch = "wasm32")]
pub(crate) use web_entry::WebApp;

#[cfg(target_arch = "wasm32")]
mod web_entry {
    use crate::constants::CANVAS_ID;
    use crate::core::{drive, InstantClock, PlasmaApp};
    use crate::{audio, dom, events, frame, storage, surface};
    use std::cell::RefCell;
    use std::rc::Rc;
    use wasm_bindgen::prelude::*;
    use wasm_bindgen::JsCast;
    use web_sys as web;

    pub(crate) type WebApp = PlasmaApp<
        surface::CanvasSurface,
        audio::ElementAudio,
        storage::BrowserPrefs,
        InstantClock,
    >;

    #[wasm_bindgen(start)]
    pub fn start() -> Result<(), JsValue> {
        console_error_panic_hook::set_once();
        console_log::init_with_level(log::Level::Info).ok();
        log::info!("plasma-web starting");

        if let Err(e) = init() {
            log::error!("init error: {:?}", e);
        }
        Ok(())
    }

    fn init() -> anyhow::Result<()> {
        let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
        let document = window
            .document()
            .ok_or_else(|| anyhow::anyhow!("no document"))?;

        let canvas: web::HtmlCanvasElement = document
            .get_element_by_id(CANVAS_ID)
            .ok_or_else(|| anyhow::anyhow!("missing #{}", CANVAS_ID))?
            .dyn_into::<web::HtmlCanvasElement>()
            .map_err(|e| anyhow::anyhow!("{:?}", e))?;

        // Sized once; the effect does not follow window resizes
        dom::fit_canvas_to_window(&window, &canvas);

        let ctx = canvas
            .get_context("2d")
            .map_err(|e| anyhow::anyhow!("{:?}", e))?
            .ok_or_else(|| anyhow::anyhow!("2d context unavailable"))?
            .dyn_into::<web::CanvasRenderingContext2d>()
            .map_err(|e| anyhow::anyhow!("{:?}", e))?;

        let app: Rc<RefCell<WebApp>> = Rc::new(RefCell::new(PlasmaApp::start(
            surface::CanvasSurface::new(&canvas, ctx),
            audio::ElementAudio::from_document(&document),
            storage::BrowserPrefs::open(&window),
            InstantClock::default(),
            rand::random(),
        )));

        events::sync_controls(&document, &app.borrow());
        events::wire_pointer_handlers(&canvas, app.clone());
        events::wire_mode_switch(&document, app.clone());
        events::wire_power_toggle(&document, app.clone());
        events::wire_global_keydown(&window, app.clone());

        drive(&mut frame::RafScheduler, app);
        Ok(())
    }
}
