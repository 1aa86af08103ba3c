use crate::core::{DrawingSurface, Rgba, Stroke};
use glam::DVec2;
use wasm_bindgen::JsValue;
use web_sys as web;

/// `DrawingSurface` over a 2D canvas context. Size is captured once.
pub struct CanvasSurface {
    ctx: web::CanvasRenderingContext2d,
    extent: DVec2,
}

impl CanvasSurface {
    pub fn new(canvas: &web::HtmlCanvasElement, ctx: web::CanvasRenderingContext2d) -> Self {
        let extent = DVec2::new(canvas.width() as f64, canvas.height() as f64);
        Self { ctx, extent }
    }
}

impl DrawingSurface for CanvasSurface {
    fn size(&self) -> DVec2 {
        self.extent
    }

    fn clear(&mut self) {
        self.ctx.clear_rect(0.0, 0.0, self.extent.x, self.extent.y);
    }

    fn fill_rect(&mut self, origin: DVec2, size: DVec2, color: Rgba) {
        #[allow(deprecated)]
        self.ctx.set_fill_style(&JsValue::from_str(&color.to_css()));
        self.ctx.fill_rect(origin.x, origin.y, size.x, size.y);
    }

    fn stroke_line(&mut self, from: DVec2, to: DVec2, stroke: &Stroke) {
        let css = stroke.color.to_css();
        self.ctx.begin_path();
        self.ctx.move_to(from.x, from.y);
        self.ctx.line_to(to.x, to.y);
        #[allow(deprecated)]
        self.ctx.set_stroke_style(&JsValue::from_str(&css));
        self.ctx.set_line_width(stroke.width);
        self.ctx.set_shadow_blur(stroke.glow_blur);
        self.ctx.set_shadow_color(&css);
        self.ctx.stroke();
    }
}
