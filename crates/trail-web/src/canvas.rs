use glam::Vec2;
use std::f64::consts::TAU;
use trail_core::{Color, DrawSurface, Glow, Rect, Viewport};
use wasm_bindgen::JsValue;
use web_sys as web;

/// [`DrawSurface`] over a Canvas 2D context.
pub struct CanvasSurface {
    canvas: web::HtmlCanvasElement,
    ctx: web::CanvasRenderingContext2d,
}

impl CanvasSurface {
    pub fn new(canvas: web::HtmlCanvasElement, ctx: web::CanvasRenderingContext2d) -> Self {
        Self { canvas, ctx }
    }

    #[allow(deprecated)]
    fn set_fill(&self, paint: &Color) {
        self.ctx.set_fill_style(&JsValue::from_str(&paint.to_css()));
    }

    #[allow(deprecated)]
    fn set_stroke(&self, paint: &Color) {
        self.ctx.set_stroke_style(&JsValue::from_str(&paint.to_css()));
    }
}

impl DrawSurface for CanvasSurface {
    // Backing-store size, re-read every call so resizes are never stale.
    fn size(&self) -> Viewport {
        Viewport::new(self.canvas.width() as f32, self.canvas.height() as f32)
    }

    fn fill_rect(&mut self, rect: Rect, paint: &Color) {
        self.set_fill(paint);
        self.ctx.fill_rect(
            rect.origin.x as f64,
            rect.origin.y as f64,
            rect.size.x as f64,
            rect.size.y as f64,
        );
    }

    fn begin_path(&mut self) {
        self.ctx.begin_path();
    }

    fn set_glow(&mut self, glow: Option<Glow>) {
        match glow {
            Some(g) => {
                self.ctx.set_shadow_blur(g.blur as f64);
                self.ctx.set_shadow_color(&g.color.to_css());
            }
            None => self.ctx.set_shadow_blur(0.0),
        }
    }

    fn stroke_line(&mut self, from: Vec2, to: Vec2, paint: &Color, width: f32) {
        self.set_stroke(paint);
        self.ctx.set_line_width(width as f64);
        self.ctx.move_to(from.x as f64, from.y as f64);
        self.ctx.line_to(to.x as f64, to.y as f64);
        self.ctx.stroke();
    }

    fn fill_circle(&mut self, center: Vec2, radius: f32, paint: &Color) {
        self.set_fill(paint);
        if let Err(e) = self.ctx.arc(
            center.x as f64,
            center.y as f64,
            radius.max(0.0) as f64,
            0.0,
            TAU,
        ) {
            log::warn!("arc failed: {:?}", e);
            return;
        }
        self.ctx.fill();
    }
}
