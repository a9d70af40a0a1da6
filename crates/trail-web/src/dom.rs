use anyhow::Context;
use trail_core::{Color, TrailConfig, Viewport};
use wasm_bindgen::JsCast;
use web_sys as web;

pub const CANVAS_ID: &str = "world";

#[inline]
pub fn window_document() -> Option<web::Document> {
    web::window().and_then(|w| w.document())
}

pub fn find_canvas(document: &web::Document) -> anyhow::Result<web::HtmlCanvasElement> {
    let el = document
        .get_element_by_id(CANVAS_ID)
        .ok_or_else(|| anyhow::anyhow!("missing #{}", CANVAS_ID))?;
    el.dyn_into::<web::HtmlCanvasElement>()
        .map_err(|e| anyhow::anyhow!("#{} is not a canvas: {:?}", CANVAS_ID, e))
}

pub fn context_2d(
    canvas: &web::HtmlCanvasElement,
) -> anyhow::Result<web::CanvasRenderingContext2d> {
    canvas
        .get_context("2d")
        .map_err(|e| anyhow::anyhow!("getContext failed: {:?}", e))?
        .ok_or_else(|| anyhow::anyhow!("2d context unavailable"))?
        .dyn_into::<web::CanvasRenderingContext2d>()
        .map_err(|e| anyhow::anyhow!("unexpected context type: {:?}", e))
}

/// Window inner size in CSS pixels.
pub fn window_viewport() -> Option<Viewport> {
    let w = web::window()?;
    let width = w.inner_width().ok()?.as_f64()?;
    let height = w.inner_height().ok()?.as_f64()?;
    Some(Viewport::new(width as f32, height as f32))
}

/// Match the canvas backing store to the window so one canvas pixel is one CSS pixel.
pub fn sync_canvas_to_window(canvas: &web::HtmlCanvasElement) {
    if let Some(vp) = window_viewport() {
        canvas.set_width(vp.width as u32);
        canvas.set_height(vp.height as u32);
        log::debug!("[resize] canvas {}x{}", canvas.width(), canvas.height());
    }
}

// Optional overrides via data attributes on the canvas:
//   data-quantity="40" data-radius="90" data-fade="#000814"
pub fn config_from_canvas(canvas: &web::HtmlCanvasElement) -> anyhow::Result<TrailConfig> {
    let mut config = TrailConfig::default();
    if let Some(q) = canvas.get_attribute("data-quantity") {
        config.quantity = q
            .trim()
            .parse()
            .with_context(|| format!("data-quantity `{}`", q))?;
    }
    if let Some(r) = canvas.get_attribute("data-radius") {
        config.base_radius = r
            .trim()
            .parse()
            .with_context(|| format!("data-radius `{}`", r))?;
    }
    if let Some(fade) = canvas.get_attribute("data-fade") {
        config.fade = Color::from_hex(fade.trim())?.with_alpha(config.fade.a);
    }
    Ok(config)
}
