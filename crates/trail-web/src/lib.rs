#![cfg(target_arch = "wasm32")]
use crate::canvas::CanvasSurface;
use crate::frame::{FrameContext, LoopHandle};
use instant::Instant;
use std::cell::RefCell;
use std::rc::Rc;
use trail_core::{PointerState, TrailContext};
use wasm_bindgen::prelude::*;
use web_sys as web;

mod canvas;
mod dom;
mod events;
mod frame;

thread_local! {
    static RUNNING: RefCell<Option<LoopHandle>> = const { RefCell::new(None) };
}

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("trail-web starting");

    if let Err(e) = init() {
        log::error!("init error: {:?}", e);
    }
    Ok(())
}

/// Stop the animation. The canvas keeps its last frame.
#[wasm_bindgen]
pub fn stop() {
    // Dropping the handle clears the interval.
    if RUNNING.with(|r| r.borrow_mut().take()).is_none() {
        log::warn!("[frame] stop requested but nothing is running");
    }
}

fn seed_from_js() -> u64 {
    let hi = (js_sys::Math::random() * u32::MAX as f64) as u64;
    let lo = (js_sys::Math::random() * u32::MAX as f64) as u64;
    (hi << 32) | lo
}

// Every fallible step runs before the first side effect: the canvas is only
// resized and listeners only registered once the interval is running.
fn init() -> anyhow::Result<()> {
    if RUNNING.with(|r| r.borrow().is_some()) {
        log::warn!("[init] already running; ignoring");
        return Ok(());
    }
    let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
    let document = window
        .document()
        .ok_or_else(|| anyhow::anyhow!("no document"))?;

    let canvas = dom::find_canvas(&document)?;
    let ctx = dom::context_2d(&canvas)?;
    let config = dom::config_from_canvas(&canvas)?;
    let viewport = dom::window_viewport().ok_or_else(|| anyhow::anyhow!("no window size"))?;
    let trail = TrailContext::centred(config, viewport, seed_from_js())?;
    log::info!(
        "[init] {} particles on {}x{} canvas",
        trail.particles().len(),
        viewport.width,
        viewport.height
    );

    let pointer = Rc::new(RefCell::new(PointerState::at(viewport.centre())));
    let frame_ctx = Rc::new(RefCell::new(FrameContext {
        trail,
        surface: CanvasSurface::new(canvas.clone(), ctx),
        pointer: pointer.clone(),
        last_instant: Instant::now(),
    }));
    // The first tick fires asynchronously, after the wiring below.
    let handle = frame::start_loop(frame_ctx)?;

    events::wire_canvas_resize(&canvas);
    events::wire_input_handlers(&pointer);
    RUNNING.with(|r| *r.borrow_mut() = Some(handle));
    Ok(())
}
