use crate::canvas::CanvasSurface;
use crate::events::SharedPointer;
use instant::Instant;
use std::cell::RefCell;
use std::rc::Rc;
use trail_core::{DrawSurface, TrailContext, TICK_INTERVAL_MS};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

// Ticks arriving later than this many intervals are logged as stalls.
const LATE_TICK_FACTOR: f64 = 3.0;

pub struct FrameContext {
    pub trail: TrailContext,
    pub surface: CanvasSurface,
    pub pointer: SharedPointer,
    pub last_instant: Instant,
}

impl FrameContext {
    pub fn frame(&mut self) {
        let now = Instant::now();
        let dt_ms = (now - self.last_instant).as_secs_f64() * 1000.0;
        self.last_instant = now;
        if dt_ms > TICK_INTERVAL_MS * LATE_TICK_FACTOR {
            log::debug!("[frame] late tick: {:.1} ms", dt_ms);
        }

        // Copy out once so input handlers can never tear a tick.
        let pointer = *self.pointer.borrow();
        let viewport = self.surface.size();
        self.trail.step(pointer, viewport, &mut self.surface);
    }
}

/// Running interval. The interval is cleared when the handle is dropped,
/// before the tick closure it calls is freed.
pub struct LoopHandle {
    interval_id: i32,
    _tick: Closure<dyn FnMut()>,
}

impl Drop for LoopHandle {
    fn drop(&mut self) {
        if let Some(w) = web::window() {
            w.clear_interval_with_handle(self.interval_id);
        }
        log::info!("[frame] loop stopped");
    }
}

pub fn start_loop(frame_ctx: Rc<RefCell<FrameContext>>) -> anyhow::Result<LoopHandle> {
    let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
    let tick = Closure::wrap(Box::new(move || {
        frame_ctx.borrow_mut().frame();
    }) as Box<dyn FnMut()>);
    let interval_id = window
        .set_interval_with_callback_and_timeout_and_arguments_0(
            tick.as_ref().unchecked_ref(),
            TICK_INTERVAL_MS as i32,
        )
        .map_err(|e| anyhow::anyhow!("setInterval failed: {:?}", e))?;
    log::info!("[frame] loop started every {:.2} ms", TICK_INTERVAL_MS);
    Ok(LoopHandle {
        interval_id,
        _tick: tick,
    })
}
