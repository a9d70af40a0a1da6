use anyhow::Context;
use glam::Vec2;
use std::str::FromStr;
use std::thread;
use std::time::{Duration, Instant};
use trail_core::{
    Color, DrawSurface, Glow, PointerInput, PointerState, Rect, TrailConfig, TrailContext,
    Viewport, TICK_INTERVAL_MS,
};

const VIEWPORT: Viewport = Viewport::new(800.0, 600.0);
const PRESS_TOGGLE_TICKS: u64 = 100;
const SCRIPT_RADIUS: f32 = 150.0;
const SCRIPT_ANGULAR_SPEED: f32 = 0.02;

/// Surface that only keeps counters; enough to sanity-check a long run.
#[derive(Default)]
struct StatsSurface {
    viewport: Viewport,
    glow: Option<Glow>,
    overlays: u64,
    strokes: u64,
    dots: u64,
    out_of_bounds: u64,
    leaked_glow: u64,
    max_width: f32,
}

impl StatsSurface {
    fn new(viewport: Viewport) -> Self {
        Self {
            viewport,
            ..Default::default()
        }
    }

    fn check(&mut self, p: Vec2) {
        if !p.is_finite() || !self.viewport.contains(p) {
            self.out_of_bounds += 1;
        }
    }
}

impl DrawSurface for StatsSurface {
    fn size(&self) -> Viewport {
        self.viewport
    }

    fn fill_rect(&mut self, _rect: Rect, _paint: &Color) {
        if self.glow.is_some() {
            self.leaked_glow += 1;
        }
        self.overlays += 1;
    }

    fn begin_path(&mut self) {
        if self.glow.is_some() {
            self.leaked_glow += 1;
        }
    }

    fn set_glow(&mut self, glow: Option<Glow>) {
        self.glow = glow;
    }

    fn stroke_line(&mut self, from: Vec2, to: Vec2, _paint: &Color, width: f32) {
        self.check(from);
        self.check(to);
        self.max_width = self.max_width.max(width);
        self.strokes += 1;
    }

    fn fill_circle(&mut self, center: Vec2, _radius: f32, _paint: &Color) {
        self.check(center);
        self.dots += 1;
    }
}

fn env_or<T: FromStr>(name: &str, default: T) -> anyhow::Result<T>
where
    T::Err: std::error::Error + Send + Sync + 'static,
{
    match std::env::var(name) {
        Ok(v) => v
            .trim()
            .parse()
            .with_context(|| format!("{}=`{}`", name, v)),
        Err(_) => Ok(default),
    }
}

fn scripted_input(tick: u64) -> [PointerInput; 2] {
    let angle = tick as f32 * SCRIPT_ANGULAR_SPEED;
    let pos = VIEWPORT.centre() + Vec2::new(angle.cos(), angle.sin()) * SCRIPT_RADIUS;
    let press = if (tick / PRESS_TOGGLE_TICKS) % 2 == 1 {
        PointerInput::Press
    } else {
        PointerInput::Release
    };
    [PointerInput::Move(pos), press]
}

fn main() -> anyhow::Result<()> {
    env_logger::builder()
        .filter_level(log::LevelFilter::Info)
        .parse_default_env()
        .init();

    let ticks: u64 = env_or("TRAIL_TICKS", 600)?;
    let seed: u64 = env_or("TRAIL_SEED", 42)?;
    let realtime = env_or("TRAIL_REALTIME", 0u8)? != 0;

    let mut trail = TrailContext::new(TrailConfig::default(), VIEWPORT.centre(), seed)?;
    let mut surface = StatsSurface::new(VIEWPORT);
    let mut pointer = PointerState::at(VIEWPORT.centre());
    let interval = Duration::from_secs_f64(TICK_INTERVAL_MS / 1000.0);
    let started = Instant::now();

    log::info!(
        "[native] {} ticks, seed={}, realtime={}, {} particles",
        ticks,
        seed,
        realtime,
        trail.particles().len()
    );

    let mut min_scale = f32::MAX;
    let mut max_scale = f32::MIN;
    for tick in 0..ticks {
        let frame_start = Instant::now();
        for input in scripted_input(tick) {
            pointer.apply(&input);
        }
        trail.step(pointer, surface.size(), &mut surface);

        let scale = trail.orbit_scale().value();
        min_scale = min_scale.min(scale);
        max_scale = max_scale.max(scale);
        if tick % PRESS_TOGGLE_TICKS == PRESS_TOGGLE_TICKS - 1 {
            log::info!(
                "[native] tick={} scale={:.4} mode={:?}",
                tick + 1,
                scale,
                trail.orbit_scale().mode()
            );
        }

        if realtime {
            if let Some(rest) = interval.checked_sub(frame_start.elapsed()) {
                thread::sleep(rest);
            }
        }
    }

    log::info!(
        "[native] done in {:.2?}: overlays={} strokes={} dots={} scale=[{:.4},{:.4}] width<={:.2}",
        started.elapsed(),
        surface.overlays,
        surface.strokes,
        surface.dots,
        min_scale,
        max_scale,
        surface.max_width
    );
    if surface.out_of_bounds > 0 || surface.leaked_glow > 0 {
        anyhow::bail!(
            "invariant violations: out_of_bounds={} leaked_glow={}",
            surface.out_of_bounds,
            surface.leaked_glow
        );
    }
    Ok(())
}
