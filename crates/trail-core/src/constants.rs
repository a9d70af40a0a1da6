// Tuning constants shared by the web and native front-ends.

// Pool
pub const QUANTITY: usize = 25; // particles per pool
pub const BASE_RADIUS: f32 = 70.0; // orbit radius upper bound, lower bound is half of it

// Orbit scale easing
pub const MIN_SCALE: f32 = 1.0; // resting multiplier
pub const MAX_SCALE: f32 = 1.5; // multiplier while the pointer is pressed
pub const SCALE_EASE_RATE: f32 = 0.02; // fraction of the remaining gap closed per tick

// Per-particle randomisation ranges (half-open)
pub const SPEED_MIN: f32 = 0.01;
pub const SPEED_MAX: f32 = 0.05;
pub const SIZE_MIN: f32 = 1.0;
pub const SIZE_MAX: f32 = 8.0;
pub const INITIAL_SIZE: f32 = 1.0;
pub const SIZE_EASE_RATE: f32 = 0.05;

// Colours are drawn from [COLOR_BASE, COLOR_BASE + COLOR_SPAN) as one packed 24-bit value
pub const COLOR_BASE: u32 = 0xAA_AAAA;
pub const COLOR_SPAN: u32 = 0x40_4040;

// Glow blur radius relative to the particle size
pub const GLOW_BLUR_FACTOR: f32 = 2.0;

// Trail persistence overlay, painted once per tick
pub const TRAIL_FADE_RGB: [u8; 3] = [0, 0, 0];
pub const TRAIL_FADE_ALPHA: f32 = 0.06;

// Scheduler cadence
pub const TICKS_PER_SECOND: u32 = 60;
pub const TICK_INTERVAL_MS: f64 = 1000.0 / TICKS_PER_SECOND as f64;
