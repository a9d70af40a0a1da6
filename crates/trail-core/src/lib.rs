//! Platform-free core of the particle-trail animation.
//!
//! A [`TrailContext`] owns a fixed [`ParticlePool`] and the shared
//! [`OrbitScale`]; front-ends feed it a pointer snapshot and a viewport once
//! per tick and hand it something that implements [`DrawSurface`].

pub mod color;
pub mod config;
pub mod constants;
pub mod error;
pub mod input;
pub mod particle;
pub mod scale;
pub mod surface;
pub mod trail;

pub use color::Color;
pub use config::TrailConfig;
pub use constants::*;
pub use error::{Result, TrailError};
pub use input::{single_touch, PointerInput, PointerState, TouchPoints};
pub use particle::{create_pool, Particle, ParticlePool};
pub use scale::{ease_toward, OrbitScale, ScaleMode};
pub use surface::{DrawCall, DrawSurface, Glow, GlowScope, Rect, RecordingSurface, Viewport};
pub use trail::{draw_particle, TrailContext};

pub use glam::Vec2;
