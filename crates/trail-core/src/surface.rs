//! Drawing contract consumed by the loop.
//!
//! The loop only needs a handful of primitives; front-ends implement
//! [`DrawSurface`] over whatever they render to. [`RecordingSurface`] keeps a
//! log of calls and is what tests and the headless runner draw into.

use crate::color::Color;
use glam::Vec2;
use std::ops::{Deref, DerefMut};

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Viewport {
    pub width: f32,
    pub height: f32,
}

impl Viewport {
    pub const fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    pub fn centre(&self) -> Vec2 {
        Vec2::new(self.width * 0.5, self.height * 0.5)
    }

    /// Clamp a point into `[0, width] x [0, height]`. A negative extent collapses to 0.
    #[inline]
    pub fn clamp(&self, p: Vec2) -> Vec2 {
        Vec2::new(
            p.x.max(0.0).min(self.width.max(0.0)),
            p.y.max(0.0).min(self.height.max(0.0)),
        )
    }

    pub fn contains(&self, p: Vec2) -> bool {
        (0.0..=self.width).contains(&p.x) && (0.0..=self.height).contains(&p.y)
    }

    pub fn rect(&self) -> Rect {
        Rect {
            origin: Vec2::ZERO,
            size: Vec2::new(self.width, self.height),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Rect {
    pub origin: Vec2,
    pub size: Vec2,
}

/// Blur-style glow applied to strokes and fills while active.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Glow {
    pub blur: f32,
    pub color: Color,
}

pub trait DrawSurface {
    fn size(&self) -> Viewport;
    fn fill_rect(&mut self, rect: Rect, paint: &Color);
    fn begin_path(&mut self);
    fn set_glow(&mut self, glow: Option<Glow>);
    fn stroke_line(&mut self, from: Vec2, to: Vec2, paint: &Color, width: f32);
    fn fill_circle(&mut self, center: Vec2, radius: f32, paint: &Color);
}

/// Glow held for the lifetime of the scope and cleared on drop, so an early
/// return or panic between draw calls cannot leave the surface glowing.
pub struct GlowScope<'a, S: DrawSurface + ?Sized> {
    surface: &'a mut S,
}

impl<'a, S: DrawSurface + ?Sized> GlowScope<'a, S> {
    pub fn new(surface: &'a mut S, glow: Glow) -> Self {
        surface.set_glow(Some(glow));
        Self { surface }
    }
}

impl<S: DrawSurface + ?Sized> Deref for GlowScope<'_, S> {
    type Target = S;
    fn deref(&self) -> &S {
        &*self.surface
    }
}

impl<S: DrawSurface + ?Sized> DerefMut for GlowScope<'_, S> {
    fn deref_mut(&mut self) -> &mut S {
        &mut *self.surface
    }
}

impl<S: DrawSurface + ?Sized> Drop for GlowScope<'_, S> {
    fn drop(&mut self) {
        self.surface.set_glow(None);
    }
}

#[derive(Clone, Debug, PartialEq)]
pub enum DrawCall {
    FillRect {
        rect: Rect,
        paint: Color,
    },
    BeginPath,
    SetGlow(Option<Glow>),
    StrokeLine {
        from: Vec2,
        to: Vec2,
        paint: Color,
        width: f32,
        glow: Option<Glow>,
    },
    FillCircle {
        center: Vec2,
        radius: f32,
        paint: Color,
        glow: Option<Glow>,
    },
}

/// In-memory surface that logs every call together with the glow active at the time.
#[derive(Clone, Debug, Default)]
pub struct RecordingSurface {
    pub viewport: Viewport,
    pub calls: Vec<DrawCall>,
    glow: Option<Glow>,
}

impl RecordingSurface {
    pub fn new(viewport: Viewport) -> Self {
        Self {
            viewport,
            calls: Vec::new(),
            glow: None,
        }
    }

    pub fn resize(&mut self, viewport: Viewport) {
        self.viewport = viewport;
    }

    pub fn glow(&self) -> Option<Glow> {
        self.glow
    }

    pub fn clear(&mut self) {
        self.calls.clear();
    }
}

impl DrawSurface for RecordingSurface {
    fn size(&self) -> Viewport {
        self.viewport
    }

    fn fill_rect(&mut self, rect: Rect, paint: &Color) {
        self.calls.push(DrawCall::FillRect {
            rect,
            paint: *paint,
        });
    }

    fn begin_path(&mut self) {
        self.calls.push(DrawCall::BeginPath);
    }

    fn set_glow(&mut self, glow: Option<Glow>) {
        self.glow = glow;
        self.calls.push(DrawCall::SetGlow(glow));
    }

    fn stroke_line(&mut self, from: Vec2, to: Vec2, paint: &Color, width: f32) {
        self.calls.push(DrawCall::StrokeLine {
            from,
            to,
            paint: *paint,
            width,
            glow: self.glow,
        });
    }

    fn fill_circle(&mut self, center: Vec2, radius: f32, paint: &Color) {
        self.calls.push(DrawCall::FillCircle {
            center,
            radius,
            paint: *paint,
            glow: self.glow,
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn glow_scope_clears_on_drop() {
        let mut s = RecordingSurface::new(Viewport::new(10.0, 10.0));
        let glow = Glow {
            blur: 4.0,
            color: Color::rgb(1, 2, 3),
        };
        {
            let mut scoped = GlowScope::new(&mut s, glow);
            scoped.fill_circle(Vec2::ONE, 1.0, &Color::BLACK);
            assert_eq!(scoped.glow(), Some(glow));
        }
        assert_eq!(s.glow(), None);
        assert_eq!(s.calls.last(), Some(&DrawCall::SetGlow(None)));
    }

    #[test]
    fn clamp_handles_degenerate_viewport() {
        let vp = Viewport::new(0.0, 0.0);
        assert_eq!(vp.clamp(Vec2::new(5.0, -3.0)), Vec2::ZERO);
        let vp = Viewport::new(800.0, 600.0);
        assert_eq!(vp.clamp(Vec2::new(900.0, -1.0)), Vec2::new(800.0, 0.0));
        assert_eq!(vp.centre(), Vec2::new(400.0, 300.0));
    }
}
