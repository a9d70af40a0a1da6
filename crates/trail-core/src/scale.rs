//! Shared orbit-radius multiplier and its press-driven easing.

use crate::constants::{MAX_SCALE, MIN_SCALE, SCALE_EASE_RATE};

/// Easing direction. Pressing the pointer expands orbits, releasing contracts them.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ScaleMode {
    Expanding,
    #[default]
    Contracting,
}

impl ScaleMode {
    #[inline]
    pub fn from_pressed(down: bool) -> Self {
        if down {
            ScaleMode::Expanding
        } else {
            ScaleMode::Contracting
        }
    }
}

/// One step of the exponential approach of `value` toward `target`.
#[inline]
pub fn ease_toward(value: f32, target: f32, rate: f32) -> f32 {
    value + (target - value) * rate
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct OrbitScale {
    value: f32,
    mode: ScaleMode,
    min: f32,
    max: f32,
    rate: f32,
}

impl Default for OrbitScale {
    fn default() -> Self {
        Self::new(MIN_SCALE, MAX_SCALE, SCALE_EASE_RATE)
    }
}

impl OrbitScale {
    /// Starts at rest (`min`, contracting).
    pub fn new(min: f32, max: f32, rate: f32) -> Self {
        Self {
            value: min,
            mode: ScaleMode::Contracting,
            min,
            max,
            rate,
        }
    }

    #[inline]
    pub fn value(&self) -> f32 {
        self.value
    }

    #[inline]
    pub fn mode(&self) -> ScaleMode {
        self.mode
    }

    pub fn target(&self) -> f32 {
        match self.mode {
            ScaleMode::Expanding => self.max,
            ScaleMode::Contracting => self.min,
        }
    }

    /// Switch mode from the press state, ease one tick and clamp into `[min, max]`.
    pub fn update(&mut self, down: bool) -> f32 {
        let mode = ScaleMode::from_pressed(down);
        if mode != self.mode {
            log::debug!("[scale] {:?} -> {:?} at {:.4}", self.mode, mode, self.value);
            self.mode = mode;
        }
        self.value = ease_toward(self.value, self.target(), self.rate).clamp(self.min, self.max);
        self.value
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mode_follows_press() {
        let mut s = OrbitScale::default();
        assert_eq!(s.mode(), ScaleMode::Contracting);
        s.update(true);
        assert_eq!(s.mode(), ScaleMode::Expanding);
        assert_eq!(s.target(), MAX_SCALE);
        s.update(false);
        assert_eq!(s.mode(), ScaleMode::Contracting);
        assert_eq!(s.target(), MIN_SCALE);
    }

    #[test]
    fn first_expanding_step_matches_formula() {
        let mut s = OrbitScale::default();
        let v = s.update(true);
        assert!((v - (1.0 + 0.5 * 0.02)).abs() < 1e-6);
    }

    #[test]
    fn resting_scale_stays_put() {
        let mut s = OrbitScale::default();
        for _ in 0..10 {
            assert_eq!(s.update(false), MIN_SCALE);
        }
    }
}
