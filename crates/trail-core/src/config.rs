use crate::color::Color;
use crate::constants::*;
use crate::error::{Result, TrailError};

/// Runtime knobs for a trail context. `Default` reproduces the stock demo.
#[derive(Clone, Debug, PartialEq)]
pub struct TrailConfig {
    pub quantity: usize,
    pub base_radius: f32,
    pub min_scale: f32,
    pub max_scale: f32,
    pub scale_ease_rate: f32,
    pub size_ease_rate: f32,
    pub glow_blur_factor: f32,
    pub fade: Color,
}

impl Default for TrailConfig {
    fn default() -> Self {
        let [r, g, b] = TRAIL_FADE_RGB;
        Self {
            quantity: QUANTITY,
            base_radius: BASE_RADIUS,
            min_scale: MIN_SCALE,
            max_scale: MAX_SCALE,
            scale_ease_rate: SCALE_EASE_RATE,
            size_ease_rate: SIZE_EASE_RATE,
            glow_blur_factor: GLOW_BLUR_FACTOR,
            fade: Color::rgba(r, g, b, TRAIL_FADE_ALPHA),
        }
    }
}

impl TrailConfig {
    pub fn validate(&self) -> Result<()> {
        if !self.base_radius.is_finite() || self.base_radius < 0.0 {
            return Err(TrailError::InvalidConfig("base_radius must be finite and >= 0"));
        }
        if !(self.min_scale.is_finite() && self.max_scale.is_finite()) {
            return Err(TrailError::InvalidConfig("scale bounds must be finite"));
        }
        if self.min_scale > self.max_scale {
            return Err(TrailError::InvalidConfig("min_scale exceeds max_scale"));
        }
        for rate in [self.scale_ease_rate, self.size_ease_rate] {
            if !(rate > 0.0 && rate <= 1.0) {
                return Err(TrailError::InvalidConfig("ease rates must lie in (0, 1]"));
            }
        }
        if !(0.0..=1.0).contains(&self.fade.a) {
            return Err(TrailError::InvalidConfig("fade alpha must lie in [0, 1]"));
        }
        if !self.glow_blur_factor.is_finite() || self.glow_blur_factor < 0.0 {
            return Err(TrailError::InvalidConfig("glow_blur_factor must be finite and >= 0"));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_valid() {
        assert_eq!(TrailConfig::default().validate(), Ok(()));
    }

    #[test]
    fn rejects_bad_values() {
        let inverted = TrailConfig {
            min_scale: 2.0,
            max_scale: 1.0,
            ..Default::default()
        };
        assert!(inverted.validate().is_err());

        let stalled = TrailConfig {
            scale_ease_rate: 0.0,
            ..Default::default()
        };
        assert!(stalled.validate().is_err());

        let nan_radius = TrailConfig {
            base_radius: f32::NAN,
            ..Default::default()
        };
        assert!(nan_radius.validate().is_err());

        let opaque_overlay = TrailConfig {
            fade: Color::rgba(0, 0, 0, 1.5),
            ..Default::default()
        };
        assert!(opaque_overlay.validate().is_err());
    }
}
