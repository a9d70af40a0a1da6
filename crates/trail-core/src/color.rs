use crate::constants::{COLOR_BASE, COLOR_SPAN};
use crate::error::{Result, TrailError};
use rand::Rng;
use std::fmt;

/// 8-bit RGB colour with a floating point alpha, formatted the way the Canvas API expects.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: f32,
}

impl Color {
    pub const BLACK: Color = Color::rgb(0, 0, 0);

    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 1.0 }
    }

    pub const fn rgba(r: u8, g: u8, b: u8, a: f32) -> Self {
        Self { r, g, b, a }
    }

    /// Unpack a `0xRRGGBB` value.
    pub const fn from_packed(rgb: u32) -> Self {
        Self::rgb((rgb >> 16) as u8, (rgb >> 8) as u8, rgb as u8)
    }

    pub const fn packed(&self) -> u32 {
        ((self.r as u32) << 16) | ((self.g as u32) << 8) | self.b as u32
    }

    pub const fn with_alpha(self, a: f32) -> Self {
        Self { a, ..self }
    }

    /// Parse `#rrggbb` or the `#rgb` shorthand.
    pub fn from_hex(s: &str) -> Result<Self> {
        let invalid = || TrailError::InvalidColor(s.to_string());
        let digits = s.strip_prefix('#').ok_or_else(invalid)?;
        if !digits.chars().all(|c| c.is_ascii_hexdigit()) {
            return Err(invalid());
        }
        match digits.len() {
            6 => {
                let v = u32::from_str_radix(digits, 16).map_err(|_| invalid())?;
                Ok(Self::from_packed(v))
            }
            3 => {
                let v = u16::from_str_radix(digits, 16).map_err(|_| invalid())?;
                let expand = |n: u16| ((n & 0xF) as u8) * 0x11;
                Ok(Self::rgb(expand(v >> 8), expand(v >> 4), expand(v)))
            }
            _ => Err(invalid()),
        }
    }

    /// Random light colour: one packed value in `[COLOR_BASE, COLOR_BASE + COLOR_SPAN)`.
    ///
    /// Sampling the packed integer rather than each channel lets carries bleed
    /// between channels, which keeps the palette slightly uneven.
    pub fn random_light<R: Rng + ?Sized>(rng: &mut R) -> Self {
        Self::from_packed(COLOR_BASE + rng.gen_range(0..COLOR_SPAN))
    }

    /// `#rrggbb` when opaque, `rgba(r,g,b,a)` otherwise.
    pub fn to_css(&self) -> String {
        if self.a >= 1.0 {
            format!("#{:06x}", self.packed())
        } else {
            format!("rgba({},{},{},{})", self.r, self.g, self.b, self.a)
        }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_css())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn css_formatting() {
        assert_eq!(Color::rgb(0xaa, 0xbb, 0x0c).to_css(), "#aabb0c");
        assert_eq!(Color::rgba(0, 0, 0, 0.06).to_css(), "rgba(0,0,0,0.06)");
    }

    #[test]
    fn hex_parsing() {
        assert_eq!(Color::from_hex("#eeeeee").unwrap(), Color::rgb(0xee, 0xee, 0xee));
        assert_eq!(Color::from_hex("#9f0").unwrap(), Color::rgb(0x99, 0xff, 0x00));
        assert!(Color::from_hex("eeeeee").is_err());
        assert!(Color::from_hex("#eeee").is_err());
        assert!(Color::from_hex("#+12345").is_err());
        assert!(Color::from_hex("#gg0000").is_err());
    }

    #[test]
    fn random_light_stays_in_band() {
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..500 {
            let c = Color::random_light(&mut rng);
            let v = c.packed();
            assert!((COLOR_BASE..COLOR_BASE + COLOR_SPAN).contains(&v));
            assert_eq!(c.a, 1.0);
            assert_eq!(c.to_css().len(), 7);
        }
    }
}
