//! Colour values and hex conversion

use serde::{Deserialize, Serialize};

/// RGB colour with channels in `0.0..=1.0`
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Rgb {
    pub r: f64,
    pub g: f64,
    pub b: f64,
}

impl Rgb {
    /// Create colour from unit channels
    #[inline]
    #[must_use]
    pub const fn new(r: f64, g: f64, b: f64) -> Self {
        Self { r, g, b }
    }

    /// Grey with all channels equal
    #[inline]
    #[must_use]
    pub const fn grey(v: f64) -> Self {
        Self::new(v, v, v)
    }

    /// White
    pub const WHITE: Self = Self::new(1.0, 1.0, 1.0);
    /// Black
    pub const BLACK: Self = Self::new(0.0, 0.0, 0.0);

    /// Uppercase `#RRGGBB` form
    ///
    /// Channels are scaled by 255, rounded and clamped, so out-of-range
    /// inputs still produce a well-formed string.
    #[must_use]
    pub fn to_hex(&self) -> String {
        format!(
            "#{:02X}{:02X}{:02X}",
            channel_byte(self.r),
            channel_byte(self.g),
            channel_byte(self.b)
        )
    }
}

fn channel_byte(v: f64) -> u8 {
    if v.is_nan() {
        return 0;
    }
    // clamped to 0..=255 before the cast
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    let byte = (v * 255.0).round().clamp(0.0, 255.0) as u8;
    byte
}

/// Whether `s` is an uppercase `#RRGGBB` string
#[must_use]
pub fn is_hex_color(s: &str) -> bool {
    s.len() == 7
        && s.starts_with('#')
        && s[1..]
            .chars()
            .all(|c| c.is_ascii_digit() || ('A'..='F').contains(&c))
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn hex_rounds_channels() {
        assert_eq!(Rgb::new(1.0, 0.0, 0.0).to_hex(), "#FF0000");
        assert_eq!(Rgb::new(0.043, 0.388, 0.965).to_hex(), "#0B63F6");
        assert_eq!(Rgb::grey(0.5).to_hex(), "#808080");
    }

    #[test]
    fn hex_clamps_out_of_range() {
        assert_eq!(Rgb::new(1.5, -0.2, f64::NAN).to_hex(), "#FF0000");
    }

    proptest! {
        #[test]
        fn to_hex_is_always_well_formed(r in -2.0f64..2.0, g in -2.0f64..2.0, b in -2.0f64..2.0) {
            prop_assert!(is_hex_color(&Rgb::new(r, g, b).to_hex()));
        }
    }
}
