//! Color representations: HSB with alpha, packed ARGB, and the conversions between them.

pub mod argb;
pub mod convert;

use std::f64::consts::TAU;

use palette::{Hsva, encoding};
use serde::{Deserialize, Serialize};

pub use argb::{Argb, pack_argb, unpack_argb};
pub use convert::{hsb_to_rgb, rgb_to_hsb};

use crate::math::{clamp, clamp_byte, clamp_unit};

/// A color in HSB form plus an 8-bit alpha.
///
/// Every constructor clamps, so a value obtained through the public API
/// always satisfies `hue ∈ [0, 1)`, `saturation, brightness ∈ [0, 1]`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Hsba {
    hue: f32,
    saturation: f32,
    brightness: f32,
    alpha: u8,
}

impl Default for Hsba {
    /// Opaque white: zero saturation at full brightness.
    fn default() -> Self {
        Self {
            hue: 0.0,
            saturation: 0.0,
            brightness: 1.0,
            alpha: 255,
        }
    }
}

impl Hsba {
    /// Build a color, clamping each component into range.
    pub fn new(hue: f32, saturation: f32, brightness: f32, alpha: i32) -> Self {
        Self {
            hue: normalize_hue(hue),
            saturation: clamp_unit(saturation),
            brightness: clamp_unit(brightness),
            alpha: clamp_byte(alpha),
        }
    }

    /// Build from 8-bit RGB channels.
    pub fn from_rgba(red: u8, green: u8, blue: u8, alpha: u8) -> Self {
        let [hue, saturation, brightness] = rgb_to_hsb(red, green, blue);
        Self::new(hue, saturation, brightness, alpha.into())
    }

    /// Build from a packed color.
    pub fn from_argb(color: Argb) -> Self {
        let (r, g, b, a) = unpack_argb(color.0);
        Self::from_rgba(r, g, b, a)
    }

    pub fn hue(&self) -> f32 {
        self.hue
    }

    pub fn saturation(&self) -> f32 {
        self.saturation
    }

    pub fn brightness(&self) -> f32 {
        self.brightness
    }

    pub fn alpha(&self) -> u8 {
        self.alpha
    }

    /// `[hue, saturation, brightness]`.
    pub fn hsb(&self) -> [f32; 3] {
        [self.hue, self.saturation, self.brightness]
    }

    /// 8-bit RGB of this color (alpha dropped).
    pub fn to_rgb(&self) -> [u8; 3] {
        hsb_to_rgb(self.hue, self.saturation, self.brightness)
    }

    /// Exact packed encoding of this color.
    pub fn to_argb(&self) -> Argb {
        let [r, g, b] = self.to_rgb();
        Argb::new(r, g, b, self.alpha)
    }

    /// Whether every component is inside its range.
    ///
    /// Only deserialized values can fail this.
    pub fn is_valid(&self) -> bool {
        (0.0..1.0).contains(&self.hue)
            && (0.0..=1.0).contains(&self.saturation)
            && (0.0..=1.0).contains(&self.brightness)
    }
}

/// Clamp a hue into `[0, 1)`, folding a full turn back onto 0.
pub fn normalize_hue(hue: f32) -> f32 {
    let hue = clamp_unit(hue);
    if hue >= 1.0 { 0.0 } else { hue }
}

/// Convert a polar angle from `atan2` (`[−π, π]`) into a hue in `[0, 1)`.
pub fn hue_from_angle(angle: f64) -> f32 {
    let turns = angle / TAU;
    let turns = if turns < 0.0 { turns + 1.0 } else { turns };
    // f32 rounding can push values just under 1.0 up to exactly 1.0.
    normalize_hue(clamp(0.0, turns, 1.0) as f32)
}

impl From<Hsba> for Hsva<encoding::Srgb, f32> {
    fn from(value: Hsba) -> Self {
        Hsva::new(
            value.hue * 360.0,
            value.saturation,
            value.brightness,
            value.alpha as f32 / 255.0,
        )
    }
}

impl From<Hsva<encoding::Srgb, f32>> for Hsba {
    fn from(value: Hsva<encoding::Srgb, f32>) -> Self {
        Self::new(
            value.color.hue.into_positive_degrees() / 360.0,
            value.color.saturation,
            value.color.value,
            (value.alpha * 255.0).round() as i32,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f64::consts::PI;

    const EPSILON: f32 = 1e-6;

    #[test]
    fn test_hsba_new_clamps_components() {
        let c = Hsba::new(1.5, -0.2, 2.0, 400);
        assert_eq!(c.hue(), 0.0, "hue 1.5 clamps to 1 and folds to 0");
        assert_eq!(c.saturation(), 0.0);
        assert_eq!(c.brightness(), 1.0);
        assert_eq!(c.alpha(), 255);
        assert!(c.is_valid());

        let c = Hsba::new(-3.0, 0.5, 0.5, -7);
        assert_eq!(c.hue(), 0.0);
        assert_eq!(c.alpha(), 0);
    }

    #[test]
    fn test_default_is_opaque_white() {
        assert_eq!(Hsba::default().to_argb(), Argb::WHITE);
    }

    #[test]
    fn test_from_rgba_red() {
        let c = Hsba::from_rgba(255, 0, 0, 255);
        assert_eq!(c.hue(), 0.0);
        assert_eq!(c.saturation(), 1.0);
        assert_eq!(c.brightness(), 1.0);
        assert_eq!(c.to_argb(), Argb(0xFFFF_0000));
    }

    #[test]
    fn test_from_argb_keeps_alpha() {
        let c = Hsba::from_argb(Argb::new(0, 255, 255, 77));
        assert!((c.hue() - 0.5).abs() < EPSILON);
        assert_eq!(c.alpha(), 77);
    }

    #[test]
    fn test_hue_from_angle_wraps_negative_angles() {
        assert_eq!(hue_from_angle(0.0), 0.0);
        assert!((hue_from_angle(PI / 2.0) - 0.25).abs() < EPSILON);
        assert!((hue_from_angle(-PI / 2.0) - 0.75).abs() < EPSILON);
        assert!((hue_from_angle(PI) - 0.5).abs() < EPSILON);
        assert!((hue_from_angle(-PI) - 0.5).abs() < EPSILON);
        assert!(hue_from_angle(-1e-12) < 1.0);
    }

    #[test]
    fn test_palette_conversion_preserves_components() {
        let c = Hsba::new(0.25, 0.5, 0.75, 128);
        let hsva: Hsva<encoding::Srgb, f32> = c.into();
        assert!((hsva.color.hue.into_positive_degrees() - 90.0).abs() < 1e-4);
        let back = Hsba::from(hsva);
        assert!((back.hue() - 0.25).abs() < EPSILON);
        assert!((back.saturation() - 0.5).abs() < EPSILON);
        assert!((back.brightness() - 0.75).abs() < EPSILON);
        assert_eq!(back.alpha(), 128);
    }

    #[test]
    fn test_deserialized_out_of_range_is_invalid() {
        let c: Hsba = serde_json::from_str(
            r#"{"hue": 1.2, "saturation": 0.5, "brightness": 0.5, "alpha": 255}"#,
        )
        .unwrap();
        assert!(!c.is_valid());
    }
}
