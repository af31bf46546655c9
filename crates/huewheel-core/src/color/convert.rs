//! HSB (hue, saturation, brightness) ↔ 8-bit RGB conversion.
//!
//! Hue is measured in turns (`[0, 1)`), not degrees.
//!
//! # Formula
//! ```text
//!   C  = saturation × brightness
//!   H' = hue × 6
//!   X  = C × (1 − |H' mod 2 − 1|)
//!   m  = brightness − C
//!
//!   sextant ⌊H'⌋ : 0 → (C,X,0)  1 → (X,C,0)  2 → (0,C,X)
//!                  3 → (0,X,C)  4 → (X,0,C)  5 → (C,0,X)
//!   otherwise    : (0,0,0)
//!
//!   channel = round((channel₁ + m) × 255)
//! ```

use crate::math::clamp;

/// Convert an HSB triple to 8-bit RGB.
///
/// Pure and deterministic. `H' ≥ 6` or `H' < 0` selects the `(0,0,0)`
/// fallback sextant, leaving only the `m` term.
pub fn hsb_to_rgb(hue: f32, saturation: f32, brightness: f32) -> [u8; 3] {
    let (hue, saturation, brightness) = (hue as f64, saturation as f64, brightness as f64);

    let c = saturation * brightness;
    let h_prime = hue * 6.0;
    let x = c * (1.0 - (h_prime % 2.0 - 1.0).abs());
    let m = brightness - c;

    let (r1, g1, b1) = if (0.0..1.0).contains(&h_prime) {
        (c, x, 0.0)
    } else if (1.0..2.0).contains(&h_prime) {
        (x, c, 0.0)
    } else if (2.0..3.0).contains(&h_prime) {
        (0.0, c, x)
    } else if (3.0..4.0).contains(&h_prime) {
        (0.0, x, c)
    } else if (4.0..5.0).contains(&h_prime) {
        (x, 0.0, c)
    } else if (5.0..6.0).contains(&h_prime) {
        (c, 0.0, x)
    } else {
        (0.0, 0.0, 0.0)
    };

    [to_byte(r1 + m), to_byte(g1 + m), to_byte(b1 + m)]
}

/// Scale a unit channel to a byte, rounding half up.
fn to_byte(channel: f64) -> u8 {
    clamp(0.0, (channel * 255.0).round(), 255.0) as u8
}

/// Convert 8-bit RGB to an HSB triple.
///
/// ```text
///   V = max / 255
///   S = (max − min) / max        (0 when max = 0)
///   H = chroma sextant of the max channel, in turns, wrapped to [0, 1)
/// ```
///
/// Achromatic input (`max == min`) has hue 0.
pub fn rgb_to_hsb(red: u8, green: u8, blue: u8) -> [f32; 3] {
    let (r, g, b) = (red as f32, green as f32, blue as f32);
    let max = r.max(g).max(b);
    let min = r.min(g).min(b);
    let chroma = max - min;

    let brightness = max / 255.0;
    let saturation = if max > 0.0 { chroma / max } else { 0.0 };

    if chroma == 0.0 {
        return [0.0, saturation, brightness];
    }

    let red_c = (max - r) / chroma;
    let green_c = (max - g) / chroma;
    let blue_c = (max - b) / chroma;

    let sextant = if r == max {
        blue_c - green_c
    } else if g == max {
        2.0 + red_c - blue_c
    } else {
        4.0 + green_c - red_c
    };

    let mut hue = sextant / 6.0;

    if hue < 0.0 {
        hue += 1.0;
    }
    // -0.0 + 1.0 and rounding can both land exactly on 1.0.
    if hue >= 1.0 {
        hue -= 1.0;
    }

    [hue, saturation, brightness]
}
