//! Saturating clamp shared by every setter in the crate.
//!
//! Out-of-range input is pinned to the nearest bound, never reported.

use std::cmp::Ordering;

/// Clamp `val` into `[min, max]`.
///
/// Works for integers and floats alike. An unordered value (a float NaN)
/// resolves to `min`, so the result is always inside the range and
/// `clamp(min, clamp(min, v, max), max) == clamp(min, v, max)`.
pub fn clamp<T: PartialOrd>(min: T, val: T, max: T) -> T {
    match val.partial_cmp(&min) {
        Some(Ordering::Less) | None => min,
        _ if val > max => max,
        _ => val,
    }
}

/// Clamp a float into the unit interval `[0, 1]`.
pub fn clamp_unit(val: f32) -> f32 {
    clamp(0.0, val, 1.0)
}

/// Clamp an integer into the byte range `[0, 255]`.
pub fn clamp_byte(val: i32) -> u8 {
    // Lossless after the clamp.
    clamp(0, val, 255) as u8
}
