//! Angle ↔ value mappings for the two slider arcs.
//!
//! Both arcs span `delta` radians. The alpha arc sits on the right,
//! centered on angle 0, and maps linearly. The value arc sits on the left,
//! centered on angle π, and straddles the `atan2` discontinuity there, so
//! its mapping is piecewise.

use std::f64::consts::{PI, TAU};

/// Alpha (in `[0, 1]` across the arc) at polar angle `angle`.
///
/// ```text
///   alpha = (angle + angleB) / delta
/// ```
///
/// Unclamped: angles outside the arc map outside `[0, 1]`.
pub fn alpha_value(angle: f64, angle_b: f64, delta: f64) -> f64 {
    (angle + angle_b) / delta
}

/// Inverse of [`alpha_value`]: the polar angle of a normalized alpha.
///
/// ```text
///   angle = (alpha − 0.5) × delta
/// ```
pub fn angle_from_alpha(value: f64, delta: f64) -> f64 {
    (value - 0.5) * delta
}

/// Brightness (in `[0, 1]` across the arc) at polar angle `angle`.
///
/// ```text
///   0 < angle ≤ angleA          → 1
///   −angleA ≤ angle < 0         → 0
///   angle ≤ 0                   → |angle + angleA| / delta
///   otherwise                   → (2π − |angle + angleA|) / delta
/// ```
///
/// The two flat regions cover the right half of the plane, so a drag that
/// leaves the arc towards the top pins brightness at 1 and towards the
/// bottom at 0. Not bijective there, by construction.
pub fn brightness_value(angle: f64, angle_a: f64, delta: f64) -> f64 {
    if angle > 0.0 && angle <= angle_a {
        return 1.0;
    }
    if angle < 0.0 && angle >= -angle_a {
        return 0.0;
    }
    let span = (angle + angle_a).abs();
    if angle <= 0.0 { span / delta } else { (TAU - span) / delta }
}

/// Polar angle of a brightness on the value arc, in `(−π, π]`.
///
/// The value arc is the alpha arc mirrored across the vertical axis.
pub fn angle_from_brightness(value: f64, delta: f64) -> f64 {
    let angle = PI - angle_from_alpha(value, delta);
    if angle > PI { angle - TAU } else { angle }
}
