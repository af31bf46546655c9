//! Radial zone classification.
//!
//! Thresholds grow outward from the center and every ring is inclusive on
//! its inner side: a point exactly on `r²` belongs to the inner zone.

/// Functional region of the wheel a point falls into.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Zone {
    /// Outside the wheel, or in the gap between the two slider arcs.
    #[default]
    None,
    /// Hue/saturation disc.
    ColorDisc,
    /// Brightness arc on the left.
    ValueSlider,
    /// Transparency arc on the right.
    AlphaSlider,
    /// Ring around the disc or around a slider arc.
    Border,
}

impl Zone {
    /// Whether pressing in this zone starts a drag.
    pub const fn is_interactive(self) -> bool {
        matches!(self, Self::ColorDisc | Self::ValueSlider | Self::AlphaSlider)
    }
}

/// Classify a point given in polar form.
///
/// ```text
///   r₀ = wheelRadius
///   r₁ = r₀ + border          d² ≤ r₀²  → ColorDisc
///   r₂ = r₁ + slider          d² ≤ r₁²  → Border
///   r₃ = r₂ + border          d² ≤ r₂²  → ValueSlider  if |a| ≥ angleA
///                                          AlphaSlider  if |a| ≤ angleB
///                                          None         otherwise
///                             d² ≤ r₃²  → Border if |a| ≥ angleA or |a| ≤ angleB
///                             otherwise → None
/// ```
///
/// A zero `wheel_radius` (degenerate widget) classifies everything as
/// [`Zone::None`].
pub fn classify(
    squared_magnitude: i64,
    wheel_radius: i64,
    slider_width: i64,
    border_width: i64,
    angle_a: f64,
    angle_b: f64,
    angle: f64,
) -> Zone {
    if wheel_radius <= 0 {
        return Zone::None;
    }

    let angle = angle.abs();
    let on_arc = || angle >= angle_a || angle <= angle_b;

    let mut rad = wheel_radius;
    if squared_magnitude <= rad * rad {
        return Zone::ColorDisc;
    }

    rad += border_width;
    if squared_magnitude <= rad * rad {
        return Zone::Border;
    }

    rad += slider_width;
    if squared_magnitude <= rad * rad {
        if angle >= angle_a {
            return Zone::ValueSlider;
        }
        if angle <= angle_b {
            return Zone::AlphaSlider;
        }
        return Zone::None;
    }

    rad += border_width;
    if squared_magnitude <= rad * rad && on_arc() {
        return Zone::Border;
    }

    Zone::None
}
