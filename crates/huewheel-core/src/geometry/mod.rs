//! Wheel geometry: radii, slider arcs, and pixel → polar conversion.
//!
//! ```text
//!                  angleA        angleB
//!                     \    ┆    /
//!          value       \   ┆θ θ/      alpha
//!          slider  ─────(  disc  )─────  slider
//!                      /   ┆   \
//!                     /    ┆    \
//! ```
//!
//! The bounding square has side `size = min(width, height)`. From the
//! center outwards: color disc (`wheel_radius`), border, slider ring,
//! border. The slider ring is split by the half-angle `θ` measured from the
//! vertical axis: points with `|angle| ≥ angleA` belong to the value
//! slider on the left, points with `|angle| ≤ angleB` to the alpha slider
//! on the right.
//!
//! Angles follow the math convention (counter-clockwise, y up); pixel rows
//! grow downwards, so the y axis is flipped when converting.

pub mod slider;
pub mod zone;

use std::f64::consts::{FRAC_PI_2, PI};

use glam::I64Vec2;

pub use zone::{Zone, classify};

/// Default slider half-angle: 15°.
pub const DEFAULT_SLIDER_ANGLE: f64 = 15.0 * PI / 180.0;

/// Largest accepted slider half-angle. At `π/2` the arcs vanish and
/// `delta` becomes zero.
pub const MAX_SLIDER_ANGLE: f64 = FRAC_PI_2 - 1e-6;

/// Default slider thickness in pixels.
pub const DEFAULT_SLIDER_WIDTH: u32 = 10;

/// Default border thickness in pixels.
pub const DEFAULT_BORDER_WIDTH: u32 = 1;

/// The slider half-angle and the angles derived from it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SliderAngles {
    theta: f64,
    angle_a: f64,
    angle_b: f64,
    delta: f64,
}

impl SliderAngles {
    /// Derive the slider angles from a half-angle, clamped to
    /// `[0, MAX_SLIDER_ANGLE]`.
    ///
    /// ```text
    ///   angleA = π/2 + θ
    ///   angleB = π/2 − θ
    ///   delta  = 2 × (π − angleA)
    /// ```
    pub fn new(theta: f64) -> Self {
        let theta = crate::math::clamp(0.0, theta, MAX_SLIDER_ANGLE);
        let angle_a = FRAC_PI_2 + theta;
        Self {
            theta,
            angle_a,
            angle_b: FRAC_PI_2 - theta,
            delta: 2.0 * (PI - angle_a),
        }
    }

    /// Half-angle between the vertical axis and the slider ends.
    pub fn theta(&self) -> f64 {
        self.theta
    }

    /// Angle at which the value slider starts.
    pub fn angle_a(&self) -> f64 {
        self.angle_a
    }

    /// Angle at which the alpha slider ends.
    pub fn angle_b(&self) -> f64 {
        self.angle_b
    }

    /// Angular span of each slider arc.
    pub fn delta(&self) -> f64 {
        self.delta
    }
}

impl Default for SliderAngles {
    fn default() -> Self {
        Self::new(DEFAULT_SLIDER_ANGLE)
    }
}

/// A point relative to the wheel center.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PolarPoint {
    /// `nx² + ny²`, exact for any point a pointer can report and saturating
    /// beyond that.
    pub squared_magnitude: i64,
    /// `atan2(ny, nx)` in `[−π, π]`.
    pub angle: f64,
}

impl PolarPoint {
    /// Polar form of a vector from the center, y up.
    pub fn from_centered(centered: I64Vec2) -> Self {
        Self {
            squared_magnitude: centered
                .x
                .saturating_mul(centered.x)
                .saturating_add(centered.y.saturating_mul(centered.y)),
            angle: centered.as_dvec2().to_angle(),
        }
    }

    /// Distance from the center.
    pub fn magnitude(&self) -> f64 {
        (self.squared_magnitude as f64).sqrt()
    }
}

/// Authoritative geometry of one wheel.
///
/// Radii are derived on demand so they can never disagree with the
/// size and widths they come from.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WheelGeometry {
    size: u32,
    slider_width: u32,
    border_width: u32,
    angles: SliderAngles,
}

impl Default for WheelGeometry {
    fn default() -> Self {
        Self {
            size: 0,
            slider_width: DEFAULT_SLIDER_WIDTH,
            border_width: DEFAULT_BORDER_WIDTH,
            angles: SliderAngles::default(),
        }
    }
}

impl WheelGeometry {
    pub fn new(size: u32, slider_width: u32, border_width: u32, slider_angle: f64) -> Self {
        Self {
            size,
            slider_width,
            border_width,
            angles: SliderAngles::new(slider_angle),
        }
    }

    /// Side of the square the wheel is drawn in.
    pub fn size(&self) -> u32 {
        self.size
    }

    pub fn slider_width(&self) -> u32 {
        self.slider_width
    }

    pub fn border_width(&self) -> u32 {
        self.border_width
    }

    pub fn angles(&self) -> &SliderAngles {
        &self.angles
    }

    /// Outer radius: half the bounding square.
    pub fn radius(&self) -> i64 {
        i64::from(self.size / 2)
    }

    /// Radius of the color disc, never negative.
    ///
    /// ```text
    ///   wheelRadius = radius − sliderWidth − 2 × borderWidth
    /// ```
    pub fn wheel_radius(&self) -> i64 {
        let r = self.radius() - i64::from(self.slider_width) - 2 * i64::from(self.border_width);
        r.max(0)
    }

    /// Distance from the center to the middle of the slider ring, where the
    /// slider cursors sit.
    pub fn slider_mid_radius(&self) -> f64 {
        (self.wheel_radius() + i64::from(self.border_width)) as f64
            + f64::from(self.slider_width / 2)
    }

    /// Resize to fit a `width × height` component.
    pub fn set_bounds(&mut self, width: u32, height: u32) {
        self.size = width.min(height);
    }

    pub fn set_slider_width(&mut self, width: u32) {
        self.slider_width = width;
    }

    pub fn set_border_width(&mut self, width: u32) {
        self.border_width = width;
    }

    pub fn set_slider_angle(&mut self, theta: f64) {
        self.angles = SliderAngles::new(theta);
    }

    /// Center-relative vector of a pixel, with y pointing up.
    pub fn centered(&self, x: i64, y: i64) -> I64Vec2 {
        let r = self.radius();
        I64Vec2::new(x - r, r - y)
    }

    /// Polar form of a pixel position.
    pub fn to_polar(&self, x: i64, y: i64) -> PolarPoint {
        PolarPoint::from_centered(self.centered(x, y))
    }

    /// Zone of a point already in polar form.
    pub fn classify(&self, point: &PolarPoint) -> Zone {
        classify(
            point.squared_magnitude,
            self.wheel_radius(),
            i64::from(self.slider_width),
            i64::from(self.border_width),
            self.angles.angle_a,
            self.angles.angle_b,
            point.angle,
        )
    }

    /// Zone of a pixel position.
    pub fn zone_at(&self, x: i64, y: i64) -> Zone {
        self.classify(&self.to_polar(x, y))
    }
}
