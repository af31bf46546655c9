//! Cursor overlays drawn on top of the cached background.
//!
//! Hue and saturation are shown by a ring on the color disc, brightness and
//! alpha by knobs on their slider arcs. Positions are in buffer pixels
//! (origin top-left, y down).

use glam::DVec2;

use crate::color::{Argb, Hsba};
use crate::geometry::WheelGeometry;
use crate::geometry::slider::{angle_from_alpha, angle_from_brightness};

use super::RenderSurface;

/// Default radius of the hue/saturation ring.
pub const DEFAULT_CURSOR_RADIUS: u32 = 5;

/// Default radius of the slider knobs.
pub const DEFAULT_SLIDER_CURSOR_RADIUS: u32 = 10;

/// A circular cursor.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Cursor {
    pub center: DVec2,
    pub radius: f64,
}

impl Cursor {
    fn contains(&self, p: DVec2) -> bool {
        p.distance_squared(self.center) <= self.radius * self.radius
    }

    fn on_ring(&self, p: DVec2) -> bool {
        (p.distance(self.center) - self.radius).abs() <= 0.5
    }

    /// Visit every surface pixel whose center lies within `radius + 1`.
    fn for_each_pixel(&self, surface_size: (u32, u32), mut f: impl FnMut(u32, u32, DVec2)) {
        let reach = self.radius + 1.0;
        let min = (self.center - DVec2::splat(reach)).floor().max(DVec2::ZERO);
        let max = (self.center + DVec2::splat(reach))
            .ceil()
            .min(DVec2::new(surface_size.0 as f64 - 1.0, surface_size.1 as f64 - 1.0));
        if max.x < min.x || max.y < min.y {
            return;
        }
        for y in (min.y as u32)..=(max.y as u32) {
            for x in (min.x as u32)..=(max.x as u32) {
                f(x, y, DVec2::new(x as f64, y as f64));
            }
        }
    }
}

/// The three cursors for the current color.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CursorOverlay {
    /// Hue/saturation ring on the disc.
    pub color: Cursor,
    /// Knob on the value arc.
    pub value: Cursor,
    /// Knob on the alpha arc.
    pub alpha: Cursor,
    /// Outline color, chosen to stay visible against the disc.
    pub outline: Argb,
    /// Knob fill.
    pub knob_fill: Argb,
    /// Knob core, drawn at half the knob radius.
    pub knob_core: Argb,
}

impl CursorOverlay {
    /// Place the cursors for `color` on a wheel with `geometry`.
    ///
    /// ```text
    ///   color  = c + (cos 2πh, −sin 2πh) × s × wheelRadius
    ///   alpha  = c + (cos φ, −sin φ) × sliderMid     φ = angleFromAlpha(a / 255)
    ///   value  = c + (cos ψ, −sin ψ) × sliderMid     ψ = angleFromBrightness(b)
    /// ```
    pub fn place(
        geometry: &WheelGeometry,
        color: &Hsba,
        cursor_radius: u32,
        slider_cursor_radius: u32,
    ) -> Self {
        let center = DVec2::splat(geometry.radius() as f64);
        let delta = geometry.angles().delta();
        let mid = geometry.slider_mid_radius();

        let hue_angle = f64::from(color.hue()) * std::f64::consts::TAU;
        let reach = f64::from(color.saturation()) * geometry.wheel_radius() as f64;
        let alpha_angle = angle_from_alpha(f64::from(color.alpha()) / 255.0, delta);
        let value_angle = angle_from_brightness(f64::from(color.brightness()), delta);

        let knob = f64::from(slider_cursor_radius);
        Self {
            color: Cursor {
                center: center + screen_dir(hue_angle) * reach,
                radius: f64::from(cursor_radius),
            },
            value: Cursor {
                center: center + screen_dir(value_angle) * mid,
                radius: knob,
            },
            alpha: Cursor {
                center: center + screen_dir(alpha_angle) * mid,
                radius: knob,
            },
            outline: outline_for(color.brightness()),
            knob_fill: Argb::LIGHT_GRAY,
            knob_core: Argb::GRAY,
        }
    }

    /// Draw the cursors onto a surface that already holds the background.
    pub fn paint<S: RenderSurface + ?Sized>(&self, surface: &mut S) {
        let size = surface.size();
        for knob in [self.alpha, self.value] {
            let core = Cursor {
                radius: knob.radius / 2.0,
                ..knob
            };
            knob.for_each_pixel(size, |x, y, p| {
                if knob.on_ring(p) {
                    surface.set_pixel(x, y, self.outline);
                } else if core.contains(p) {
                    surface.set_pixel(x, y, self.knob_core);
                } else if knob.contains(p) {
                    surface.set_pixel(x, y, self.knob_fill);
                }
            });
        }
        let ring = self.color;
        ring.for_each_pixel(size, |x, y, p| {
            if ring.on_ring(p) {
                surface.set_pixel(x, y, self.outline);
            }
        });
    }
}

/// Unit vector for a math-convention angle, in screen space (y down).
fn screen_dir(angle: f64) -> DVec2 {
    DVec2::new(angle.cos(), -angle.sin())
}

/// White on dark colors, black on light ones.
pub fn outline_for(brightness: f32) -> Argb {
    if brightness < 0.5 { Argb::WHITE } else { Argb::BLACK }
}
