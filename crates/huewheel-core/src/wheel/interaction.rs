//! Pointer protocol: press picks a zone, drag keeps updating that zone's
//! parameter, release ends the drag.
//!
//! The zone is chosen once, on press. Dragging never reclassifies, so the
//! pointer may leave the disc or slider arc while the same parameter keeps
//! tracking it.

use crate::color::{Hsba, hue_from_angle};
use crate::geometry::slider::{alpha_value, brightness_value};
use crate::geometry::{PolarPoint, Zone};
use crate::math::{clamp, clamp_unit};

use super::ColorWheel;

/// What the pointer is currently adjusting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum DragState {
    #[default]
    Idle,
    DraggingColor,
    DraggingValue,
    DraggingAlpha,
}

impl DragState {
    /// Drag started by a press in `zone`. Borders and empty space start nothing.
    pub const fn from_zone(zone: Zone) -> Self {
        match zone {
            Zone::ColorDisc => Self::DraggingColor,
            Zone::ValueSlider => Self::DraggingValue,
            Zone::AlphaSlider => Self::DraggingAlpha,
            Zone::Border | Zone::None => Self::Idle,
        }
    }

    pub const fn is_dragging(self) -> bool {
        !matches!(self, Self::Idle)
    }
}

impl ColorWheel {
    /// Pointer pressed at buffer coordinates `(x, y)`.
    ///
    /// Starts a drag if the press lands on the disc or a slider and applies
    /// the first update immediately.
    pub fn pointer_down(&mut self, x: i32, y: i32) -> DragState {
        let point = self.geometry.to_polar(x.into(), y.into());
        let zone = self.geometry.classify(&point);
        self.drag = DragState::from_zone(zone);
        if zone.is_interactive() {
            self.apply_drag(&point);
        }
        self.drag
    }

    /// Pointer moved to `(x, y)` with the button held.
    ///
    /// Returns whether the color changed (and the wheel needs a repaint).
    pub fn pointer_drag(&mut self, x: i32, y: i32) -> bool {
        if !self.drag.is_dragging() {
            return false;
        }
        let point = self.geometry.to_polar(x.into(), y.into());
        self.apply_drag(&point)
    }

    /// Pointer released.
    pub fn pointer_up(&mut self) {
        self.drag = DragState::Idle;
    }

    pub fn drag_state(&self) -> DragState {
        self.drag
    }

    fn apply_drag(&mut self, point: &PolarPoint) -> bool {
        let angles = *self.geometry.angles();
        match self.drag {
            DragState::DraggingColor => {
                let wheel_radius = self.geometry.wheel_radius();
                if wheel_radius == 0 {
                    return false;
                }
                let hue = hue_from_angle(point.angle);
                let saturation = clamp_unit((point.magnitude() / wheel_radius as f64) as f32);
                let color = Hsba::new(
                    hue,
                    saturation,
                    self.color.brightness(),
                    self.color.alpha().into(),
                );
                self.update_color(color);
                true
            }
            DragState::DraggingValue => {
                let value = brightness_value(point.angle, angles.angle_a(), angles.delta());
                self.set_brightness(clamp_unit(value as f32));
                true
            }
            DragState::DraggingAlpha => {
                let alpha = alpha_value(point.angle, angles.angle_b(), angles.delta());
                self.set_alpha(clamp(0.0, (255.0 * alpha).round(), 255.0) as i32);
                true
            }
            DragState::Idle => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPSILON: f32 = 1e-5;

    /// 200×200 wheel: center (100, 100), disc radius 88, slider midline 94.
    fn wheel() -> ColorWheel {
        let mut wheel = ColorWheel::new();
        wheel.resize(200, 200);
        wheel
    }

    #[test]
    fn test_drag_state_from_zone() {
        assert_eq!(DragState::from_zone(Zone::ColorDisc), DragState::DraggingColor);
        assert_eq!(DragState::from_zone(Zone::ValueSlider), DragState::DraggingValue);
        assert_eq!(DragState::from_zone(Zone::AlphaSlider), DragState::DraggingAlpha);
        assert_eq!(DragState::from_zone(Zone::Border), DragState::Idle);
        assert_eq!(DragState::from_zone(Zone::None), DragState::Idle);
    }

    #[test]
    fn test_press_in_disc_sets_hue_and_saturation() {
        let mut w = wheel();
        // Straight up, half way to the rim.
        assert_eq!(w.pointer_down(100, 56), DragState::DraggingColor);
        assert!((w.hue() - 0.25).abs() < EPSILON, "hue {}", w.hue());
        assert!((w.saturation() - 0.5).abs() < EPSILON, "sat {}", w.saturation());
    }

    #[test]
    fn test_press_on_border_does_nothing() {
        let mut w = wheel();
        w.set_hsba(0.1, 0.2, 0.3, 40);
        assert_eq!(w.pointer_down(189, 100), DragState::Idle);
        assert!(!w.pointer_drag(100, 100));
        assert_eq!(w.hsba(), Hsba::new(0.1, 0.2, 0.3, 40));
    }

    #[test]
    fn test_press_outside_does_nothing() {
        let mut w = wheel();
        assert_eq!(w.pointer_down(0, 0), DragState::Idle);
        assert_eq!(w.pointer_down(-50, 900), DragState::Idle);
    }

    #[test]
    fn test_color_drag_outside_disc_saturates() {
        let mut w = wheel();
        w.pointer_down(100, 100);
        // Far to the left: hue 0.5, saturation pinned at 1.
        assert!(w.pointer_drag(-500, 100));
        assert_eq!(w.drag_state(), DragState::DraggingColor);
        assert!((w.hue() - 0.5).abs() < EPSILON);
        assert_eq!(w.saturation(), 1.0);
    }

    #[test]
    fn test_value_slider_middle_is_half_brightness() {
        let mut w = wheel();
        assert_eq!(w.pointer_down(6, 100), DragState::DraggingValue);
        assert!((w.brightness() - 0.5).abs() < EPSILON);
    }

    #[test]
    fn test_value_drag_past_top_pins_full_brightness() {
        let mut w = wheel();
        w.pointer_down(6, 100);
        // Over to the upper right quadrant: flat region → 1.
        w.pointer_drag(180, 20);
        assert_eq!(w.brightness(), 1.0);
        // Lower right quadrant → 0.
        w.pointer_drag(180, 180);
        assert_eq!(w.brightness(), 0.0);
    }

    #[test]
    fn test_alpha_slider_middle_is_half_alpha() {
        let mut w = wheel();
        assert_eq!(w.pointer_down(194, 100), DragState::DraggingAlpha);
        assert!((127..=128).contains(&w.alpha()), "alpha {}", w.alpha());
    }

    #[test]
    fn test_alpha_drag_is_clamped() {
        let mut w = wheel();
        w.pointer_down(194, 100);
        // Straight down, below the arc's lower end.
        w.pointer_drag(100, 300);
        assert_eq!(w.alpha(), 0);
        // Straight up, above the arc's upper end.
        w.pointer_drag(100, -300);
        assert_eq!(w.alpha(), 255);
    }

    #[test]
    fn test_release_returns_to_idle() {
        let mut w = wheel();
        w.pointer_down(100, 100);
        w.pointer_up();
        assert_eq!(w.drag_state(), DragState::Idle);
        let before = w.hsba();
        assert!(!w.pointer_drag(150, 150));
        assert_eq!(w.hsba(), before);
    }

    #[test]
    fn test_degenerate_wheel_ignores_presses() {
        let mut w = ColorWheel::new();
        w.resize(0, 0);
        assert_eq!(w.pointer_down(0, 0), DragState::Idle);
    }
}
