//! The color wheel state: selected color, geometry, caches, and listeners.
//!
//! `ColorWheel` is the single owner of everything the engine computes.
//! Two derived values are cached:
//!
//! - the packed ARGB color, and
//! - the rasterized background ([`WheelBuffer`]).
//!
//! Both live in `OnceCell`s. A mutation that affects a cache resets its
//! cell; the next read recomputes it. [`ColorWheel::has_cached_color`] and
//! [`ColorWheel::has_cached_render`] expose the state of each cell.
//!
//! Single-threaded: every call runs to completion, listener fan-out
//! included, before it returns.

pub mod interaction;
pub mod notify;

use std::cell::OnceCell;
use std::sync::Weak;

pub use interaction::DragState;
pub use notify::{
    ChangeNotifier, ColorChangeEvent, ColorChangeListener, LatestColor, ListenerHandle,
};

use crate::color::{Argb, Hsba};
use crate::config::WheelConfig;
use crate::error::Result;
use crate::geometry::WheelGeometry;
use crate::math::clamp_byte;
use crate::render::{CursorOverlay, RenderParams, RenderSurface, WheelBuffer, render_wheel};

/// Interactive HSB color wheel with brightness and alpha sliders.
#[derive(Debug)]
pub struct ColorWheel {
    color: Hsba,
    geometry: WheelGeometry,
    cursor_radius: u32,
    slider_cursor_radius: u32,
    drag: DragState,
    packed: OnceCell<Argb>,
    background: OnceCell<WheelBuffer>,
    notifier: ChangeNotifier,
}

impl Default for ColorWheel {
    fn default() -> Self {
        Self::from_valid_config(&WheelConfig::default())
    }
}

impl ColorWheel {
    /// A zero-sized wheel with the default configuration, selecting opaque
    /// white. Call [`ColorWheel::resize`] before rendering.
    pub fn new() -> Self {
        Self::default()
    }

    /// A zero-sized wheel built from a host configuration.
    ///
    /// # Errors
    /// Returns the validation error if `config` is out of range.
    pub fn with_config(config: WheelConfig) -> Result<Self> {
        if let Err(e) = config.validate() {
            tracing::warn!("rejected wheel config: {e}");
            return Err(e);
        }
        Ok(Self::from_valid_config(&config))
    }

    fn from_valid_config(config: &WheelConfig) -> Self {
        Self {
            color: config.initial,
            geometry: WheelGeometry::new(
                0,
                config.slider_width,
                config.border_size,
                config.slider_angle(),
            ),
            cursor_radius: config.cursor_radius,
            slider_cursor_radius: config.slider_cursor_radius,
            drag: DragState::Idle,
            packed: OnceCell::new(),
            background: OnceCell::new(),
            notifier: ChangeNotifier::new(),
        }
    }

    // ── Cache transitions ───────────────────────────────────────────────────

    fn invalidate_color(&mut self) {
        self.packed.take();
    }

    fn invalidate_render(&mut self) {
        self.background.take();
    }

    /// Whether the packed color is currently cached.
    ///
    /// A color mutation clears it, but building the change event reads
    /// [`ColorWheel::color`] again. With at least one listener subscribed the
    /// cache is therefore already warm when the mutator returns.
    pub fn has_cached_color(&self) -> bool {
        self.packed.get().is_some()
    }

    /// Whether the rasterized background is currently cached.
    pub fn has_cached_render(&self) -> bool {
        self.background.get().is_some()
    }

    /// Store a new color, drop both caches, and notify listeners.
    ///
    /// The background is dropped on every color change, not only on
    /// brightness changes. Only brightness is baked into it, so skipping the
    /// rebuild for hue/saturation/alpha is a possible optimization.
    fn update_color(&mut self, color: Hsba) {
        debug_assert!(color.is_valid(), "unclamped color {color:?}");
        self.color = color;
        self.invalidate_color();
        self.invalidate_render();
        self.fire_color_changed();
    }

    /// Refills the packed-color cache when anyone is listening.
    fn fire_color_changed(&mut self) {
        if self.notifier.is_empty() {
            return;
        }
        let event = ColorChangeEvent {
            color: self.color(),
            hsba: self.color,
        };
        self.notifier.notify(&event);
    }

    // ── Color mutators ──────────────────────────────────────────────────────

    /// Set the hue, in turns. Clamped to `[0, 1]`; a full turn folds to 0.
    pub fn set_hue(&mut self, hue: f32) {
        let c = self.color;
        self.update_color(Hsba::new(hue, c.saturation(), c.brightness(), c.alpha().into()));
    }

    /// Set the saturation, clamped to `[0, 1]`.
    pub fn set_saturation(&mut self, saturation: f32) {
        let c = self.color;
        self.update_color(Hsba::new(c.hue(), saturation, c.brightness(), c.alpha().into()));
    }

    /// Set the brightness (HSB value), clamped to `[0, 1]`.
    pub fn set_brightness(&mut self, brightness: f32) {
        let c = self.color;
        self.update_color(Hsba::new(c.hue(), c.saturation(), brightness, c.alpha().into()));
    }

    /// Set the alpha, clamped to `[0, 255]`.
    pub fn set_alpha(&mut self, alpha: i32) {
        let c = self.color;
        self.update_color(Hsba::new(c.hue(), c.saturation(), c.brightness(), alpha));
    }

    /// Replace the red channel of the current RGB color.
    pub fn set_red(&mut self, red: i32) {
        let [_, g, b] = self.color.to_rgb();
        self.update_color(Hsba::from_rgba(clamp_byte(red), g, b, self.color.alpha()));
    }

    /// Replace the green channel of the current RGB color.
    pub fn set_green(&mut self, green: i32) {
        let [r, _, b] = self.color.to_rgb();
        self.update_color(Hsba::from_rgba(r, clamp_byte(green), b, self.color.alpha()));
    }

    /// Replace the blue channel of the current RGB color.
    pub fn set_blue(&mut self, blue: i32) {
        let [r, g, _] = self.color.to_rgb();
        self.update_color(Hsba::from_rgba(r, g, clamp_byte(blue), self.color.alpha()));
    }

    /// Set the color from RGB channels, keeping the current alpha.
    pub fn set_rgb(&mut self, red: i32, green: i32, blue: i32) {
        self.set_rgba(red, green, blue, self.color.alpha().into());
    }

    /// Set the color from RGBA channels, each clamped to `[0, 255]`.
    pub fn set_rgba(&mut self, red: i32, green: i32, blue: i32, alpha: i32) {
        self.update_color(Hsba::from_rgba(
            clamp_byte(red),
            clamp_byte(green),
            clamp_byte(blue),
            clamp_byte(alpha),
        ));
    }

    /// Set the color from HSB, keeping the current alpha.
    pub fn set_hsb(&mut self, hue: f32, saturation: f32, brightness: f32) {
        self.set_hsba(hue, saturation, brightness, self.color.alpha().into());
    }

    /// Set the color from HSB plus alpha, each clamped into range.
    pub fn set_hsba(&mut self, hue: f32, saturation: f32, brightness: f32, alpha: i32) {
        self.update_color(Hsba::new(hue, saturation, brightness, alpha));
    }

    /// Set the color from a packed value.
    pub fn set_argb(&mut self, color: Argb) {
        self.update_color(Hsba::from_argb(color));
    }

    // ── Geometry mutators ───────────────────────────────────────────────────

    /// The component was resized; the wheel fits the smaller side.
    pub fn resize(&mut self, width: u32, height: u32) {
        self.geometry.set_bounds(width, height);
        self.invalidate_render();
        tracing::debug!(
            "color wheel resized to {width}x{height} (wheel radius {})",
            self.geometry.wheel_radius()
        );
    }

    /// Set the half-angle between the vertical axis and the slider ends,
    /// in radians. Clamped to `[0, π/2)`.
    pub fn set_slider_angle(&mut self, theta: f64) {
        self.geometry.set_slider_angle(theta);
        self.invalidate_render();
    }

    /// Set the border thickness in pixels.
    pub fn set_border_size(&mut self, size: u32) {
        self.geometry.set_border_width(size);
        self.invalidate_render();
    }

    /// Set the slider thickness in pixels.
    pub fn set_slider_width(&mut self, width: u32) {
        self.geometry.set_slider_width(width);
        self.invalidate_render();
    }

    // ── Accessors ───────────────────────────────────────────────────────────

    pub fn hue(&self) -> f32 {
        self.color.hue()
    }

    pub fn saturation(&self) -> f32 {
        self.color.saturation()
    }

    /// Brightness, a.k.a. HSB value.
    pub fn brightness(&self) -> f32 {
        self.color.brightness()
    }

    /// `[hue, saturation, brightness]`.
    pub fn hsb(&self) -> [f32; 3] {
        self.color.hsb()
    }

    pub fn hsba(&self) -> Hsba {
        self.color
    }

    /// The selected color, packed. Cached until the next color change.
    pub fn color(&self) -> Argb {
        *self.packed.get_or_init(|| self.color.to_argb())
    }

    pub fn red(&self) -> u8 {
        self.color().red()
    }

    pub fn green(&self) -> u8 {
        self.color().green()
    }

    pub fn blue(&self) -> u8 {
        self.color().blue()
    }

    pub fn alpha(&self) -> u8 {
        self.color().alpha()
    }

    pub fn geometry(&self) -> &WheelGeometry {
        &self.geometry
    }

    /// Side of the square the wheel occupies.
    pub fn size(&self) -> u32 {
        self.geometry.size()
    }

    /// Slider half-angle in radians.
    pub fn slider_angle(&self) -> f64 {
        self.geometry.angles().theta()
    }

    pub fn border_size(&self) -> u32 {
        self.geometry.border_width()
    }

    pub fn slider_width(&self) -> u32 {
        self.geometry.slider_width()
    }

    // ── Rendering ───────────────────────────────────────────────────────────

    /// The rasterized background, re-rendered if the cache was dropped.
    pub fn render(&self) -> &WheelBuffer {
        self.background.get_or_init(|| {
            render_wheel(&RenderParams {
                geometry: self.geometry,
                brightness: self.color.brightness(),
            })
        })
    }

    /// Cursor overlays for the current color.
    pub fn cursors(&self) -> CursorOverlay {
        CursorOverlay::place(
            &self.geometry,
            &self.color,
            self.cursor_radius,
            self.slider_cursor_radius,
        )
    }

    /// Draw the full widget, background and cursors, at the surface origin.
    pub fn paint<S: RenderSurface + ?Sized>(&self, surface: &mut S) {
        self.render().blit(surface, 0, 0);
        self.cursors().paint(surface);
    }

    // ── Listeners ───────────────────────────────────────────────────────────

    /// Register a listener for color changes. See [`ChangeNotifier::subscribe`].
    pub fn subscribe<L: ColorChangeListener + 'static>(&mut self, listener: Weak<L>) -> bool {
        self.notifier.subscribe(listener)
    }

    /// Remove a listener. Unknown handles are ignored.
    pub fn unsubscribe<L: ColorChangeListener + 'static>(&mut self, listener: &Weak<L>) -> bool {
        self.notifier.unsubscribe(listener)
    }

    pub fn listener_count(&self) -> usize {
        self.notifier.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    const EPSILON: f32 = 1e-6;

    #[test]
    fn test_new_wheel_selects_opaque_white() {
        let w = ColorWheel::new();
        assert_eq!(w.color(), Argb::WHITE);
        assert_eq!(w.size(), 0);
        assert_eq!(w.drag_state(), DragState::Idle);
        assert!((w.slider_angle() - 15f64.to_radians()).abs() < 1e-12);
        assert_eq!(w.slider_width(), 10);
        assert_eq!(w.border_size(), 1);
    }

    #[test]
    fn test_set_rgba_red() {
        let mut w = ColorWheel::new();
        w.set_rgba(255, 0, 0, 255);
        assert_eq!(w.hue(), 0.0);
        assert_eq!(w.saturation(), 1.0);
        assert_eq!(w.brightness(), 1.0);
        assert_eq!(w.alpha(), 255);
    }

    #[test]
    fn test_set_hsb_cyan() {
        let mut w = ColorWheel::new();
        w.set_hsb(0.5, 1.0, 1.0);
        let c = w.color();
        assert_eq!((c.red(), c.green(), c.blue(), c.alpha()), (0, 255, 255, 255));
    }

    #[test]
    fn test_setters_clamp() {
        let mut w = ColorWheel::new();
        w.set_saturation(4.0);
        assert_eq!(w.saturation(), 1.0);
        w.set_brightness(-1.0);
        assert_eq!(w.brightness(), 0.0);
        w.set_alpha(999);
        assert_eq!(w.alpha(), 255);
        w.set_alpha(-3);
        assert_eq!(w.alpha(), 0);
        w.set_hue(1.0);
        assert_eq!(w.hue(), 0.0);
        w.set_hue(f32::NAN);
        assert_eq!(w.hue(), 0.0);
    }

    #[test]
    fn test_channel_setters_replace_one_channel() {
        let mut w = ColorWheel::new();
        w.set_rgb(10, 20, 30);
        w.set_green(200);
        assert_eq!((w.red(), w.green(), w.blue()), (10, 200, 30));
        w.set_red(-5);
        assert_eq!(w.red(), 0);
        w.set_blue(300);
        assert_eq!(w.blue(), 255);
    }

    #[test]
    fn test_set_rgb_keeps_alpha() {
        let mut w = ColorWheel::new();
        w.set_alpha(90);
        w.set_rgb(1, 2, 3);
        assert_eq!(w.alpha(), 90);
        w.set_hsb(0.2, 0.2, 0.2);
        assert_eq!(w.alpha(), 90);
    }

    #[test]
    fn test_set_argb_roundtrips() {
        let mut w = ColorWheel::new();
        w.set_argb(Argb::new(0, 128, 255, 64));
        assert_eq!(w.color(), Argb::new(0, 128, 255, 64));
        assert!((w.hsb()[2] - 1.0).abs() < EPSILON);
    }

    #[test]
    fn test_color_change_drops_packed_cache() {
        let mut w = ColorWheel::new();
        let _ = w.color();
        assert!(w.has_cached_color());
        w.set_hue(0.3);
        assert!(!w.has_cached_color());
        // Recomputed lazily, and never stale.
        assert_eq!(w.color(), w.hsba().to_argb());
        assert!(w.has_cached_color());
    }

    #[test]
    fn test_listener_rewarms_packed_cache() {
        let mut w = ColorWheel::new();
        w.set_hue(0.2);
        assert!(!w.has_cached_color(), "no listener, nothing read the color");

        let latest = Arc::new(LatestColor::new());
        w.subscribe(Arc::downgrade(&latest));
        w.set_hue(0.4);
        assert!(w.has_cached_color(), "the event read the packed color");
        assert_eq!(latest.latest().map(|e| e.color), Some(w.hsba().to_argb()));

        w.unsubscribe(&Arc::downgrade(&latest));
        w.set_hue(0.6);
        assert!(!w.has_cached_color());
    }

    #[test]
    fn test_render_cache_lifecycle() {
        let mut w = ColorWheel::new();
        w.resize(50, 80);
        assert!(!w.has_cached_render());
        let size = w.render().size();
        assert_eq!(size, 50);
        assert!(w.has_cached_render());

        w.set_brightness(0.5);
        assert!(!w.has_cached_render(), "brightness is baked into the disc");
        let _ = w.render();
        w.set_hue(0.7);
        assert!(!w.has_cached_render());
        let _ = w.render();
        w.set_slider_width(4);
        assert!(!w.has_cached_render());
        let _ = w.render();
        w.set_border_size(2);
        assert!(!w.has_cached_render());
        let _ = w.render();
        w.set_slider_angle(0.2);
        assert!(!w.has_cached_render());
        let _ = w.render();
        w.resize(60, 60);
        assert!(!w.has_cached_render());
    }

    #[test]
    fn test_geometry_change_keeps_packed_cache() {
        let mut w = ColorWheel::new();
        let _ = w.color();
        w.set_slider_width(3);
        w.resize(10, 10);
        assert!(w.has_cached_color());
    }

    #[test]
    fn test_render_snapshot_matches_state() {
        let mut w = ColorWheel::new();
        w.resize(64, 64);
        w.set_brightness(0.25);
        let params = *w.render().params();
        assert_eq!(params.brightness, 0.25);
        assert_eq!(params.geometry, *w.geometry());
    }

    #[test]
    fn test_every_color_mutation_notifies_once() {
        let latest = Arc::new(LatestColor::new());
        let mut w = ColorWheel::new();
        assert!(w.subscribe(Arc::downgrade(&latest)));

        w.set_hue(0.1);
        w.set_saturation(0.2);
        w.set_brightness(0.3);
        w.set_alpha(40);
        w.set_red(1);
        w.set_green(2);
        w.set_blue(3);
        w.set_rgb(4, 5, 6);
        w.set_rgba(7, 8, 9, 10);
        w.set_hsb(0.1, 0.1, 0.1);
        w.set_hsba(0.2, 0.2, 0.2, 20);
        w.set_argb(Argb::WHITE);
        assert_eq!(latest.count(), 12);
        assert_eq!(latest.latest().map(|e| e.color), Some(Argb::WHITE));
    }

    #[test]
    fn test_geometry_mutation_does_not_notify() {
        let latest = Arc::new(LatestColor::new());
        let mut w = ColorWheel::new();
        w.subscribe(Arc::downgrade(&latest));
        w.resize(100, 100);
        w.set_slider_angle(0.1);
        w.set_border_size(3);
        w.set_slider_width(7);
        assert_eq!(latest.count(), 0);
    }

    #[test]
    fn test_event_carries_new_color() {
        let latest = Arc::new(LatestColor::new());
        let mut w = ColorWheel::new();
        w.subscribe(Arc::downgrade(&latest));
        w.set_rgba(0, 0, 255, 128);
        let e = latest.latest().unwrap();
        assert_eq!(e.color, Argb::new(0, 0, 255, 128));
        assert_eq!(e.hsba, w.hsba());
    }

    #[test]
    fn test_with_config_rejects_bad_angle() {
        let config = WheelConfig {
            slider_angle_degrees: 95.0,
            ..WheelConfig::default()
        };
        assert!(ColorWheel::with_config(config).is_err());
    }

    #[test]
    fn test_with_config_applies_settings() {
        let config = WheelConfig {
            slider_width: 6,
            border_size: 2,
            slider_angle_degrees: 30.0,
            initial: Hsba::new(0.5, 1.0, 1.0, 200),
            ..WheelConfig::default()
        };
        let w = ColorWheel::with_config(config).unwrap();
        assert_eq!(w.slider_width(), 6);
        assert_eq!(w.border_size(), 2);
        assert!((w.slider_angle() - 30f64.to_radians()).abs() < 1e-12);
        assert_eq!(w.color(), Argb::new(0, 255, 255, 200));
    }

    #[test]
    fn test_paint_composes_background_and_cursors() {
        let mut w = ColorWheel::new();
        w.resize(200, 200);
        w.set_hsb(0.0, 0.0, 1.0);
        let mut surface = image::RgbaImage::new(200, 200);
        w.paint(&mut surface);
        // Color ring (radius 5) around the white center is black.
        assert_eq!(surface.get_pixel(105, 100).0, Argb::BLACK.to_rgba8());
        // Inside the ring the disc shows through.
        assert_eq!(surface.get_pixel(100, 100).0, Argb::WHITE.to_rgba8());
    }
}
