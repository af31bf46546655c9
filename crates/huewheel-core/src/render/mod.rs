//! Rasterization of the wheel background: color disc, sliders, and borders.
//!
//! # Algorithm
//! For every pixel `(x, y)` of the `size × size` square:
//! ```text
//!   nx = x − radius,  ny = radius − y          (y up)
//!   d² = nx² + ny²,   a = atan2(ny, nx)
//!   zone = classify(d², …, a)
//!
//!   ColorDisc   → HSB(a / 2π, √d² / wheelRadius, brightness), opaque
//!   ValueSlider → gray n = ⌊255 × value(a)⌋ mod 255, opaque
//!   AlphaSlider → black with alpha = round(255 × alpha(a))
//!   Border      → #303030, opaque
//!   None        → transparent
//! ```
//!
//! The current hue, saturation, and alpha are not part of the background:
//! they are shown by the cursor overlays in [`cursor`].
//!
//! # Complexity
//! O(size²). This is the expensive step, so the owning wheel caches the
//! result and only re-rasterizes after an invalidation.

pub mod cursor;

use image::{Rgba, RgbaImage};

use crate::color::{Argb, hsb_to_rgb, hue_from_angle};
use crate::geometry::slider::{alpha_value, brightness_value};
use crate::geometry::{WheelGeometry, Zone};
use crate::math::{clamp, clamp_byte, clamp_unit};

pub use cursor::{Cursor, CursorOverlay};

/// A pixel target the wheel can be drawn onto.
///
/// This is all the engine needs from a host rendering surface.
pub trait RenderSurface {
    /// Current surface size as `(width, height)`.
    fn size(&self) -> (u32, u32);

    /// Overwrite one pixel. Callers stay within [`RenderSurface::size`].
    fn set_pixel(&mut self, x: u32, y: u32, color: Argb);
}

impl RenderSurface for RgbaImage {
    fn size(&self) -> (u32, u32) {
        self.dimensions()
    }

    fn set_pixel(&mut self, x: u32, y: u32, color: Argb) {
        self.put_pixel(x, y, Rgba(color.to_rgba8()));
    }
}

/// Everything the background raster depends on.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RenderParams {
    pub geometry: WheelGeometry,
    pub brightness: f32,
}

/// A rasterized wheel background.
///
/// Row-major, `size × size` packed ARGB pixels, plus the parameters it
/// was generated from.
#[derive(Debug, Clone, PartialEq)]
pub struct WheelBuffer {
    size: u32,
    pixels: Vec<Argb>,
    params: RenderParams,
}

impl WheelBuffer {
    /// Side of the square buffer.
    pub fn size(&self) -> u32 {
        self.size
    }

    pub fn pixels(&self) -> &[Argb] {
        &self.pixels
    }

    /// Pixel at `(x, y)`, or `None` outside the buffer.
    pub fn pixel(&self, x: u32, y: u32) -> Option<Argb> {
        if x >= self.size || y >= self.size {
            return None;
        }
        self.pixels.get((y as usize) * (self.size as usize) + x as usize).copied()
    }

    /// Raw view of the pixels as native-endian `u32` words.
    pub fn as_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.pixels)
    }

    /// The snapshot this buffer was rendered from.
    pub fn params(&self) -> &RenderParams {
        &self.params
    }

    /// Whether every pixel is fully transparent.
    pub fn is_blank(&self) -> bool {
        self.pixels.iter().all(|p| p.alpha() == 0)
    }

    /// Copy onto a surface at `(origin_x, origin_y)`, clipping to its bounds.
    pub fn blit<S: RenderSurface + ?Sized>(&self, surface: &mut S, origin_x: u32, origin_y: u32) {
        let (width, height) = surface.size();
        for y in 0..self.size {
            let sy = origin_y.saturating_add(y);
            if sy >= height {
                break;
            }
            for x in 0..self.size {
                let sx = origin_x.saturating_add(x);
                if sx >= width {
                    break;
                }
                let p = self.pixels[(y as usize) * (self.size as usize) + x as usize];
                surface.set_pixel(sx, sy, p);
            }
        }
    }

    /// Convert to an 8-bit RGBA image.
    pub fn to_rgba_image(&self) -> RgbaImage {
        let mut image = RgbaImage::new(self.size, self.size);
        self.blit(&mut image, 0, 0);
        image
    }
}

/// Rasterize the wheel background.
pub fn render_wheel(params: &RenderParams) -> WheelBuffer {
    let geometry = &params.geometry;
    let size = geometry.size();
    let wheel_radius = geometry.wheel_radius() as f64;
    let angles = geometry.angles();
    let brightness = clamp_unit(params.brightness);

    let mut pixels = Vec::with_capacity((size as usize) * (size as usize));
    let mut counts = [0usize; 5];

    for y in 0..i64::from(size) {
        for x in 0..i64::from(size) {
            let point = geometry.to_polar(x, y);
            let zone = geometry.classify(&point);

            let color = match zone {
                Zone::ColorDisc => {
                    counts[0] += 1;
                    let hue = hue_from_angle(point.angle);
                    let saturation = clamp_unit((point.magnitude() / wheel_radius) as f32);
                    let [r, g, b] = hsb_to_rgb(hue, saturation, brightness);
                    Argb::new(r, g, b, 255)
                }
                Zone::ValueSlider => {
                    counts[1] += 1;
                    let value = brightness_value(point.angle, angles.angle_a(), angles.delta());
                    let n = (255.0 * clamp(0.0, value, 1.0)).floor() as u32 % 255;
                    Argb::gray(n as u8)
                }
                Zone::AlphaSlider => {
                    counts[2] += 1;
                    let alpha = alpha_value(point.angle, angles.angle_b(), angles.delta());
                    Argb::new(0, 0, 0, clamp_byte((255.0 * alpha).round() as i32))
                }
                Zone::Border => {
                    counts[3] += 1;
                    Argb::BORDER
                }
                Zone::None => {
                    counts[4] += 1;
                    Argb::TRANSPARENT
                }
            };
            pixels.push(color);
        }
    }

    tracing::debug!(
        "rasterized color wheel {size}x{size}: disc={} value={} alpha={} border={} empty={}",
        counts[0],
        counts[1],
        counts[2],
        counts[3],
        counts[4]
    );

    WheelBuffer {
        size,
        pixels,
        params: *params,
    }
}
