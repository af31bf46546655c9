//! Huewheel Core: the engine behind an HSB color wheel widget.
//!
//! A hue/saturation disc surrounded by two slider arcs, brightness on the
//! left and alpha on the right. This crate owns the color state, the zone
//! geometry, pointer interaction, and rasterization into an ARGB buffer.
//! Hosts supply a pixel surface and forward pointer events; no UI toolkit
//! dependencies.

pub mod color;
pub mod config;
pub mod error;
pub mod geometry;
pub mod math;
pub mod render;
pub mod wheel;

// Re-exports for convenience.
pub use color::{Argb, Hsba};
pub use config::WheelConfig;
pub use error::{Result, WheelError};
pub use geometry::{WheelGeometry, Zone};
pub use render::{CursorOverlay, RenderSurface, WheelBuffer, render_wheel};
pub use wheel::{ColorChangeEvent, ColorChangeListener, ColorWheel, DragState, LatestColor};
