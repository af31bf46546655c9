//! Host-supplied wheel configuration.
//!
//! Every field has a default, so a partial JSON object (or `{}`) is a valid
//! configuration.

use serde::{Deserialize, Serialize};

use crate::color::Hsba;
use crate::error::{Result, WheelError};
use crate::geometry::{DEFAULT_BORDER_WIDTH, DEFAULT_SLIDER_WIDTH};
use crate::render::cursor::{DEFAULT_CURSOR_RADIUS, DEFAULT_SLIDER_CURSOR_RADIUS};

/// Default slider half-angle, in degrees.
pub const DEFAULT_SLIDER_ANGLE_DEGREES: f64 = 15.0;

/// Construction-time settings for a [`ColorWheel`](crate::wheel::ColorWheel).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WheelConfig {
    /// Slider thickness in pixels.
    pub slider_width: u32,
    /// Border thickness in pixels.
    pub border_size: u32,
    /// Half-angle between the vertical axis and the slider ends, in degrees.
    pub slider_angle_degrees: f64,
    /// Radius of the hue/saturation ring cursor.
    pub cursor_radius: u32,
    /// Radius of the slider knobs.
    pub slider_cursor_radius: u32,
    /// Color selected before any interaction.
    pub initial: Hsba,
}

impl Default for WheelConfig {
    fn default() -> Self {
        Self {
            slider_width: DEFAULT_SLIDER_WIDTH,
            border_size: DEFAULT_BORDER_WIDTH,
            slider_angle_degrees: DEFAULT_SLIDER_ANGLE_DEGREES,
            cursor_radius: DEFAULT_CURSOR_RADIUS,
            slider_cursor_radius: DEFAULT_SLIDER_CURSOR_RADIUS,
            initial: Hsba::default(),
        }
    }
}

impl WheelConfig {
    /// Parse and validate a JSON configuration.
    ///
    /// # Errors
    /// [`WheelError::Parse`] for malformed JSON, or any validation error.
    pub fn from_json(json: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Serialize to pretty-printed JSON.
    ///
    /// # Errors
    /// Propagates `serde_json` failures.
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Check that every field is usable.
    ///
    /// # Errors
    /// The first field found out of range.
    pub fn validate(&self) -> Result<()> {
        let angle = self.slider_angle_degrees;
        if !angle.is_finite() {
            return Err(WheelError::NonFinite("slider_angle_degrees"));
        }
        if !(0.0..90.0).contains(&angle) {
            return Err(WheelError::InvalidSliderAngle(angle));
        }

        let initial = &self.initial;
        for (name, value) in [
            ("initial.hue", initial.hue()),
            ("initial.saturation", initial.saturation()),
            ("initial.brightness", initial.brightness()),
        ] {
            if !value.is_finite() {
                return Err(WheelError::NonFinite(name));
            }
        }
        if !(0.0..1.0).contains(&initial.hue()) {
            return Err(WheelError::InitialColorOutOfRange("hue must be in [0, 1)"));
        }
        if !(0.0..=1.0).contains(&initial.saturation()) {
            return Err(WheelError::InitialColorOutOfRange("saturation must be in [0, 1]"));
        }
        if !(0.0..=1.0).contains(&initial.brightness()) {
            return Err(WheelError::InitialColorOutOfRange("brightness must be in [0, 1]"));
        }
        Ok(())
    }

    /// Slider half-angle in radians.
    pub fn slider_angle(&self) -> f64 {
        self.slider_angle_degrees.to_radians()
    }
}
