//! Errors raised while loading or validating a [`WheelConfig`](crate::config::WheelConfig).
//!
//! Interactive operations never fail: setters clamp and unknown listeners
//! are ignored. Only host-supplied configuration is rejected.

/// Errors that can occur when building a wheel from configuration.
#[derive(Debug, thiserror::Error)]
pub enum WheelError {
    #[error("slider angle must be in [0, 90) degrees, got {0}")]
    InvalidSliderAngle(f64),

    #[error("config field `{0}` is not a finite number")]
    NonFinite(&'static str),

    #[error("initial color out of range: {0}")]
    InitialColorOutOfRange(&'static str),

    #[error("failed to parse wheel config: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Crate-wide result alias.
pub type Result<T> = std::result::Result<T, WheelError>;
