//! Packed 32-bit ARGB colors.
//!
//! ```text
//!   bits 31‥24  alpha
//!   bits 23‥16  red
//!   bits 15‥8   green
//!   bits  7‥0   blue
//! ```

use std::fmt;

use serde::{Deserialize, Serialize};

const SHIFT_ALPHA: u32 = 24;
const SHIFT_RED: u32 = 16;
const SHIFT_GREEN: u32 = 8;
const SHIFT_BLUE: u32 = 0;

/// Pack four channels into one ARGB word.
pub const fn pack_argb(red: u8, green: u8, blue: u8, alpha: u8) -> u32 {
    ((alpha as u32) << SHIFT_ALPHA)
        | ((red as u32) << SHIFT_RED)
        | ((green as u32) << SHIFT_GREEN)
        | ((blue as u32) << SHIFT_BLUE)
}

/// Split an ARGB word into `(red, green, blue, alpha)`.
pub const fn unpack_argb(value: u32) -> (u8, u8, u8, u8) {
    (
        (value >> SHIFT_RED) as u8,
        (value >> SHIFT_GREEN) as u8,
        (value >> SHIFT_BLUE) as u8,
        (value >> SHIFT_ALPHA) as u8,
    )
}

/// A color in packed ARGB form.
#[repr(transparent)]
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Default,
    Serialize,
    Deserialize,
    bytemuck::Pod,
    bytemuck::Zeroable,
)]
#[serde(transparent)]
pub struct Argb(pub u32);

impl Argb {
    /// Fully transparent black.
    pub const TRANSPARENT: Self = Self(0x0000_0000);
    /// Opaque black.
    pub const BLACK: Self = Self(0xFF00_0000);
    /// Opaque white.
    pub const WHITE: Self = Self(0xFFFF_FFFF);
    /// Opaque light gray, the slider cursor halo.
    pub const LIGHT_GRAY: Self = Self(0xFFC0_C0C0);
    /// Opaque mid gray, the slider cursor core.
    pub const GRAY: Self = Self(0xFF80_8080);
    /// Opaque dark gray used for the wheel border.
    pub const BORDER: Self = Self(0xFF30_3030);

    /// Build from individual channels.
    pub const fn new(red: u8, green: u8, blue: u8, alpha: u8) -> Self {
        Self(pack_argb(red, green, blue, alpha))
    }

    /// Opaque gray with the given intensity.
    pub const fn gray(level: u8) -> Self {
        Self::new(level, level, level, 255)
    }

    pub const fn red(self) -> u8 {
        unpack_argb(self.0).0
    }

    pub const fn green(self) -> u8 {
        unpack_argb(self.0).1
    }

    pub const fn blue(self) -> u8 {
        unpack_argb(self.0).2
    }

    pub const fn alpha(self) -> u8 {
        unpack_argb(self.0).3
    }

    /// Channels in `[r, g, b, a]` byte order, as image buffers expect.
    pub const fn to_rgba8(self) -> [u8; 4] {
        let (r, g, b, a) = unpack_argb(self.0);
        [r, g, b, a]
    }
}

impl From<u32> for Argb {
    fn from(value: u32) -> Self {
        Self(value)
    }
}

impl From<Argb> for u32 {
    fn from(value: Argb) -> Self {
        value.0
    }
}

impl fmt::Display for Argb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:08X}", self.0)
    }
}
