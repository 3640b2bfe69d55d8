//! Colors as they appear in model catalogs and label styles.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Opaque 24-bit color stored as `0xRRGGBB`.
///
/// Serialized as a bare integer so catalogs can write `0xff6347` in TOML or
/// `16737095` in JSON.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Rgb(pub u32);

impl Rgb {
    /// Build from a packed hex value; bits above 24 are discarded.
    pub const fn from_hex(hex: u32) -> Self {
        Self(hex & 0x00ff_ffff)
    }

    /// Red, green and blue channels.
    pub const fn channels(self) -> [u8; 3] {
        [
            ((self.0 >> 16) & 0xff) as u8,
            ((self.0 >> 8) & 0xff) as u8,
            (self.0 & 0xff) as u8,
        ]
    }
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let [r, g, b] = self.channels();
        write!(f, "#{r:02x}{g:02x}{b:02x}")
    }
}

/// Canvas-style color: 8-bit channels plus a fractional alpha.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rgba {
    /// Red channel.
    pub r: u8,
    /// Green channel.
    pub g: u8,
    /// Blue channel.
    pub b: u8,
    /// Alpha in `0.0..=1.0`.
    pub a: f32,
}

impl Rgba {
    /// Opaque black, the default label ink.
    pub const BLACK: Self = Self::new(0, 0, 0, 1.0);

    /// Fully transparent white, the default label background.
    pub const TRANSPARENT: Self = Self::new(255, 255, 255, 0.0);

    /// Create a color; alpha is clamped when converted to pixels.
    pub const fn new(r: u8, g: u8, b: u8, a: f32) -> Self {
        Self { r, g, b, a }
    }

    /// Alpha clamped to `0.0..=1.0`, with NaN treated as transparent.
    pub fn alpha(&self) -> f32 {
        if self.a.is_nan() {
            0.0
        } else {
            self.a.clamp(0.0, 1.0)
        }
    }

    /// Non-premultiplied RGBA8.
    pub fn to_rgba8(&self) -> [u8; 4] {
        [self.r, self.g, self.b, (self.alpha() * 255.0).round() as u8]
    }
}

impl Default for Rgba {
    fn default() -> Self {
        Self::BLACK
    }
}

impl fmt::Display for Rgba {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "rgba({},{},{},{})", self.r, self.g, self.b, self.a)
    }
}
