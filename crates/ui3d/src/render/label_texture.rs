//! Label texture generation.
//!
//! A label is rasterized on the fly: measure the text, allocate a surface
//! exactly that wide and `1.4 * font size` tall, paint the background, draw
//! the text left-aligned with its baseline one font size below the top, and
//! hand the pixels to a billboard sized through the shared [`WorldScale`].

use super::surface::RasterSurface;
use super::text_raster::{FontSpec, TextRaster};
use glam::Vec3;
use image::RgbaImage;
use layerstack_core::{Rgba, WorldScale};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use thiserror::Error;
use tracing::debug;

/// Surface height as a multiple of the font size; leaves room for ascenders and descenders.
pub const LABEL_HEIGHT_FACTOR: f32 = 1.4;

/// Largest accepted label font size in pixels.
pub const MAX_FONT_SIZE_PX: f32 = 512.0;

/// Label settings that cannot be rasterized.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum LabelStyleError {
    #[error("label font size must be in (0, 512] px (got {size})")]
    FontSize { size: f32 },
}

/// Font and colors used for every layer label.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LabelStyle {
    pub font: FontSpec,
    pub text_color: Rgba,
    /// Plate behind the text; transparent by default so labels float over the scene.
    pub background_color: Rgba,
}

impl Default for LabelStyle {
    fn default() -> Self {
        Self {
            font: FontSpec::default(),
            text_color: Rgba::BLACK,
            background_color: Rgba::TRANSPARENT,
        }
    }
}

impl LabelStyle {
    /// Reject font sizes that would produce an empty or unallocatable surface.
    pub fn validate(&self) -> Result<(), LabelStyleError> {
        let size = self.font.size_px;
        if size.is_finite() && size > 0.0 && size <= MAX_FONT_SIZE_PX {
            Ok(())
        } else {
            Err(LabelStyleError::FontSize { size })
        }
    }
}

/// Immutable rasterized label.
#[derive(Debug, Clone, PartialEq)]
pub struct LabelTexture {
    text: String,
    image: RgbaImage,
}

impl LabelTexture {
    /// Source text.
    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn width(&self) -> u32 {
        self.image.width()
    }

    pub fn height(&self) -> u32 {
        self.image.height()
    }

    /// Tightly packed, non-premultiplied RGBA8 pixels, row-major from the top.
    pub fn pixels(&self) -> &[u8] {
        self.image.as_raw()
    }

    pub fn image(&self) -> &RgbaImage {
        &self.image
    }
}

/// A label texture plus the world scale of the billboard that shows it.
#[derive(Debug, Clone)]
pub struct LabelSprite {
    pub texture: Arc<LabelTexture>,
    /// `(width, height, 1)` in world units.
    pub scale: Vec3,
}

/// Surface size for a measured text width.
///
/// Fractional pixels are truncated. Zero-width and non-finite measurements
/// still get a 1px-wide surface so the result is always uploadable.
pub fn label_dimensions(measured_width: f32, font_size_px: f32) -> (u32, u32) {
    let clamp = |v: f32| -> u32 {
        if v.is_finite() && v >= 1.0 {
            v.floor().min(u32::MAX as f32) as u32
        } else {
            1
        }
    };
    (clamp(measured_width), clamp(font_size_px * LABEL_HEIGHT_FACTOR))
}

/// Rasterize `text` with `style` and size its billboard through `scale`.
pub fn generate_label(
    raster: &dyn TextRaster,
    text: &str,
    style: &LabelStyle,
    scale: WorldScale,
) -> LabelSprite {
    let font = &style.font;
    let measured = raster.measure(text, font);
    let (width, height) = label_dimensions(measured, font.size_px);

    let mut surface = RasterSurface::new(width, height);
    surface.fill_rect(0, 0, width, height, style.background_color);
    raster.fill_text(&mut surface, text, font, 0.0, font.size_px, style.text_color);

    let sprite_scale = Vec3::new(
        scale.to_world(width as f32),
        scale.to_world(height as f32),
        1.0,
    );
    debug!(
        text,
        font = %font,
        measured,
        width,
        height,
        "Generated label texture"
    );

    LabelSprite {
        texture: Arc::new(LabelTexture {
            text: text.to_string(),
            image: surface.into_image(),
        }),
        scale: sprite_scale,
    }
}
