//! Text measurement and glyph drawing.
//!
//! Label generation only needs two things from a font backend: how wide a
//! string is, and a way to put its glyphs on a [`RasterSurface`]. Both are
//! behind [`TextRaster`] so the scene code never touches font files.

use super::surface::RasterSurface;
use fontdue::{Font, FontSettings};
use layerstack_core::Rgba;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::info;

/// Font request for a label.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FontSpec {
    /// Family name, informational for backends that load a single file.
    pub family: String,
    /// Em size in pixels.
    pub size_px: f32,
    pub bold: bool,
}

impl Default for FontSpec {
    fn default() -> Self {
        Self {
            family: "Arial".to_string(),
            size_px: 24.0,
            bold: true,
        }
    }
}

impl fmt::Display for FontSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.bold {
            write!(f, "Bold {}px {}", self.size_px, self.family)
        } else {
            write!(f, "{}px {}", self.size_px, self.family)
        }
    }
}

/// Host text facility: measure and draw single-line text.
pub trait TextRaster {
    /// Advance width of `text` in pixels.
    fn measure(&self, text: &str, font: &FontSpec) -> f32;

    /// Draw `text` starting at `x` with its baseline at `baseline` (pixels from the top).
    fn fill_text(
        &self,
        surface: &mut RasterSurface,
        text: &str,
        font: &FontSpec,
        x: f32,
        baseline: f32,
        color: Rgba,
    );
}

/// Font-file-free fallback that draws every visible character as a solid block.
///
/// Deterministic across machines, which is what tests and headless runs want.
#[derive(Debug, Clone, Copy, Default)]
pub struct BlockRaster;

impl BlockRaster {
    fn advance(c: char, size: f32) -> f32 {
        if c.is_control() {
            0.0
        } else if c.is_whitespace() {
            size * 0.3
        } else {
            size * 0.6
        }
    }
}

impl TextRaster for BlockRaster {
    fn measure(&self, text: &str, font: &FontSpec) -> f32 {
        text.chars().map(|c| Self::advance(c, font.size_px)).sum()
    }

    fn fill_text(
        &self,
        surface: &mut RasterSurface,
        text: &str,
        font: &FontSpec,
        x: f32,
        baseline: f32,
        color: Rgba,
    ) {
        let size = font.size_px;
        let glyph_height = (size * 0.7).round().max(1.0) as u32;
        let glyph_width = (size * 0.5).round().max(1.0) as u32;
        let top = (baseline - size * 0.7).round() as i32;
        let mut cursor = x;
        for c in text.chars() {
            if !c.is_whitespace() && !c.is_control() {
                let left = (cursor + size * 0.05).round() as i32;
                surface.fill_rect(left, top, glyph_width, glyph_height, color);
            }
            cursor += Self::advance(c, size);
        }
    }
}

/// Errors raised while loading a font file.
#[derive(Debug, Error)]
pub enum FontError {
    #[error("failed to read font file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse font: {0}")]
    Parse(String),
}

/// Glyph shaping and rasterization through `fontdue`.
///
/// One font file backs every [`FontSpec`]; pick a bold face file when labels
/// are configured bold.
pub struct FontdueRaster {
    font: Font,
}

impl FontdueRaster {
    /// Parse font bytes (TTF/OTF).
    pub fn from_bytes(data: Vec<u8>) -> Result<Self, FontError> {
        let font = Font::from_bytes(data, FontSettings::default())
            .map_err(|e| FontError::Parse(e.to_string()))?;
        info!(name = font.name().unwrap_or("unnamed"), "Loaded label font");
        Ok(Self { font })
    }

    /// Load a font from a file.
    pub fn from_file(path: &Path) -> Result<Self, FontError> {
        let data = std::fs::read(path).map_err(|source| FontError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_bytes(data)
    }

    fn kern(&self, prev: Option<char>, c: char, size: f32) -> f32 {
        prev.and_then(|p| self.font.horizontal_kern(p, c, size))
            .unwrap_or(0.0)
    }
}

impl TextRaster for FontdueRaster {
    fn measure(&self, text: &str, font: &FontSpec) -> f32 {
        let mut width = 0.0;
        let mut prev = None;
        for c in text.chars() {
            width += self.kern(prev, c, font.size_px);
            width += self.font.metrics(c, font.size_px).advance_width;
            prev = Some(c);
        }
        width.max(0.0)
    }

    fn fill_text(
        &self,
        surface: &mut RasterSurface,
        text: &str,
        font: &FontSpec,
        x: f32,
        baseline: f32,
        color: Rgba,
    ) {
        let mut cursor = x;
        let mut prev = None;
        for c in text.chars() {
            cursor += self.kern(prev, c, font.size_px);
            let (metrics, bitmap) = self.font.rasterize(c, font.size_px);
            // fontdue reports ymin relative to the baseline, +Y up.
            let left = (cursor + metrics.xmin as f32).round() as i32;
            let top = (baseline - metrics.ymin as f32 - metrics.height as f32).round() as i32;
            for row in 0..metrics.height {
                for col in 0..metrics.width {
                    let coverage = bitmap[row * metrics.width + col];
                    if coverage == 0 {
                        continue;
                    }
                    surface.blend_pixel(
                        left + col as i32,
                        top + row as i32,
                        color,
                        coverage as f32 / 255.0,
                    );
                }
            }
            cursor += metrics.advance_width;
            prev = Some(c);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn font_spec_formats_like_css() {
        assert_eq!(FontSpec::default().to_string(), "Bold 24px Arial");
        let regular = FontSpec {
            family: "DejaVu Sans".to_string(),
            size_px: 18.0,
            bold: false,
        };
        assert_eq!(regular.to_string(), "18px DejaVu Sans");
    }

    #[test]
    fn block_raster_measures_fixed_advances() {
        let font = FontSpec::default();
        assert_eq!(BlockRaster.measure("", &font), 0.0);
        assert!((BlockRaster.measure("AB", &font) - 28.8).abs() < 1e-4);
        assert!((BlockRaster.measure("A B", &font) - 36.0).abs() < 1e-4);
        assert_eq!(BlockRaster.measure("\n", &font), 0.0);
    }

    #[test]
    fn block_raster_draws_above_baseline() {
        let font = FontSpec::default();
        let mut surface = RasterSurface::new(15, 33);
        BlockRaster.fill_text(&mut surface, "X", &font, 0.0, 24.0, Rgba::BLACK);
        // Glyph box covers x 1..13, y 7..24.
        assert_eq!(surface.pixel(5, 20), Some([0, 0, 0, 255]));
        assert_eq!(surface.pixel(5, 2), Some([0, 0, 0, 0]));
        assert_eq!(surface.pixel(5, 28), Some([0, 0, 0, 0]));
    }

    #[test]
    fn garbage_font_bytes_fail_to_parse() {
        let err = FontdueRaster::from_bytes(vec![0, 1, 2, 3]).err().unwrap();
        assert!(matches!(err, FontError::Parse(_)));
    }

    #[test]
    fn missing_font_file_is_io_error() {
        let err = FontdueRaster::from_file(Path::new("/no/such/font.ttf"))
            .err()
            .unwrap();
        assert!(matches!(err, FontError::Io { .. }));
    }
}
