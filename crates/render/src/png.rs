use anyhow::{Context, Result};
use image::codecs::png::{CompressionType, FilterType, PngEncoder};
use image::{ExtendedColorType, ImageEncoder};
use std::path::Path;

/// Write tightly packed RGBA8 pixels to `path` as PNG.
pub fn write_png(path: &Path, size: (u32, u32), rgba: &[u8]) -> Result<()> {
    let (width, height) = size;
    let expected = width as usize * height as usize * 4;
    if rgba.len() != expected {
        anyhow::bail!(
            "pixel buffer is {} bytes, expected {expected} for {width}x{height}",
            rgba.len()
        );
    }
    let file = std::fs::File::create(path)
        .with_context(|| format!("failed to create {}", path.display()))?;
    let encoder = PngEncoder::new_with_quality(file, CompressionType::Fast, FilterType::NoFilter);
    encoder
        .write_image(rgba, width, height, ExtendedColorType::Rgba8)
        .with_context(|| format!("failed to write {}", path.display()))?;
    tracing::debug!(path = %path.display(), width, height, "Wrote png");
    Ok(())
}
