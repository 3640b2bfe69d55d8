//! CPU raster surface with canvas-like fill semantics.

use image::{Rgba as Pixel, RgbaImage};
use layerstack_core::Rgba;

/// RGBA8 pixel buffer that starts fully transparent.
///
/// Every draw call composites source-over onto what is already there, so a
/// transparent fill leaves the surface untouched.
#[derive(Debug, Clone)]
pub struct RasterSurface {
    image: RgbaImage,
}

impl RasterSurface {
    /// Allocate a `width` x `height` transparent surface.
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            image: RgbaImage::new(width, height),
        }
    }

    pub fn width(&self) -> u32 {
        self.image.width()
    }

    pub fn height(&self) -> u32 {
        self.image.height()
    }

    /// Fill the rectangle at `(x, y)` of size `width` x `height`, clipped to the surface.
    pub fn fill_rect(&mut self, x: i32, y: i32, width: u32, height: u32, color: Rgba) {
        if color.alpha() <= 0.0 {
            return;
        }
        let x0 = x.max(0) as i64;
        let y0 = y.max(0) as i64;
        let x1 = (x as i64 + width as i64).min(self.width() as i64);
        let y1 = (y as i64 + height as i64).min(self.height() as i64);
        for py in y0..y1 {
            for px in x0..x1 {
                self.blend(px as u32, py as u32, color, 1.0);
            }
        }
    }

    /// Composite `color` at `(x, y)` weighted by `coverage` (0..=1); off-surface writes are dropped.
    pub fn blend_pixel(&mut self, x: i32, y: i32, color: Rgba, coverage: f32) {
        if x < 0 || y < 0 || x as u32 >= self.width() || y as u32 >= self.height() {
            return;
        }
        self.blend(x as u32, y as u32, color, coverage);
    }

    fn blend(&mut self, x: u32, y: u32, color: Rgba, coverage: f32) {
        let src_a = color.alpha() * coverage.clamp(0.0, 1.0);
        if src_a <= 0.0 {
            return;
        }
        let dst = self.image.get_pixel(x, y).0;
        let dst_a = dst[3] as f32 / 255.0;
        let out_a = src_a + dst_a * (1.0 - src_a);
        let mix = |s: u8, d: u8| -> u8 {
            let c = (s as f32 * src_a + d as f32 * dst_a * (1.0 - src_a)) / out_a;
            c.round().clamp(0.0, 255.0) as u8
        };
        let out = [
            mix(color.r, dst[0]),
            mix(color.g, dst[1]),
            mix(color.b, dst[2]),
            (out_a * 255.0).round() as u8,
        ];
        self.image.put_pixel(x, y, Pixel(out));
    }

    /// Pixel at `(x, y)` as RGBA8.
    pub fn pixel(&self, x: u32, y: u32) -> Option<[u8; 4]> {
        (x < self.width() && y < self.height()).then(|| self.image.get_pixel(x, y).0)
    }

    /// Consume the surface, yielding the image.
    pub fn into_image(self) -> RgbaImage {
        self.image
    }
}
