//! Label rasterization

pub mod label_texture;
pub mod surface;
pub mod text_raster;

pub use label_texture::{
    generate_label, label_dimensions, LabelSprite, LabelStyle, LabelStyleError, LabelTexture,
    LABEL_HEIGHT_FACTOR, MAX_FONT_SIZE_PX,
};
pub use surface::RasterSurface;
pub use text_raster::{BlockRaster, FontError, FontSpec, FontdueRaster, TextRaster};
