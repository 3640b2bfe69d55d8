//! Property-based tests for label texture generation
//!
//! Validates label invariants:
//! - Appending characters never makes a label narrower
//! - Height depends only on the font size
//! - Sprite scale is the texture size times the world scale
//! - Any string (including empty) produces a valid texture

use layerstack_core::WorldScale;
use layerstack_ui3d::{generate_label, BlockRaster, FontSpec, LabelStyle, LABEL_HEIGHT_FACTOR};
use proptest::prelude::*;

fn style(size_px: f32) -> LabelStyle {
    LabelStyle {
        font: FontSpec {
            size_px,
            ..Default::default()
        },
        ..Default::default()
    }
}

proptest! {
    /// Property: Width is monotonic in text length
    #[test]
    fn width_is_monotonic_in_length(
        text in "[A-Za-z0-9 /()-]{0,24}",
        suffix in "[A-Za-z0-9]{1,8}",
        size in 8.0f32..64.0,
    ) {
        let style = style(size);
        let short = generate_label(&BlockRaster, &text, &style, WorldScale::default());
        let long = generate_label(&BlockRaster, &format!("{text}{suffix}"), &style, WorldScale::default());
        prop_assert!(
            long.texture.width() >= short.texture.width(),
            "{:?} is {}px but {:?} is {}px",
            text, short.texture.width(), format!("{text}{suffix}"), long.texture.width()
        );
    }

    /// Property: Height is the truncated font size times the height factor
    #[test]
    fn height_depends_only_on_font_size(
        text in ".{0,16}",
        size in 1.0f32..128.0,
    ) {
        let sprite = generate_label(&BlockRaster, &text, &style(size), WorldScale::default());
        let expected = ((size * LABEL_HEIGHT_FACTOR).floor() as u32).max(1);
        prop_assert_eq!(sprite.texture.height(), expected);
    }

    /// Property: Every label is a non-empty, fully allocated RGBA8 image
    #[test]
    fn textures_are_always_valid(
        text in ".{0,32}",
        scale in 0.001f32..1.0,
    ) {
        let sprite = generate_label(&BlockRaster, &text, &style(24.0), WorldScale::new(scale));
        let texture = &sprite.texture;
        prop_assert!(texture.width() >= 1 && texture.height() >= 1);
        prop_assert_eq!(
            texture.pixels().len(),
            texture.width() as usize * texture.height() as usize * 4
        );
        prop_assert!((sprite.scale.x - scale * texture.width() as f32).abs() < 1e-3);
        prop_assert!((sprite.scale.y - scale * texture.height() as f32).abs() < 1e-3);
        prop_assert_eq!(sprite.scale.z, 1.0);
        prop_assert_eq!(texture.text(), text.as_str());
    }
}
