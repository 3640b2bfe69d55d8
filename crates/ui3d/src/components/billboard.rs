//! Camera-facing label quads.

use super::{SceneComponent, Transform3D};
use crate::render::{LabelSprite, LabelTexture};
use glam::{Mat3, Mat4, Quat, Vec3};
use std::sync::Arc;

/// A unit quad carrying a label texture, stretched to the label's world size.
#[derive(Debug, Clone)]
pub struct Billboard {
    /// Position is the quad center; scale is `(width, height, 1)` in world units.
    pub transform: Transform3D,
    pub texture: Arc<LabelTexture>,
}

/// Rotation taking the quad's +Z normal to `normal` with its +Y toward `up`.
fn facing(normal: Vec3, up: Vec3) -> Option<Quat> {
    let normal = normal.try_normalize()?;
    let right = up.cross(normal).try_normalize()?;
    let up = normal.cross(right);
    Some(Quat::from_mat3(&Mat3::from_cols(right, up, normal)))
}

impl Billboard {
    /// Place `sprite` with its center at `position`.
    pub fn from_sprite(position: Vec3, sprite: LabelSprite) -> Self {
        Self {
            transform: Transform3D::new(position).with_scale(sprite.scale),
            texture: sprite.texture,
        }
    }

    pub fn text(&self) -> &str {
        self.texture.text()
    }

    /// World width of the quad.
    pub fn width(&self) -> f32 {
        self.transform.scale.x
    }

    /// World height of the quad.
    pub fn height(&self) -> f32 {
        self.transform.scale.y
    }

    /// Model matrix turning the quad's normal straight at the camera.
    ///
    /// When the camera sits on the quad or looks along `camera_up`, the quad
    /// keeps its unrotated transform.
    pub fn calculate_orientation(&self, camera_position: Vec3, camera_up: Vec3) -> Mat4 {
        match facing(camera_position - self.transform.position, camera_up) {
            Some(rotation) => Mat4::from_scale_rotation_translation(
                self.transform.scale,
                rotation,
                self.transform.position,
            ),
            None => self.transform.matrix(),
        }
    }
}

impl SceneComponent for Billboard {
    fn position(&self) -> Vec3 {
        self.transform.position
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::{generate_label, BlockRaster, LabelStyle};
    use layerstack_core::WorldScale;

    fn sprite(text: &str) -> LabelSprite {
        generate_label(&BlockRaster, text, &LabelStyle::default(), WorldScale::default())
    }

    #[test]
    fn sprite_sets_position_text_and_size() {
        let label = sprite("Session");
        let scale = label.scale;
        let billboard = Billboard::from_sprite(Vec3::new(0.0, 1.2, 2.1), label);
        assert_eq!(billboard.position(), Vec3::new(0.0, 1.2, 2.1));
        assert_eq!(billboard.text(), "Session");
        assert_eq!((billboard.width(), billboard.height()), (scale.x, scale.y));
        assert_eq!(billboard.transform.scale.z, 1.0);
    }

    #[test]
    fn quad_turns_toward_the_camera() {
        let billboard = Billboard::from_sprite(Vec3::new(0.0, 0.0, 2.0), sprite("A"));
        let matrix = billboard.calculate_orientation(Vec3::new(10.0, 0.0, 2.0), Vec3::Y);
        let normal = matrix.transform_vector3(Vec3::Z).normalize();
        assert!((normal - Vec3::X).length() < 1e-4);
    }

    #[test]
    fn camera_straight_above_keeps_fixed_transform() {
        let billboard = Billboard::from_sprite(Vec3::new(1.0, 2.0, 3.0), sprite("A"));
        let matrix = billboard.calculate_orientation(Vec3::new(1.0, 9.0, 3.0), Vec3::Y);
        assert_eq!(matrix, billboard.transform.matrix());
    }
}
