//! Fixed background and lighting for the layer scene.

use glam::Vec3;
use layerstack_core::Rgb;

/// A light with a color and intensity.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Light {
    /// Light color.
    pub color: Rgb,
    /// Scalar intensity.
    pub intensity: f32,
}

/// Background color plus one ambient and one directional light.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SceneEnvironment {
    /// Clear color behind the stack.
    pub background: Rgb,
    /// Uniform fill light.
    pub ambient: Light,
    /// Key light.
    pub directional: Light,
    /// Position the directional light shines from, towards the origin.
    pub directional_position: Vec3,
}

impl Default for SceneEnvironment {
    fn default() -> Self {
        Self {
            background: Rgb(0x222222),
            ambient: Light {
                color: Rgb(0xffffff),
                intensity: 0.7,
            },
            directional: Light {
                color: Rgb(0xffffff),
                intensity: 0.9,
            },
            directional_position: Vec3::new(5.0, 10.0, 7.5),
        }
    }
}

impl SceneEnvironment {
    /// Unit vector the directional light travels along, toward the origin.
    pub fn light_direction(&self) -> Vec3 {
        (-self.directional_position).normalize_or_zero()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_light_points_from_its_position_to_the_origin() {
        let env = SceneEnvironment::default();
        let dir = env.light_direction();
        assert!((dir.length() - 1.0).abs() < 1e-5);
        assert!((dir + env.directional_position.normalize()).length() < 1e-5);
        assert_eq!(env.background, Rgb(0x222222));
    }
}
