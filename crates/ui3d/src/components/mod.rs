//! Scene objects: layer solids and camera-facing label billboards.

pub mod billboard;
pub mod solid;

pub use billboard::Billboard;
pub use solid::{LayerSolid, SolidMaterial};

use glam::{Mat4, Quat, Vec3};

/// Shared accessors for anything placed in the scene.
pub trait SceneComponent {
    /// Center in world space.
    fn position(&self) -> Vec3;
}

/// Placement of a unit mesh: scale, then rotate, then translate.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Transform3D {
    pub position: Vec3,
    pub rotation: Quat,
    pub scale: Vec3,
}

impl Transform3D {
    pub fn new(position: Vec3) -> Self {
        Self {
            position,
            rotation: Quat::IDENTITY,
            scale: Vec3::ONE,
        }
    }

    pub fn with_scale(mut self, scale: Vec3) -> Self {
        self.scale = scale;
        self
    }

    pub fn matrix(&self) -> Mat4 {
        Mat4::from_scale_rotation_translation(self.scale, self.rotation, self.position)
    }
}
