//! Layer solids - one colored box per layer.

use super::{SceneComponent, Transform3D};
use crate::interaction::Aabb;
use glam::Vec3;
use layerstack_core::{LayerDescriptor, Rgb};

/// Surface parameters of a layer box.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SolidMaterial {
    /// Diffuse color.
    pub color: Rgb,
    /// Alpha applied to the whole solid.
    pub opacity: f32,
    /// PBR roughness.
    pub roughness: f32,
    /// PBR metalness.
    pub metalness: f32,
}

impl SolidMaterial {
    /// Slightly see-through, matte material in `color`.
    pub fn translucent(color: Rgb) -> Self {
        Self {
            color,
            opacity: 0.85,
            roughness: 0.7,
            metalness: 0.1,
        }
    }

    /// True when the renderer must blend this solid.
    pub fn is_transparent(&self) -> bool {
        self.opacity < 1.0
    }
}

/// Axis-aligned box standing for one layer of the model.
#[derive(Debug, Clone)]
pub struct LayerSolid {
    /// World transform; `scale` multiplies `size`
    pub transform: Transform3D,
    /// Box extents (width, height, depth)
    pub size: Vec3,
    pub material: SolidMaterial,
    /// Catalog color of the layer.
    pub original_color: Rgb,
    /// Layer this solid represents.
    pub layer: LayerDescriptor,
}

impl LayerSolid {
    /// Box of `size` centered at `center`, colored from the descriptor.
    pub fn new(center: Vec3, size: Vec3, layer: LayerDescriptor) -> Self {
        Self {
            transform: Transform3D::new(center),
            size,
            material: SolidMaterial::translucent(layer.color),
            original_color: layer.color,
            layer,
        }
    }

    /// World extents after scaling.
    pub fn extents(&self) -> Vec3 {
        self.size * self.transform.scale
    }

    /// Bounding box used for picking.
    pub fn aabb(&self) -> Aabb {
        Aabb::from_center_size(self.transform.position, self.extents())
    }

    /// Model matrix for a unit cube mesh.
    pub fn model_matrix(&self) -> glam::Mat4 {
        glam::Mat4::from_scale_rotation_translation(
            self.extents(),
            self.transform.rotation,
            self.transform.position,
        )
    }
}

impl SceneComponent for LayerSolid {
    fn position(&self) -> Vec3 {
        self.transform.position
    }
}
