//! Perspective camera that looks at the layer stack.

use glam::{Mat4, Vec3};
use serde::{Deserialize, Serialize};

/// Tunable camera parameters, loaded from config.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CameraSettings {
    /// Vertical field of view in degrees.
    pub fov_degrees: f32,
    /// Near clip plane.
    pub near: f32,
    /// Far clip plane.
    pub far: f32,
    /// Distance from the stack along +Z.
    pub distance: f32,
}

impl Default for CameraSettings {
    fn default() -> Self {
        Self {
            fov_degrees: 75.0,
            near: 0.1,
            far: 1000.0,
            distance: 10.0,
        }
    }
}

/// Look-at perspective camera.
#[derive(Debug, Clone)]
pub struct Camera {
    /// Eye position.
    pub position: Vec3,
    /// Look-at point; framing keeps it level with the eye.
    pub target: Vec3,
    /// Vertical field of view, radians.
    pub fov: f32,
    /// Viewport width over height.
    pub aspect: f32,
    /// Near clip distance.
    pub near: f32,
    /// Far clip distance.
    pub far: f32,
}

impl Camera {
    /// Create a camera with default settings.
    pub fn new(aspect: f32) -> Self {
        Self::from_settings(&CameraSettings::default(), aspect)
    }

    /// Create a camera looking down -Z at the origin from `settings.distance`.
    pub fn from_settings(settings: &CameraSettings, aspect: f32) -> Self {
        Self {
            position: Vec3::new(0.0, 0.0, settings.distance),
            target: Vec3::ZERO,
            fov: settings.fov_degrees.to_radians(),
            aspect,
            near: settings.near,
            far: settings.far,
        }
    }

    /// Place the camera at height `y`, `distance` in front of the stack, looking straight at it.
    pub fn frame_height(&mut self, y: f32, distance: f32) {
        self.position = Vec3::new(0.0, y, distance);
        self.target = Vec3::new(0.0, y, 0.0);
    }

    /// View direction.
    pub fn forward(&self) -> Vec3 {
        (self.target - self.position).normalize_or_zero()
    }

    /// Screen-right direction.
    pub fn right(&self) -> Vec3 {
        self.forward().cross(Vec3::Y).normalize_or_zero()
    }

    /// Screen-up direction.
    pub fn up(&self) -> Vec3 {
        self.right().cross(self.forward()).normalize_or_zero()
    }

    /// Right-handed world-to-view transform.
    pub fn view_matrix(&self) -> Mat4 {
        Mat4::look_at_rh(self.position, self.target, Vec3::Y)
    }

    /// Right-handed perspective projection with a `0..1` depth range.
    pub fn projection_matrix(&self) -> Mat4 {
        Mat4::perspective_rh(self.fov, self.aspect, self.near, self.far)
    }

    /// Clip-from-world transform handed to renderers.
    pub fn view_projection_matrix(&self) -> Mat4 {
        self.projection_matrix() * self.view_matrix()
    }

    /// Track a new viewport width over height.
    pub fn set_aspect(&mut self, aspect: f32) {
        self.aspect = aspect;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_camera_looks_down_negative_z() {
        let camera = Camera::new(16.0 / 9.0);

        // Default camera looks down -Z at the origin
        let forward = camera.forward();
        assert!((forward.z + 1.0).abs() < 0.01);
        assert!(camera.right().x > 0.99);
        assert!(camera.up().y > 0.99);
        assert!((camera.fov - 75f32.to_radians()).abs() < 1e-6);
    }

    #[test]
    fn framing_keeps_the_view_level() {
        let mut camera = Camera::new(1.0);
        camera.frame_height(2.1, 10.0);
        assert_eq!(camera.position, Vec3::new(0.0, 2.1, 10.0));
        assert_eq!(camera.target, Vec3::new(0.0, 2.1, 0.0));
        assert!((camera.forward().z + 1.0).abs() < 1e-6);
    }

    #[test]
    fn view_projection_maps_target_to_screen_center() {
        let camera = Camera::new(16.0 / 9.0);
        let vp = camera.view_projection_matrix();

        assert!(vp.determinant().abs() > 0.0);

        // The look-at target projects to the center of clip space
        let ndc = vp.project_point3(camera.target);
        assert!(ndc.x.abs() < 1e-5 && ndc.y.abs() < 1e-5);
    }
}
