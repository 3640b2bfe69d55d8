//! Ray tests against layer solids and label billboards

use glam::{Mat4, Vec2, Vec3};

/// Box aligned to the world axes, the pick volume of a layer solid.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Aabb {
    pub min: Vec3,
    pub max: Vec3,
}

impl Aabb {
    pub fn new(min: Vec3, max: Vec3) -> Self {
        Self { min, max }
    }

    pub fn from_center_size(center: Vec3, size: Vec3) -> Self {
        let half = size.abs() / 2.0;
        Self::new(center - half, center + half)
    }

    /// Slab test. Returns the entry distance, or the exit distance when the
    /// origin is inside the box.
    pub fn ray_intersection(&self, origin: Vec3, dir: Vec3) -> Option<f32> {
        let inv = dir.recip();
        let near = (self.min - origin) * inv;
        let far = (self.max - origin) * inv;

        let enter = near.min(far).max_element();
        let exit = near.max(far).min_element();
        if enter.is_nan() || exit.is_nan() || exit < 0.0 || enter > exit {
            return None;
        }
        Some(if enter < 0.0 { exit } else { enter })
    }
}

/// Unproject a viewport pixel (origin top-left) into a world-space ray.
pub fn screen_to_ray(
    screen_pos: (f32, f32),
    viewport: (u32, u32),
    view: &Mat4,
    projection: &Mat4,
) -> Option<(Vec3, Vec3)> {
    let (width, height) = viewport;
    if width == 0 || height == 0 {
        return None;
    }
    let size = Vec2::new(width as f32, height as f32);
    // Pixel rows grow downward, NDC y grows upward.
    let ndc = (Vec2::new(screen_pos.0, screen_pos.1) / size * 2.0 - Vec2::ONE) * Vec2::new(1.0, -1.0);

    let clip_to_world = (*projection * *view).inverse();
    let on_near = clip_to_world.project_point3(ndc.extend(0.0));
    let on_far = clip_to_world.project_point3(ndc.extend(1.0));
    let dir = (on_far - on_near).try_normalize()?;

    let eye = view.inverse().w_axis.truncate();
    Some((eye, dir))
}

/// Intersect a ray with a label quad whose normal points straight at `camera_pos`.
///
/// The quad's up edge follows world +Y, as when the camera is level. Returns
/// the ray parameter of the hit (world units for a unit direction).
pub fn raycast_billboard_quad(
    origin: Vec3,
    dir: Vec3,
    center: Vec3,
    (width, height): (f32, f32),
    camera_pos: Vec3,
) -> Option<f32> {
    let normal = (camera_pos - center).try_normalize()?;
    let right = Vec3::Y.cross(normal).try_normalize()?;
    let up = normal.cross(right);

    let facing = dir.dot(normal);
    if facing.abs() < 1e-4 {
        return None;
    }
    let t = (center - origin).dot(normal) / facing;
    if t < 0.0 {
        return None;
    }

    let position = origin + dir * t;
    let local = Vec2::new((position - center).dot(right), (position - center).dot(up));
    let half = Vec2::new(width, height) / 2.0;
    (local.x.abs() <= half.x && local.y.abs() <= half.y).then_some(t)
}
