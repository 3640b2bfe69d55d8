//! Picking layers with rays from the camera.

pub mod raycaster;

pub use raycaster::{raycast_billboard_quad, screen_to_ray, Aabb};
