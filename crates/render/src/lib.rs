#![warn(missing_docs)]
//! Camera, lighting and image output for the layer viewer.
//!
//! The live render loop belongs to the host; this crate only carries the
//! pieces the scene session needs to describe a frame and the PNG writer the
//! CLI uses to dump label textures.

mod camera;
mod environment;
mod png;

pub use camera::{Camera, CameraSettings};
pub use environment::{Light, SceneEnvironment};
pub use png::write_png;
